//! Shared button primitive with theme and size tokens.
//!
//! DESIGN
//! ======
//! Every actionable control on the friends screens goes through this one
//! component so the primary/secondary visual language stays consistent.
//! Tokens map to BEM modifier classes; styling itself lives in CSS.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

/// Visual emphasis of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonTheme {
    /// Main action of a row or form.
    #[default]
    Primary,
    /// Supporting or destructive-adjacent action.
    Secondary,
}

impl ButtonTheme {
    /// BEM modifier class for this theme.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn--primary",
            Self::Secondary => "btn--secondary",
        }
    }
}

/// Layout footprint of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Compact, for inline row actions.
    #[default]
    Small,
    /// Standalone form action.
    Large,
    /// Full-width block action.
    Long,
    /// Stretches with its container.
    Responsive,
}

impl ButtonSize {
    /// BEM modifier class for this size.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Small => "btn--small",
            Self::Large => "btn--large",
            Self::Long => "btn--long",
            Self::Responsive => "btn--responsive",
        }
    }
}

/// A themed push button.
#[component]
pub fn Button(
    /// Visible button text.
    label: String,
    #[prop(optional)] theme: ButtonTheme,
    #[prop(optional)] size: ButtonSize,
    /// Invoked on click.
    on_press: Callback<()>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <button
            class=format!("btn {} {}", theme.class(), size.class())
            disabled=disabled
            on:click=move |_| on_press.run(())
        >
            {label}
        </button>
    }
}
