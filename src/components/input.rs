//! Shared text input primitive bound to a string signal.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use leptos::prelude::*;

/// Layout footprint of an input field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputSize {
    /// Standalone form field.
    Large,
    /// Compact inline field.
    Small,
    /// Stretches with its container.
    Responsive,
    /// Unstyled baseline width.
    #[default]
    Default,
}

impl InputSize {
    /// BEM modifier class for this size.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Large => "input--large",
            Self::Small => "input--small",
            Self::Responsive => "input--responsive",
            Self::Default => "input--default",
        }
    }
}

/// A controlled text input; edits write straight back to `value`.
#[component]
pub fn Input(
    /// Signal the field reads from and writes to.
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] size: InputSize,
) -> impl IntoView {
    view! {
        <input
            class=format!("input {}", size.class())
            type="text"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
