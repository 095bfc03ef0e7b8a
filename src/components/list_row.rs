//! Generic person row: avatar, name, optional date, trailing actions.
//!
//! DESIGN
//! ======
//! Friend rows and request rows render through this one shape so the list
//! screens stay visually uniform; callers only decide the text and which
//! buttons to attach.

use leptos::prelude::*;

use super::button::{Button, ButtonTheme};

/// One trailing action rendered as a themed button.
#[derive(Clone)]
pub struct RowAction {
    /// Button text.
    pub label: String,
    /// Visual emphasis.
    pub theme: ButtonTheme,
    /// Invoked when the button is pressed.
    pub on_select: Callback<()>,
}

/// A single row in a people list.
#[component]
pub fn ListRow(
    /// Avatar image URL.
    profile_src: String,
    /// Display name of the person.
    name: String,
    /// Secondary line, e.g. when the friendship was made.
    #[prop(optional)]
    date: Option<String>,
    #[prop(default = Vec::new())] actions: Vec<RowAction>,
) -> impl IntoView {
    view! {
        <div class="list-row">
            <img class="list-row__avatar" src=profile_src alt=""/>
            <div class="list-row__body">
                <span class="list-row__name">{name}</span>
                {date.map(|d| view! { <span class="list-row__date">{d}</span> })}
            </div>
            <div class="list-row__actions">
                {actions
                    .into_iter()
                    .map(|action| {
                        view! {
                            <Button label=action.label theme=action.theme on_press=action.on_select/>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
