//! Row renderer for an established friend.
//!
//! DESIGN
//! ======
//! The row itself performs no navigation or HTTP. It reports a command and
//! the page decides what that means, which keeps row rendering testable and
//! reusable between the list tab and search results.

#[cfg(test)]
#[path = "friend_item_test.rs"]
mod friend_item_test;

use leptos::prelude::*;

use super::button::ButtonTheme;
use super::list_row::{ListRow, RowAction};
use crate::net::types::Friend;
use crate::util::format::format_timestamp;

/// What a friend row asks its owner to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FriendCommand {
    /// Open the friend's profile.
    Visit,
    /// Remove the friendship.
    Delete,
}

/// Action verbs offered on every friend row.
fn row_actions() -> Vec<(&'static str, ButtonTheme, FriendCommand)> {
    vec![
        ("Visit", ButtonTheme::Primary, FriendCommand::Visit),
        ("Delete", ButtonTheme::Secondary, FriendCommand::Delete),
    ]
}

/// One established friend with visit and delete actions.
#[component]
pub fn FriendItem(
    friend: Friend,
    /// Receives the friend id and the chosen command.
    on_command: Callback<(String, FriendCommand)>,
) -> impl IntoView {
    let date = format_timestamp(&friend.created_at);
    let actions = row_actions()
        .into_iter()
        .map(|(label, theme, command)| RowAction {
            label: label.to_owned(),
            theme,
            on_select: Callback::new({
                let id = friend.friend_id.clone();
                move |()| on_command.run((id.clone(), command))
            }),
        })
        .collect::<Vec<_>>();

    view! {
        <ListRow
            profile_src=friend.friend_profile_image
            name=friend.friend_name
            date=date
            actions=actions
        />
    }
}
