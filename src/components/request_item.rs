//! Row renderer for a friend request of either direction.
//!
//! DESIGN
//! ======
//! One component covers both feeds. The direction decided at the wire
//! boundary picks the action verbs here, so the sent and received tabs can
//! render a mixed feed without re-inspecting payload fields.

#[cfg(test)]
#[path = "request_item_test.rs"]
mod request_item_test;

use leptos::prelude::*;

use super::button::ButtonTheme;
use super::list_row::{ListRow, RowAction};
use crate::net::types::{FriendRequest, RequestDirection};

/// What a request row asks its owner to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestCommand {
    /// Approve an inbound request.
    Accept,
    /// Decline an inbound request.
    Reject,
    /// Withdraw an outbound request.
    Cancel,
}

/// Action verbs offered for a request, keyed by direction.
fn actions_for(direction: RequestDirection) -> Vec<(&'static str, ButtonTheme, RequestCommand)> {
    match direction {
        RequestDirection::Sent => vec![("Cancel", ButtonTheme::Primary, RequestCommand::Cancel)],
        RequestDirection::Received => vec![
            ("Accept", ButtonTheme::Primary, RequestCommand::Accept),
            ("Reject", ButtonTheme::Secondary, RequestCommand::Reject),
        ],
    }
}

/// One pending request with direction-appropriate actions.
#[component]
pub fn RequestItem(
    request: FriendRequest,
    /// Receives the request id and the chosen command.
    on_command: Callback<(String, RequestCommand)>,
) -> impl IntoView {
    let actions = actions_for(request.direction())
        .into_iter()
        .map(|(label, theme, command)| RowAction {
            label: label.to_owned(),
            theme,
            on_select: Callback::new({
                let id = request.id().to_owned();
                move |()| on_command.run((id.clone(), command))
            }),
        })
        .collect::<Vec<_>>();

    view! {
        <ListRow
            profile_src=request.profile_image().to_owned()
            name=request.display_name().to_owned()
            date=request.status().to_owned()
            actions=actions
        />
    }
}
