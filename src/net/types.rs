//! Wire DTOs for the friends REST boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the server payloads one-to-one so serde stays
//! declarative. The request union is carried as an explicit enum in the
//! client; the structural sent/received discrimination happens once, at the
//! deserialization boundary, instead of leaking field-presence checks into
//! rendering code.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An established friendship as returned by `/api/friends`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    /// Unique identifier of the befriended user.
    pub friend_id: String,
    /// Display name.
    pub friend_name: String,
    /// Avatar image URL.
    pub friend_profile_image: String,
    /// ISO 8601 timestamp of when the friendship was created.
    pub created_at: String,
}

/// A friend request this user sent to someone else.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentRequest {
    /// Unique request identifier.
    pub id: String,
    /// Display name of the user the request was sent to.
    pub receiver_name: String,
    /// Avatar image URL of the other party.
    pub friend_profile_image: String,
    /// Request lifecycle status (e.g. `"pending"`).
    pub status: String,
}

/// A friend request someone else sent to this user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedRequest {
    /// Unique request identifier.
    pub id: String,
    /// Display name of the user who sent the request.
    ///
    /// Defaults to empty for payloads that carry neither party name; such
    /// records are still rendered rather than failing the whole list.
    #[serde(default)]
    pub requester_name: String,
    /// Avatar image URL of the other party.
    pub friend_profile_image: String,
    /// Request lifecycle status (e.g. `"pending"`).
    pub status: String,
}

/// Direction of a friend request relative to the current user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestDirection {
    /// Sent by this user; awaiting the other party.
    Sent,
    /// Sent to this user; awaiting a local decision.
    Received,
}

impl RequestDirection {
    /// `true` for requests this user sent.
    #[must_use]
    pub fn is_sent(self) -> bool {
        matches!(self, Self::Sent)
    }

    /// Structural classification of a raw payload: a defined `receiver_name`
    /// marks a sent request, anything else is treated as received. A record
    /// carrying neither party name still classifies, as received.
    fn of(raw: &RawFriendRequest) -> Self {
        if raw.receiver_name.is_some() {
            Self::Sent
        } else {
            Self::Received
        }
    }
}

/// A friend request of either direction.
///
/// The wire carries the two shapes without a tag; deserialization routes
/// through [`RawFriendRequest`] so the discrimination rule lives in exactly
/// one place. Serialization flattens back to the variant's wire shape.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawFriendRequest")]
pub enum FriendRequest {
    /// Outbound request (has `receiver_name`).
    Sent(SentRequest),
    /// Inbound request (has `requester_name`, or no party name at all).
    Received(ReceivedRequest),
}

impl FriendRequest {
    /// Unique request identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Sent(r) => &r.id,
            Self::Received(r) => &r.id,
        }
    }

    /// Which way the request travels.
    #[must_use]
    pub fn direction(&self) -> RequestDirection {
        match self {
            Self::Sent(_) => RequestDirection::Sent,
            Self::Received(_) => RequestDirection::Received,
        }
    }

    /// Name of the other party: receiver for sent requests, requester for
    /// received ones.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Sent(r) => &r.receiver_name,
            Self::Received(r) => &r.requester_name,
        }
    }

    /// Avatar image URL of the other party.
    #[must_use]
    pub fn profile_image(&self) -> &str {
        match self {
            Self::Sent(r) => &r.friend_profile_image,
            Self::Received(r) => &r.friend_profile_image,
        }
    }

    /// Request lifecycle status.
    #[must_use]
    pub fn status(&self) -> &str {
        match self {
            Self::Sent(r) => &r.status,
            Self::Received(r) => &r.status,
        }
    }
}

impl Serialize for FriendRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Sent(r) => r.serialize(serializer),
            Self::Received(r) => r.serialize(serializer),
        }
    }
}

/// Untyped carrier matching either request shape on the wire.
#[derive(Deserialize)]
struct RawFriendRequest {
    id: String,
    #[serde(default)]
    receiver_name: Option<String>,
    #[serde(default)]
    requester_name: Option<String>,
    friend_profile_image: String,
    status: String,
}

impl From<RawFriendRequest> for FriendRequest {
    fn from(raw: RawFriendRequest) -> Self {
        match RequestDirection::of(&raw) {
            RequestDirection::Sent => Self::Sent(SentRequest {
                id: raw.id,
                receiver_name: raw.receiver_name.unwrap_or_default(),
                friend_profile_image: raw.friend_profile_image,
                status: raw.status,
            }),
            RequestDirection::Received => Self::Received(ReceivedRequest {
                id: raw.id,
                requester_name: raw.requester_name.unwrap_or_default(),
                friend_profile_image: raw.friend_profile_image,
                status: raw.status,
            }),
        }
    }
}

/// Why a collection fetch or mutation failed.
///
/// Carried in [`crate::net::hooks::CollectionState`] so tab bodies can show
/// the failure instead of silently rendering nothing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success HTTP status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The request never completed (offline, DNS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Called outside the browser; server-side rendering has no live API.
    #[error("not available on server")]
    Unavailable,
}
