//! Local UI chrome state for the friends page.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (which tab is showing) out of the
//! fetched collections in `net::hooks`, so tab switching never forces a
//! refetch.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs available on the friends page. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FriendsTab {
    /// Name search across established friends.
    Search,
    /// Established friendships.
    #[default]
    Friends,
    /// Inbound requests awaiting a local decision.
    Received,
    /// Outbound requests awaiting the other party.
    Sent,
}
