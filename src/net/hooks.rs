//! Signal-backed fetch state for the three friends collections.
//!
//! DESIGN
//! ======
//! Each collection (friends, sent requests, received requests) lives in its
//! own `RwSignal<CollectionState<_>>` owned by the page that calls the
//! constructor. A refresh fires the HTTP call and folds the outcome back
//! into the same signal, so views only ever derive from one source of truth
//! per collection. The `loading` flag is the caller's to set: constructors
//! and retry paths flag it before fetching, background refreshes leave it
//! alone so already-rendered rows do not flash back to the loading body.
//! On the server the fetch never runs and the state stays `loading`, which
//! renders as the loading body until hydration takes over.

#[cfg(test)]
#[path = "hooks_test.rs"]
mod hooks_test;

use leptos::prelude::*;

use super::api;
use super::types::{FetchError, Friend, FriendRequest};

/// Fetch lifecycle for one remote collection.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionState<T> {
    /// Last successfully fetched items, in server order.
    pub items: Vec<T>,
    /// An initial or retried fetch is in flight. Background refreshes do
    /// not set this, so stale rows stay visible while they resolve.
    pub loading: bool,
    /// Why the last fetch failed; cleared by the next success.
    pub error: Option<FetchError>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

/// Create friend-list state and start its initial fetch.
pub fn use_friend_list() -> RwSignal<CollectionState<Friend>> {
    let state = RwSignal::new(CollectionState {
        loading: true,
        ..CollectionState::default()
    });
    refresh_friend_list(state);
    state
}

/// Re-fetch the friend list into an existing state signal.
pub fn refresh_friend_list(state: RwSignal<CollectionState<Friend>>) {
    load(state, api::fetch_friends);
}

/// Create sent-requests state and start its initial fetch.
pub fn use_sent_requests() -> RwSignal<CollectionState<FriendRequest>> {
    let state = RwSignal::new(CollectionState {
        loading: true,
        ..CollectionState::default()
    });
    refresh_sent_requests(state);
    state
}

/// Re-fetch sent requests into an existing state signal.
pub fn refresh_sent_requests(state: RwSignal<CollectionState<FriendRequest>>) {
    load(state, api::fetch_sent_requests);
}

/// Create received-requests state and start its initial fetch.
pub fn use_received_requests() -> RwSignal<CollectionState<FriendRequest>> {
    let state = RwSignal::new(CollectionState {
        loading: true,
        ..CollectionState::default()
    });
    refresh_received_requests(state);
    state
}

/// Re-fetch received requests into an existing state signal.
pub fn refresh_received_requests(state: RwSignal<CollectionState<FriendRequest>>) {
    load(state, api::fetch_received_requests);
}

/// Resolve `fetch` into the state signal.
///
/// Stale-response ordering is not a concern here: refreshes always target
/// the same endpoint, and the last write wins.
fn load<T, F, Fut>(state: RwSignal<CollectionState<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, FetchError>> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match fetch().await {
                Ok(items) => state.update(|s| {
                    s.items = items;
                    s.loading = false;
                    s.error = None;
                }),
                Err(err) => state.update(|s| {
                    s.loading = false;
                    s.error = Some(err);
                }),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, fetch);
    }
}
