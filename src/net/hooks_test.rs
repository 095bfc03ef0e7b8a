use super::*;

// =============================================================
// CollectionState defaults
// =============================================================

#[test]
fn collection_state_default_is_empty() {
    let state: CollectionState<Friend> = CollectionState::default();
    assert!(state.items.is_empty());
}

#[test]
fn collection_state_default_is_not_loading() {
    let state: CollectionState<FriendRequest> = CollectionState::default();
    assert!(!state.loading);
}

#[test]
fn collection_state_default_has_no_error() {
    let state: CollectionState<Friend> = CollectionState::default();
    assert_eq!(state.error, None);
}
