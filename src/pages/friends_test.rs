use super::*;
use crate::net::types::FetchError;

fn friend(id: &str, name: &str) -> Friend {
    Friend {
        friend_id: id.to_owned(),
        friend_name: name.to_owned(),
        friend_profile_image: String::new(),
        created_at: "2024-05-01T12:30:00Z".to_owned(),
    }
}

// =============================================================
// filter_friends
// =============================================================

#[test]
fn filter_matches_case_insensitively() {
    let friends = vec![friend("u1", "Mina"), friend("u2", "Jun")];
    let hits = filter_friends(&friends, "mina");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].friend_id, "u1");
}

#[test]
fn filter_matches_substrings_anywhere_in_the_name() {
    let friends = vec![friend("u1", "Minari"), friend("u2", "Jun"), friend("u3", "Domina")];
    let hits = filter_friends(&friends, "ina");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].friend_id, "u1");
    assert_eq!(hits[1].friend_id, "u3");
}

#[test]
fn filter_preserves_list_order() {
    let friends = vec![friend("u3", "ana"), friend("u1", "anna"), friend("u2", "hana")];
    let hits = filter_friends(&friends, "an");
    let ids: Vec<&str> = hits.iter().map(|f| f.friend_id.as_str()).collect();
    assert_eq!(ids, vec!["u3", "u1", "u2"]);
}

#[test]
fn blank_query_matches_nothing() {
    let friends = vec![friend("u1", "Mina")];
    assert!(filter_friends(&friends, "").is_empty());
    assert!(filter_friends(&friends, "   ").is_empty());
}

#[test]
fn query_whitespace_is_trimmed() {
    let friends = vec![friend("u1", "Mina")];
    let hits = filter_friends(&friends, "  mina  ");
    assert_eq!(hits.len(), 1);
}

#[test]
fn unmatched_query_yields_empty() {
    let friends = vec![friend("u1", "Mina")];
    assert!(filter_friends(&friends, "zeb").is_empty());
}

// =============================================================
// tab_body precedence
// =============================================================

#[test]
fn loading_hides_rows_even_when_items_are_present() {
    let state = CollectionState {
        items: vec![friend("u1", "Mina")],
        loading: true,
        error: None,
    };
    assert_eq!(tab_body(&state), TabBody::Loading);
}

#[test]
fn loading_wins_over_a_stale_error_during_retry() {
    let state = CollectionState::<Friend> {
        items: Vec::new(),
        loading: true,
        error: Some(FetchError::Status(500)),
    };
    assert_eq!(tab_body(&state), TabBody::Loading);
}

#[test]
fn error_takes_precedence_over_the_empty_state() {
    let state = CollectionState::<Friend> {
        items: Vec::new(),
        loading: false,
        error: Some(FetchError::Status(500)),
    };
    assert_eq!(
        tab_body(&state),
        TabBody::Error("request failed with status 500".to_owned())
    );
}

#[test]
fn loaded_empty_collection_reads_as_empty() {
    let state = CollectionState::<Friend>::default();
    assert_eq!(tab_body(&state), TabBody::Empty);
}

#[test]
fn loaded_items_without_error_render_rows() {
    let state = CollectionState {
        items: vec![friend("u1", "Mina"), friend("u2", "Jun")],
        loading: false,
        error: None,
    };
    assert_eq!(tab_body(&state), TabBody::Rows);
}

// =============================================================
// profile_href
// =============================================================

#[test]
fn profile_href_formats_expected_path() {
    assert_eq!(profile_href("u123"), "/users/u123");
}
