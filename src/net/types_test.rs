use super::*;

fn sent_json() -> serde_json::Value {
    serde_json::json!({
        "id": "req-1",
        "receiver_name": "mina",
        "friend_profile_image": "https://cdn.example/mina.png",
        "status": "pending"
    })
}

fn received_json() -> serde_json::Value {
    serde_json::json!({
        "id": "req-2",
        "requester_name": "jun",
        "friend_profile_image": "https://cdn.example/jun.png",
        "status": "pending"
    })
}

// ====== classification ======

#[test]
fn receiver_name_classifies_as_sent() {
    let request: FriendRequest = serde_json::from_value(sent_json()).unwrap();
    assert_eq!(request.direction(), RequestDirection::Sent);
    assert_eq!(request.id(), "req-1");
    assert_eq!(request.display_name(), "mina");
    assert_eq!(request.status(), "pending");
}

#[test]
fn requester_name_classifies_as_received() {
    let request: FriendRequest = serde_json::from_value(received_json()).unwrap();
    assert_eq!(request.direction(), RequestDirection::Received);
    assert_eq!(request.display_name(), "jun");
}

#[test]
fn receiver_name_wins_when_both_names_present() {
    let request: FriendRequest = serde_json::from_value(serde_json::json!({
        "id": "req-3",
        "receiver_name": "mina",
        "requester_name": "jun",
        "friend_profile_image": "",
        "status": "pending"
    }))
    .unwrap();
    assert_eq!(request.direction(), RequestDirection::Sent);
    assert_eq!(request.display_name(), "mina");
}

#[test]
fn missing_both_names_classifies_as_received() {
    let request: FriendRequest = serde_json::from_value(serde_json::json!({
        "id": "req-4",
        "friend_profile_image": "",
        "status": "pending"
    }))
    .unwrap();
    assert_eq!(request.direction(), RequestDirection::Received);
    assert_eq!(request.display_name(), "");
}

#[test]
fn null_receiver_name_classifies_as_received() {
    let request: FriendRequest = serde_json::from_value(serde_json::json!({
        "id": "req-5",
        "receiver_name": null,
        "requester_name": "jun",
        "friend_profile_image": "",
        "status": "accepted"
    }))
    .unwrap();
    assert_eq!(request.direction(), RequestDirection::Received);
    assert_eq!(request.status(), "accepted");
}

#[test]
fn mixed_feed_preserves_order() {
    let feed: Vec<FriendRequest> =
        serde_json::from_value(serde_json::json!([sent_json(), received_json()])).unwrap();
    assert_eq!(feed.len(), 2);
    assert!(feed[0].direction().is_sent());
    assert!(!feed[1].direction().is_sent());
}

// ====== serialization ======

#[test]
fn sent_request_serializes_to_wire_shape() {
    let request: FriendRequest = serde_json::from_value(sent_json()).unwrap();
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value, sent_json());
}

#[test]
fn received_request_serializes_to_wire_shape() {
    let request: FriendRequest = serde_json::from_value(received_json()).unwrap();
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value, received_json());
}

#[test]
fn friend_round_trips() {
    let friend = Friend {
        friend_id: "user-9".into(),
        friend_name: "soo".into(),
        friend_profile_image: "https://cdn.example/soo.png".into(),
        created_at: "2024-05-01T12:30:00Z".into(),
    };
    let value = serde_json::to_value(&friend).unwrap();
    assert_eq!(serde_json::from_value::<Friend>(value).unwrap(), friend);
}

// ====== errors ======

#[test]
fn fetch_error_messages_name_the_failure() {
    assert_eq!(
        FetchError::Status(502).to_string(),
        "request failed with status 502"
    );
    assert_eq!(
        FetchError::Network("timed out".into()).to_string(),
        "network error: timed out"
    );
    assert!(FetchError::Decode("missing field".into())
        .to_string()
        .contains("invalid response body"));
    assert_eq!(
        FetchError::Unavailable.to_string(),
        "not available on server"
    );
}
