use super::*;

#[test]
fn friend_endpoint_formats_expected_path() {
    assert_eq!(friend_endpoint("u123"), "/api/friends/u123");
}

#[test]
fn request_endpoint_formats_expected_path() {
    assert_eq!(request_endpoint("req-7"), "/api/friends/requests/req-7");
}

#[test]
fn request_accept_endpoint_formats_expected_path() {
    assert_eq!(
        request_accept_endpoint("req-7"),
        "/api/friends/requests/req-7/accept"
    );
}

#[test]
fn request_reject_endpoint_formats_expected_path() {
    assert_eq!(
        request_reject_endpoint("req-7"),
        "/api/friends/requests/req-7/reject"
    );
}
