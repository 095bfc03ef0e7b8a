//! REST API helpers for the friends endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`FetchError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, FetchError>` so callers can tell a dead
//! network from a server rejection from a malformed body, and surface the
//! right message instead of quietly rendering an empty list.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{FetchError, Friend, FriendRequest};

#[cfg(any(test, feature = "hydrate"))]
fn friend_endpoint(friend_id: &str) -> String {
    format!("/api/friends/{friend_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_endpoint(request_id: &str) -> String {
    format!("/api/friends/requests/{request_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_accept_endpoint(request_id: &str) -> String {
    format!("/api/friends/requests/{request_id}/accept")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_reject_endpoint(request_id: &str) -> String {
    format!("/api/friends/requests/{request_id}/reject")
}

#[cfg(feature = "hydrate")]
async fn get_json<T>(url: &str) -> Result<T, FetchError>
where
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send_expect_ok(request: gloo_net::http::RequestBuilder) -> Result<(), FetchError> {
    let resp = request
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if resp.ok() {
        Ok(())
    } else {
        Err(FetchError::Status(resp.status()))
    }
}

/// Fetch the friend list from `GET /api/friends`.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails, the server answers with a
/// non-success status, or the body does not decode.
pub async fn fetch_friends() -> Result<Vec<Friend>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/friends").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}

/// Fetch outbound friend requests from `GET /api/friends/requests/sent`.
///
/// Each record is classified structurally on decode; see
/// [`FriendRequest`].
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails, the server answers with a
/// non-success status, or the body does not decode.
pub async fn fetch_sent_requests() -> Result<Vec<FriendRequest>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/friends/requests/sent").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}

/// Fetch inbound friend requests from `GET /api/friends/requests/received`.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails, the server answers with a
/// non-success status, or the body does not decode.
pub async fn fetch_received_requests() -> Result<Vec<FriendRequest>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/friends/requests/received").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}

/// Remove an established friend via `DELETE /api/friends/{friend_id}`.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails or the server answers with
/// a non-success status.
pub async fn delete_friend(friend_id: &str) -> Result<(), FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = friend_endpoint(friend_id);
        send_expect_ok(gloo_net::http::Request::delete(&url)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = friend_id;
        Err(FetchError::Unavailable)
    }
}

/// Accept an inbound request via `POST /api/friends/requests/{id}/accept`.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails or the server answers with
/// a non-success status.
pub async fn accept_request(request_id: &str) -> Result<(), FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = request_accept_endpoint(request_id);
        send_expect_ok(gloo_net::http::Request::post(&url)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request_id;
        Err(FetchError::Unavailable)
    }
}

/// Decline an inbound request via `POST /api/friends/requests/{id}/reject`.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails or the server answers with
/// a non-success status.
pub async fn reject_request(request_id: &str) -> Result<(), FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = request_reject_endpoint(request_id);
        send_expect_ok(gloo_net::http::Request::post(&url)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request_id;
        Err(FetchError::Unavailable)
    }
}

/// Withdraw an outbound request via `DELETE /api/friends/requests/{id}`.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails or the server answers with
/// a non-success status.
pub async fn cancel_request(request_id: &str) -> Result<(), FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = request_endpoint(request_id);
        send_expect_ok(gloo_net::http::Request::delete(&url)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request_id;
        Err(FetchError::Unavailable)
    }
}
