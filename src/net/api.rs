//! REST resource client for the mock backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! json-server instance at [`API_BASE`]. Server-side (SSR) and native test
//! builds get inert stubs since these calls only make sense in the browser.
//!
//! The backend is a plain collection store: no server-side auth, no
//! transactions. Partial updates are last-write-wins, so two clients
//! patching the same record can silently lose one write. Callers reduce
//! every [`ApiError`] to a user-facing retryable message; nothing here
//! retries automatically.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{Category, CommentRecord, Post, PostPatch, User};

/// Base URL of the mock REST backend.
pub const API_BASE: &str = "http://localhost:3000";

/// A failed resource client call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Build the URL for a collection, or for one record within it.
pub fn collection_url(collection: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{API_BASE}/{collection}/{id}"),
        None => format!("{API_BASE}/{collection}"),
    }
}

/// Build the email equality filter used by the sign-in lookup.
pub fn email_filter_url(email: &str) -> String {
    format!("{API_BASE}/users?email={}", encode_query_value(email))
}

/// Percent-encode a query value. Conservative: everything outside the
/// unreserved set is escaped.
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send_json<B, T>(
    builder: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = builder
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on server".to_owned()))
}

// =============================================================
// users
// =============================================================

/// List every user record.
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&collection_url("users", None)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Fetch one user by id.
pub async fn fetch_user(id: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&collection_url("users", Some(id))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

/// Fetch the users whose email matches exactly. The sign-in flow expects
/// zero or one result.
pub async fn fetch_users_by_email(email: &str) -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&email_filter_url(email)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        server_stub()
    }
}

/// Create a user record (registration).
pub async fn create_user(user: &User) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(
            gloo_net::http::Request::post(&collection_url("users", None)),
            user,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
        server_stub()
    }
}

/// Full-replace a user record (profile edit).
pub async fn replace_user(user: &User) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(
            gloo_net::http::Request::put(&collection_url("users", Some(&user.id))),
            user,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
        server_stub()
    }
}

// =============================================================
// posts
// =============================================================

/// List every post.
pub async fn fetch_posts() -> Result<Vec<Post>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&collection_url("posts", None)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Fetch one post by id.
pub async fn fetch_post(id: &str) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&collection_url("posts", Some(id))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

/// Create a post.
pub async fn create_post(post: &Post) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(
            gloo_net::http::Request::post(&collection_url("posts", None)),
            post,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post;
        server_stub()
    }
}

/// Partially update a post. Unset fields are left untouched server-side.
pub async fn patch_post(id: &str, patch: &PostPatch) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(
            gloo_net::http::Request::patch(&collection_url("posts", Some(id))),
            patch,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, patch);
        server_stub()
    }
}

/// Delete a post.
pub async fn delete_post(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&collection_url("posts", Some(id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

// =============================================================
// comments + categories
// =============================================================

/// List every standalone comment record.
pub async fn fetch_comments() -> Result<Vec<CommentRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&collection_url("comments", None)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// List every category.
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&collection_url("categories", None)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}
