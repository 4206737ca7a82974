//! Record types for the mock backend's collections.
//!
//! Field names follow the backend's camelCase JSON. The `role` field stays
//! a free string here; it is normalized into [`crate::permissions::Role`]
//! where capability decisions are made.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user record, also the cached identity after sign-in.
///
/// The backend stores the password in plaintext; sign-in compares against
/// it directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(default)]
    pub profile_picture: String,
    #[serde(default)]
    pub bio: String,
}

/// A blog post. `content` is an HTML string produced by the rich-text
/// editor. `likes` holds user ids; `comments` holds raw comment text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub category: String,
    pub content: String,
    pub created_by: String,
    pub created_at: String,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub comments: Vec<String>,
}

/// Partial update body for `PATCH /posts/{id}`.
///
/// Only the set fields are serialized, so untouched fields keep whatever
/// the server currently has. There is no version token: two clients
/// patching the same record race last-write-wins, and an append encoded
/// as read-modify-patch can lose a concurrent append.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
}

/// A standalone comment record from the `comments` collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    pub id: String,
    #[serde(default)]
    pub post_id: String,
    #[serde(default)]
    pub text: String,
}

/// A post category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
}
