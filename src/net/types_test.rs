use super::*;

fn sample_user() -> User {
    User {
        id: "u-1".to_owned(),
        fullname: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "secret".to_owned(),
        role: "editor".to_owned(),
        profile_picture: "https://example.com/ada.png".to_owned(),
        bio: "First programmer.".to_owned(),
    }
}

// =============================================================
// User serde
// =============================================================

#[test]
fn user_serializes_camel_case() {
    let value = serde_json::to_value(sample_user()).expect("serialize");
    assert_eq!(value["profilePicture"], "https://example.com/ada.png");
    assert_eq!(value["fullname"], "Ada Lovelace");
    assert!(value.get("profile_picture").is_none());
}

#[test]
fn user_optional_profile_fields_default() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-2",
        "fullname": "Grace Hopper",
        "email": "grace@example.com",
        "password": "pw",
        "role": "admin"
    }))
    .expect("deserialize");
    assert_eq!(user.profile_picture, "");
    assert_eq!(user.bio, "");
}

// =============================================================
// Post serde
// =============================================================

#[test]
fn post_round_trips_camel_case() {
    let json = serde_json::json!({
        "id": "p-1",
        "title": "Hello",
        "category": "Tech",
        "content": "<p>hi</p>",
        "createdBy": "u-1",
        "createdAt": "2024-05-01T12:00:00.000Z",
        "likes": ["u-2"],
        "comments": ["nice"]
    });
    let post: Post = serde_json::from_value(json.clone()).expect("deserialize");
    assert_eq!(post.created_by, "u-1");
    assert_eq!(post.likes, vec!["u-2"]);
    assert_eq!(serde_json::to_value(&post).expect("serialize"), json);
}

#[test]
fn post_missing_likes_and_comments_default_empty() {
    let post: Post = serde_json::from_value(serde_json::json!({
        "id": "p-2",
        "title": "Bare",
        "category": "Life",
        "content": "",
        "createdBy": "u-1",
        "createdAt": "2024-05-02T08:00:00.000Z"
    }))
    .expect("deserialize");
    assert!(post.likes.is_empty());
    assert!(post.comments.is_empty());
}

// =============================================================
// PostPatch bodies
// =============================================================

#[test]
fn post_patch_serializes_only_set_fields() {
    let patch = PostPatch {
        likes: Some(vec!["u-1".to_owned(), "u-2".to_owned()]),
        ..PostPatch::default()
    };
    let value = serde_json::to_value(&patch).expect("serialize");
    assert_eq!(value, serde_json::json!({"likes": ["u-1", "u-2"]}));
}

#[test]
fn post_patch_edit_body_has_no_collection_fields() {
    let patch = PostPatch {
        title: Some("New title".to_owned()),
        category: Some("Tech".to_owned()),
        content: Some("<p>updated</p>".to_owned()),
        ..PostPatch::default()
    };
    let value = serde_json::to_value(&patch).expect("serialize");
    assert!(value.get("likes").is_none());
    assert!(value.get("comments").is_none());
    assert_eq!(value["title"], "New title");
}

#[test]
fn empty_post_patch_is_empty_object() {
    let value = serde_json::to_value(PostPatch::default()).expect("serialize");
    assert_eq!(value, serde_json::json!({}));
}
