use super::*;

// =============================================================
// URL building
// =============================================================

#[test]
fn collection_url_without_id() {
    assert_eq!(collection_url("posts", None), "http://localhost:3000/posts");
}

#[test]
fn collection_url_with_id() {
    assert_eq!(
        collection_url("users", Some("u-42")),
        "http://localhost:3000/users/u-42"
    );
}

#[test]
fn email_filter_url_escapes_reserved_characters() {
    assert_eq!(
        email_filter_url("a@x.com"),
        "http://localhost:3000/users?email=a%40x.com"
    );
    assert_eq!(
        email_filter_url("a+b@x.com"),
        "http://localhost:3000/users?email=a%2Bb%40x.com"
    );
}

#[test]
fn encode_query_value_passes_unreserved_through() {
    assert_eq!(encode_query_value("Abc-123_.~"), "Abc-123_.~");
    assert_eq!(encode_query_value("a b"), "a%20b");
}

// =============================================================
// Errors
// =============================================================

#[test]
fn api_error_messages() {
    assert_eq!(
        ApiError::Status(404).to_string(),
        "unexpected status: 404"
    );
    assert_eq!(
        ApiError::Network("timeout".to_owned()).to_string(),
        "network error: timeout"
    );
}

// Outside the browser every call degrades to a network error rather than
// panicking; pages render their generic retry message.
#[test]
fn server_stub_is_a_network_error() {
    let err = futures::executor::block_on(fetch_posts()).unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
