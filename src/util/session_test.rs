use super::*;

fn identity() -> User {
    User {
        id: "u-7".to_owned(),
        fullname: "Mary Shelley".to_owned(),
        email: "mary@example.com".to_owned(),
        password: "frankenstein".to_owned(),
        role: "Viewer".to_owned(),
        profile_picture: String::new(),
        bio: "Author.".to_owned(),
    }
}

// =============================================================
// encode / decode round trip
// =============================================================

#[test]
fn round_trip_preserves_identity() {
    let user = identity();
    assert_eq!(decode(&encode(&user)), Some(user));
}

#[test]
fn decode_corrupt_data_is_none() {
    assert_eq!(decode("not json at all"), None);
    assert_eq!(decode("{\"id\":"), None);
    assert_eq!(decode(""), None);
}

#[test]
fn decode_wrong_shape_is_none() {
    // Valid JSON, but not an identity record.
    assert_eq!(decode("[1,2,3]"), None);
    assert_eq!(decode("{\"id\":\"u-1\"}"), None);
}

#[test]
fn decode_preserves_raw_role_string() {
    // Role normalization happens in the permission resolver, not here.
    let user = decode(&encode(&identity())).expect("round trip");
    assert_eq!(user.role, "Viewer");
}

// =============================================================
// store operations outside the browser
// =============================================================

#[test]
fn load_without_browser_is_none() {
    assert_eq!(load(), None);
}

#[test]
fn save_and_clear_without_browser_do_not_panic() {
    save(&identity());
    clear();
    clear();
}
