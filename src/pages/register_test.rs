use super::*;

#[test]
fn valid_registration_passes() {
    assert_eq!(
        registration_error("Ada Lovelace", "ada@example.com", "pw", "editor"),
        None
    );
}

#[test]
fn missing_fields_are_reported_in_order() {
    assert_eq!(
        registration_error("", "a@x.com", "pw", "viewer"),
        Some("Full name is required")
    );
    assert_eq!(
        registration_error("Ada", "", "pw", "viewer"),
        Some("Email is required")
    );
    assert_eq!(
        registration_error("Ada", "a@x.com", "", "viewer"),
        Some("Password is required")
    );
    assert_eq!(
        registration_error("Ada", "a@x.com", "pw", ""),
        Some("Role is required")
    );
}

#[test]
fn malformed_email_is_rejected() {
    assert_eq!(
        registration_error("Ada", "not-an-email", "pw", "viewer"),
        Some("Invalid email address")
    );
    assert_eq!(
        registration_error("Ada", "@x.com", "pw", "viewer"),
        Some("Invalid email address")
    );
    assert_eq!(
        registration_error("Ada", "a@", "pw", "viewer"),
        Some("Invalid email address")
    );
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert_eq!(
        registration_error("  Ada  ", "  ada@example.com  ", "pw", "viewer"),
        None
    );
}
