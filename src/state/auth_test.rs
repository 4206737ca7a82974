use super::*;
use leptos::prelude::{Get, RwSignal};

fn user(role: &str, password: &str) -> User {
    User {
        id: "u-1".to_owned(),
        fullname: "Ada Lovelace".to_owned(),
        email: "a@x.com".to_owned(),
        password: password.to_owned(),
        role: role.to_owned(),
        profile_picture: String::new(),
        bio: String::new(),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_loading_with_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
}

// =============================================================
// verify_login
// =============================================================

#[test]
fn verify_login_no_candidates_is_unknown_email() {
    assert_eq!(verify_login(&[], "secret"), Err(LoginError::UnknownEmail));
}

#[test]
fn verify_login_wrong_password() {
    let candidates = vec![user("viewer", "secret")];
    assert_eq!(
        verify_login(&candidates, "wrong"),
        Err(LoginError::WrongPassword)
    );
}

#[test]
fn verify_login_matching_password_returns_identity() {
    let candidates = vec![user("viewer", "secret")];
    let found = verify_login(&candidates, "secret").expect("login");
    assert_eq!(found.email, "a@x.com");
}

#[test]
fn login_error_messages_are_user_facing() {
    assert_eq!(
        LoginError::UnknownEmail.to_string(),
        "No user found with this email."
    );
    assert_eq!(LoginError::WrongPassword.to_string(), "Incorrect password.");
    assert_eq!(
        LoginError::Network.to_string(),
        "Login failed. Please try again later."
    );
}

// =============================================================
// Guard outcome state machine
// =============================================================

#[test]
fn guard_loading_renders_nothing() {
    let state = AuthState::default();
    assert_eq!(guard_outcome(&state), GuardOutcome::Loading);
}

#[test]
fn guard_redirects_when_signed_out() {
    let state = AuthState {
        user: None,
        loading: false,
    };
    assert_eq!(guard_outcome(&state), GuardOutcome::RedirectToSignIn);
}

#[test]
fn guard_allows_when_signed_in() {
    let state = AuthState {
        user: Some(user("editor", "pw")),
        loading: false,
    };
    assert_eq!(guard_outcome(&state), GuardOutcome::Allow);
}

// =============================================================
// Signal-level operations
// =============================================================

#[test]
fn initialize_finishes_loading() {
    let auth = RwSignal::new(AuthState::default());
    initialize(auth);
    let state = auth.get();
    assert!(!state.loading);
    // No browser storage in tests, so no session to restore.
    assert!(state.user.is_none());
}

#[test]
fn complete_login_publishes_identity() {
    let auth = RwSignal::new(AuthState {
        user: None,
        loading: false,
    });
    complete_login(auth, user("admin", "pw"));
    assert_eq!(guard_outcome(&auth.get()), GuardOutcome::Allow);
}

#[test]
fn logout_is_idempotent() {
    let auth = RwSignal::new(AuthState {
        user: Some(user("admin", "pw")),
        loading: false,
    });
    logout(auth);
    assert!(auth.get().user.is_none());
    logout(auth);
    assert!(auth.get().user.is_none());
    assert_eq!(guard_outcome(&auth.get()), GuardOutcome::RedirectToSignIn);
}

#[test]
fn logout_then_login_round_trip() {
    let auth = RwSignal::new(AuthState {
        user: None,
        loading: false,
    });
    complete_login(auth, user("editor", "pw"));
    logout(auth);
    assert_eq!(guard_outcome(&auth.get()), GuardOutcome::RedirectToSignIn);
}
