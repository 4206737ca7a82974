//! Authentication state: the single source of truth for "who is signed in".
//!
//! An `RwSignal<AuthState>` is provided as context at the app root. The
//! state starts out loading; an effect on mount restores the persisted
//! session exactly once and then flips `loading` off. While loading, the
//! route guard renders nothing, so a protected view can only appear after
//! the session store has been consulted.
//!
//! Views never write the identity directly. They go through
//! [`complete_login`] and [`logout`], which keep the session store and the
//! in-memory identity in step: the store write always lands first, so a
//! signed-in state the guard admits is one that survives a reload.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{RwSignal, Update};
use thiserror::Error;

use crate::net::types::User;
use crate::util::session;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Starts loading: the stored session has not been consulted yet.
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Why a sign-in attempt was rejected. The `Display` strings are the
/// user-facing messages shown inline on the sign-in form.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("No user found with this email.")]
    UnknownEmail,
    #[error("Incorrect password.")]
    WrongPassword,
    #[error("Login failed. Please try again later.")]
    Network,
}

/// What the route guard should do for a protected destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session restore still in flight; render nothing yet.
    Loading,
    /// Identity present; render the protected view.
    Allow,
    /// No identity; send the visitor to the sign-in page.
    RedirectToSignIn,
}

/// Derive the guard decision from the current auth state.
pub fn guard_outcome(state: &AuthState) -> GuardOutcome {
    if state.loading {
        GuardOutcome::Loading
    } else if state.user.is_some() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::RedirectToSignIn
    }
}

/// Match a password against the records returned by the email filter
/// query. The backend stores passwords in plaintext, so this is a plain
/// equality check.
pub fn verify_login(candidates: &[User], password: &str) -> Result<User, LoginError> {
    let Some(user) = candidates.first() else {
        return Err(LoginError::UnknownEmail);
    };
    if user.password == password {
        Ok(user.clone())
    } else {
        Err(LoginError::WrongPassword)
    }
}

/// Look up the identity by email and check the password.
#[cfg(feature = "hydrate")]
pub async fn login(email: &str, password: &str) -> Result<User, LoginError> {
    let candidates = crate::net::api::fetch_users_by_email(email)
        .await
        .map_err(|e| {
            leptos::logging::warn!("login lookup failed: {e}");
            LoginError::Network
        })?;
    verify_login(&candidates, password)
}

/// Restore the persisted session into the auth signal. Runs once on app
/// mount; until it has, the state reports loading.
pub fn initialize(auth: RwSignal<AuthState>) {
    let restored = session::load();
    auth.update(|a| {
        a.user = restored;
        a.loading = false;
    });
}

/// Complete a successful sign-in: persist the session, then publish the
/// identity. The store write happens first so the guard never admits an
/// identity that would not survive a reload.
pub fn complete_login(auth: RwSignal<AuthState>, user: User) {
    session::save(&user);
    auth.update(|a| a.user = Some(user));
}

/// Sign out: clear the persisted session and the in-memory identity.
/// Safe to call when already signed out.
pub fn logout(auth: RwSignal<AuthState>) {
    session::clear();
    auth.update(|a| a.user = None);
}
