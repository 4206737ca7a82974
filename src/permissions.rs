//! Role-to-capability mapping.
//!
//! The backend stores roles as free-form strings. They are normalized into
//! a closed enum here, at the boundary where backend data enters the
//! client, and everything downstream switches on the enum instead of
//! comparing strings. Unrecognized roles collapse to `Unprivileged`, which
//! carries no capabilities.
//!
//! This gating is advisory only: the mock backend enforces nothing, so a
//! client talking to it directly can bypass every check here. The UI hides
//! controls the current role lacks rather than disabling them.

#[cfg(test)]
#[path = "permissions_test.rs"]
mod permissions_test;

/// A recognized user role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Admin,
    Editor,
    Viewer,
    /// Unknown, empty, or missing role strings land here.
    #[default]
    Unprivileged,
}

impl Role {
    /// Normalize a raw role string (trim + ASCII lowercase) into a `Role`.
    ///
    /// Never fails: anything unrecognized is `Unprivileged`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|r| r.trim().to_ascii_lowercase()).as_deref() {
            Some("admin") => Self::Admin,
            Some("editor") => Self::Editor,
            Some("viewer") => Self::Viewer,
            _ => Self::Unprivileged,
        }
    }

    /// Display name for profile views.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Editor => "Editor",
            Self::Viewer => "Viewer",
            Self::Unprivileged => "No role",
        }
    }

    /// The capability set granted to this role.
    pub fn capabilities(self) -> Capabilities {
        match self {
            Self::Admin => Capabilities {
                can_read: true,
                can_comment: true,
                can_like: true,
                can_delete: true,
                can_update: true,
            },
            Self::Editor => Capabilities {
                can_read: true,
                can_comment: true,
                can_like: true,
                can_delete: false,
                can_update: true,
            },
            Self::Viewer => Capabilities {
                can_read: true,
                can_comment: true,
                can_like: true,
                can_delete: false,
                can_update: false,
            },
            Self::Unprivileged => Capabilities::none(),
        }
    }
}

/// Booleans controlling which actions a view may expose for the current
/// user. Derived from the role on demand, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub can_read: bool,
    pub can_comment: bool,
    pub can_like: bool,
    pub can_delete: bool,
    pub can_update: bool,
}

impl Capabilities {
    /// The all-false set: what an unknown or absent role gets.
    pub const fn none() -> Self {
        Self {
            can_read: false,
            can_comment: false,
            can_like: false,
            can_delete: false,
            can_update: false,
        }
    }
}

/// Resolve a raw role string straight to its capability set.
///
/// Callable with no signed-in user at all (`None` → all false).
pub fn resolve(raw_role: Option<&str>) -> Capabilities {
    Role::parse(raw_role).capabilities()
}
