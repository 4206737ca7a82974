//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `theme`, `dashboard`) so individual
//! components can depend on small focused models. Signals wrapping these
//! types are provided via context at the app root.

pub mod auth;
pub mod dashboard;
pub mod theme;
