//! Browser-facing utilities: session persistence, theme preference, time.

pub mod session;
pub mod theme_pref;
pub mod time;
