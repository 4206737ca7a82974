//! Reusable UI components.

pub mod footer;
pub mod header;
pub mod layout;
pub mod post_card;
pub mod protected_route;
