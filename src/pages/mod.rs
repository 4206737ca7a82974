//! Routed pages.

pub mod about;
pub mod all_posts;
pub mod categories;
pub mod contact;
pub mod dashboard;
pub mod edit_post;
pub mod edit_user;
pub mod home;
pub mod my_posts;
pub mod my_profile;
pub mod post_editor;
pub mod register;
pub mod sign_in;
pub mod single_post;
