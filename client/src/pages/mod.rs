//! Top-level route pages.

pub mod admin;
pub mod home;
pub mod login;
pub mod role;
