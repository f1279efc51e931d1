//! Application state shared across pages and components.

pub mod auth;
pub mod editor;
