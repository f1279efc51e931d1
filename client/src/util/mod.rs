//! Shared helpers: auth/session, web storage, canvas input, sky effects.

pub mod auth;
pub mod canvas_input;
pub mod sky;
pub mod storage;
