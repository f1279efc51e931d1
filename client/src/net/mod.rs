//! Backend REST client.
//!
//! [`api`] wraps individual endpoints, [`sync`] pushes the floor-plan layout
//! section by section, and [`types`] holds the wire payloads shared by both.

pub mod api;
pub mod sync;
pub mod types;
