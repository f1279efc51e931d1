//! Canvas editor core for the StockFlow warehouse floor plan.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! floor-plan document (rectangular sections with assigned products), the
//! pointer-gesture state machine (draw / select / move / resize), hit-testing,
//! and scene rendering. The Leptos host layer is responsible only for wiring
//! DOM events to the engine, persisting the layout after mutating
//! [`engine::Action`]s, and mirroring document state into reactive signals.
//!
//! All gesture and document logic lives in [`engine::EngineCore`], which holds
//! no browser handles and is tested on the native target.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Section/product types and the ordered layout document |
//! | [`geom`] | Points, rectangles, and the in-progress draft rectangle |
//! | [`input`] | Editor mode, form values, and the gesture state machine |
//! | [`hit`] | Hit-testing sections and their resize handles |
//! | [`render`] | Scene rendering to a 2D canvas context |
//! | [`consts`] | Shared numeric constants (minimum size, handle size, grid) |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod render;
