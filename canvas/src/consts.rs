//! Shared numeric constants for the canvas crate.

// ── Sections ────────────────────────────────────────────────────

/// Minimum committed width/height of a section, in canvas pixels.
/// Drafts smaller than this in either dimension are rejected.
pub const MIN_SECTION_SIZE: f64 = 20.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Side length of the bottom-right resize handle, in canvas pixels.
pub const RESIZE_HANDLE: f64 = 14.0;

// ── Rendering ───────────────────────────────────────────────────

/// Background grid spacing, in canvas pixels.
pub const GRID_STEP: f64 = 40.0;
