//! Input model: editor modes, form values, and the gesture state machine.
//!
//! `Mode` captures which tool the user has armed. `SectionForm` carries the
//! sidebar form values that seed a newly committed section. `InputState` is
//! the active gesture being tracked between pointer-down and pointer-up,
//! carrying all context needed to compute incremental deltas and emit final
//! document mutations on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::{SectionId, SectionKind};
use crate::geom::{DraftRect, Point};

/// Which editor mode is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Drag on empty canvas to draw a new section.
    #[default]
    Draw,
    /// Click to select; drag to move or resize an existing section.
    Select,
}

/// Sidebar form values applied when a draft is committed to a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionForm {
    /// Section name; blank falls back to an auto-numbered default.
    pub name: String,
    /// Shelf label; may be blank.
    pub shelf: String,
    /// Functional kind.
    pub kind: SectionKind,
    /// Fill color as `#rrggbb`.
    pub color: String,
}

impl Default for SectionForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            shelf: String::new(),
            kind: SectionKind::default(),
            color: "#2e7d32".to_owned(),
        }
    }
}

/// Internal state for the input state machine.
///
/// Each active variant carries gesture context needed to compute deltas and
/// emit final actions on pointer-up or pointer-leave.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is drawing a new section from an anchor corner.
    Drawing(DraftRect),
    /// The user is moving an existing section across the canvas.
    Moving {
        /// Id of the section being moved.
        id: SectionId,
        /// Offset from the section's top-left corner to the grab point,
        /// kept constant for the whole drag.
        grab_offset: Point,
    },
    /// The user is resizing a section from its bottom-right handle.
    Resizing {
        /// Id of the section being resized.
        id: SectionId,
        /// Pointer position at the start of the resize.
        start: Point,
        /// Section width at the start of the resize.
        initial_w: f64,
        /// Section height at the start of the resize.
        initial_h: f64,
    },
}
