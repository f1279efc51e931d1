//! Hit-testing sections and their resize handles.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::RESIZE_HANDLE;
use crate::doc::{Section, SectionId};
use crate::geom::Point;

/// Which part of a section was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// Anywhere on the section body outside the resize handle.
    Body,
    /// The bottom-right resize handle square.
    ResizeHandle,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub id: SectionId,
    pub part: HitPart,
}

/// Whether `pt` lies inside the section's bottom-right resize handle.
#[must_use]
pub fn in_resize_handle(section: &Section, pt: Point) -> bool {
    let right = section.x + section.w;
    let bottom = section.y + section.h;
    pt.x >= right - RESIZE_HANDLE && pt.x <= right && pt.y >= bottom - RESIZE_HANDLE && pt.y <= bottom
}

/// Test which section (if any) is under `pt`, topmost first.
///
/// Sections are stored in draw order, so the scan runs back-to-front and the
/// last-drawn section wins on overlap.
#[must_use]
pub fn hit_test(sections: &[Section], pt: Point) -> Option<Hit> {
    let section = sections.iter().rev().find(|s| s.rect().contains(pt))?;
    let part = if in_resize_handle(section, pt) {
        HitPart::ResizeHandle
    } else {
        HitPart::Body
    };
    Some(Hit { id: section.id, part })
}
