#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::consts::RESIZE_HANDLE;
use crate::doc::{SectionId, SectionKind};
use crate::geom::Point;
use crate::input::{InputState, Mode, SectionForm};

// =============================================================
// Helpers
// =============================================================

const CANVAS_W: f64 = 960.0;
const CANVAS_H: f64 = 560.0;

fn engine() -> EngineCore {
    EngineCore::new(CANVAS_W, CANVAS_H)
}

fn form() -> SectionForm {
    SectionForm {
        name: "Bebidas".to_owned(),
        shelf: "A3".to_owned(),
        kind: SectionKind::Picking,
        color: "#336699".to_owned(),
    }
}

/// Drag out a section from `(x, y)` to `(x + w, y + h)` in draw mode.
fn draw_section(core: &mut EngineCore, x: f64, y: f64, w: f64, h: f64) -> SectionId {
    core.pointer_down(Point::new(x, y));
    core.pointer_move(Point::new(x + w, y + h));
    match core.pointer_up(&form()) {
        Action::SectionCreated(id) => id,
        other => panic!("expected SectionCreated, got {other:?}"),
    }
}

// =============================================================
// Drawing
// =============================================================

#[test]
fn valid_draft_creates_selected_section_with_rounded_coords() {
    let mut core = engine();
    core.pointer_down(Point::new(10.4, 20.6));
    core.pointer_move(Point::new(110.2, 90.1));
    let action = core.pointer_up(&form());

    let Action::SectionCreated(id) = action else {
        panic!("expected SectionCreated, got {action:?}");
    };
    assert_eq!(core.selected, Some(id));
    assert_eq!(core.input, InputState::Idle);

    let section = core.doc.get(&id).unwrap();
    assert_eq!(section.x, 10.0);
    assert_eq!(section.y, 21.0);
    assert_eq!(section.w, 100.0);
    assert_eq!(section.h, 70.0);
    assert_eq!(section.name, "Bebidas");
    assert_eq!(section.shelf, "A3");
    assert_eq!(section.kind, SectionKind::Picking);
    assert_eq!(section.color, "#336699");
    assert!(section.products.is_empty());
}

#[test]
fn backward_drag_is_normalized_before_commit() {
    let mut core = engine();
    core.pointer_down(Point::new(200.0, 150.0));
    core.pointer_move(Point::new(100.0, 50.0));
    let Action::SectionCreated(id) = core.pointer_up(&form()) else {
        panic!("expected SectionCreated");
    };
    let section = core.doc.get(&id).unwrap();
    assert_eq!((section.x, section.y, section.w, section.h), (100.0, 50.0, 100.0, 100.0));
}

#[test]
fn undersized_draft_is_rejected_without_state_change() {
    let mut core = engine();
    core.pointer_down(Point::new(10.0, 10.0));
    core.pointer_move(Point::new(29.0, 200.0)); // width 19 < minimum
    assert_eq!(core.pointer_up(&form()), Action::DraftRejected);
    assert!(core.doc.is_empty());
    assert_eq!(core.selected, None);
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn minimum_sized_draft_is_accepted() {
    let mut core = engine();
    core.pointer_down(Point::new(0.0, 0.0));
    core.pointer_move(Point::new(20.0, 20.0));
    assert!(matches!(core.pointer_up(&form()), Action::SectionCreated(_)));
}

#[test]
fn blank_name_falls_back_to_auto_numbered_default() {
    let mut core = engine();
    draw_section(&mut core, 0.0, 0.0, 50.0, 50.0);

    core.pointer_down(Point::new(200.0, 200.0));
    core.pointer_move(Point::new(300.0, 300.0));
    let blank = SectionForm { name: "   ".to_owned(), ..form() };
    let Action::SectionCreated(id) = core.pointer_up(&blank) else {
        panic!("expected SectionCreated");
    };
    assert_eq!(core.doc.get(&id).unwrap().name, "Secao 2");
}

#[test]
fn pointer_leave_finalizes_like_pointer_up() {
    let mut core = engine();
    core.pointer_down(Point::new(0.0, 0.0));
    core.pointer_move(Point::new(60.0, 60.0));
    assert!(matches!(core.pointer_leave(&form()), Action::SectionCreated(_)));
    assert_eq!(core.doc.len(), 1);
}

#[test]
fn draw_mode_click_on_existing_section_selects_it() {
    let mut core = engine();
    let id = draw_section(&mut core, 0.0, 0.0, 100.0, 100.0);
    core.select(None);

    assert_eq!(core.pointer_down(Point::new(50.0, 50.0)), Action::SelectionChanged);
    assert_eq!(core.selected, Some(id));
    assert_eq!(core.input, InputState::Idle);
    assert!(core.draft().is_none());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_mode_miss_clears_selection() {
    let mut core = engine();
    draw_section(&mut core, 0.0, 0.0, 100.0, 100.0);
    core.set_mode(Mode::Select);

    assert_eq!(core.pointer_down(Point::new(500.0, 500.0)), Action::SelectionChanged);
    assert_eq!(core.selected, None);
}

#[test]
fn select_ignores_unknown_id() {
    let mut core = engine();
    draw_section(&mut core, 0.0, 0.0, 100.0, 100.0);
    core.select(Some(Uuid::new_v4()));
    assert_eq!(core.selected, None);
}

#[test]
fn topmost_section_wins_selection_on_overlap() {
    let mut core = engine();
    draw_section(&mut core, 0.0, 0.0, 200.0, 200.0);
    // Anchor outside the first section, then drag back over it.
    core.pointer_down(Point::new(250.0, 250.0));
    core.pointer_move(Point::new(100.0, 100.0));
    let Action::SectionCreated(above) = core.pointer_up(&form()) else {
        panic!("expected SectionCreated");
    };
    core.set_mode(Mode::Select);

    core.pointer_down(Point::new(150.0, 150.0));
    assert_eq!(core.selected, Some(above));
}

// =============================================================
// Moving
// =============================================================

#[test]
fn move_repositions_with_grab_offset() {
    let mut core = engine();
    let id = draw_section(&mut core, 100.0, 100.0, 120.0, 80.0);
    core.set_mode(Mode::Select);

    // Grab 10px inside the section, drag 50px right and 30px down.
    core.pointer_down(Point::new(110.0, 110.0));
    core.pointer_move(Point::new(160.0, 140.0));
    assert_eq!(core.pointer_up(&form()), Action::LayoutChanged);

    let section = core.doc.get(&id).unwrap();
    assert_eq!((section.x, section.y), (150.0, 130.0));
    assert_eq!((section.w, section.h), (120.0, 80.0));
}

#[test]
fn move_clamps_to_canvas_bounds() {
    let mut core = engine();
    let id = draw_section(&mut core, 100.0, 100.0, 120.0, 80.0);
    core.set_mode(Mode::Select);

    core.pointer_down(Point::new(110.0, 110.0));
    core.pointer_move(Point::new(-500.0, -500.0));
    {
        let section = core.doc.get(&id).unwrap();
        assert_eq!((section.x, section.y), (0.0, 0.0));
    }

    core.pointer_move(Point::new(5000.0, 5000.0));
    let section = core.doc.get(&id).unwrap();
    assert_eq!(section.x, CANVAS_W - section.w);
    assert_eq!(section.y, CANVAS_H - section.h);
    assert!(section.x + section.w <= CANVAS_W);
    assert!(section.y + section.h <= CANVAS_H);
}

// =============================================================
// Resizing
// =============================================================

#[test]
fn resize_starts_from_bottom_right_handle() {
    let mut core = engine();
    let id = draw_section(&mut core, 100.0, 100.0, 120.0, 80.0);
    core.set_mode(Mode::Select);

    // Inside the handle square at the bottom-right corner.
    let grab = Point::new(100.0 + 120.0 - RESIZE_HANDLE / 2.0, 100.0 + 80.0 - RESIZE_HANDLE / 2.0);
    core.pointer_down(grab);
    assert!(matches!(core.input, InputState::Resizing { .. }));

    core.pointer_move(Point::new(grab.x + 40.0, grab.y + 20.0));
    assert_eq!(core.pointer_up(&form()), Action::LayoutChanged);

    let section = core.doc.get(&id).unwrap();
    assert_eq!((section.w, section.h), (160.0, 100.0));
    assert_eq!((section.x, section.y), (100.0, 100.0));
}

#[test]
fn resize_clamps_to_minimum_size() {
    let mut core = engine();
    let id = draw_section(&mut core, 100.0, 100.0, 120.0, 80.0);
    core.set_mode(Mode::Select);

    let grab = Point::new(215.0, 175.0);
    core.pointer_down(grab);
    core.pointer_move(Point::new(grab.x - 500.0, grab.y - 500.0));

    let section = core.doc.get(&id).unwrap();
    assert_eq!((section.w, section.h), (20.0, 20.0));
}

#[test]
fn resize_clamps_to_canvas_edge() {
    let mut core = engine();
    let id = draw_section(&mut core, 100.0, 100.0, 120.0, 80.0);
    core.set_mode(Mode::Select);

    let grab = Point::new(215.0, 175.0);
    core.pointer_down(grab);
    core.pointer_move(Point::new(grab.x + 5000.0, grab.y + 5000.0));

    let section = core.doc.get(&id).unwrap();
    assert_eq!(section.w, CANVAS_W - section.x);
    assert_eq!(section.h, CANVAS_H - section.y);
}

// =============================================================
// Mode switching
// =============================================================

#[test]
fn mode_switch_drops_in_flight_gesture() {
    let mut core = engine();
    core.pointer_down(Point::new(0.0, 0.0));
    core.pointer_move(Point::new(80.0, 80.0));
    assert!(core.draft().is_some());

    core.set_mode(Mode::Select);
    assert!(core.draft().is_none());
    assert_eq!(core.pointer_up(&form()), Action::None);
    assert!(core.doc.is_empty());
}

// =============================================================
// Document operations
// =============================================================

#[test]
fn delete_selected_removes_and_clears_selection() {
    let mut core = engine();
    let id = draw_section(&mut core, 0.0, 0.0, 100.0, 100.0);

    let removed = core.delete_selected().unwrap();
    assert_eq!(removed.id, id);
    assert_eq!(core.selected, None);
    assert!(core.doc.is_empty());
    assert!(core.delete_selected().is_none());
}

#[test]
fn clear_resets_layout_and_selection() {
    let mut core = engine();
    draw_section(&mut core, 0.0, 0.0, 100.0, 100.0);
    draw_section(&mut core, 200.0, 200.0, 100.0, 100.0);

    core.clear();
    assert!(core.doc.is_empty());
    assert_eq!(core.selected, None);
}

#[test]
fn products_attach_to_the_selected_section() {
    let mut core = engine();
    let id = draw_section(&mut core, 0.0, 0.0, 100.0, 100.0);

    let name = core
        .add_product_to_selected("Arroz".to_owned(), "SKU-7".to_owned())
        .unwrap();
    assert_eq!(name, "Bebidas");

    let section = core.doc.get(&id).unwrap();
    assert_eq!(section.products.len(), 1);
    let product_id = section.products[0].id;

    assert_eq!(core.remove_product(&id, &product_id).unwrap(), "Bebidas");
    assert!(core.doc.get(&id).unwrap().products.is_empty());
    assert!(core.remove_product(&id, &product_id).is_none());
}

#[test]
fn add_product_without_selection_is_rejected() {
    let mut core = engine();
    draw_section(&mut core, 0.0, 0.0, 100.0, 100.0);
    core.select(None);
    assert!(core.add_product_to_selected("Arroz".to_owned(), String::new()).is_none());
}

// =============================================================
// Layout loading
// =============================================================

#[test]
fn load_layout_replaces_document_and_resets_selection() {
    let mut core = engine();
    draw_section(&mut core, 0.0, 0.0, 100.0, 100.0);

    let replacement = core.doc.sections().to_vec();
    let mut other = engine();
    other.select(None);
    other.load_layout(replacement.clone());
    assert_eq!(other.doc.sections(), replacement.as_slice());
    assert_eq!(other.selected, None);
    assert_eq!(other.input, InputState::Idle);
}
