//! Rendering: draws the full floor-plan scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the engine state and produces pixels — it
//! does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{GRID_STEP, RESIZE_HANDLE};
use crate::doc::Section;
use crate::engine::EngineCore;
use crate::geom::DraftRect;
use crate::input::Mode;

/// Grid line color.
const GRID_STROKE: &str = "rgba(40, 62, 136, 0.10)";
/// Accent color for selection outlines, the resize handle, and the draft.
const ACCENT: &str = "#0f2cff";
/// Label text color.
const LABEL_FILL: &str = "#101010";
/// Draft rectangle fill.
const DRAFT_FILL: &str = "rgba(15, 44, 255, 0.12)";
/// Dash segment lengths for the draft outline.
const DRAFT_DASH: (f64, f64) = (8.0, 6.0);

/// Draw the whole scene: grid, sections in draw order, then any draft on top.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, core.canvas_w, core.canvas_h);
    draw_grid(ctx, core.canvas_w, core.canvas_h);

    for section in core.doc.sections() {
        let highlighted = core.selected == Some(section.id);
        draw_section(ctx, section, highlighted, core.mode)?;
    }

    if let Some(draft) = core.draft() {
        draw_draft(ctx, &draft)?;
    }
    Ok(())
}

fn draw_grid(ctx: &CanvasRenderingContext2d, canvas_w: f64, canvas_h: f64) {
    ctx.save();
    ctx.set_stroke_style_str(GRID_STROKE);
    ctx.set_line_width(1.0);

    let mut x = 0.0;
    while x <= canvas_w {
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, canvas_h);
        ctx.stroke();
        x += GRID_STEP;
    }

    let mut y = 0.0;
    while y <= canvas_h {
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(canvas_w, y);
        ctx.stroke();
        y += GRID_STEP;
    }
    ctx.restore();
}

fn draw_section(
    ctx: &CanvasRenderingContext2d,
    section: &Section,
    highlighted: bool,
    mode: Mode,
) -> Result<(), JsValue> {
    ctx.save();
    // "#rrggbb" + alpha suffix gives the translucent body fill.
    ctx.set_fill_style_str(&format!("{}55", section.color));
    ctx.set_stroke_style_str(if highlighted { ACCENT } else { &section.color });
    ctx.set_line_width(if highlighted { 3.0 } else { 2.0 });

    ctx.fill_rect(section.x, section.y, section.w, section.h);
    ctx.stroke_rect(section.x, section.y, section.w, section.h);

    ctx.set_fill_style_str(LABEL_FILL);
    ctx.set_font("bold 14px Segoe UI");
    ctx.fill_text(&section.name, section.x + 8.0, section.y + 18.0)?;

    ctx.set_font("12px Segoe UI");
    let shelf = if section.shelf.is_empty() { "-" } else { &section.shelf };
    ctx.fill_text(&format!("Prateleira: {shelf}"), section.x + 8.0, section.y + 34.0)?;
    ctx.fill_text(&format!("Tipo: {}", section.kind.label()), section.x + 8.0, section.y + 50.0)?;
    ctx.fill_text(
        &format!("Produtos: {}", section.products.len()),
        section.x + 8.0,
        section.y + 66.0,
    )?;

    if highlighted && mode == Mode::Select {
        draw_resize_handle(ctx, section);
    }

    ctx.restore();
    Ok(())
}

fn draw_resize_handle(ctx: &CanvasRenderingContext2d, section: &Section) {
    ctx.set_fill_style_str(ACCENT);
    ctx.fill_rect(
        section.x + section.w - RESIZE_HANDLE,
        section.y + section.h - RESIZE_HANDLE,
        RESIZE_HANDLE,
        RESIZE_HANDLE,
    );
}

fn draw_draft(ctx: &CanvasRenderingContext2d, draft: &DraftRect) -> Result<(), JsValue> {
    let rect = draft.normalized();

    ctx.save();
    ctx.set_fill_style_str(DRAFT_FILL);
    ctx.set_stroke_style_str(ACCENT);
    ctx.set_line_width(2.0);

    let dash = js_sys::Array::new();
    dash.push(&DRAFT_DASH.0.into());
    dash.push(&DRAFT_DASH.1.into());
    ctx.set_line_dash(&dash)?;

    ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    ctx.stroke_rect(rect.x, rect.y, rect.w, rect.h);

    ctx.set_line_dash(&js_sys::Array::new())?;
    ctx.restore();
    Ok(())
}
