//! Top-level engine: the gesture state machine and document mutations.
//!
//! [`EngineCore`] holds all editor state with no browser handles, so the full
//! draw/select/move/resize behavior is tested on the native target.
//! [`Engine`] wraps the core together with the backing canvas element and
//! exposes rendering.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::MIN_SECTION_SIZE;
use crate::doc::{LayoutDoc, Product, ProductId, Section, SectionId};
use crate::geom::{DraftRect, Point, clamp};
use crate::hit::{self, HitPart};
use crate::input::{InputState, Mode, SectionForm};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from engine operations for the host to process.
///
/// The host persists the layout on [`Action::SectionCreated`] and
/// [`Action::LayoutChanged`], shows a status message where relevant, and
/// re-renders on anything other than [`Action::None`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing changed.
    None,
    /// A draft was committed as a new section; it is now selected.
    SectionCreated(SectionId),
    /// A draft was discarded for being under the minimum size.
    DraftRejected,
    /// The selection changed (possibly to nothing).
    SelectionChanged,
    /// A move or resize finished; the layout should be persisted.
    LayoutChanged,
    /// Only pixels changed (draft tracking, in-progress drag).
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub doc: LayoutDoc,
    pub mode: Mode,
    pub selected: Option<SectionId>,
    pub input: InputState,
    pub canvas_w: f64,
    pub canvas_h: f64,
}

impl EngineCore {
    /// Create an engine for a canvas of the given pixel size.
    #[must_use]
    pub fn new(canvas_w: f64, canvas_h: f64) -> Self {
        Self {
            canvas_w,
            canvas_h,
            ..Self::default()
        }
    }

    // --- Data inputs ---

    /// Replace the layout with a list loaded from storage.
    pub fn load_layout(&mut self, sections: Vec<Section>) {
        self.doc = LayoutDoc::from_sections(sections);
        self.selected = None;
        self.input = InputState::Idle;
    }

    // --- Mode / selection ---

    /// Switch between draw and select mode. Any in-flight gesture is dropped.
    pub fn set_mode(&mut self, mode: Mode) -> Action {
        self.mode = mode;
        self.input = InputState::Idle;
        Action::RenderNeeded
    }

    /// Select a section by id (or clear the selection).
    pub fn select(&mut self, id: Option<SectionId>) -> Action {
        self.selected = id.filter(|id| self.doc.get(id).is_some());
        Action::SelectionChanged
    }

    /// The currently selected section, if any.
    #[must_use]
    pub fn selected_section(&self) -> Option<&Section> {
        self.selected.as_ref().and_then(|id| self.doc.get(id))
    }

    // --- Pointer events ---

    /// Handle pointer-down at `pt` in canvas coordinates.
    pub fn pointer_down(&mut self, pt: Point) -> Action {
        let hit = hit::hit_test(self.doc.sections(), pt);

        match self.mode {
            Mode::Select => {
                let Some(hit) = hit else {
                    self.selected = None;
                    self.input = InputState::Idle;
                    return Action::SelectionChanged;
                };
                self.selected = Some(hit.id);
                // Sections always exist for a fresh hit, but a stale id is a
                // no-op rather than a panic.
                let Some(section) = self.doc.get(&hit.id) else {
                    return Action::SelectionChanged;
                };
                self.input = match hit.part {
                    HitPart::ResizeHandle => InputState::Resizing {
                        id: hit.id,
                        start: pt,
                        initial_w: section.w,
                        initial_h: section.h,
                    },
                    HitPart::Body => InputState::Moving {
                        id: hit.id,
                        grab_offset: Point::new(pt.x - section.x, pt.y - section.y),
                    },
                };
                Action::SelectionChanged
            }
            Mode::Draw => {
                // Clicking an existing section in draw mode selects it
                // instead of starting an overlapping draft.
                if let Some(hit) = hit {
                    self.selected = Some(hit.id);
                    return Action::SelectionChanged;
                }
                self.input = InputState::Drawing(DraftRect::anchored_at(pt));
                Action::RenderNeeded
            }
        }
    }

    /// Handle pointer-move to `pt` in canvas coordinates.
    pub fn pointer_move(&mut self, pt: Point) -> Action {
        match self.input {
            InputState::Drawing(ref mut draft) => {
                draft.end = pt;
                Action::RenderNeeded
            }
            InputState::Moving { id, grab_offset } => {
                let (canvas_w, canvas_h) = (self.canvas_w, self.canvas_h);
                let Some(section) = self.doc.get_mut(&id) else {
                    return Action::None;
                };
                section.x = clamp(pt.x - grab_offset.x, 0.0, canvas_w - section.w);
                section.y = clamp(pt.y - grab_offset.y, 0.0, canvas_h - section.h);
                Action::RenderNeeded
            }
            InputState::Resizing { id, start, initial_w, initial_h } => {
                let (canvas_w, canvas_h) = (self.canvas_w, self.canvas_h);
                let Some(section) = self.doc.get_mut(&id) else {
                    return Action::None;
                };
                let target_w = (initial_w + pt.x - start.x).round();
                let target_h = (initial_h + pt.y - start.y).round();
                section.w = clamp(target_w, MIN_SECTION_SIZE, canvas_w - section.x);
                section.h = clamp(target_h, MIN_SECTION_SIZE, canvas_h - section.y);
                Action::RenderNeeded
            }
            InputState::Idle => Action::None,
        }
    }

    /// Handle pointer-up: finalize the active gesture.
    ///
    /// A draft whose normalized rectangle clears the minimum size in both
    /// dimensions becomes a new section seeded from `form`; otherwise it is
    /// discarded. A finished move/resize asks the host to persist.
    pub fn pointer_up(&mut self, form: &SectionForm) -> Action {
        match std::mem::take(&mut self.input) {
            InputState::Drawing(draft) => self.commit_draft(draft, form),
            InputState::Moving { .. } | InputState::Resizing { .. } => Action::LayoutChanged,
            InputState::Idle => Action::None,
        }
    }

    /// Handle the pointer leaving the canvas: same finalization as release.
    pub fn pointer_leave(&mut self, form: &SectionForm) -> Action {
        self.pointer_up(form)
    }

    fn commit_draft(&mut self, draft: DraftRect, form: &SectionForm) -> Action {
        let rect = draft.normalized();
        if rect.w < MIN_SECTION_SIZE || rect.h < MIN_SECTION_SIZE {
            return Action::DraftRejected;
        }

        let name = if form.name.trim().is_empty() {
            self.doc.next_default_name()
        } else {
            form.name.trim().to_owned()
        };
        let section = Section {
            id: uuid::Uuid::new_v4(),
            name,
            shelf: form.shelf.trim().to_owned(),
            kind: form.kind,
            color: form.color.clone(),
            x: rect.x.round(),
            y: rect.y.round(),
            w: rect.w.round(),
            h: rect.h.round(),
            products: Vec::new(),
        };
        let id = section.id;
        self.doc.push(section);
        self.selected = Some(id);
        Action::SectionCreated(id)
    }

    // --- Document operations ---

    /// Delete the selected section, returning it for status reporting.
    pub fn delete_selected(&mut self) -> Option<Section> {
        let id = self.selected.take()?;
        self.doc.remove(&id)
    }

    /// Remove every section and clear the selection.
    pub fn clear(&mut self) {
        self.doc.clear();
        self.selected = None;
        self.input = InputState::Idle;
    }

    /// Assign a product to the selected section, returning the section name.
    pub fn add_product_to_selected(&mut self, name: String, code: String) -> Option<String> {
        let id = self.selected?;
        let section = self.doc.get_mut(&id)?;
        section.push_product(Product::new(name, code));
        Some(section.name.clone())
    }

    /// Remove a product from a section, returning the section name.
    pub fn remove_product(&mut self, section_id: &SectionId, product_id: &ProductId) -> Option<String> {
        let section = self.doc.get_mut(section_id)?;
        section.remove_product(product_id)?;
        Some(section.name.clone())
    }

    /// The current draft rectangle, if a draw gesture is in progress.
    #[must_use]
    pub fn draft(&self) -> Option<DraftRect> {
        match self.input {
            InputState::Drawing(draft) => Some(draft),
            _ => None,
        }
    }
}

/// The full canvas engine. Wraps [`EngineCore`] and owns the browser canvas
/// element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element, sized from its
    /// width/height attributes.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let core = EngineCore::new(f64::from(canvas.width()), f64::from(canvas.height()));
        Self { canvas, core }
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        render::draw(&ctx, &self.core)
    }
}
