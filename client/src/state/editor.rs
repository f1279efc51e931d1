//! Reactive mirror of the floor-plan editor for the DOM side.
//!
//! SYSTEM CONTEXT
//! ==============
//! The imperative `canvas::engine::Engine` owns the authoritative document
//! while the admin page is open. `CanvasHost` mirrors the document, selection
//! and mode into an [`EditorState`] signal after every engine action so the
//! section list, product panel and status bar can render reactively, and
//! applies queued [`EditorCommand`]s back onto the engine.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use canvas::doc::{ProductId, Section, SectionId, SectionKind};
use canvas::input::{Mode, SectionForm};

/// Snapshot of the engine state the DOM renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    /// Active editor mode.
    pub mode: Mode,
    /// Sections in draw order.
    pub sections: Vec<Section>,
    /// Currently selected section, if any.
    pub selected: Option<SectionId>,
}

impl EditorState {
    /// The selected section, if the selection still exists.
    #[must_use]
    pub fn selected_section(&self) -> Option<&Section> {
        let id = self.selected?;
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Sidebar form fields as bound to the DOM inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub shelf: String,
    /// Select value for the section kind.
    pub kind: String,
    /// Color input value; blank falls back to the form default.
    pub color: String,
}

impl FormState {
    /// Convert the raw DOM values into the engine's form type.
    #[must_use]
    pub fn to_section_form(&self) -> SectionForm {
        let mut form = SectionForm {
            name: self.name.clone(),
            shelf: self.shelf.clone(),
            kind: SectionKind::parse(&self.kind),
            ..SectionForm::default()
        };
        if !self.color.trim().is_empty() {
            form.color = self.color.trim().to_owned();
        }
        form
    }
}

/// A document operation queued by page controls for the canvas host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    /// Select a section from the list (or clear the selection).
    Select(Option<SectionId>),
    /// Delete the selected section.
    DeleteSelected,
    /// Remove every section.
    ClearAll,
    /// Assign a product to the selected section.
    AddProduct { name: String, code: String },
    /// Remove a product from a section.
    RemoveProduct { section: SectionId, product: ProductId },
}

/// A status-bar message with an error flag for styling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    /// An informational message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }

    /// An error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: true }
    }
}

// ── Status texts ────────────────────────────────────────────────

/// Initial admin-page status.
#[must_use]
pub fn ready() -> StatusMessage {
    StatusMessage::info("Pronto para desenhar e organizar a planta.")
}

/// A draft was committed as a section.
#[must_use]
pub fn section_created(name: &str) -> StatusMessage {
    StatusMessage::info(format!("Secao '{name}' criada."))
}

/// A draft was discarded for being under the minimum size.
#[must_use]
pub fn draft_rejected() -> StatusMessage {
    StatusMessage::error("Area muito pequena. Arraste uma area maior.")
}

/// The selected section was deleted.
#[must_use]
pub fn section_removed(name: &str) -> StatusMessage {
    StatusMessage::info(format!("Secao '{name}' removida."))
}

/// Delete was pressed with nothing selected.
#[must_use]
pub fn select_section_to_remove() -> StatusMessage {
    StatusMessage::error("Selecione uma secao para remover.")
}

/// A product was assigned to a section.
#[must_use]
pub fn product_added(section_name: &str) -> StatusMessage {
    StatusMessage::info(format!("Produto vinculado na secao '{section_name}'."))
}

/// A product was removed from a section.
#[must_use]
pub fn product_removed(section_name: &str) -> StatusMessage {
    StatusMessage::info(format!("Produto removido da secao '{section_name}'."))
}

/// Add-product was pressed with nothing selected.
#[must_use]
pub fn select_section_for_product() -> StatusMessage {
    StatusMessage::error("Selecione uma secao antes de vincular produto.")
}

/// Add-product was pressed with a blank product name.
#[must_use]
pub fn product_name_required() -> StatusMessage {
    StatusMessage::error("Informe o nome do produto.")
}

/// The whole layout was cleared.
#[must_use]
pub fn layout_cleared() -> StatusMessage {
    StatusMessage::info("Planta limpa.")
}

/// Sync was pressed with an empty layout.
#[must_use]
pub fn nothing_to_sync() -> StatusMessage {
    StatusMessage::error("Nada para sincronizar.")
}

/// Sync was pressed without a stored access token.
#[must_use]
pub fn missing_token() -> StatusMessage {
    StatusMessage::error("Sem token de autenticacao.")
}
