//! Document model: sections, products, and the ordered layout store.
//!
//! This module defines the core data types that describe the warehouse floor
//! plan (`Section`, `Product`, `SectionKind`) and the runtime store that owns
//! the live layout (`LayoutDoc`). Unlike a z-indexed scene graph, the layout
//! is an ordered list: insertion order is draw order, and later sections win
//! hit-test ties because they are visually on top.
//!
//! Data flows into this layer from browser storage (JSON deserialization) and
//! from the input engine (mutations). The renderer and the section list read
//! from `LayoutDoc` in insertion order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::Rect;

/// Unique identifier for a section.
pub type SectionId = Uuid;

/// Unique identifier for a product assigned to a section.
pub type ProductId = Uuid;

/// The functional kind of a warehouse section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Bulk storage shelving.
    #[default]
    Armazenagem,
    /// Order-picking area.
    Picking,
    /// Inbound receiving dock.
    Recebimento,
    /// Outbound expedition dock.
    Expedicao,
}

impl SectionKind {
    /// Human-readable label shown on the canvas and in the section list.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Armazenagem => "Armazenagem",
            Self::Picking => "Picking",
            Self::Recebimento => "Recebimento",
            Self::Expedicao => "Expedicao",
        }
    }

    /// Parse a form select value. Unknown values fall back to the default.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "picking" => Self::Picking,
            "recebimento" => Self::Recebimento,
            "expedicao" => Self::Expedicao,
            _ => Self::Armazenagem,
        }
    }

    /// The wire/form value for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Armazenagem => "armazenagem",
            Self::Picking => "picking",
            Self::Recebimento => "recebimento",
            Self::Expedicao => "expedicao",
        }
    }
}

/// A product assigned to exactly one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for this product entry.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Optional internal code; empty when not provided.
    #[serde(default)]
    pub code: String,
}

impl Product {
    /// Create a product with a fresh id.
    #[must_use]
    pub fn new(name: String, code: String) -> Self {
        Self { id: Uuid::new_v4(), name, code }
    }
}

/// A rectangular section of the warehouse floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Unique identifier for this section.
    pub id: SectionId,
    /// Display name.
    pub name: String,
    /// Shelf label; empty when not provided.
    #[serde(default)]
    pub shelf: String,
    /// Functional kind of the section.
    #[serde(default)]
    pub kind: SectionKind,
    /// Fill/outline color as a `#rrggbb` hex string.
    pub color: String,
    /// Left edge in canvas pixels.
    pub x: f64,
    /// Top edge in canvas pixels.
    pub y: f64,
    /// Width in canvas pixels; at least [`crate::consts::MIN_SECTION_SIZE`].
    pub w: f64,
    /// Height in canvas pixels; at least [`crate::consts::MIN_SECTION_SIZE`].
    pub h: f64,
    /// Products assigned to this section. Older stored layouts may omit the
    /// field entirely; it deserializes to an empty list.
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Section {
    /// The section's bounding rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: self.w, h: self.h }
    }

    /// Append a product to this section.
    pub fn push_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Remove a product by id, returning it if it was present.
    pub fn remove_product(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| &p.id == id)?;
        Some(self.products.remove(index))
    }
}

/// Parse a stored layout JSON array, resetting to empty on any failure.
///
/// Corrupt or absent data must never take the editor down; the layout simply
/// starts over.
#[must_use]
pub fn sections_from_json(raw: &str) -> Vec<Section> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Ordered, in-memory store of the floor-plan sections.
#[derive(Debug, Clone, Default)]
pub struct LayoutDoc {
    sections: Vec<Section>,
}

impl LayoutDoc {
    /// Create an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-loaded section list, preserving its order.
    #[must_use]
    pub fn from_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// All sections in insertion (draw) order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Append a section on top of the existing layout.
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Remove a section by id, returning it if it was present.
    pub fn remove(&mut self, id: &SectionId) -> Option<Section> {
        let index = self.sections.iter().position(|s| &s.id == id)?;
        Some(self.sections.remove(index))
    }

    /// Remove every section.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Return a reference to a section by id.
    #[must_use]
    pub fn get(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    /// Return a mutable reference to a section by id.
    pub fn get_mut(&mut self, id: &SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| &s.id == id)
    }

    /// Auto-numbered fallback name for a section created with a blank name.
    #[must_use]
    pub fn next_default_name(&self) -> String {
        format!("Secao {}", self.sections.len() + 1)
    }

    /// Number of sections in the layout.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the layout contains no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
