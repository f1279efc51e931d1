#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_section(name: &str) -> Section {
    Section {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        shelf: "A1".to_owned(),
        kind: SectionKind::Picking,
        color: "#2e7d32".to_owned(),
        x: 40.0,
        y: 60.0,
        w: 120.0,
        h: 80.0,
        products: Vec::new(),
    }
}

// =============================================================
// SectionKind
// =============================================================

#[test]
fn kind_parse_round_trips_known_values() {
    for kind in [
        SectionKind::Armazenagem,
        SectionKind::Picking,
        SectionKind::Recebimento,
        SectionKind::Expedicao,
    ] {
        assert_eq!(SectionKind::parse(kind.as_str()), kind);
    }
}

#[test]
fn kind_parse_falls_back_to_default_on_unknown() {
    assert_eq!(SectionKind::parse("freezer"), SectionKind::Armazenagem);
    assert_eq!(SectionKind::parse(""), SectionKind::Armazenagem);
}

// =============================================================
// Section serde
// =============================================================

#[test]
fn section_round_trips_with_products() {
    let mut section = make_section("Bebidas");
    section.push_product(Product::new("Agua".to_owned(), "SKU-1".to_owned()));
    section.push_product(Product::new("Suco".to_owned(), String::new()));

    let raw = serde_json::to_string(&section).unwrap();
    let back: Section = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, section);
    assert_eq!(back.products.len(), 2);
    assert_eq!(back.products[0].code, "SKU-1");
}

#[test]
fn section_without_products_field_defaults_to_empty() {
    // Older stored layouts predate product assignment.
    let raw = r##"{
        "id": "7f1dab24-3c5e-4a0b-9dcb-111111111111",
        "name": "Legado",
        "color": "#336699",
        "x": 1.0, "y": 2.0, "w": 30.0, "h": 40.0
    }"##;
    let section: Section = serde_json::from_str(raw).unwrap();
    assert!(section.products.is_empty());
    assert_eq!(section.shelf, "");
    assert_eq!(section.kind, SectionKind::Armazenagem);
}

#[test]
fn layout_list_round_trips_exactly() {
    let mut a = make_section("A");
    a.push_product(Product::new("Caixa".to_owned(), "C-9".to_owned()));
    let b = make_section("B");
    let sections = vec![a, b];

    let raw = serde_json::to_string(&sections).unwrap();
    assert_eq!(sections_from_json(&raw), sections);
}

#[test]
fn corrupted_layout_json_yields_empty_list() {
    assert!(sections_from_json("{not json").is_empty());
    assert!(sections_from_json("42").is_empty());
    assert!(sections_from_json("").is_empty());
}

// =============================================================
// LayoutDoc
// =============================================================

#[test]
fn push_preserves_insertion_order() {
    let mut doc = LayoutDoc::new();
    doc.push(make_section("primeira"));
    doc.push(make_section("segunda"));
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.sections()[0].name, "primeira");
    assert_eq!(doc.sections()[1].name, "segunda");
}

#[test]
fn remove_returns_section_and_shrinks_layout() {
    let mut doc = LayoutDoc::new();
    let section = make_section("alvo");
    let id = section.id;
    doc.push(section);
    doc.push(make_section("resto"));

    let removed = doc.remove(&id).unwrap();
    assert_eq!(removed.name, "alvo");
    assert_eq!(doc.len(), 1);
    assert!(doc.get(&id).is_none());
}

#[test]
fn remove_unknown_id_is_none() {
    let mut doc = LayoutDoc::new();
    doc.push(make_section("unica"));
    assert!(doc.remove(&Uuid::new_v4()).is_none());
    assert_eq!(doc.len(), 1);
}

#[test]
fn clear_empties_layout() {
    let mut doc = LayoutDoc::from_sections(vec![make_section("a"), make_section("b")]);
    doc.clear();
    assert!(doc.is_empty());
}

#[test]
fn next_default_name_counts_from_current_size() {
    let mut doc = LayoutDoc::new();
    assert_eq!(doc.next_default_name(), "Secao 1");
    doc.push(make_section("x"));
    doc.push(make_section("y"));
    assert_eq!(doc.next_default_name(), "Secao 3");
}

#[test]
fn product_removal_targets_by_id() {
    let mut section = make_section("P");
    let keep = Product::new("fica".to_owned(), String::new());
    let drop = Product::new("sai".to_owned(), String::new());
    let drop_id = drop.id;
    section.push_product(keep.clone());
    section.push_product(drop);

    assert_eq!(section.remove_product(&drop_id).unwrap().name, "sai");
    assert!(section.remove_product(&drop_id).is_none());
    assert_eq!(section.products, vec![keep]);
}
