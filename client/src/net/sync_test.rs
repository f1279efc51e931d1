use canvas::doc::{Section, SectionKind};

use super::{SyncReport, section_payload};

fn section(name: &str, x: f64, y: f64, w: f64, h: f64) -> Section {
    Section {
        id: uuid::Uuid::new_v4(),
        name: name.to_owned(),
        shelf: String::new(),
        kind: SectionKind::Armazenagem,
        color: "#2e7d32".to_owned(),
        x,
        y,
        w,
        h,
        products: Vec::new(),
    }
}

#[test]
fn payload_maps_and_rounds_geometry() {
    let payload = section_payload(&section("Doca Norte", 10.4, 20.6, 99.5, 70.2));
    assert_eq!(payload.nome, "Doca Norte");
    assert_eq!(payload.pos_x, 10);
    assert_eq!(payload.pos_y, 21);
    assert_eq!(payload.largura, 100);
    assert_eq!(payload.altura, 70);
    assert_eq!(payload.cor_padrao, "#2e7d32");
}

#[test]
fn report_tallies_mixed_outcomes() {
    let mut report = SyncReport::default();
    report.record(true);
    report.record(false);
    report.record(true);
    assert_eq!(report.success, 2);
    assert_eq!(report.failed, 1);
    assert!(report.has_failures());
}

#[test]
fn report_without_failures() {
    let mut report = SyncReport::default();
    report.record(true);
    assert!(!report.has_failures());
}

#[test]
fn report_message_format() {
    let report = SyncReport {
        success: 3,
        failed: 1,
    };
    assert_eq!(
        report.message(),
        "Sincronizacao finalizada. Sucesso: 3, Falhas: 1."
    );
}
