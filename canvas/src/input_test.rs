use super::*;
use crate::doc::SectionKind;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_mode_is_draw() {
    assert_eq!(Mode::default(), Mode::Draw);
}

#[test]
fn default_input_state_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn default_form_has_blank_name_and_a_color() {
    let form = SectionForm::default();
    assert!(form.name.is_empty());
    assert!(form.shelf.is_empty());
    assert_eq!(form.kind, SectionKind::Armazenagem);
    assert!(form.color.starts_with('#'));
}
