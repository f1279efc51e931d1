use super::*;

// =============================================================
// Profile parsing
// =============================================================

#[test]
fn parse_round_trips_known_profiles() {
    for profile in [Profile::Admin, Profile::Gerente, Profile::Lider, Profile::Funcionario] {
        assert_eq!(Profile::parse(profile.as_str()), Some(profile));
    }
}

#[test]
fn parse_rejects_unknown_profiles() {
    assert_eq!(Profile::parse("root"), None);
    assert_eq!(Profile::parse(""), None);
    assert_eq!(Profile::parse("Admin"), None);
}

// =============================================================
// Landing paths
// =============================================================

#[test]
fn each_profile_maps_to_its_area() {
    assert_eq!(Profile::Admin.landing_path(), "/admin/");
    assert_eq!(Profile::Gerente.landing_path(), "/gerente/");
    assert_eq!(Profile::Lider.landing_path(), "/gerente/");
    assert_eq!(Profile::Funcionario.landing_path(), "/funcionario/");
}
