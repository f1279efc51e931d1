use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::state::auth::Profile;

// =============================================================
// Helpers
// =============================================================

/// Build an unsigned `header.payload.signature` token with the given payload.
fn token_with_payload(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload);
    format!("{header}.{body}.sig")
}

fn admin_token() -> String {
    token_with_payload(r#"{"sub":"user-17","perfil":"admin"}"#)
}

// =============================================================
// decode_token_payload
// =============================================================

#[test]
fn decodes_sub_and_perfil_claims() {
    let claims = decode_token_payload(&admin_token()).unwrap();
    assert_eq!(claims.sub.as_deref(), Some("user-17"));
    assert_eq!(claims.perfil.as_deref(), Some("admin"));
}

#[test]
fn tolerates_extra_claims() {
    let token = token_with_payload(r#"{"sub":"u","perfil":"gerente","exp":1234567890,"iss":"stockflow"}"#);
    let claims = decode_token_payload(&token).unwrap();
    assert_eq!(claims.perfil.as_deref(), Some("gerente"));
}

#[test]
fn rejects_wrong_segment_count() {
    assert!(decode_token_payload("only-one-segment").is_none());
    assert!(decode_token_payload("two.segments").is_none());
    assert!(decode_token_payload("a.b.c.d").is_none());
    assert!(decode_token_payload("").is_none());
}

#[test]
fn rejects_non_base64_payload() {
    assert!(decode_token_payload("h.$$$$.s").is_none());
}

#[test]
fn rejects_non_json_payload() {
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json"));
    assert!(decode_token_payload(&token).is_none());
}

// =============================================================
// session_for_token
// =============================================================

#[test]
fn allowed_role_yields_session() {
    let token = admin_token();
    let session = session_for_token(Some(&token), &[Profile::Admin]).unwrap();
    assert_eq!(session.role, Profile::Admin);
    assert_eq!(session.user_id, "user-17");
}

#[test]
fn disallowed_role_yields_no_session() {
    let token = admin_token();
    assert!(session_for_token(Some(&token), &[Profile::Funcionario]).is_none());
    assert!(session_for_token(Some(&token), &[]).is_none());
}

#[test]
fn shared_gerente_area_accepts_lider() {
    let token = token_with_payload(r#"{"sub":"u2","perfil":"lider"}"#);
    let allowed = [Profile::Lider, Profile::Gerente];
    let session = session_for_token(Some(&token), &allowed).unwrap();
    assert_eq!(session.role, Profile::Lider);
}

#[test]
fn missing_token_yields_no_session() {
    assert!(session_for_token(None, &[Profile::Admin]).is_none());
}

#[test]
fn token_without_perfil_yields_no_session() {
    let token = token_with_payload(r#"{"sub":"u3"}"#);
    assert!(session_for_token(Some(&token), &[Profile::Admin]).is_none());
}

#[test]
fn unknown_perfil_yields_no_session() {
    let token = token_with_payload(r#"{"sub":"u4","perfil":"superuser"}"#);
    assert!(session_for_token(Some(&token), &[Profile::Admin]).is_none());
}

#[test]
fn missing_sub_defaults_to_empty_user_id() {
    let token = token_with_payload(r#"{"perfil":"admin"}"#);
    let session = session_for_token(Some(&token), &[Profile::Admin]).unwrap();
    assert_eq!(session.user_id, "");
}
