//! Wire payloads exchanged with the backend.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Token pair returned by `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Generic backend response carrying an optional human-readable detail.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Authenticated user returned by `GET /auth/me`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub perfil: Option<String>,
}

/// Section create payload for `POST /secoes/`.
///
/// The backend stores geometry as integers, so pixel coordinates are rounded
/// before they cross the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPayload {
    pub nome: String,
    pub pos_x: i64,
    pub pos_y: i64,
    pub largura: i64,
    pub altura: i64,
    pub cor_padrao: String,
}
