//! Token storage, payload decoding, and the role-gated session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthorized redirect behavior:
//! a missing, undecodable, or disallowed-role token sends the visitor to
//! `/login/` with no retries. The token signature is never verified here —
//! client-side gating is a UX convenience, not a security boundary.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::state::auth::{Profile, Session};

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "stockflow_access_token";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "stockflow_refresh_token";
/// Storage key for the remember-me flag (always in persistent storage).
pub const REMEMBER_MODE_KEY: &str = "stockflow_remember_mode";

/// Route visitors are sent to when no valid session exists.
pub const LOGIN_ROUTE: &str = "/login/";

/// The claims this client reads from an access token payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenClaims {
    /// Subject: the user id.
    #[serde(default)]
    pub sub: Option<String>,
    /// Access profile.
    #[serde(default)]
    pub perfil: Option<String>,
}

/// Decode the payload of a `header.payload.signature` token.
///
/// The middle segment is base64url (unpadded) JSON. Any structural or
/// decoding failure yields `None`; the guard treats that the same as a
/// missing token.
#[must_use]
pub fn decode_token_payload(token: &str) -> Option<TokenClaims> {
    let mut parts = token.split('.');
    let (Some(_), Some(payload), Some(_), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Derive a session from a stored token, gated by an allowed-profile set.
///
/// Pure core of [`ensure_role_session`], usable without a browser.
#[must_use]
pub fn session_for_token(token: Option<&str>, allowed: &[Profile]) -> Option<Session> {
    let claims = decode_token_payload(token?)?;
    let role = Profile::parse(claims.perfil.as_deref()?)?;
    if !allowed.contains(&role) {
        return None;
    }
    Some(Session {
        role,
        user_id: claims.sub.unwrap_or_default(),
    })
}

/// The profile carried by the stored access token, if any.
#[must_use]
pub fn current_profile() -> Option<Profile> {
    let token = access_token()?;
    let claims = decode_token_payload(&token)?;
    Profile::parse(claims.perfil.as_deref()?)
}

/// Read the stored access token, derive the session, and redirect to the
/// login route when the visitor is not allowed here.
#[must_use]
pub fn ensure_role_session(allowed: &[Profile]) -> Option<Session> {
    let session = session_for_token(access_token().as_deref(), allowed);
    if session.is_none() {
        #[cfg(feature = "hydrate")]
        {
            log::info!("no valid session for this area, redirecting to login");
            redirect(LOGIN_ROUTE);
        }
    }
    session
}

/// Clear both tokens and return to the login route.
pub fn logout() {
    clear_tokens();
    #[cfg(feature = "hydrate")]
    redirect(LOGIN_ROUTE);
}

// ── Browser storage ─────────────────────────────────────────────
//
// Tokens live in localStorage when the user asked to be remembered and in
// sessionStorage otherwise; reads check both so either mode round-trips.

/// Whether the last login asked to be remembered across sessions.
#[must_use]
pub fn remember_mode() -> bool {
    #[cfg(feature = "hydrate")]
    {
        local_storage()
            .and_then(|s| s.get_item(REMEMBER_MODE_KEY).ok().flatten())
            .is_some_and(|v| v == "1")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Store both tokens, honoring the remember-me flag.
pub fn save_tokens(access_token: &str, refresh_token: &str, remember: bool) {
    #[cfg(feature = "hydrate")]
    {
        clear_tokens();
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(REMEMBER_MODE_KEY, if remember { "1" } else { "0" });
        }
        let target = if remember { local_storage() } else { session_storage() };
        if let Some(storage) = target {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, access_token);
            let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh_token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_token, refresh_token, remember);
    }
}

/// Read the stored access token from either storage scope.
#[must_use]
pub fn access_token() -> Option<String> {
    read_from_either(ACCESS_TOKEN_KEY)
}

/// Read the stored refresh token from either storage scope.
#[must_use]
pub fn refresh_token() -> Option<String> {
    read_from_either(REFRESH_TOKEN_KEY)
}

/// Remove both tokens from both storage scopes.
pub fn clear_tokens() {
    #[cfg(feature = "hydrate")]
    {
        for storage in [local_storage(), session_storage()].into_iter().flatten() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}

#[cfg(feature = "hydrate")]
fn read_from_either(key: &str) -> Option<String> {
    let local = local_storage().and_then(|s| s.get_item(key).ok().flatten());
    local.or_else(|| session_storage().and_then(|s| s.get_item(key).ok().flatten()))
}

#[cfg(not(feature = "hydrate"))]
#[must_use]
fn read_from_either(_key: &str) -> Option<String> {
    None
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Replace the current location, dropping the page from history.
#[cfg(feature = "hydrate")]
pub fn redirect(route: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().replace(route);
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn redirect(route: &str) {
    let _ = route;
}
