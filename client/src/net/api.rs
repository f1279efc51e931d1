//! REST API helpers for talking to the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Login and password-reset calls surface the backend's `detail` message when
//! one is present and fall back to a fixed pt-BR message otherwise, so pages
//! can show the error text directly.

#![allow(clippy::unused_async)]

#[cfg(feature = "hydrate")]
use super::types::ApiDetail;
use super::types::{CurrentUser, TokenPair};

/// Authenticate with email and password via `POST /auth/login`.
///
/// # Errors
///
/// Returns the backend's `detail` message, or `"Falha ao autenticar."` when
/// the response carries none.
pub async fn login(base_url: &str, email: &str, senha: &str) -> Result<TokenPair, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{base_url}/auth/login");
        let body = serde_json::json!({ "email": email, "senha": senha });
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| "Falha ao autenticar.".to_owned())?;
        if !resp.ok() {
            let detail = resp.json::<ApiDetail>().await.ok().and_then(|d| d.detail);
            return Err(detail.unwrap_or_else(|| "Falha ao autenticar.".to_owned()));
        }
        resp.json::<TokenPair>()
            .await
            .map_err(|_| "Falha ao autenticar.".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base_url, email, senha);
        Err("not available on server".to_owned())
    }
}

/// Request a password-reset email via `POST /auth/forgot-password`.
///
/// Returns the confirmation message to show the user.
///
/// # Errors
///
/// Returns the backend's `detail` message, or `"Falha ao solicitar
/// redefinicao."` when the response carries none.
pub async fn forgot_password(base_url: &str, email: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{base_url}/auth/forgot-password");
        let body = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| "Falha ao solicitar redefinicao.".to_owned())?;
        let detail = resp.json::<ApiDetail>().await.ok().and_then(|d| d.detail);
        if !resp.ok() {
            return Err(detail.unwrap_or_else(|| "Falha ao solicitar redefinicao.".to_owned()));
        }
        Ok(detail.unwrap_or_else(|| "Solicitacao enviada.".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base_url, email);
        Err("not available on server".to_owned())
    }
}

/// Fetch the authenticated user from `GET /auth/me`.
/// Returns `None` if the request fails or on the server.
pub async fn fetch_current_user(base_url: &str, token: &str) -> Option<CurrentUser> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{base_url}/auth/me");
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<CurrentUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base_url, token);
        None
    }
}
