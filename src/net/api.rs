//! REST API helpers for the session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a failed
//! session fetch degrades to an anonymous session without crashing
//! hydration.

#![allow(clippy::unused_async)]

use crate::state::session::{Credentials, Identity, SessionError};

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated, on request failure, or on the server.
pub async fn fetch_current_user() -> Option<Identity> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Identity>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log in via `POST /api/auth/login`.
///
/// # Errors
///
/// `InvalidCredentials` on a 401 response; `Request` on transport or
/// decoding failures.
pub async fn login(credentials: &Credentials) -> Result<Identity, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(credentials)
            .map_err(|e| SessionError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| SessionError::Request(e.to_string()))?;
        if resp.status() == 401 {
            return Err(SessionError::InvalidCredentials);
        }
        if !resp.ok() {
            return Err(SessionError::Request(format!(
                "login failed: {}",
                resp.status()
            )));
        }
        resp.json::<Identity>()
            .await
            .map_err(|e| SessionError::Request(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(SessionError::Request("not available on server".to_owned()))
    }
}

/// Log out via `POST /api/auth/logout`.
///
/// # Errors
///
/// `Request` if the call cannot be made or the server rejects it.
pub async fn logout() -> Result<(), SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await
            .map_err(|e| SessionError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(SessionError::Request(format!(
                "logout failed: {}",
                resp.status()
            )));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SessionError::Request("not available on server".to_owned()))
    }
}
