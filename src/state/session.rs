#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Role required to enter the admin area.
pub const ADMIN_ROLE: &str = "admin";

/// Resolution status of the current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// The session API has not answered yet; `identity` is not authoritative.
    #[default]
    Pending,
    Resolved,
}

/// An authenticated visitor as reported by the session API.
///
/// `roles` is optional on the wire. An identity that arrives without a role
/// set carries no roles at all, so [`Identity::has_role`] is always `false`
/// for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
}

impl Identity {
    /// Whether this identity was granted `role`.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles
            .as_ref()
            .is_some_and(|roles| roles.iter().any(|r| r == role))
    }
}

/// Login form credentials sent to the session API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Session state tracking the current visitor.
///
/// Mutated only by the action functions below; every other part of the app
/// holds a read signal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub identity: Option<Identity>,
}

impl SessionState {
    /// A resolved session with the given identity, or an anonymous one.
    pub fn resolved(identity: Option<Identity>) -> Self {
        Self {
            status: SessionStatus::Resolved,
            identity,
        }
    }
}

/// Errors surfaced by the session API and its actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("session request failed: {0}")]
    Request(String),
}

/// The three mutually exclusive render modes of the admin area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Loading,
    Unauthenticated,
    Authorized,
}

impl AccessDecision {
    /// Derive the render mode from the current session.
    ///
    /// A pending session is `Loading` regardless of identity contents. A
    /// resolved session is `Authorized` only when an identity is present and
    /// carries [`ADMIN_ROLE`]; anything else, including an identity with no
    /// role set, is `Unauthenticated`.
    pub fn from_session(session: &SessionState) -> Self {
        Self::with_role_check(session, |identity| Ok(identity.has_role(ADMIN_ROLE)))
    }

    /// Same derivation with an explicit, fallible role predicate.
    ///
    /// A predicate error denies access instead of propagating.
    pub fn with_role_check<F>(session: &SessionState, is_admin: F) -> Self
    where
        F: Fn(&Identity) -> Result<bool, SessionError>,
    {
        if session.status == SessionStatus::Pending {
            return Self::Loading;
        }
        match &session.identity {
            Some(identity) => match is_admin(identity) {
                Ok(true) => Self::Authorized,
                Ok(false) => Self::Unauthenticated,
                Err(err) => {
                    log::warn!("role check failed, denying access: {err}");
                    Self::Unauthenticated
                }
            },
            None => Self::Unauthenticated,
        }
    }
}

// Session actions. Writes go through `try_update` so a response that lands
// after the owning view was disposed is dropped instead of panicking.

/// Resolve the current session from the server.
///
/// A resolution failure resolves to an anonymous session rather than leaving
/// the UI stuck in loading.
pub async fn resolve_session(session: RwSignal<SessionState>) {
    let identity = crate::net::api::fetch_current_user().await;
    let _ = session.try_update(|s| *s = SessionState::resolved(identity));
}

/// Log in through the session API.
///
/// On success the session resolves to the returned identity.
///
/// # Errors
///
/// Returns the API error unchanged; the session is left untouched so the
/// login view can display the failure without a render-mode change.
pub async fn login(
    session: RwSignal<SessionState>,
    credentials: Credentials,
) -> Result<(), SessionError> {
    let identity = crate::net::api::login(&credentials).await?;
    let _ = session.try_update(|s| *s = SessionState::resolved(Some(identity)));
    Ok(())
}

/// Log out through the session API.
///
/// The session resolves to anonymous even if the request fails; the server
/// cookie may outlive us briefly but the client never stays authorized.
pub async fn logout(session: RwSignal<SessionState>) {
    if let Err(err) = crate::net::api::logout().await {
        log::warn!("logout request failed: {err}");
    }
    let _ = session.try_update(|s| *s = SessionState::resolved(None));
}
