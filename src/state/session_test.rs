use super::*;

fn admin_identity() -> Identity {
    Identity {
        id: "u1".to_owned(),
        display_name: "Ada".to_owned(),
        roles: Some(vec!["admin".to_owned()]),
    }
}

fn viewer_identity() -> Identity {
    Identity {
        id: "u2".to_owned(),
        display_name: "Vera".to_owned(),
        roles: Some(vec!["viewer".to_owned()]),
    }
}

fn roleless_identity() -> Identity {
    Identity {
        id: "u3".to_owned(),
        display_name: "Nia".to_owned(),
        roles: None,
    }
}

// =============================================================
// SessionState defaults and constructors
// =============================================================

#[test]
fn session_default_is_pending_without_identity() {
    let session = SessionState::default();
    assert_eq!(session.status, SessionStatus::Pending);
    assert!(session.identity.is_none());
}

#[test]
fn resolved_constructor_sets_status() {
    let session = SessionState::resolved(Some(admin_identity()));
    assert_eq!(session.status, SessionStatus::Resolved);
    assert!(session.identity.is_some());
}

// =============================================================
// Identity roles
// =============================================================

#[test]
fn has_role_matches_granted_role() {
    assert!(admin_identity().has_role(ADMIN_ROLE));
    assert!(!viewer_identity().has_role(ADMIN_ROLE));
}

#[test]
fn has_role_is_false_without_role_set() {
    assert!(!roleless_identity().has_role(ADMIN_ROLE));
}

#[test]
fn identity_without_roles_field_deserializes_to_none() {
    let identity: Identity =
        serde_json::from_str(r#"{"id":"u1","display_name":"Ada"}"#).unwrap();
    assert!(identity.roles.is_none());
    assert!(!identity.has_role(ADMIN_ROLE));
}

// =============================================================
// AccessDecision derivation
// =============================================================

#[test]
fn pending_is_loading_without_identity() {
    let session = SessionState::default();
    assert_eq!(AccessDecision::from_session(&session), AccessDecision::Loading);
}

#[test]
fn pending_is_loading_even_with_admin_identity() {
    let session = SessionState {
        status: SessionStatus::Pending,
        identity: Some(admin_identity()),
    };
    assert_eq!(AccessDecision::from_session(&session), AccessDecision::Loading);
}

#[test]
fn resolved_without_identity_is_unauthenticated() {
    let session = SessionState::resolved(None);
    assert_eq!(
        AccessDecision::from_session(&session),
        AccessDecision::Unauthenticated
    );
}

#[test]
fn resolved_non_admin_is_unauthenticated() {
    let session = SessionState::resolved(Some(viewer_identity()));
    assert_eq!(
        AccessDecision::from_session(&session),
        AccessDecision::Unauthenticated
    );
}

#[test]
fn resolved_admin_is_authorized() {
    let session = SessionState::resolved(Some(admin_identity()));
    assert_eq!(
        AccessDecision::from_session(&session),
        AccessDecision::Authorized
    );
}

#[test]
fn missing_role_set_is_unauthenticated() {
    let session = SessionState::resolved(Some(roleless_identity()));
    assert_eq!(
        AccessDecision::from_session(&session),
        AccessDecision::Unauthenticated
    );
}

#[test]
fn role_check_error_denies_access() {
    let session = SessionState::resolved(Some(admin_identity()));
    let decision = AccessDecision::with_role_check(&session, |_| {
        Err(SessionError::Request("role lookup failed".to_owned()))
    });
    assert_eq!(decision, AccessDecision::Unauthenticated);
}

// =============================================================
// Session lifecycle scenarios
// =============================================================

#[test]
fn pending_then_anonymous_resolution_switches_to_unauthenticated() {
    let mut session = SessionState::default();
    assert_eq!(AccessDecision::from_session(&session), AccessDecision::Loading);

    session = SessionState::resolved(None);
    assert_eq!(
        AccessDecision::from_session(&session),
        AccessDecision::Unauthenticated
    );
}

#[test]
fn login_then_logout_round_trip() {
    let mut session = SessionState::resolved(Some(admin_identity()));
    assert_eq!(
        AccessDecision::from_session(&session),
        AccessDecision::Authorized
    );

    session = SessionState::resolved(None);
    assert_eq!(
        AccessDecision::from_session(&session),
        AccessDecision::Unauthenticated
    );
}
