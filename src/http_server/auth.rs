//! Session authentication for route handlers.
//!
//! Requests carry `Authorization: Bearer <token>`; the token is looked up in
//! the session collection. Each route declares one of three requirements,
//! dispatched here before handler logic runs. This is a fake backend: the
//! check establishes *who* the caller is, it enforces no real authorization.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use chrono::Utc;
use uuid::Uuid;

use super::errors::ApiError;
use super::state::AppState;
use crate::store::Store;

/// Authentication requirement a route declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    /// No session is consulted.
    None,
    /// A valid session token is mandatory.
    Session,
    /// A session is attached when present, absent otherwise.
    OptionalSession,
}

/// Who the caller is, resolved from their session.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub account_id: Uuid,
    pub session_id: Uuid,
}

/// Resolve the auth context for a request according to the requirement.
///
/// Expired sessions are treated as absent. `Session` turns an absent
/// context into a 401; the other requirements pass `None` through.
pub fn authenticate(
    headers: &HeaderMap,
    store: &Store,
    requirement: AuthRequirement,
) -> Result<Option<AuthContext>, ApiError> {
    if requirement == AuthRequirement::None {
        return Ok(None);
    }

    let session = match bearer_token(headers) {
        Some(token) => store
            .get_session_by_token(token)?
            .filter(|s| s.expires_at > Utc::now()),
        None => None,
    };

    match (requirement, session) {
        (_, Some(session)) => Ok(Some(AuthContext {
            account_id: session.account_id,
            session_id: session.session_id,
        })),
        (AuthRequirement::Session, None) => Err(ApiError::unauthorized()),
        _ => Ok(None),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Extractor for routes requiring a session.
pub struct SessionAuth(pub AuthContext);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for SessionAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        authenticate(&parts.headers, &state.store, AuthRequirement::Session)?
            .map(SessionAuth)
            .ok_or_else(ApiError::unauthorized)
    }
}

/// Extractor for routes where a session is optional.
pub struct OptionalSessionAuth(pub Option<AuthContext>);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for OptionalSessionAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        authenticate(
            &parts.headers,
            &state.store,
            AuthRequirement::OptionalSession,
        )
        .map(OptionalSessionAuth)
    }
}
