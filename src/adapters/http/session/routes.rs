//! Route configuration for session endpoints.
//!
//! Configures the Axum router with session-related routes.

use axum::routing::get;
use axum::Router;

use super::handlers::{create_session, list_sessions, update_session, SessionAppState};

/// Creates the session router with all endpoints.
///
/// Routes:
/// - `GET /api/sessions` - List the acting instructor's sessions
/// - `POST /api/sessions` - Create a new session
/// - `PUT /api/sessions` - Overwrite an existing session
pub fn session_router() -> Router<SessionAppState> {
    Router::new().route(
        "/api/sessions",
        get(list_sessions).post(create_session).put(update_session),
    )
}
