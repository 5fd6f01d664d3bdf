//! HTTP handlers for session endpoints.
//!
//! These handlers connect Axum routes to application layer command and
//! query handlers. The acting instructor always comes from the
//! `RequireAuth` extractor, never from the request body.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::session::{
    CreateSessionCommand, CreateSessionHandler, ListSessionsHandler, ListSessionsQuery,
    UpdateSessionCommand, UpdateSessionHandler,
};
use crate::application::Preconditions;
use crate::domain::foundation::{SessionId, StudentId};
use crate::domain::session::SessionError;
use crate::ports::{AccessChecker, SessionReader, SessionRepository};

use super::dto::{
    CreateSessionRequest, ErrorResponse, SessionPageResponse, SessionReceiptResponse,
    UpdateSessionRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all session dependencies.
#[derive(Clone)]
pub struct SessionAppState {
    pub repository: Arc<dyn SessionRepository>,
    pub reader: Arc<dyn SessionReader>,
    pub access_checker: Arc<dyn AccessChecker>,
}

impl SessionAppState {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        reader: Arc<dyn SessionReader>,
        access_checker: Arc<dyn AccessChecker>,
    ) -> Self {
        Self {
            repository,
            reader,
            access_checker,
        }
    }

    pub fn create_session_handler(&self) -> CreateSessionHandler {
        CreateSessionHandler::new(
            self.repository.clone(),
            Preconditions::new(self.access_checker.clone()),
        )
    }

    pub fn update_session_handler(&self) -> UpdateSessionHandler {
        UpdateSessionHandler::new(
            self.repository.clone(),
            Preconditions::new(self.access_checker.clone()),
        )
    }

    pub fn list_sessions_handler(&self) -> ListSessionsHandler {
        ListSessionsHandler::new(self.reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/sessions - List the acting instructor's sessions, newest first.
pub async fn list_sessions(
    State(state): State<SessionAppState>,
    RequireAuth(instructor): RequireAuth,
) -> Result<impl IntoResponse, SessionApiError> {
    let handler = state.list_sessions_handler();
    let pages = handler
        .handle(ListSessionsQuery {
            instructor_id: instructor.id,
        })
        .await?;

    let response: Vec<SessionPageResponse> =
        pages.into_iter().map(SessionPageResponse::from).collect();

    Ok((StatusCode::OK, Json(response)))
}

/// POST /api/sessions - Create a new session.
pub async fn create_session(
    State(state): State<SessionAppState>,
    RequireAuth(instructor): RequireAuth,
    Json(request): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, SessionApiError> {
    let student_id: StudentId = request
        .student_id
        .parse()
        .map_err(|_| SessionApiError::BadRequest("Invalid student ID format".to_string()))?;

    let handler = state.create_session_handler();
    let receipt = handler
        .handle(CreateSessionCommand {
            instructor_id: instructor.id,
            student_id,
            name: request.name,
            meetings: request.meetings,
            value: request.value,
            currency_code: request.currency,
            start_at: request.start_at,
            end_at: request.end_at,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(SessionReceiptResponse::from(receipt))))
}

/// PUT /api/sessions - Overwrite an existing session.
pub async fn update_session(
    State(state): State<SessionAppState>,
    RequireAuth(instructor): RequireAuth,
    Json(request): Json<UpdateSessionRequest>,
) -> Result<impl IntoResponse, SessionApiError> {
    let session_id: SessionId = request
        .id
        .parse()
        .map_err(|_| SessionApiError::BadRequest("Invalid session ID format".to_string()))?;
    let student_id: StudentId = request
        .student_id
        .parse()
        .map_err(|_| SessionApiError::BadRequest("Invalid student ID format".to_string()))?;

    let handler = state.update_session_handler();
    let receipt = handler
        .handle(UpdateSessionCommand {
            session_id,
            instructor_id: instructor.id,
            student_id,
            status: request.status,
            name: request.name,
            meetings: request.meetings,
            value: request.value,
            currency_code: request.currency,
            start_at: request.start_at,
            end_at: request.end_at,
        })
        .await?;

    Ok((StatusCode::OK, Json(SessionReceiptResponse::from(receipt))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts session errors to HTTP responses.
#[derive(Debug)]
pub enum SessionApiError {
    BadRequest(String),
    NotFound(String),
    Forbidden(String),
    Internal(String),
}

impl From<SessionError> for SessionApiError {
    fn from(err: SessionError) -> Self {
        match &err {
            SessionError::CurrencyNotFound(_)
            | SessionError::InvalidTotal(_)
            | SessionError::InvalidStatus(_) => SessionApiError::BadRequest(err.to_string()),
            SessionError::StudentNotFound(_) | SessionError::NotFound(_) => {
                SessionApiError::NotFound(err.to_string())
            }
            SessionError::NotYours { .. } => SessionApiError::Forbidden(err.to_string()),
            SessionError::Infrastructure(msg) => {
                tracing::error!("session operation failed: {}", msg);
                SessionApiError::Internal("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for SessionApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            SessionApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            SessionApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg))
            }
            SessionApiError::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, ErrorResponse::forbidden(msg))
            }
            SessionApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::InstructorId;

    #[test]
    fn session_api_error_maps_bad_request_to_400() {
        let err = SessionApiError::BadRequest("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn session_api_error_maps_not_found_to_404() {
        let err = SessionApiError::NotFound("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn session_api_error_maps_forbidden_to_403() {
        let err = SessionApiError::Forbidden("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn session_api_error_maps_internal_to_500() {
        let err = SessionApiError::Internal("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unknown_currency_maps_to_bad_request() {
        let err = SessionApiError::from(SessionError::CurrencyNotFound("XYZ".to_string()));
        assert!(matches!(err, SessionApiError::BadRequest(_)));
    }

    #[test]
    fn invalid_total_maps_to_bad_request() {
        let err = SessionApiError::from(SessionError::InvalidTotal(-1));
        assert!(matches!(err, SessionApiError::BadRequest(_)));
    }

    #[test]
    fn missing_student_maps_to_not_found() {
        let err = SessionApiError::from(SessionError::StudentNotFound(StudentId::new()));
        assert!(matches!(err, SessionApiError::NotFound(_)));
    }

    #[test]
    fn ownership_failure_maps_to_forbidden() {
        let err = SessionApiError::from(SessionError::not_yours(InstructorId::new()));
        assert!(matches!(err, SessionApiError::Forbidden(_)));
    }

    #[test]
    fn infrastructure_failure_hides_details() {
        let err = SessionApiError::from(SessionError::infrastructure("connection refused"));
        match err {
            SessionApiError::Internal(msg) => assert!(!msg.contains("connection refused")),
            other => panic!("expected Internal, got {:?}", other),
        }
    }
}
