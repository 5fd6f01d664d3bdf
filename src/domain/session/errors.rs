//! Session-specific error types.
//!
//! One variant per distinct validation failure, so callers can attribute
//! a rejection precisely instead of receiving a generic "invalid request".

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, InstructorId, SessionId, StudentId};

/// Errors surfaced by the session lifecycle operations.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Currency code is not in the supported set.
    #[error("Currency code not found: {0}")]
    CurrencyNotFound(String),

    /// A monetary value or meeting count is negative.
    #[error("Session total is invalid: {0}")]
    InvalidTotal(i32),

    /// Status code is not one of the known lifecycle codes.
    #[error("Session status is invalid: {0}")]
    InvalidStatus(i32),

    /// Referenced student does not exist.
    #[error("Student not found: {0}")]
    StudentNotFound(StudentId),

    /// The acting instructor does not own the referenced student or
    /// session. Deliberately indistinguishable from "does not exist for
    /// this instructor": the ownership check is a single combined query.
    #[error("Student or session does not belong to instructor {instructor_id}")]
    NotYours { instructor_id: InstructorId },

    /// Session id did not resolve on update.
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    /// Persistence or other infrastructure failure.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl SessionError {
    pub fn not_yours(instructor_id: InstructorId) -> Self {
        SessionError::NotYours { instructor_id }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }

    /// Maps the error to its foundation error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::CurrencyNotFound(_) => ErrorCode::CurrencyNotFound,
            SessionError::InvalidTotal(_) => ErrorCode::InvalidTotal,
            SessionError::InvalidStatus(_) => ErrorCode::InvalidStatus,
            SessionError::StudentNotFound(_) => ErrorCode::StudentNotFound,
            SessionError::NotYours { .. } => ErrorCode::Forbidden,
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            // The reader reports a dangling student reference with the
            // offending id in the error details.
            ErrorCode::StudentNotFound => err
                .details
                .get("student_id")
                .and_then(|id| id.parse().ok())
                .map(SessionError::StudentNotFound)
                .unwrap_or_else(|| SessionError::Infrastructure(err.to_string())),
            _ => SessionError::Infrastructure(err.to_string()),
        }
    }
}
