//! UpdateSessionHandler - command handler for full-field session updates.
//!
//! Same precondition chain as create plus the status-code check, with
//! ownership checked against the *session* being updated rather than
//! the student on the payload. Every mutable field is rewritten on
//! every update; there is no partial update.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::Preconditions;
use crate::domain::foundation::{Currency, InstructorId, SessionId, SessionStatus, StudentId};
use crate::domain::session::{SessionError, SessionFields, SessionReceipt};
use crate::ports::SessionRepository;

/// Command to overwrite an existing session.
///
/// Unlike create, the status is caller-supplied here, validated against
/// the known code set.
#[derive(Debug, Clone)]
pub struct UpdateSessionCommand {
    pub session_id: SessionId,
    pub instructor_id: InstructorId,
    pub student_id: StudentId,
    pub status: i32,
    pub name: String,
    pub meetings: i32,
    pub value: i32,
    pub currency_code: String,
    pub start_at: NaiveDate,
    pub end_at: NaiveDate,
}

/// Handler for updating sessions.
pub struct UpdateSessionHandler {
    repository: Arc<dyn SessionRepository>,
    preconditions: Preconditions,
}

impl UpdateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, preconditions: Preconditions) -> Self {
        Self {
            repository,
            preconditions,
        }
    }

    pub async fn handle(&self, cmd: UpdateSessionCommand) -> Result<SessionReceipt, SessionError> {
        // Fixed validation order: currency, value, meetings, status,
        // student, session ownership.
        if !Preconditions::currency_exists(&cmd.currency_code) {
            return Err(SessionError::CurrencyNotFound(cmd.currency_code));
        }
        if !Preconditions::value_is_valid(cmd.value) {
            return Err(SessionError::InvalidTotal(cmd.value));
        }
        if !Preconditions::value_is_valid(cmd.meetings) {
            return Err(SessionError::InvalidTotal(cmd.meetings));
        }
        if !Preconditions::session_status_exists(cmd.status) {
            return Err(SessionError::InvalidStatus(cmd.status));
        }
        if !self.preconditions.student_exists(&cmd.student_id).await? {
            return Err(SessionError::StudentNotFound(cmd.student_id));
        }
        if !self
            .preconditions
            .user_can_update_student_session(&cmd.instructor_id, &cmd.session_id)
            .await?
        {
            return Err(SessionError::not_yours(cmd.instructor_id));
        }

        let currency = Currency::from_code(&cmd.currency_code)
            .ok_or(SessionError::CurrencyNotFound(cmd.currency_code))?;
        let status = SessionStatus::from_code(cmd.status)
            .ok_or(SessionError::InvalidStatus(cmd.status))?;

        let mut session = self
            .repository
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SessionError::NotFound(cmd.session_id))?;

        session.overwrite(
            cmd.instructor_id,
            status,
            SessionFields {
                student_id: cmd.student_id,
                name: cmd.name,
                meetings: cmd.meetings,
                price: cmd.value,
                currency,
                start_at: cmd.start_at,
                end_at: cmd.end_at,
            },
        )?;

        self.repository.update(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            instructor_id = %cmd.instructor_id,
            status = %session.status(),
            "session updated"
        );

        Ok(session.receipt())
    }
}
