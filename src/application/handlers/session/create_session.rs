//! CreateSessionHandler - command handler for creating sessions.
//!
//! Runs the precondition chain in a fixed order, short-circuiting on
//! the first failure, then inserts the new session. Nothing is written
//! on any invalid path. The preconditions run outside the transaction
//! that brackets the insert, so a concurrent delete between check and
//! write is possible; that window is inherited from the design.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::Preconditions;
use crate::domain::foundation::{Currency, InstructorId, SessionId, StudentId};
use crate::domain::session::{SessionError, SessionFields, SessionReceipt, StudentSession};
use crate::ports::SessionRepository;

/// Command to create a new session for one of the instructor's students.
///
/// The instructor id always comes from the verified credential, never
/// from the payload, and any client-supplied status is ignored: new
/// sessions start as STARTED.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub instructor_id: InstructorId,
    pub student_id: StudentId,
    pub name: String,
    pub meetings: i32,
    pub value: i32,
    pub currency_code: String,
    pub start_at: NaiveDate,
    pub end_at: NaiveDate,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
    preconditions: Preconditions,
}

impl CreateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, preconditions: Preconditions) -> Self {
        Self {
            repository,
            preconditions,
        }
    }

    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<SessionReceipt, SessionError> {
        // Validation order is observable through the returned error and
        // must not change: currency, value, meetings, student, ownership.
        if !Preconditions::currency_exists(&cmd.currency_code) {
            return Err(SessionError::CurrencyNotFound(cmd.currency_code));
        }
        if !Preconditions::value_is_valid(cmd.value) {
            return Err(SessionError::InvalidTotal(cmd.value));
        }
        if !Preconditions::value_is_valid(cmd.meetings) {
            return Err(SessionError::InvalidTotal(cmd.meetings));
        }
        if !self.preconditions.student_exists(&cmd.student_id).await? {
            return Err(SessionError::StudentNotFound(cmd.student_id));
        }
        if !self
            .preconditions
            .user_can_update_student(&cmd.instructor_id, &cmd.student_id)
            .await?
        {
            return Err(SessionError::not_yours(cmd.instructor_id));
        }

        let currency = Currency::from_code(&cmd.currency_code)
            .ok_or(SessionError::CurrencyNotFound(cmd.currency_code))?;

        let session = StudentSession::create(
            SessionId::new(),
            cmd.instructor_id,
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

        self.repository.save(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            instructor_id = %cmd.instructor_id,
            "session created"
        );

        Ok(session.receipt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::session::testing::{
        owned_student, InMemorySessionRepository, MockAccessChecker,
    };
    use crate::domain::foundation::SessionStatus;

    fn test_command(instructor_id: InstructorId, student_id: StudentId) -> CreateSessionCommand {
        CreateSessionCommand {
            instructor_id,
            student_id,
            name: "Algebra block".to_string(),
            meetings: 3,
            value: 100,
            currency_code: "USD".to_string(),
            start_at: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            end_at: NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
        }
    }

    fn handler_with(
        repo: Arc<InMemorySessionRepository>,
        access: MockAccessChecker,
    ) -> CreateSessionHandler {
        CreateSessionHandler::new(repo, Preconditions::new(Arc::new(access)))
    }

    #[tokio::test]
    async fn creates_session_with_started_status() {
        let (instructor, student, access) = owned_student();
        let repo = Arc::new(InMemorySessionRepository::new());
        let handler = handler_with(repo.clone(), access);

        let receipt = handler.handle(test_command(instructor, student)).await.unwrap();

        assert_eq!(receipt.status, SessionStatus::Started);
        assert_eq!(receipt.unit, 1);
        let saved = repo.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].instructor_id(), &instructor);
        assert_eq!(saved[0].status(), SessionStatus::Started);
    }

    #[tokio::test]
    async fn rejects_unknown_currency_first() {
        let (instructor, student, access) = owned_student();
        let repo = Arc::new(InMemorySessionRepository::new());
        let handler = handler_with(repo.clone(), access);

        let mut cmd = test_command(instructor, student);
        cmd.currency_code = "XYZ".to_string();
        // Negative value too: the currency check must win.
        cmd.value = -10;

        let result = handler.handle(cmd).await;
        assert!(matches!(result, Err(SessionError::CurrencyNotFound(c)) if c == "XYZ"));
        assert!(repo.saved().is_empty());
    }

    #[tokio::test]
    async fn rejects_negative_value() {
        let (instructor, student, access) = owned_student();
        let repo = Arc::new(InMemorySessionRepository::new());
        let handler = handler_with(repo.clone(), access);

        let mut cmd = test_command(instructor, student);
        cmd.value = -100;

        let result = handler.handle(cmd).await;
        assert!(matches!(result, Err(SessionError::InvalidTotal(-100))));
        assert!(repo.saved().is_empty());
    }

    #[tokio::test]
    async fn rejects_negative_meetings_without_inserting() {
        let (instructor, student, access) = owned_student();
        let repo = Arc::new(InMemorySessionRepository::new());
        let handler = handler_with(repo.clone(), access);

        let mut cmd = test_command(instructor, student);
        cmd.meetings = -1;

        let result = handler.handle(cmd).await;
        assert!(matches!(result, Err(SessionError::InvalidTotal(-1))));
        assert!(repo.saved().is_empty());
    }

    #[tokio::test]
    async fn rejects_missing_student() {
        let (instructor, _, access) = owned_student();
        let repo = Arc::new(InMemorySessionRepository::new());
        let handler = handler_with(repo.clone(), access);

        let missing = StudentId::new();
        let result = handler.handle(test_command(instructor, missing)).await;
        assert!(matches!(result, Err(SessionError::StudentNotFound(id)) if id == missing));
        assert!(repo.saved().is_empty());
    }

    #[tokio::test]
    async fn rejects_student_owned_by_someone_else() {
        let (_, student, access) = owned_student();
        let repo = Arc::new(InMemorySessionRepository::new());
        let handler = handler_with(repo.clone(), access);

        let intruder = InstructorId::new();
        let result = handler.handle(test_command(intruder, student)).await;
        assert!(
            matches!(result, Err(SessionError::NotYours { instructor_id }) if instructor_id == intruder)
        );
        assert!(repo.saved().is_empty());
    }

    #[tokio::test]
    async fn accepts_lowercase_currency_code() {
        let (instructor, student, access) = owned_student();
        let repo = Arc::new(InMemorySessionRepository::new());
        let handler = handler_with(repo, access);

        let mut cmd = test_command(instructor, student);
        cmd.currency_code = "usd".to_string();

        assert!(handler.handle(cmd).await.is_ok());
    }
}
