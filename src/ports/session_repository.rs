//! Session repository port (write side).
//!
//! Defines the persistence contract for the StudentSession aggregate.
//! Implementations bracket each mutation in one transactional scope;
//! the service layer's validations run before that scope opens, so a
//! race between validation and mutation is possible and accepted.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::StudentSession;

/// Repository port for session persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Inserts a new session row.
    async fn save(&self, session: &StudentSession) -> Result<(), DomainError>;

    /// Overwrites an existing session row.
    ///
    /// Returns `SessionNotFound` if no row matched the id.
    async fn update(&self, session: &StudentSession) -> Result<(), DomainError>;

    /// Fetches a session by id.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<StudentSession>, DomainError>;

    /// Checks whether a session row exists.
    async fn exists(&self, id: &SessionId) -> Result<bool, DomainError>;
}
