//! PostgreSQL implementation of AccessChecker.
//!
//! Every predicate is one EXISTS query. The ownership checks filter on
//! id AND owning instructor in a single query, which is what makes a
//! student owned by someone else indistinguishable from a missing one.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, InstructorId, SessionId, StudentId};
use crate::ports::AccessChecker;

/// PostgreSQL implementation of AccessChecker.
#[derive(Clone)]
pub struct PostgresAccessChecker {
    pool: PgPool,
}

impl PostgresAccessChecker {
    /// Creates a new PostgresAccessChecker.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessChecker for PostgresAccessChecker {
    async fn student_exists(&self, student_id: &StudentId) -> Result<bool, DomainError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM students WHERE id = $1)")
                .bind(student_id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::database(format!("Failed to check student existence: {}", e))
                })?;

        Ok(result.0)
    }

    async fn session_exists(&self, session_id: &SessionId) -> Result<bool, DomainError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM students_sessions WHERE id = $1)")
                .bind(session_id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::database(format!("Failed to check session existence: {}", e))
                })?;

        Ok(result.0)
    }

    async fn student_owned_by(
        &self,
        instructor_id: &InstructorId,
        student_id: &StudentId,
    ) -> Result<bool, DomainError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM students WHERE id = $1 AND instructor_id = $2)",
        )
        .bind(student_id.as_uuid())
        .bind(instructor_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to check student ownership: {}", e)))?;

        Ok(result.0)
    }

    async fn session_owned_by(
        &self,
        instructor_id: &InstructorId,
        session_id: &SessionId,
    ) -> Result<bool, DomainError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM students_sessions WHERE id = $1 AND instructor_id = $2)",
        )
        .bind(session_id.as_uuid())
        .bind(instructor_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to check session ownership: {}", e)))?;

        Ok(result.0)
    }
}
