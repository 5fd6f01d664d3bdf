//! PostgreSQL implementation of SessionRepository.
//!
//! Each mutation runs inside its own transaction. The preceding
//! precondition queries run outside it, so the transactional scope
//! brackets only the final read/write.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    Currency, DomainError, ErrorCode, InstructorId, SessionId, SessionStatus, StudentId, Timestamp,
};
use crate::domain::session::StudentSession;
use crate::ports::SessionRepository;

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    /// Creates a new PostgresSessionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn save(&self, session: &StudentSession) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to begin transaction: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO students_sessions (
                id, student_id, instructor_id, status, name, unit, meetings,
                price, currency_code, start_at, end_at, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.student_id().as_uuid())
        .bind(session.instructor_id().as_uuid())
        .bind(session.status().code())
        .bind(session.name())
        .bind(session.unit())
        .bind(session.meetings())
        .bind(session.price())
        .bind(session.currency().as_code())
        .bind(session.start_at())
        .bind(session.end_at())
        .bind(session.created_at().as_datetime())
        .bind(session.updated_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert session: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit session insert: {}", e)))?;

        Ok(())
    }

    async fn update(&self, session: &StudentSession) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to begin transaction: {}", e)))?;

        let result = sqlx::query(
            r#"
            UPDATE students_sessions SET
                student_id = $2,
                instructor_id = $3,
                status = $4,
                name = $5,
                meetings = $6,
                price = $7,
                currency_code = $8,
                start_at = $9,
                end_at = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.student_id().as_uuid())
        .bind(session.instructor_id().as_uuid())
        .bind(session.status().code())
        .bind(session.name())
        .bind(session.meetings())
        .bind(session.price())
        .bind(session.currency().as_code())
        .bind(session.start_at())
        .bind(session.end_at())
        .bind(session.updated_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update session: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            ));
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit session update: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<StudentSession>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, student_id, instructor_id, status, name, unit, meetings,
                   price, currency_code, start_at, end_at, created_at, updated_at
            FROM students_sessions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch session: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_session(row)?)),
            None => Ok(None),
        }
    }

    async fn exists(&self, id: &SessionId) -> Result<bool, DomainError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM students_sessions WHERE id = $1")
                .bind(id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::database(format!("Failed to check session existence: {}", e))
                })?;

        Ok(result.0 > 0)
    }
}

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<StudentSession, DomainError> {
    let id: uuid::Uuid = get(&row, "id")?;
    let student_id: uuid::Uuid = get(&row, "student_id")?;
    let instructor_id: uuid::Uuid = get(&row, "instructor_id")?;
    let status_code: i32 = get(&row, "status")?;
    let name: String = get(&row, "name")?;
    let unit: i32 = get(&row, "unit")?;
    let meetings: i32 = get(&row, "meetings")?;
    let price: i32 = get(&row, "price")?;
    let currency_code: String = get(&row, "currency_code")?;
    let start_at: chrono::NaiveDate = get(&row, "start_at")?;
    let end_at: chrono::NaiveDate = get(&row, "end_at")?;
    let created_at: chrono::DateTime<chrono::Utc> = get(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = get(&row, "updated_at")?;

    let status = SessionStatus::from_code(status_code).ok_or_else(|| {
        DomainError::database(format!("Invalid session status in storage: {}", status_code))
    })?;
    let currency = Currency::from_code(&currency_code).ok_or_else(|| {
        DomainError::database(format!("Invalid currency in storage: {}", currency_code))
    })?;

    Ok(StudentSession::reconstitute(
        SessionId::from_uuid(id),
        StudentId::from_uuid(student_id),
        InstructorId::from_uuid(instructor_id),
        status,
        name,
        unit,
        meetings,
        price,
        currency,
        start_at,
        end_at,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

fn get<'r, T>(row: &'r sqlx::postgres::PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", column, e)))
}
