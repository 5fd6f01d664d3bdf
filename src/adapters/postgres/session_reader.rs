//! PostgreSQL implementation of SessionReader.
//!
//! Joins each session row with its student's display columns. The join
//! is LEFT so a dangling student reference (impossible under FK
//! integrity, fatal if it happens) can be reported precisely instead of
//! silently dropping the row.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, ErrorCode, InstructorId, SessionId, SessionStatus, StudentId,
};
use crate::ports::{SessionPage, SessionReader, StudentSummary};

/// PostgreSQL implementation of SessionReader.
#[derive(Clone)]
pub struct PostgresSessionReader {
    pool: PgPool,
}

impl PostgresSessionReader {
    /// Creates a new PostgresSessionReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionReader for PostgresSessionReader {
    async fn list_by_instructor(
        &self,
        instructor_id: &InstructorId,
    ) -> Result<Vec<SessionPage>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT ss.id, ss.student_id, ss.status, ss.unit, ss.price, ss.meetings,
                   s.full_name, s.avatar
            FROM students_sessions ss
            LEFT JOIN students s ON s.id = ss.student_id
            WHERE ss.instructor_id = $1 AND ss.status IN (1, 2, 3)
            ORDER BY ss.created_at DESC
            "#,
        )
        .bind(instructor_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list sessions: {}", e)))?;

        rows.into_iter().map(row_to_page).collect()
    }
}

fn row_to_page(row: sqlx::postgres::PgRow) -> Result<SessionPage, DomainError> {
    let id: uuid::Uuid = get(&row, "id")?;
    let student_id: uuid::Uuid = get(&row, "student_id")?;
    let status_code: i32 = get(&row, "status")?;
    let unit: i32 = get(&row, "unit")?;
    let price: i32 = get(&row, "price")?;
    let meetings: i32 = get(&row, "meetings")?;
    let full_name: Option<String> = get(&row, "full_name")?;
    let avatar: Option<i32> = get(&row, "avatar")?;

    let student_id = StudentId::from_uuid(student_id);

    // NULL student columns mean the LEFT JOIN found no student row.
    let (full_name, avatar) = match (full_name, avatar) {
        (Some(full_name), Some(avatar)) => (full_name, avatar),
        _ => {
            return Err(
                DomainError::new(ErrorCode::StudentNotFound, "dangling student reference")
                    .with_detail("student_id", student_id.to_string()),
            )
        }
    };

    let status = SessionStatus::from_code(status_code).ok_or_else(|| {
        DomainError::database(format!("Invalid session status in storage: {}", status_code))
    })?;

    Ok(SessionPage {
        id: SessionId::from_uuid(id),
        student: StudentSummary {
            id: student_id,
            full_name,
            avatar,
        },
        status,
        unit,
        price,
        meetings,
    })
}

fn get<'r, T>(row: &'r sqlx::postgres::PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", column, e)))
}
