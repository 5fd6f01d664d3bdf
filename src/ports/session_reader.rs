//! Session reader port (read side).
//!
//! The list projection joins each session with its student's display
//! summary. No pagination: an instructor's full result set is returned,
//! newest first.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, InstructorId, SessionId, SessionStatus, StudentId};

/// Reader port for session queries.
#[async_trait]
pub trait SessionReader: Send + Sync {
    /// Lists all sessions owned by an instructor, ordered by
    /// `created_at` descending.
    ///
    /// Every page row join-fetches the referenced student's summary.
    /// A session whose student row is missing is a fatal
    /// `StudentNotFound` (FK integrity should make this impossible).
    async fn list_by_instructor(
        &self,
        instructor_id: &InstructorId,
    ) -> Result<Vec<SessionPage>, DomainError>;
}

/// Display summary of a student, joined into session listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    /// Student ID.
    pub id: StudentId,

    /// Student's full name.
    pub full_name: String,

    /// Avatar index chosen by the instructor.
    pub avatar: i32,
}

/// One row of the instructor's session listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPage {
    /// Session ID.
    pub id: SessionId,

    /// The referenced student's display summary.
    pub student: StudentSummary,

    /// Current lifecycle status.
    pub status: SessionStatus,

    /// Server-assigned pricing unit.
    pub unit: i32,

    /// Monetary amount.
    pub price: i32,

    /// Number of meetings purchased.
    pub meetings: i32,
}
