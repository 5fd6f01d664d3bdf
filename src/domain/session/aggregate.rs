//! StudentSession aggregate entity.
//!
//! A session is a billable record of tutoring meetings between an
//! instructor and one of their students.
//!
//! # Invariants
//!
//! - `meetings >= 0` and `price >= 0`
//! - `status` is always a member of the known lifecycle set
//! - `instructor_id` is the acting user at create/update time, never
//!   client-supplied
//! - `created_at` is set once; `updated_at` refreshes on every mutation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Currency, InstructorId, SessionId, SessionStatus, StudentId, Timestamp,
};
use crate::domain::session::SessionError;

/// Pricing unit assigned at creation. Update never touches it.
pub const DEFAULT_UNIT: i32 = 1;

/// StudentSession aggregate - one billable tutoring engagement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSession {
    /// Unique identifier, generated at creation, immutable.
    id: SessionId,

    /// Student this session was sold to.
    student_id: StudentId,

    /// Instructor who owns this session.
    instructor_id: InstructorId,

    /// Current lifecycle status.
    status: SessionStatus,

    /// Display label.
    name: String,

    /// Pricing unit, server-assigned at creation.
    unit: i32,

    /// Number of meetings purchased.
    meetings: i32,

    /// Monetary amount.
    price: i32,

    /// Currency the price is denominated in.
    currency: Currency,

    /// First scheduled calendar date.
    start_at: NaiveDate,

    /// Last scheduled calendar date.
    end_at: NaiveDate,

    /// When the session was created.
    created_at: Timestamp,

    /// When the session was last updated.
    updated_at: Timestamp,
}

/// Input fields shared by create and update.
#[derive(Debug, Clone)]
pub struct SessionFields {
    pub student_id: StudentId,
    pub name: String,
    pub meetings: i32,
    pub price: i32,
    pub currency: Currency,
    pub start_at: NaiveDate,
    pub end_at: NaiveDate,
}

impl StudentSession {
    /// Creates a new session for an instructor.
    ///
    /// Status is forced to `Started` regardless of any caller input, and
    /// the pricing unit is server-assigned.
    ///
    /// # Errors
    ///
    /// - `InvalidTotal` if meetings or price is negative
    pub fn create(
        id: SessionId,
        instructor_id: InstructorId,
        fields: SessionFields,
    ) -> Result<Self, SessionError> {
        Self::validate_totals(&fields)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            student_id: fields.student_id,
            instructor_id,
            status: SessionStatus::Started,
            name: fields.name,
            unit: DEFAULT_UNIT,
            meetings: fields.meetings,
            price: fields.price,
            currency: fields.currency,
            start_at: fields.start_at,
            end_at: fields.end_at,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a session from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SessionId,
        student_id: StudentId,
        instructor_id: InstructorId,
        status: SessionStatus,
        name: String,
        unit: i32,
        meetings: i32,
        price: i32,
        currency: Currency,
        start_at: NaiveDate,
        end_at: NaiveDate,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            student_id,
            instructor_id,
            status,
            name,
            unit,
            meetings,
            price,
            currency,
            start_at,
            end_at,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn instructor_id(&self) -> &InstructorId {
        &self.instructor_id
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> i32 {
        self.unit
    }

    pub fn meetings(&self) -> i32 {
        self.meetings
    }

    pub fn price(&self) -> i32 {
        self.price
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn start_at(&self) -> NaiveDate {
        self.start_at
    }

    pub fn end_at(&self) -> NaiveDate {
        self.end_at
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Overwrites every mutable field (full-field update, no PATCH).
    ///
    /// The instructor becomes the acting user, `updated_at` refreshes,
    /// and `created_at` and `unit` are left untouched.
    ///
    /// # Errors
    ///
    /// - `InvalidTotal` if meetings or price is negative
    pub fn overwrite(
        &mut self,
        instructor_id: InstructorId,
        status: SessionStatus,
        fields: SessionFields,
    ) -> Result<(), SessionError> {
        Self::validate_totals(&fields)?;

        self.instructor_id = instructor_id;
        self.student_id = fields.student_id;
        self.status = status;
        self.name = fields.name;
        self.meetings = fields.meetings;
        self.price = fields.price;
        self.currency = fields.currency;
        self.start_at = fields.start_at;
        self.end_at = fields.end_at;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Builds the `{id, status, unit}` receipt returned by mutations.
    pub fn receipt(&self) -> SessionReceipt {
        SessionReceipt {
            id: self.id,
            status: self.status,
            unit: self.unit,
        }
    }

    fn validate_totals(fields: &SessionFields) -> Result<(), SessionError> {
        if fields.price < 0 {
            return Err(SessionError::InvalidTotal(fields.price));
        }
        if fields.meetings < 0 {
            return Err(SessionError::InvalidTotal(fields.meetings));
        }
        Ok(())
    }
}

/// Response projection for create/update: the caller gets back the id,
/// the effective status, and the server-assigned pricing unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReceipt {
    pub id: SessionId,
    pub status: SessionStatus,
    pub unit: i32,
}
