//! HTTP DTOs (Data Transfer Objects) for session endpoints.
//!
//! These types define the JSON request/response structure for the
//! session API. They serve as the boundary between HTTP and the
//! application layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::session::SessionReceipt;
use crate::ports::SessionPage;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a new session.
///
/// The instructor is taken from the verified credential, never from the
/// payload, and no status field is accepted: new sessions always start
/// as STARTED.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionRequest {
    /// The student the session is booked for.
    pub student_id: String,
    /// Display name of the session.
    pub name: String,
    /// Number of meetings in the block.
    pub meetings: i32,
    /// Price of the block.
    pub value: i32,
    /// ISO currency code, case-insensitive.
    pub currency: String,
    /// First day of the block (YYYY-MM-DD).
    pub start_at: NaiveDate,
    /// Last day of the block (YYYY-MM-DD).
    pub end_at: NaiveDate,
}

/// Request to overwrite an existing session.
///
/// Every mutable field must be supplied; there is no partial update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSessionRequest {
    /// The session to update.
    pub id: String,
    /// The student the session is booked for.
    pub student_id: String,
    /// Status code: 1 = started, 2 = paid, 3 = closed.
    pub status: i32,
    /// Display name of the session.
    pub name: String,
    /// Number of meetings in the block.
    pub meetings: i32,
    /// Price of the block.
    pub value: i32,
    /// ISO currency code, case-insensitive.
    pub currency: String,
    /// First day of the block (YYYY-MM-DD).
    pub start_at: NaiveDate,
    /// Last day of the block (YYYY-MM-DD).
    pub end_at: NaiveDate,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for create/update commands.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReceiptResponse {
    /// Session ID.
    pub id: String,
    /// Persisted status code.
    pub status: i32,
    /// Billing unit.
    pub unit: i32,
}

impl From<SessionReceipt> for SessionReceiptResponse {
    fn from(receipt: SessionReceipt) -> Self {
        Self {
            id: receipt.id.to_string(),
            status: receipt.status.code(),
            unit: receipt.unit,
        }
    }
}

/// One row of the instructor's session list.
#[derive(Debug, Clone, Serialize)]
pub struct SessionPageResponse {
    /// Session ID.
    pub id: String,
    /// Display columns of the student the session belongs to.
    pub student: StudentSummaryResponse,
    /// Status code.
    pub status: i32,
    /// Billing unit.
    pub unit: i32,
    /// Price of the block.
    pub price: i32,
    /// Number of meetings.
    pub meetings: i32,
}

impl From<SessionPage> for SessionPageResponse {
    fn from(page: SessionPage) -> Self {
        Self {
            id: page.id.to_string(),
            student: StudentSummaryResponse {
                id: page.student.id.to_string(),
                full_name: page.student.full_name,
                avatar: page.student.avatar,
            },
            status: page.status.code(),
            unit: page.unit,
            price: page.price,
            meetings: page.meetings,
        }
    }
}

/// Student projection embedded in list rows.
#[derive(Debug, Clone, Serialize)]
pub struct StudentSummaryResponse {
    /// Student ID.
    pub id: String,
    /// Full display name.
    pub full_name: String,
    /// Avatar index.
    pub avatar: i32,
}

/// Error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            code: "FORBIDDEN".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SessionId, SessionStatus, StudentId};
    use crate::ports::StudentSummary;

    #[test]
    fn create_request_deserializes() {
        let json = r#"{
            "student_id": "4f2c9a46-3f6f-4d4e-ae16-35bb4d3e3a01",
            "name": "Algebra block",
            "meetings": 3,
            "value": 100,
            "currency": "USD",
            "start_at": "2024-09-01",
            "end_at": "2024-12-20"
        }"#;

        let req: CreateSessionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Algebra block");
        assert_eq!(req.meetings, 3);
        assert_eq!(req.start_at, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
    }

    #[test]
    fn update_request_deserializes_with_status() {
        let json = r#"{
            "id": "a7c5ef0c-35e2-4b3d-8d00-7cf3a29c6f5e",
            "student_id": "4f2c9a46-3f6f-4d4e-ae16-35bb4d3e3a01",
            "status": 2,
            "name": "Algebra block",
            "meetings": 3,
            "value": 100,
            "currency": "eur",
            "start_at": "2024-09-01",
            "end_at": "2024-12-20"
        }"#;

        let req: UpdateSessionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.status, 2);
        assert_eq!(req.currency, "eur");
    }

    #[test]
    fn receipt_response_serializes_numeric_status() {
        let response = SessionReceiptResponse {
            id: SessionId::new().to_string(),
            status: SessionStatus::Started.code(),
            unit: 1,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":1"));
        assert!(json.contains("\"unit\":1"));
    }

    #[test]
    fn page_response_embeds_student() {
        let page = SessionPage {
            id: SessionId::new(),
            student: StudentSummary {
                id: StudentId::new(),
                full_name: "Ana Pop".to_string(),
                avatar: 2,
            },
            status: SessionStatus::Paid,
            unit: 1,
            price: 250,
            meetings: 5,
        };

        let response = SessionPageResponse::from(page);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"full_name\":\"Ana Pop\""));
        assert!(json.contains("\"status\":2"));
    }
}
