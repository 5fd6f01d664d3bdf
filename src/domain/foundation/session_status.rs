//! SessionStatus enum for the lifecycle of a tutoring session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a tutoring session.
///
/// The wire and storage representation is the integer code (1/2/3).
/// No transition graph is enforced: callers may move a session between
/// any of the known codes, but never outside the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "i32", try_from = "i32")]
pub enum SessionStatus {
    #[default]
    Started,
    Paid,
    Closed,
}

impl SessionStatus {
    /// Returns the integer code stored and sent over the wire.
    pub fn code(&self) -> i32 {
        match self {
            SessionStatus::Started => 1,
            SessionStatus::Paid => 2,
            SessionStatus::Closed => 3,
        }
    }

    /// Looks up a status by its integer code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(SessionStatus::Started),
            2 => Some(SessionStatus::Paid),
            3 => Some(SessionStatus::Closed),
            _ => None,
        }
    }

    /// Returns true if the code names a known status.
    pub fn is_valid_code(code: i32) -> bool {
        Self::from_code(code).is_some()
    }

    /// All known statuses, in code order.
    pub fn all() -> [SessionStatus; 3] {
        [
            SessionStatus::Started,
            SessionStatus::Paid,
            SessionStatus::Closed,
        ]
    }
}

impl From<SessionStatus> for i32 {
    fn from(status: SessionStatus) -> i32 {
        status.code()
    }
}

impl TryFrom<i32> for SessionStatus {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        SessionStatus::from_code(code).ok_or_else(|| format!("Unknown session status code: {}", code))
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Started => "Started",
            SessionStatus::Paid => "Paid",
            SessionStatus::Closed => "Closed",
        };
        write!(f, "{}", s)
    }
}
