//! Foundation value objects shared across the domain.

mod auth;
mod currency;
mod errors;
mod ids;
mod session_status;
mod timestamp;

pub use auth::{AuthError, AuthenticatedInstructor};
pub use currency::Currency;
pub use errors::{DomainError, ErrorCode};
pub use ids::{InstructorId, SessionId, StudentId};
pub use session_status::SessionStatus;
pub use timestamp::Timestamp;
