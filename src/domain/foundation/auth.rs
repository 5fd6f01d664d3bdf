//! Authentication types for the domain layer.
//!
//! These types represent the acting instructor extracted from a verified
//! credential. They have no provider dependencies - any token scheme can
//! populate them through the `TokenVerifier` port.

use super::InstructorId;
use thiserror::Error;

/// The acting instructor extracted from a verified credential.
#[derive(Debug, Clone)]
pub struct AuthenticatedInstructor {
    /// The unique instructor identifier from the credential claims.
    pub id: InstructorId,

    /// Email address from the credential claims, when present.
    pub email: Option<String>,
}

impl AuthenticatedInstructor {
    /// Creates a new authenticated instructor.
    ///
    /// Typically called by a `TokenVerifier` adapter after successfully
    /// verifying a credential.
    pub fn new(id: InstructorId, email: Option<String>) -> Self {
        Self { id, email }
    }
}

/// Authentication errors that can occur during credential verification.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token signature is valid but the token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The token is valid but does not carry a usable instructor id.
    #[error("Token does not identify an instructor")]
    MissingSubject,

    /// The verification backend is unavailable.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the caller should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::MissingSubject
        )
    }
}
