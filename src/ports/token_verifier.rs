//! Token verifier port - the credential extractor.
//!
//! Maps an opaque bearer credential to the acting instructor. It is
//! scheme-agnostic: the production adapter verifies JWTs, tests use an
//! in-memory token map.
//!
//! # Contract
//!
//! Implementations must:
//! - Verify the credential's integrity (signature, expiry, claims)
//! - Return `AuthError::InvalidToken` for malformed/bad-signature tokens
//! - Return `AuthError::TokenExpired` for expired tokens
//! - Return `AuthError::MissingSubject` when no instructor id can be
//!   extracted from an otherwise valid credential

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedInstructor};

/// Verifies credentials and extracts the acting instructor.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify a raw credential (without any "Bearer " prefix) and
    /// return the authenticated instructor.
    async fn verify(&self, token: &str) -> Result<AuthenticatedInstructor, AuthError>;
}
