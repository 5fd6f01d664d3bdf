//! Mock authentication adapter for testing.
//!
//! Implements the `TokenVerifier` port over an in-memory token map,
//! avoiding the need to mint real JWTs in tests.
//!
//! # Example
//!
//! ```ignore
//! use tutortrack::adapters::auth::MockTokenVerifier;
//! use tutortrack::domain::foundation::{AuthenticatedInstructor, InstructorId};
//!
//! let verifier = MockTokenVerifier::new().with_instructor(
//!     "valid-token",
//!     AuthenticatedInstructor::new(InstructorId::new(), None),
//! );
//!
//! let result = verifier.verify("valid-token").await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedInstructor, InstructorId};
use crate::ports::TokenVerifier;

/// Mock token verifier for testing.
///
/// Stores a map of tokens to instructors. Tokens not in the map return
/// `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockTokenVerifier {
    /// Map of valid tokens to their associated instructors
    tokens: RwLock<HashMap<String, AuthenticatedInstructor>>,
    /// Optional error to return for all verifications (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl MockTokenVerifier {
    /// Creates a new empty mock verifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to an instructor.
    pub fn with_instructor(
        self,
        token: impl Into<String>,
        instructor: AuthenticatedInstructor,
    ) -> Self {
        self.tokens.write().unwrap().insert(token.into(), instructor);
        self
    }

    /// Adds a valid token mapped to a fresh instructor and returns both
    /// the verifier and the generated instructor id.
    pub fn with_fresh_instructor(self, token: impl Into<String>) -> (Self, InstructorId) {
        let id = InstructorId::new();
        let verifier = self.with_instructor(token, AuthenticatedInstructor::new(id, None));
        (verifier, id)
    }

    /// Forces all verifications to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap() = None;
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, instructor: AuthenticatedInstructor) {
        self.tokens.write().unwrap().insert(token.into(), instructor);
    }

    /// Removes a token, making it invalid.
    pub fn remove_token(&self, token: &str) {
        self.tokens.write().unwrap().remove(token);
    }
}

#[async_trait]
impl TokenVerifier for MockTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedInstructor, AuthError> {
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
