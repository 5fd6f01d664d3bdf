//! JWT adapter for credential verification.
//!
//! This adapter implements the `TokenVerifier` port for HS256-signed
//! tokens issued by the identity service. It validates:
//!
//! 1. Signature against the shared secret
//! 2. Issuer, audience, and expiry claims
//! 3. That the subject claim carries an instructor UUID
//!
//! # Example
//!
//! ```ignore
//! use tutortrack::adapters::auth::{JwtConfig, JwtTokenVerifier};
//! use tutortrack::ports::TokenVerifier;
//!
//! let verifier = JwtTokenVerifier::new(JwtConfig::new(
//!     "shared-secret",
//!     "https://auth.tutortrack.example",
//!     "tutortrack-api",
//! ));
//! let instructor = verifier.verify("eyJ...").await?;
//! ```

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedInstructor, InstructorId};
use crate::ports::TokenVerifier;

/// Configuration for the JWT adapter.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HMAC secret used to verify token signatures.
    pub secret: String,

    /// Expected issuer claim.
    pub issuer: String,

    /// Expected audience claim.
    pub audience: String,

    /// Clock skew tolerance in seconds applied to expiry validation.
    pub leeway_seconds: u64,
}

impl JwtConfig {
    /// Create a new configuration with required fields.
    pub fn new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            leeway_seconds: 30,
        }
    }

    /// Set a custom clock skew tolerance.
    pub fn with_leeway(mut self, seconds: u64) -> Self {
        self.leeway_seconds = seconds;
        self
    }
}

/// JWT claims carried by instructor tokens.
#[derive(Debug, Serialize, Deserialize)]
struct InstructorClaims {
    /// Subject - the instructor UUID
    sub: String,

    /// Issuer
    iss: String,

    /// Audience
    aud: String,

    /// Expiry timestamp (Unix epoch seconds)
    exp: i64,

    /// Instructor's email address
    #[serde(default)]
    email: Option<String>,
}

/// HS256 JWT token verifier.
///
/// This is the production implementation of `TokenVerifier`.
pub struct JwtTokenVerifier {
    config: JwtConfig,
    decoding_key: DecodingKey,
}

impl JwtTokenVerifier {
    /// Create a new verifier from the given configuration.
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            decoding_key,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);
        validation.leeway = self.config.leeway_seconds;
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedInstructor, AuthError> {
        let token_data = decode::<InstructorClaims>(token, &self.decoding_key, &self.validation())
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token expired");
                        AuthError::TokenExpired
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Invalid issuer in token");
                        AuthError::InvalidToken
                    }
                    ErrorKind::InvalidAudience => {
                        tracing::warn!("Invalid audience in token");
                        AuthError::InvalidToken
                    }
                    _ => {
                        tracing::debug!("Token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            })?;

        let claims = token_data.claims;

        let instructor_id: InstructorId = claims.sub.parse().map_err(|_| {
            tracing::warn!("Token subject is not an instructor id: {}", claims.sub);
            AuthError::MissingSubject
        })?;

        Ok(AuthenticatedInstructor::new(instructor_id, claims.email))
    }
}

impl std::fmt::Debug for JwtTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenVerifier")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .finish_non_exhaustive()
    }
}
