//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionRepository` - write-side session persistence
//! - `SessionReader` - read-side session listing with joined student data
//! - `AccessChecker` - existence and ownership queries for preconditions
//! - `TokenVerifier` - credential extraction (opaque token -> instructor)

mod access_checker;
mod session_reader;
mod session_repository;
mod token_verifier;

pub use access_checker::AccessChecker;
pub use session_reader::{SessionPage, SessionReader, StudentSummary};
pub use session_repository::SessionRepository;
pub use token_verifier::TokenVerifier;
