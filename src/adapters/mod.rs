//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Credential verification (JWT, mock)
//! - `http` - REST API surface
//! - `postgres` - Persistence

pub mod auth;
pub mod http;
pub mod postgres;
