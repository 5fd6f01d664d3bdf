//! HTTP adapter for the session module.
//!
//! Exposes session operations via REST endpoints:
//!
//! - `GET /api/sessions` - List the acting instructor's sessions
//! - `POST /api/sessions` - Create a new session
//! - `PUT /api/sessions` - Overwrite an existing session

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SessionAppState;
pub use routes::session_router;
