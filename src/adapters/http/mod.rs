//! HTTP adapters - REST API implementations.

pub mod middleware;
pub mod session;

// Re-export key types for convenience
pub use session::session_router;
pub use session::SessionAppState;
