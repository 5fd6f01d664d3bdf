//! StudentSession aggregate and its error taxonomy.

mod aggregate;
mod errors;

pub use aggregate::{SessionFields, SessionReceipt, StudentSession, DEFAULT_UNIT};
pub use errors::SessionError;
