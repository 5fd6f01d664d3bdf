//! Session lifecycle handlers: list, create, update.

mod create_session;
mod list_sessions;
mod update_session;

pub use create_session::{CreateSessionCommand, CreateSessionHandler};
pub use list_sessions::{ListSessionsHandler, ListSessionsQuery};
pub use update_session::{UpdateSessionCommand, UpdateSessionHandler};
