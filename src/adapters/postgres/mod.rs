//! PostgreSQL adapters implementing the persistence ports.

mod access_checker;
mod session_reader;
mod session_repository;

pub use access_checker::PostgresAccessChecker;
pub use session_reader::PostgresSessionReader;
pub use session_repository::PostgresSessionRepository;
