//! Application layer - preconditions and request handlers.

pub mod handlers;
mod preconditions;

pub use preconditions::Preconditions;
