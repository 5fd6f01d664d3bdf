//! Authentication adapters implementing the `TokenVerifier` port.

mod jwt;
mod mock;

pub use jwt::{JwtConfig, JwtTokenVerifier};
pub use mock::MockTokenVerifier;
