//! HS256 token handling with RFC 7519 claims.

pub mod claims;
pub mod errors;
pub mod handler;

pub use claims::Audience;
pub use claims::Claims;
pub use errors::JwtError;
pub use handler::JwtHandler;
