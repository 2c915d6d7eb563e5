//! Authentication utilities library
//!
//! Storage-agnostic building blocks for the preference card services:
//! - Password hashing (bcrypt, cost 12) and strength policy
//! - JWT token generation and validation (HS256)
//! - Basic token and Authorization header parsing
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("Abcdef1!").unwrap();
//! assert!(hasher.verify("Abcdef1!", &hash).unwrap());
//! ```
//!
//! ## Password Policy
//! ```
//! use auth::{validate_password, PasswordPolicyError};
//!
//! assert_eq!(validate_password("Abcdef1!"), Ok(()));
//! assert_eq!(validate_password("short"), Err(PasswordPolicyError::TooShort));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::Authenticator;
//! use serde_json::json;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//! let payload = json!({ "role": "admin" }).as_object().cloned().unwrap();
//! let token = auth.create_jwt("7", payload).unwrap();
//! let claims = auth.verify_jwt(&token).unwrap();
//! assert_eq!(claims.sub.as_deref(), Some("7"));
//! ```
//!
//! ## Basic Tokens
//! ```
//! use auth::parse_basic_token;
//!
//! let credentials = parse_basic_token("YWxpY2U6c2VjcmV0").unwrap();
//! assert_eq!(credentials.username, "alice");
//! assert_eq!(credentials.password, "secret");
//! ```

pub mod authenticator;
pub mod basic;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use basic::basic_token_from_header;
pub use basic::bearer_token_from_header;
pub use basic::parse_basic_token;
pub use basic::BasicCredentials;
pub use basic::BasicTokenError;
pub use jwt::Audience;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::validate_password;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordPolicyError;
