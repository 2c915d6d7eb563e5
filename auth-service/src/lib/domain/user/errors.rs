use auth::AuthenticationError;
use auth::BasicTokenError;
use auth::JwtError;
use auth::PasswordError;
use auth::PasswordPolicyError;
use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid user id: {0}")]
    InvalidFormat(String),
}

/// Error for UserName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserNameError {
    #[error("User name must not be empty")]
    Empty,

    #[error("User name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("User name must not start or end with whitespace")]
    SurroundingWhitespace,
}

/// Top-level error for all authentication service operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Value validation errors (automatically converted via #[from])
    #[error("Invalid user name: {0}")]
    InvalidUserName(#[from] UserNameError),

    #[error("{0}")]
    WeakPassword(#[from] PasswordPolicyError),

    #[error("Invalid basic token: {0}")]
    InvalidBasicToken(#[from] BasicTokenError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Jwt(#[from] JwtError),

    // Domain-level errors
    #[error("User name already taken: {0}")]
    UserNameAlreadyExists(String),

    #[error("Incorrect user_name or password")]
    InvalidCredentials,

    #[error("Unauthorized request: {0}")]
    Unauthorized(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<AuthenticationError> for AuthError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
            AuthenticationError::PasswordError(e) => AuthError::Password(e),
            AuthenticationError::JwtError(e) => AuthError::Jwt(e),
        }
    }
}
