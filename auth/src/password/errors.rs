use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}

/// Reason a password was refused by the strength policy.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password must be longer than 8 characters")]
    TooShort,

    #[error("Password must be less than 72 characters")]
    TooLong,

    #[error("Password must not start or end with empty spaces")]
    SurroundingSpaces,

    #[error("Password must contain 1 upper case, lower case, number and special character")]
    MissingCharacterClasses,
}
