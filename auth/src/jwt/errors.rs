use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token payload is invalid: {0}")]
    InvalidPayload(String),

    #[error("Payload already has a \"{0}\" claim")]
    ConflictingClaim(String),
}
