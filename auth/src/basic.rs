use base64::prelude::*;
use thiserror::Error;

/// Credentials carried by a basic token (`base64("user_name:password")`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// Error type for basic token and Authorization header parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BasicTokenError {
    #[error("Token is not valid base64: {0}")]
    InvalidEncoding(String),

    #[error("Token is not valid UTF-8")]
    InvalidUtf8,

    #[error("Token has no ':' separator")]
    MissingSeparator,

    #[error("Authorization header does not use the {0} scheme")]
    MissingScheme(&'static str),
}

/// Decode a basic token into username and password.
///
/// Splits on the first colon only, so passwords may contain colons.
///
/// # Errors
/// * `InvalidEncoding` - Token is not standard base64
/// * `InvalidUtf8` - Decoded bytes are not UTF-8
/// * `MissingSeparator` - Decoded text has no colon
pub fn parse_basic_token(token: &str) -> Result<BasicCredentials, BasicTokenError> {
    let bytes = BASE64_STANDARD
        .decode(token.trim())
        .map_err(|e| BasicTokenError::InvalidEncoding(e.to_string()))?;
    let decoded = String::from_utf8(bytes).map_err(|_| BasicTokenError::InvalidUtf8)?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or(BasicTokenError::MissingSeparator)?;

    Ok(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Extract the token from a `Basic <token>` Authorization header value.
pub fn basic_token_from_header(value: &str) -> Result<&str, BasicTokenError> {
    token_with_scheme(value, "Basic")
}

/// Extract the token from a `Bearer <token>` Authorization header value.
pub fn bearer_token_from_header(value: &str) -> Result<&str, BasicTokenError> {
    token_with_scheme(value, "Bearer")
}

// Scheme names are case-insensitive (RFC 7235).
fn token_with_scheme<'a>(
    value: &'a str,
    scheme: &'static str,
) -> Result<&'a str, BasicTokenError> {
    let (given, token) = value
        .trim()
        .split_once(' ')
        .ok_or(BasicTokenError::MissingScheme(scheme))?;

    let token = token.trim();
    if !given.eq_ignore_ascii_case(scheme) || token.is_empty() {
        return Err(BasicTokenError::MissingScheme(scheme));
    }

    Ok(token)
}
