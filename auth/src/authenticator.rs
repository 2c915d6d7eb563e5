use chrono::Duration;
use chrono::Utc;
use serde_json::Map;
use serde_json::Value;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_lifetime: Option<Duration>,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// Tokens carry no `exp` claim unless a lifetime is set with
    /// [`Authenticator::with_token_lifetime`].
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_lifetime: None,
        }
    }

    /// Set the lifetime stamped as `exp` on tokens created by `create_jwt`.
    pub fn with_token_lifetime(mut self, lifetime: Option<Duration>) -> Self {
        self.token_lifetime = lifetime;
        self
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Compare a plaintext password with a stored hash.
    ///
    /// # Errors
    /// * `PasswordError` - Stored hash is malformed
    pub fn compare_passwords(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, hash)
    }

    /// Verify credentials and issue a token for `subject` carrying `payload`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        payload: Map<String, Value>,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.compare_passwords(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.create_jwt(subject, payload)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Sign `payload` as an HS256 token for `subject`.
    ///
    /// Sets `sub` and `iat`. When a token lifetime is configured and the
    /// payload has no `exp`, `exp` is set from it.
    ///
    /// # Errors
    /// * `ConflictingClaim` - Payload already has a `sub` claim
    /// * `InvalidPayload` - A registered claim in the payload has the wrong type
    /// * `EncodingFailed` - Token generation failed
    pub fn create_jwt(
        &self,
        subject: &str,
        payload: Map<String, Value>,
    ) -> Result<String, JwtError> {
        let mut claims = Claims::from_payload(payload)?;
        if claims.sub.is_some() {
            return Err(JwtError::ConflictingClaim("sub".to_string()));
        }

        claims = claims.with_subject(subject);
        if claims.iat.is_none() {
            claims = claims.with_issued_at(Utc::now().timestamp());
        }
        if let (None, Some(lifetime)) = (claims.exp, self.token_lifetime) {
            claims = claims.expiring_in(lifetime);
        }

        self.jwt_handler.encode(&claims)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - `exp` is in the past
    /// * `DecodingFailed` - Bad signature, other algorithm or malformed token
    pub fn verify_jwt(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }

    /// Verify a token, discarding its claims.
    ///
    /// Same checks as [`Authenticator::verify_jwt`]; use that when the
    /// payload is needed.
    pub fn decode_jwt(&self, token: &str) -> Result<(), JwtError> {
        self.verify_jwt(token).map(|_| ())
    }
}
