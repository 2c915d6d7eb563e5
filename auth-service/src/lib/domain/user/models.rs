use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::user::errors::UserIdError;
use crate::user::errors::UserNameError;

/// User record as stored in `prefcard_users`.
///
/// Carries the password hash; use `serialize_user` before handing a user to
/// anything outside the service.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub user_name: UserName,
    pub full_name: String,
    pub position: Option<String>,
    pub password_hash: String,
    pub date_created: DateTime<Utc>,
}

/// User identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i32);

impl UserId {
    /// Parse a user ID from string, e.g. a token subject.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        s.parse::<i32>()
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(format!("{}: {}", s, e)))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// User name value type, the unique lookup key for users.
///
/// New names are 1-255 characters without leading or trailing whitespace.
/// Names already in the store predate that rule and are read back as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    const MAX_LENGTH: usize = 255;

    /// Create a new valid user name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty
    /// * `TooLong` - Name longer than 255 characters
    /// * `SurroundingWhitespace` - Name starts or ends with whitespace
    pub fn new(user_name: impl Into<String>) -> Result<Self, UserNameError> {
        let user_name = user_name.into();
        let length = user_name.chars().count();

        if length == 0 {
            return Err(UserNameError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(UserNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        if user_name.trim() != user_name {
            return Err(UserNameError::SurroundingWhitespace);
        }

        Ok(Self(user_name))
    }

    /// Wrap a name read from the store, or a key used to look one up,
    /// without applying the rules for new names.
    pub fn from_stored(user_name: impl Into<String>) -> Self {
        Self(user_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Row to insert; `id` and `date_created` are filled in by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub user_name: UserName,
    pub full_name: String,
    pub position: Option<String>,
    pub password_hash: String,
}

/// Projection returned when listing every user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: UserId,
    pub user_name: UserName,
    pub full_name: String,
    pub position: Option<String>,
}

/// Registration input as submitted; the service validates the user name and
/// password and hashes the password.
#[derive(Debug)]
pub struct RegisterUser {
    pub user_name: String,
    pub full_name: String,
    pub position: Option<String>,
    pub password: String,
}

/// Token handed back after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthToken {
    pub auth_token: String,
}
