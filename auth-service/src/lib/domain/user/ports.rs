use async_trait::async_trait;
use auth::BasicCredentials;

use crate::domain::user::models::AuthToken;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::domain::user::models::UserSummary;
use crate::serialize::SerializedUser;
use crate::user::errors::AuthError;

/// Port for the asynchronous authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Retrieve the user with the given user name.
    ///
    /// # Returns
    /// Optional user (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn get_user_with_user_name(&self, user_name: &UserName)
        -> Result<Option<User>, AuthError>;

    /// Retrieve the user with the given identifier.
    ///
    /// # Returns
    /// Optional user (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;

    /// Check whether a user name is taken.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn has_user_with_user_name(&self, user_name: &UserName) -> Result<bool, AuthError>;

    /// List id, user name, full name and position of every user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn get_all_users(&self) -> Result<Vec<UserSummary>, AuthError>;

    /// Insert a user and return the stored record.
    ///
    /// # Errors
    /// * `UserNameAlreadyExists` - User name is already taken
    /// * `DatabaseError` - Database operation failed
    async fn insert_user(&self, new_user: NewUser) -> Result<User, AuthError>;

    /// Validate, hash and store a new user.
    ///
    /// # Returns
    /// Sanitized view of the created user
    ///
    /// # Errors
    /// * `WeakPassword` - Password fails the strength policy
    /// * `UserNameAlreadyExists` - User name is already taken
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register_user(&self, command: RegisterUser) -> Result<SerializedUser, AuthError>;

    /// Check basic credentials and issue a token whose subject is the user id.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown user name or wrong password
    /// * `Password` - Stored hash is malformed
    /// * `Jwt` - Token generation failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, credentials: BasicCredentials) -> Result<AuthToken, AuthError>;

    /// Resolve a bearer token to the user it was issued for.
    ///
    /// # Errors
    /// * `Jwt` - Token is invalid or expired
    /// * `Unauthorized` - Subject is missing or the user no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn authenticate_bearer(&self, token: &str) -> Result<User, AuthError>;
}

/// Persistence operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Returns
    /// Stored user, including the generated id and creation date
    ///
    /// # Errors
    /// * `UserNameAlreadyExists` - User name is already taken
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, new_user: NewUser) -> Result<User, AuthError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;

    /// Retrieve user by user name.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_user_name(&self, user_name: &UserName) -> Result<Option<User>, AuthError>;

    /// Check for a user with this user name.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn exists_by_user_name(&self, user_name: &UserName) -> Result<bool, AuthError>;

    /// Retrieve the summary projection of all users.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<UserSummary>, AuthError>;
}
