use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::BasicCredentials;
use auth::Claims;
use serde_json::Map;
use serde_json::Value;

use crate::config::JwtConfig;
use crate::domain::card::models::PreferenceCard;
use crate::domain::user::models::AuthToken;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::domain::user::models::UserSummary;
use crate::serialize::SerializedCard;
use crate::serialize::SerializedUser;
use crate::user::errors::AuthError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Authentication helpers shared by the route handlers.
///
/// Holds no per-request state: the repository and the signing keys are
/// fixed at construction.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Authenticator,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `jwt` - Signing secret and optional token lifetime
    pub fn new(repository: Arc<UR>, jwt: &JwtConfig) -> Self {
        Self {
            repository,
            authenticator: Authenticator::new(jwt.secret.as_bytes())
                .with_token_lifetime(jwt.token_lifetime()),
        }
    }

    /// Decode a basic token into username and password.
    pub fn parse_basic_token(token: &str) -> Result<BasicCredentials, AuthError> {
        Ok(auth::parse_basic_token(token)?)
    }

    /// Check a candidate password against the strength policy.
    ///
    /// # Errors
    /// * `WeakPassword` - First violated rule; its message is the user-facing reason
    pub fn validate_password(password: &str) -> Result<(), AuthError> {
        Ok(auth::validate_password(password)?)
    }

    /// Hash a password with bcrypt at cost 12.
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        Ok(self.authenticator.hash_password(password)?)
    }

    /// Compare a plaintext password with a stored hash.
    pub fn compare_passwords(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(self.authenticator.compare_passwords(password, hash)?)
    }

    /// Sign `payload` as an HS256 token with `subject` as its `sub` claim.
    pub fn create_jwt(
        &self,
        subject: &str,
        payload: Map<String, Value>,
    ) -> Result<String, AuthError> {
        Ok(self.authenticator.create_jwt(subject, payload)?)
    }

    /// Verify a token and return its claims.
    pub fn verify_jwt(&self, token: &str) -> Result<Claims, AuthError> {
        Ok(self.authenticator.verify_jwt(token)?)
    }

    /// Verify a token without returning its claims.
    pub fn decode_jwt(&self, token: &str) -> Result<(), AuthError> {
        Ok(self.authenticator.decode_jwt(token)?)
    }

    pub fn serialize_user(user: &User) -> SerializedUser {
        crate::serialize::serialize_user(user)
    }

    pub fn serialize_card(card: &PreferenceCard) -> SerializedCard {
        crate::serialize::serialize_card(card)
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn get_user_with_user_name(
        &self,
        user_name: &UserName,
    ) -> Result<Option<User>, AuthError> {
        self.repository.find_by_user_name(user_name).await
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError> {
        self.repository.find_by_id(id).await
    }

    async fn has_user_with_user_name(&self, user_name: &UserName) -> Result<bool, AuthError> {
        self.repository.exists_by_user_name(user_name).await
    }

    async fn get_all_users(&self) -> Result<Vec<UserSummary>, AuthError> {
        self.repository.list_all().await
    }

    async fn insert_user(&self, new_user: NewUser) -> Result<User, AuthError> {
        let user = self.repository.insert(new_user).await?;
        tracing::info!(user_id = %user.id, user_name = %user.user_name, "User inserted");
        Ok(user)
    }

    async fn register_user(&self, command: RegisterUser) -> Result<SerializedUser, AuthError> {
        let user_name = UserName::new(command.user_name)?;
        Self::validate_password(&command.password)?;

        if self.has_user_with_user_name(&user_name).await? {
            return Err(AuthError::UserNameAlreadyExists(user_name.to_string()));
        }

        let new_user = NewUser {
            password_hash: self.hash_password(&command.password)?,
            user_name,
            full_name: command.full_name,
            position: command.position,
        };

        let user = self.insert_user(new_user).await?;
        Ok(Self::serialize_user(&user))
    }

    async fn login(&self, credentials: BasicCredentials) -> Result<AuthToken, AuthError> {
        let user_name = UserName::from_stored(credentials.username);

        let user = match self.get_user_with_user_name(&user_name).await? {
            Some(user) => user,
            None => {
                tracing::warn!(user_name = %user_name, "Login rejected: unknown user name");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let mut payload = Map::new();
        payload.insert(
            "user_name".to_string(),
            Value::String(user.user_name.to_string()),
        );

        let result = self
            .authenticator
            .authenticate(
                &credentials.password,
                &user.password_hash,
                &user.id.to_string(),
                payload,
            )
            .inspect_err(|e| {
                tracing::warn!(user_id = %user.id, error = %e, "Login rejected");
            })?;

        Ok(AuthToken {
            auth_token: result.access_token,
        })
    }

    async fn authenticate_bearer(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.verify_jwt(token).inspect_err(|e| {
            tracing::warn!(error = %e, "Bearer token rejected");
        })?;

        let subject = claims
            .sub
            .as_deref()
            .ok_or_else(|| AuthError::Unauthorized("token has no subject".to_string()))?;
        let user_id = UserId::from_string(subject)
            .map_err(|e| AuthError::Unauthorized(e.to_string()))?;

        self.get_user_by_id(&user_id)
            .await?
            .ok_or_else(|| AuthError::Unauthorized(format!("user {} not found", user_id)))
    }
}
