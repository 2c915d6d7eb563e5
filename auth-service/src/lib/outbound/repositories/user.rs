use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::domain::user::models::UserSummary;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::AuthError;

const USER_NAME_CONSTRAINT: &str = "prefcard_users_user_name_key";

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool for the configured database.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AuthError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;
        tracing::info!(
            max_connections = config.max_connections,
            database = "postgresql",
            "Database connection pool created"
        );

        Ok(Self::new(pool))
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i32,
    user_name: String,
    full_name: String,
    position: Option<String>,
    password_hash: String,
    date_created: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId(row.id),
            user_name: UserName::from_stored(row.user_name),
            full_name: row.full_name,
            position: row.position,
            password_hash: row.password_hash,
            date_created: row.date_created,
        }
    }
}

#[derive(FromRow)]
struct UserSummaryRow {
    id: i32,
    user_name: String,
    full_name: String,
    position: Option<String>,
}

impl From<UserSummaryRow> for UserSummary {
    fn from(row: UserSummaryRow) -> Self {
        UserSummary {
            id: UserId(row.id),
            user_name: UserName::from_stored(row.user_name),
            full_name: row.full_name,
            position: row.position,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> Result<User, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO prefcard_users (user_name, full_name, position, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_name, full_name, position, password_hash, date_created
            "#,
        )
        .bind(new_user.user_name.as_str())
        .bind(&new_user.full_name)
        .bind(&new_user.position)
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some(USER_NAME_CONSTRAINT)
                {
                    return AuthError::UserNameAlreadyExists(new_user.user_name.to_string());
                }
            }
            AuthError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, user_name, full_name, position, password_hash, date_created
            FROM prefcard_users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(row.map(User::from))
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> Result<Option<User>, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, user_name, full_name, position, password_hash, date_created
            FROM prefcard_users
            WHERE user_name = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(row.map(User::from))
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> Result<bool, AuthError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM prefcard_users WHERE user_name = $1)
            "#,
        )
        .bind(user_name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<UserSummary>, AuthError> {
        let rows = sqlx::query_as::<_, UserSummaryRow>(
            r#"
            SELECT id, user_name, full_name, position
            FROM prefcard_users
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(UserSummary::from).collect())
    }
}
