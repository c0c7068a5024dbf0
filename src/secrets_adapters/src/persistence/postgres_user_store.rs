use secrecy::{ExposeSecret, Secret};
use secrets_core::{
    FederatedIdentity, Password, User, UserId, UserStore, UserStoreError, Username,
};
use sqlx::{FromRow, PgPool, Pool, Postgres};
use uuid::Uuid;

use super::password_hashing::{compute_password_hash, verify_password_hash};

const USER_COLUMNS: &str = "id, username, password_hash, google_id, facebook_id, secret";

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    username: Option<String>,
    password_hash: Option<String>,
    google_id: Option<String>,
    facebook_id: Option<String>,
    secret: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        User::parse(
            UserId::from(row.id),
            row.username,
            row.password_hash.map(Secret::from),
            row.google_id,
            row.facebook_id,
            row.secret,
        )
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
    }
}

fn unexpected(e: sqlx::Error) -> UserStoreError {
    UserStoreError::UnexpectedError(e.to_string())
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(
        &self,
        username: Username,
        password: Password,
    ) -> Result<User, UserStoreError> {
        let password_hash = compute_password_hash(password)
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let user = User::local(username, password_hash);

        sqlx::query(
            r#"
                INSERT INTO users (id, username, password_hash)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(*user.id().as_uuid())
        .bind(user.username().map(|u| u.as_str()))
        .bind(user.password_hash().map(|h| h.expose_secret().as_str()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            unexpected(e)
        })?;

        Ok(user)
    }

    #[tracing::instrument(name = "Validating user credentials in PostgreSQL", skip_all)]
    async fn authenticate_user(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };
        let user = User::try_from(row)?;

        let Some(password_hash) = user.password_hash().cloned() else {
            return Err(UserStoreError::IncorrectPassword);
        };

        verify_password_hash(password_hash, password.clone())
            .await
            .map_err(|_| UserStoreError::IncorrectPassword)?;

        Ok(user)
    }

    #[tracing::instrument(
        name = "Find or create federated user in PostgreSQL",
        skip_all,
        fields(provider = %identity.provider())
    )]
    async fn find_or_create_federated(
        &self,
        identity: &FederatedIdentity,
    ) -> Result<User, UserStoreError> {
        // The no-op update makes RETURNING yield the existing row on conflict,
        // so lookup and insert happen in one statement.
        let column = identity.provider().id_field();
        let query = format!(
            r#"
                INSERT INTO users (id, {column})
                VALUES ($1, $2)
                ON CONFLICT ({column}) DO UPDATE SET {column} = EXCLUDED.{column}
                RETURNING {USER_COLUMNS}
            "#
        );

        let row: UserRow = sqlx::query_as(&query)
            .bind(*UserId::new().as_uuid())
            .bind(identity.subject())
            .fetch_one(&self.pool)
            .await
            .map_err(unexpected)?;

        User::try_from(row)
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(*id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(unexpected)?;

        row.ok_or(UserStoreError::UserNotFound)?.try_into()
    }

    #[tracing::instrument(name = "Set secret in PostgreSQL", skip_all)]
    async fn set_secret(&self, id: &UserId, secret: String) -> Result<(), UserStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET secret = $1
                WHERE id = $2
            "#,
        )
        .bind(secret)
        .bind(*id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "List users with secrets from PostgreSQL", skip_all)]
    async fn users_with_secrets(&self) -> Result<Vec<User>, UserStoreError> {
        let rows: Vec<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE secret IS NOT NULL ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        rows.into_iter().map(User::try_from).collect()
    }
}
