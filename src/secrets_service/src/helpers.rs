use std::time::Duration;

use secrecy::ExposeSecret;
use secrets_adapters::config::DatabaseSettings;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tokio::task::JoinHandle;
use tower_sessions::{ExpiredDeletion, session_store};
use tower_sessions_sqlx_store::PostgresStore;

/// Connects to PostgreSQL when a database URL is configured and brings the
/// schema up to date.
///
/// # Returns
/// `None` when no URL is configured.
pub async fn configure_postgresql(settings: &DatabaseSettings) -> Result<Option<PgPool>, sqlx::Error> {
    let Some(url) = &settings.url else {
        return Ok(None);
    };

    let pg_pool = get_postgres_pool(url.expose_secret(), settings.max_connections).await?;

    sqlx::migrate!("../secrets_adapters/migrations")
        .run(&pg_pool)
        .await?;

    Ok(Some(pg_pool))
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

/// Session store in the same database as the users. Creates its table on first use.
pub async fn configure_session_store(pg_pool: PgPool) -> Result<PostgresStore, sqlx::Error> {
    let session_store = PostgresStore::new(pg_pool);
    session_store.migrate().await?;
    Ok(session_store)
}

/// Deletes expired sessions from `session_store` every `period` until aborted.
pub fn spawn_expired_session_deletion(
    session_store: PostgresStore,
    period: Duration,
) -> JoinHandle<Result<(), session_store::Error>> {
    tokio::task::spawn(session_store.continuously_delete_expired(period))
}
