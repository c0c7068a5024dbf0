use std::{sync::Arc, time::Duration};

use color_eyre::eyre::{Result, WrapErr};
use secrets::{
    HashMapUserStore, IdentityProvider, OAuth2IdentityProvider, PostgresUserStore,
    SecretsService, UserStore,
    adapters::config::{SecretsSettings, prod},
    configure_postgresql, configure_session_store, init_tracing, spawn_expired_session_deletion,
    web::{SessionConfig, in_memory_store},
};
use tokio::net::TcpListener;
use tower_sessions::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = SecretsSettings::load().wrap_err("Failed to load settings")?;

    let google: Arc<dyn IdentityProvider> = Arc::new(
        OAuth2IdentityProvider::google(&settings.google)
            .wrap_err("Invalid Google client configuration")?,
    );
    let facebook: Arc<dyn IdentityProvider> = Arc::new(
        OAuth2IdentityProvider::facebook(&settings.facebook)
            .wrap_err("Invalid Facebook client configuration")?,
    );
    let session_config =
        SessionConfig::from_settings(&settings.session).wrap_err("Invalid session settings")?;

    let listener = TcpListener::bind(&settings.application.address)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", settings.application.address))?;

    let app = App {
        google,
        facebook,
        session_config,
        settings: &settings,
    };

    match configure_postgresql(&settings.database)
        .await
        .wrap_err("Failed to set up PostgreSQL")?
    {
        Some(pg_pool) => {
            let user_store = PostgresUserStore::new(pg_pool.clone());
            let session_store = configure_session_store(pg_pool.clone())
                .await
                .wrap_err("Failed to set up the session store")?;
            let deletion_task = spawn_expired_session_deletion(
                session_store.clone(),
                Duration::from_secs(prod::EXPIRED_SESSION_DELETION_INTERVAL_IN_SECONDS),
            );

            let served = app.serve(user_store, session_store, listener).await;
            deletion_task.abort();
            pg_pool.close().await;
            served?;
        }
        None => {
            tracing::warn!("No database configured, users and sessions are kept in memory");
            let user_store = HashMapUserStore::new();
            let session_store = in_memory_store(prod::SESSION_CACHE_CAPACITY);
            app.serve(user_store, session_store, listener).await?;
        }
    }

    tracing::info!("Secrets service stopped");
    Ok(())
}

struct App<'a> {
    google: Arc<dyn IdentityProvider>,
    facebook: Arc<dyn IdentityProvider>,
    session_config: SessionConfig,
    settings: &'a SecretsSettings,
}

impl App<'_> {
    async fn serve<U, St>(
        self,
        user_store: U,
        session_store: St,
        listener: TcpListener,
    ) -> Result<()>
    where
        U: UserStore + Clone + 'static,
        St: SessionStore + Clone,
    {
        let service = SecretsService::new(
            user_store,
            self.google,
            self.facebook,
            &self.session_config,
            session_store,
            self.settings.application.assets_dir.clone(),
        );

        service
            .run_standalone(listener, shutdown_signal())
            .await
            .wrap_err("Server error")
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
