use std::{future::Future, sync::Arc};

use axum::{Router, routing::get};
use secrets_axum::{
    FederatedState, SessionConfig,
    routes::{
        begin_federated_login, complete_federated_login, home, login, login_form, logout,
        register, register_form, secrets, submit, submit_form,
    },
    with_sessions,
};
use secrets_core::{IdentityProvider, UserStore};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::SessionStore;

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// The secrets web application
pub struct SecretsService {
    router: Router,
}

impl SecretsService {
    /// Create a new SecretsService
    ///
    /// # Arguments
    /// * `user_store` - Store for user records (must be Clone)
    /// * `google` - Identity provider behind `/auth/google`
    /// * `facebook` - Identity provider behind `/auth/facebook`
    /// * `session_config` - Cookie and expiry policy of the session layer
    /// * `session_store` - Where sessions are kept between requests
    /// * `assets_dir` - Directory served for paths no route matches
    pub fn new<U, St>(
        user_store: U,
        google: Arc<dyn IdentityProvider>,
        facebook: Arc<dyn IdentityProvider>,
        session_config: &SessionConfig,
        session_store: St,
        assets_dir: String,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
        St: SessionStore + Clone,
    {
        let router = Router::new()
            // Pages without state
            .route("/", get(home))
            .route("/logout", get(logout))
            // Local accounts and secrets need the user store
            .route("/login", get(login_form).post(login::<U>))
            .route("/register", get(register_form).post(register::<U>))
            .route("/secrets", get(secrets::<U>))
            .route("/submit", get(submit_form).post(submit::<U>))
            .with_state(user_store.clone())
            // Google needs the user store and its provider
            .route("/auth/google", get(begin_federated_login::<U>))
            .route("/auth/google/secrets", get(complete_federated_login::<U>))
            .with_state(FederatedState::new(user_store.clone(), google))
            // Facebook likewise
            .route("/auth/facebook", get(begin_federated_login::<U>))
            .route("/login/federated/facebook", get(begin_federated_login::<U>))
            .route(
                "/oauth2/redirect/facebook",
                get(complete_federated_login::<U>),
            )
            .with_state(FederatedState::new(user_store, facebook))
            .fallback_service(ServeDir::new(assets_dir));

        Self {
            router: with_sessions(router, session_config, session_store),
        }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the SecretsService into a router that can be mounted on another router
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the service on `listener` until `shutdown` resolves. In-flight
    /// requests are allowed to finish.
    pub async fn run_standalone<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.into_router();

        tracing::info!("Secrets service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
