//! Axum front end for the secrets application.
//!
//! Route handlers extract form data and the session, call the use cases from
//! `secrets_application`, and answer with an askama-rendered page or a redirect.
//!
//! # Usage
//!
//! ```ignore
//! use secrets_axum::{routes, session};
//!
//! let app = Router::new()
//!     .route("/login", get(routes::login_form).post(routes::login::<HashMapUserStore>))
//!     .with_state(user_store);
//! let app = session::with_sessions(app, &session_config, session::in_memory_store(10_000));
//! ```

pub mod routes;
pub mod session;
pub mod templates;

pub use routes::FederatedState;
pub use session::{AuthState, SessionConfig, SessionConfigError, in_memory_store, with_sessions};
pub use templates::HtmlTemplate;
