//! # Secrets
//!
//! Facade crate re-exporting the public APIs of the secrets application: users
//! register or sign in with Google or Facebook, post one anonymous secret each,
//! and everybody can read the list.
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Password`, `User`, `SessionUser`, ...
//! - **Ports**: `UserStore`, `IdentityProvider`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `FederatedLoginUseCase`, ...
//! - **Adapters**: `HashMapUserStore`, `PostgresUserStore`, `OAuth2IdentityProvider`, settings
//! - **Service**: `SecretsService`, the assembled axum application

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use secrets_core::*;
}

pub use secrets_core::{
    FederatedIdentity, Password, Provider, SessionUser, User, UserError, UserId, Username,
};

// ============================================================================
// Ports
// ============================================================================

pub use secrets_core::{
    AuthorizationRequest, IdentityProvider, IdentityProviderError, ProviderProfile, UserStore,
    UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use secrets_application::*;
}

pub use secrets_application::{
    AuthError, FederatedLoginUseCase, ListSecretsUseCase, LoginUseCase, RegisterUseCase,
    SubmitSecretUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use secrets_adapters::persistence::*;
    }

    /// OAuth2 identity providers
    pub mod oauth {
        pub use secrets_adapters::oauth::*;
    }

    /// Configuration
    pub mod config {
        pub use secrets_adapters::config::*;
    }
}

pub use secrets_adapters::{
    oauth::OAuth2IdentityProvider,
    persistence::{HashMapUserStore, PostgresUserStore},
};

// ============================================================================
// Web Layer
// ============================================================================

/// Axum handlers, sessions and views
pub mod web {
    pub use secrets_axum::*;
}

pub use secrets_service::{
    SecretsService,
    helpers::{
        configure_postgresql, configure_session_store, get_postgres_pool,
        spawn_expired_session_deletion,
    },
    telemetry::init_tracing,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
