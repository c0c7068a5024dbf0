//! Axum route handlers.
//!
//! Handlers extract the form, query and session, call the use case and answer
//! with a page or a redirect. Every path produces a response.

pub mod error;
pub mod federated;
pub mod login;
pub mod logout;
pub mod pages;
pub mod register;
pub mod secrets;
pub mod submit;

pub use error::AppError;
pub use federated::{FederatedState, begin_federated_login, complete_federated_login};
pub use login::{CredentialsForm, login};
pub use logout::logout;
pub use pages::{home, login_form, register_form};
pub use register::register;
pub use secrets::secrets;
pub use submit::{submit, submit_form};
