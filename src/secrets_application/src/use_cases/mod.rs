pub mod federated_login;
pub mod list_secrets;
pub mod login;
pub mod register;
pub mod submit_secret;
