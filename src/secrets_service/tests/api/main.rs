mod federated;
mod local_auth;
mod secrets;
mod store_failure;
