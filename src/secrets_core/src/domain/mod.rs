pub mod password;
pub mod provider;
pub mod session_user;
pub mod user;
pub mod username;
