mod hashmap_user_store;
mod password_hashing;
mod postgres_user_store;

pub use hashmap_user_store::HashMapUserStore;
pub use password_hashing::{compute_password_hash, verify_password_hash};
pub use postgres_user_store::PostgresUserStore;
