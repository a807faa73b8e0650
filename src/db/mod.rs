pub mod credentials;
pub mod sqlite;

#[cfg(test)]
pub use credentials::MockCredentialStore;
pub use credentials::{CredentialStore, SqliteCredentialStore};
pub use sqlite::create_pool;
