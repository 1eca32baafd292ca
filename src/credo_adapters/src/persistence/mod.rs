pub mod in_memory_credential_store;
pub mod postgres_credential_store;

pub use in_memory_credential_store::InMemoryCredentialStore;
pub use postgres_credential_store::PostgresCredentialStore;
