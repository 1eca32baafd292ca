use async_trait::async_trait;

use crate::domain::{credential::Credential, error::CredentialError};

/// Storage port for credentials.
///
/// Implementations are pure persistence: no hashing, no token generation,
/// no uniqueness pre-checks beyond what the storage engine itself enforces.
/// Lookups fail with `ErrorCode::CredentialNotFound` when no row matches;
/// `create` maps a unique-violation on the email constraint to
/// `ErrorCode::EmailAlreadyExists` and everything else to
/// `ErrorCode::Internal`.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Retrieves a credential by its bearer token.
    async fn by_token(&self, token: &str) -> Result<Credential, CredentialError>;

    /// Retrieves a credential by its surrogate id.
    async fn by_id(&self, id: i64) -> Result<Credential, CredentialError>;

    /// Retrieves a credential by email.
    async fn by_email(&self, email: &str) -> Result<Credential, CredentialError>;

    /// Inserts a new credential and returns it with the store-assigned id.
    async fn create(&self, credential: Credential) -> Result<Credential, CredentialError>;
}
