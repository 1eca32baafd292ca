use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use async_trait::async_trait;

use credo_core::{Credential, CredentialError, CredentialStore, ErrorCode};

/// In-memory credential store for tests and local development.
///
/// Mirrors the relational adapter's contract: sequential id assignment and
/// a duplicate-email rejection equivalent to the unique constraint.
#[derive(Default, Clone)]
pub struct InMemoryCredentialStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    credentials: HashMap<i64, Credential>,
    next_id: i64,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found() -> CredentialError {
    CredentialError::new(ErrorCode::CredentialNotFound, "Credential not found")
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn by_token(&self, token: &str) -> Result<Credential, CredentialError> {
        let inner = self.inner.read().await;
        inner
            .credentials
            .values()
            .find(|c| c.token == token)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn by_id(&self, id: i64) -> Result<Credential, CredentialError> {
        let inner = self.inner.read().await;
        inner.credentials.get(&id).cloned().ok_or_else(not_found)
    }

    async fn by_email(&self, email: &str) -> Result<Credential, CredentialError> {
        let inner = self.inner.read().await;
        inner
            .credentials
            .values()
            .find(|c| c.email == email)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create(&self, mut credential: Credential) -> Result<Credential, CredentialError> {
        let mut inner = self.inner.write().await;

        if inner.credentials.values().any(|c| c.email == credential.email) {
            return Err(CredentialError::new(
                ErrorCode::EmailAlreadyExists,
                "User with this email already exists.",
            ));
        }

        inner.next_id += 1;
        credential.id = inner.next_id;
        inner.credentials.insert(credential.id, credential.clone());

        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, faker::internet::en::SafeEmail};

    fn credential(email: &str, token: &str) -> Credential {
        let mut credential = Credential::new(email.to_string());
        credential.password = "$argon2id$stub".to_string();
        credential.token = token.to_string();
        credential
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = InMemoryCredentialStore::new();

        for expected_id in 1..=5 {
            let email: String = SafeEmail().fake();
            let created = store
                .create(credential(&email, &format!("token-{expected_id}")))
                .await
                .unwrap();
            assert_eq!(created.id, expected_id);
        }
    }

    #[tokio::test]
    async fn create_rejects_a_duplicate_email() {
        let store = InMemoryCredentialStore::new();

        store
            .create(credential("example@example.org", "token-1"))
            .await
            .unwrap();

        let err = store
            .create(credential("example@example.org", "token-2"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::EmailAlreadyExists);

        // The first row is untouched.
        let found = store.by_email("example@example.org").await.unwrap();
        assert_eq!(found.token, "token-1");
    }

    #[tokio::test]
    async fn lookups_find_the_created_row() {
        let store = InMemoryCredentialStore::new();

        let created = store
            .create(credential("example@example.org", "token"))
            .await
            .unwrap();

        assert_eq!(store.by_id(created.id).await.unwrap(), created);
        assert_eq!(store.by_token("token").await.unwrap(), created);
        assert_eq!(store.by_email("example@example.org").await.unwrap(), created);
    }

    #[tokio::test]
    async fn lookups_fail_with_not_found_for_unknown_keys() {
        let store = InMemoryCredentialStore::new();

        assert_eq!(
            store.by_token("missing").await.unwrap_err().code(),
            ErrorCode::CredentialNotFound
        );
        assert_eq!(
            store.by_id(42).await.unwrap_err().code(),
            ErrorCode::CredentialNotFound
        );
        assert_eq!(
            store.by_email("missing@example.org").await.unwrap_err().code(),
            ErrorCode::CredentialNotFound
        );
    }
}
