use credo_core::{Credential, CredentialError, CredentialStore};

/// Lookup-by-token use case - resolves a bearer token to its credential.
pub struct LookupByTokenUseCase<'a, S>
where
    S: CredentialStore,
{
    store: &'a S,
}

impl<'a, S> LookupByTokenUseCase<'a, S>
where
    S: CredentialStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Pass-through to the store; `ErrorCode::CredentialNotFound` bubbles
    /// up unchanged.
    #[tracing::instrument(name = "LookupByTokenUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &str) -> Result<Credential, CredentialError> {
        self.store.by_token(token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use credo_core::ErrorCode;

    struct TokenStore {
        credential: Credential,
    }

    #[async_trait]
    impl CredentialStore for TokenStore {
        async fn by_token(&self, token: &str) -> Result<Credential, CredentialError> {
            if token == self.credential.token {
                Ok(self.credential.clone())
            } else {
                Err(CredentialError::new(
                    ErrorCode::CredentialNotFound,
                    "Credential not found",
                ))
            }
        }

        async fn by_id(&self, _id: i64) -> Result<Credential, CredentialError> {
            unimplemented!()
        }

        async fn by_email(&self, _email: &str) -> Result<Credential, CredentialError> {
            unimplemented!()
        }

        async fn create(&self, _credential: Credential) -> Result<Credential, CredentialError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn known_token_resolves_to_its_credential() {
        let mut credential = Credential::new("example@example.org".to_string());
        credential.id = 1;
        credential.token = "1234abcd".to_string();
        let store = TokenStore { credential };

        let use_case = LookupByTokenUseCase::new(&store);
        let found = use_case.execute("1234abcd").await.unwrap();

        assert_eq!(found.id, 1);
        assert_eq!(found.email, "example@example.org");
    }

    #[tokio::test]
    async fn unknown_token_bubbles_not_found() {
        let store = TokenStore {
            credential: Credential::new("example@example.org".to_string()),
        };

        let use_case = LookupByTokenUseCase::new(&store);
        let err = use_case.execute("bad_token").await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::CredentialNotFound);
    }
}
