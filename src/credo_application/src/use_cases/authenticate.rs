use secrecy::Secret;

use credo_core::{Credential, CredentialError, CredentialStore, ErrorCode};

use crate::password::verify_password_hash;

/// Authenticate use case - checks an email/password pair.
pub struct AuthenticateUseCase<'a, S>
where
    S: CredentialStore,
{
    store: &'a S,
}

impl<'a, S> AuthenticateUseCase<'a, S>
where
    S: CredentialStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Execute the authenticate use case.
    ///
    /// Returns the full credential record on success; the transport layer
    /// is responsible for keeping the hash out of any outward projection.
    ///
    /// Every failure, lookup errors included, surfaces as the same
    /// `ErrorCode::AuthFailed` so a caller cannot probe which emails are
    /// registered. The underlying cause stays on the error chain for logs.
    #[tracing::instrument(name = "AuthenticateUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: String,
        password: Secret<String>,
    ) -> Result<Credential, CredentialError> {
        let credential = self
            .store
            .by_email(&email)
            .await
            .map_err(|e| CredentialError::wrap(e, ErrorCode::AuthFailed, "Auth failed"))?;

        verify_password_hash(credential.password.clone(), password)
            .await
            .map_err(|_| CredentialError::new(ErrorCode::AuthFailed, "Auth failed"))?;

        Ok(credential)
    }
}
