use chrono::{DateTime, Utc};
use secrecy::Secret;

use credo_core::{Clock, Credential, CredentialError, CredentialStore, ErrorCode, TokenGenerator};

use crate::password::compute_password_hash;

/// Length of the opaque bearer token assigned at registration.
pub const TOKEN_LENGTH: usize = 128;

/// Register use case - creates a new credential.
pub struct RegisterUseCase<'a, S, C, G>
where
    S: CredentialStore,
    C: Clock,
    G: TokenGenerator,
{
    store: &'a S,
    clock: &'a C,
    token_generator: &'a G,
}

impl<'a, S, C, G> RegisterUseCase<'a, S, C, G>
where
    S: CredentialStore,
    C: Clock,
    G: TokenGenerator,
{
    pub fn new(store: &'a S, clock: &'a C, token_generator: &'a G) -> Self {
        Self {
            store,
            clock,
            token_generator,
        }
    }

    /// Execute the register use case.
    ///
    /// Checks the email for a prior registration, hashes the plaintext
    /// password, issues the bearer token, stamps creation time from the
    /// injected clock and persists through the store. The returned
    /// credential carries the store-assigned id.
    ///
    /// The email pre-check and the insert are not one atomic step; the
    /// store's unique constraint closes that window by reporting a
    /// duplicate insert as `ErrorCode::EmailAlreadyExists` as well.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: String,
        password: Secret<String>,
    ) -> Result<Credential, CredentialError> {
        match self.store.by_email(&email).await {
            Ok(_) => {
                return Err(CredentialError::new(
                    ErrorCode::EmailAlreadyExists,
                    "User with this email already exists.",
                ));
            }
            Err(e) if e.code() == ErrorCode::CredentialNotFound => {}
            Err(e) => return Err(CredentialError::wrap(e, ErrorCode::Internal, "Register failed")),
        }

        let password_hash = compute_password_hash(password)
            .await
            .map_err(|e| CredentialError::wrap(e, ErrorCode::Internal, "Password hashing failed"))?;

        let token = self.token_generator.generate(TOKEN_LENGTH);
        let now: DateTime<Utc> = self.clock.now();

        let mut credential = Credential::new(email);
        credential.password = password_hash;
        credential.token = token;
        credential.created_at = now;
        credential.updated_at = now;

        self.store.create(credential).await
    }
}
