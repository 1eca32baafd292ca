use chrono::{DateTime, Utc};

/// A user's persisted login identity.
///
/// `password` holds an argon2 PHC hash once the credential has passed
/// through registration; it never carries plaintext at rest. `token` is an
/// opaque bearer identifier assigned at registration and immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    /// Surrogate key, assigned by the store on create. Zero until persisted.
    pub id: i64,
    /// Salted password hash (PHC string, salt and cost embedded).
    pub password: String,
    /// Opaque bearer token used for lookups.
    pub token: String,
    /// Unique across all credentials.
    pub email: String,
    /// Staging field for a pending email change. Stored, not acted on.
    pub email_tmp: String,
    pub email_verified: bool,
    /// Reserved for a verification flow that is not part of the core logic.
    pub verification_code: String,
    pub verification_code_attempts: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    /// A fresh, unpersisted credential for the given email.
    ///
    /// Password, token and timestamps are filled in by the registration
    /// use case before the credential reaches a store.
    pub fn new(email: String) -> Self {
        Self {
            id: 0,
            password: String::new(),
            token: String::new(),
            email,
            email_tmp: String::new(),
            email_verified: false,
            verification_code: String::new(),
            verification_code_attempts: 0,
            created_at: DateTime::<Utc>::MIN_UTC,
            updated_at: DateTime::<Utc>::MIN_UTC,
        }
    }
}
