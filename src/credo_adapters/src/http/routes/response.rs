use chrono::{DateTime, Utc};
use serde::Serialize;

use credo_core::Credential;

/// Outward projection of a credential.
///
/// The password hash is deliberately absent: it must never appear in any
/// external representation.
#[derive(Debug, Serialize)]
pub struct CredentialResponse {
    pub id: i64,
    pub token: String,
    pub email: String,
    pub email_tmp: String,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Credential> for CredentialResponse {
    fn from(credential: Credential) -> Self {
        CredentialResponse {
            id: credential.id,
            token: credential.token,
            email: credential.email,
            email_tmp: credential.email_tmp,
            email_verified: credential.email_verified,
            created_at: credential.created_at,
            updated_at: credential.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_never_contains_the_password_hash() {
        let mut credential = Credential::new("example@example.org".to_string());
        credential.id = 1;
        credential.password = "$argon2id$super-secret-hash".to_string();
        credential.token = "token".to_string();

        let body = serde_json::to_value(CredentialResponse::from(credential)).unwrap();

        assert!(body.get("password").is_none());
        assert_eq!(body["id"], 1);
        assert_eq!(body["token"], "token");
        assert_eq!(body["email"], "example@example.org");
        assert_eq!(body["email_verified"], false);
    }
}
