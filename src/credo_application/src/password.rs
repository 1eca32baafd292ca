//! Password hashing helpers.
//!
//! Hashing and verification run on the blocking thread pool: argon2 is
//! deliberately CPU-expensive and must not stall the async runtime.

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};

fn hasher() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

/// Hashes a plaintext password into a PHC string.
///
/// The salt and cost parameters are embedded in the result, so verification
/// needs no separate salt storage.
#[tracing::instrument(name = "Computing password hash", skip_all)]
pub async fn compute_password_hash(password: Secret<String>) -> Result<String, String> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            hasher()?
                .hash_password(password.expose_secret().as_bytes(), &salt)
                .map(|h| h.to_string())
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}

/// Verifies a plaintext candidate against a stored PHC hash.
///
/// Uses argon2's constant-time comparison. Any failure, malformed hash
/// included, reads as a mismatch to the caller.
#[tracing::instrument(name = "Verify password hash", skip_all)]
pub async fn verify_password_hash(
    expected_password_hash: String,
    password_candidate: Secret<String>,
) -> Result<(), String> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(&expected_password_hash).map_err(|e| e.to_string())?;

            hasher()?
                .verify_password(
                    password_candidate.expose_secret().as_bytes(),
                    &expected_password_hash,
                )
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify_round_trips() {
        let hash = compute_password_hash(Secret::from("pw12345".to_string()))
            .await
            .unwrap();

        assert_ne!(hash, "pw12345");
        assert!(hash.starts_with("$argon2id$"));

        verify_password_hash(hash, Secret::from("pw12345".to_string()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn verify_rejects_a_different_plaintext() {
        let hash = compute_password_hash(Secret::from("pw12345".to_string()))
            .await
            .unwrap();

        let result = verify_password_hash(hash, Secret::from("pw54321".to_string())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn same_password_hashes_to_different_strings() {
        // Fresh salt per call.
        let first = compute_password_hash(Secret::from("pw12345".to_string()))
            .await
            .unwrap();
        let second = compute_password_hash(Secret::from("pw12345".to_string()))
            .await
            .unwrap();

        assert_ne!(first, second);
    }
}
