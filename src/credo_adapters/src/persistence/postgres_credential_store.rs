use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Pool, Postgres};

use credo_core::{Credential, CredentialError, CredentialStore, ErrorCode};

/// Named in the migration; a violation on insert means the email lost the
/// race against a concurrent registration.
const EMAIL_UNIQUE_CONSTRAINT: &str = "uq_credential_email";

const COLUMNS: &str = "id, password, token, email, email_tmp, email_verified, \
                       verification_code, verification_code_attempts, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCredentialStore {
    pool: sqlx::PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresCredentialStore { pool }
    }
}

#[derive(Debug, FromRow)]
struct CredentialRow {
    id: i64,
    password: String,
    token: String,
    email: String,
    email_tmp: String,
    email_verified: bool,
    verification_code: String,
    verification_code_attempts: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CredentialRow> for Credential {
    fn from(row: CredentialRow) -> Self {
        Credential {
            id: row.id,
            password: row.password,
            token: row.token,
            email: row.email,
            email_tmp: row.email_tmp,
            email_verified: row.email_verified,
            verification_code: row.verification_code,
            verification_code_attempts: row.verification_code_attempts,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn not_found() -> CredentialError {
    CredentialError::new(ErrorCode::CredentialNotFound, "Credential not found")
}

fn query_failed(e: sqlx::Error) -> CredentialError {
    CredentialError::wrap(e, ErrorCode::Internal, "Database query failed")
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    #[tracing::instrument(name = "Retrieving credential by token from PostgreSQL", skip_all)]
    async fn by_token(&self, token: &str) -> Result<Credential, CredentialError> {
        let query = format!("SELECT {COLUMNS} FROM credential WHERE token = $1");

        sqlx::query_as::<_, CredentialRow>(&query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?
            .map(Credential::from)
            .ok_or_else(not_found)
    }

    #[tracing::instrument(name = "Retrieving credential by id from PostgreSQL", skip_all)]
    async fn by_id(&self, id: i64) -> Result<Credential, CredentialError> {
        let query = format!("SELECT {COLUMNS} FROM credential WHERE id = $1");

        sqlx::query_as::<_, CredentialRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?
            .map(Credential::from)
            .ok_or_else(not_found)
    }

    #[tracing::instrument(name = "Retrieving credential by email from PostgreSQL", skip_all)]
    async fn by_email(&self, email: &str) -> Result<Credential, CredentialError> {
        let query = format!("SELECT {COLUMNS} FROM credential WHERE email = $1");

        sqlx::query_as::<_, CredentialRow>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?
            .map(Credential::from)
            .ok_or_else(not_found)
    }

    #[tracing::instrument(name = "Inserting credential into PostgreSQL", skip_all)]
    async fn create(&self, credential: Credential) -> Result<Credential, CredentialError> {
        let query = format!(
            "INSERT INTO credential \
             (password, token, email, email_tmp, email_verified, \
              verification_code, verification_code_attempts, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );

        sqlx::query_as::<_, CredentialRow>(&query)
            .bind(&credential.password)
            .bind(&credential.token)
            .bind(&credential.email)
            .bind(&credential.email_tmp)
            .bind(credential.email_verified)
            .bind(&credential.verification_code)
            .bind(credential.verification_code_attempts)
            .bind(credential.created_at)
            .bind(credential.updated_at)
            .fetch_one(&self.pool)
            .await
            .map(Credential::from)
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) {
                        return CredentialError::new(
                            ErrorCode::EmailAlreadyExists,
                            "User with this email already exists.",
                        );
                    }
                }
                query_failed(e)
            })
    }
}
