use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;

use credo_application::AuthenticateUseCase;
use credo_core::{Clock, CredentialStore, TokenGenerator};

use super::{error::ApiError, response::CredentialResponse};
use crate::http::ApiState;

#[derive(Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: Secret<String>,
}

/// `POST /v1/auth` - check an email/password pair.
///
/// Responds with the same `auth_failed` envelope whether the email is
/// unknown or the password is wrong.
#[tracing::instrument(name = "Auth", skip_all)]
pub async fn authenticate<S, C, G>(
    State(state): State<ApiState<S, C, G>>,
    Json(request): Json<AuthRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: CredentialStore + Clone + 'static,
    C: Clock + Clone + 'static,
    G: TokenGenerator + Clone + 'static,
{
    let use_case = AuthenticateUseCase::new(&state.store);

    let credential = use_case.execute(request.email, request.password).await?;

    Ok(Json(CredentialResponse::from(credential)))
}
