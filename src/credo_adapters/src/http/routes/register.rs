use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;

use credo_application::RegisterUseCase;
use credo_core::{Clock, CredentialStore, TokenGenerator};

use super::{error::ApiError, response::CredentialResponse};
use crate::http::ApiState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: Secret<String>,
}

/// `POST /v1/register` - create a credential from an email/password pair.
///
/// The plaintext password is accepted only at this boundary and handed to
/// the use case wrapped in a `Secret`.
#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<S, C, G>(
    State(state): State<ApiState<S, C, G>>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: CredentialStore + Clone + 'static,
    C: Clock + Clone + 'static,
    G: TokenGenerator + Clone + 'static,
{
    let use_case = RegisterUseCase::new(&state.store, &state.clock, &state.token_generator);

    let credential = use_case.execute(request.email, request.password).await?;

    Ok(Json(CredentialResponse::from(credential)))
}
