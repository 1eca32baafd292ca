use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use credo_application::LookupByTokenUseCase;
use credo_core::{Clock, CredentialStore, TokenGenerator};

use super::{error::ApiError, response::CredentialResponse};
use crate::http::ApiState;

/// `GET /v1/users-by-token/{token}` - resolve a bearer token.
#[tracing::instrument(name = "LookupByToken", skip_all)]
pub async fn lookup_by_token<S, C, G>(
    State(state): State<ApiState<S, C, G>>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    S: CredentialStore + Clone + 'static,
    C: Clock + Clone + 'static,
    G: TokenGenerator + Clone + 'static,
{
    let use_case = LookupByTokenUseCase::new(&state.store);

    let credential = use_case.execute(&token).await?;

    Ok(Json(CredentialResponse::from(credential)))
}
