pub mod routes;

use credo_core::{Clock, CredentialStore, TokenGenerator};

/// Shared state handed to every route: the store plus the clock and token
/// source the registration flow injects into its use case.
#[derive(Clone)]
pub struct ApiState<S, C, G>
where
    S: CredentialStore,
    C: Clock,
    G: TokenGenerator,
{
    pub store: S,
    pub clock: C,
    pub token_generator: G,
}
