use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use credo_adapters::http::{
    ApiState,
    routes::{authenticate, lookup_by_token, not_found, register},
};
use credo_core::{Clock, CredentialStore, TokenGenerator};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The credential service API: route table plus the state every route
/// shares.
pub struct CredentialApi {
    router: Router,
}

impl CredentialApi {
    /// Assemble the API over a store, a clock and a token source.
    ///
    /// All three are injected so the same router runs against the
    /// PostgreSQL adapter in production and the in-memory store in tests.
    pub fn new<S, C, G>(store: S, clock: C, token_generator: G) -> Self
    where
        S: CredentialStore + Clone + 'static,
        C: Clock + Clone + 'static,
        G: TokenGenerator + Clone + 'static,
    {
        let state = ApiState {
            store,
            clock,
            token_generator,
        };

        let router = Router::new()
            .route("/v1/users-by-token/{token}", get(lookup_by_token::<S, C, G>))
            .route("/v1/register", post(register::<S, C, G>))
            .route("/v1/auth", post(authenticate::<S, C, G>))
            .fallback(not_found)
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert into a plain Axum router, for nesting into a larger app.
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run as a standalone server until a shutdown signal arrives.
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("credential service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
