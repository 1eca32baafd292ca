use std::time::Duration;

use tokio::net::TcpListener;

use credo_adapters::{PostgresCredentialStore, RandomTokenGenerator, Settings, SystemClock};
use credo_service::{configure_postgresql, service::CredentialApi, tracing::init_tracing};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Load configuration
    dotenvy::dotenv().ok();
    let settings = Settings::load()?;

    init_tracing(&settings.log_level)?;
    tracing::info!("starting app");

    // Setup database connection pool and run migrations
    let pool = configure_postgresql(&settings.database).await?;

    // Periodic pool statistics, visible at debug level
    {
        let pool = pool.clone();
        tokio::spawn(async move {
            let mut tick = tokio::time::interval(Duration::from_secs(5));
            loop {
                tick.tick().await;
                tracing::debug!(size = pool.size(), idle = pool.num_idle(), "pg pool stats");
            }
        });
    }

    let store = PostgresCredentialStore::new(pool);
    let api = CredentialApi::new(store, SystemClock, RandomTokenGenerator);

    let listener = TcpListener::bind(settings.http.addr.as_str()).await?;
    api.run_standalone(listener).await?;

    tracing::info!("app was stopped");
    Ok(())
}
