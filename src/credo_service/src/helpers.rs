use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

use credo_adapters::config::DatabaseSettings;

/// Build the PostgreSQL connection pool and run all pending migrations.
pub async fn configure_postgresql(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let pool = get_postgres_pool(settings).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// A pool sized from the configured knobs: max/idle connections, connection
/// lifetime and acquire timeout.
pub async fn get_postgres_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .max_lifetime(Duration::from_secs(settings.connection_lifetime_secs))
        .acquire_timeout(Duration::from_secs(settings.connect_timeout_secs))
        .connect(settings.url.expose_secret())
        .await
}
