use sqlx::postgres::{PgPool, PgPoolOptions};

/// Build the connection pool handed to the application at startup.
///
/// The pool is the only shared resource in the service; it is passed down
/// explicitly through `AppState` rather than held in a global.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    tracing::info!("Database pool ready (max_connections={})", max_connections);
    Ok(pool)
}
