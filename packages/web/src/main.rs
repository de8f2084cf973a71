use anyhow::Context;
use api::{AppState, Settings};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let settings = Settings::new().context("failed to load settings")?;

    // Initialize database pool
    let pool = api::db::connect(&settings.database)
        .await
        .with_context(|| format!("failed to open database {}", settings.database.url))?;

    // Run migrations
    api::db::migrate(&pool)
        .await
        .context("failed to run migrations")?;

    // Create session store
    let session_store = SqliteStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .context("failed to create session table")?;

    let addr = settings.server.address();
    let router = api::router(AppState::new(pool, settings), session_store);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
