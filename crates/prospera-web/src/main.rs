//! Prospera server binary.
//!
//! Run with: cargo run -p prospera-web

use prospera_common::config::AppConfig;
use prospera_db::PgRecordStore;
use prospera_web::auth::TokenTable;
use prospera_web::drafts::MemoryDraftStore;
use prospera_web::state::AppState;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;

    let store = PgRecordStore::connect(&config.database_url).await?;
    info!("connected to database, migrations applied");

    let state = AppState::new(
        Arc::new(store),
        Arc::new(TokenTable::from_config(&config.auth)),
        Arc::new(MemoryDraftStore::new()),
    );
    let app = prospera_web::build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("listening on http://{}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
