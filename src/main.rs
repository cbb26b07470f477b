mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod shopping_list;
mod state;
mod store;

use anyhow::Context;
use config::Config;
use state::AppState;
use std::sync::Arc;
use store::{FileStorage, ShoppingListStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("shopping-list-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let storage = FileStorage::open(config.data_file())?;
    tracing::info!("Using data file: {}", storage.path().display());

    let state = AppState {
        store: ShoppingListStore::new(Arc::new(storage)),
    };
    let app = routes::router(state);

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server is running on port {}", config.service_port);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
