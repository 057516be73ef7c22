//! Pressbox KV API - blog reads over the document store
//!
//! Serves the accelerated (eventually consistent) read path next to a
//! strongly consistent direct path, as two separate endpoints.

mod error;
mod server;
mod store;
mod types;

use std::sync::Arc;

use kv_store_client::{KvStoreClient, ReadConsistency};
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::error::{KvApiError, Result};
use crate::server::{start_server, ServerState, SharedState};
use crate::types::KvApiConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter =
        EnvFilter::from_default_env().add_directive("pressbox_kv_api=info".parse()?);

    // Use JSON format for cloud logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    info!("Starting Pressbox KV API...");

    let config = load_config();
    info!("Port: {}", config.port);
    info!("Store endpoint: {}", config.store_url);
    info!("Accelerator endpoint: {}", config.accelerator_url);
    info!("Table: {}", config.table);

    // Same wire protocol on both endpoints; the accelerator only serves
    // eventually consistent reads, the store serves strongly consistent ones.
    let cached = KvStoreClient::new(
        &config.accelerator_url,
        &config.table,
        ReadConsistency::Eventual,
    );
    let direct = KvStoreClient::new(&config.store_url, &config.table, ReadConsistency::Strong);

    let state: SharedState = Arc::new(ServerState::new(Arc::new(cached), Arc::new(direct)));

    // Start HTTP server (blocking)
    start_server(state, config.port)
        .await
        .map_err(|e| KvApiError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

fn load_config() -> KvApiConfig {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3003);

    let store_url =
        std::env::var("KV_STORE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());

    // Without a dedicated accelerator the cached path falls back to the
    // store endpoint, still with eventually consistent reads.
    let accelerator_url =
        std::env::var("KV_ACCELERATOR_URL").unwrap_or_else(|_| store_url.clone());

    let table = std::env::var("KV_TABLE").unwrap_or_else(|_| "blogs".to_string());

    KvApiConfig {
        port,
        store_url,
        accelerator_url,
        table,
    }
}
