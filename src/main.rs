// src/main.rs
use axum::{extract::Extension, Router};
use dotenv::dotenv;
use mongodb::bson::doc;
use mongodb::Client;
use std::path::PathBuf;
use std::{env, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod candidates;
mod common;
mod services;

use common::AppState;
use services::{StorageConfig, StorageService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let mongodb_uri =
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let mongodb_db = env::var("MONGODB_DB").unwrap_or_else(|_| "candidatos".to_string());
    let staging_dir = env::var("STAGING_DIR").unwrap_or_else(|_| "./uploads".to_string());
    let preserve_original_filename = env::var("PRESERVE_ORIGINAL_FILENAME")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(true);

    let storage_config = StorageConfig {
        access_key_id: env::var("AWS_ACCESS_KEY_ID").unwrap_or_default(),
        secret_access_key: env::var("AWS_SECRET_ACCESS_KEY").unwrap_or_default(),
        region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        bucket: env::var("S3_BUCKET").unwrap_or_default(),
    };

    if storage_config.bucket.is_empty() {
        warn!("S3_BUCKET not set; resume uploads will fail until it is configured");
    }

    // ========================================================================
    // DIRECTORY SETUP
    // ========================================================================

    tokio::fs::create_dir_all(&staging_dir).await?;

    // ========================================================================
    // DATABASE AND STORAGE SETUP
    // ========================================================================

    let client = Client::with_uri_str(&mongodb_uri).await?;
    let db = client.database(&mongodb_db);

    // The driver connects lazily; surface reachability problems at startup
    // without refusing to serve
    match db.run_command(doc! { "ping": 1 }, None).await {
        Ok(_) => info!(database = %mongodb_db, "Connected to MongoDB"),
        Err(e) => warn!(error = %e, "MongoDB ping failed, continuing startup"),
    }

    let storage = Arc::new(StorageService::new(storage_config).await);
    info!("StorageService initialized");

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let app_state = AppState {
        db,
        storage,
        staging_dir: PathBuf::from(staging_dir),
        preserve_original_filename,
    };

    let shared = Arc::new(app_state);

    // ========================================================================
    // ROUTER COMPOSITION
    // ========================================================================

    let app = Router::new()
        .merge(candidates::candidates_routes())
        .layer(Extension(shared))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
