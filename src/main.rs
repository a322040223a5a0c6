//! Employee Directory API Server
//! Authenticated CRUD over an embedded SQLite store

use anyhow::{Context, Result};
use dotenv::dotenv;
use staffdir_backend::{
    app::create_app,
    auth::{JwtHandler, UserStore},
    config::Config,
    db::Database,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    init_tracing();

    let config = Config::from_env();

    if let Some(parent) = std::path::Path::new(&config.db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory {}", parent.display())
            })?;
        }
    }

    let db = Database::open(&config.db_path)?;

    let user_store = Arc::new(UserStore::new(db.clone()));
    user_store.seed_default(&config.admin_email, &config.admin_password)?;

    let jwt_handler = Arc::new(JwtHandler::new(
        config.jwt_secret.clone(),
        config.token_expiry_secs,
    ));

    let app = create_app(db, user_store, jwt_handler, config.allowed_origin.as_deref());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("🎯 API server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staffdir_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
