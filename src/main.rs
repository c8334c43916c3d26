mod config;
mod error;
mod handlers;
mod menu;
mod models;
mod mongo;
mod routes;
mod state;
mod views;

use std::sync::Arc;

use anyhow::Context;
use config::Config;
use menu::MongoMenuStore;
use mongo::MongoClient;
use state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("menu_site=info,tower_http=info")),
        )
        .init();

    tracing::info!("menu-site starting");

    let config = Config::from_env()?;
    config.log_startup();

    let mongo_client = MongoClient::from_config(&config).await?;
    if let Err(e) = mongo_client.health_check().await {
        // Pages will fail with 500 until the database comes up
        tracing::warn!("MongoDB is not reachable yet: {}", e);
    }

    let state = AppState {
        menu: Arc::new(MongoMenuStore::new(mongo_client, &config.menu_collection)),
        config: Arc::new(config),
    };

    let bind_addr = state.config.bind_addr();
    let app = routes::router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    tracing::info!("Listening at http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, starting shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting shutdown"),
    }
}
