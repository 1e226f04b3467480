//! Portfolio Backend
//!
//! Serves seeded projects, certificates and talks, and stores contact form messages.

mod api;
mod config;
mod db;
mod errors;
mod models;
mod seed;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_tracing(&config);

    tracing::info!("Starting {}", api::APP_TITLE);
    tracing::info!("Document store: {:?}", config.store);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize document store; failure here is fatal
    let store = db::open_store(&config.store).await?;

    if config.seed {
        let report = seed::run(store.as_ref()).await?;
        tracing::info!("Seeding inserted {} documents", report.total_inserted());
    } else {
        tracing::info!("Seeding disabled (PORTFOLIO_SEED)");
    }

    // Create application state
    let state = AppState {
        repo: Arc::new(Repository::new(store)),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(env_filter);

    match config.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Projects
        .route("/projects", get(api::list_projects))
        .route("/projects/featured", get(api::list_featured_projects))
        // Certificates
        .route("/certificates", get(api::list_certificates))
        // Talks
        .route("/talks", get(api::list_talks))
        // Contact
        .route("/contact", post(api::submit_contact))
        // Health check
        .route("/health", get(api::health_check));

    Router::new()
        .nest("/api", api_routes)
        .fallback(api::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
        _ = ctrl_c => tracing::warn!("Ctrl+C received, shutting down"),
        _ = terminate => tracing::warn!("SIGTERM received, shutting down"),
    }
}
