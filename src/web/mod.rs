pub mod error;
pub mod extract;
pub mod handlers;
pub mod pages;

use crate::config::PortalSettings;
use crate::domain::RecordStore;
use crate::utils::error::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

pub fn router(store: Arc<dyn RecordStore>, public_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(handlers::homepage))
        .route(
            "/update-cobj",
            get(handlers::update_form).post(handlers::create_record),
        )
        .nest_service("/public", ServeDir::new(public_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { store })
}

/// Binds the configured port and serves until Ctrl-C.
pub async fn serve(settings: &PortalSettings, store: Arc<dyn RecordStore>) -> Result<()> {
    let app = router(store, &settings.public_dir);
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server running at http://localhost:{}", settings.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
