//! # HTTP Server for Task, Ticket and Template Printing
//!
//! JSON API over the same jobs the CLI runs.
//!
//! ## Usage
//!
//! ```bash
//! tp serve --listen 0.0.0.0:5555
//! ```
//!
//! | Route | Effect |
//! |-------|--------|
//! | `GET /api/settings` | current settings |
//! | `POST /api/settings` | validate and save settings |
//! | `POST /api/task` | print a task |
//! | `POST /api/ticket` | print a ticket |
//! | `POST /api/small-note` | print a small note when confirmed |
//! | `POST /api/template/preview` | rendered segments as JSON |
//! | `POST /api/template/print` | render and print a template |

mod handlers;
mod state;

pub use state::{AppState, Connector, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{Result, TpError};

/// Build the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/settings",
            get(handlers::settings::show).post(handlers::settings::update),
        )
        .route("/api/task", post(handlers::jobs::task))
        .route("/api/ticket", post(handlers::jobs::ticket))
        .route("/api/small-note", post(handlers::jobs::small_note))
        .route("/api/template/preview", post(handlers::template::preview))
        .route("/api/template/print", post(handlers::template::print))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use tp::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), tp::TpError> {
/// let config = ServerConfig {
///     config_path: "tp_config.toml".into(),
///     listen_addr: "0.0.0.0:5555".to_string(),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<()> {
    let app = router(Arc::new(AppState::new(config.clone())));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| TpError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e)))?;

    info!(
        listen = %config.listen_addr,
        config = %config.config_path.display(),
        "tp HTTP server started"
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| TpError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
