//! HTTP handlers for the server.

pub mod jobs;
pub mod settings;
pub mod template;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use super::state::AppState;
use crate::error::{Result, TpError};
use crate::printer::PrinterHandle;

/// HTTP status for a failed job.
pub fn status_for(err: &TpError) -> StatusCode {
    match err {
        TpError::Config(_) => StatusCode::BAD_REQUEST,
        TpError::MissingPlaceholder(_) => StatusCode::UNPROCESSABLE_ENTITY,
        TpError::Transport(_) | TpError::Io(_) => StatusCode::BAD_GATEWAY,
        TpError::TomlParse(_) | TpError::TomlSerialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn success_response(message: &str, job_id: Option<Uuid>) -> Response {
    let body = match job_id {
        Some(id) => json!({ "success": true, "message": message, "job_id": id.to_string() }),
        None => json!({ "success": true, "message": message }),
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub fn error_response(status: StatusCode, error: &str) -> Response {
    (status, Json(json!({ "success": false, "error": error }))).into_response()
}

pub fn tp_error_response(err: &TpError) -> Response {
    error_response(status_for(err), &err.to_string())
}

/// Run file access on the blocking pool, mapping failures to a response.
pub async fn blocking<T, F>(work: F) -> std::result::Result<T, Response>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(work).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(tp_error_response(&e)),
        Err(e) => Err(error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("Task error: {}", e),
        )),
    }
}

/// Run one print job against the configured printer.
///
/// The job lock is held from connect to close. Settings reads and printer
/// I/O run on the blocking pool.
pub async fn run_job<F>(state: &AppState, kind: &'static str, job: F) -> Response
where
    F: FnOnce(&mut dyn PrinterHandle) -> Result<()> + Send + 'static,
{
    let job_id = Uuid::new_v4();

    let settings = state.settings.clone();
    let address = match blocking(move || {
        let current = settings.current();
        current.printer_address().map(str::to_string)
    })
    .await
    {
        Ok(address) => address,
        Err(response) => {
            warn!(%job_id, kind, status = %response.status(), "Rejected");
            return response;
        }
    };

    let _guard = state.job_lock.lock().await;
    info!(%job_id, kind, %address, "Printing");

    let connector = state.connector.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut printer = connector(&address)?;
        let outcome = job(printer.as_mut());
        let closed = printer.close();
        outcome.and(closed)
    })
    .await;

    match result {
        Ok(Ok(())) => {
            info!(%job_id, kind, "Printed");
            success_response(&format!("Printed {}.", kind), Some(job_id))
        }
        Ok(Err(e)) => {
            warn!(%job_id, kind, error = %e, "Print failed");
            error_response(status_for(&e), &format!("Print failed: {}", e))
        }
        Err(e) => {
            warn!(%job_id, kind, error = %e, "Print task panicked");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Task error: {}", e),
            )
        }
    }
}
