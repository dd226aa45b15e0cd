//! Settings handlers.
//!
//! Values may arrive as JSON numbers/booleans or as the strings an HTML form
//! would post (`"48"`, `"yes"`).

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use super::{blocking, error_response, tp_error_response};
use crate::config::{self, Settings};
use crate::error::{Result, TpError};
use crate::server::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Count {
    Number(i64),
    Text(String),
}

/// Fields left out keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsForm {
    pub ip_address: Option<String>,
    pub chars_per_line: Option<Count>,
    pub enable_special_letters: Option<Flag>,
}

impl SettingsForm {
    fn apply(self, settings: &mut Settings) -> Result<()> {
        if let Some(ip) = self.ip_address {
            let ip = ip.trim();
            settings.printer.ip_address = (!ip.is_empty()).then(|| ip.to_string());
        }

        if let Some(count) = self.chars_per_line {
            let value = match count {
                Count::Number(n) => n,
                Count::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                    TpError::Config("Invalid number for chars per line.".to_string())
                })?,
            };
            settings.printer.chars_per_line = usize::try_from(value).map_err(|_| {
                TpError::Config("chars_per_line must be a positive integer".to_string())
            })?;
        }

        if let Some(flag) = self.enable_special_letters {
            settings.printer.enable_special_letters = match flag {
                Flag::Bool(b) => b,
                Flag::Text(s) => config::parse_bool(&s)?,
            };
        }

        settings.validate()
    }
}

/// Handle GET /api/settings
pub async fn show(State(state): State<Arc<AppState>>) -> Response {
    let path = state.settings.path().to_path_buf();
    let settings = match blocking(move || config::load_or_default(&path)).await {
        Ok(settings) => settings,
        Err(response) => return response,
    };

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "settings": {
                "ip_address": settings.printer.ip_address.unwrap_or_default(),
                "chars_per_line": settings.printer.chars_per_line,
                "enable_special_letters": settings.printer.enable_special_letters,
            }
        })),
    )
        .into_response()
}

/// Handle POST /api/settings - validate, then save.
///
/// Updates are serialized so two forms never overwrite each other's fields.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Json(form): Json<SettingsForm>,
) -> Response {
    let path = state.settings.path().to_path_buf();
    let _guard = state.settings_lock.lock().await;

    let saved = tokio::task::spawn_blocking(move || {
        // A broken file is replaced rather than blocking the fix.
        let mut settings = config::load_or_default(&path).unwrap_or_default();
        if let Err(e) = form.apply(&mut settings) {
            return Err(tp_error_response(&e));
        }

        config::save(&settings, &path).map_err(|e| {
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Failed to save settings: {}", e),
            )
        })?;
        Ok(path)
    })
    .await;

    match saved {
        Ok(Ok(path)) => {
            info!(path = %path.display(), "Settings saved");
            super::success_response("Settings saved.", None)
        }
        Ok(Err(response)) => response,
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("Task error: {}", e),
        ),
    }
}
