//! Markdown template handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use super::{blocking, run_job};
use crate::ir::Segment;
use crate::printer;
use crate::server::state::AppState;
use crate::template::{Context, TemplateRenderer};

#[derive(Debug, Deserialize)]
pub struct TemplateForm {
    pub template: String,
    #[serde(default)]
    pub context: Context,
}

/// Render against the settings file as it is now.
async fn render(state: &AppState, form: TemplateForm) -> Result<Vec<Segment>, Response> {
    let settings = state.settings.clone();
    blocking(move || TemplateRenderer::new(settings).render(&form.template, &form.context)).await
}

/// Handle POST /api/template/preview - rendered segments, nothing printed.
pub async fn preview(
    State(state): State<Arc<AppState>>,
    Json(form): Json<TemplateForm>,
) -> Response {
    match render(&state, form).await {
        Ok(segments) => (
            StatusCode::OK,
            Json(json!({ "success": true, "segments": segments })),
        )
            .into_response(),
        Err(response) => response,
    }
}

/// Handle POST /api/template/print
///
/// Rendering happens before the printer is contacted, so a missing
/// placeholder costs no paper.
pub async fn print(State(state): State<Arc<AppState>>, Json(form): Json<TemplateForm>) -> Response {
    let segments = match render(&state, form).await {
        Ok(segments) => segments,
        Err(response) => return response,
    };

    run_job(&state, "template", move |p| printer::print_job(&segments, p)).await
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::server::handlers::testing::Harness;

    #[tokio::test]
    async fn test_preview_returns_segments() {
        let harness = Harness::new(None);
        let (status, body) = harness
            .post(
                "/api/template/preview",
                json!({ "template": "Hi **{name}**", "context": { "name": "Łukasz" } }),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["segments"],
            json!([
                { "text": "Hi", "styles": {} },
                { "text": "Lukasz", "styles": { "bold": true } },
            ])
        );
    }

    #[tokio::test]
    async fn test_missing_placeholder_is_unprocessable() {
        let harness = Harness::new(Some("192.168.1.100"));
        let (status, body) = harness
            .post("/api/template/print", json!({ "template": "Hello, {name}!" }))
            .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Missing placeholder: name");
        assert!(harness.printer.lock().unwrap().calls().is_empty());
    }

    #[tokio::test]
    async fn test_print_template() {
        let harness = Harness::new(Some("192.168.1.100"));
        let (status, body) = harness
            .post(
                "/api/template/print",
                json!({ "template": "~~{x}~~", "context": { "x": "done" } }),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Printed template.");

        let printer = harness.printer.lock().unwrap();
        assert_eq!(printer.texts(), vec!["done"]);
        assert!(printer.styles()[0].underline);
        assert_eq!(printer.cuts(), 1);
    }

    #[tokio::test]
    async fn test_preview_follows_settings_update() {
        let harness = Harness::new(None);
        let body = json!({ "template": "ż" });

        let (_, before) = harness.post("/api/template/preview", body.clone()).await;
        assert_eq!(before["segments"][0]["text"], "z");

        let (status, _) = harness
            .post("/api/settings", json!({ "enable_special_letters": true }))
            .await;
        assert_eq!(status, StatusCode::OK);

        let (_, after) = harness.post("/api/template/preview", body).await;
        assert_eq!(after["segments"][0]["text"], "ż");
    }
}
