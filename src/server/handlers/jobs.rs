//! Task, ticket and small note printing handlers.

use axum::{Json, extract::State, response::Response};
use serde::Deserialize;
use std::sync::Arc;

use super::{run_job, success_response};
use crate::printer;
use crate::server::state::AppState;

/// Form data for a task.
#[derive(Debug, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

/// Form data for a ticket.
#[derive(Debug, Deserialize)]
pub struct TicketForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub ticket_number: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SmallNoteForm {
    #[serde(default)]
    pub confirm: bool,
}

/// Handle POST /api/task
pub async fn task(State(state): State<Arc<AppState>>, Json(form): Json<TaskForm>) -> Response {
    run_job(&state, "task", move |p| {
        printer::print_task(p, &form.title, &form.text)
    })
    .await
}

/// Handle POST /api/ticket
pub async fn ticket(State(state): State<Arc<AppState>>, Json(form): Json<TicketForm>) -> Response {
    run_job(&state, "ticket", move |p| {
        printer::print_ticket(p, &form.title, &form.ticket_number, &form.text)
    })
    .await
}

/// Handle POST /api/small-note - prints only when `confirm` is true.
pub async fn small_note(
    State(state): State<Arc<AppState>>,
    Json(form): Json<SmallNoteForm>,
) -> Response {
    if !form.confirm {
        return success_response("Cancelled printing small note.", None);
    }
    run_job(&state, "small note", |p| printer::print_small_note(p)).await
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::server::handlers::testing::Harness;

    #[tokio::test]
    async fn test_task_prints_and_closes() {
        let harness = Harness::new(Some("192.168.1.100"));
        let (status, body) = harness
            .post("/api/task", json!({ "title": "Title", "text": "Content" }))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Printed task.");
        assert_eq!(body["job_id"].as_str().unwrap().len(), 36);

        let printer = harness.printer.lock().unwrap();
        assert_eq!(
            printer.transcript(),
            "\nTitle\n-----------------------\n\nContent\n"
        );
        assert_eq!(printer.cuts(), 1);
        assert_eq!(
            printer.calls().last(),
            Some(&crate::printer::PrinterCall::Close)
        );
    }

    #[tokio::test]
    async fn test_ticket_missing_fields_default_to_empty() {
        let harness = Harness::new(Some("192.168.1.100"));
        let (status, _) = harness.post("/api/ticket", json!({ "text": "x" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            harness.printer.lock().unwrap().transcript(),
            "\n\n\n-----------------------\n\nx\n"
        );
    }

    #[tokio::test]
    async fn test_missing_address_is_bad_request() {
        let harness = Harness::new(None);
        let (status, body) = harness
            .post("/api/task", json!({ "title": "", "text": "x" }))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("Printer IP address not set"));
        assert!(harness.printer.lock().unwrap().calls().is_empty());
    }

    #[tokio::test]
    async fn test_printer_failure_is_bad_gateway() {
        let harness = Harness::offline();
        let (status, body) = harness.post("/api/task", json!({ "text": "x" })).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].as_str().unwrap().starts_with("Print failed:"));
    }

    #[tokio::test]
    async fn test_small_note_requires_confirm() {
        let harness = Harness::new(Some("192.168.1.100"));

        let (status, body) = harness.post("/api/small-note", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Cancelled printing small note.");
        assert!(harness.printer.lock().unwrap().calls().is_empty());

        let (_, body) = harness
            .post("/api/small-note", json!({ "confirm": true }))
            .await;
        assert_eq!(body["message"], "Printed small note.");
        assert_eq!(harness.printer.lock().unwrap().texts(), vec!["\n\n\n\n\n\n\n"]);
    }
}
