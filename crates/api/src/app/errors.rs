use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use shopkeep_core::RecordId;
use shopkeep_workflow::WorkflowError;

use crate::app::views;

pub fn workflow_error_to_response(err: WorkflowError) -> axum::response::Response {
    match err {
        WorkflowError::NotFound => not_found(),
        WorkflowError::Store(e) => {
            tracing::error!(error = %e, "store failure");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(views::server_error())).into_response()
        }
    }
}

pub fn not_found() -> axum::response::Response {
    (StatusCode::NOT_FOUND, Html(views::not_found())).into_response()
}

/// Parse a path id. An id that cannot even parse cannot resolve to a
/// record, so it gets the same 404 as an unknown one.
pub fn parse_id(id: &str) -> Result<RecordId, axum::response::Response> {
    id.parse().map_err(|_| not_found())
}
