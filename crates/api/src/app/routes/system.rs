use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use shopkeep_workflow::Catalog;

use crate::app::{errors, views};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Index page: item and category counts.
pub async fn index(Extension(catalog): Extension<Arc<Catalog>>) -> axum::response::Response {
    match catalog.overview() {
        Ok(overview) => Html(views::index(&overview)).into_response(),
        Err(e) => errors::workflow_error_to_response(e),
    }
}
