use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::{Html, IntoResponse, Redirect},
    routing::get,
    Form, Router,
};

use shopkeep_catalog::CategoryDraft;
use shopkeep_workflow::{Catalog, CategoryDeleteOutcome, FormOutcome};

use crate::app::{errors, views};

pub fn router() -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/categories") }))
        .route("/create", get(create_form).post(create))
        .route("/:id", get(detail))
        .route("/:id/update", get(update_form).post(update))
        .route("/:id/delete", get(delete_form).post(delete))
}

pub async fn list(Extension(catalog): Extension<Arc<Catalog>>) -> axum::response::Response {
    match catalog.category_list() {
        Ok(categories) => Html(views::category_list(&categories)).into_response(),
        Err(e) => errors::workflow_error_to_response(e),
    }
}

pub async fn detail(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id) {
        Ok(id) => id,
        Err(res) => return res,
    };
    match catalog.category_detail(id) {
        Ok((category, items)) => Html(views::category_detail(&category, &items)).into_response(),
        Err(e) => errors::workflow_error_to_response(e),
    }
}

pub async fn create_form() -> axum::response::Response {
    Html(views::category_form(
        "Create Category",
        "/category/create",
        &CategoryDraft::default(),
        &[],
    ))
    .into_response()
}

pub async fn create(
    Extension(catalog): Extension<Arc<Catalog>>,
    Form(fields): Form<HashMap<String, String>>,
) -> axum::response::Response {
    match catalog.category_create(&fields) {
        Ok(FormOutcome::Redirect { id }) => Redirect::to(&format!("/category/{id}")).into_response(),
        // Rejections re-render the form at 200 with prior input preserved.
        Ok(FormOutcome::Rejected { draft, errors }) => Html(views::category_form(
            "Create Category",
            "/category/create",
            &draft,
            &errors,
        ))
        .into_response(),
        Err(e) => errors::workflow_error_to_response(e),
    }
}

pub async fn update_form(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id) {
        Ok(id) => id,
        Err(res) => return res,
    };
    match catalog.category_detail(id) {
        Ok((category, _)) => Html(views::category_form(
            "Update Category",
            &format!("/category/{id}/update"),
            &CategoryDraft::from(&category),
            &[],
        ))
        .into_response(),
        Err(e) => errors::workflow_error_to_response(e),
    }
}

pub async fn update(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(id): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id) {
        Ok(id) => id,
        Err(res) => return res,
    };
    match catalog.category_update(id, &fields) {
        Ok(FormOutcome::Redirect { id }) => Redirect::to(&format!("/category/{id}")).into_response(),
        Ok(FormOutcome::Rejected { draft, errors }) => Html(views::category_form(
            "Update Category",
            &format!("/category/{id}/update"),
            &draft,
            &errors,
        ))
        .into_response(),
        Err(e) => errors::workflow_error_to_response(e),
    }
}

pub async fn delete_form(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id) {
        Ok(id) => id,
        Err(res) => return res,
    };
    match catalog.category_delete_view(id) {
        Ok((category, items)) => Html(views::category_delete(&category, &items)).into_response(),
        Err(e) => errors::workflow_error_to_response(e),
    }
}

pub async fn delete(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_id(&id) {
        Ok(id) => id,
        Err(res) => return res,
    };
    match catalog.category_delete(id) {
        Ok(CategoryDeleteOutcome::Deleted) => Redirect::to("/categories").into_response(),
        // A refused delete is a normal page, not an error response.
        Ok(CategoryDeleteOutcome::Blocked {
            category,
            blocking_items,
        }) => Html(views::category_delete(&category, &blocking_items)).into_response(),
        Err(e) => errors::workflow_error_to_response(e),
    }
}
