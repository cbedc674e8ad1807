use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::{Html, IntoResponse, Redirect},
    routing::get,
    Form, Router,
};

use shopkeep_catalog::{FieldError, ItemDraft};
use shopkeep_workflow::{Catalog, FormOutcome};

use crate::app::{errors, views};

pub fn router() -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/items") }))
        .route("/create", get(create_form).post(create))
        .route("/:id", get(detail))
        .route("/:id/update", get(update_form).post(update))
        .route("/:id/delete", get(delete_form).post(delete))
}

pub async fn list(Extension(catalog): Extension<Arc<Catalog>>) -> axum::response::Response {
    match catalog.item_list() {
        Ok(items) => Html(views::item_list(&items)).into_response(),
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
    match catalog.item_detail(id) {
        Ok((item, category)) => Html(views::item_detail(&item, &category)).into_response(),
        Err(e) => errors::workflow_error_to_response(e),
    }
}

/// The item forms need the category list for their select input.
fn rendered_item_form(
    catalog: &Catalog,
    title: &str,
    action: &str,
    draft: &ItemDraft,
    field_errors: &[FieldError],
) -> axum::response::Response {
    match catalog.category_list() {
        Ok(categories) => {
            Html(views::item_form(title, action, draft, &categories, field_errors)).into_response()
        }
        Err(e) => errors::workflow_error_to_response(e),
    }
}

pub async fn create_form(Extension(catalog): Extension<Arc<Catalog>>) -> axum::response::Response {
    rendered_item_form(
        &catalog,
        "Create Item",
        "/item/create",
        &ItemDraft::default(),
        &[],
    )
}

pub async fn create(
    Extension(catalog): Extension<Arc<Catalog>>,
    Form(fields): Form<HashMap<String, String>>,
) -> axum::response::Response {
    match catalog.item_create(&fields) {
        Ok(FormOutcome::Redirect { id }) => Redirect::to(&format!("/item/{id}")).into_response(),
        Ok(FormOutcome::Rejected { draft, errors }) => {
            rendered_item_form(&catalog, "Create Item", "/item/create", &draft, &errors)
        }
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
    match catalog.item_detail(id) {
        Ok((item, _)) => rendered_item_form(
            &catalog,
            "Update Item",
            &format!("/item/{id}/update"),
            &ItemDraft::from(&item),
            &[],
        ),
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
    match catalog.item_update(id, &fields) {
        Ok(FormOutcome::Redirect { id }) => Redirect::to(&format!("/item/{id}")).into_response(),
        Ok(FormOutcome::Rejected { draft, errors }) => rendered_item_form(
            &catalog,
            "Update Item",
            &format!("/item/{id}/update"),
            &draft,
            &errors,
        ),
        Err(e) => errors::workflow_error_to_response(e),
    }
}

pub async fn delete_form(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    // Delete paths follow the silent-miss policy, so a malformed id falls
    // back to the list like an unknown one.
    let Ok(id) = id.parse() else {
        return Redirect::to("/items").into_response();
    };
    match catalog.item_delete_view(id) {
        Ok(Some(item)) => Html(views::item_delete(&item)).into_response(),
        // Unknown item id: fall back to the list, same silent-miss policy
        // as the POST path.
        Ok(None) => Redirect::to("/items").into_response(),
        Err(e) => errors::workflow_error_to_response(e),
    }
}

pub async fn delete(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let Ok(id) = id.parse() else {
        return Redirect::to("/items").into_response();
    };
    match catalog.item_delete(id) {
        Ok(()) => Redirect::to("/items").into_response(),
        Err(e) => errors::workflow_error_to_response(e),
    }
}
