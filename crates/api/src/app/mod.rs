//! HTTP application wiring (axum router + controller wiring).
//!
//! Layout:
//! - `routes/`: routers + handlers (one file per record kind)
//! - `views.rs`: server-rendered HTML pages
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

use shopkeep_store::RecordStore;
use shopkeep_workflow::Catalog;

pub mod errors;
pub mod routes;
pub mod views;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(store: Arc<dyn RecordStore>) -> Router {
    let catalog = Arc::new(Catalog::new(store));
    routes::router().layer(Extension(catalog))
}
