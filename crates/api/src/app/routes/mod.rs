use axum::{routing::get, Router};

pub mod categories;
pub mod items;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .route("/", get(system::index))
        .route("/health", get(system::health))
        .route("/categories", get(categories::list))
        .route("/items", get(items::list))
        .nest("/category", categories::router())
        .nest("/item", items::router())
}
