mod dto;
pub mod handlers;
#[cfg(test)]
pub mod memory;
pub mod repo;
pub mod repo_types;

use crate::{auth, state::AppState};
use axum::Router;

pub use repo_types::ListOrder;

/// Product CRUD plus the protected probe route, ready to be nested under a
/// path prefix.
pub fn router(order: ListOrder) -> Router<AppState> {
    Router::new()
        .merge(handlers::product_routes(order))
        .merge(auth::handlers::secure_routes())
}
