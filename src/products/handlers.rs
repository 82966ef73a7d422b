use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{MessageResponse, ProductPayload},
    repo_types::{ListOrder, NewProduct, Product},
};
use crate::{auth::AuthUser, error::ApiError, state::AppState};

pub fn product_routes(order: ListOrder) -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(Extension(order))
}

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Extension(order): Extension<ListOrder>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.products.list(order).await?;
    Ok(Json(products))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let key = parse_id(&id)?;
    state
        .products
        .get(key)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let input = validated(payload)?;
    let product = state.products.create(input).await?;
    info!(product_id = product.id, sku = %product.sku, username = %user.username, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let input = validated(payload)?;
    let key = parse_id(&id)?;
    let product = state
        .products
        .update(key, input)
        .await?
        .ok_or(ApiError::NotFound(id))?;
    info!(product_id = product.id, username = %user.username, "product updated");
    Ok(Json(product))
}

#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let key = parse_id(&id)?;
    let deleted = state
        .products
        .delete(key)
        .await?
        .ok_or(ApiError::NotFound(id))?;
    info!(product_id = deleted.id, username = %user.username, "product deleted");
    Ok(Json(MessageResponse {
        message: "Produto excluído com sucesso",
    }))
}

/// Ids that are not integers can never match a row.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::NotFound(raw.to_string()))
}

fn validated(payload: Result<Json<ProductPayload>, JsonRejection>) -> Result<NewProduct, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    payload
        .validate()
        .ok_or_else(|| ApiError::Validation("missing required product field".into()))
}
