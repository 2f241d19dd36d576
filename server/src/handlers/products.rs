use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

use super::blocking;
use crate::error::{ApiError, ApiResult};
use crate::extract::{Payload, RowId};
use crate::models::{Message, Product, ProductListing, ProductSummary};
use crate::AppState;

/// Hard cap on rows returned by the listing endpoint.
pub const LIST_LIMIT: u32 = 50;

/// `GET /products/allnomodel`
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<ProductListing>> {
    let products = blocking(&state.store, |store| store.list_products(LIST_LIMIT)).await?;
    debug!(count = products.len(), "listed products");
    Ok(Json(ProductListing { products }))
}

/// `GET /products/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> ApiResult<Json<ProductSummary>> {
    let summary = blocking(&state.store, move |store| store.product_summary(id)).await?;
    debug!(product_id = id, found = summary.is_some(), "product lookup");
    summary.map(Json).ok_or(ApiError::NotFound("Item not found"))
}

/// `POST /products/`
///
/// Echoes the submitted `ProductID`: keys are caller-assigned, so there is no
/// generated identifier to report.
pub async fn create_product(
    State(state): State<AppState>,
    Payload(product): Payload<Product>,
) -> ApiResult<Json<ProductSummary>> {
    let summary = ProductSummary::from(&product);
    blocking(&state.store, move |store| store.insert_product(&product)).await?;
    info!(product_id = summary.product_id, "created product");
    Ok(Json(summary))
}

/// `PUT /products/{id}`
///
/// Only `Name`, `ProductNumber` and `SellStartDate` are persisted even though
/// the full record is required in the body.
pub async fn update_product(
    State(state): State<AppState>,
    RowId(id): RowId,
    Payload(product): Payload<Product>,
) -> ApiResult<Json<Message>> {
    let updated = blocking(&state.store, move |store| store.update_product(id, &product)).await?;
    if !updated {
        return Err(ApiError::NotFound("Product not found"));
    }
    info!(product_id = id, "updated product");
    Ok(Json(Message::new("Product information updated successfully")))
}

/// `DELETE /products/{id}`
pub async fn delete_product(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> ApiResult<Json<Message>> {
    let deleted = blocking(&state.store, move |store| store.delete_product(id)).await?;
    if !deleted {
        return Err(ApiError::NotFound("Product not found"));
    }
    info!(product_id = id, "deleted product");
    Ok(Json(Message::new("Product deleted successfully")))
}
