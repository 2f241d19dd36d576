use axum::extract::State;
use axum::Json;
use tracing::info;

use super::blocking;
use crate::error::{ApiError, ApiResult};
use crate::extract::{Payload, RowId};
use crate::models::{Customer, Message};
use crate::AppState;

/// `POST /customers/`. The stored record is echoed back unchanged.
pub async fn create_customer(
    State(state): State<AppState>,
    Payload(customer): Payload<Customer>,
) -> ApiResult<Json<Customer>> {
    let customer = blocking(&state.store, move |store| {
        store.insert_customer(&customer)?;
        Ok(customer)
    })
    .await?;
    info!(customer_id = customer.customer_id, "created customer");
    Ok(Json(customer))
}

/// `PUT /customers/{id}`. Every non-key column is rewritten; the body's
/// `CustomerID` is ignored in favour of the path.
pub async fn update_customer(
    State(state): State<AppState>,
    RowId(id): RowId,
    Payload(customer): Payload<Customer>,
) -> ApiResult<Json<Message>> {
    let updated = blocking(&state.store, move |store| store.update_customer(id, &customer)).await?;
    if !updated {
        return Err(ApiError::NotFound("Customer not found"));
    }
    info!(customer_id = id, "updated customer");
    Ok(Json(Message::new("Customer updated successfully")))
}

/// `DELETE /customers/{id}`
pub async fn delete_customer(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> ApiResult<Json<Message>> {
    let deleted = blocking(&state.store, move |store| store.delete_customer(id)).await?;
    if !deleted {
        return Err(ApiError::NotFound("Customer not found"));
    }
    info!(customer_id = id, "deleted customer");
    Ok(Json(Message::new("Customer deleted successfully")))
}
