//! Route handlers, one module per table.
//!
//! Every handler runs its store calls on the blocking pool: the store holds a
//! synchronous SQLite connection and must not stall the async workers.

pub mod customers;
pub mod products;

use axum::extract::State;
use axum::Json;

use crate::error::StoreError;
use crate::models::Message;
use crate::store::Store;
use crate::AppState;

/// `GET /`
pub async fn root(State(state): State<AppState>) -> Json<Message> {
    Json(Message::new(&*state.greeting))
}

/// Run `op` against a clone of `store` on the blocking thread pool.
pub(crate) async fn blocking<T, F>(store: &Store, op: F) -> Result<T, StoreError>
where
    F: FnOnce(&Store) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let store = store.clone();
    tokio::task::spawn_blocking(move || op(&store)).await?
}
