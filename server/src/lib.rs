//! CRUD HTTP API over the `Production_Product` and `Sales_Customer` tables.
//!
//! # Design
//! - The router is stateless apart from [`AppState`], which owns the store
//!   handle and is cloned into every handler.
//! - Request bodies and path ids are parsed into typed records before any SQL
//!   runs; mismatches answer 422.
//! - Existence checks and the mutations they guard share one transaction (see
//!   [`store`]).

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::StoreError;
use crate::handlers::{customers, products};
use crate::store::Store;

pub use crate::models::{Customer, Message, Product, ProductListing, ProductSummary};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub greeting: Arc<str>,
}

impl AppState {
    pub fn new(store: Store, greeting: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            greeting: greeting.into(),
        }
    }

    /// Open the configured database and create the tables if asked to.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let store = if config.database == ":memory:" {
            Store::open_in_memory()?
        } else {
            Store::open(&config.database)?
        };
        if config.init_schema {
            store.init_schema()?;
        }
        Ok(Self::new(store, config.greeting.as_str()))
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/products/allnomodel", get(products::list_products))
        .route("/products", post(products::create_product))
        .route("/products/", post(products::create_product))
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/customers", post(customers::create_customer))
        .route("/customers/", post(customers::create_customer))
        .route(
            "/customers/{id}",
            put(customers::update_customer).delete(customers::delete_customer),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}
