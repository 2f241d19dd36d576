//! DTOs for the catalog API.
//!
//! # Design
//! These mirror the server's schema but are defined independently, so the
//! client carries no axum or rusqlite baggage. The live-server integration
//! test catches any schema drift between the two crates.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Full product record sent on create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(rename = "ProductID")]
    pub product_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ProductNumber")]
    pub product_number: String,
    pub rowguid: String,
    #[serde(rename = "SafetyStockLevel")]
    pub safety_stock_level: i64,
    #[serde(rename = "ReorderPoint")]
    pub reorder_point: i64,
    #[serde(rename = "StandardCost")]
    pub standard_cost: f64,
    #[serde(rename = "ListPrice")]
    pub list_price: f64,
    #[serde(rename = "DaysToManufacture")]
    pub days_to_manufacture: i64,
    #[serde(rename = "SellStartDate")]
    pub sell_start_date: NaiveDateTime,
}

/// `{ProductID, Name}` returned by lookup and create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSummary {
    #[serde(rename = "ProductID")]
    pub product_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
}

/// Customer record sent on create and update, echoed back by create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    #[serde(rename = "CustomerID")]
    pub customer_id: i64,
    #[serde(rename = "PersonID")]
    pub person_id: i64,
    #[serde(rename = "StoreID")]
    pub store_id: i64,
    #[serde(rename = "TerritoryID")]
    pub territory_id: i64,
    #[serde(rename = "AccountNumber")]
    pub account_number: String,
    pub rowguid: String,
    #[serde(rename = "ModifiedDate")]
    pub modified_date: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Listing {
    pub products: Vec<(i64, String)>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Message {
    pub message: String,
}
