//! Request and response schemas for the products and customers tables.
//!
//! # Design
//! Field names on the wire match the column names of `Production_Product` and
//! `Sales_Customer` exactly, so every field carries an explicit rename instead
//! of a blanket `rename_all`. Deserialization is the validation step: a body
//! missing a field or carrying the wrong type never reaches the store.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Full product record accepted by create and update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
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
    #[serde(rename = "SellStartDate", deserialize_with = "timestamp::deserialize")]
    pub sell_start_date: NaiveDateTime,
}

/// Identifier and name projection returned by lookup and create.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    #[serde(rename = "ProductID")]
    pub product_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.product_id,
            name: product.name.clone(),
        }
    }
}

/// Body of `GET /products/allnomodel`. Rows serialize as `[id, name]` pairs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductListing {
    pub products: Vec<(i64, String)>,
}

/// Full customer record accepted by create and update, echoed back by create.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
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
    #[serde(rename = "ModifiedDate", deserialize_with = "timestamp::deserialize")]
    pub modified_date: NaiveDateTime,
}

/// Plain `{"message": ...}` acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Lenient date-time parsing: RFC 3339 with an offset (normalized to UTC) or a
/// naive ISO-8601 timestamp, with either `T` or a space as separator.
mod timestamp {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer};

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid datetime: {raw:?}")))
    }
}
