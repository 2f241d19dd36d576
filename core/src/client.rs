//! Stateless HTTP request builder and response parser for the catalog API.
//!
//! # Design
//! `CatalogClient` holds only a `base_url`. Each endpoint is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. Every endpoint answers 200 on success, so one
//! status check covers all of them.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Customer, Listing, Message, Product, ProductSummary};

/// Synchronous, stateless client for the catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_root(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/")
    }

    pub fn build_list_products(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/products/allnomodel")
    }

    pub fn build_get_product(&self, id: i64) -> HttpRequest {
        self.bare(HttpMethod::Get, &format!("/products/{id}"))
    }

    pub fn build_create_product(&self, input: &Product) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/products/", input)
    }

    pub fn build_update_product(&self, id: i64, input: &Product) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, &format!("/products/{id}"), input)
    }

    pub fn build_delete_product(&self, id: i64) -> HttpRequest {
        self.bare(HttpMethod::Delete, &format!("/products/{id}"))
    }

    pub fn build_create_customer(&self, input: &Customer) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/customers/", input)
    }

    pub fn build_update_customer(&self, id: i64, input: &Customer) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, &format!("/customers/{id}"), input)
    }

    pub fn build_delete_customer(&self, id: i64) -> HttpRequest {
        self.bare(HttpMethod::Delete, &format!("/customers/{id}"))
    }

    /// Returns the greeting text.
    pub fn parse_root(&self, response: HttpResponse) -> Result<String, ApiError> {
        decode::<Message>(response).map(|m| m.message)
    }

    /// Returns `(ProductID, Name)` pairs, at most 50.
    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<(i64, String)>, ApiError> {
        decode::<Listing>(response).map(|l| l.products)
    }

    pub fn parse_get_product(&self, response: HttpResponse) -> Result<ProductSummary, ApiError> {
        decode(response)
    }

    pub fn parse_create_product(&self, response: HttpResponse) -> Result<ProductSummary, ApiError> {
        decode(response)
    }

    /// Returns the server's confirmation message.
    pub fn parse_update_product(&self, response: HttpResponse) -> Result<String, ApiError> {
        decode::<Message>(response).map(|m| m.message)
    }

    pub fn parse_delete_product(&self, response: HttpResponse) -> Result<String, ApiError> {
        decode::<Message>(response).map(|m| m.message)
    }

    pub fn parse_create_customer(&self, response: HttpResponse) -> Result<Customer, ApiError> {
        decode(response)
    }

    pub fn parse_update_customer(&self, response: HttpResponse) -> Result<String, ApiError> {
        decode::<Message>(response).map(|m| m.message)
    }

    pub fn parse_delete_customer(&self, response: HttpResponse) -> Result<String, ApiError> {
        decode::<Message>(response).map(|m| m.message)
    }

    fn bare(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Check for 200, then deserialize the body.
fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn client() -> CatalogClient {
        CatalogClient::new("http://localhost:3000")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn status(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn widget() -> Product {
        Product {
            product_id: 999,
            name: "Widget".to_string(),
            product_number: "WG-0999".to_string(),
            rowguid: "694215b7-08f7-4c0d-acb1-d734ba44c0c8".to_string(),
            safety_stock_level: 100,
            reorder_point: 75,
            standard_cost: 12.5,
            list_price: 24.99,
            days_to_manufacture: 2,
            sell_start_date: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn build_list_products_produces_correct_request() {
        let req = client().build_list_products();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/products/allnomodel");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_product_embeds_id() {
        let req = client().build_get_product(42);
        assert_eq!(req.method.as_str(), "GET");
        assert_eq!(req.path, "http://localhost:3000/products/42");
    }

    #[test]
    fn build_create_product_uses_column_names() {
        let req = client().build_create_product(&widget()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/products/");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["ProductID"], 999);
        assert_eq!(body["ProductNumber"], "WG-0999");
        assert_eq!(body["SellStartDate"], "2024-03-01T08:30:00");
    }

    #[test]
    fn build_update_and_delete_target_the_row() {
        let c = client();
        let update = c.build_update_product(7, &widget()).unwrap();
        assert_eq!(update.method, HttpMethod::Put);
        assert_eq!(update.path, "http://localhost:3000/products/7");

        let delete = c.build_delete_customer(8);
        assert_eq!(delete.method, HttpMethod::Delete);
        assert_eq!(delete.path, "http://localhost:3000/customers/8");
        assert!(delete.body.is_none());
    }

    #[test]
    fn build_create_customer_posts_to_collection() {
        let customer = Customer {
            customer_id: 1,
            person_id: 2,
            store_id: 3,
            territory_id: 4,
            account_number: "AW00000001".to_string(),
            rowguid: "g".to_string(),
            modified_date: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        };
        let req = client().build_create_customer(&customer).unwrap();
        assert_eq!(req.path, "http://localhost:3000/customers/");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["CustomerID"], 1);
        assert_eq!(body["AccountNumber"], "AW00000001");
    }

    #[test]
    fn parse_list_products_success() {
        let rows = client()
            .parse_list_products(ok(r#"{"products":[[1,"Adjustable Race"],[2,"Bearing Ball"]]}"#))
            .unwrap();
        assert_eq!(rows, vec![(1, "Adjustable Race".to_string()), (2, "Bearing Ball".to_string())]);
    }

    #[test]
    fn parse_get_product_not_found() {
        let err = client()
            .parse_get_product(status(404, r#"{"detail":"Item not found"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_product_validation_failure() {
        let err = client()
            .parse_create_product(status(422, r#"{"detail":"missing field"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 422, .. }));
    }

    #[test]
    fn parse_messages() {
        let c = client();
        let message = c
            .parse_update_customer(ok(r#"{"message":"Customer updated successfully"}"#))
            .unwrap();
        assert_eq!(message, "Customer updated successfully");
        assert_eq!(c.parse_root(ok(r#"{"message":"hi"}"#)).unwrap(), "hi");
    }

    #[test]
    fn parse_delete_product_not_found() {
        let err = client().parse_delete_product(status(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = CatalogClient::new("http://localhost:3000/");
        assert_eq!(client.build_root().path, "http://localhost:3000/");
        assert_eq!(
            client.build_list_products().path,
            "http://localhost:3000/products/allnomodel"
        );
    }

    #[test]
    fn parse_get_product_bad_json() {
        let err = client().parse_get_product(ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
