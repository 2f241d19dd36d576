//! End-to-end test against the live catalog server.
//!
//! # Design
//! Starts the server on a random port with an in-memory store, then exercises
//! every client operation over real HTTP using ureq. Validates that request
//! building and response parsing agree with the actual server.

use catalog_core::{ApiError, CatalogClient, Customer, HttpMethod, HttpResponse, Product};
use catalog_server::store::Store;
use catalog_server::AppState;
use chrono::NaiveDate;

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's status-code-as-error behavior so 4xx/5xx responses are
/// returned as data, leaving status interpretation to the client core.
fn execute(req: catalog_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    let store = Store::open_in_memory().unwrap();
    store.init_schema().unwrap();
    let state = AppState::new(store, "integration");

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            catalog_server::run(listener, state).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn widget(name: &str) -> Product {
    Product {
        product_id: 999,
        name: name.to_string(),
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
fn product_and_customer_lifecycle() {
    let client = CatalogClient::new(&start_server());

    // Step 1: greeting and empty listing.
    let greeting = client.parse_root(execute(client.build_root())).unwrap();
    assert_eq!(greeting, "integration");
    let rows = client.parse_list_products(execute(client.build_list_products())).unwrap();
    assert!(rows.is_empty(), "expected empty list");

    // Step 2: create a product.
    let req = client.build_create_product(&widget("Widget")).unwrap();
    let created = client.parse_create_product(execute(req)).unwrap();
    assert_eq!(created.product_id, 999);
    assert_eq!(created.name, "Widget");

    // Step 3: look it up.
    let fetched = client.parse_get_product(execute(client.build_get_product(999))).unwrap();
    assert_eq!(fetched, created);

    // Step 4: rename it.
    let req = client.build_update_product(999, &widget("Widget2")).unwrap();
    let message = client.parse_update_product(execute(req)).unwrap();
    assert_eq!(message, "Product information updated successfully");
    let fetched = client.parse_get_product(execute(client.build_get_product(999))).unwrap();
    assert_eq!(fetched.name, "Widget2");

    // Step 5: listing shows the single row.
    let rows = client.parse_list_products(execute(client.build_list_products())).unwrap();
    assert_eq!(rows, vec![(999, "Widget2".to_string())]);

    // Step 6: delete, then observe NotFound for lookup and a second delete.
    client.parse_delete_product(execute(client.build_delete_product(999))).unwrap();
    let err = client.parse_get_product(execute(client.build_get_product(999))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    let err = client.parse_delete_product(execute(client.build_delete_product(999))).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 7: customer create echoes the record.
    let customer = Customer {
        customer_id: 30118,
        person_id: 291,
        store_id: 292,
        territory_id: 5,
        account_number: "AW00030118".to_string(),
        rowguid: "c4b2b8a4-7a3e-4f3a-9f57-0b9b3f4a1d22".to_string(),
        modified_date: NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap(),
    };
    let req = client.build_create_customer(&customer).unwrap();
    assert_eq!(client.parse_create_customer(execute(req)).unwrap(), customer);

    // Step 8: update an absent customer, then the real one.
    let req = client.build_update_customer(1, &customer).unwrap();
    let err = client.parse_update_customer(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    let changed = Customer {
        territory_id: 9,
        ..customer.clone()
    };
    let req = client.build_update_customer(30118, &changed).unwrap();
    assert_eq!(
        client.parse_update_customer(execute(req)).unwrap(),
        "Customer updated successfully"
    );

    // Step 9: delete the customer.
    let message = client
        .parse_delete_customer(execute(client.build_delete_customer(30118)))
        .unwrap();
    assert_eq!(message, "Customer deleted successfully");
}

#[test]
fn invalid_body_surfaces_as_http_422() {
    let client = CatalogClient::new(&start_server());
    let mut req = client.build_create_product(&widget("Broken")).unwrap();
    req.body = Some(r#"{"ProductID":1}"#.to_string());
    let err = client.parse_create_product(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::HttpError { status: 422, .. }));
}
