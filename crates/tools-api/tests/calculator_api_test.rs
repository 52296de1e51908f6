//! HTTP integration tests for the calculator endpoints.

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use axum_test::TestServer;
use chrono::NaiveDate;
use serde_json::{Value, json};
use tools_api::config::ToolsConfig;
use tools_api::create_app_with_registry;
use tools_api::error::ErrorBody;
use tools_api::types::HealthResponse;
use tools_calculator::CalculatorRegistry;
use tools_calculator::built_in::age::AgeCalculator;
use tower::ServiceExt;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn create_test_server() -> TestServer {
    let registry = CalculatorRegistry::with_age_calculator(AgeCalculator::with_clock(fixed_today));
    let app = create_app_with_registry(&ToolsConfig::default(), registry);
    TestServer::new(app).expect("Failed to create test server")
}

async fn post_error(server: &TestServer, path: &str, body: Value) -> String {
    let response = server.post(path).json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.json::<ErrorBody>().error
}

#[tokio::test]
async fn test_age_endpoint() {
    let server = create_test_server();

    let response = server.post("/api/age").json(&json!({"dob": "2000-01-15"})).await;

    response.assert_status_ok();
    response.assert_json(&json!({"years": 24, "months": 0, "days": 0, "total_days": 8766}));
}

#[tokio::test]
async fn test_age_endpoint_with_explicit_today() {
    let server = create_test_server();

    let response = server
        .post("/api/age")
        .json(&json!({"dob": "2000-03-01", "today": "2024-02-15"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["years"], 23);
    assert_eq!(body["months"], 11);
    assert_eq!(body["days"], 14);
}

#[tokio::test]
async fn test_age_endpoint_rejects_future_and_missing_dob() {
    let server = create_test_server();

    assert_eq!(
        post_error(&server, "/api/age", json!({"dob": "2030-01-01"})).await,
        "Date of birth cannot be in the future"
    );
    assert_eq!(post_error(&server, "/api/age", json!({})).await, "`dob` field is required");
    assert_eq!(
        post_error(&server, "/api/age", json!({"dob": "not-a-date"})).await,
        "Invalid date 'not-a-date': expected YYYY-MM-DD"
    );
}

#[tokio::test]
async fn test_cgpa_endpoint() {
    let server = create_test_server();

    let response = server.post("/api/cgpa").json(&json!({"cgpa": 8.5, "university": "VTU"})).await;
    response.assert_status_ok();
    response.assert_json(&json!({"cgpa": 8.5, "percentage": 85.0, "university": "VTU"}));

    let response = server.post("/api/cgpa").json(&json!({"cgpa": 8.5})).await;
    response.assert_json(&json!({"cgpa": 8.5, "percentage": 80.75, "university": "default"}));

    assert_eq!(
        post_error(&server, "/api/cgpa", json!({"cgpa": 10.5})).await,
        "CGPA must be between 0 and 10"
    );
    assert_eq!(
        post_error(&server, "/api/cgpa", json!({"cgpa": true})).await,
        "`cgpa` must be a number"
    );
}

#[tokio::test]
async fn test_gst_endpoint() {
    let server = create_test_server();

    let response = server.post("/api/gst").json(&json!({"amount": 1000, "rate": 18})).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["original"], 1000.0);
    assert_eq!(body["gst_amount"], 180.0);
    assert_eq!(body["total"], 1180.0);
    assert_eq!(body["gst_rate"], 18.0);

    assert_eq!(
        post_error(&server, "/api/gst", json!({"amount": -1, "rate": 18})).await,
        "Amount cannot be negative"
    );
    assert_eq!(
        post_error(&server, "/api/gst", json!({"amount": 100, "rate": 150})).await,
        "GST rate must be between 0 and 100"
    );
    assert_eq!(
        post_error(&server, "/api/gst", json!({"amount": "100", "rate": 18})).await,
        "`amount` must be a number"
    );
}

#[tokio::test]
async fn test_emi_endpoint() {
    let server = create_test_server();

    let response = server
        .post("/api/emi")
        .json(&json!({"principal": 1000000, "annual_rate": 7, "tenure_months": 240}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["tenure_months"], 240);
    let emi = body["emi"].as_f64().unwrap();
    assert!((emi - 7752.99).abs() <= 0.01, "emi = {emi}");

    assert_eq!(
        post_error(
            &server,
            "/api/emi",
            json!({"principal": 100, "annual_rate": 5, "tenure_months": 0})
        )
        .await,
        "Tenure must be greater than 0 months"
    );
    assert_eq!(
        post_error(
            &server,
            "/api/emi",
            json!({"principal": 100, "annual_rate": 5, "tenure_months": 12.5})
        )
        .await,
        "`tenure_months` must be an integer"
    );
}

#[tokio::test]
async fn test_malformed_bodies_share_the_error_shape() {
    let server = create_test_server();

    let response = server.post("/api/gst").text("{not json").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<ErrorBody>().error.starts_with("Invalid JSON body"));

    let response = server.post("/api/gst").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "Empty request body"}));

    let response = server.post("/api/gst").json(&json!([1000, 18])).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"error": "Request body must be a JSON object"}));
}

#[tokio::test]
async fn test_unknown_routes_are_not_found() {
    let server = create_test_server();

    let response = server.post("/api/bmi").json(&json!({})).await;
    response.assert_status_not_found();
    response.assert_json(&json!({"error": "Endpoint not found"}));

    let response = server.get("/nowhere").await;
    response.assert_status_not_found();
    response.assert_json(&json!({"error": "Endpoint not found"}));
}

#[tokio::test]
async fn test_oversized_body_is_rejected_with_error_shape() {
    let config = ToolsConfig::from_toml("[limits]\nmax_body_size_kb = 1\n").unwrap();
    let app = tools_api::create_app(&config);

    let padding = "x".repeat(4096);
    let body = json!({"amount": 1, "rate": 18, "padding": padding}).to_string();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/gst")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let error: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error.error, "Request body too large");
}

#[tokio::test]
async fn test_wrong_method_uses_error_shape() {
    let server = create_test_server();

    let response = server.get("/api/age").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    response.assert_json(&json!({"error": "Method not allowed"}));

    let response = server.post("/health").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    response.assert_json(&json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let server = create_test_server();
    let requests = [
        ("/api/age", json!({"dob": "2000-03-01"})),
        ("/api/cgpa", json!({"cgpa": 7.83, "university": "Mumbai"})),
        ("/api/gst", json!({"amount": 999.99, "rate": 12})),
        ("/api/emi", json!({"principal": 250000, "annual_rate": 9.25, "tenure_months": 36})),
    ];

    for (path, body) in requests {
        let first = server.post(path).json(&body).await.text();
        let second = server.post(path).json(&body).await.text();
        assert_eq!(first, second, "{path}");
    }
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_tools_catalog_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/tools").add_query_param("q", "loan").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["tools"].as_array().unwrap().len(), 1);
    assert_eq!(body["tools"][0]["id"], "emi");
    assert_eq!(body["categories"][0], "All");

    let response = server.get("/api/tools").add_query_param("category", "Education").await;
    let body: Value = response.json();
    assert_eq!(body["tools"][0]["endpoint"], "/api/cgpa");
}
