use adapter::database::connect_database_with;
use api::route::routes;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use registry::AppRegistry;
use serde_json::{json, Value};
use shared::config::{AppConfig, AuthConfig, DatabaseConfig, ServerConfig};
use tower::ServiceExt;

const TOKEN: &str = "test-token";

// The pool is lazy and points nowhere; every case here must finish before touching it.
fn app() -> Router {
    let app_config = AppConfig {
        database: DatabaseConfig {
            host: "127.0.0.1".into(),
            port: 1,
            username: "app".into(),
            password: "passwd".into(),
            database: "app".into(),
            max_connections: 1,
        },
        auth: AuthConfig {
            tokens: vec![TOKEN.into()],
        },
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: Vec::new(),
        },
    };
    let pool = connect_database_with(&app_config.database);
    routes().with_state(AppRegistry::new(pool, app_config))
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(req: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_needs_no_token() {
    let (status, _) = send(request(Method::GET, "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_token_is_rejected() {
    let (status, body) = send(request(Method::GET, "/users", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Missing or invalid access token");
}

#[tokio::test]
async fn unknown_token_is_rejected() {
    let (status, _) = send(request(Method::GET, "/bookings/1", Some("nope"), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_is_checked_before_the_body() {
    let (status, _) = send(request(Method::PUT, "/users/1", None, Some(json!({})))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn empty_update_is_a_bad_request() {
    for uri in [
        "/users/1",
        "/user_addresses/1",
        "/property_categories/1",
        "/property/1",
        "/property_addreses/1",
        "/amenities/1",
        "/property_photos/1",
        "/house_rules/1",
        "/bookings/1",
    ] {
        let (status, body) = send(request(Method::PUT, uri, Some(TOKEN), Some(json!({})))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["detail"], "No fields to update", "{uri}");
    }
}

#[tokio::test]
async fn invalid_email_fails_validation() {
    let payload = json!({
        "email": "not-an-email",
        "password_hash": "x",
        "first_name": "Ann",
        "last_name": "Lee",
    });
    let (status, _) = send(request(Method::POST, "/users", Some(TOKEN), Some(payload))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn property_night_range_is_checked_on_create() {
    let payload = json!({
        "host_id": 1,
        "category_id": 1,
        "title": "Loft",
        "description": "Bright loft near the station",
        "property_type": "entire_place",
        "price_per_night": "120.00",
        "minimum_nights": 5,
        "maximum_nights": 3,
    });
    let (status, _) = send(request(Method::POST, "/property", Some(TOKEN), Some(payload))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn property_night_range_is_checked_on_update() {
    let payload = json!({ "minimum_nights": 7, "maximum_nights": 2 });
    let (status, _) = send(request(Method::PUT, "/property/1", Some(TOKEN), Some(payload))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn booking_must_cover_a_night() {
    let payload = json!({
        "property_id": 1,
        "guest_id": 2,
        "check_in_date": "2024-09-01",
        "check_out_date": "2024-09-01",
        "num_guests": 2,
        "base_price": "100.00",
        "service_fee": "5.00",
        "total_amount": "105.00",
    });
    let (status, body) = send(request(Method::POST, "/bookings", Some(TOKEN), Some(payload))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "check_out_date must be after check_in_date");
}

#[tokio::test]
async fn negative_paging_is_rejected() {
    let (status, _) = send(request(Method::GET, "/users?skip=-1", Some(TOKEN), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_enum_value_is_a_json_bad_request() {
    let payload = json!({
        "host_id": 1,
        "category_id": 1,
        "title": "Keep",
        "description": "Stone walls",
        "property_type": "castle",
        "price_per_night": "300.00",
    });
    let (status, body) = send(request(Method::POST, "/property", Some(TOKEN), Some(payload))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("castle")));
}

#[tokio::test]
async fn missing_body_field_is_a_json_bad_request() {
    let payload = json!({ "rule_text": "Quiet after 22:00" });
    let (status, body) =
        send(request(Method::POST, "/house_rules", Some(TOKEN), Some(payload))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("property_id")));
}

#[tokio::test]
async fn missing_query_parameter_is_a_json_bad_request() {
    let (status, body) = send(request(Method::GET, "/house_rules", Some(TOKEN), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("property_id")));
}

#[tokio::test]
async fn non_numeric_id_is_a_json_bad_request() {
    let (status, body) = send(request(Method::GET, "/bookings/abc", Some(TOKEN), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}
