//! Router-level tests for the validation boundary: every request here is
//! rejected before a database connection would be acquired.

use super::helpers::{build_app, read_json, send};
use axum::http::StatusCode;

#[tokio::test]
async fn non_numeric_id_is_a_bad_request() {
    let app = build_app();

    let response = send(&app, "/joyas/joya/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["error"], "Invalid or missing id parameter");
}

#[tokio::test]
async fn non_positive_pagination_is_rejected() {
    let app = build_app();

    for uri in ["/joyas?limits=0", "/joyas?page=-1", "/joyas?limits=many"] {
        let response = send(&app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");

        let body = read_json(response).await;
        assert!(
            body["error"].as_str().is_some(),
            "error body must carry a message"
        );
    }
}

#[tokio::test]
async fn page_beyond_offset_range_is_rejected() {
    let app = build_app();

    let uri = format!("/joyas?limits=100&page={}", i64::MAX);
    let response = send(&app, &uri).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["error"], "page is out of range");
}

#[tokio::test]
async fn inverted_price_range_is_rejected() {
    let app = build_app();

    let response = send(&app, "/joyas/filtros?precio_min=20&precio_max=10").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["error"], "precio_min must not exceed precio_max");
}

#[tokio::test]
async fn malformed_price_bound_is_rejected() {
    let app = build_app();

    let response = send(&app, "/joyas/filtros?precio_min=cheap").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["error"], "precio_min must be a decimal number");
}

#[tokio::test]
async fn health_reports_unhealthy_without_a_database() {
    let app = build_app();

    let response = send(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = read_json(response).await;
    assert_eq!(body["status"], "unhealthy");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = build_app();

    let response = send(&app, "/joyas/nope/extra").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
