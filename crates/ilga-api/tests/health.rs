mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[tokio::test]
async fn health_reports_ready() {
    let state = common::fixture_state(true, None);
    let app = ilga_api::build_router(state, true, &["*".to_string()]);

    let response = app.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["ready"], true);
}

#[tokio::test]
async fn health_does_not_require_api_key() {
    let state = common::fixture_state(false, Some("secret".to_string()));
    let app = ilga_api::build_router(state, false, &["*".to_string()]);

    let response = app.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
