mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[tokio::test]
async fn advocacy_form_renders() {
    let state = common::fixture_state(true, None);
    let app = ilga_api::build_router(state, true, &["*".to_string()]);

    let response = app.oneshot(Request::builder().uri("/advocacy").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Find your legislators"));
}

#[tokio::test]
async fn advocacy_search_known_zip_returns_cards() {
    let state = common::fixture_state(true, None);
    let app = ilga_api::build_router(state, true, &["*".to_string()]);

    let request = Request::builder()
        .method("POST")
        .uri("/advocacy/search")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("zip=62701"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Jane Doe") || html.contains("Sam Powers"));
}

#[tokio::test]
async fn advocacy_search_unknown_zip_reports_error() {
    let state = common::fixture_state(true, None);
    let app = ilga_api::build_router(state, true, &["*".to_string()]);

    let request = Request::builder()
        .method("POST")
        .uri("/advocacy/search")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("zip=00000"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("error"));
}
