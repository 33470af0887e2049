mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post_graphql(app: axum::Router, query: &str, api_key: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri("/graphql").header("content-type", "application/json");
    if let Some(key) = api_key {
        builder = builder.header("X-API-Key", key);
    }
    let request = builder.body(Body::from(json!({ "query": query }).to_string())).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn member_query_resolves_scorecard_and_moneyball() {
    let state = common::fixture_state(true, None);
    let app = ilga_api::build_router(state, true, &["*".to_string()]);

    let (status, body) = post_graphql(
        app,
        r#"{ member(name: "Jane Doe") { memberId chamber scorecard { billsIntroduced } moneyball { moneyballScore } } }"#,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let member = &body["data"]["member"];
    assert_eq!(member["memberId"], "M1");
    assert_eq!(member["chamber"], "SENATE");
    assert_eq!(member["scorecard"]["billsIntroduced"], 1);
    assert_eq!(member["moneyball"]["moneyballScore"], 42.0);
}

#[tokio::test]
async fn unknown_member_resolves_to_null_not_an_error() {
    let state = common::fixture_state(true, None);
    let app = ilga_api::build_router(state, true, &["*".to_string()]);

    let (status, body) = post_graphql(app, r#"{ member(name: "Nobody Here") { memberId } }"#, None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["member"].is_null());
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn moneyball_leaderboard_orders_and_paginates() {
    let state = common::fixture_state(true, None);
    let app = ilga_api::build_router(state, true, &["*".to_string()]);

    let (status, body) = post_graphql(
        app,
        r#"{ moneyballLeaderboard(chamber: SENATE, limit: 1) { items { member { memberId } profile { moneyballScore } } pageInfo { totalCount hasNextPage } } }"#,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let leaderboard = &body["data"]["moneyballLeaderboard"];
    assert_eq!(leaderboard["pageInfo"]["totalCount"], 2);
    assert_eq!(leaderboard["pageInfo"]["hasNextPage"], true);
    assert_eq!(leaderboard["items"][0]["member"]["memberId"], "M2");
    assert_eq!(leaderboard["items"][0]["profile"]["moneyballScore"], 77.0);
}

#[tokio::test]
async fn bill_sponsors_resolve_through_loader() {
    let state = common::fixture_state(true, None);
    let app = ilga_api::build_router(state, true, &["*".to_string()]);

    let (status, body) = post_graphql(app, r#"{ bill(number: "SB0001") { billNumber sponsors { name } } }"#, None).await;

    assert_eq!(status, StatusCode::OK);
    let bill = &body["data"]["bill"];
    assert_eq!(bill["billNumber"], "SB0001");
    assert_eq!(bill["sponsors"][0]["name"], "Jane Doe");
}

#[tokio::test]
async fn witness_slip_summary_reflects_majority_position() {
    let state = common::fixture_state(true, None);
    let app = ilga_api::build_router(state, true, &["*".to_string()]);

    let (status, body) = post_graphql(
        app,
        r#"{ witnessSlipSummary(billNumber: "SB0001") { proponentCount opponentCount } billSlipAnalytics(billNumber: "SB0001") { majorityPositionIsProponent } }"#,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["witnessSlipSummary"]["proponentCount"], 1);
    assert_eq!(body["data"]["witnessSlipSummary"]["opponentCount"], 1);
    assert_eq!(body["data"]["billSlipAnalytics"]["majorityPositionIsProponent"], true);
}

#[tokio::test]
async fn protected_route_rejects_missing_api_key() {
    let state = common::fixture_state(false, Some("secret".to_string()));
    let app = ilga_api::build_router(state, false, &["*".to_string()]);

    let (status, _) = post_graphql(app, r#"{ member(name: "Jane Doe") { memberId } }"#, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_route_accepts_correct_api_key() {
    let state = common::fixture_state(false, Some("secret".to_string()));
    let app = ilga_api::build_router(state, false, &["*".to_string()]);

    let (status, body) = post_graphql(app, r#"{ member(name: "Jane Doe") { memberId } }"#, Some("secret")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["member"]["memberId"], "M1");
}

#[tokio::test]
async fn graphiql_served_in_dev_mode_only() {
    let dev_state = common::fixture_state(true, None);
    let dev_app = ilga_api::build_router(dev_state, true, &["*".to_string()]);
    let dev_response = dev_app.oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(dev_response.status(), StatusCode::OK);

    let prod_state = common::fixture_state(false, None);
    let prod_app = ilga_api::build_router(prod_state, false, &["*".to_string()]);
    let prod_response = prod_app.oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(prod_response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
