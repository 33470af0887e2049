//! GraphQL + advocacy server library. `main.rs` is a thin
//! binary over `build_router`; integration tests exercise the same router
//! in-process via `tower::ServiceExt::oneshot`.

pub mod graphql;
pub mod loaders;
pub mod middleware;
pub mod router_state;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use router_state::RouterState;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the full axum `Router` for a given `AppState`. Shared by `main`
/// (over live cache data) and integration tests (over a fixture state).
#[must_use]
pub fn build_router(app_state: Arc<AppState>, dev_mode: bool, cors_origins: &[String]) -> Router {
    let schema = graphql::build_schema(app_state.clone());
    let router_state = RouterState { app: app_state.clone(), schema };

    let mut graphql_routes = Router::new().route("/graphql", post(routes::graphql_handler));
    if dev_mode {
        graphql_routes = graphql_routes.route("/graphql", get(routes::graphiql));
    }

    let protected = Router::new()
        .merge(graphql_routes)
        .route("/advocacy", get(routes::advocacy_form))
        .route("/advocacy/search", post(routes::advocacy_search))
        .layer(axum_mw::from_fn_with_state(app_state.clone(), middleware::require_api_key));

    let cors = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::permissive()
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors_origins.iter().filter_map(|o| o.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/health", get(routes::health))
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(router_state)
}
