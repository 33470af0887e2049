//! `POST|GET /graphql`: query execution and, in dev only, the
//! interactive explorer.

use crate::graphql::{redact_for_prod, IlgaSchema};
use crate::loaders::Loaders;
use crate::state::AppState;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use std::sync::Arc;

pub async fn graphql_handler(State(schema): State<IlgaSchema>, State(state): State<Arc<AppState>>, req: GraphQLRequest) -> GraphQLResponse {
    let loaders = Loaders::new(state.graph.clone(), state.scorecards.clone(), state.moneyball.clone());
    let request = req.into_inner().data(loaders);
    let response = schema.execute(request).await;
    redact_for_prod(response, state.dev_mode).into()
}

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
