//! GraphQL schema wiring.

pub mod enums;
pub mod query;
pub mod types;

use crate::state::AppState;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use query::QueryRoot;
use std::sync::Arc;

pub type IlgaSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

#[must_use]
pub fn build_schema(state: Arc<AppState>) -> IlgaSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription).data(state).finish()
}

/// Redacts resolver errors for prod. A lookup that resolves to
/// "not found" is expressed as a null field, never a GraphQL error, so
/// whatever reaches here is an unexpected failure (e.g. a loader error);
/// in prod it becomes an opaque message, in dev it passes through
/// untouched. A `code` extension of `NOT_FOUND` is still honored verbatim
/// if a future resolver chooses to surface one.
pub fn redact_for_prod(mut response: async_graphql::Response, dev_mode: bool) -> async_graphql::Response {
    if dev_mode {
        return response;
    }
    for error in &mut response.errors {
        let is_not_found = error.extensions.as_ref().is_some_and(|ext| {
            ext.get("code").is_some_and(|v| matches!(v, async_graphql::Value::String(s) if s == "NOT_FOUND"))
        });
        if !is_not_found {
            error.message = "internal error".to_string();
            error.extensions = None;
        }
    }
    response
}
