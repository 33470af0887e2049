//! Combined axum router state: the immutable `AppState` plus the compiled
//! GraphQL schema, each extractable independently via `FromRef`.

use crate::graphql::IlgaSchema;
use crate::state::AppState;
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone)]
pub struct RouterState {
    pub app: Arc<AppState>,
    pub schema: IlgaSchema,
}

impl FromRef<RouterState> for Arc<AppState> {
    fn from_ref(input: &RouterState) -> Self {
        input.app.clone()
    }
}

impl FromRef<RouterState> for IlgaSchema {
    fn from_ref(input: &RouterState) -> Self {
        input.schema.clone()
    }
}
