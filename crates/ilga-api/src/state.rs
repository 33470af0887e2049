//! Shared application state: one explicit value built in `main`, held
//! behind `Arc` and read lock-free by every resolver.

use ilga_advocacy::Crosswalk;
use ilga_core::{MoneyballProfile, Scorecard};
use ilga_graph::Graph;
use std::collections::HashMap;
use std::sync::Arc;

pub struct AppState {
    pub graph: Arc<Graph>,
    pub scorecards: Arc<HashMap<String, Scorecard>>,
    pub moneyball: Arc<HashMap<String, MoneyballProfile>>,
    pub crosswalk: Arc<Crosswalk>,
    pub dev_mode: bool,
    pub api_key: Option<String>,
    /// True once members are loaded; reported verbatim by `GET /health`.
    pub ready: bool,
}
