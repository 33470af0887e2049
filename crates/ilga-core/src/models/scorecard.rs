use serde::{Deserialize, Serialize};

/// Per-member legislative scorecard, derived from `primary_bill_ids`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct Scorecard {
    pub bills_introduced: u32,
    pub laws_passed: u32,
    pub law_success_rate: f64,
    pub resolutions_filed: u32,
    pub resolutions_passed: u32,
    pub resolution_pass_rate: f64,
    pub magnet_score: f64,
    pub bridge_score: f64,
    pub avg_pipeline_depth: f64,
    pub shell_bill_count: u32,
}

/// Per-member Moneyball composite. Component scores are normalized
/// to `[0, 1]`; `moneyball_score` is the weighted composite in `[0, 100]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct MoneyballProfile {
    pub effectiveness: f64,
    pub pipeline: f64,
    pub magnet: f64,
    pub bridge: f64,
    pub centrality: f64,
    pub institutional_weight: f64,
    pub moneyball_score: f64,
}
