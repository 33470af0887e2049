//! Incremental scrape: bill scrape only, with an analytics
//! recompute gated on whether any bill actually changed.

use super::report::{StepReport, StepSource};
use ilga_analytics::{compute_moneyball, compute_scorecards};
use ilga_cache::CacheStore;
use ilga_fetch::Fetcher;
use ilga_scrape::scrape_bills;
use ilga_util::config::Config;
use std::time::Instant;

pub async fn run(config: &Config, fetcher: &Fetcher, cache: &CacheStore) -> Vec<StepReport> {
    let mut steps = Vec::new();

    let start = Instant::now();
    let bill_report = match scrape_bills(fetcher, cache, &config.base_url, config.sb_limit as usize, config.hb_limit as usize).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "incremental bill scrape failed, keeping previous cached bills");
            steps.push(StepReport::failed("bills", start.elapsed(), e.to_string()));
            return steps;
        }
    };
    steps.push(StepReport::ok("bills", start.elapsed(), bill_report.bills_fetched, StepSource::Live));

    if bill_report.bills_fetched == 0 {
        tracing::info!("no bills changed, skipping analytics recompute");
        return steps;
    }

    let start = Instant::now();
    let graph = match ilga_graph::hydrate(cache, config.dead_after_days) {
        Ok(g) => g,
        Err(e) => {
            tracing::error!(error = %e, "failed to hydrate graph for analytics, keeping previous cached analytics");
            steps.push(StepReport::failed("analytics", start.elapsed(), e.to_string()));
            return steps;
        }
    };
    let scorecards = compute_scorecards(&graph);
    let member_count = scorecards.len();
    let moneyball = compute_moneyball(&graph, &scorecards);

    if let Err(e) = cache.save_scorecards(&scorecards).and_then(|()| cache.save_moneyball(&moneyball)) {
        tracing::error!(error = %e, "failed to persist analytics");
        steps.push(StepReport::failed("analytics", start.elapsed(), e.to_string()));
        return steps;
    }

    steps.push(StepReport::ok("analytics", start.elapsed(), member_count, StepSource::Live));
    steps
}
