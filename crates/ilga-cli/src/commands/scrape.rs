//! Full scrape: member+committee scrape, bill scrape, vote+slip
//! scrape, then an analytics recompute, each step wrapped in an error
//! boundary that keeps the previous cached state and moves on.

use super::report::{StepReport, StepSource};
use ilga_analytics::{compute_moneyball, compute_scorecards};
use ilga_cache::CacheStore;
use ilga_fetch::Fetcher;
use ilga_scrape::{scrape_bills, scrape_members_and_committees, scrape_votes_and_slips, ScanStrategy};
use ilga_util::config::Config;
use std::time::Instant;

pub async fn run(config: &Config, fetcher: &Fetcher, cache: &CacheStore) -> Vec<StepReport> {
    let mut steps = Vec::new();

    steps.push(run_step("members_and_committees", || async {
        let member_limit = (config.member_limit > 0).then_some(config.member_limit as usize);
        let report = scrape_members_and_committees(fetcher, cache, &config.base_url, member_limit).await?;
        Ok::<_, ilga_scrape::ScrapeError>(report.members_fetched + report.committees_fetched)
    })
    .await);

    steps.push(run_step("bills", || async {
        let report = scrape_bills(fetcher, cache, &config.base_url, config.sb_limit as usize, config.hb_limit as usize).await?;
        Ok::<_, ilga_scrape::ScrapeError>(report.bills_fetched)
    })
    .await);

    steps.push(run_step("votes_and_witness_slips", || async {
        let strategy = ScanStrategy::Linear { batch_size: config.vote_bill_urls.len().max(1) };
        let report = scrape_votes_and_slips(fetcher, cache, &config.vote_bill_urls, strategy).await?;
        Ok::<_, ilga_scrape::ScrapeError>(report.vote_events_found + report.witness_slips_found)
    })
    .await);

    steps.push(run_analytics_step(config, cache));

    steps
}

async fn run_step<F, Fut, T, E>(name: &str, f: F) -> StepReport
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    T: Into<usize>,
    E: std::fmt::Display,
{
    let start = Instant::now();
    match f().await {
        Ok(records) => StepReport::ok(name, start.elapsed(), records.into(), StepSource::Live),
        Err(e) => {
            tracing::error!(step = name, error = %e, "step failed, keeping previous cached state");
            StepReport::failed(name, start.elapsed(), e.to_string())
        }
    }
}

fn run_analytics_step(config: &Config, cache: &CacheStore) -> StepReport {
    let start = Instant::now();
    let graph = match ilga_graph::hydrate(cache, config.dead_after_days) {
        Ok(g) => g,
        Err(e) => {
            tracing::error!(error = %e, "failed to hydrate graph for analytics, keeping previous cached analytics");
            return StepReport::failed("analytics", start.elapsed(), e.to_string());
        }
    };

    let scorecards = compute_scorecards(&graph);
    let member_count = scorecards.len();
    let moneyball = compute_moneyball(&graph, &scorecards);

    if let Err(e) = cache.save_scorecards(&scorecards).and_then(|()| cache.save_moneyball(&moneyball)) {
        tracing::error!(error = %e, "failed to persist analytics");
        return StepReport::failed("analytics", start.elapsed(), e.to_string());
    }

    StepReport::ok("analytics", start.elapsed(), member_count, StepSource::Live)
}
