//! Bill scrape: paginated index discovery plus the incremental
//! rule — a bill's detail page is only re-fetched when its `leg_id` is new
//! or its last-action-date has moved since the cached value.

use crate::error::ScrapeError;
use futures::stream::{self, StreamExt};
use ilga_cache::CacheStore;
use ilga_core::{Bill, Chamber};
use ilga_fetch::Fetcher;
use ilga_parse::bill;
use std::collections::HashMap;
use tracing::warn;

const BILL_DETAIL_CONCURRENCY: usize = 10;
/// Bills are persisted every 50 records during a long scrape so an
/// interrupted run can resume.
const CHECKPOINT_EVERY: usize = 50;

#[derive(Debug, Default)]
pub struct BillScrapeReport {
    pub bills_fetched: usize,
    pub bills_skipped_incremental: usize,
}

/// Runs the bill scrape for both chambers. `sb_limit`/`hb_limit` of `0` mean
/// unlimited.
///
/// # Errors
/// Returns `ScrapeError` if a bill index page is unreachable or unparseable
/// after retries; individual detail-page failures are skipped, not fatal.
pub async fn scrape_bills(fetcher: &Fetcher, cache: &CacheStore, base_url: &str, sb_limit: usize, hb_limit: usize) -> Result<BillScrapeReport, ScrapeError> {
    let mut bills = cache.load_bills()?;
    let mut report = BillScrapeReport::default();

    for (chamber, prefix, limit) in [(Chamber::Senate, "SB", sb_limit), (Chamber::House, "HB", hb_limit)] {
        let rows = discover_index_rows(fetcher, base_url, prefix, limit).await?;
        let total_rows = rows.len();
        let pending: Vec<_> = rows.into_iter().filter(|row| needs_refetch(&bills, row)).collect();
        report.bills_skipped_incremental += total_rows - pending.len();

        let detail_urls: Vec<String> = pending.iter().map(|row| bill_detail_url(base_url, chamber, &row.leg_id)).collect();
        let fetched: Vec<Bill> = stream::iter(detail_urls)
            .map(|url| fetch_bill_detail(fetcher, url))
            .buffer_unordered(BILL_DETAIL_CONCURRENCY)
            .filter_map(|result| async move { result })
            .collect()
            .await;

        for (i, b) in fetched.into_iter().enumerate() {
            report.bills_fetched += 1;
            bills.insert(b.leg_id.clone(), b);
            if (i + 1) % CHECKPOINT_EVERY == 0 {
                cache.save_bills(&bills)?;
            }
        }
    }

    cache.save_bills(&bills)?;
    Ok(report)
}

fn needs_refetch(cache: &HashMap<String, Bill>, row: &bill::BillIndexRow) -> bool {
    match cache.get(&row.leg_id) {
        None => true,
        Some(cached) => cached.last_action_date != row.last_action_date,
    }
}

/// Walks the paginated bill index for one chamber, following "next" links
/// rather than assuming a page count, until `limit` rows are collected
/// (`0` = unlimited) or there is no further page.
async fn discover_index_rows(fetcher: &Fetcher, base_url: &str, prefix: &str, limit: usize) -> Result<Vec<bill::BillIndexRow>, ScrapeError> {
    let mut rows = Vec::new();
    let mut next_url = Some(format!("{base_url}/legislation?Prefix={prefix}&Start=1"));

    while let Some(url) = next_url.take() {
        let response = fetcher.fetch(&url).await?;
        let (mut page_rows, discovered_next, warnings) = bill::parse_bill_index_page(&response.bytes, &url)?;
        for w in &warnings {
            warn!(source_url = %w.source_url, message = %w.message, "bill index warning");
        }
        rows.append(&mut page_rows);

        if limit > 0 && rows.len() >= limit {
            rows.truncate(limit);
            break;
        }
        next_url = discovered_next;
    }

    Ok(rows)
}

async fn fetch_bill_detail(fetcher: &Fetcher, url: String) -> Option<Bill> {
    let leg_id = extract_leg_id_from_url(&url)?;
    let response = fetcher.fetch(&url).await.map_err(|e| warn!(url = %url, error = %e, "bill detail fetch failed")).ok()?;
    let (detail, warnings) = bill::parse_bill_detail(&response.bytes, &url, &leg_id).map_err(|e| warn!(url = %url, error = %e, "bill detail parse failed")).ok()?;
    for w in &warnings {
        warn!(source_url = %w.source_url, message = %w.message, "bill detail warning");
    }
    Some(detail)
}

fn bill_detail_url(base_url: &str, chamber: Chamber, leg_id: &str) -> String {
    let chamber_path = chamber.to_string().to_lowercase();
    format!("{base_url}/{chamber_path}/billstatus?DocNum={leg_id}")
}

fn extract_leg_id_from_url(url: &str) -> Option<String> {
    let query = url.split('?').nth(1)?;
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        k.eq_ignore_ascii_case("docnum").then(|| v.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(leg_id: &str, date: &str) -> bill::BillIndexRow {
        bill::BillIndexRow {
            bill_number: format!("HB{leg_id}"),
            leg_id: leg_id.to_string(),
            last_action_date: Some(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()),
        }
    }

    #[test]
    fn new_leg_id_always_needs_refetch() {
        let cache = HashMap::new();
        assert!(needs_refetch(&cache, &row("1", "2026-01-01")));
    }

    #[test]
    fn unchanged_last_action_date_skips_refetch() {
        let mut cache = HashMap::new();
        let mut cached = sample_bill();
        cached.last_action_date = Some(NaiveDate::parse_from_str("2026-01-01", "%Y-%m-%d").unwrap());
        cache.insert("1".into(), cached);
        assert!(!needs_refetch(&cache, &row("1", "2026-01-01")));
    }

    #[test]
    fn changed_last_action_date_triggers_refetch() {
        let mut cache = HashMap::new();
        let mut cached = sample_bill();
        cached.last_action_date = Some(NaiveDate::parse_from_str("2026-01-01", "%Y-%m-%d").unwrap());
        cache.insert("1".into(), cached);
        assert!(needs_refetch(&cache, &row("1", "2026-02-01")));
    }

    fn sample_bill() -> Bill {
        Bill {
            leg_id: "1".into(),
            bill_number: "HB0001".into(),
            chamber: Chamber::House,
            kind: ilga_core::BillKind::Substantive,
            description: String::new(),
            synopsis: String::new(),
            status_url: None,
            primary_sponsor: None,
            sponsor_ids: vec![],
            house_sponsor_ids: vec![],
            last_action: None,
            last_action_date: None,
            status: ilga_core::BillStatus::Filed,
            action_history: vec![],
            pipeline_depth: 0,
            is_dead: false,
        }
    }
}
