//! Vote + witness-slip scrape: walks a configured list of bill
//! status URLs with two resumable strategies. Resume state (which URLs have
//! already been scanned, and the sampling gap-fill backlog) lives in
//! `scrape_metadata.json` so an interrupted run picks up where it left off.

use crate::error::ScrapeError;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use ilga_cache::CacheStore;
use ilga_core::{VoteEvent, WitnessSlip};
use ilga_fetch::Fetcher;
use ilga_parse::{vote, witness_slip};
use tracing::warn;

const FETCH_CONCURRENCY: usize = 10;

#[derive(Debug, Clone, Copy)]
pub enum ScanStrategy {
    /// The next `batch_size` URLs not yet scanned, in list order.
    Linear { batch_size: usize },
    /// Every `stride`-th URL, with previously-skipped URLs drained from the
    /// gap-fill queue first.
    Sampling { stride: usize },
}

#[derive(Debug, Default)]
pub struct VoteScrapeReport {
    pub urls_scanned: usize,
    pub vote_events_found: usize,
    pub witness_slips_found: usize,
}

/// # Errors
/// Propagates `ScrapeError::Cache` if the cache cannot be read or written;
/// individual page fetch/parse failures are logged and skipped.
pub async fn scrape_votes_and_slips(
    fetcher: &Fetcher,
    cache: &CacheStore,
    vote_bill_urls: &[String],
    strategy: ScanStrategy,
) -> Result<VoteScrapeReport, ScrapeError> {
    let mut metadata = cache.load_metadata()?;
    let selected = select_urls(vote_bill_urls, &strategy, &mut metadata);

    let pages: Vec<(Vec<VoteEvent>, Vec<WitnessSlip>)> = stream::iter(selected.clone())
        .map(|url| fetch_votes_and_slips(fetcher, url))
        .buffer_unordered(FETCH_CONCURRENCY)
        .collect()
        .await;

    let mut vote_events = cache.load_vote_events()?;
    let mut witness_slips = cache.load_witness_slips()?;
    let mut report = VoteScrapeReport { urls_scanned: selected.len(), ..VoteScrapeReport::default() };

    for (events, slips) in pages {
        report.vote_events_found += events.len();
        report.witness_slips_found += slips.len();
        vote_events.extend(events);
        witness_slips.extend(slips);
    }

    vote_events.sort_by_key(VoteEvent::sort_key);
    cache.save_vote_events(&vote_events)?;
    cache.save_witness_slips(&witness_slips)?;

    for url in &selected {
        metadata.record_fetch("vote_slip_scan", true);
        if !metadata.linear_scan_cursor.scanned_leg_ids.contains(url) {
            metadata.linear_scan_cursor.scanned_leg_ids.push(url.clone());
        }
        if !metadata.sampling_scan_cursor.scanned_leg_ids.contains(url) {
            metadata.sampling_scan_cursor.scanned_leg_ids.push(url.clone());
        }
    }
    metadata.last_vote_slip_scrape_at = Some(Utc::now());
    cache.save_metadata(&metadata)?;

    Ok(report)
}

fn select_urls(vote_bill_urls: &[String], strategy: &ScanStrategy, metadata: &mut ilga_cache::ScrapeMetadata) -> Vec<String> {
    match *strategy {
        ScanStrategy::Linear { batch_size } => vote_bill_urls
            .iter()
            .filter(|u| !metadata.linear_scan_cursor.scanned_leg_ids.contains(*u))
            .take(batch_size)
            .cloned()
            .collect(),
        ScanStrategy::Sampling { stride } => {
            metadata.sampling_scan_cursor.sample_stride = Some(stride as u32);
            let mut selected: Vec<String> = metadata.sampling_scan_cursor.gap_fill_queue.drain(..).collect();

            for (index, url) in vote_bill_urls.iter().enumerate() {
                if metadata.sampling_scan_cursor.scanned_leg_ids.contains(url) {
                    continue;
                }
                if index % stride.max(1) == 0 {
                    selected.push(url.clone());
                } else {
                    metadata.sampling_scan_cursor.gap_fill_queue.push(url.clone());
                }
            }
            selected
        }
    }
}

async fn fetch_votes_and_slips(fetcher: &Fetcher, bill_status_url: String) -> (Vec<VoteEvent>, Vec<WitnessSlip>) {
    let events = match fetcher.fetch(&bill_status_url).await {
        Ok(response) => match vote::parse_vote_event(&response.bytes, &bill_status_url) {
            Ok((event, warnings)) => {
                log_warnings(&warnings);
                vec![event]
            }
            Err(e) => {
                warn!(url = %bill_status_url, error = %e, "vote page parse failed");
                vec![]
            }
        },
        Err(e) => {
            warn!(url = %bill_status_url, error = %e, "vote page fetch failed");
            vec![]
        }
    };

    let slips_url = format!("{bill_status_url}&View=WitnessSlips");
    let slips = match fetcher.fetch(&slips_url).await {
        Ok(response) => match witness_slip::parse_witness_slips(&response.bytes, &slips_url) {
            Ok((slips, warnings)) => {
                log_warnings(&warnings);
                slips
            }
            Err(e) => {
                warn!(url = %slips_url, error = %e, "witness slip page parse failed");
                vec![]
            }
        },
        Err(e) => {
            warn!(url = %slips_url, error = %e, "witness slip page fetch failed");
            vec![]
        }
    };

    (events, slips)
}

fn log_warnings(warnings: &[ilga_parse::ParseWarning]) {
    for w in warnings {
        warn!(source_url = %w.source_url, message = %w.message, "parse warning");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ilga_cache::ScrapeMetadata;

    #[test]
    fn linear_strategy_takes_unscanned_prefix() {
        let urls: Vec<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
        let mut metadata = ScrapeMetadata::default();
        metadata.linear_scan_cursor.scanned_leg_ids.push("a".into());

        let selected = select_urls(&urls, &ScanStrategy::Linear { batch_size: 1 }, &mut metadata);
        assert_eq!(selected, vec!["b".to_string()]);
    }

    #[test]
    fn sampling_strategy_drains_gap_fill_queue_first() {
        let urls: Vec<String> = ["a", "b", "c", "d"].into_iter().map(String::from).collect();
        let mut metadata = ScrapeMetadata::default();
        metadata.sampling_scan_cursor.gap_fill_queue.push("z".into());

        let selected = select_urls(&urls, &ScanStrategy::Sampling { stride: 2 }, &mut metadata);
        assert_eq!(selected[0], "z");
        assert!(selected.contains(&"a".to_string()));
        assert!(selected.contains(&"c".to_string()));
        assert!(metadata.sampling_scan_cursor.gap_fill_queue.contains(&"b".to_string()));
    }
}
