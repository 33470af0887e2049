//! Typed `scrape_metadata.json`: timestamps, per-component fetch counters,
//! and resumable scan cursors for the vote/slip scraper's linear and
//! sampling strategies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FetchCounters {
    pub attempted: u64,
    pub succeeded: u64,
    pub skipped: u64,
    pub failed: u64,
}

/// Cursor for the vote/witness-slip scraper's resumable scans.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScanCursor {
    /// `leg_id`s already scanned for votes/slips in this strategy.
    pub scanned_leg_ids: Vec<String>,
    /// For the sampling strategy: the stride last used.
    pub sample_stride: Option<u32>,
    /// For the sampling strategy: leg_ids earmarked for gap-fill.
    pub gap_fill_queue: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScrapeMetadata {
    pub last_bill_scrape_at: Option<DateTime<Utc>>,
    pub last_member_scrape_at: Option<DateTime<Utc>>,
    pub last_vote_slip_scrape_at: Option<DateTime<Utc>>,
    pub bill_index_count: u64,
    pub fetch_counters: HashMap<String, FetchCounters>,
    pub linear_scan_cursor: ScanCursor,
    pub sampling_scan_cursor: ScanCursor,
}

impl ScrapeMetadata {
    pub fn record_fetch(&mut self, component: &str, succeeded: bool) {
        let counters = self.fetch_counters.entry(component.to_string()).or_default();
        counters.attempted += 1;
        if succeeded {
            counters.succeeded += 1;
        } else {
            counters.failed += 1;
        }
    }

    pub fn record_skip(&mut self, component: &str) {
        self.fetch_counters.entry(component.to_string()).or_default().skipped += 1;
    }
}
