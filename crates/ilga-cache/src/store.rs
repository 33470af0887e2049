//! Cache Store: content-addressed JSON files on disk with
//! atomic write and staleness metadata.

use crate::error::CacheError;
use crate::io::{read_json, write_json_atomic};
use crate::metadata::ScrapeMetadata;
use ilga_core::{Bill, Committee, CommitteeSeat, Member, MoneyballProfile, Scorecard, VoteEvent, WitnessSlip};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    pub fn load_members(&self) -> Result<Vec<Member>, CacheError> {
        read_json(&self.path("members.json"))
    }

    pub fn save_members(&self, members: &[Member]) -> Result<(), CacheError> {
        write_json_atomic(&self.path("members.json"), &members)
    }

    pub fn load_bills(&self) -> Result<HashMap<String, Bill>, CacheError> {
        read_json(&self.path("bills.json"))
    }

    pub fn save_bills(&self, bills: &HashMap<String, Bill>) -> Result<(), CacheError> {
        write_json_atomic(&self.path("bills.json"), bills)
    }

    pub fn load_committees(&self) -> Result<Vec<Committee>, CacheError> {
        read_json(&self.path("committees.json"))
    }

    pub fn save_committees(&self, committees: &[Committee]) -> Result<(), CacheError> {
        write_json_atomic(&self.path("committees.json"), &committees)
    }

    pub fn load_committee_rosters(&self) -> Result<HashMap<String, Vec<CommitteeSeat>>, CacheError> {
        read_json(&self.path("committee_rosters.json"))
    }

    pub fn save_committee_rosters(&self, rosters: &HashMap<String, Vec<CommitteeSeat>>) -> Result<(), CacheError> {
        write_json_atomic(&self.path("committee_rosters.json"), rosters)
    }

    pub fn load_committee_bills(&self) -> Result<HashMap<String, Vec<String>>, CacheError> {
        read_json(&self.path("committee_bills.json"))
    }

    pub fn save_committee_bills(&self, bills: &HashMap<String, Vec<String>>) -> Result<(), CacheError> {
        write_json_atomic(&self.path("committee_bills.json"), bills)
    }

    pub fn load_vote_events(&self) -> Result<Vec<VoteEvent>, CacheError> {
        read_json(&self.path("vote_events.json"))
    }

    pub fn save_vote_events(&self, events: &[VoteEvent]) -> Result<(), CacheError> {
        write_json_atomic(&self.path("vote_events.json"), &events)
    }

    pub fn load_witness_slips(&self) -> Result<Vec<WitnessSlip>, CacheError> {
        read_json(&self.path("witness_slips.json"))
    }

    pub fn save_witness_slips(&self, slips: &[WitnessSlip]) -> Result<(), CacheError> {
        write_json_atomic(&self.path("witness_slips.json"), &slips)
    }

    pub fn load_scorecards(&self) -> Result<HashMap<String, Scorecard>, CacheError> {
        read_json(&self.path("scorecards.json"))
    }

    pub fn save_scorecards(&self, scorecards: &HashMap<String, Scorecard>) -> Result<(), CacheError> {
        write_json_atomic(&self.path("scorecards.json"), scorecards)
    }

    pub fn load_moneyball(&self) -> Result<HashMap<String, MoneyballProfile>, CacheError> {
        read_json(&self.path("moneyball.json"))
    }

    pub fn save_moneyball(&self, profiles: &HashMap<String, MoneyballProfile>) -> Result<(), CacheError> {
        write_json_atomic(&self.path("moneyball.json"), profiles)
    }

    pub fn load_metadata(&self) -> Result<ScrapeMetadata, CacheError> {
        read_json(&self.path("scrape_metadata.json"))
    }

    pub fn save_metadata(&self, metadata: &ScrapeMetadata) -> Result<(), CacheError> {
        write_json_atomic(&self.path("scrape_metadata.json"), metadata)
    }

    /// The analytics cache is valid only if its mtime is newer than
    /// `members.json`'s mtime. Returns `false` (treated as stale) when any
    /// of the three files is simply absent.
    pub fn is_analytics_fresh(&self) -> Result<bool, CacheError> {
        let members_mtime = mtime(&self.path("members.json"))?;
        let scorecards_mtime = mtime(&self.path("scorecards.json"))?;
        let moneyball_mtime = mtime(&self.path("moneyball.json"))?;

        let (Some(members_mtime), Some(scorecards_mtime), Some(moneyball_mtime)) =
            (members_mtime, scorecards_mtime, moneyball_mtime)
        else {
            return Ok(false);
        };

        Ok(scorecards_mtime > members_mtime && moneyball_mtime > members_mtime)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn mtime(path: &Path) -> Result<Option<std::time::SystemTime>, CacheError> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.modified().map_err(|source| CacheError::Read {
            path: path.display().to_string(),
            source,
        })?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(CacheError::Read {
            path: path.display().to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ilga_core::{Chamber, Party};

    #[test]
    fn round_trips_members() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path());
        let members = vec![Member::new("M1", "Jane Doe", Chamber::Senate, Party::Democrat, 6)];
        store.save_members(&members).unwrap();
        let loaded = store.load_members().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].member_id, "M1");
    }

    #[test]
    fn missing_cache_yields_empty_collections() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path());
        assert!(store.load_members().unwrap().is_empty());
        assert!(store.load_bills().unwrap().is_empty());
    }

    #[test]
    fn staleness_requires_analytics_written_after_members() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path());
        store.save_members(&[]).unwrap();
        assert!(!store.is_analytics_fresh().unwrap());

        std::thread::sleep(std::time::Duration::from_millis(10));
        store.save_scorecards(&HashMap::new()).unwrap();
        store.save_moneyball(&HashMap::new()).unwrap();
        assert!(store.is_analytics_fresh().unwrap());
    }
}
