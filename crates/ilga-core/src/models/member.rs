use super::Chamber;
use super::Party;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Office kind for a legislator's physical offices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficeKind {
    Springfield,
    District,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Office {
    pub kind: OfficeKind,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
}

/// One contiguous span of service in a given chamber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRange {
    pub start_year: i32,
    /// `None` means "present" (open-ended).
    pub end_year: Option<i32>,
    pub chamber: Chamber,
}

/// A legislator, as hydrated into the in-memory graph.
///
/// `bill_ids` / `primary_bill_ids` hold `leg_id`s; the Graph Builder resolves
/// these to `Bill` pointers at hydration time (see `ilga-graph`). On disk
/// (`members.json`) only the IDs are stored, never embedded bill objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub member_id: String,
    pub name: String,
    pub chamber: Chamber,
    pub party: Party,
    pub district: u32,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub career_ranges: Vec<CareerRange>,
    #[serde(default)]
    pub offices: Vec<Office>,
    #[serde(default)]
    pub committee_codes: BTreeSet<String>,
    /// Aggregated leadership/chair titles, feeding institutional weighting.
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub bill_ids: BTreeSet<String>,
    #[serde(default)]
    pub primary_bill_ids: BTreeSet<String>,
    #[serde(default)]
    pub seat_block_id: Option<String>,
    #[serde(default)]
    pub seat_ring: Option<String>,
    #[serde(default)]
    pub seatmate_names: Vec<String>,
    #[serde(default)]
    pub seatmate_affinity: Option<f64>,
}

impl Member {
    #[must_use]
    pub fn new(member_id: impl Into<String>, name: impl Into<String>, chamber: Chamber, party: Party, district: u32) -> Self {
        Self {
            member_id: member_id.into(),
            name: name.into(),
            chamber,
            party,
            district,
            role: None,
            career_ranges: Vec::new(),
            offices: Vec::new(),
            committee_codes: BTreeSet::new(),
            roles: Vec::new(),
            bill_ids: BTreeSet::new(),
            primary_bill_ids: BTreeSet::new(),
            seat_block_id: None,
            seat_ring: None,
            seatmate_names: Vec::new(),
            seatmate_affinity: None,
        }
    }

    /// `primary_bill_ids` must always be a subset of `bill_ids`.
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        self.primary_bill_ids.is_subset(&self.bill_ids) && self.district >= 1
    }

    /// Case-folded surname, for use with the name normalization rule.
    #[must_use]
    pub fn surname(&self) -> &str {
        self.name.rsplit(' ').next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_subset_invariant() {
        let mut m = Member::new("M1", "Jane Doe", Chamber::Senate, Party::Democrat, 6);
        m.bill_ids.insert("SB0001".into());
        m.primary_bill_ids.insert("SB0001".into());
        assert!(m.invariants_hold());

        m.primary_bill_ids.insert("SB9999".into());
        assert!(!m.invariants_hold());
    }
}
