use super::Chamber;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Coarse legislative type, derived from the bill number's prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillKind {
    /// HB / SB
    Substantive,
    /// HR / SR / HJR / SJR
    Resolution,
    /// *CA suffix
    ConstitutionalAmendment,
}

impl BillKind {
    #[must_use]
    pub fn from_bill_number(bill_number: &str) -> Self {
        let upper = bill_number.to_ascii_uppercase();
        if upper.ends_with("CA") {
            Self::ConstitutionalAmendment
        } else if upper.starts_with("HB") || upper.starts_with("SB") {
            Self::Substantive
        } else {
            Self::Resolution
        }
    }
}

/// Derived lifecycle status. See `ilga-graph`'s bill status state machine
/// for how this is computed from `action_history`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillStatus {
    Filed,
    InCommittee,
    PassedChamber,
    PassedBoth,
    SentToGovernor,
    Signed,
    Vetoed,
}

impl BillStatus {
    /// Ordinal used as `pipeline_depth` (0..6). `Vetoed` shares depth 6
    /// with `Signed` but is distinguished by the `status` field itself.
    #[must_use]
    pub fn pipeline_depth(self) -> u8 {
        match self {
            Self::Filed => 0,
            Self::InCommittee => 1,
            Self::PassedChamber => 2,
            Self::PassedBoth => 3,
            Self::SentToGovernor => 4,
            Self::Signed | Self::Vetoed => 6,
        }
    }
}

/// One row of a bill's legislative history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRecord {
    pub date: NaiveDate,
    pub action_text: String,
    pub chamber: Chamber,
}

/// A bill, keyed by its stable `leg_id`. Stored exactly once in
/// `bills.json`; members reference it by ID only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub leg_id: String,
    pub bill_number: String,
    pub chamber: Chamber,
    pub kind: BillKind,
    pub description: String,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub status_url: Option<String>,
    #[serde(default)]
    pub primary_sponsor: Option<String>,
    /// Primary sponsor first, then co-sponsors in filing order.
    #[serde(default)]
    pub sponsor_ids: Vec<String>,
    /// Cross-chamber sponsors picked up after crossover. Empty for
    /// House-originating bills keep this empty unless they picked up
    /// sponsors after crossover.
    #[serde(default)]
    pub house_sponsor_ids: Vec<String>,
    #[serde(default)]
    pub last_action: Option<String>,
    #[serde(default)]
    pub last_action_date: Option<NaiveDate>,
    pub status: BillStatus,
    #[serde(default)]
    pub action_history: Vec<ActionRecord>,
    pub pipeline_depth: u8,
    /// Display-only overlay: true once the bill has gone 18+ months
    /// without activity and never reached `Signed`/`Vetoed`.
    /// The numeric `pipeline_depth` is unaffected.
    #[serde(default)]
    pub is_dead: bool,
}

impl Bill {
    /// True for bills that read as procedural placeholders.
    #[must_use]
    pub fn is_shell(&self) -> bool {
        let desc = self.description.trim();
        if desc.chars().count() < 50 {
            return true;
        }
        whole_word_match(desc, "technical") || whole_word_match(desc, "shell")
    }

    #[must_use]
    pub fn primary_sponsor_id(&self) -> Option<&str> {
        self.sponsor_ids.first().map(String::as_str)
    }

    #[must_use]
    pub fn co_sponsor_ids(&self) -> &[String] {
        if self.sponsor_ids.len() <= 1 {
            &[]
        } else {
            &self.sponsor_ids[1..]
        }
    }
}

fn whole_word_match(haystack: &str, word: &str) -> bool {
    haystack
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| token.eq_ignore_ascii_case(word))
}
