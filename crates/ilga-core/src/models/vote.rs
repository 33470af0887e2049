use super::Chamber;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteKind {
    CommitteeVote,
    FloorThirdReading,
    Concurrence,
    Override,
    Other,
}

/// A name as reported on a roll call, with reconciliation against the
/// current member set performed by the Graph Builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteName {
    pub reported_name: String,
    #[serde(default)]
    pub member_id: Option<String>,
}

impl VoteName {
    #[must_use]
    pub fn unresolved(reported_name: impl Into<String>) -> Self {
        Self {
            reported_name: reported_name.into(),
            member_id: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteEvent {
    pub bill_number: String,
    pub chamber: Chamber,
    pub date: NaiveDate,
    pub kind: VoteKind,
    #[serde(default)]
    pub committee_code: Option<String>,
    #[serde(default)]
    pub yea_votes: Vec<VoteName>,
    #[serde(default)]
    pub nay_votes: Vec<VoteName>,
    #[serde(default)]
    pub present_votes: Vec<VoteName>,
    #[serde(default)]
    pub nv_votes: Vec<VoteName>,
    pub motion_text: String,
}

impl VoteEvent {
    /// Sort key: vote events per bill are ordered by (date, kind).
    #[must_use]
    pub fn sort_key(&self) -> (NaiveDate, u8) {
        let kind_rank = match self.kind {
            VoteKind::CommitteeVote => 0,
            VoteKind::FloorThirdReading => 1,
            VoteKind::Concurrence => 2,
            VoteKind::Override => 3,
            VoteKind::Other => 4,
        };
        (self.date, kind_rank)
    }
}
