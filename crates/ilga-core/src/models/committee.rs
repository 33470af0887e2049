use super::Chamber;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitteeRole {
    Chair,
    ViceChair,
    Member,
    MinoritySpokesperson,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitteeSeat {
    pub member_id: String,
    pub role: CommitteeRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Committee {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub parent_code: Option<String>,
    pub chamber: Chamber,
    #[serde(default)]
    pub members: Vec<CommitteeSeat>,
    #[serde(default)]
    pub bill_ids: BTreeSet<String>,
}

impl Committee {
    #[must_use]
    pub fn chair_id(&self) -> Option<&str> {
        self.members
            .iter()
            .find(|s| s.role == CommitteeRole::Chair)
            .map(|s| s.member_id.as_str())
    }
}
