//! Domain records hydrated from the cache into the in-memory graph.

mod bill;
mod committee;
mod member;
mod scorecard;
mod vote;
mod witness_slip;

pub use bill::*;
pub use committee::*;
pub use member::*;
pub use scorecard::*;
pub use vote::*;
pub use witness_slip::*;

use serde::{Deserialize, Serialize};

/// Legislative chamber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    #[must_use]
    pub fn from_bill_prefix(prefix: &str) -> Option<Self> {
        let prefix = prefix.to_ascii_uppercase();
        if prefix.starts_with('H') {
            Some(Self::House)
        } else if prefix.starts_with('S') {
            Some(Self::Senate)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Chamber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::House => write!(f, "House"),
            Self::Senate => write!(f, "Senate"),
        }
    }
}

/// Party affiliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    Democrat,
    Republican,
    Other,
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Democrat => write!(f, "Democrat"),
            Self::Republican => write!(f, "Republican"),
            Self::Other => write!(f, "Other"),
        }
    }
}
