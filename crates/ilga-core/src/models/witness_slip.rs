use super::Chamber;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlipPosition {
    Proponent,
    Opponent,
    NoPosition,
    Information,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WitnessSlip {
    pub bill_number: String,
    pub chamber: Chamber,
    pub committee_code: String,
    pub hearing_date: NaiveDate,
    pub filer_name: String,
    /// Organisation represented, or "self".
    pub represents: String,
    pub position: SlipPosition,
    pub will_testify: bool,
}

impl WitnessSlip {
    /// Identity tuple per the invariant: one slip per (bill, filer,
    /// hearing_date, position).
    #[must_use]
    pub fn identity(&self) -> (&str, &str, NaiveDate, SlipPosition) {
        (&self.bill_number, &self.filer_name, self.hearing_date, self.position)
    }
}
