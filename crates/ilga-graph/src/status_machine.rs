//! Bill status state machine. This is the authoritative,
//! graph-level re-derivation: it has the complete `action_history` in hand
//! and additionally applies the "Dead" display overlay, which the
//! standalone per-page parser (`ilga_parse::bill::derive_status`) cannot,
//! since that needs "now".

use chrono::NaiveDate;
use ilga_core::{ActionRecord, Bill, BillStatus, Chamber};

/// Derives `(status, pipeline_depth, is_dead)` for a bill from its
/// `action_history`, given the chamber it originated in and the current
/// date. `pipeline_depth` is monotonically non-decreasing over any
/// prefix of the history.
#[must_use]
pub fn derive(history: &[ActionRecord], own_chamber: Chamber, today: NaiveDate, dead_after_days: i64) -> (BillStatus, u8, bool) {
    let mut status = BillStatus::Filed;
    let other_chamber_passed_third_reading = history
        .iter()
        .any(|a| a.chamber != own_chamber && contains_ci(&a.action_text, "third reading - passed"));

    for action in history {
        status = advance(status, &action.action_text);
    }

    if status == BillStatus::PassedChamber && other_chamber_passed_third_reading {
        status = BillStatus::PassedBoth;
    }

    let depth = status.pipeline_depth();

    let is_terminal = matches!(status, BillStatus::Signed | BillStatus::Vetoed);
    let is_dead = !is_terminal
        && history
            .last()
            .is_some_and(|last| (today - last.date).num_days() > dead_after_days);

    (status, depth, is_dead)
}

/// Applies the derivation to a `Bill` in place.
pub fn apply(bill: &mut Bill, today: NaiveDate, dead_after_days: i64) {
    let (status, depth, is_dead) = derive(&bill.action_history, bill.chamber, today, dead_after_days);
    bill.status = status;
    bill.pipeline_depth = depth;
    bill.is_dead = is_dead;
}

fn advance(current: BillStatus, action_text: &str) -> BillStatus {
    let mut next = current;
    if contains_ci(action_text, "assigned to") || contains_ci(action_text, "referred to") {
        next = max_status(next, BillStatus::InCommittee);
    }
    if contains_ci(action_text, "third reading - passed") {
        next = max_status(next, BillStatus::PassedChamber);
    }
    if contains_ci(action_text, "sent to the governor") {
        next = max_status(next, BillStatus::SentToGovernor);
    }
    if contains_ci(action_text, "public act") || contains_ci(action_text, "governor approved") {
        next = max_status(next, BillStatus::Signed);
    }
    if contains_ci(action_text, "total veto") || contains_ci(action_text, "amendatory veto") {
        next = max_status(next, BillStatus::Vetoed);
    }
    next
}

fn max_status(a: BillStatus, b: BillStatus) -> BillStatus {
    if rank(b) > rank(a) {
        b
    } else {
        a
    }
}

fn rank(status: BillStatus) -> u8 {
    match status {
        BillStatus::Filed => 0,
        BillStatus::InCommittee => 1,
        BillStatus::PassedChamber => 2,
        BillStatus::PassedBoth => 3,
        BillStatus::SentToGovernor => 4,
        BillStatus::Signed | BillStatus::Vetoed => 5,
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(days_after_epoch: i64, text: &str, chamber: Chamber) -> ActionRecord {
        ActionRecord {
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + chrono::Duration::days(days_after_epoch),
            action_text: text.to_string(),
            chamber,
        }
    }

    #[test]
    fn monotonic_over_prefix() {
        let history = vec![
            action(0, "Filed", Chamber::House),
            action(5, "Assigned to Executive", Chamber::House),
            action(40, "Third Reading - Passed", Chamber::House),
            action(70, "Sent to the Governor", Chamber::House),
            action(100, "Public Act", Chamber::House),
        ];

        let today = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let mut last_depth = 0;
        for i in 1..=history.len() {
            let (_, depth, _) = derive(&history[..i], Chamber::House, today, 548);
            assert!(depth >= last_depth, "pipeline_depth regressed at step {i}");
            last_depth = depth;
        }
    }

    #[test]
    fn crossover_requires_other_chamber() {
        let history = vec![
            action(0, "Third Reading - Passed", Chamber::House),
            action(10, "Third Reading - Passed", Chamber::Senate),
        ];
        let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let (status, depth, _) = derive(&history, Chamber::House, today, 548);
        assert_eq!(status, BillStatus::PassedBoth);
        assert_eq!(depth, 3);
    }

    #[test]
    fn stale_non_terminal_bill_is_dead_but_keeps_depth() {
        let history = vec![action(0, "Assigned to Executive", Chamber::House)];
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + chrono::Duration::days(600);
        let (status, depth, is_dead) = derive(&history, Chamber::House, today, 548);
        assert_eq!(status, BillStatus::InCommittee);
        assert_eq!(depth, 1);
        assert!(is_dead);
    }

    #[test]
    fn signed_bill_is_never_dead() {
        let history = vec![
            action(0, "Filed", Chamber::House),
            action(5, "Public Act", Chamber::House),
        ];
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let (_, _, is_dead) = derive(&history, Chamber::House, today, 548);
        assert!(!is_dead);
    }
}
