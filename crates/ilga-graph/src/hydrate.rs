//! Graph Builder orchestration.

use crate::error::GraphError;
use crate::graph::Graph;
use crate::reconcile::reconcile_vote_events;
use crate::status_machine;
use chrono::Utc;
use ilga_cache::CacheStore;
use ilga_core::Committee;

/// Loads every cache file, resolves bill/committee references, re-derives
/// each bill's status/pipeline-depth/dead-overlay, sorts vote events, and
/// reconciles roll-call names against the member set.
pub fn hydrate(cache: &CacheStore, dead_after_days: i64) -> Result<Graph, GraphError> {
    let mut bills = cache.load_bills()?;
    let today = Utc::now().date_naive();
    for bill in bills.values_mut() {
        status_machine::apply(bill, today, dead_after_days);
    }

    let members = cache.load_members()?.into_iter().map(|m| (m.member_id.clone(), m)).collect();

    let mut committees: Vec<Committee> = cache.load_committees()?;
    let rosters = cache.load_committee_rosters()?;
    let committee_bills = cache.load_committee_bills()?;
    for committee in &mut committees {
        if let Some(seats) = rosters.get(&committee.code) {
            committee.members = seats.clone();
        }
        if let Some(bill_ids) = committee_bills.get(&committee.code) {
            committee.bill_ids = bill_ids.iter().cloned().collect();
        }
    }
    let committees = committees.into_iter().map(|c| (c.code.clone(), c)).collect();

    let mut vote_events = cache.load_vote_events()?;
    vote_events.sort_by_key(ilga_core::VoteEvent::sort_key);
    reconcile_vote_events(&mut vote_events, &members);

    let witness_slips = cache.load_witness_slips()?;

    Ok(Graph::new(members, bills, committees, vote_events, witness_slips))
}
