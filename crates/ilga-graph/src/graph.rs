//! The hydrated, in-memory graph. Built once at boot (or at
//! the end of a scrape) and thereafter immutable; GraphQL resolvers read
//! it lock-free from behind an `Arc`.

use ilga_core::{Bill, Committee, Member, VoteEvent, WitnessSlip};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct Graph {
    pub members: HashMap<String, Member>,
    pub bills: HashMap<String, Bill>,
    pub committees: HashMap<String, Committee>,
    pub vote_events: Vec<VoteEvent>,
    pub witness_slips: Vec<WitnessSlip>,
    bill_number_index: HashMap<String, String>,
    member_name_index: HashMap<String, String>,
}

impl Graph {
    #[must_use]
    pub fn new(
        members: HashMap<String, Member>,
        bills: HashMap<String, Bill>,
        committees: HashMap<String, Committee>,
        vote_events: Vec<VoteEvent>,
        witness_slips: Vec<WitnessSlip>,
    ) -> Self {
        let bill_number_index = bills.values().map(|b| (b.bill_number.clone(), b.leg_id.clone())).collect();
        let member_name_index = members.values().map(|m| (m.name.clone(), m.member_id.clone())).collect();

        Self {
            members,
            bills,
            committees,
            vote_events,
            witness_slips,
            bill_number_index,
            member_name_index,
        }
    }

    #[must_use]
    pub fn member(&self, member_id: &str) -> Option<&Member> {
        self.members.get(member_id)
    }

    #[must_use]
    pub fn member_by_name(&self, name: &str) -> Option<&Member> {
        self.member_name_index.get(name).and_then(|id| self.members.get(id))
    }

    #[must_use]
    pub fn bill(&self, leg_id: &str) -> Option<&Bill> {
        self.bills.get(leg_id)
    }

    #[must_use]
    pub fn bill_by_number(&self, bill_number: &str) -> Option<&Bill> {
        self.bill_number_index.get(bill_number).and_then(|id| self.bills.get(id))
    }

    #[must_use]
    pub fn committee(&self, code: &str) -> Option<&Committee> {
        self.committees.get(code)
    }

    #[must_use]
    pub fn votes_for_bill(&self, bill_number: &str) -> Vec<&VoteEvent> {
        self.vote_events.iter().filter(|v| v.bill_number == bill_number).collect()
    }

    #[must_use]
    pub fn slips_for_bill(&self, bill_number: &str) -> Vec<&WitnessSlip> {
        self.witness_slips.iter().filter(|s| s.bill_number == bill_number).collect()
    }

    #[must_use]
    pub fn members_in_chamber(&self, chamber: ilga_core::Chamber) -> Vec<&Member> {
        self.members.values().filter(|m| m.chamber == chamber).collect()
    }
}
