//! Co-sponsorship degree centrality.
//!
//! Two members share an edge if they co-sponsored at least one substantive
//! bill together. The graph is restricted to a single chamber.

use ilga_core::{BillKind, Chamber};
use ilga_graph::Graph;
use std::collections::{HashMap, HashSet};

/// Raw (un-normalized) co-sponsorship degree for every member in `chamber`.
#[must_use]
pub fn degree_centrality(graph: &Graph, chamber: Chamber) -> HashMap<String, u32> {
    let mut neighbors: HashMap<String, HashSet<String>> = HashMap::new();

    for bill in graph.bills.values() {
        if bill.kind != BillKind::Substantive || bill.chamber != chamber {
            continue;
        }
        let sponsors: Vec<&String> =
            bill.sponsor_ids.iter().filter(|id| graph.member(id).is_some_and(|m| m.chamber == chamber)).collect();

        for (i, a) in sponsors.iter().enumerate() {
            for b in sponsors.iter().skip(i + 1) {
                neighbors.entry((*a).clone()).or_default().insert((*b).clone());
                neighbors.entry((*b).clone()).or_default().insert((*a).clone());
            }
        }
    }

    graph
        .members_in_chamber(chamber)
        .iter()
        .map(|m| (m.member_id.clone(), neighbors.get(&m.member_id).map_or(0, HashSet::len) as u32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ilga_core::{Bill, BillStatus, Member, Party};

    fn bill(leg_id: &str, sponsors: &[&str]) -> Bill {
        Bill {
            leg_id: leg_id.into(),
            bill_number: format!("HB{leg_id}"),
            chamber: Chamber::House,
            kind: BillKind::Substantive,
            description: "Amends the School Code to extend the funding formula review period".into(),
            synopsis: String::new(),
            status_url: None,
            primary_sponsor: None,
            sponsor_ids: sponsors.iter().map(|s| (*s).to_string()).collect(),
            house_sponsor_ids: vec![],
            last_action: None,
            last_action_date: None,
            status: BillStatus::Filed,
            action_history: vec![],
            pipeline_depth: 0,
            is_dead: false,
        }
    }

    #[test]
    fn counts_distinct_cosponsor_edges() {
        let mut graph = Graph::default();
        for id in ["M1", "M2", "M3"] {
            graph.members.insert(id.into(), Member::new(id, id, Chamber::House, Party::Democrat, 1));
        }
        graph.bills.insert("1".into(), bill("1", &["M1", "M2"]));
        graph.bills.insert("2".into(), bill("2", &["M1", "M3"]));

        let degrees = degree_centrality(&graph, Chamber::House);
        assert_eq!(degrees["M1"], 2);
        assert_eq!(degrees["M2"], 1);
        assert_eq!(degrees["M3"], 1);
    }
}
