//! Seating & Whisper Network (Senate only).
//!
//! The seat chart is static input (not scraped): a sequence of contiguous
//! blocks, each holding districts left-to-right. The **Aisle Rule** falls
//! out of the block structure itself — a block boundary *is* the aisle, so
//! neighbors never cross one, and a district at a block's edge has only one
//! neighbor.

use ilga_core::{BillKind, Chamber};
use ilga_graph::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatRing {
    Inner,
    Outer,
}

impl SeatRing {
    fn as_str(self) -> &'static str {
        match self {
            Self::Inner => "inner",
            Self::Outer => "outer",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeatBlock {
    pub id: String,
    pub ring: SeatRing,
    /// District numbers in seating order, left to right within the block.
    pub districts: Vec<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct SeatChart {
    pub blocks: Vec<SeatBlock>,
}

impl SeatChart {
    /// A representative seed chart for the 59-district Illinois Senate
    /// chamber: six blocks of roughly ten districts, alternating ring.
    #[must_use]
    pub fn illinois_senate_seed() -> Self {
        let mut blocks = Vec::new();
        let mut district = 1u32;
        for block_index in 0..6 {
            let size = if block_index == 5 { 9 } else { 10 };
            let districts = (district..district + size).collect();
            district += size;
            blocks.push(SeatBlock {
                id: format!("block-{}", block_index + 1),
                ring: if block_index % 2 == 0 { SeatRing::Inner } else { SeatRing::Outer },
                districts,
            });
        }
        Self { blocks }
    }

    fn locate(&self, district: u32) -> Option<(&SeatBlock, usize)> {
        self.blocks.iter().find_map(|block| block.districts.iter().position(|d| *d == district).map(|i| (block, i)))
    }

    /// Left/right neighbor district numbers for `district`, or `None` at a
    /// block edge (the aisle).
    #[must_use]
    pub fn neighbor_districts(&self, district: u32) -> (Option<u32>, Option<u32>) {
        let Some((block, index)) = self.locate(district) else { return (None, None) };
        let left = index.checked_sub(1).and_then(|i| block.districts.get(i)).copied();
        let right = block.districts.get(index + 1).copied();
        (left, right)
    }
}

/// Assigns `seat_block_id`, `seat_ring`, `seatmate_names`, and
/// `seatmate_affinity` to every senator in `graph`, and clears all four
/// fields for House members.
pub fn apply_seating(graph: &mut Graph, chart: &SeatChart) {
    let senator_by_district: std::collections::HashMap<u32, String> = graph
        .members
        .values()
        .filter(|m| m.chamber == Chamber::Senate)
        .map(|m| (m.district, m.member_id.clone()))
        .collect();

    let mut assignments = Vec::new();
    for member in graph.members.values() {
        if member.chamber != Chamber::Senate {
            continue;
        }
        let Some((block, _)) = chart.locate(member.district) else { continue };
        let (left, right) = chart.neighbor_districts(member.district);
        let seatmate_ids: Vec<String> =
            [left, right].into_iter().flatten().filter_map(|d| senator_by_district.get(&d).cloned()).collect();
        assignments.push((member.member_id.clone(), block.id.clone(), block.ring, seatmate_ids));
    }

    for (member_id, block_id, ring, seatmate_ids) in assignments {
        let seatmate_names: Vec<String> =
            seatmate_ids.iter().filter_map(|id| graph.members.get(id)).map(|m| m.name.clone()).collect();
        let affinity = seatmate_affinity(graph, &member_id, &seatmate_ids);

        if let Some(member) = graph.members.get_mut(&member_id) {
            member.seat_block_id = Some(block_id);
            member.seat_ring = Some(ring.as_str().to_string());
            member.seatmate_names = seatmate_names;
            member.seatmate_affinity = Some(affinity);
        }
    }

    for member in graph.members.values_mut() {
        if member.chamber == Chamber::House {
            member.seat_block_id = None;
            member.seat_ring = None;
            member.seatmate_names.clear();
            member.seatmate_affinity = None;
        }
    }
}

fn seatmate_affinity(graph: &Graph, member_id: &str, seatmate_ids: &[String]) -> f64 {
    let Some(member) = graph.member(member_id) else { return 0.0 };
    let substantive: Vec<_> = member
        .primary_bill_ids
        .iter()
        .filter_map(|id| graph.bill(id))
        .filter(|b| b.kind == BillKind::Substantive)
        .collect();

    if substantive.is_empty() {
        return 0.0;
    }

    let co_sponsored_with_seatmate =
        substantive.iter().filter(|b| b.sponsor_ids.iter().any(|s| seatmate_ids.contains(s))).count();

    co_sponsored_with_seatmate as f64 / substantive.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use ilga_core::{Bill, BillStatus, Member, Party};

    fn senator(id: &str, district: u32) -> Member {
        Member::new(id, id, Chamber::Senate, Party::Democrat, district)
    }

    #[test]
    fn block_edge_has_one_neighbor() {
        let chart = SeatChart::illinois_senate_seed();
        let (left, right) = chart.neighbor_districts(1);
        assert_eq!(left, None);
        assert!(right.is_some());
    }

    #[test]
    fn neighbors_never_cross_block_boundary() {
        let chart = SeatChart::illinois_senate_seed();
        // District 10 is the last seat in block 1; district 11 starts block 2.
        let (_, right) = chart.neighbor_districts(10);
        assert_eq!(right, None);
    }

    #[test]
    fn house_members_get_null_seating_fields() {
        let mut graph = Graph::default();
        graph.members.insert("H1".into(), Member::new("H1", "Rep One", Chamber::House, Party::Democrat, 1));
        apply_seating(&mut graph, &SeatChart::illinois_senate_seed());
        let m = &graph.members["H1"];
        assert!(m.seat_block_id.is_none());
        assert!(m.seatmate_affinity.is_none());
    }

    #[test]
    fn seatmate_affinity_counts_shared_sponsorship() {
        let mut graph = Graph::default();
        let mut s1 = senator("S1", 1);
        s1.primary_bill_ids.insert("1".into());
        s1.bill_ids.insert("1".into());
        graph.members.insert("S1".into(), s1);
        graph.members.insert("S2".into(), senator("S2", 2));

        graph.bills.insert(
            "1".into(),
            Bill {
                leg_id: "1".into(),
                bill_number: "SB0001".into(),
                chamber: Chamber::Senate,
                kind: BillKind::Substantive,
                description: "Amends the Pension Code to adjust the survivor benefit formula".into(),
                synopsis: String::new(),
                status_url: None,
                primary_sponsor: None,
                sponsor_ids: vec!["S1".into(), "S2".into()],
                house_sponsor_ids: vec![],
                last_action: None,
                last_action_date: None,
                status: BillStatus::Filed,
                action_history: vec![],
                pipeline_depth: 0,
                is_dead: false,
            },
        );

        apply_seating(&mut graph, &SeatChart::illinois_senate_seed());
        assert_eq!(graph.members["S1"].seatmate_affinity, Some(1.0));
    }
}
