//! Scorecard computation.

use ilga_core::{BillKind, BillStatus, Scorecard};
use ilga_graph::Graph;
use std::collections::HashMap;

/// Computes a `Scorecard` for every member from their `primary_bill_ids`.
#[must_use]
pub fn compute_scorecards(graph: &Graph) -> HashMap<String, Scorecard> {
    graph.members.keys().map(|id| (id.clone(), compute_one(graph, id))).collect()
}

fn compute_one(graph: &Graph, member_id: &str) -> Scorecard {
    let Some(member) = graph.member(member_id) else {
        return Scorecard::default();
    };

    let mut substantive = Vec::new();
    let mut resolutions = Vec::new();
    for bill_id in &member.primary_bill_ids {
        let Some(bill) = graph.bill(bill_id) else { continue };
        match bill.kind {
            BillKind::Substantive => substantive.push(bill),
            BillKind::Resolution => resolutions.push(bill),
            BillKind::ConstitutionalAmendment => {}
        }
    }

    let bills_introduced = substantive.len() as u32;
    let shell_bill_count = substantive.iter().filter(|b| b.is_shell()).count() as u32;
    let eligible: Vec<_> = substantive.iter().filter(|b| !b.is_shell()).copied().collect();

    let laws_passed = eligible.iter().filter(|b| b.status == BillStatus::Signed).count() as u32;
    let law_success_rate = if eligible.is_empty() { 0.0 } else { f64::from(laws_passed) / eligible.len() as f64 };

    let avg_pipeline_depth = if eligible.is_empty() {
        0.0
    } else {
        eligible.iter().map(|b| f64::from(b.pipeline_depth)).sum::<f64>() / eligible.len() as f64
    };

    let magnet_score = if eligible.is_empty() {
        0.0
    } else {
        eligible.iter().map(|b| (b.sponsor_ids.len().saturating_sub(1)) as f64).sum::<f64>() / eligible.len() as f64
    };

    let bridge_score = if eligible.is_empty() {
        0.0
    } else {
        let bridging = eligible.iter().filter(|b| has_cross_party_cosponsor(graph, b)).count();
        bridging as f64 / eligible.len() as f64
    };

    let resolutions_filed = resolutions.len() as u32;
    let resolutions_passed = resolutions.iter().filter(|b| b.status == BillStatus::Signed).count() as u32;
    let resolution_pass_rate =
        if resolutions_filed == 0 { 0.0 } else { f64::from(resolutions_passed) / f64::from(resolutions_filed) };

    Scorecard {
        bills_introduced,
        laws_passed,
        law_success_rate,
        resolutions_filed,
        resolutions_passed,
        resolution_pass_rate,
        magnet_score,
        bridge_score,
        avg_pipeline_depth,
        shell_bill_count,
    }
}

fn has_cross_party_cosponsor(graph: &Graph, bill: &ilga_core::Bill) -> bool {
    let Some(primary_id) = bill.primary_sponsor_id() else { return false };
    let Some(primary_party) = graph.member(primary_id).map(|m| m.party) else { return false };

    bill.co_sponsor_ids()
        .iter()
        .filter_map(|id| graph.member(id))
        .any(|cosponsor| cosponsor.party != primary_party)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ilga_core::{ActionRecord, Bill, Chamber, Member, Party};

    fn bill(leg_id: &str, desc: &str, sponsors: &[&str], status: BillStatus, depth: u8) -> Bill {
        Bill {
            leg_id: leg_id.into(),
            bill_number: format!("HB{leg_id}"),
            chamber: Chamber::House,
            kind: BillKind::Substantive,
            description: desc.into(),
            synopsis: String::new(),
            status_url: None,
            primary_sponsor: None,
            sponsor_ids: sponsors.iter().map(|s| (*s).to_string()).collect(),
            house_sponsor_ids: vec![],
            last_action: None,
            last_action_date: None,
            status,
            action_history: Vec::<ActionRecord>::new(),
            pipeline_depth: depth,
            is_dead: false,
        }
    }

    #[test]
    fn shell_bill_excluded_from_rate_but_counted() {
        let mut graph = Graph::default();
        let mut m = Member::new("M1", "Jane Doe", Chamber::House, Party::Democrat, 1);
        m.primary_bill_ids.insert("1".into());
        m.bill_ids.insert("1".into());
        graph.members.insert("M1".into(), m);
        graph.bills.insert("1".into(), bill("1", "Technical", &["M1"], BillStatus::Filed, 0));

        let card = compute_one(&graph, "M1");
        assert_eq!(card.bills_introduced, 1);
        assert_eq!(card.shell_bill_count, 1);
        assert_eq!(card.law_success_rate, 0.0);
        assert_eq!(card.avg_pipeline_depth, 0.0);
    }

    #[test]
    fn magnet_and_bridge_scores() {
        let mut graph = Graph::default();
        let mut sponsor = Member::new("M1", "Jane Doe", Chamber::House, Party::Democrat, 1);
        sponsor.primary_bill_ids.insert("1".into());
        sponsor.bill_ids.insert("1".into());
        let cosponsor = Member::new("M2", "John Roe", Chamber::House, Party::Republican, 2);
        graph.members.insert("M1".into(), sponsor);
        graph.members.insert("M2".into(), cosponsor);
        graph.bills.insert(
            "1".into(),
            bill(
                "1",
                "Amends the Criminal Code to create a new felony classification",
                &["M1", "M2"],
                BillStatus::Signed,
                6,
            ),
        );

        let card = compute_one(&graph, "M1");
        assert_eq!(card.laws_passed, 1);
        assert_eq!(card.law_success_rate, 1.0);
        assert_eq!(card.magnet_score, 1.0);
        assert_eq!(card.bridge_score, 1.0);
    }
}
