//! Advocacy Selector: turns a ZIP + optional policy category
//! into a ranked set of outreach cards.

use crate::crosswalk::Crosswalk;
use crate::error::AdvocacyError;
use crate::policy;
use ilga_core::{Chamber, Member, MoneyballProfile, Scorecard};
use ilga_graph::Graph;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    YourSenator,
    YourRepresentative,
    PowerBroker,
    PotentialAlly,
    SuperAlly,
}

impl CardKind {
    /// Static, role-specific script hint.
    #[must_use]
    pub fn script_hint(self) -> &'static str {
        match self {
            Self::YourSenator => "Introduce yourself as a constituent and ask where they stand on this issue.",
            Self::YourRepresentative => "Introduce yourself as a constituent and ask for a co-sponsorship commitment.",
            Self::PowerBroker => "Acknowledge their committee role; ask them to move the bill to a vote.",
            Self::PotentialAlly => "Thank them for past support; ask them to recruit a colleague across the aisle.",
            Self::SuperAlly => "Thank them for being both a gatekeeper and a cross-aisle voice; ask them to lead.",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdvocacyCard {
    pub kind: CardKind,
    pub member_id: String,
    pub member_name: String,
    pub why_this_target: String,
    pub script_hint: &'static str,
}

/// Selects the advocacy cards for `zip` and optional `policy_category`.
///
/// # Errors
/// Returns `AdvocacyError::ZipNotFound` if `zip` has no crosswalk entry.
pub fn select(
    graph: &Graph,
    scorecards: &HashMap<String, Scorecard>,
    profiles: &HashMap<String, MoneyballProfile>,
    crosswalk: &Crosswalk,
    zip: &str,
    policy_category: Option<&str>,
) -> Result<Vec<AdvocacyCard>, AdvocacyError> {
    let districts = crosswalk.lookup(zip)?;
    let mut cards = Vec::new();

    if let Some(senator) = find_by_district(graph, Chamber::Senate, districts.senate_district) {
        cards.push(AdvocacyCard {
            kind: CardKind::YourSenator,
            member_id: senator.member_id.clone(),
            member_name: senator.name.clone(),
            why_this_target: format!("{} represents Senate district {} where this ZIP is located.", senator.name, districts.senate_district),
            script_hint: CardKind::YourSenator.script_hint(),
        });
    }

    if let Some(representative) = find_by_district(graph, Chamber::House, districts.house_district) {
        cards.push(AdvocacyCard {
            kind: CardKind::YourRepresentative,
            member_id: representative.member_id.clone(),
            member_name: representative.name.clone(),
            why_this_target: format!(
                "{} represents House district {} where this ZIP is located.",
                representative.name, districts.house_district
            ),
            script_hint: CardKind::YourRepresentative.script_hint(),
        });
    }

    let candidates = relevant_senators(graph, policy_category);
    if candidates.is_empty() {
        // The fallback chain always broadens to the full chamber, so this
        // never actually fires; kept as a defensive boundary.
        return Err(AdvocacyError::NoTargetsFound);
    }

    let power_broker = candidates
        .iter()
        .max_by(|a, b| {
            let weight_a = profiles.get(&a.member_id).map_or(0.0, |p| p.institutional_weight);
            let weight_b = profiles.get(&b.member_id).map_or(0.0, |p| p.institutional_weight);
            let score_a = profiles.get(&a.member_id).map_or(0.0, |p| p.moneyball_score);
            let score_b = profiles.get(&b.member_id).map_or(0.0, |p| p.moneyball_score);
            weight_a.total_cmp(&weight_b).then(score_a.total_cmp(&score_b))
        })
        .expect("candidates is non-empty");

    let top_bridge = candidates
        .iter()
        .max_by(|a, b| {
            let bridge_a = scorecards.get(&a.member_id).map_or(0.0, |s| s.bridge_score);
            let bridge_b = scorecards.get(&b.member_id).map_or(0.0, |s| s.bridge_score);
            bridge_a.total_cmp(&bridge_b)
        })
        .expect("candidates is non-empty");

    if top_bridge.member_id == power_broker.member_id {
        cards.push(AdvocacyCard {
            kind: CardKind::SuperAlly,
            member_id: power_broker.member_id.clone(),
            member_name: power_broker.name.clone(),
            why_this_target: format!(
                "{} both holds institutional sway on this issue and has a track record of cross-party co-sponsorship.",
                power_broker.name
            ),
            script_hint: CardKind::SuperAlly.script_hint(),
        });
    } else {
        cards.push(AdvocacyCard {
            kind: CardKind::PowerBroker,
            member_id: power_broker.member_id.clone(),
            member_name: power_broker.name.clone(),
            why_this_target: format!("{} carries the most institutional weight among senators on the relevant committees.", power_broker.name),
            script_hint: CardKind::PowerBroker.script_hint(),
        });
        cards.push(AdvocacyCard {
            kind: CardKind::PotentialAlly,
            member_id: top_bridge.member_id.clone(),
            member_name: top_bridge.name.clone(),
            why_this_target: format!("{} has the strongest record of cross-party co-sponsorship on this issue.", top_bridge.name),
            script_hint: CardKind::PotentialAlly.script_hint(),
        });
    }

    Ok(cards)
}

fn find_by_district(graph: &Graph, chamber: Chamber, district: u32) -> Option<&Member> {
    graph.members.values().find(|m| m.chamber == chamber && m.district == district)
}

/// Senators on committees relevant to `policy_category`, falling back to
/// every senator when the category is absent or the committee filter
/// produces no candidates (the fallback chain).
fn relevant_senators<'g>(graph: &'g Graph, policy_category: Option<&str>) -> Vec<&'g Member> {
    let all_senators: Vec<&Member> = graph.members_in_chamber(Chamber::Senate);

    let Some(category) = policy_category else { return all_senators };
    let Some(codes) = policy::committees_for(category) else { return all_senators };

    let filtered: Vec<&Member> = all_senators.iter().copied().filter(|m| codes.iter().any(|c| m.committee_codes.contains(*c))).collect();

    if filtered.is_empty() {
        all_senators
    } else {
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ilga_core::Party;

    fn senator(id: &str, district: u32, codes: &[&str]) -> Member {
        let mut m = Member::new(id, format!("Senator {id}"), Chamber::Senate, Party::Democrat, district);
        m.committee_codes = codes.iter().map(|c| (*c).to_string()).collect();
        m
    }

    #[test]
    fn zip_not_found_surfaces() {
        let graph = Graph::default();
        let crosswalk = Crosswalk::dev_seed();
        let result = select(&graph, &HashMap::new(), &HashMap::new(), &crosswalk, "00000", None);
        assert!(matches!(result, Err(AdvocacyError::ZipNotFound)));
    }

    #[test]
    fn power_broker_and_ally_merge_into_super_ally() {
        let mut graph = Graph::default();
        graph.members.insert("S1".into(), senator("S1", 50, &["EDU"]));
        graph.members.insert("S2".into(), senator("S2", 51, &["EDU"]));

        let mut profiles = HashMap::new();
        profiles.insert("S1".into(), MoneyballProfile { institutional_weight: 1.0, moneyball_score: 90.0, ..Default::default() });
        profiles.insert("S2".into(), MoneyballProfile { institutional_weight: 0.0, moneyball_score: 10.0, ..Default::default() });

        let mut scorecards = HashMap::new();
        scorecards.insert("S1".into(), Scorecard { bridge_score: 0.9, ..Default::default() });
        scorecards.insert("S2".into(), Scorecard { bridge_score: 0.1, ..Default::default() });

        let crosswalk = Crosswalk::dev_seed();
        let cards = select(&graph, &scorecards, &profiles, &crosswalk, "62701", Some("education")).unwrap();

        assert!(cards.iter().any(|c| c.kind == CardKind::SuperAlly));
        assert!(!cards.iter().any(|c| c.kind == CardKind::PowerBroker));
    }

    #[test]
    fn distinct_broker_and_ally_produce_two_cards() {
        let mut graph = Graph::default();
        graph.members.insert("S1".into(), senator("S1", 50, &["EDU"]));
        graph.members.insert("S2".into(), senator("S2", 51, &["EDU"]));

        let mut profiles = HashMap::new();
        profiles.insert("S1".into(), MoneyballProfile { institutional_weight: 1.0, moneyball_score: 90.0, ..Default::default() });
        profiles.insert("S2".into(), MoneyballProfile { institutional_weight: 0.0, moneyball_score: 10.0, ..Default::default() });

        let mut scorecards = HashMap::new();
        scorecards.insert("S1".into(), Scorecard { bridge_score: 0.1, ..Default::default() });
        scorecards.insert("S2".into(), Scorecard { bridge_score: 0.9, ..Default::default() });

        let crosswalk = Crosswalk::dev_seed();
        let cards = select(&graph, &scorecards, &profiles, &crosswalk, "62701", Some("education")).unwrap();

        assert!(cards.iter().any(|c| c.kind == CardKind::PowerBroker && c.member_id == "S1"));
        assert!(cards.iter().any(|c| c.kind == CardKind::PotentialAlly && c.member_id == "S2"));
    }
}
