//! Moneyball composite: five normalized components plus
//! institutional weight, folded into a single 0-100 score per member.

use crate::centrality::degree_centrality;
use ilga_core::{Chamber, MoneyballProfile, Scorecard};
use ilga_graph::Graph;
use ilga_util::roles::{institutional_weight, LEADERSHIP_THRESHOLD};
use std::collections::HashMap;

const W_EFFECTIVENESS: f64 = 0.24;
const W_PIPELINE: f64 = 0.16;
const W_MAGNET: f64 = 0.16;
const W_BRIDGE: f64 = 0.12;
const W_CENTRALITY: f64 = 0.12;
const W_INSTITUTIONAL: f64 = 0.20;

/// Computes a `MoneyballProfile` for every member, normalizing the
/// `effectiveness`/`pipeline`/`magnet`/`centrality` components against their
/// own chamber's cohort.
#[must_use]
pub fn compute_moneyball(graph: &Graph, scorecards: &HashMap<String, Scorecard>) -> HashMap<String, MoneyballProfile> {
    let mut profiles = HashMap::new();
    for chamber in [Chamber::House, Chamber::Senate] {
        profiles.extend(compute_chamber(graph, scorecards, chamber));
    }
    profiles
}

fn compute_chamber(graph: &Graph, scorecards: &HashMap<String, Scorecard>, chamber: Chamber) -> HashMap<String, MoneyballProfile> {
    let member_ids: Vec<String> = graph.members_in_chamber(chamber).iter().map(|m| m.member_id.clone()).collect();
    let degrees = degree_centrality(graph, chamber);
    let max_degree = degrees.values().copied().max().unwrap_or(0);

    let effectiveness_raw: Vec<(String, f64)> =
        member_ids.iter().map(|id| (id.clone(), scorecards.get(id).map_or(0.0, |s| s.law_success_rate))).collect();
    let pipeline_raw: Vec<(String, f64)> =
        member_ids.iter().map(|id| (id.clone(), scorecards.get(id).map_or(0.0, |s| s.avg_pipeline_depth / 6.0))).collect();
    let magnet_raw: Vec<(String, f64)> =
        member_ids.iter().map(|id| (id.clone(), scorecards.get(id).map_or(0.0, |s| s.magnet_score))).collect();
    let centrality_raw: Vec<(String, f64)> =
        member_ids.iter().map(|id| (id.clone(), f64::from(degrees.get(id).copied().unwrap_or(0)))).collect();

    let effectiveness = normalize_minmax(&effectiveness_raw);
    let pipeline = normalize_minmax(&pipeline_raw);
    let magnet = normalize_minmax(&magnet_raw);
    let centrality = normalize_minmax(&centrality_raw);

    member_ids
        .into_iter()
        .map(|id| {
            let bridge = scorecards.get(&id).map_or(0.0, |s| s.bridge_score);
            let institutional = graph.member(&id).map_or(0.0, |m| institutional_weight(&m.roles));
            let centrality_value = if max_degree == 0 { 0.0 } else { centrality.get(&id).copied().unwrap_or(0.0) };

            let profile = MoneyballProfile {
                effectiveness: effectiveness.get(&id).copied().unwrap_or(0.0),
                pipeline: pipeline.get(&id).copied().unwrap_or(0.0),
                magnet: magnet.get(&id).copied().unwrap_or(0.0),
                bridge,
                centrality: centrality_value,
                institutional_weight: institutional,
                moneyball_score: 0.0,
            };
            let score = composite(&profile);
            (id, MoneyballProfile { moneyball_score: score, ..profile })
        })
        .collect()
}

fn composite(profile: &MoneyballProfile) -> f64 {
    100.0
        * (W_EFFECTIVENESS * profile.effectiveness
            + W_PIPELINE * profile.pipeline
            + W_MAGNET * profile.magnet
            + W_BRIDGE * profile.bridge
            + W_CENTRALITY * profile.centrality
            + W_INSTITUTIONAL * profile.institutional_weight)
}

/// Rescales `values` linearly to `[0, 1]` using the cohort's observed
/// min/max. A degenerate cohort (all equal) maps to `0.0` rather than
/// dividing by zero.
fn normalize_minmax(values: &[(String, f64)]) -> HashMap<String, f64> {
    let min = values.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    let max = values.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    values
        .iter()
        .map(|(id, v)| (id.clone(), if span <= f64::EPSILON { 0.0 } else { (v - min) / span }))
        .collect()
}

/// Ranks `profiles` within `chamber`, optionally excluding leadership
/// (`institutional_weight >= 0.50`), highest score first.
#[must_use]
pub fn rank_chamber(
    graph: &Graph,
    profiles: &HashMap<String, MoneyballProfile>,
    chamber: Chamber,
    exclude_leadership: bool,
) -> Vec<(String, MoneyballProfile)> {
    let mut ranked: Vec<(String, MoneyballProfile)> = graph
        .members_in_chamber(chamber)
        .iter()
        .filter_map(|m| profiles.get(&m.member_id).map(|p| (m.member_id.clone(), *p)))
        .filter(|(_, p)| !exclude_leadership || p.institutional_weight < LEADERSHIP_THRESHOLD)
        .collect();
    ranked.sort_by(|a, b| b.1.moneyball_score.total_cmp(&a.1.moneyball_score));
    ranked
}

/// Ranks across both chambers together.
#[must_use]
pub fn rank_overall(graph: &Graph, profiles: &HashMap<String, MoneyballProfile>, exclude_leadership: bool) -> Vec<(String, MoneyballProfile)> {
    let mut ranked: Vec<(String, MoneyballProfile)> = profiles
        .iter()
        .filter(|(id, _)| graph.member(id).is_some())
        .filter(|(_, p)| !exclude_leadership || p.institutional_weight < LEADERSHIP_THRESHOLD)
        .map(|(id, p)| (id.clone(), *p))
        .collect();
    ranked.sort_by(|a, b| b.1.moneyball_score.total_cmp(&a.1.moneyball_score));
    ranked
}

/// The Moneyball MVP for a chamber: the highest-scoring non-leadership member.
#[must_use]
pub fn mvp(graph: &Graph, profiles: &HashMap<String, MoneyballProfile>, chamber: Chamber) -> Option<(String, MoneyballProfile)> {
    rank_chamber(graph, profiles, chamber, true).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ilga_core::{Member, Party};

    #[test]
    fn moneyball_score_stays_in_bounds() {
        let mut graph = Graph::default();
        let mut scorecards = HashMap::new();
        for (i, id) in ["M1", "M2", "M3"].into_iter().enumerate() {
            let mut m = Member::new(id, id, Chamber::House, Party::Democrat, i as u32 + 1);
            if id == "M1" {
                m.roles.push("Speaker of the House".into());
            }
            graph.members.insert(id.into(), m);
            scorecards.insert(
                id.to_string(),
                Scorecard { law_success_rate: 0.2 * (i as f64 + 1.0), avg_pipeline_depth: f64::from(i as u8), ..Scorecard::default() },
            );
        }

        let profiles = compute_moneyball(&graph, &scorecards);
        for profile in profiles.values() {
            assert!((0.0..=100.0).contains(&profile.moneyball_score));
        }
        assert!(profiles["M1"].institutional_weight >= LEADERSHIP_THRESHOLD);
    }

    #[test]
    fn non_leadership_rank_excludes_high_institutional_weight() {
        let mut graph = Graph::default();
        let mut leader = Member::new("M1", "Leader", Chamber::Senate, Party::Democrat, 1);
        leader.roles.push("Senate President".into());
        graph.members.insert("M1".into(), leader);
        graph.members.insert("M2".into(), Member::new("M2", "Backbencher", Chamber::Senate, Party::Republican, 2));

        let mut profiles = HashMap::new();
        profiles.insert("M1".into(), MoneyballProfile { institutional_weight: 1.0, moneyball_score: 90.0, ..Default::default() });
        profiles.insert("M2".into(), MoneyballProfile { institutional_weight: 0.0, moneyball_score: 10.0, ..Default::default() });

        let ranked = rank_chamber(&graph, &profiles, Chamber::Senate, true);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].0, "M2");
    }
}
