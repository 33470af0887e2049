//! The GraphQL schema root. List fields return a `Connection`
//! shape with `limit`/`offset` pagination; `votes(billNumber)` is the one
//! exception, returning a bounded raw list.

use super::enums::{BillSortBy, ChamberFilter, MemberSortBy, SortOrder, VoteKindFilter};
use super::types::connection::{
    BillConnection, MemberConnection, MoneyballLeaderboardConnection, PageInfo, VoteEventConnection, WitnessSlipConnection,
    WitnessSlipSummaryConnection, WitnessSlipSummaryEntryType,
};
use super::types::{
    BillAdvancementAnalyticsSummaryType, BillSlipAnalyticsType, BillType, MemberSlipAlignmentType, MemberType, MetricDefinitionType,
    MoneyballEntryType, VoteEventType, WitnessSlipSummaryType, WitnessSlipType,
};
use crate::state::AppState;
use async_graphql::{Context, Object};
use ilga_core::{BillStatus, Chamber, MoneyballProfile, SlipPosition};
use ilga_util::roles::institutional_weight;
use std::sync::Arc;

pub struct QueryRoot;

fn state<'a>(ctx: &Context<'a>) -> &'a AppState {
    ctx.data_unchecked::<Arc<AppState>>()
}

fn page<T>(mut items: Vec<T>, limit: Option<i32>, offset: Option<i32>) -> (Vec<T>, PageInfo) {
    let total = items.len();
    let offset = offset.unwrap_or(0).max(0) as usize;
    let limit = limit.filter(|l| *l >= 0).map_or(usize::MAX, |l| l as usize);
    let page_info = PageInfo::new(total, offset, limit);
    items = items.into_iter().skip(offset).take(limit).collect();
    (items, page_info)
}

#[Object]
impl QueryRoot {
    async fn member(&self, ctx: &Context<'_>, name: String) -> Option<MemberType> {
        state(ctx).graph.member_by_name(&name).map(Into::into)
    }

    #[allow(clippy::too_many_arguments)]
    async fn members(
        &self,
        ctx: &Context<'_>,
        sort_by: Option<MemberSortBy>,
        sort_order: Option<SortOrder>,
        chamber: Option<ChamberFilter>,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> MemberConnection {
        let s = state(ctx);
        let mut members: Vec<&ilga_core::Member> = s.graph.members.values().collect();
        if let Some(chamber) = chamber {
            let chamber: Chamber = chamber.into();
            members.retain(|m| m.chamber == chamber);
        }

        let sort_by = sort_by.unwrap_or_default();
        let sort_order = sort_order.unwrap_or_default();
        members.sort_by(|a, b| {
            let ord = match sort_by {
                MemberSortBy::Name => a.name.cmp(&b.name),
                MemberSortBy::District => a.district.cmp(&b.district),
                MemberSortBy::MoneyballScore => {
                    let sa = s.moneyball.get(&a.member_id).map_or(0.0, |p| p.moneyball_score);
                    let sb = s.moneyball.get(&b.member_id).map_or(0.0, |p| p.moneyball_score);
                    sa.total_cmp(&sb)
                }
            };
            if sort_order == SortOrder::Desc {
                ord.reverse()
            } else {
                ord
            }
        });

        let items: Vec<MemberType> = members.into_iter().map(Into::into).collect();
        let (items, page_info) = page(items, limit, offset);
        MemberConnection { items, page_info }
    }

    #[allow(clippy::too_many_arguments)]
    async fn moneyball_leaderboard(
        &self,
        ctx: &Context<'_>,
        chamber: ChamberFilter,
        exclude_leadership: Option<bool>,
        limit: Option<i32>,
        sort_by: Option<SortOrder>,
        sort_order: Option<SortOrder>,
    ) -> MoneyballLeaderboardConnection {
        let s = state(ctx);
        let chamber_domain: Chamber = chamber.into();
        let exclude_leadership = exclude_leadership.unwrap_or(false);

        let mut entries: Vec<(&ilga_core::Member, MoneyballProfile)> = s
            .graph
            .members_in_chamber(chamber_domain)
            .into_iter()
            .filter_map(|m| s.moneyball.get(&m.member_id).map(|p| (m, *p)))
            .filter(|(m, _)| !exclude_leadership || institutional_weight(&m.roles) < ilga_util::roles::LEADERSHIP_THRESHOLD)
            .collect();

        // `sort_by` is accepted for schema symmetry with `members`/`bills`; the
        // leaderboard's only sortable dimension is the composite score itself.
        let order = sort_by.or(sort_order).unwrap_or(SortOrder::Desc);
        entries.sort_by(|(_, a), (_, b)| {
            let ord = a.moneyball_score.total_cmp(&b.moneyball_score);
            if order == SortOrder::Desc {
                ord.reverse()
            } else {
                ord
            }
        });

        let items: Vec<MoneyballEntryType> =
            entries.into_iter().map(|(m, p)| MoneyballEntryType { member: m.into(), profile: p.into() }).collect();
        let (items, page_info) = page(items, limit, None);
        MoneyballLeaderboardConnection { items, page_info }
    }

    async fn bill(&self, ctx: &Context<'_>, number: String) -> Option<BillType> {
        state(ctx).graph.bill_by_number(&number).map(Into::into)
    }

    #[allow(clippy::too_many_arguments)]
    async fn bills(
        &self,
        ctx: &Context<'_>,
        sort_by: Option<BillSortBy>,
        sort_order: Option<SortOrder>,
        date_from: Option<chrono::NaiveDate>,
        date_to: Option<chrono::NaiveDate>,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> BillConnection {
        let s = state(ctx);
        let mut bills: Vec<&ilga_core::Bill> = s
            .graph
            .bills
            .values()
            .filter(|b| date_from.is_none_or(|d| b.last_action_date.is_some_and(|a| a >= d)))
            .filter(|b| date_to.is_none_or(|d| b.last_action_date.is_some_and(|a| a <= d)))
            .collect();

        let sort_by = sort_by.unwrap_or_default();
        let sort_order = sort_order.unwrap_or_default();
        bills.sort_by(|a, b| {
            let ord = match sort_by {
                BillSortBy::LastActionDate => a.last_action_date.cmp(&b.last_action_date),
                BillSortBy::BillNumber => a.bill_number.cmp(&b.bill_number),
                BillSortBy::PipelineDepth => a.pipeline_depth.cmp(&b.pipeline_depth),
            };
            if sort_order == SortOrder::Desc {
                ord.reverse()
            } else {
                ord
            }
        });

        let items: Vec<BillType> = bills.into_iter().map(Into::into).collect();
        let (items, page_info) = page(items, limit, offset);
        BillConnection { items, page_info }
    }

    /// Raw list, not a `Connection`: vote events per bill are bounded (< ~20).
    async fn votes(&self, ctx: &Context<'_>, bill_number: String) -> Vec<VoteEventType> {
        state(ctx).graph.votes_for_bill(&bill_number).into_iter().map(Into::into).collect()
    }

    async fn bill_vote_timeline(&self, ctx: &Context<'_>, bill_number: String, chamber: Option<ChamberFilter>) -> Vec<VoteEventType> {
        let chamber: Option<Chamber> = chamber.map(Into::into);
        state(ctx)
            .graph
            .votes_for_bill(&bill_number)
            .into_iter()
            .filter(|v| chamber.is_none_or(|c| v.chamber == c))
            .map(Into::into)
            .collect()
    }

    async fn all_vote_events(
        &self,
        ctx: &Context<'_>,
        vote_type: Option<VoteKindFilter>,
        chamber: Option<ChamberFilter>,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> VoteEventConnection {
        let s = state(ctx);
        let vote_type: Option<ilga_core::VoteKind> = vote_type.map(Into::into);
        let chamber: Option<Chamber> = chamber.map(Into::into);
        let events: Vec<&ilga_core::VoteEvent> = s
            .graph
            .vote_events
            .iter()
            .filter(|v| vote_type.is_none_or(|k| v.kind == k))
            .filter(|v| chamber.is_none_or(|c| v.chamber == c))
            .collect();

        let items: Vec<VoteEventType> = events.into_iter().map(Into::into).collect();
        let (items, page_info) = page(items, limit, offset);
        VoteEventConnection { items, page_info }
    }

    async fn witness_slips(&self, ctx: &Context<'_>, bill_number: String, limit: Option<i32>, offset: Option<i32>) -> WitnessSlipConnection {
        let items: Vec<WitnessSlipType> = state(ctx).graph.slips_for_bill(&bill_number).into_iter().map(Into::into).collect();
        let (items, page_info) = page(items, limit, offset);
        WitnessSlipConnection { items, page_info }
    }

    async fn witness_slip_summary(&self, ctx: &Context<'_>, bill_number: String) -> Option<WitnessSlipSummaryType> {
        let slips = state(ctx).graph.slips_for_bill(&bill_number);
        if slips.is_empty() {
            return None;
        }
        Some(summarize_slips(&slips))
    }

    async fn witness_slip_summaries(&self, ctx: &Context<'_>, limit: Option<i32>, offset: Option<i32>) -> WitnessSlipSummaryConnection {
        let s = state(ctx);
        let mut by_bill: std::collections::BTreeMap<&str, Vec<&ilga_core::WitnessSlip>> = std::collections::BTreeMap::new();
        for slip in &s.graph.witness_slips {
            by_bill.entry(&slip.bill_number).or_default().push(slip);
        }
        let items: Vec<WitnessSlipSummaryEntryType> = by_bill
            .into_iter()
            .map(|(bill_number, slips)| WitnessSlipSummaryEntryType { bill_number: bill_number.to_string(), summary: summarize_slips(&slips) })
            .collect();
        let (items, page_info) = page(items, limit, offset);
        WitnessSlipSummaryConnection { items, page_info }
    }

    async fn bill_slip_analytics(&self, ctx: &Context<'_>, bill_number: String) -> Option<BillSlipAnalyticsType> {
        let s = state(ctx);
        let slips = s.graph.slips_for_bill(&bill_number);
        if slips.is_empty() {
            return None;
        }
        let summary = summarize_slips(&slips);
        let majority_proponent = summary.proponent_count >= summary.opponent_count;

        let bill = s.graph.bill_by_number(&bill_number);
        let passed = bill.is_some_and(|b| matches!(b.status, BillStatus::Signed | BillStatus::PassedBoth | BillStatus::SentToGovernor));

        Some(BillSlipAnalyticsType {
            summary,
            majority_position_is_proponent: majority_proponent,
            passed,
            slip_sentiment_matched_outcome: majority_proponent == passed,
        })
    }

    async fn member_slip_alignment(&self, ctx: &Context<'_>, member_name: String) -> Option<MemberSlipAlignmentType> {
        let s = state(ctx);
        let member = s.graph.member_by_name(&member_name)?;

        let mut considered = 0i32;
        let mut aligned = 0i32;
        for event in &s.graph.vote_events {
            let slips = s.graph.slips_for_bill(&event.bill_number);
            if slips.is_empty() {
                continue;
            }
            let majority_proponent = summarize_slips(&slips).proponent_count as f64 >= slips.len() as f64 / 2.0;

            let voted_yea = event.yea_votes.iter().any(|v| v.member_id.as_deref() == Some(member.member_id.as_str()));
            let voted_nay = event.nay_votes.iter().any(|v| v.member_id.as_deref() == Some(member.member_id.as_str()));
            if !voted_yea && !voted_nay {
                continue;
            }

            considered += 1;
            if voted_yea == majority_proponent {
                aligned += 1;
            }
        }

        let rate = if considered == 0 { 0.0 } else { f64::from(aligned) / f64::from(considered) };
        Some(MemberSlipAlignmentType { votes_considered: considered, aligned_votes: aligned, alignment_rate: rate })
    }

    async fn bill_advancement_analytics_summary(&self, ctx: &Context<'_>) -> BillAdvancementAnalyticsSummaryType {
        let s = state(ctx);
        let mut house_depths = Vec::new();
        let mut senate_depths = Vec::new();
        let mut dead = 0;
        let mut signed = 0;

        for bill in s.graph.bills.values() {
            match bill.chamber {
                Chamber::House => house_depths.push(f64::from(bill.pipeline_depth)),
                Chamber::Senate => senate_depths.push(f64::from(bill.pipeline_depth)),
            }
            if bill.is_dead {
                dead += 1;
            }
            if bill.status == BillStatus::Signed {
                signed += 1;
            }
        }

        BillAdvancementAnalyticsSummaryType {
            total_bills: i32::try_from(s.graph.bills.len()).unwrap_or(i32::MAX),
            dead_bills: dead,
            signed_bills: signed,
            avg_pipeline_depth_house: mean(&house_depths),
            avg_pipeline_depth_senate: mean(&senate_depths),
        }
    }

    async fn metrics_glossary(&self) -> Vec<MetricDefinitionType> {
        metrics_glossary()
    }
}

fn summarize_slips(slips: &[&ilga_core::WitnessSlip]) -> WitnessSlipSummaryType {
    let mut proponent = 0;
    let mut opponent = 0;
    let mut no_position = 0;
    let mut information = 0;
    for slip in slips {
        match slip.position {
            SlipPosition::Proponent => proponent += 1,
            SlipPosition::Opponent => opponent += 1,
            SlipPosition::NoPosition => no_position += 1,
            SlipPosition::Information => information += 1,
        }
    }
    let total = proponent + opponent;
    let ratio = if total == 0 { 0.0 } else { f64::from(proponent) / f64::from(total) };
    WitnessSlipSummaryType {
        proponent_count: proponent,
        opponent_count: opponent,
        no_position_count: no_position,
        information_count: information,
        proponent_ratio: ratio,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn metrics_glossary() -> Vec<MetricDefinitionType> {
    vec![
        MetricDefinitionType {
            id: "law_success_rate".into(),
            label: "Law Success Rate".into(),
            kind: "derived".into(),
            definition: "Share of a member's eligible substantive bills that became law.".into(),
            formula: Some("laws_passed / (bills_introduced - shell_bill_count)".into()),
        },
        MetricDefinitionType {
            id: "magnet_score".into(),
            label: "Magnet Score".into(),
            kind: "derived".into(),
            definition: "Average number of co-sponsors attracted per eligible bill.".into(),
            formula: Some("mean(sponsor_ids.len() - 1) over eligible bills".into()),
        },
        MetricDefinitionType {
            id: "bridge_score".into(),
            label: "Bridge Score".into(),
            kind: "derived".into(),
            definition: "Share of a member's eligible bills with at least one cross-party co-sponsor.".into(),
            formula: Some("count(has_cross_party_cosponsor) / eligible_count".into()),
        },
        MetricDefinitionType {
            id: "moneyball_score".into(),
            label: "Moneyball Score".into(),
            kind: "derived".into(),
            definition: "Composite effectiveness score blending chamber-normalized scorecard components and institutional weight.".into(),
            formula: Some("100 * (0.24*effectiveness + 0.16*pipeline + 0.16*magnet + 0.12*bridge + 0.12*centrality + 0.20*institutional_weight)".into()),
        },
        MetricDefinitionType {
            id: "institutional_weight".into(),
            label: "Institutional Weight".into(),
            kind: "empirical".into(),
            definition: "Highest-ranked leadership/chair title a member holds, on a 0-1 scale.".into(),
            formula: None,
        },
        MetricDefinitionType {
            id: "seatmate_affinity".into(),
            label: "Seatmate Affinity".into(),
            kind: "derived".into(),
            definition: "Share of a Senator's primary substantive bills co-sponsored by at least one seatmate.".into(),
            formula: Some("count(bills with seatmate co-sponsor) / bills_introduced".into()),
        },
    ]
}
