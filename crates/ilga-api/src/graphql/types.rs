//! GraphQL object types, each a thin view over an `ilga-core` record.
//! Relations (a member's scorecard, a bill's sponsors) are resolved through
//! the request-scoped loaders, never by scanning the graph.

use super::enums::{ChamberFilter, PartyType};
use crate::loaders::Loaders;
use async_graphql::{ComplexObject, Context, Object, SimpleObject};
use chrono::NaiveDate;
use ilga_core::{Bill, Member, MoneyballProfile, Scorecard, VoteName, WitnessSlip};

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct MemberType {
    pub member_id: String,
    pub name: String,
    pub chamber: ChamberFilter,
    pub party: PartyType,
    pub district: i32,
    pub role: Option<String>,
    pub roles: Vec<String>,
    pub seat_block_id: Option<String>,
    pub seat_ring: Option<String>,
    pub seatmate_names: Vec<String>,
    pub seatmate_affinity: Option<f64>,
}

impl From<&Member> for MemberType {
    fn from(m: &Member) -> Self {
        Self {
            member_id: m.member_id.clone(),
            name: m.name.clone(),
            chamber: m.chamber.into(),
            party: m.party.into(),
            district: i32::try_from(m.district).unwrap_or(i32::MAX),
            role: m.role.clone(),
            roles: m.roles.clone(),
            seat_block_id: m.seat_block_id.clone(),
            seat_ring: m.seat_ring.clone(),
            seatmate_names: m.seatmate_names.clone(),
            seatmate_affinity: m.seatmate_affinity,
        }
    }
}

#[ComplexObject]
impl MemberType {
    async fn scorecard(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<ScorecardType>> {
        let loaders = ctx.data::<Loaders>()?;
        Ok(loaders.scorecards.load_one(self.member_id.clone()).await?.map(Into::into))
    }

    async fn moneyball(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<MoneyballProfileType>> {
        let loaders = ctx.data::<Loaders>()?;
        Ok(loaders.moneyball.load_one(self.member_id.clone()).await?.map(Into::into))
    }
}

#[derive(SimpleObject, Clone, Copy)]
pub struct ScorecardType {
    pub bills_introduced: i32,
    pub laws_passed: i32,
    pub law_success_rate: f64,
    pub resolutions_filed: i32,
    pub resolutions_passed: i32,
    pub resolution_pass_rate: f64,
    pub magnet_score: f64,
    pub bridge_score: f64,
    pub avg_pipeline_depth: f64,
    pub shell_bill_count: i32,
}

impl From<Scorecard> for ScorecardType {
    fn from(s: Scorecard) -> Self {
        Self {
            bills_introduced: s.bills_introduced as i32,
            laws_passed: s.laws_passed as i32,
            law_success_rate: s.law_success_rate,
            resolutions_filed: s.resolutions_filed as i32,
            resolutions_passed: s.resolutions_passed as i32,
            resolution_pass_rate: s.resolution_pass_rate,
            magnet_score: s.magnet_score,
            bridge_score: s.bridge_score,
            avg_pipeline_depth: s.avg_pipeline_depth,
            shell_bill_count: s.shell_bill_count as i32,
        }
    }
}

#[derive(SimpleObject, Clone, Copy)]
pub struct MoneyballProfileType {
    pub effectiveness: f64,
    pub pipeline: f64,
    pub magnet: f64,
    pub bridge: f64,
    pub centrality: f64,
    pub institutional_weight: f64,
    pub moneyball_score: f64,
}

impl From<MoneyballProfile> for MoneyballProfileType {
    fn from(p: MoneyballProfile) -> Self {
        Self {
            effectiveness: p.effectiveness,
            pipeline: p.pipeline,
            magnet: p.magnet,
            bridge: p.bridge,
            centrality: p.centrality,
            institutional_weight: p.institutional_weight,
            moneyball_score: p.moneyball_score,
        }
    }
}

pub struct MoneyballEntryType {
    pub member: MemberType,
    pub profile: MoneyballProfileType,
}

#[Object]
impl MoneyballEntryType {
    async fn member(&self) -> &MemberType {
        &self.member
    }

    async fn profile(&self) -> &MoneyballProfileType {
        &self.profile
    }
}

#[derive(SimpleObject, Clone)]
pub struct ActionRecordType {
    pub date: NaiveDate,
    pub action_text: String,
    pub chamber: ChamberFilter,
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct BillType {
    pub leg_id: String,
    pub bill_number: String,
    pub chamber: ChamberFilter,
    pub description: String,
    pub synopsis: String,
    pub status_url: Option<String>,
    pub primary_sponsor: Option<String>,
    pub sponsor_ids: Vec<String>,
    pub house_sponsor_ids: Vec<String>,
    pub last_action: Option<String>,
    pub last_action_date: Option<NaiveDate>,
    pub status: String,
    pub pipeline_depth: i32,
    pub is_dead: bool,
    pub action_history: Vec<ActionRecordType>,
}

impl From<&Bill> for BillType {
    fn from(b: &Bill) -> Self {
        Self {
            leg_id: b.leg_id.clone(),
            bill_number: b.bill_number.clone(),
            chamber: b.chamber.into(),
            description: b.description.clone(),
            synopsis: b.synopsis.clone(),
            status_url: b.status_url.clone(),
            primary_sponsor: b.primary_sponsor.clone(),
            sponsor_ids: b.sponsor_ids.clone(),
            house_sponsor_ids: b.house_sponsor_ids.clone(),
            last_action: b.last_action.clone(),
            last_action_date: b.last_action_date,
            status: format!("{:?}", b.status),
            pipeline_depth: i32::from(b.pipeline_depth),
            is_dead: b.is_dead,
            action_history: b
                .action_history
                .iter()
                .map(|a| ActionRecordType { date: a.date, action_text: a.action_text.clone(), chamber: a.chamber.into() })
                .collect(),
        }
    }
}

#[ComplexObject]
impl BillType {
    async fn sponsors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<MemberType>> {
        let loaders = ctx.data::<Loaders>()?;
        let members = loaders.members.load_many(self.sponsor_ids.clone()).await?;
        Ok(self.sponsor_ids.iter().filter_map(|id| members.get(id)).map(Into::into).collect())
    }
}

#[derive(SimpleObject, Clone)]
pub struct VoteNameType {
    pub reported_name: String,
    pub member_id: Option<String>,
}

impl From<&VoteName> for VoteNameType {
    fn from(v: &VoteName) -> Self {
        Self { reported_name: v.reported_name.clone(), member_id: v.member_id.clone() }
    }
}

#[derive(SimpleObject, Clone)]
pub struct VoteEventType {
    pub bill_number: String,
    pub chamber: ChamberFilter,
    pub date: NaiveDate,
    pub kind: super::enums::VoteKindFilter,
    pub committee_code: Option<String>,
    pub yea_votes: Vec<VoteNameType>,
    pub nay_votes: Vec<VoteNameType>,
    pub present_votes: Vec<VoteNameType>,
    pub nv_votes: Vec<VoteNameType>,
    pub motion_text: String,
}

impl From<&ilga_core::VoteEvent> for VoteEventType {
    fn from(v: &ilga_core::VoteEvent) -> Self {
        Self {
            bill_number: v.bill_number.clone(),
            chamber: v.chamber.into(),
            date: v.date,
            kind: v.kind.into(),
            committee_code: v.committee_code.clone(),
            yea_votes: v.yea_votes.iter().map(Into::into).collect(),
            nay_votes: v.nay_votes.iter().map(Into::into).collect(),
            present_votes: v.present_votes.iter().map(Into::into).collect(),
            nv_votes: v.nv_votes.iter().map(Into::into).collect(),
            motion_text: v.motion_text.clone(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct WitnessSlipType {
    pub bill_number: String,
    pub chamber: ChamberFilter,
    pub committee_code: String,
    pub hearing_date: NaiveDate,
    pub filer_name: String,
    pub represents: String,
    pub position: String,
    pub will_testify: bool,
}

impl From<&WitnessSlip> for WitnessSlipType {
    fn from(s: &WitnessSlip) -> Self {
        Self {
            bill_number: s.bill_number.clone(),
            chamber: s.chamber.into(),
            committee_code: s.committee_code.clone(),
            hearing_date: s.hearing_date,
            filer_name: s.filer_name.clone(),
            represents: s.represents.clone(),
            position: format!("{:?}", s.position),
            will_testify: s.will_testify,
        }
    }
}

#[derive(SimpleObject, Clone, Copy)]
pub struct WitnessSlipSummaryType {
    pub proponent_count: i32,
    pub opponent_count: i32,
    pub no_position_count: i32,
    pub information_count: i32,
    pub proponent_ratio: f64,
}

#[derive(SimpleObject, Clone, Copy)]
pub struct BillSlipAnalyticsType {
    pub summary: WitnessSlipSummaryType,
    pub majority_position_is_proponent: bool,
    pub passed: bool,
    pub slip_sentiment_matched_outcome: bool,
}

#[derive(SimpleObject, Clone, Copy)]
pub struct MemberSlipAlignmentType {
    pub votes_considered: i32,
    pub aligned_votes: i32,
    pub alignment_rate: f64,
}

#[derive(SimpleObject, Clone, Copy)]
pub struct BillAdvancementAnalyticsSummaryType {
    pub total_bills: i32,
    pub dead_bills: i32,
    pub signed_bills: i32,
    pub avg_pipeline_depth_house: f64,
    pub avg_pipeline_depth_senate: f64,
}

#[derive(SimpleObject, Clone)]
pub struct MetricDefinitionType {
    pub id: String,
    pub label: String,
    pub kind: String,
    pub definition: String,
    pub formula: Option<String>,
}

pub mod connection {
    use super::{BillType, MemberType, MoneyballEntryType, WitnessSlipSummaryType, WitnessSlipType};
    use async_graphql::SimpleObject;

    #[derive(SimpleObject, Clone, Copy)]
    pub struct PageInfo {
        pub total_count: i32,
        pub has_next_page: bool,
        pub has_previous_page: bool,
    }

    impl PageInfo {
        #[must_use]
        pub fn new(total: usize, offset: usize, limit: usize) -> Self {
            Self {
                total_count: i32::try_from(total).unwrap_or(i32::MAX),
                has_next_page: offset + limit < total,
                has_previous_page: offset > 0,
            }
        }
    }

    #[derive(SimpleObject)]
    pub struct MemberConnection {
        pub items: Vec<MemberType>,
        pub page_info: PageInfo,
    }

    #[derive(SimpleObject)]
    pub struct BillConnection {
        pub items: Vec<BillType>,
        pub page_info: PageInfo,
    }

    #[derive(async_graphql::SimpleObject)]
    pub struct MoneyballLeaderboardConnection {
        pub items: Vec<MoneyballEntryType>,
        pub page_info: PageInfo,
    }

    #[derive(async_graphql::SimpleObject)]
    pub struct VoteEventConnection {
        pub items: Vec<super::VoteEventType>,
        pub page_info: PageInfo,
    }

    #[derive(SimpleObject)]
    pub struct WitnessSlipConnection {
        pub items: Vec<WitnessSlipType>,
        pub page_info: PageInfo,
    }

    #[derive(async_graphql::SimpleObject)]
    pub struct WitnessSlipSummaryEntryType {
        pub bill_number: String,
        pub summary: WitnessSlipSummaryType,
    }

    #[derive(SimpleObject)]
    pub struct WitnessSlipSummaryConnection {
        pub items: Vec<WitnessSlipSummaryEntryType>,
        pub page_info: PageInfo,
    }
}
