use chrono::NaiveDate;
use ilga_advocacy::Crosswalk;
use ilga_api::state::AppState;
use ilga_core::{
    ActionRecord, Bill, BillKind, BillStatus, Chamber, Member, MoneyballProfile, Party, Scorecard, SlipPosition, VoteEvent, VoteKind,
    VoteName, WitnessSlip,
};
use ilga_graph::Graph;
use std::collections::HashMap;
use std::sync::Arc;

/// A small, hand-built graph standing in for a hydrated cache: two
/// senators, one bill with a floor vote and a pair of witness slips.
pub fn fixture_state(dev_mode: bool, api_key: Option<String>) -> Arc<AppState> {
    let mut members = HashMap::new();
    members.insert(
        "M1".to_string(),
        Member::new("M1", "Jane Doe", Chamber::Senate, Party::Democrat, 6),
    );
    let mut broker = Member::new("M2", "Sam Powers", Chamber::Senate, Party::Republican, 50);
    broker.roles.push("Committee Chair".to_string());
    members.insert("M2".to_string(), broker);

    let mut bills = HashMap::new();
    bills.insert(
        "1".to_string(),
        Bill {
            leg_id: "1".to_string(),
            bill_number: "SB0001".to_string(),
            chamber: Chamber::Senate,
            kind: BillKind::Substantive,
            description: "Amends the School Code to expand early childhood literacy funding statewide".to_string(),
            synopsis: String::new(),
            status_url: Some("https://ilga.gov/bill/SB0001".to_string()),
            primary_sponsor: Some("M1".to_string()),
            sponsor_ids: vec!["M1".to_string()],
            house_sponsor_ids: vec![],
            last_action: Some("Passed Senate".to_string()),
            last_action_date: Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
            status: BillStatus::PassedChamber,
            action_history: vec![ActionRecord {
                date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                action_text: "Third Reading - Passed".to_string(),
                chamber: Chamber::Senate,
            }],
            pipeline_depth: BillStatus::PassedChamber.pipeline_depth(),
            is_dead: false,
        },
    );

    let vote_events = vec![VoteEvent {
        bill_number: "SB0001".to_string(),
        chamber: Chamber::Senate,
        date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        kind: VoteKind::FloorThirdReading,
        committee_code: None,
        yea_votes: vec![VoteName {
            reported_name: "Doe".to_string(),
            member_id: Some("M1".to_string()),
        }],
        nay_votes: vec![VoteName {
            reported_name: "Powers".to_string(),
            member_id: Some("M2".to_string()),
        }],
        present_votes: vec![],
        nv_votes: vec![],
        motion_text: "Third Reading".to_string(),
    }];

    let witness_slips = vec![
        WitnessSlip {
            bill_number: "SB0001".to_string(),
            chamber: Chamber::Senate,
            committee_code: "EDU".to_string(),
            hearing_date: NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
            filer_name: "Literacy Alliance".to_string(),
            represents: "Literacy Alliance".to_string(),
            position: SlipPosition::Proponent,
            will_testify: true,
        },
        WitnessSlip {
            bill_number: "SB0001".to_string(),
            chamber: Chamber::Senate,
            committee_code: "EDU".to_string(),
            hearing_date: NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
            filer_name: "Taxpayers Federation".to_string(),
            represents: "Taxpayers Federation".to_string(),
            position: SlipPosition::Opponent,
            will_testify: false,
        },
    ];

    let graph = Arc::new(Graph::new(members, bills, HashMap::new(), vote_events, witness_slips));

    let mut scorecards = HashMap::new();
    scorecards.insert(
        "M1".to_string(),
        Scorecard {
            bills_introduced: 1,
            laws_passed: 0,
            law_success_rate: 0.0,
            resolutions_filed: 0,
            resolutions_passed: 0,
            resolution_pass_rate: 0.0,
            magnet_score: 0.5,
            bridge_score: 0.2,
            avg_pipeline_depth: 2.0,
            shell_bill_count: 0,
        },
    );

    let mut moneyball = HashMap::new();
    moneyball.insert(
        "M1".to_string(),
        MoneyballProfile {
            effectiveness: 0.4,
            pipeline: 0.3,
            magnet: 0.5,
            bridge: 0.2,
            centrality: 0.1,
            institutional_weight: 0.0,
            moneyball_score: 42.0,
        },
    );
    moneyball.insert(
        "M2".to_string(),
        MoneyballProfile {
            effectiveness: 0.1,
            pipeline: 0.1,
            magnet: 0.1,
            bridge: 0.9,
            centrality: 0.8,
            institutional_weight: 1.0,
            moneyball_score: 77.0,
        },
    );

    Arc::new(AppState {
        graph,
        scorecards: Arc::new(scorecards),
        moneyball: Arc::new(moneyball),
        crosswalk: Arc::new(Crosswalk::dev_seed()),
        dev_mode,
        api_key,
        ready: true,
    })
}
