//! Vote-event name reconciliation: reconciles reported roll
//! call names against the member set using the name normalization rule.
//! Unmatched names are retained as plain strings for display but do not
//! appear in member-scoped analytics.

use ilga_core::{Member, VoteEvent, VoteName};
use ilga_util::name_norm::names_match;
use std::collections::HashMap;

/// Reconciles every vote list in every event against `members`, restricted
/// to members in the event's own chamber (roll calls never include members
/// of the other chamber).
pub fn reconcile_vote_events(events: &mut [VoteEvent], members: &HashMap<String, Member>) {
    for event in events.iter_mut() {
        let chamber_members: Vec<&Member> = members.values().filter(|m| m.chamber == event.chamber).collect();
        for list in [
            &mut event.yea_votes,
            &mut event.nay_votes,
            &mut event.present_votes,
            &mut event.nv_votes,
        ] {
            for name in list.iter_mut() {
                reconcile_one(name, &chamber_members);
            }
        }
    }
}

fn reconcile_one(name: &mut VoteName, chamber_members: &[&Member]) {
    if name.member_id.is_some() {
        return;
    }
    let matches: Vec<&&Member> = chamber_members
        .iter()
        .filter(|m| names_match(&name.reported_name, &m.name))
        .collect();

    // Invariant: a name matching exactly one current chamber
    // member resolves to that member. Ambiguous matches are left
    // unresolved rather than guessed.
    if let [only] = matches.as_slice() {
        name.member_id = Some(only.member_id.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ilga_core::{Chamber, Party};

    #[test]
    fn resolves_unique_surname_match() {
        let mut members = HashMap::new();
        members.insert(
            "M1".to_string(),
            Member::new("M1", "Jeff Merkley", Chamber::Senate, Party::Democrat, 6),
        );

        let mut events = vec![VoteEvent {
            bill_number: "SB0001".into(),
            chamber: Chamber::Senate,
            date: chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            kind: ilga_core::VoteKind::FloorThirdReading,
            committee_code: None,
            yea_votes: vec![VoteName::unresolved("Mr. MERKLEY")],
            nay_votes: vec![],
            present_votes: vec![],
            nv_votes: vec![],
            motion_text: String::new(),
        }];

        reconcile_vote_events(&mut events, &members);
        assert_eq!(events[0].yea_votes[0].member_id.as_deref(), Some("M1"));
    }

    #[test]
    fn leaves_ambiguous_names_unresolved() {
        let mut members = HashMap::new();
        members.insert("M1".to_string(), Member::new("M1", "Jane Doe", Chamber::Senate, Party::Democrat, 1));
        members.insert("M2".to_string(), Member::new("M2", "John Doe", Chamber::Senate, Party::Republican, 2));

        let mut events = vec![VoteEvent {
            bill_number: "SB0001".into(),
            chamber: Chamber::Senate,
            date: chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            kind: ilga_core::VoteKind::FloorThirdReading,
            committee_code: None,
            yea_votes: vec![VoteName::unresolved("Doe")],
            nay_votes: vec![],
            present_votes: vec![],
            nv_votes: vec![],
            motion_text: String::new(),
        }];

        reconcile_vote_events(&mut events, &members);
        assert_eq!(events[0].yea_votes[0].member_id, None);
    }
}
