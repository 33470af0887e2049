//! Institutional weighting: a pure classifier over a member's
//! aggregated `roles` strings. This is the only place that knows the
//! keyword table, per the DESIGN NOTES' "duck-typed role strings" flag.

/// Role keyword → weight, in precedence order. "Highest weight wins" when a
/// member carries multiple matching role strings (Open Question #2).
const WEIGHT_TABLE: &[(&[&str], f64)] = &[
    (&["president", "leader", "speaker"], 1.00),
    (&["chair", "spokesperson"], 0.50),
    (&["whip", "caucus chair"], 0.25),
];

/// Returns the institutional weight for a single role string. Keywords are
/// matched by longest-match-wins rather than table order, so a
/// more-specific phrase like "caucus chair" is never shadowed by a
/// shorter, less-specific one like "chair".
#[must_use]
pub fn weight_for_role(role: &str) -> f64 {
    let lower = role.to_lowercase();
    WEIGHT_TABLE
        .iter()
        .flat_map(|(keywords, weight)| keywords.iter().map(move |kw| (kw, weight)))
        .filter(|(kw, _)| lower.contains(*kw))
        .max_by_key(|(kw, _)| kw.len())
        .map_or(0.0, |(_, w)| *w)
}

/// Returns the maximum institutional weight across all of a member's roles.
#[must_use]
pub fn institutional_weight(roles: &[String]) -> f64 {
    roles
        .iter()
        .map(|r| weight_for_role(r))
        .fold(0.0_f64, f64::max)
}

/// Threshold used by the "non-leadership" leaderboard: members at or
/// above this weight are excluded.
pub const LEADERSHIP_THRESHOLD: f64 = 0.50;

#[must_use]
pub fn is_leadership(roles: &[String]) -> bool {
    institutional_weight(roles) >= LEADERSHIP_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caucus_chair_is_not_shadowed_by_plain_chair() {
        assert_eq!(weight_for_role("Caucus Chair"), 0.25);
        assert_eq!(weight_for_role("Committee Chair"), 0.50);
    }

    #[test]
    fn highest_weight_wins() {
        let roles = vec!["Caucus Chair".to_string(), "Majority Spokesperson".to_string()];
        assert_eq!(institutional_weight(&roles), 0.50);
    }

    #[test]
    fn speaker_outranks_chair() {
        let roles = vec!["Committee Chair".to_string(), "Speaker of the House".to_string()];
        assert_eq!(institutional_weight(&roles), 1.00);
    }

    #[test]
    fn no_matching_role_is_zero() {
        let roles = vec!["Member".to_string()];
        assert_eq!(institutional_weight(&roles), 0.0);
    }

    #[test]
    fn leadership_threshold_is_inclusive() {
        assert!(is_leadership(&["Committee Chair".to_string()]));
        assert!(!is_leadership(&["Whip".to_string()]));
    }
}
