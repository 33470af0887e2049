//! Roll-call vote page parsing.

use crate::text::{normalize_whitespace, sel, select_all_text, select_first_text};
use crate::{ParseError, ParseWarning};
use chrono::NaiveDate;
use ilga_core::{Chamber, VoteEvent, VoteKind, VoteName};
use scraper::Html;

/// Parses a single roll-call vote page. Names are preserved with their
/// reported spelling; reconciliation to `member_id` happens later in the
/// Graph Builder (`ilga-graph`).
pub fn parse_vote_event(html: &[u8], source_url: &str) -> Result<(VoteEvent, Vec<ParseWarning>), ParseError> {
    let text = page_text(html, source_url)?;
    let document = Html::parse_document(&text);
    let root = document.root_element();
    let mut warnings = Vec::new();

    let header = select_first_text(&root, &sel(".vote-header, h1")).unwrap_or_default();
    let bill_number = extract_bill_number(&header).unwrap_or_else(|| {
        warnings.push(ParseWarning::new(source_url, "could not find bill number in vote header"));
        "UNKNOWN".to_string()
    });
    let chamber = Chamber::from_bill_prefix(&bill_number).unwrap_or(Chamber::House);

    let date = select_first_text(&root, &sel(".vote-date"))
        .as_deref()
        .and_then(parse_date_loose)
        .unwrap_or_else(|| {
            warnings.push(ParseWarning::new(source_url, "could not find vote date"));
            NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid fallback date")
        });

    let motion_text = select_first_text(&root, &sel(".motion-text, .vote-motion")).unwrap_or_default();
    let kind = classify_kind(&motion_text, &header);

    let committee_code = select_first_text(&root, &sel(".committee-code"))
        .filter(|_| matches!(kind, VoteKind::CommitteeVote));

    let yea_votes = names_in(&document, ".yea-votes, .vote-yea");
    let nay_votes = names_in(&document, ".nay-votes, .vote-nay");
    let present_votes = names_in(&document, ".present-votes, .vote-present");
    let nv_votes = names_in(&document, ".nv-votes, .vote-nv");

    Ok((
        VoteEvent {
            bill_number,
            chamber,
            date,
            kind,
            committee_code,
            yea_votes,
            nay_votes,
            present_votes,
            nv_votes,
            motion_text,
        },
        warnings,
    ))
}

fn names_in(document: &Html, selector: &str) -> Vec<VoteName> {
    document
        .select(&sel(selector))
        .flat_map(|block| select_all_text(&block, &sel("li, td, .name")))
        .filter(|n| !n.is_empty())
        .map(VoteName::unresolved)
        .collect()
}

fn classify_kind(motion_text: &str, header: &str) -> VoteKind {
    let combined = format!("{motion_text} {header}").to_lowercase();
    if combined.contains("third reading") {
        VoteKind::FloorThirdReading
    } else if combined.contains("concur") {
        VoteKind::Concurrence
    } else if combined.contains("override") || combined.contains("veto") {
        VoteKind::Override
    } else if combined.contains("committee") || combined.contains("do pass") {
        VoteKind::CommitteeVote
    } else {
        VoteKind::Other
    }
}

fn extract_bill_number(header: &str) -> Option<String> {
    header
        .split_whitespace()
        .find(|tok| {
            let upper = tok.to_ascii_uppercase();
            ["HB", "SB", "HR", "SR", "HJR", "SJR"]
                .iter()
                .any(|prefix| upper.starts_with(prefix) && upper.chars().any(|c| c.is_ascii_digit()))
        })
        .map(normalize_whitespace)
}

fn parse_date_loose(text: &str) -> Option<NaiveDate> {
    for fmt in ["%m/%d/%Y", "%Y-%m-%d", "%b %d, %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(text.trim(), fmt) {
            return Some(d);
        }
    }
    None
}

fn page_text(html: &[u8], source_url: &str) -> Result<String, ParseError> {
    String::from_utf8(html.to_vec()).map_err(|e| ParseError {
        source_url: source_url.to_string(),
        message: format!("invalid utf-8 in page: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_third_reading() {
        assert_eq!(classify_kind("Third Reading - Passed", ""), VoteKind::FloorThirdReading);
    }

    #[test]
    fn extracts_bill_number_from_header() {
        assert_eq!(extract_bill_number("SB0145 Third Reading Vote"), Some("SB0145".to_string()));
    }
}
