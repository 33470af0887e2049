//! Bill index + detail page parsing.

use crate::text::{normalize_whitespace, sel, select_all_text, select_first_text};
use crate::{ParseError, ParseWarning};
use chrono::NaiveDate;
use ilga_core::{ActionRecord, Bill, BillKind, BillStatus, Chamber};
use scraper::Html;

#[derive(Debug, Clone)]
pub struct BillIndexRow {
    pub bill_number: String,
    pub leg_id: String,
    pub last_action_date: Option<NaiveDate>,
}

/// Parses one page of the (paginated) bill index. Pagination is discovered
/// from the page's own "next" link, never hard-coded to a page count.
pub fn parse_bill_index_page(
    html: &[u8],
    source_url: &str,
) -> Result<(Vec<BillIndexRow>, Option<String>, Vec<ParseWarning>), ParseError> {
    let text = page_text(html, source_url)?;
    let document = Html::parse_document(&text);
    let mut rows = Vec::new();
    let mut warnings = Vec::new();

    for row in document.select(&sel("table tr")) {
        let Some(link) = row.select(&sel("a[href]")).next() else {
            continue;
        };
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let Some(leg_id) = extract_leg_id(href) else {
            continue;
        };
        let bill_number = normalize_whitespace(&link.text().collect::<String>());
        if bill_number.is_empty() {
            warnings.push(ParseWarning::new(source_url, format!("bill row {leg_id} has no display number")));
            continue;
        }

        let cells = select_all_text(&row, &sel("td"));
        let last_action_date = cells.iter().rev().find_map(|c| parse_date_loose(c));

        rows.push(BillIndexRow {
            bill_number,
            leg_id,
            last_action_date,
        });
    }

    let next_page_url = document
        .select(&sel("a.next, a[rel=next]"))
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(str::to_string);

    Ok((rows, next_page_url, warnings))
}

/// Parses a full bill detail page.
pub fn parse_bill_detail(html: &[u8], source_url: &str, leg_id: &str) -> Result<(Bill, Vec<ParseWarning>), ParseError> {
    let text = page_text(html, source_url)?;
    let document = Html::parse_document(&text);
    let root = document.root_element();
    let mut warnings = Vec::new();

    let bill_number = select_first_text(&root, &sel(".bill-number, h1"))
        .unwrap_or_else(|| {
            warnings.push(ParseWarning::new(source_url, "missing bill number heading"));
            "UNKNOWN".to_string()
        });

    let chamber = Chamber::from_bill_prefix(&bill_number).unwrap_or(Chamber::House);
    let kind = BillKind::from_bill_number(&bill_number);

    let description = select_first_text(&root, &sel(".short-description, .synopsis-heading")).unwrap_or_default();
    let synopsis = select_first_text(&root, &sel(".full-synopsis, .synopsis-text")).unwrap_or_default();
    let status_url = Some(source_url.to_string());

    let mut sponsor_ids = Vec::new();
    for link in document.select(&sel(".sponsors a[href], .sponsor-list a[href]")) {
        if let Some(href) = link.value().attr("href") {
            if let Some(member_ref) = extract_member_ref(href) {
                sponsor_ids.push(member_ref);
            }
        }
    }

    let mut house_sponsor_ids = Vec::new();
    for link in document.select(&sel(".house-sponsors a[href]")) {
        if let Some(href) = link.value().attr("href") {
            if let Some(member_ref) = extract_member_ref(href) {
                house_sponsor_ids.push(member_ref);
            }
        }
    }
    if chamber == Chamber::House {
        // House-originating bills keep house_sponsor_ids empty.
        house_sponsor_ids.clear();
    }

    let mut action_history = Vec::new();
    for row in document.select(&sel(".actions tr, .full-history tr")) {
        let cells = select_all_text(&row, &sel("td"));
        if cells.len() < 2 {
            continue;
        }
        let Some(date) = parse_date_loose(&cells[0]) else {
            warnings.push(ParseWarning::new(source_url, format!("unparseable action date: {:?}", cells[0])));
            continue;
        };
        let row_chamber = if cells.iter().any(|c| c.to_lowercase().contains("senate")) {
            Chamber::Senate
        } else {
            Chamber::House
        };
        action_history.push(ActionRecord {
            date,
            action_text: cells.last().cloned().unwrap_or_default(),
            chamber: row_chamber,
        });
    }
    // chronological order as parsed
    action_history.sort_by_key(|a| a.date);

    let last_action = action_history.last().map(|a| a.action_text.clone());
    let last_action_date = action_history.last().map(|a| a.date);

    let (status, pipeline_depth) = derive_status(&action_history, chamber);

    let primary_sponsor = sponsor_ids.first().cloned();

    Ok((
        Bill {
            leg_id: leg_id.to_string(),
            bill_number,
            chamber,
            kind,
            description,
            synopsis,
            status_url,
            primary_sponsor,
            sponsor_ids,
            house_sponsor_ids,
            last_action,
            last_action_date,
            status,
            action_history,
            pipeline_depth,
            is_dead: false,
        },
        warnings,
    ))
}

/// Minimal status/pipeline-depth derivation used while parsing a bill
/// detail page standalone; the authoritative version (re-run over the full
/// hydrated graph, so cross-bill crossover facts are available) lives in
/// `ilga-graph`.
pub(crate) fn derive_status(history: &[ActionRecord], own_chamber: Chamber) -> (BillStatus, u8) {
    let mut status = BillStatus::Filed;
    let other_chamber_passed = history
        .iter()
        .any(|a| a.chamber != own_chamber && contains_ci(&a.action_text, "third reading - passed"));

    for action in history {
        let t = &action.action_text;
        if contains_ci(t, "assigned to") || contains_ci(t, "referred to") {
            status = status.max_with(BillStatus::InCommittee);
        }
        if contains_ci(t, "third reading - passed") {
            status = status.max_with(BillStatus::PassedChamber);
        }
        if contains_ci(t, "public act") || contains_ci(t, "governor approved") {
            status = status.max_with(BillStatus::Signed);
        }
        if contains_ci(t, "total veto") || contains_ci(t, "amendatory veto") {
            status = status.max_with(BillStatus::Vetoed);
        }
        if contains_ci(t, "sent to the governor") {
            status = status.max_with(BillStatus::SentToGovernor);
        }
    }

    if status == BillStatus::PassedChamber && other_chamber_passed {
        status = BillStatus::PassedBoth;
    }

    (status, status.pipeline_depth())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

trait MaxWith {
    fn max_with(self, other: Self) -> Self;
}

impl MaxWith for BillStatus {
    fn max_with(self, other: Self) -> Self {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }
}

trait Rank {
    fn rank(self) -> u8;
}

impl Rank for BillStatus {
    fn rank(self) -> u8 {
        match self {
            Self::Filed => 0,
            Self::InCommittee => 1,
            Self::PassedChamber => 2,
            Self::PassedBoth => 3,
            Self::SentToGovernor => 4,
            Self::Signed | Self::Vetoed => 5,
        }
    }
}

fn extract_leg_id(href: &str) -> Option<String> {
    let query = href.split('?').nth(1)?;
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k.eq_ignore_ascii_case("docnum") || k.eq_ignore_ascii_case("legid")).then(|| v.to_string())
    })
}

fn extract_member_ref(href: &str) -> Option<String> {
    let query = href.split('?').nth(1)?;
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k.eq_ignore_ascii_case("memberid")).then(|| v.to_string())
    })
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
    fn signed_bill_reaches_depth_six() {
        let history = vec![
            ActionRecord { date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), action_text: "Filed".into(), chamber: Chamber::House },
            ActionRecord { date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(), action_text: "Assigned to Executive".into(), chamber: Chamber::House },
            ActionRecord { date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(), action_text: "Third Reading - Passed".into(), chamber: Chamber::House },
            ActionRecord { date: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(), action_text: "Sent to the Governor".into(), chamber: Chamber::House },
            ActionRecord { date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(), action_text: "Public Act".into(), chamber: Chamber::House },
        ];
        let (status, depth) = derive_status(&history, Chamber::House);
        assert_eq!(status, BillStatus::Signed);
        assert_eq!(depth, 6);
    }

    #[test]
    fn leg_id_extraction() {
        assert_eq!(extract_leg_id("/Legislation/BillStatus.asp?DocNum=145&GA=104"), Some("145".to_string()));
    }
}
