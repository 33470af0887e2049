//! Member index + detail page parsing.

use crate::text::{normalize_whitespace, sel, select_all_text, select_first_text};
use crate::{ParseError, ParseWarning};
use ilga_core::{CareerRange, Chamber, Office, OfficeKind, Party};
use scraper::Html;

/// Fields extractable from a member detail page without knowing the
/// member's stable ID (assigned by the scraper from the page URL).
#[derive(Debug, Clone, Default)]
pub struct MemberDetail {
    pub name: Option<String>,
    pub party: Option<Party>,
    pub district: Option<u32>,
    pub role: Option<String>,
    pub career_ranges: Vec<CareerRange>,
    pub offices: Vec<Office>,
}

/// Parses the member index page into `(member_url, chamber)` pairs. Rows
/// without a detail link are skipped.
pub fn parse_member_index(
    html: &[u8],
    source_url: &str,
) -> Result<(Vec<(String, Chamber)>, Vec<ParseWarning>), ParseError> {
    let text = page_text(html, source_url)?;
    let document = Html::parse_document(&text);
    let row_sel = sel("table tr");
    let link_sel = sel("a[href]");

    let mut rows = Vec::new();
    let mut warnings = Vec::new();

    for row in document.select(&row_sel) {
        let Some(link) = row.select(&link_sel).next() else {
            continue; // row has no detail link; not a member row
        };
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if !href.to_ascii_lowercase().contains("memberid") {
            continue;
        }

        let row_text = normalize_whitespace(&row.text().collect::<String>()).to_lowercase();
        let chamber = if row_text.contains("senate") || href.to_ascii_lowercase().contains("senate") {
            Chamber::Senate
        } else if row_text.contains("house") || href.to_ascii_lowercase().contains("house") {
            Chamber::House
        } else {
            warnings.push(ParseWarning::new(source_url, "member row with undetermined chamber"));
            continue;
        };

        rows.push((href.to_string(), chamber));
    }

    Ok((rows, warnings))
}

/// Parses a member detail page. Unrecognised optional fields (no career
/// history, no offices) degrade to warnings, never a hard error.
pub fn parse_member_detail(
    html: &[u8],
    source_url: &str,
) -> Result<(MemberDetail, Vec<ParseWarning>), ParseError> {
    let text = page_text(html, source_url)?;
    let document = Html::parse_document(&text);
    let root = document.root_element();

    let mut warnings = Vec::new();
    let mut detail = MemberDetail::default();

    detail.name = select_first_text(&root, &sel("h1, .member-name, #content h1"));
    if detail.name.is_none() {
        warnings.push(ParseWarning::new(source_url, "missing member name heading"));
    }

    let party_text = select_first_text(&root, &sel(".party, .member-party"));
    detail.party = party_text.as_deref().map(parse_party);
    if detail.party.is_none() {
        warnings.push(ParseWarning::new(source_url, "missing party label"));
    }

    let district_text = select_first_text(&root, &sel(".district, .member-district"));
    detail.district = district_text
        .as_deref()
        .and_then(extract_first_number)
        .map(|n| n as u32);

    detail.role = select_first_text(&root, &sel(".leadership-title, .member-role"));

    for row in document.select(&sel(".career-history tr, .service-record tr")) {
        let cells = select_all_text(&row, &sel("td"));
        if cells.len() < 2 {
            continue;
        }
        if let Some(range) = parse_career_row(&cells) {
            detail.career_ranges.push(range);
        } else {
            warnings.push(ParseWarning::new(source_url, format!("unparseable career row: {cells:?}")));
        }
    }

    for block in document.select(&sel(".office, .office-block")) {
        let kind_text = select_first_text(&block, &sel(".office-kind")).unwrap_or_default();
        let kind = if kind_text.to_lowercase().contains("springfield") {
            OfficeKind::Springfield
        } else {
            OfficeKind::District
        };
        let Some(address) = select_first_text(&block, &sel(".address")) else {
            continue;
        };
        detail.offices.push(Office {
            kind,
            address,
            phone: select_first_text(&block, &sel(".phone")),
            fax: select_first_text(&block, &sel(".fax")),
        });
    }

    Ok((detail, warnings))
}

fn parse_party(text: &str) -> Party {
    let lower = text.to_lowercase();
    if lower.contains('d') && !lower.contains('r') {
        Party::Democrat
    } else if lower.contains('r') {
        Party::Republican
    } else {
        Party::Other
    }
}

fn parse_career_row(cells: &[String]) -> Option<CareerRange> {
    let chamber = if cells.iter().any(|c| c.to_lowercase().contains("senate")) {
        Chamber::Senate
    } else {
        Chamber::House
    };

    let years: Vec<i32> = cells
        .iter()
        .flat_map(|c| c.split(['-', '–', '\u{2013}']))
        .filter_map(|tok| tok.trim().parse::<i32>().ok())
        .collect();

    let start_year = *years.first()?;
    let end_year = years.get(1).copied();

    Some(CareerRange {
        start_year,
        end_year,
        chamber,
    })
}

fn extract_first_number(text: &str) -> Option<i64> {
    let digits: String = text.chars().skip_while(|c| !c.is_ascii_digit()).take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
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
    fn index_skips_rows_without_detail_link() {
        let html = br#"
            <table>
              <tr><td>Senate</td><td><a href="/senate/Senator.asp?MemberID=1234">Jane Doe</a></td></tr>
              <tr><td>header row, no link</td></tr>
            </table>
        "#;
        let (rows, _warnings) = parse_member_index(html, "http://example.test/index").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1, Chamber::Senate);
    }

    #[test]
    fn detail_extracts_name_and_party() {
        let html = br#"<html><body><h1>Jane Doe</h1><span class="party">D</span></body></html>"#;
        let (detail, _warnings) = parse_member_detail(html, "http://example.test/member").unwrap();
        assert_eq!(detail.name.as_deref(), Some("Jane Doe"));
        assert_eq!(detail.party, Some(Party::Democrat));
    }
}
