//! Witness-slip page parsing. Each row yields one slip.

use crate::text::{normalize_whitespace, sel, select_all_text, select_first_text};
use crate::{ParseError, ParseWarning};
use chrono::NaiveDate;
use ilga_core::{Chamber, SlipPosition, WitnessSlip};
use scraper::Html;

pub fn parse_witness_slips(html: &[u8], source_url: &str) -> Result<(Vec<WitnessSlip>, Vec<ParseWarning>), ParseError> {
    let text = page_text(html, source_url)?;
    let document = Html::parse_document(&text);
    let root = document.root_element();
    let mut warnings = Vec::new();

    let header = select_first_text(&root, &sel(".slip-header, h1")).unwrap_or_default();
    let bill_number = extract_bill_number(&header).unwrap_or_else(|| {
        warnings.push(ParseWarning::new(source_url, "could not find bill number in slip header"));
        "UNKNOWN".to_string()
    });
    let chamber = Chamber::from_bill_prefix(&bill_number).unwrap_or(Chamber::House);
    let committee_code = select_first_text(&root, &sel(".committee-code")).unwrap_or_default();
    let hearing_date = select_first_text(&root, &sel(".hearing-date"))
        .as_deref()
        .and_then(parse_date_loose)
        .unwrap_or_else(|| {
            warnings.push(ParseWarning::new(source_url, "could not find hearing date"));
            NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid fallback date")
        });

    let mut slips = Vec::new();
    for row in document.select(&sel(".slips tr, .witness-slips tr")) {
        let cells = select_all_text(&row, &sel("td"));
        if cells.len() < 3 {
            continue;
        }
        let filer_name = cells[0].clone();
        if filer_name.is_empty() {
            continue;
        }
        let represents = cells.get(1).cloned().filter(|s| !s.is_empty()).unwrap_or_else(|| "self".to_string());
        let position_text = cells.get(2).map(String::as_str).unwrap_or("").to_lowercase();
        let position = if position_text.contains("proponent") {
            SlipPosition::Proponent
        } else if position_text.contains("opponent") {
            SlipPosition::Opponent
        } else if position_text.contains("information") {
            SlipPosition::Information
        } else {
            SlipPosition::NoPosition
        };
        let will_testify = cells.get(3).is_some_and(|c| c.to_lowercase().contains("yes"));

        slips.push(WitnessSlip {
            bill_number: bill_number.clone(),
            chamber,
            committee_code: committee_code.clone(),
            hearing_date,
            filer_name,
            represents,
            position,
            will_testify,
        });
    }

    if slips.is_empty() {
        warnings.push(ParseWarning::new(source_url, "no witness slips found on page"));
    }

    Ok((slips, warnings))
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
    fn defaults_represents_to_self() {
        let html = br#"
            <html><body>
            <h1>HB1234 Witness Slips</h1>
            <table class="slips">
              <tr><td>Jane Q. Public</td><td></td><td>Proponent</td><td>No</td></tr>
            </table>
            </body></html>
        "#;
        let (slips, _w) = parse_witness_slips(html, "http://example.test/slips").unwrap();
        assert_eq!(slips.len(), 1);
        assert_eq!(slips[0].represents, "self");
        assert_eq!(slips[0].position, SlipPosition::Proponent);
    }
}
