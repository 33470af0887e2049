//! Committee index + detail page parsing.

use crate::text::{normalize_whitespace, sel, select_all_text, select_first_text};
use crate::{ParseError, ParseWarning};
use ilga_core::{Chamber, CommitteeRole};
use scraper::Html;

#[derive(Debug, Clone)]
pub struct CommitteeStub {
    pub code: String,
    pub name: String,
    pub parent_code: Option<String>,
    pub chamber: Chamber,
}

#[derive(Debug, Clone)]
pub struct CommitteeRosterEntry {
    /// Reported name as printed on the roster; reconciled to a `member_id`
    /// by the caller using `ilga_util::name_norm`.
    pub reported_name: String,
    pub role: CommitteeRole,
}

pub fn parse_committee_index(
    html: &[u8],
    source_url: &str,
    chamber: Chamber,
) -> Result<(Vec<CommitteeStub>, Vec<ParseWarning>), ParseError> {
    let text = page_text(html, source_url)?;
    let document = Html::parse_document(&text);
    let mut stubs = Vec::new();
    let mut warnings = Vec::new();

    for row in document.select(&sel("table tr")) {
        let Some(link) = row.select(&sel("a[href]")).next() else {
            continue;
        };
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let Some(code) = extract_query_param(href, "committeeid").or_else(|| extract_query_param(href, "code")) else {
            continue;
        };
        let name = normalize_whitespace(&link.text().collect::<String>());
        if name.is_empty() {
            warnings.push(ParseWarning::new(source_url, format!("committee {code} has no name")));
            continue;
        }
        let parent_code = row
            .select(&sel(".parent-committee"))
            .next()
            .and_then(|el| el.value().attr("data-code"))
            .map(str::to_string);

        stubs.push(CommitteeStub {
            code,
            name,
            parent_code,
            chamber,
        });
    }

    Ok((stubs, warnings))
}

pub fn parse_committee_detail(
    html: &[u8],
    source_url: &str,
) -> Result<((Vec<CommitteeRosterEntry>, Vec<String>), Vec<ParseWarning>), ParseError> {
    let text = page_text(html, source_url)?;
    let document = Html::parse_document(&text);
    let mut warnings = Vec::new();
    let mut roster = Vec::new();

    for row in document.select(&sel(".roster tr, .committee-members tr")) {
        let cells = select_all_text(&row, &sel("td"));
        let Some(name) = cells.first() else { continue };
        if name.is_empty() {
            continue;
        }
        let role_text = cells.get(1).map(String::as_str).unwrap_or("member").to_lowercase();
        let role = if role_text.contains("vice") {
            CommitteeRole::ViceChair
        } else if role_text.contains("chair") {
            CommitteeRole::Chair
        } else if role_text.contains("minority spokes") {
            CommitteeRole::MinoritySpokesperson
        } else {
            CommitteeRole::Member
        };
        roster.push(CommitteeRosterEntry {
            reported_name: name.clone(),
            role,
        });
    }

    if roster.is_empty() {
        warnings.push(ParseWarning::new(source_url, "committee roster is empty"));
    }

    let bill_refs: Vec<String> = document
        .select(&sel("a[href]"))
        .filter_map(|el| el.value().attr("href"))
        .filter_map(|href| extract_query_param(href, "docnum").or_else(|| extract_query_param(href, "legid")))
        .collect();

    Ok(((roster, bill_refs), warnings))
}

fn extract_query_param(href: &str, key: &str) -> Option<String> {
    let query = href.split('?').nth(1)?;
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k.eq_ignore_ascii_case(key)).then(|| v.to_string())
    })
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
    fn extracts_committee_code_from_query() {
        assert_eq!(
            extract_query_param("/senate/committee.asp?CommitteeID=SCRL", "committeeid"),
            Some("SCRL".to_string())
        );
    }
}
