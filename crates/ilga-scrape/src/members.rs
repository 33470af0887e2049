//! Member + committee scrape.
//!
//! Detail pages are fetched through a bounded worker pool (default
//! concurrency 10) using `stream::iter(..).buffer_unordered(N)`. All cache
//! writes happen on the calling task after the pool
//! drains, so the scrape has a single writer even though fetches run
//! concurrently.

use crate::error::ScrapeError;
use futures::stream::{self, StreamExt};
use ilga_cache::CacheStore;
use ilga_core::{Chamber, Committee, CommitteeSeat, Member};
use ilga_fetch::Fetcher;
use ilga_parse::{committee, member};
use std::collections::HashMap;
use tracing::warn;

const MEMBER_DETAIL_CONCURRENCY: usize = 10;

#[derive(Debug, Default)]
pub struct MemberScrapeReport {
    pub members_fetched: usize,
    pub committees_fetched: usize,
}

/// Runs the member+committee scrape and persists every cache file it
/// produces. `member_limit` caps the number of detail pages fetched per
/// chamber (dev runs).
///
/// # Errors
/// Returns `ScrapeError` if an index page cannot be fetched or parsed; a
/// single member or committee detail failure is logged and skipped.
pub async fn scrape_members_and_committees(
    fetcher: &Fetcher,
    cache: &CacheStore,
    base_url: &str,
    member_limit: Option<usize>,
) -> Result<MemberScrapeReport, ScrapeError> {
    let mut member_urls = Vec::new();
    for (chamber, path) in [(Chamber::House, "house/members"), (Chamber::Senate, "senate/members")] {
        let index_url = format!("{base_url}/{path}");
        let response = fetcher.fetch(&index_url).await?;
        let (rows, warnings) = member::parse_member_index(&response.bytes, &index_url)?;
        log_parse_warnings(&warnings);

        let mut rows: Vec<(String, Chamber)> = rows.into_iter().filter(|(_, c)| *c == chamber).collect();
        if let Some(limit) = member_limit {
            rows.truncate(limit);
        }
        member_urls.extend(rows);
    }

    let members: Vec<Member> = stream::iter(member_urls)
        .map(|(url, chamber)| fetch_member_detail(fetcher, base_url, url, chamber))
        .buffer_unordered(MEMBER_DETAIL_CONCURRENCY)
        .filter_map(|result| async move { result })
        .collect()
        .await;

    let members_fetched = members.len();
    cache.save_members(&members)?;

    let (committees, rosters, committee_bills) = scrape_committees(fetcher, base_url, &members).await?;
    let committees_fetched = committees.len();
    cache.save_committees(&committees)?;
    cache.save_committee_rosters(&rosters)?;
    cache.save_committee_bills(&committee_bills)?;

    Ok(MemberScrapeReport { members_fetched, committees_fetched })
}

async fn fetch_member_detail(fetcher: &Fetcher, base_url: &str, url: String, chamber: Chamber) -> Option<Member> {
    let full_url = absolute(base_url, &url);
    let response = fetcher.fetch(&full_url).await.map_err(|e| warn!(url = %full_url, error = %e, "member detail fetch failed")).ok()?;
    let (detail, warnings) =
        member::parse_member_detail(&response.bytes, &full_url).map_err(|e| warn!(url = %full_url, error = %e, "member detail parse failed")).ok()?;
    log_parse_warnings(&warnings);

    let member_id = member_id_from_url(&url)?;
    let mut m = Member::new(member_id, detail.name.unwrap_or_default(), chamber, detail.party.unwrap_or(ilga_core::Party::Other), detail.district.unwrap_or(1));
    m.role = detail.role;
    m.career_ranges = detail.career_ranges;
    m.offices = detail.offices;
    Some(m)
}

async fn scrape_committees(
    fetcher: &Fetcher,
    base_url: &str,
    members: &[Member],
) -> Result<(Vec<Committee>, HashMap<String, Vec<CommitteeSeat>>, HashMap<String, Vec<String>>), ScrapeError> {
    let mut committees = Vec::new();
    let mut rosters = HashMap::new();
    let mut committee_bills = HashMap::new();

    for chamber in [Chamber::House, Chamber::Senate] {
        let index_url = format!("{base_url}/{}/committees", chamber.to_string().to_lowercase());
        let response = fetcher.fetch(&index_url).await?;
        let (stubs, warnings) = committee::parse_committee_index(&response.bytes, &index_url, chamber)?;
        log_parse_warnings(&warnings);

        for stub in stubs {
            let detail_url = format!("{base_url}/committees/{}", stub.code);
            let Ok(response) = fetcher.fetch(&detail_url).await else {
                warn!(code = %stub.code, "committee detail fetch failed, skipping");
                continue;
            };
            let Ok(((roster, bill_refs), warnings)) = committee::parse_committee_detail(&response.bytes, &detail_url) else {
                warn!(code = %stub.code, "committee detail parse failed, skipping");
                continue;
            };
            log_parse_warnings(&warnings);

            let seats: Vec<CommitteeSeat> = roster.into_iter().filter_map(|entry| resolve_seat(members, &entry)).collect();
            rosters.insert(stub.code.clone(), seats.clone());
            committee_bills.insert(stub.code.clone(), bill_refs);
            committees.push(Committee { code: stub.code, name: stub.name, parent_code: stub.parent_code, chamber: stub.chamber, members: seats, bill_ids: std::collections::BTreeSet::new() });
        }
    }

    Ok((committees, rosters, committee_bills))
}

fn resolve_seat(members: &[Member], entry: &committee::CommitteeRosterEntry) -> Option<CommitteeSeat> {
    let matched = members.iter().find(|m| ilga_util::name_norm::names_match(&entry.reported_name, &m.name))?;
    Some(CommitteeSeat { member_id: matched.member_id.clone(), role: entry.role })
}

fn member_id_from_url(url: &str) -> Option<String> {
    let query = url.split('?').nth(1)?;
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        k.eq_ignore_ascii_case("memberid").then(|| v.to_string())
    })
}

fn absolute(base_url: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{base_url}{url}")
    }
}

fn log_parse_warnings(warnings: &[ilga_parse::ParseWarning]) {
    for w in warnings {
        warn!(source_url = %w.source_url, message = %w.message, "parse warning");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_id_extracted_from_query_string() {
        assert_eq!(member_id_from_url("/senate/Senator.asp?MemberID=1234"), Some("1234".to_string()));
    }

    #[test]
    fn absolute_url_passes_through() {
        assert_eq!(absolute("https://ilga.gov", "https://other.test/x"), "https://other.test/x");
        assert_eq!(absolute("https://ilga.gov", "/x"), "https://ilga.gov/x");
    }
}
