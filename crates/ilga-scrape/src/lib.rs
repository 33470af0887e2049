//! Scrapers: members and committees, bills, and votes/witness
//! slips, each incremental and resumable against the local cache.

pub mod bills;
pub mod error;
pub mod members;
pub mod votes;

pub use bills::{scrape_bills, BillScrapeReport};
pub use error::ScrapeError;
pub use members::{scrape_members_and_committees, MemberScrapeReport};
pub use votes::{scrape_votes_and_slips, ScanStrategy, VoteScrapeReport};
