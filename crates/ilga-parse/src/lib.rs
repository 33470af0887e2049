//! Pure HTML → typed record parsers. No parser here touches the
//! network or disk; each takes HTML bytes (plus the source URL, for error
//! context) and returns records alongside any non-fatal `ParseWarning`s.

pub mod bill;
pub mod committee;
pub mod member;
mod text;
pub mod vote;
pub mod witness_slip;

pub use bill::{parse_bill_detail, parse_bill_index_page, BillIndexRow};
pub use committee::{parse_committee_detail, parse_committee_index, CommitteeRosterEntry, CommitteeStub};
pub use member::{parse_member_detail, parse_member_index, MemberDetail};
pub use vote::parse_vote_event;
pub use witness_slip::parse_witness_slips;

/// Non-fatal parse issue: the offending record is skipped and a counter is
/// incremented. A `ParseError` (whole-page structure unreadable)
/// is represented as `Err` from the parsing function instead.
#[derive(Debug, Clone)]
pub struct ParseWarning {
    pub source_url: String,
    pub message: String,
}

impl ParseWarning {
    #[must_use]
    pub fn new(source_url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            message: message.into(),
        }
    }
}

/// A page whose overall structure could not be interpreted at all; the
/// containing batch aborts.
#[derive(Debug, thiserror::Error)]
#[error("could not parse page structure at {source_url}: {message}")]
pub struct ParseError {
    pub source_url: String,
    pub message: String,
}
