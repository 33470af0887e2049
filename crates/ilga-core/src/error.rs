//! Core error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid chamber string: {0}")]
    InvalidChamber(String),

    #[error("invalid bill number: {0}")]
    InvalidBillNumber(String),

    #[error("invalid leg_id: {0}")]
    InvalidLegId(String),

    #[error("member not found: {0}")]
    MemberNotFound(String),

    #[error("bill not found: {0}")]
    BillNotFound(String),

    #[error("committee not found: {0}")]
    CommitteeNotFound(String),
}
