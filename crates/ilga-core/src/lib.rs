//! Shared domain types for the ILGA Watch graph.

pub mod error;
pub mod models;

pub use error::CoreError;
pub use models::*;
