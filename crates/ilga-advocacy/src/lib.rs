//! ZIP Crosswalk and Advocacy Selector.

pub mod crosswalk;
pub mod error;
pub mod policy;
pub mod selector;

pub use crosswalk::{Crosswalk, DistrictPair};
pub use error::AdvocacyError;
pub use selector::{select, AdvocacyCard, CardKind};
