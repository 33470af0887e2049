//! Advocacy error taxonomy: user-visible failures for the
//! crosswalk and the card selector.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvocacyError {
    #[error("ZIP not in our data")]
    ZipNotFound,
    #[error("No targets found for this policy category")]
    NoTargetsFound,
}
