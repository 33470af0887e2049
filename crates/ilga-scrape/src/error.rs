//! Scraper error taxonomy. A catastrophic failure (an index
//! page unreachable after retries, or unparseable) aborts one pipeline; it
//! never crashes the process, and the orchestrator (`ilga-cli`) retains the
//! previous cached state for that component.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("index page unreachable: {0}")]
    IndexUnreachable(#[from] ilga_fetch::FetchError),
    #[error("index page unparseable: {0}")]
    IndexUnparseable(#[from] ilga_parse::ParseError),
    #[error(transparent)]
    Cache(#[from] ilga_cache::CacheError),
}
