use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Cache(#[from] ilga_cache::CacheError),
}
