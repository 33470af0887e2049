//! Request-scoped batch loaders. A fresh set is constructed
//! per GraphQL request in the `Schema`'s per-request `Data`; `DataLoader`
//! gives us both key coalescing within a tick and per-request memoization,
//! avoiding N+1 lookups against the graph.

use async_graphql::dataloader::{DataLoader, Loader};
use ilga_core::{Bill, Member, MoneyballProfile, Scorecard};
use ilga_graph::Graph;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LoaderError(pub String);

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for LoaderError {}

pub struct MemberLoader(pub Arc<Graph>);

impl Loader<String> for MemberLoader {
    type Value = Member;
    type Error = LoaderError;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        Ok(keys.iter().filter_map(|k| self.0.member(k).map(|m| (k.clone(), m.clone()))).collect())
    }
}

pub struct BillLoader(pub Arc<Graph>);

impl Loader<String> for BillLoader {
    type Value = Bill;
    type Error = LoaderError;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        Ok(keys.iter().filter_map(|k| self.0.bill(k).map(|b| (k.clone(), b.clone()))).collect())
    }
}

pub struct ScorecardLoader(pub Arc<HashMap<String, Scorecard>>);

impl Loader<String> for ScorecardLoader {
    type Value = Scorecard;
    type Error = LoaderError;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        Ok(keys.iter().filter_map(|k| self.0.get(k).map(|s| (k.clone(), *s))).collect())
    }
}

pub struct MoneyballProfileLoader(pub Arc<HashMap<String, MoneyballProfile>>);

impl Loader<String> for MoneyballProfileLoader {
    type Value = MoneyballProfile;
    type Error = LoaderError;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        Ok(keys.iter().filter_map(|k| self.0.get(k).map(|p| (k.clone(), *p))).collect())
    }
}

/// Bundles all four request-scoped loaders; built fresh per request in the
/// `graphql_handler` and attached to the query's `Data`.
pub struct Loaders {
    pub members: DataLoader<MemberLoader>,
    pub bills: DataLoader<BillLoader>,
    pub scorecards: DataLoader<ScorecardLoader>,
    pub moneyball: DataLoader<MoneyballProfileLoader>,
}

impl Loaders {
    #[must_use]
    pub fn new(graph: Arc<Graph>, scorecards: Arc<HashMap<String, Scorecard>>, moneyball: Arc<HashMap<String, MoneyballProfile>>) -> Self {
        Self {
            members: DataLoader::new(MemberLoader(graph.clone()), tokio::spawn),
            bills: DataLoader::new(BillLoader(graph), tokio::spawn),
            scorecards: DataLoader::new(ScorecardLoader(scorecards), tokio::spawn),
            moneyball: DataLoader::new(MoneyballProfileLoader(moneyball), tokio::spawn),
        }
    }
}
