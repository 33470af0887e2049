//! GraphQL + advocacy server. At boot this binary always
//! runs in "load-only" mode: it reads the cache, hydrates the graph, and
//! loads or recomputes analytics per the staleness rule. Scraping is the
//! `ilga-cli` binary's job.

use color_eyre::eyre::Result;
use ilga_advocacy::Crosswalk;
use ilga_analytics::{apply_seating, compute_moneyball, compute_scorecards, SeatChart};
use ilga_api::state::AppState;
use ilga_cache::CacheStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let config = ilga_util::config::Config::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()))
        .init();
    config.warn_prod_gaps();

    let cache = CacheStore::new(&config.cache_dir);

    tracing::info!("hydrating graph from cache at {}", config.cache_dir);
    let mut graph = ilga_graph::hydrate(&cache, config.dead_after_days)?;
    apply_seating(&mut graph, &SeatChart::illinois_senate_seed());
    let graph = Arc::new(graph);

    let analytics_fresh = cache.is_analytics_fresh().unwrap_or(false);
    let (scorecards, moneyball) = if analytics_fresh {
        tracing::info!("loading analytics from cache");
        (cache.load_scorecards()?, cache.load_moneyball()?)
    } else {
        tracing::info!("analytics cache stale or missing, recomputing");
        let scorecards = compute_scorecards(&graph);
        let moneyball = compute_moneyball(&graph, &scorecards);
        cache.save_scorecards(&scorecards)?;
        cache.save_moneyball(&moneyball)?;
        (scorecards, moneyball)
    };

    let crosswalk = if config.seed_mode { Crosswalk::dev_seed() } else { load_crosswalk(&config.mock_dir) };

    let ready = !graph.members.is_empty();
    let app_state = Arc::new(AppState {
        graph,
        scorecards: Arc::new(scorecards),
        moneyball: Arc::new(moneyball),
        crosswalk: Arc::new(crosswalk),
        dev_mode: config.dev_mode,
        api_key: config.api_key.clone(),
        ready,
    });

    let app = ilga_api::build_router(app_state, config.dev_mode, &config.cors_origins);

    let port: u16 = std::env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8080);
    let addr = format!("0.0.0.0:{port}");
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_crosswalk(mock_dir: &str) -> Crosswalk {
    let path = std::path::Path::new(mock_dir).join("zip_crosswalk.csv");
    match std::fs::read_to_string(&path) {
        Ok(csv) => Crosswalk::from_csv_str(&csv),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "zip crosswalk file missing, falling back to dev seed");
            Crosswalk::dev_seed()
        }
    }
}
