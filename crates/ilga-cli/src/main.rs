//! ETL Orchestrator: full scrape, incremental scrape, and a
//! `status` inspection command. Load-only mode is the `ilga-api` binary's
//! job at boot, not this one's.

mod cli;
mod commands;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use ilga_cache::CacheStore;
use ilga_fetch::{Fetcher, FetcherConfig};

#[derive(Parser)]
#[command(name = "ilga-cli")]
#[command(about = "ETL orchestrator for the ILGA Watch scrapers and analytics")]
#[command(version)]
#[command(styles = cli::get_styles())]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Member+committee scrape, bill scrape, vote+slip scrape, then analytics
    Scrape {
        /// Reduce inter-request politeness delay; retries are never disabled
        #[arg(long)]
        fast: bool,
    },

    /// Bill scrape only, with an analytics recompute gated on bill changes
    Incremental {
        #[arg(long)]
        fast: bool,
    },

    /// Report what's currently on disk in the cache
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()))
        .init();

    let cli = Cli::parse();
    let config = ilga_util::config::Config::from_env()?;
    config.warn_prod_gaps();
    let cache = CacheStore::new(&config.cache_dir);

    match cli.command {
        Commands::Scrape { fast } => {
            let fetcher_config = if fast { FetcherConfig::default().fast() } else { FetcherConfig::default() };
            let fetcher = Fetcher::new(fetcher_config)?;
            let steps = commands::scrape::run(&config, &fetcher, &cache).await;
            commands::report::print_summary(&steps);
            commands::report::append_csv_timing_log(&config.cache_dir, &chrono::Utc::now().to_rfc3339(), "scrape", &steps)?;
        }
        Commands::Incremental { fast } => {
            let fetcher_config = if fast { FetcherConfig::default().fast() } else { FetcherConfig::default() };
            let fetcher = Fetcher::new(fetcher_config)?;
            let steps = commands::incremental::run(&config, &fetcher, &cache).await;
            commands::report::print_summary(&steps);
            commands::report::append_csv_timing_log(&config.cache_dir, &chrono::Utc::now().to_rfc3339(), "incremental", &steps)?;
        }
        Commands::Status => commands::status::run(&cache)?,
    }

    Ok(())
}
