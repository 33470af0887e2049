//! Reports what's currently on disk in the cache, without touching the
//! network (the staleness rule, inspected rather than acted on).

use colored::Colorize;
use ilga_cache::CacheStore;

pub fn run(cache: &CacheStore) -> color_eyre::eyre::Result<()> {
    let members = cache.load_members()?;
    let bills = cache.load_bills()?;
    let vote_events = cache.load_vote_events()?;
    let witness_slips = cache.load_witness_slips()?;
    let analytics_fresh = cache.is_analytics_fresh()?;

    println!("{}", "=== Cache Status ===".cyan().bold());
    println!("Cache dir: {}", cache.dir().display());
    println!("Members: {}", members.len().to_string().cyan());
    println!("Bills: {}", bills.len().to_string().cyan());
    println!("Vote events: {}", vote_events.len().to_string().cyan());
    println!("Witness slips: {}", witness_slips.len().to_string().cyan());
    if analytics_fresh {
        println!("Analytics: {}", "fresh".green());
    } else {
        println!("Analytics: {}", "stale or missing".yellow());
    }

    Ok(())
}
