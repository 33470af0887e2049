//! Startup summary table and CSV timing log: one row per
//! pipeline step, reporting duration, record count, and whether the step
//! read live data or fell back to the previous cached state.

use colored::Colorize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSource {
    Live,
    Cache,
}

#[derive(Debug, Clone)]
pub struct StepReport {
    pub name: String,
    pub duration: Duration,
    pub records: usize,
    pub source: StepSource,
    pub error: Option<String>,
}

impl StepReport {
    #[must_use]
    pub fn ok(name: &str, duration: Duration, records: usize, source: StepSource) -> Self {
        Self { name: name.to_string(), duration, records, source, error: None }
    }

    #[must_use]
    pub fn failed(name: &str, duration: Duration, error: String) -> Self {
        Self { name: name.to_string(), duration, records: 0, source: StepSource::Cache, error: Some(error) }
    }
}

/// Prints the per-step table with `colored`-highlighted `=== Section ===`
/// headers.
pub fn print_summary(steps: &[StepReport]) {
    println!("{}", "=== Startup Summary ===".cyan().bold());
    for step in steps {
        let source = match step.source {
            StepSource::Live => "live".green(),
            StepSource::Cache => "cache".yellow(),
        };
        match &step.error {
            None => {
                println!("  {:<24} {:>6} records   {:>7.2}s   {}", step.name.cyan(), step.records, step.duration.as_secs_f64(), source);
            }
            Some(message) => {
                println!("  {:<24} {}", step.name.cyan(), format!("FAILED: {message}").red());
            }
        }
    }
}

/// Appends one row per step to `{cache_dir}/etl_timing_log.csv`, creating
/// the file with a header the first time it is written.
///
/// # Errors
/// Returns an `io::Error` if the log file cannot be opened or written.
pub fn append_csv_timing_log(cache_dir: &str, run_at: &str, mode: &str, steps: &[StepReport]) -> std::io::Result<()> {
    use std::io::Write;

    let path = std::path::Path::new(cache_dir).join("etl_timing_log.csv");
    let needs_header = !path.exists();

    std::fs::create_dir_all(cache_dir)?;
    let mut file = std::fs::OpenOptions::new().create(true).append(true).open(&path)?;
    if needs_header {
        writeln!(file, "run_at,mode,step,duration_secs,records,source,error")?;
    }
    for step in steps {
        let source = match step.source {
            StepSource::Live => "live",
            StepSource::Cache => "cache",
        };
        let error = step.error.as_deref().unwrap_or("");
        writeln!(file, "{run_at},{mode},{},{:.3},{},{source},{error}", step.name, step.duration.as_secs_f64(), step.records)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_once_across_multiple_runs() {
        let dir = tempfile::tempdir().unwrap();
        let cache_dir = dir.path().to_str().unwrap();

        let steps = vec![StepReport::ok("bills", Duration::from_secs_f64(1.5), 42, StepSource::Live)];
        append_csv_timing_log(cache_dir, "2026-07-27T00:00:00Z", "scrape", &steps).unwrap();
        append_csv_timing_log(cache_dir, "2026-07-27T00:05:00Z", "incremental", &steps).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("etl_timing_log.csv")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines[0], "run_at,mode,step,duration_secs,records,source,error");
        assert_eq!(lines.iter().filter(|l| l.starts_with("run_at")).count(), 1);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn row_records_source_and_error_columns() {
        let dir = tempfile::tempdir().unwrap();
        let cache_dir = dir.path().to_str().unwrap();

        let steps = vec![
            StepReport::ok("members_and_committees", Duration::from_secs_f64(0.25), 10, StepSource::Live),
            StepReport::failed("votes_and_witness_slips", Duration::from_secs_f64(0.1), "timed out".to_string()),
        ];
        append_csv_timing_log(cache_dir, "2026-07-27T00:00:00Z", "scrape", &steps).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("etl_timing_log.csv")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines[1], "2026-07-27T00:00:00Z,scrape,members_and_committees,0.250,10,live,");
        assert_eq!(lines[2], "2026-07-27T00:00:00Z,scrape,votes_and_witness_slips,0.100,0,cache,timed out");
    }

    #[test]
    fn failed_step_defaults_to_zero_records_and_cache_source() {
        let step = StepReport::failed("bills", Duration::from_secs(1), "connection refused".to_string());
        assert_eq!(step.records, 0);
        assert_eq!(step.source, StepSource::Cache);
        assert_eq!(step.error.as_deref(), Some("connection refused"));
    }
}
