//! Central configuration. A single `PROFILE` sets sensible
//! defaults; individual environment variables override them, the same way
//! `polsearch-api::main` reads `PORT`/`DATABASE_URL` directly from env.

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Dev,
    Prod,
}

impl Profile {
    fn from_env() -> Self {
        match std::env::var("PROFILE").as_deref() {
            Ok("prod") => Self::Prod,
            _ => Self::Dev,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub profile: Profile,
    pub ga_id: Option<String>,
    pub session_id: Option<String>,
    pub base_url: String,
    pub cache_dir: String,
    pub mock_dir: String,
    pub dev_mode: bool,
    pub seed_mode: bool,
    pub load_only: bool,
    pub incremental: bool,
    pub member_limit: u32,
    pub sb_limit: u32,
    pub hb_limit: u32,
    pub bill_export_limit: u32,
    pub cors_origins: Vec<String>,
    pub api_key: Option<String>,
    pub vote_bill_urls: Vec<String>,
    /// Dead-bill timeout, in days, configurable so it can be tuned without
    /// a code change.
    pub dead_after_days: i64,
}

impl Config {
    /// Loads configuration from the environment, applying `PROFILE`
    /// defaults first and letting explicit env vars override them.
    ///
    /// # Errors
    /// Returns `ConfigError::Malformed` if a numeric env var fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let profile = Profile::from_env();
        let (dev_mode_default, seed_mode_default, cors_default, member_limit_default) = match profile {
            Profile::Dev => (true, true, "*".to_string(), 20),
            Profile::Prod => (false, false, String::new(), 0),
        };

        Ok(Self {
            profile,
            ga_id: env_opt("GA_ID"),
            session_id: env_opt("SESSION_ID"),
            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| "https://www.ilga.gov".to_string()),
            cache_dir: std::env::var("CACHE_DIR").unwrap_or_else(|_| "./cache".to_string()),
            mock_dir: std::env::var("MOCK_DIR").unwrap_or_else(|_| "./mock".to_string()),
            dev_mode: env_flag("DEV_MODE", dev_mode_default),
            seed_mode: env_flag("SEED_MODE", seed_mode_default),
            load_only: env_flag("LOAD_ONLY", false),
            incremental: env_flag("INCREMENTAL", false),
            member_limit: env_u32("MEMBER_LIMIT", member_limit_default)?,
            sb_limit: env_u32("SB_LIMIT", 0)?,
            hb_limit: env_u32("HB_LIMIT", 0)?,
            bill_export_limit: env_u32("BILL_EXPORT_LIMIT", 0)?,
            cors_origins: env_csv("CORS_ORIGINS", &cors_default),
            api_key: env_opt("API_KEY"),
            vote_bill_urls: env_csv("VOTE_BILL_URLS", ""),
            dead_after_days: 548,
        })
    }

    /// Logs a startup warning for prod-unsafe defaults, surfacing config
    /// problems at boot via `tracing` rather than failing hard.
    pub fn warn_prod_gaps(&self) {
        if self.profile != Profile::Prod {
            return;
        }
        if self.cors_origins.is_empty() {
            tracing::warn!("prod profile with no CORS_ORIGINS set");
        }
        if self.api_key.is_none() {
            tracing::warn!("prod profile with no API_KEY set; all routes are unauthenticated");
        }
    }
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key).map(|v| v != "0" && !v.is_empty()).unwrap_or(default)
}

fn env_u32(key: &str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(key) {
        Ok(v) if v.is_empty() => Ok(default),
        Ok(v) => v.parse().map_err(|_| ConfigError::Malformed {
            key: key.to_string(),
            value: v,
        }),
        Err(_) => Ok(default),
    }
}

fn env_csv(key: &str, default: &str) -> Vec<String> {
    std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
