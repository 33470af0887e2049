//! Rate-limited, retrying HTTP fetcher built on `reqwest` and `tokio`, with
//! a shared connection pool and per-host politeness delays, so it can be
//! driven from a bounded worker pool instead of one blocking thread at a
//! time.

use backon::{ExponentialBuilder, Retryable};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Timeout, 5xx, connection reset — worth retrying.
    Transient,
    /// 4xx, malformed URL — surfaced immediately, never retried.
    Permanent,
}

#[derive(Debug, Error)]
#[error("fetch failed ({kind:?}) for {url} after {attempts} attempt(s): {message}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub url: String,
    pub attempts: u32,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub bytes: Vec<u8>,
    pub status: u16,
    pub headers: HashMap<String, String>,
}

pub struct FetcherConfig {
    pub politeness_ms: u64,
    pub max_retries: u32,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            politeness_ms: 500,
            max_retries: 3,
            timeout_secs: 30,
            user_agent: "ilga-watch/0.1 (+https://github.com/ilga-watch)".to_string(),
        }
    }
}

impl FetcherConfig {
    /// `--fast` reduces the inter-request sleep but never disables retries.
    #[must_use]
    pub fn fast(mut self) -> Self {
        self.politeness_ms = self.politeness_ms.min(100);
        self
    }
}

/// Shares a single connection pool across a scrape; safe for concurrent
/// calls. Rate limiting is tracked per-host.
pub struct Fetcher {
    client: reqwest::Client,
    config: FetcherConfig,
    last_request_at: Mutex<HashMap<String, Instant>>,
}

impl Fetcher {
    /// # Errors
    /// Returns an error if the underlying `reqwest::Client` fails to build.
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError {
                kind: FetchErrorKind::Permanent,
                url: String::new(),
                attempts: 0,
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            config,
            last_request_at: Mutex::new(HashMap::new()),
        })
    }

    /// Performs a single GET with bounded retries and exponential backoff.
    /// Transient failures are retried up to `max_retries` times; permanent
    /// failures (4xx, malformed URL) are surfaced immediately.
    pub async fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let attempts = std::sync::atomic::AtomicU32::new(0);

        let op = || async {
            attempts.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            self.politeness_wait(url).await;
            self.fetch_once(url).await
        };

        op.retry(
            ExponentialBuilder::default()
                .with_max_times(self.config.max_retries as usize)
                .with_min_delay(Duration::from_millis(300))
                .with_max_delay(Duration::from_secs(30)),
        )
        .when(|e: &FetchError| e.kind == FetchErrorKind::Transient)
        .notify(|err, dur| {
            tracing::warn!("retrying {} in {:?}: {}", err.url, dur, err.message);
        })
        .await
        .map_err(|mut e| {
            e.attempts = attempts.load(std::sync::atomic::Ordering::Relaxed);
            e
        })
    }

    async fn fetch_once(&self, url: &str) -> Result<FetchResponse, FetchError> {
        tracing::debug!("fetching {}", url);

        let response = self.client.get(url).send().await.map_err(|e| FetchError {
            kind: if e.is_timeout() || e.is_connect() {
                FetchErrorKind::Transient
            } else {
                FetchErrorKind::Permanent
            },
            url: url.to_string(),
            attempts: 1,
            message: e.to_string(),
        })?;

        let status = response.status();

        if status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError {
                kind: FetchErrorKind::Transient,
                url: url.to_string(),
                attempts: 1,
                message: format!("HTTP {status}"),
            });
        }

        if !status.is_success() {
            return Err(FetchError {
                kind: FetchErrorKind::Permanent,
                url: url.to_string(),
                attempts: 1,
                message: format!("HTTP {status}"),
            });
        }

        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();

        let status_code = status.as_u16();
        let bytes = response.bytes().await.map_err(|e| FetchError {
            kind: FetchErrorKind::Transient,
            url: url.to_string(),
            attempts: 1,
            message: e.to_string(),
        })?;

        Ok(FetchResponse {
            bytes: bytes.to_vec(),
            status: status_code,
            headers,
        })
    }

    async fn politeness_wait(&self, url: &str) {
        let host = host_of(url);
        let wait_until = {
            let mut guard = self.last_request_at.lock().unwrap_or_else(|e| e.into_inner());
            let now = Instant::now();
            let next_allowed = guard
                .get(&host)
                .map(|prev| *prev + Duration::from_millis(self.config.politeness_ms));
            guard.insert(host, now.max(next_allowed.unwrap_or(now)));
            next_allowed
        };

        if let Some(when) = wait_until {
            let now = Instant::now();
            if when > now {
                tokio::time::sleep(when - now).await;
            }
        }
    }
}

fn host_of(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_extraction() {
        assert_eq!(host_of("https://www.ilga.gov/bills/1"), "www.ilga.gov");
        assert_eq!(host_of("not a url"), "");
    }

    #[test]
    fn fast_mode_caps_politeness() {
        let cfg = FetcherConfig::default().fast();
        assert!(cfg.politeness_ms <= 100);
        assert!(cfg.max_retries >= 3);
    }
}
