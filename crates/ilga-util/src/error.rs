use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed value for {key}: {value}")]
    Malformed { key: String, value: String },

    #[error("required config key missing: {0}")]
    Missing(String),
}
