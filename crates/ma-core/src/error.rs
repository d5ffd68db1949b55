use thiserror::Error;

/// Failure to turn TOML text into a usable [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
