//! Error types for the swap router

use thiserror::Error;

/// Core errors that can occur in the router workspace
#[derive(Debug, Error)]
pub enum Error {
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    #[error("Path error: {0}")]
    Path(#[from] PathError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Fixed-point conversion failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    #[error("Value is not finite: {value}")]
    NonFinite { value: String },

    #[error("Malformed amount: {input:?}")]
    MalformedAmount { input: String },

    #[error("Negative slippage: {value}")]
    NegativeSlippage { value: String },
}

/// Route construction misuse
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("Path length must be at least 3, got {len}")]
    TooShort { len: usize },
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid router setting: {0}")]
    InvalidSetting(String),
}

/// Result type alias for router operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get a stable machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Math(MathError::NonFinite { .. }) => "non_finite",
            Self::Math(MathError::MalformedAmount { .. }) => "malformed_amount",
            Self::Math(MathError::NegativeSlippage { .. }) => "negative_slippage",
            Self::Path(PathError::TooShort { .. }) => "path_too_short",
            Self::Config(ConfigError::UnknownChain(_)) => "unknown_chain",
            Self::Config(ConfigError::Io { .. }) => "config_io",
            Self::Config(ConfigError::Parse(_)) => "config_parse",
            Self::Config(ConfigError::InvalidSetting(_)) => "invalid_setting",
        }
    }
}
