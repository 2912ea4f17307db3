use thiserror::Error;

#[derive(Error, Debug)]
pub enum CounterError {
    #[error("Configuration error: min ({min}) is greater than max ({max})")]
    InvalidBounds { min: i64, max: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CounterError>;
