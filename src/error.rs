//! Error types for humanfmt.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HumanizeError>;

#[derive(Error, Debug)]
pub enum HumanizeError {
    #[error("Invalid schedule time {0:?} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid UTC offset {0:?} (expected local, UTC, or +HH:MM)")]
    InvalidOffset(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HumanizeError {
    /// Stable machine-readable code used in robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidTime(_) => "invalid_time",
            Self::InvalidOffset(_) => "invalid_offset",
            Self::Config(_) | Self::MissingConfig(_) => "config",
            Self::ValidationFailed(_) => "validation_failed",
            Self::Serialization(_) => "serialization",
        }
    }
}
