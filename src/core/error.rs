//! Configuration error types.

use thiserror::Error;

/// Errors that can occur when loading tracker options
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Options document is not valid JSON or has unknown values
    #[error("Invalid tracker options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
