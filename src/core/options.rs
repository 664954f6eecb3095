//! Tracker configuration.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// How `to_start` and `to_end` move the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointMode {
    /// Jump through the clamping index setter, notifying on change.
    #[default]
    Clamped,

    /// Reproduce the historical behaviour where the jump never reached the
    /// cursor: both calls are silent no-ops.
    Legacy,
}

/// Options recognised by [`StateTracker`](super::StateTracker).
///
/// Missing fields fall back to their defaults, so `{}` is a valid document.
///
/// # Example
///
/// ```rust
/// use rewind::core::{EndpointMode, TrackerOptions};
///
/// let options = TrackerOptions::from_json(r#"{ "endpoints": "legacy" }"#).unwrap();
/// assert_eq!(options.endpoints, EndpointMode::Legacy);
///
/// let options = TrackerOptions::from_json("{}").unwrap();
/// assert_eq!(options.endpoints, EndpointMode::Clamped);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerOptions {
    /// Behaviour of the endpoint jumps
    pub endpoints: EndpointMode,
}

impl TrackerOptions {
    /// Parse options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
