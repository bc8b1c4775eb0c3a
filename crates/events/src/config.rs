//! Bus configuration.

use serde::{Deserialize, Serialize};

use ripple_core::{BusError, BusResult};

/// Label used when none is configured.
pub const DEFAULT_LABEL: &str = "event-bus";

/// Per-bus settings.
///
/// Missing fields fall back to their defaults; unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BusConfig {
    /// Tag attached to every log line emitted by the bus.
    pub label: String,
}

impl BusConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Parse a JSON document such as `{"label": "ui"}`.
    pub fn from_json(raw: &str) -> BusResult<Self> {
        serde_json::from_str(raw).map_err(|e| BusError::invalid_config(e.to_string()))
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL)
    }
}
