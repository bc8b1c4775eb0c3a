//! Bus error model.

use thiserror::Error;

/// Result type used across the bus crates.
pub type BusResult<T> = Result<T, BusError>;

/// Bus-level error.
///
/// The bus validates nothing on its own; failures come from a user handler
/// during delivery, from loading configuration or from parsing a [`BusId`].
///
/// [`BusId`]: crate::BusId
#[derive(Debug, Error)]
pub enum BusError {
    /// A handler returned an error while `emitted` was being delivered at
    /// candidate name `level`. Delivery stopped at that handler.
    #[error("handler subscribed to `{level}` failed while emitting `{emitted}`")]
    HandlerFailed {
        emitted: String,
        level: String,
        #[source]
        source: anyhow::Error,
    },

    /// Bus configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl BusError {
    pub fn handler_failed(
        emitted: impl Into<String>,
        level: impl Into<String>,
        source: anyhow::Error,
    ) -> Self {
        Self::HandlerFailed {
            emitted: emitted.into(),
            level: level.into(),
            source,
        }
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
