//! Error types for browser docks
//!
//! Nothing in here crosses the host boundary: entry points log these and
//! degrade to a no-op.

use thiserror::Error;

/// Main error type for dock operations
#[derive(Debug, Error)]
pub enum DockError {
    /// The host has no main window to attach a dock to yet
    #[error("host main window is not available")]
    HostWindowUnavailable,

    /// A configuration override could not be parsed
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },

    /// Operation on a panel that has already been torn down
    #[error("panel has been closed")]
    PanelClosed,
}

/// Convenience Result type for dock operations
pub type Result<T> = std::result::Result<T, DockError>;
