//! CLI error types.

use thiserror::Error;

/// Errors surfaced to the CLI user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Tracker configuration file problems.
    #[error("configuration error: {0}")]
    TrackerConfig(#[from] lootscope::tracker::ConfigError),

    /// Scene fixture problems.
    #[error("scene error: {0}")]
    Scene(#[from] crate::scene::SceneError),

    /// Output serialization problems.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Anything the user asked for that cannot be honored.
    #[error("{0}")]
    Usage(String),
}
