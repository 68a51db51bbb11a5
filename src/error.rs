//! Errors from the fallible edges: settings files and terminal I/O
//!
//! The simulation itself never fails; broken invariants there are bugs and
//! panic at the point they are detected.

use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read settings from {path}: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("{0} must be at least 1 ms")]
    ZeroPeriod(&'static str),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
