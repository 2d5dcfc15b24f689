//! # Application Errors
//!
//! Everything that can stop a command. Refused journey transitions are not
//! in here; they are reported to the user and the session continues.

use compass_core::CompassError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the compass binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid estimator input or catalog content.
    #[error(transparent)]
    Compass(#[from] CompassError),

    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An explicitly requested file does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A config or catalog file is not valid TOML for its schema.
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// JSON output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `--choose` value is not `scenario=choice`.
    #[error("invalid choice '{0}' (expected SCENARIO=CHOICE)")]
    InvalidDecision(String),
}
