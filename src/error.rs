//! Error types for the ranking pipeline.
//!
//! Library stages return [`RankError`]; the binary wraps it in `anyhow` for
//! top-level reporting.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a ranking run. None of them are retried.
#[derive(Error, Debug)]
pub enum RankError {
    /// A required environment parameter is missing or malformed.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The issue listing request failed in transport or was rejected by the API.
    #[error("Failed to fetch issues: {message}")]
    Fetch {
        /// HTTP status returned by the API, if a response was received.
        status: Option<u16>,
        message: String,
    },

    /// Writing the report failed.
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RankError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        RankError::Configuration {
            message: message.into(),
        }
    }

    /// Upstream HTTP status code carried by a fetch error.
    pub fn status(&self) -> Option<u16> {
        match self {
            RankError::Fetch { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RankError {
    fn from(err: reqwest::Error) -> Self {
        RankError::Fetch {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}
