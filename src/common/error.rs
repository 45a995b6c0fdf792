//! Error types for gopherc
//!
//! Two layers: [`Error`] aborts the whole command, [`SendError`] describes why
//! a single instance could not be reached and never escapes the dispatcher.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Command-level error type
#[derive(Error, Debug)]
pub enum Error {
    // === Discovery Errors ===
    #[error("Cannot enumerate instances: {0}")]
    Discovery(#[source] io::Error),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },
}

/// Failure to deliver one message to one instance
#[derive(Error, Debug)]
pub enum SendError {
    #[error("Not a socket")]
    KindMismatch,

    #[error("{source}")]
    Connect {
        #[source]
        source: io::Error,
        /// The endpoint left an artifact behind that should be pruned
        stale: bool,
    },

    #[error("Cannot encode message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Write failed: {0}")]
    Write(#[source] io::Error),
}

impl SendError {
    /// Connection failure that leaves nothing to clean up
    pub fn connect(source: io::Error) -> Self {
        Self::Connect {
            source,
            stale: false,
        }
    }

    /// Connection failure against an orphaned endpoint artifact
    pub fn stale(source: io::Error) -> Self {
        Self::Connect {
            source,
            stale: true,
        }
    }

    /// Whether the transport recommends pruning the endpoint
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Connect { stale: true, .. })
    }
}
