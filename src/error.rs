//! Unified error types for ilrcheck.
//!
//! The core draws a hard line between two failure classes. Contract errors
//! (a missing required argument, a structurally malformed record) indicate a
//! wiring defect and fail fast through `Result`. Business-rule violations are
//! not errors at all: they are reported through the [`ErrorSink`] and
//! validation continues for the remaining items and rules.
//!
//! [`ErrorSink`]: crate::rules::ErrorSink

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for ilrcheck operations.
#[derive(Error, Debug)]
pub enum IlrError {
    /// A required argument or collaborator was absent (wiring defect).
    #[error("missing required argument: {what}")]
    MissingArgument { what: String },

    /// A record is structurally malformed and cannot be validated.
    #[error("malformed record: {message}")]
    Malformed { message: String },

    /// I/O errors from reading record or reference-data files.
    #[error("storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON or TOML parsing/serialization errors.
    #[error("serialization error: {message}")]
    Serde { message: String },

    /// Configuration loading errors.
    #[error("config error: {message}")]
    Config { message: String },
}

/// A specialized Result type for ilrcheck operations.
pub type Result<T> = std::result::Result<T, IlrError>;

impl IlrError {
    /// Create a missing-argument contract error.
    pub fn missing_argument(what: impl Into<String>) -> Self {
        Self::MissingArgument { what: what.into() }
    }

    /// Create a malformed-record contract error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Create a storage error from an I/O error.
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error.
    pub fn serde(message: impl Into<String>) -> Self {
        Self::Serde {
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error indicates a wiring/contract defect rather than an
    /// environmental failure. Contract errors should never be retried.
    pub fn is_contract_error(&self) -> bool {
        matches!(self, Self::MissingArgument { .. } | Self::Malformed { .. })
    }
}

impl From<io::Error> for IlrError {
    fn from(err: io::Error) -> Self {
        Self::Storage {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for IlrError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde {
            message: err.to_string(),
        }
    }
}

/// Exit codes for the ilrcheck CLI.
pub mod exit_codes {
    /// The record file validated clean.
    pub const CLEAN: i32 = 0;

    /// One or more business-rule violations were reported.
    pub const VIOLATIONS: i32 = 2;

    /// The run itself failed (bad input file, config error, panic).
    pub const CRASH: i32 = 3;
}
