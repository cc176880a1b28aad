//! Error types for biasmap.
//!
//! The engine itself can only fail in two ways: a dataset with rows but no
//! usable header (`MalformedInput`) and input that is not tabular at all
//! (`UnsupportedInputKind`). The remaining variants belong to the caller
//! layer: file loading, CSV decoding and configuration.
//!
//! Cells that fail numeric parsing are not errors. They are dropped from
//! the sample where they occur.
//!
//! # Error Codes
//!
//! - E001-E009: I/O and filesystem errors
//! - E010-E019: Input errors
//! - E020-E029: Configuration errors

use crate::core::InputKind;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BiasError>;

/// Stable error code for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - generic
    pub const IO_GENERIC: ErrorCode = ErrorCode("E001");
    /// I/O error - file exceeds the size limit
    pub const IO_TOO_LARGE: ErrorCode = ErrorCode("E002");

    /// Input error - missing or empty header
    pub const INPUT_MALFORMED: ErrorCode = ErrorCode("E010");
    /// Input error - not tabular data
    pub const INPUT_UNSUPPORTED: ErrorCode = ErrorCode("E011");
    /// Input error - CSV decoding failed
    pub const INPUT_CSV: ErrorCode = ErrorCode("E012");

    /// Config error - invalid value
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum BiasError {
    /// Header row is absent or empty
    #[error("Malformed input: {reason}")]
    MalformedInput { reason: String },

    /// Non-tabular input reached the tabular engine
    #[error("Unsupported input kind: {kind} input cannot be analyzed for tabular bias")]
    UnsupportedInputKind { kind: InputKind },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("File {} is {size} bytes, exceeding the {limit} byte limit", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl BiasError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedInput { .. } => ErrorCode::INPUT_MALFORMED,
            Self::UnsupportedInputKind { .. } => ErrorCode::INPUT_UNSUPPORTED,
            Self::Config { .. } => ErrorCode::CONFIG_INVALID,
            Self::FileTooLarge { .. } => ErrorCode::IO_TOO_LARGE,
            Self::Io { .. } => ErrorCode::IO_GENERIC,
            Self::Csv(_) => ErrorCode::INPUT_CSV,
        }
    }

    /// Whether the user can fix the problem by changing their input or config.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}
