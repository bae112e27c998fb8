//! Error types for rowtable-core

use std::io;

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur anywhere in rowtable
#[derive(Debug, Error)]
pub enum Error {
    /// File or directory access failed
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Sheet not found by name
    #[error("Sheet '{0}' does not exist")]
    SheetNotFound(String),

    /// Requested row is outside `1..=count`
    #[error("Row {row} does not exist in the sheet (row count: {count})")]
    RowOutOfRange { row: i64, count: u32 },

    /// A record could not be decoded
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// Output buffer cannot hold the encoded row and its terminator
    #[error("Result buffer size is too small: need {needed} bytes, have {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Row has more fields than a sheet has columns
    #[error("Row has {count} fields (max: {max})")]
    TooManyFields { count: usize, max: u16 },

    /// No room left below the last used row
    #[error("Sheet is full (max rows: {max})")]
    SheetFull { max: u32 },

    /// Argument rejected before reaching the table
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io<P: Into<String>>(path: P, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed-record error
    pub fn malformed<S: Into<String>>(line: u64, reason: S) -> Self {
        Error::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Short variant name, for log lines
    pub fn kind_name(&self) -> &'static str {
        match self {
            Error::Io { .. } => "IoError",
            Error::SheetNotFound(_) => "SheetNotFound",
            Error::RowOutOfRange { .. } => "RowOutOfRange",
            Error::MalformedRecord { .. } => "MalformedRecord",
            Error::BufferTooSmall { .. } => "BufferTooSmall",
            Error::InvalidSheetName(_) => "InvalidSheetName",
            Error::DuplicateSheetName(_) => "DuplicateSheetName",
            Error::TooManyFields { .. } => "TooManyFields",
            Error::SheetFull { .. } => "SheetFull",
            Error::InvalidArgument(_) => "InvalidArgument",
        }
    }

    /// Whether this is an I/O "not found" failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
