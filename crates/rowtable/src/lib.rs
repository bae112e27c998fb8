//! # rowtable
//!
//! A file-backed row store: named sheets of text rows, persisted to a single
//! file after every change.
//!
//! ## Features
//!
//! - Open an existing table file, or create one (and its directories) on first write
//! - Resolve sheets by exact name, creating them on demand
//! - Append rows below the last used row, count rows, read a row back
//! - Plain-text on-disk format with CSV quoting, saved atomically
//!
//! ## Example
//!
//! ```rust
//! use rowtable::prelude::*;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("orders.tbl");
//!
//! let mut table = FileTable::open_or_create(&path).unwrap();
//! table.append_row("Orders", &["1001", "EURUSD", "buy"]).unwrap();
//! table.append_row("Orders", &["1002", "GBPUSD", "sell"]).unwrap();
//!
//! let table = FileTable::open(&path).unwrap();
//! assert_eq!(table.row_count("Orders"), 2);
//! assert_eq!(table.read_row("Orders", 2).unwrap(), vec!["1002", "GBPUSD", "sell"]);
//! ```

pub mod file_table;
pub mod options;
pub mod prelude;

pub use file_table::FileTable;
pub use options::TableOptions;

// Re-export core types
pub use rowtable_core::{
    check_sheet_name,
    ColumnExtent,
    // Error types
    Error,
    Result,
    // Model types
    Row,
    RowCountPolicy,
    Sheet,
    TableFile,

    // Constants
    MAX_COLS,
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};

// Re-export codec and format types
pub use rowtable_csv::{FormatOptions, LineTerminator, RowCodec, TableReader, TableWriter};
