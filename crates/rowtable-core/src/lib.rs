//! # rowtable-core
//!
//! Core data structures for the rowtable row store.
//!
//! This crate provides the in-memory model shared by the other rowtable crates:
//! - [`TableFile`] - The document: an ordered set of named sheets
//! - [`Sheet`] - A named partition of rows with last-used-row tracking
//! - [`Row`] - An ordered sequence of text cells
//! - [`RowCountPolicy`] and [`ColumnExtent`] - How the "last used" row and column are found
//!
//! ## Example
//!
//! ```rust
//! use rowtable_core::{ColumnExtent, RowCountPolicy, TableFile};
//!
//! let mut table = TableFile::new();
//! let sheet = table.add_sheet("Trades").unwrap();
//!
//! sheet.append_row(&["EURUSD", "buy", "1.0850"], RowCountPolicy::Scan).unwrap();
//! assert_eq!(sheet.row_count(RowCountPolicy::Scan), 1);
//!
//! let fields = sheet.read_row(1, RowCountPolicy::Scan, ColumnExtent::UntilEmpty).unwrap();
//! assert_eq!(fields, vec!["EURUSD", "buy", "1.0850"]);
//! ```

pub mod error;
pub mod policy;
pub mod row;
pub mod sheet;
pub mod table;

// Re-exports for convenience
pub use error::{Error, Result};
pub use policy::{ColumnExtent, RowCountPolicy};
pub use row::Row;
pub use sheet::Sheet;
pub use table::{check_sheet_name, TableFile};

/// Maximum number of rows in a sheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of cells in a row (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
