//! # rowtable-csv
//!
//! Row codec and on-disk table format for rowtable.
//!
//! Two encodings live here:
//! - [`RowCodec`] - the boundary text form: fields joined with a single
//!   delimiter, no escaping. This is what crosses the foreign-call boundary.
//! - [`TableReader`] / [`TableWriter`] - the file format: one CSV record per
//!   line with a leading tag field, so any text (delimiters, quotes, newlines)
//!   survives a save and load.
//!
//! ```text
//! rowtable,1
//! sheet,Sheet1
//! row,a,b,c
//! row,"has,comma","has ""quotes"""
//! ```

mod codec;
mod error;
mod options;
mod reader;
mod writer;

pub use codec::RowCodec;
pub use options::{FormatOptions, LineTerminator};
pub use reader::TableReader;
pub use writer::TableWriter;

/// Tag of the first record in every table file
pub const HEADER_TAG: &str = "rowtable";

/// On-disk format version written by [`TableWriter`]
pub const FORMAT_VERSION: &str = "1";

/// Tag of a record that starts a sheet
pub const SHEET_TAG: &str = "sheet";

/// Tag of a record holding one physical row
pub const ROW_TAG: &str = "row";
