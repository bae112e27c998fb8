//! Prelude module for convenient imports
//!
//! ```rust
//! use rowtable::prelude::*;
//! ```

pub use crate::file_table::FileTable;
pub use crate::options::TableOptions;

pub use rowtable_core::{ColumnExtent, Error, Result, Row, RowCountPolicy, Sheet, TableFile};

pub use rowtable_csv::{FormatOptions, LineTerminator, RowCodec};
