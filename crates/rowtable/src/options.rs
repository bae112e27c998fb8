//! Table options

use rowtable_core::{ColumnExtent, RowCountPolicy};
use rowtable_csv::FormatOptions;

/// Options for a [`FileTable`](crate::FileTable)
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// How the last used row is found (default: scan column 1 every time)
    pub row_count: RowCountPolicy,
    /// How far right a row is read (default: up to the first empty cell)
    pub column_extent: ColumnExtent,
    /// On-disk format
    pub format: FormatOptions,
}
