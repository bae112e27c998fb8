//! Scan policies for the "last used" row and column

/// How a sheet finds its last used row.
///
/// Both policies return the same answer: the 1-based index of the last row
/// whose first cell is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowCountPolicy {
    /// Scan column 1 upward from the bottom on every call, O(rows)
    #[default]
    Scan,
    /// Use the counter the sheet maintains as cells are written
    Tracked,
}

/// How far to the right a row is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnExtent {
    /// From column 1 up to (not including) the first empty cell
    #[default]
    UntilEmpty,
    /// Up to the last non-empty cell; interior empty cells read as ""
    LastNonEmpty,
}
