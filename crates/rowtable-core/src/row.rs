//! Row type

use crate::policy::ColumnExtent;

/// A physical row: an ordered sequence of text cells.
///
/// Cells are addressed by 0-based column index here; the 1-based row index
/// is the row's position in its [`Sheet`](crate::Sheet). An empty string is
/// an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    /// Create a new row with no cells
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from its cells, in column order
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// All stored cells, including empty ones
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Number of stored cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get a cell by 0-based column; missing cells read as ""
    pub fn cell(&self, col: usize) -> &str {
        self.cells.get(col).map(String::as_str).unwrap_or("")
    }

    /// Set a cell by 0-based column, growing the row with empty cells as needed
    pub fn set_cell<S: Into<String>>(&mut self, col: usize, value: S) {
        if col >= self.cells.len() {
            self.cells.resize(col + 1, String::new());
        }
        self.cells[col] = value.into();
    }

    /// Whether the first cell holds a value (the row counts toward the sheet's extent)
    pub fn has_key(&self) -> bool {
        !self.cell(0).is_empty()
    }

    /// Whether every cell is empty
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(String::is_empty)
    }

    /// Number of leading non-empty cells
    pub fn leading_len(&self) -> usize {
        self.cells.iter().take_while(|c| !c.is_empty()).count()
    }

    /// 1-based index of the last non-empty cell, 0 if blank
    pub fn last_used_col(&self) -> usize {
        self.cells
            .iter()
            .rposition(|c| !c.is_empty())
            .map_or(0, |i| i + 1)
    }

    /// The row's fields as seen through a column extent policy
    pub fn fields(&self, extent: ColumnExtent) -> Vec<String> {
        let end = match extent {
            ColumnExtent::UntilEmpty => self.leading_len(),
            ColumnExtent::LastNonEmpty => self.last_used_col(),
        };
        self.cells[..end].to_vec()
    }
}
