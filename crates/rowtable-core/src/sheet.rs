//! Sheet type

use crate::error::{Error, Result};
use crate::policy::{ColumnExtent, RowCountPolicy};
use crate::row::Row;
use crate::{MAX_COLS, MAX_ROWS};

/// A sheet (named partition of rows in a table file)
///
/// Rows are stored densely in physical order, so the 1-based row index is
/// always `position + 1`. The table's extent is defined by column 1: the last
/// used row is the last row whose first cell is non-empty. A row with an
/// empty first cell is therefore not counted even when later cells hold data,
/// and the next append lands on top of it.
#[derive(Debug, Clone)]
pub struct Sheet {
    /// Sheet name
    name: String,
    /// Physical rows, row 1 first
    rows: Vec<Row>,
    /// Last row with a non-empty first cell, maintained on every write
    last_used: u32,
}

impl Sheet {
    /// Create a new empty sheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            last_used: 0,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All physical rows, including rows outside the counted extent
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of physical rows stored
    pub fn physical_row_count(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Get a row by 1-based index
    pub fn row(&self, index: u32) -> Option<&Row> {
        let pos = index.checked_sub(1)?;
        self.rows.get(pos as usize)
    }

    /// Append a physical row as-is, returning its 1-based index
    ///
    /// Used when loading a sheet from storage; unlike [`Sheet::append_row`]
    /// it never overwrites.
    pub fn push_row(&mut self, row: Row) -> Result<u32> {
        if self.rows.len() as u32 >= MAX_ROWS {
            return Err(Error::SheetFull { max: MAX_ROWS });
        }
        if row.cell_count() > MAX_COLS as usize {
            return Err(Error::TooManyFields {
                count: row.cell_count(),
                max: MAX_COLS,
            });
        }

        let index = self.rows.len() as u32 + 1;
        if row.has_key() {
            self.last_used = index;
        }
        self.rows.push(row);
        Ok(index)
    }

    /// Set a cell by 1-based row and column
    pub fn set_cell<S: Into<String>>(&mut self, row: u32, col: u16, value: S) -> Result<()> {
        if row == 0 || row > MAX_ROWS {
            return Err(Error::RowOutOfRange {
                row: row.into(),
                count: MAX_ROWS,
            });
        }
        if col == 0 || col > MAX_COLS {
            return Err(Error::TooManyFields {
                count: col as usize,
                max: MAX_COLS,
            });
        }

        let pos = (row - 1) as usize;
        if pos >= self.rows.len() {
            self.rows.resize_with(pos + 1, Row::new);
        }
        self.rows[pos].set_cell((col - 1) as usize, value);

        if col == 1 {
            if self.rows[pos].has_key() {
                self.last_used = self.last_used.max(row);
            } else if row == self.last_used {
                self.last_used = self.scan_last_used_row();
            }
        }
        Ok(())
    }

    /// Find the last used row by scanning column 1 upward from the bottom
    pub fn scan_last_used_row(&self) -> u32 {
        self.rows
            .iter()
            .rposition(Row::has_key)
            .map_or(0, |pos| pos as u32 + 1)
    }

    /// The last used row as maintained by writes
    pub fn tracked_last_used_row(&self) -> u32 {
        self.last_used
    }

    /// 1-based index of the last row with a non-empty first cell; 0 when empty
    pub fn row_count(&self, policy: RowCountPolicy) -> u32 {
        match policy {
            RowCountPolicy::Scan => self.scan_last_used_row(),
            RowCountPolicy::Tracked => self.tracked_last_used_row(),
        }
    }

    /// Write `fields` into successive cells of the row below the last used row
    ///
    /// Only the cells named by `fields` are written; cells further right that
    /// already exist in the target row are kept. Returns the row index written.
    pub fn append_row<S: AsRef<str>>(&mut self, fields: &[S], policy: RowCountPolicy) -> Result<u32> {
        if fields.len() > MAX_COLS as usize {
            return Err(Error::TooManyFields {
                count: fields.len(),
                max: MAX_COLS,
            });
        }

        let target = self.row_count(policy) + 1;
        if target > MAX_ROWS {
            return Err(Error::SheetFull { max: MAX_ROWS });
        }

        // Writing only empty cells into a row that does not exist yet changes nothing.
        let exists = target <= self.physical_row_count();
        if !exists && fields.iter().all(|f| f.as_ref().is_empty()) {
            return Ok(target);
        }

        for (i, field) in fields.iter().enumerate() {
            self.set_cell(target, i as u16 + 1, field.as_ref())?;
        }
        Ok(target)
    }

    /// Read the fields of a counted row
    ///
    /// Fails with [`Error::RowOutOfRange`] when `row` is 0 or past the row count.
    pub fn read_row(
        &self,
        row: u32,
        policy: RowCountPolicy,
        extent: ColumnExtent,
    ) -> Result<Vec<String>> {
        let count = self.row_count(policy);
        if row < 1 || row > count {
            return Err(Error::RowOutOfRange {
                row: row.into(),
                count,
            });
        }

        Ok(self
            .row(row)
            .map(|r| r.fields(extent))
            .unwrap_or_default())
    }
}
