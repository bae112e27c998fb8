//! Safe Rust side of the boundary functions

use std::path::Path;

use crate::error_log::ErrorLog;
use crate::locks::PathLocks;
use rowtable::{check_sheet_name, Error, FileTable, Result, RowCodec, TableOptions, MAX_COLS};

/// Translates table operations into the boundary's sentinel results.
///
/// Every method opens the file, does its work and lets the file go before
/// returning, holding the path's lock throughout. Failures are written to the
/// injected [`ErrorLog`] (and to the `log` facade) and come back as `false`,
/// `0` or an empty terminated string.
pub struct InteropFacade<L: ErrorLog> {
    log: L,
    options: TableOptions,
    codec: RowCodec,
    locks: PathLocks,
}

impl<L: ErrorLog> InteropFacade<L> {
    /// Create a facade with default table options
    pub fn new(log: L) -> Self {
        Self::with_options(log, TableOptions::default())
    }

    /// Create a facade with explicit table options
    pub fn with_options(log: L, options: TableOptions) -> Self {
        Self {
            log,
            options,
            codec: RowCodec::default(),
            locks: PathLocks::new(),
        }
    }

    /// The error log in use
    pub fn error_log(&self) -> &L {
        &self.log
    }

    /// `WriteToXlsx`: append the comma-separated `data` as one row
    pub fn write_row(&self, filename: &str, sheet: &str, data: &str) -> bool {
        match self.try_write_row(filename, sheet, data) {
            Ok(row) => {
                log::debug!("wrote row {row} of '{sheet}' in {filename}");
                true
            }
            Err(e) => {
                self.report("WriteToXlsx", &e);
                false
            }
        }
    }

    /// `ReadRowCount`: last used row of `sheet`, 0 when the file or sheet is missing
    pub fn read_row_count(&self, filename: &str, sheet: &str) -> i32 {
        match self.try_read_row_count(filename, sheet) {
            // Bounded by MAX_ROWS
            Ok(count) => count as i32,
            Err(e) => {
                self.report("ReadRowCount", &e);
                0
            }
        }
    }

    /// `ReadRow`: copy the comma-joined row into `out`, NUL-terminated
    ///
    /// On any failure `out` holds an empty string (when it has room for one).
    pub fn read_row(&self, filename: &str, sheet: &str, row: i32, out: &mut [u8]) {
        if let Some(first) = out.first_mut() {
            *first = 0;
        }
        if let Err(e) = self.try_read_row(filename, sheet, row, out) {
            self.report("ReadRow", &e);
        }
    }

    /// Record a failure of boundary operation `op`
    pub fn report(&self, op: &str, err: &Error) {
        let message = format!("An error occurred in {op}: [{}] {err}", err.kind_name());
        log::warn!("{message}");
        self.log.log(&message);
    }

    fn try_write_row(&self, filename: &str, sheet: &str, data: &str) -> Result<u32> {
        let fields = self.codec.split(data);

        // Rejected before the file is touched, so a failed first write leaves nothing behind
        check_sheet_name(sheet)?;
        if fields.len() > MAX_COLS as usize {
            return Err(Error::TooManyFields {
                count: fields.len(),
                max: MAX_COLS,
            });
        }

        self.locks.with_lock(Path::new(filename), || {
            let mut table = FileTable::open_or_create_with(filename, self.options.clone())?;
            table.append_row(sheet, &fields)
        })
    }

    fn try_read_row_count(&self, filename: &str, sheet: &str) -> Result<u32> {
        self.locks.with_lock(Path::new(filename), || {
            let table = FileTable::open_with(filename, self.options.clone())?;
            if table.sheet(sheet).is_none() {
                return Err(Error::SheetNotFound(sheet.into()));
            }
            Ok(table.row_count(sheet))
        })
    }

    fn try_read_row(&self, filename: &str, sheet: &str, row: i32, out: &mut [u8]) -> Result<usize> {
        let fields = self.locks.with_lock(Path::new(filename), || {
            let table = FileTable::open_with(filename, self.options.clone())?;
            if table.sheet(sheet).is_none() {
                return Err(Error::SheetNotFound(sheet.into()));
            }

            let count = table.row_count(sheet);
            match u32::try_from(row) {
                Ok(row) if row >= 1 && row <= count => table.read_row(sheet, row),
                _ => Err(Error::RowOutOfRange {
                    row: row.into(),
                    count,
                }),
            }
        })?;

        self.codec.encode_into(&fields, out)
    }
}
