//! A table bound to its file on disk

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::options::TableOptions;
use rowtable_core::{Error, Result, Sheet, TableFile};
use rowtable_csv::{TableReader, TableWriter};

/// A [`TableFile`] loaded from, and saved back to, one path.
///
/// Every mutating method saves the whole table before returning. The file is
/// only held open while it is being read or written.
#[derive(Debug)]
pub struct FileTable {
    path: PathBuf,
    table: TableFile,
    options: TableOptions,
}

impl FileTable {
    /// Open an existing table file
    ///
    /// Fails with [`Error::Io`] (kind `NotFound`) when the file does not
    /// exist; nothing is created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(path, TableOptions::default())
    }

    /// Open an existing table file with options
    pub fn open_with<P: AsRef<Path>>(path: P, options: TableOptions) -> Result<Self> {
        let path = checked_path(path.as_ref())?;
        let table = TableReader::read_file(&path, &options.format)?;
        log::debug!("opened table {}", path.display());
        Ok(Self {
            path,
            table,
            options,
        })
    }

    /// Open a table file, creating an empty one (and its directories) if absent
    pub fn open_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_or_create_with(path, TableOptions::default())
    }

    /// Open or create a table file with options
    pub fn open_or_create_with<P: AsRef<Path>>(path: P, options: TableOptions) -> Result<Self> {
        let path = checked_path(path.as_ref())?;

        match fs::metadata(&path) {
            Ok(_) => Self::open_with(path, options),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)
                        .map_err(|e| Error::io(parent.display().to_string(), e))?;
                }

                let created = Self {
                    path,
                    table: TableFile::new(),
                    options,
                };
                created.save()?;
                log::debug!("created table {}", created.path.display());
                Ok(created)
            }
            Err(e) => Err(Error::io(path.display().to_string(), e)),
        }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The options this table was opened with
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// The in-memory table
    pub fn table(&self) -> &TableFile {
        &self.table
    }

    /// Sheet names in file order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.table.sheet_names()
    }

    /// Get a sheet by exact name
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.table.sheet(name)
    }

    /// Return the sheet named `name`, creating (and saving) it when missing
    /// and `create_if_missing` is set
    pub fn resolve_sheet(&mut self, name: &str, create_if_missing: bool) -> Result<&Sheet> {
        let existed = self.table.sheet(name).is_some();
        self.table.resolve_sheet(name, create_if_missing)?;
        if !existed {
            self.save()?;
        }
        self.table
            .sheet(name)
            .ok_or_else(|| Error::SheetNotFound(name.into()))
    }

    /// Append a row to `sheet` (created if missing) and save
    ///
    /// Returns the 1-based row written.
    pub fn append_row<S: AsRef<str>>(&mut self, sheet: &str, fields: &[S]) -> Result<u32> {
        let policy = self.options.row_count;
        let row = self
            .table
            .resolve_sheet(sheet, true)?
            .append_row(fields, policy)?;
        self.save()?;
        Ok(row)
    }

    /// Last used row of `sheet`; 0 when the sheet is empty or absent
    pub fn row_count(&self, sheet: &str) -> u32 {
        match self.table.sheet(sheet) {
            Some(s) => s.row_count(self.options.row_count),
            None => {
                log::warn!(
                    "sheet '{}' does not exist in {}",
                    sheet,
                    self.path.display()
                );
                0
            }
        }
    }

    /// Read a row of `sheet` through the configured column extent
    pub fn read_row(&self, sheet: &str, row: u32) -> Result<Vec<String>> {
        self.table
            .sheet(sheet)
            .ok_or_else(|| Error::SheetNotFound(sheet.into()))?
            .read_row(row, self.options.row_count, self.options.column_extent)
    }

    /// Write the table to its file
    pub fn save(&self) -> Result<()> {
        TableWriter::write_file(&self.table, &self.path, &self.options.format)
    }
}

/// Reject empty or whitespace-only paths
fn checked_path(path: &Path) -> Result<PathBuf> {
    if path.to_string_lossy().trim().is_empty() {
        return Err(Error::io(
            path.display().to_string(),
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "Filename cannot be empty or whitespace",
            ),
        ));
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_rejected() {
        for path in ["", "   ", "\t"] {
            let err = FileTable::open_or_create(path).unwrap_err();
            assert!(matches!(err, Error::Io { ref source, .. } if source.kind() == io::ErrorKind::InvalidInput));
        }
    }

    #[test]
    fn test_resolve_without_create() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = FileTable::open_or_create(dir.path().join("t.tbl")).unwrap();
        assert!(matches!(
            table.resolve_sheet("Nope", false),
            Err(Error::SheetNotFound(_))
        ));
        assert!(table.sheet_names().is_empty());
    }

    #[test]
    fn test_resolve_with_create_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.tbl");
        let mut table = FileTable::open_or_create(&path).unwrap();
        assert_eq!(table.resolve_sheet("Ticks", true).unwrap().name(), "Ticks");

        let reopened = FileTable::open(&path).unwrap();
        assert_eq!(reopened.sheet_names(), vec!["Ticks"]);
        assert_eq!(reopened.row_count("Ticks"), 0);
    }
}
