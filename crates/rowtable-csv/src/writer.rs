//! Table file writer

use std::fs::{self, Permissions};
use std::io::{self, Write};
use std::iter;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::from_csv;
use crate::options::FormatOptions;
use crate::{FORMAT_VERSION, HEADER_TAG, ROW_TAG, SHEET_TAG};
use rowtable_core::{Error, Result, TableFile};

/// Table file writer
pub struct TableWriter;

impl TableWriter {
    /// Write a table to `path`, replacing it atomically
    ///
    /// The table is written to a temporary file next to `path`, synced, and
    /// renamed over the target. On failure the target is left untouched and
    /// the temporary file is removed.
    ///
    /// A symlinked `path` is followed, so the link stays in place and its
    /// destination is replaced. An existing file keeps its permissions; a new
    /// one gets the same permissions as any other newly created file.
    pub fn write_file<P: AsRef<Path>>(
        table: &TableFile,
        path: P,
        options: &FormatOptions,
    ) -> Result<()> {
        let target = path.as_ref().display().to_string();
        let path = resolve_link(path.as_ref()).map_err(|e| Error::io(target.as_str(), e))?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let existing = fs::metadata(&path).ok().map(|m| m.permissions());
        let mut tmp = temp_file(dir, existing).map_err(|e| Error::io(target.as_str(), e))?;
        Self::write_to(table, tmp.as_file_mut(), options, &target)?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| Error::io(target.as_str(), e))?;
        tmp.persist(&path)
            .map_err(|e| Error::io(target.as_str(), e.error))?;

        log::debug!("saved {} sheet(s) to {}", table.sheet_count(), target);
        Ok(())
    }

    /// Write a table to any writer
    pub fn write<W: Write>(table: &TableFile, writer: W, options: &FormatOptions) -> Result<()> {
        Self::write_to(table, writer, options, "<writer>")
    }

    fn write_to<W: Write>(
        table: &TableFile,
        writer: W,
        options: &FormatOptions,
        target: &str,
    ) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(options.line_terminator.to_csv())
            .flexible(true)
            .from_writer(writer);

        csv_writer
            .write_record([HEADER_TAG, FORMAT_VERSION])
            .map_err(|e| from_csv(e, target))?;

        for sheet in table.sheets() {
            csv_writer
                .write_record([SHEET_TAG, sheet.name()])
                .map_err(|e| from_csv(e, target))?;

            for row in sheet.rows() {
                let record = iter::once(ROW_TAG).chain(row.cells().iter().map(String::as_str));
                csv_writer
                    .write_record(record)
                    .map_err(|e| from_csv(e, target))?;
            }
        }

        csv_writer
            .flush()
            .map_err(|e| Error::io(target, e))?;
        Ok(())
    }
}

/// Follow `path` to the file it names when it is a symlink
///
/// A dangling link resolves to its destination, so saving through it creates
/// the file the link points at.
fn resolve_link(path: &Path) -> io::Result<PathBuf> {
    let is_link = fs::symlink_metadata(path).map_or(false, |m| m.file_type().is_symlink());
    if !is_link {
        return Ok(path.to_path_buf());
    }

    fs::canonicalize(path).or_else(|_| {
        let dest = fs::read_link(path)?;
        Ok(match path.parent() {
            Some(parent) => parent.join(dest),
            None => dest,
        })
    })
}

/// Create the temporary file a save is written to
///
/// Left alone, the file is owner-only and the rename carries that onto the
/// target.
fn temp_file(dir: &Path, existing: Option<Permissions>) -> io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if existing.is_none() {
            // Narrowed by the process umask, as for any created file
            builder.permissions(Permissions::from_mode(0o666));
        }
    }

    let tmp = builder.tempfile_in(dir)?;
    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions)?;
    }
    Ok(tmp)
}
