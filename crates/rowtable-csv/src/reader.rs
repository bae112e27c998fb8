//! Table file reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::from_csv;
use crate::options::FormatOptions;
use crate::{FORMAT_VERSION, HEADER_TAG, ROW_TAG, SHEET_TAG};
use rowtable_core::{Error, Result, Row, TableFile};

/// Table file reader
pub struct TableReader;

impl TableReader {
    /// Read a table file from disk
    pub fn read_file<P: AsRef<Path>>(path: P, options: &FormatOptions) -> Result<TableFile> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let file = File::open(path).map_err(|e| Error::io(source.as_str(), e))?;
        Self::read_from(file, options, &source)
    }

    /// Read a table from any reader
    pub fn read<R: Read>(reader: R, options: &FormatOptions) -> Result<TableFile> {
        Self::read_from(reader, options, "<reader>")
    }

    fn read_from<R: Read>(reader: R, options: &FormatOptions, source: &str) -> Result<TableFile> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut table = TableFile::new();
        let mut current: Option<String> = None;
        let mut seen_header = false;

        for result in csv_reader.records() {
            let record = result.map_err(|e| from_csv(e, source))?;
            let line = record.position().map_or(0, |p| p.line());
            let tag = record.get(0).unwrap_or("");

            if !seen_header {
                if tag != HEADER_TAG {
                    return Err(Error::malformed(
                        line,
                        format!("expected '{HEADER_TAG}' header, found '{tag}'"),
                    ));
                }
                match record.get(1) {
                    Some(FORMAT_VERSION) => {}
                    other => {
                        return Err(Error::malformed(
                            line,
                            format!("unsupported format version '{}'", other.unwrap_or("")),
                        ))
                    }
                }
                seen_header = true;
                continue;
            }

            match tag {
                SHEET_TAG => {
                    let name = record
                        .get(1)
                        .ok_or_else(|| Error::malformed(line, "sheet record without a name"))?;
                    table
                        .add_sheet(name)
                        .map_err(|e| Error::malformed(line, e.to_string()))?;
                    current = Some(name.to_owned());
                }
                ROW_TAG => {
                    let sheet = current
                        .as_deref()
                        .and_then(|name| table.sheet_mut(name))
                        .ok_or_else(|| Error::malformed(line, "row record before any sheet"))?;
                    sheet
                        .push_row(Row::from_cells(record.iter().skip(1)))
                        .map_err(|e| Error::malformed(line, e.to_string()))?;
                }
                other => {
                    return Err(Error::malformed(
                        line,
                        format!("unknown record tag '{other}'"),
                    ))
                }
            }
        }

        log::debug!(
            "read {} sheet(s) from {}",
            table.sheet_count(),
            source
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rowtable_core::{ColumnExtent, RowCountPolicy};

    fn read(text: &str) -> Result<TableFile> {
        TableReader::read(text.as_bytes(), &FormatOptions::default())
    }

    #[test]
    fn test_read_sheets_and_rows() {
        let table = read("rowtable,1\r\nsheet,A\r\nrow,a,b\r\nrow,\"x,y\",\"say \"\"hi\"\"\"\r\nsheet,B\r\n")
            .unwrap();

        assert_eq!(table.sheet_names(), vec!["A", "B"]);
        let a = table.sheet("A").unwrap();
        assert_eq!(a.row_count(RowCountPolicy::Scan), 2);
        assert_eq!(
            a.read_row(2, RowCountPolicy::Scan, ColumnExtent::UntilEmpty)
                .unwrap(),
            vec!["x,y", "say \"hi\""]
        );
        assert_eq!(table.sheet("B").unwrap().physical_row_count(), 0);
    }

    #[test]
    fn test_blank_rows_keep_their_position() {
        let table = read("rowtable,1\nsheet,S\nrow,a\nrow\nrow,,z\nrow,d\n").unwrap();
        let sheet = table.sheet("S").unwrap();
        assert_eq!(sheet.physical_row_count(), 4);
        assert_eq!(sheet.row_count(RowCountPolicy::Tracked), 4);
        assert_eq!(sheet.row(3).unwrap().cell(1), "z");
    }

    #[test]
    fn test_empty_input_is_empty_table() {
        assert!(read("").unwrap().is_empty());
    }

    #[test]
    fn test_missing_header() {
        let err = read("sheet,A\n").unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn test_unsupported_version() {
        assert!(matches!(
            read("rowtable,2\n"),
            Err(Error::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn test_row_before_sheet() {
        assert!(matches!(
            read("rowtable,1\nrow,a\n"),
            Err(Error::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_unknown_tag() {
        assert!(matches!(
            read("rowtable,1\nsheet,A\ncell,a\n"),
            Err(Error::MalformedRecord { line: 3, .. })
        ));
    }

    #[test]
    fn test_duplicate_sheet() {
        assert!(matches!(
            read("rowtable,1\nsheet,A\nsheet,a\n"),
            Err(Error::MalformedRecord { line: 3, .. })
        ));
    }

    #[test]
    fn test_invalid_utf8() {
        let bytes = b"rowtable,1\nsheet,A\nrow,\xFF\n";
        let err = TableReader::read(&bytes[..], &FormatOptions::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = TableReader::read_file("/definitely/not/here.tbl", &FormatOptions::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
