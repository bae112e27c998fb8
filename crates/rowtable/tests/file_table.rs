//! End-to-end tests for file tables (append -> save -> reopen -> read)

use pretty_assertions::assert_eq;
use rowtable::prelude::*;

/// Appending N rows to a new sheet gives a row count of N and reads them back in order
#[test]
fn test_append_n_rows_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.tbl");

    let rows: Vec<Vec<String>> = (1..=25)
        .map(|i| vec![format!("{i}"), format!("sym{i}"), format!("{}.5", i * 10)])
        .collect();

    for row in &rows {
        // A fresh open per write, the way the boundary functions work
        let mut table = FileTable::open_or_create(&path).unwrap();
        table.append_row("Ticks", row).unwrap();
    }

    let table = FileTable::open(&path).unwrap();
    assert_eq!(table.row_count("Ticks"), rows.len() as u32);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(&table.read_row("Ticks", i as u32 + 1).unwrap(), row);
    }
}

/// A sheet that was never written has no rows
#[test]
fn test_fresh_sheet_has_zero_rows() {
    let dir = tempfile::tempdir().unwrap();
    let mut table = FileTable::open_or_create(dir.path().join("t.tbl")).unwrap();
    table.resolve_sheet("Fresh", true).unwrap();
    assert_eq!(table.row_count("Fresh"), 0);
    assert_eq!(table.row_count("Absent"), 0);
}

/// open_or_create builds missing parent directories
#[test]
fn test_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("c.tbl");

    FileTable::open_or_create(&path).unwrap();
    assert!(path.is_file());
    assert!(FileTable::open(&path).unwrap().sheet_names().is_empty());
}

/// open never creates a file
#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.tbl");

    let err = FileTable::open(&path).unwrap_err();
    assert!(err.is_not_found());
    assert!(!path.exists());
}

/// Sheets are independent partitions of the same file
#[test]
fn test_multiple_sheets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multi.tbl");

    let mut table = FileTable::open_or_create(&path).unwrap();
    table.append_row("Buys", &["EURUSD", "1.0"]).unwrap();
    table.append_row("Sells", &["GBPUSD", "2.0"]).unwrap();
    table.append_row("Buys", &["USDJPY", "0.5"]).unwrap();

    let table = FileTable::open(&path).unwrap();
    assert_eq!(table.sheet_names(), vec!["Buys", "Sells"]);
    assert_eq!(table.row_count("Buys"), 2);
    assert_eq!(table.row_count("Sells"), 1);
    assert_eq!(table.read_row("Buys", 2).unwrap(), vec!["USDJPY", "0.5"]);
}

/// Reading outside 1..=count fails and leaves the file alone
#[test]
fn test_read_row_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.tbl");

    let mut table = FileTable::open_or_create(&path).unwrap();
    table.append_row("S", &["a"]).unwrap();
    let before = std::fs::read(&path).unwrap();

    assert!(matches!(
        table.read_row("S", 0),
        Err(Error::RowOutOfRange { row: 0, count: 1 })
    ));
    assert!(matches!(
        table.read_row("S", 2),
        Err(Error::RowOutOfRange { row: 2, count: 1 })
    ));
    assert!(matches!(
        table.read_row("Other", 1),
        Err(Error::SheetNotFound(_))
    ));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

/// Both row-count policies give the same answers across reopen
#[test]
fn test_tracked_policy_matches_scan() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.tbl");
    let tracked = TableOptions {
        row_count: RowCountPolicy::Tracked,
        ..Default::default()
    };

    let mut table = FileTable::open_or_create_with(&path, tracked.clone()).unwrap();
    table.append_row("S", &["a", "1"]).unwrap();
    table.append_row("S", &["", "orphan"]).unwrap();
    table.append_row("S", &["b", "2"]).unwrap();

    let scan = FileTable::open(&path).unwrap();
    let tracked = FileTable::open_with(&path, tracked).unwrap();
    assert_eq!(scan.row_count("S"), 2);
    assert_eq!(tracked.row_count("S"), 2);
    assert_eq!(scan.read_row("S", 2).unwrap(), vec!["b", "2"]);
}

/// A row with an empty first field is not part of the table and gets overwritten
#[test]
fn test_empty_first_field_blind_spot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.tbl");

    let mut table = FileTable::open_or_create(&path).unwrap();
    table.append_row("S", &["a", "b"]).unwrap();
    assert_eq!(table.append_row("S", &["", "x", "y"]).unwrap(), 2);
    assert_eq!(table.row_count("S"), 1);

    assert_eq!(table.append_row("S", &["c"]).unwrap(), 2);

    let wide = TableOptions {
        column_extent: ColumnExtent::LastNonEmpty,
        ..Default::default()
    };
    let table = FileTable::open_with(&path, wide).unwrap();
    assert_eq!(table.read_row("S", 2).unwrap(), vec!["c", "x", "y"]);
}

/// The default extent stops at the first empty cell; LastNonEmpty keeps interior gaps
#[test]
fn test_column_extent_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.tbl");

    let mut table = FileTable::open_or_create(&path).unwrap();
    table.append_row("S", &["a", "", "c", ""]).unwrap();

    assert_eq!(table.read_row("S", 1).unwrap(), vec!["a"]);

    let wide = TableOptions {
        column_extent: ColumnExtent::LastNonEmpty,
        ..Default::default()
    };
    let table = FileTable::open_with(&path, wide).unwrap();
    assert_eq!(table.read_row("S", 1).unwrap(), vec!["a", "", "c"]);
}

/// A corrupt file is reported, not silently replaced
#[test]
fn test_corrupt_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.tbl");
    std::fs::write(&path, "not a table\n").unwrap();

    assert!(matches!(
        FileTable::open_or_create(&path),
        Err(Error::MalformedRecord { line: 1, .. })
    ));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "not a table\n");
}

/// Sheet-name rules apply when a sheet is created by an append
#[test]
fn test_invalid_sheet_name_on_append() {
    let dir = tempfile::tempdir().unwrap();
    let mut table = FileTable::open_or_create(dir.path().join("t.tbl")).unwrap();

    assert!(matches!(
        table.append_row("bad/name", &["a"]),
        Err(Error::InvalidSheetName(_))
    ));
    table.append_row("Data", &["a"]).unwrap();
    assert!(matches!(
        table.append_row("DATA", &["a"]),
        Err(Error::DuplicateSheetName(_))
    ));
}

/// Saving keeps the file's mode and writes through a symlinked path
#[cfg(unix)]
#[test]
fn test_append_keeps_mode_and_symlink() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let real = dir.path().join("real.tbl");
    FileTable::open_or_create(&real).unwrap();
    std::fs::set_permissions(&real, std::fs::Permissions::from_mode(0o644)).unwrap();

    let link = dir.path().join("link.tbl");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let mut table = FileTable::open_or_create(&link).unwrap();
    table.append_row("S", &["a", "b"]).unwrap();

    let mode = std::fs::metadata(&real).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
    assert!(std::fs::symlink_metadata(&link)
        .unwrap()
        .file_type()
        .is_symlink());
    assert_eq!(FileTable::open(&real).unwrap().row_count("S"), 1);
}
