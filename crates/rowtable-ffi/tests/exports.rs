//! Calls the exported functions the way a foreign host does: raw C strings and a
//! caller-owned buffer.
//!
//! Kept as a single test so the error-log location can be set through the
//! environment before the process-wide facade is first used.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use rowtable_ffi::{ReadRow, ReadRowCount, WriteToXlsx, ERROR_LOG_ENV};

fn c(s: &str) -> CString {
    CString::new(s).unwrap()
}

fn read_row(file: &CString, sheet: &CString, row: i32, capacity: usize) -> String {
    let mut buf = vec![b'#' as c_char; capacity.max(1)];
    unsafe {
        ReadRow(file.as_ptr(), sheet.as_ptr(), row, buf.as_mut_ptr(), capacity as i32);
        CStr::from_ptr(buf.as_ptr()).to_str().unwrap().to_owned()
    }
}

#[test]
fn test_exported_functions() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("error_log.txt");
    std::env::set_var(ERROR_LOG_ENV, &log_path);

    let file = c(dir.path().join("out.tbl").to_str().unwrap());
    let sheet = c("Sheet1");

    unsafe {
        // Write, count, read
        assert!(WriteToXlsx(file.as_ptr(), sheet.as_ptr(), c("a,b,c").as_ptr()));
        assert!(WriteToXlsx(file.as_ptr(), sheet.as_ptr(), c("d,e").as_ptr()));
        assert_eq!(ReadRowCount(file.as_ptr(), sheet.as_ptr()), 2);
    }
    assert_eq!(read_row(&file, &sheet, 1, 64), "a,b,c");
    assert_eq!(read_row(&file, &sheet, 2, 64), "d,e");
    assert!(!log_path.exists(), "successful calls must not log");

    // Missing file: 0, nothing created
    let missing_path = dir.path().join("missing.tbl");
    let missing = c(missing_path.to_str().unwrap());
    unsafe {
        assert_eq!(ReadRowCount(missing.as_ptr(), c("X").as_ptr()), 0);
    }
    assert!(!missing_path.exists());

    // Out of range row and short buffer both give ""
    assert_eq!(read_row(&file, &sheet, 3, 64), "");
    assert_eq!(read_row(&file, &sheet, 1, 5), "");

    // Null pointers degrade to sentinels
    unsafe {
        assert!(!WriteToXlsx(ptr::null(), sheet.as_ptr(), c("x").as_ptr()));
        assert_eq!(ReadRowCount(file.as_ptr(), ptr::null()), 0);
        ReadRow(file.as_ptr(), sheet.as_ptr(), 1, ptr::null_mut(), 16);
    }

    let log = std::fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 6, "{log}");
    assert!(lines[0].contains("ReadRowCount: [IoError]"));
    assert!(lines[1].contains("ReadRow: [RowOutOfRange]"));
    assert!(lines[2].contains("ReadRow: [BufferTooSmall]"));
    assert!(lines[3].contains("WriteToXlsx: [InvalidArgument]"));
    assert!(lines[4].contains("ReadRowCount: [InvalidArgument]"));
    assert!(lines[5].contains("ReadRow: [InvalidArgument]"));
}
