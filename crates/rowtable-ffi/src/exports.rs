//! Exported boundary functions
//!
//! Names and signatures are fixed by the importing platform, hence the
//! non-snake-case names.
#![allow(non_snake_case)]

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};
use std::slice;

use crate::context::boundary;
use rowtable::{Error, Result};

/// Borrow a NUL-terminated UTF-8 argument
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn text_arg<'a>(ptr: *const c_char, name: &str) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(Error::InvalidArgument(format!(
            "Null pointer passed as parameter '{name}'."
        )));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|e| Error::InvalidArgument(format!("'{name}' is not valid UTF-8: {e}")))
}

/// Append one comma-separated row to a sheet, creating file and sheet as needed.
///
/// Returns `true` on success, `false` after logging on any failure.
///
/// # Safety
///
/// Each argument must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "system" fn WriteToXlsx(
    filename: *const c_char,
    sheetName: *const c_char,
    data: *const c_char,
) -> bool {
    boundary("WriteToXlsx", false, |facade| {
        let args = text_arg(filename, "filename").and_then(|filename| {
            Ok((
                filename,
                text_arg(sheetName, "sheetName")?,
                text_arg(data, "data")?,
            ))
        });

        match args {
            Ok((filename, sheet, data)) => facade.write_row(filename, sheet, data),
            Err(e) => {
                facade.report("WriteToXlsx", &e);
                false
            }
        }
    })
}

/// Number of the last used row in a sheet; 0 if the file or sheet does not exist.
///
/// # Safety
///
/// Each argument must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "system" fn ReadRowCount(
    filename: *const c_char,
    sheetName: *const c_char,
) -> c_int {
    boundary("ReadRowCount", 0, |facade| {
        let args = text_arg(filename, "filename")
            .and_then(|filename| Ok((filename, text_arg(sheetName, "sheetName")?)));

        match args {
            Ok((filename, sheet)) => facade.read_row_count(filename, sheet),
            Err(e) => {
                facade.report("ReadRowCount", &e);
                0
            }
        }
    })
}

/// Copy row `row` (1-based) of a sheet into `result` as comma-joined text.
///
/// `result` always ends up NUL-terminated when `resultSize > 0`; on any
/// failure, including a buffer too small for the row, it holds "".
///
/// # Safety
///
/// `filename` and `sheetName` must be null or valid NUL-terminated strings;
/// `result` must be null or valid for writes of `resultSize` bytes.
#[no_mangle]
pub unsafe extern "system" fn ReadRow(
    filename: *const c_char,
    sheetName: *const c_char,
    row: c_int,
    result: *mut c_char,
    resultSize: c_int,
) {
    boundary("ReadRow", (), |facade| {
        if result.is_null() {
            let err = Error::InvalidArgument("Null pointer passed as parameter 'result'.".into());
            facade.report("ReadRow", &err);
            return;
        }
        let capacity = match usize::try_from(resultSize) {
            Ok(capacity) => capacity,
            Err(_) => {
                let err = Error::InvalidArgument(format!("negative resultSize {resultSize}"));
                facade.report("ReadRow", &err);
                return;
            }
        };
        let out = slice::from_raw_parts_mut(result.cast::<u8>(), capacity);
        if let Some(first) = out.first_mut() {
            *first = 0;
        }

        let args = text_arg(filename, "filename")
            .and_then(|filename| Ok((filename, text_arg(sheetName, "sheetName")?)));

        match args {
            Ok((filename, sheet)) => facade.read_row(filename, sheet, row, out),
            Err(e) => facade.report("ReadRow", &e),
        }
    })
}
