//! # rowtable-ffi
//!
//! Foreign-callable entry points for rowtable.
//!
//! The library exports three functions with the platform's system calling
//! convention (`stdcall` on 32-bit Windows), so a trading terminal can import
//! them as plain DLL functions:
//!
//! ```c
//! bool WriteToXlsx(const char* filename, const char* sheetName, const char* data);
//! int  ReadRowCount(const char* filename, const char* sheetName);
//! void ReadRow(const char* filename, const char* sheetName, int row, char* result, int resultSize);
//! ```
//!
//! No failure crosses the boundary. Each one turns into a sentinel (`false`,
//! `0` or an empty string) plus a line in `error_log.txt`; set
//! `ROWTABLE_ERROR_LOG` to log elsewhere.

mod context;
mod error_log;
mod exports;
mod facade;
mod locks;

pub use context::ERROR_LOG_ENV;
pub use error_log::{ErrorLog, FileErrorLog, MemoryLog};
pub use exports::{ReadRow, ReadRowCount, WriteToXlsx};
pub use facade::InteropFacade;
pub use locks::PathLocks;
