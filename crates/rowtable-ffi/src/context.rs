//! Process-wide facade used by the exported functions

use std::env;
use std::panic::{self, AssertUnwindSafe};

use lazy_static::lazy_static;

use crate::error_log::{ErrorLog, FileErrorLog};
use crate::facade::InteropFacade;

/// Environment variable naming the error log file
pub const ERROR_LOG_ENV: &str = "ROWTABLE_ERROR_LOG";

lazy_static! {
    /// Facade shared by every exported call, with the log path read once from the environment
    pub static ref FACADE: InteropFacade<FileErrorLog> = {
        let log = match env::var_os(ERROR_LOG_ENV) {
            Some(path) if !path.is_empty() => FileErrorLog::new(path),
            _ => FileErrorLog::default(),
        };
        InteropFacade::new(log)
    };
}

/// Run an exported function's body, turning a panic into `sentinel`
pub(crate) fn boundary<T>(
    op: &str,
    sentinel: T,
    body: impl FnOnce(&InteropFacade<FileErrorLog>) -> T,
) -> T {
    match panic::catch_unwind(AssertUnwindSafe(|| body(&FACADE))) {
        Ok(value) => value,
        Err(_) => {
            let message = format!("An unknown error occurred in {op}.");
            log::error!("{message}");
            FACADE.error_log().log(&message);
            sentinel
        }
    }
}
