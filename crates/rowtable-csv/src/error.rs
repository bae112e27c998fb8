//! Mapping of `csv` errors into the rowtable error taxonomy

use rowtable_core::Error;

/// Convert a csv error raised while reading or writing `source`
pub(crate) fn from_csv(err: csv::Error, source: &str) -> Error {
    let line = err.position().map_or(0, |p| p.line());
    match err.into_kind() {
        csv::ErrorKind::Io(e) => Error::io(source, e),
        csv::ErrorKind::Utf8 { err, .. } => Error::malformed(line, format!("invalid UTF-8: {err}")),
        other => Error::malformed(line, format!("{other:?}")),
    }
}
