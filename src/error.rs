//! Component J: typed errors at the crate's boundaries.
//!
//! Grounded on the teacher crate's `MessageParseError` (`snafu`-derived,
//! one variant per failure mode, `Display` messages matching the
//! reference tool's stderr text).

use snafu::Snafu;
use std::path::PathBuf;

/// Failure selecting a charset variant by name.
#[derive(Debug, Snafu)]
pub enum CharsetError {
    /// Unknown charset name; the source prints `Error: invalid POCSAG
    /// charset <name>` and substitutes `US`.
    #[snafu(display("invalid POCSAG charset {name}, use: US,FR,DE,SE,SI"))]
    UnknownVariant { name: String },
}

/// Failure opening a log sink. Per the error-handling design, this is
/// downgraded to a warning by the receiver rather than propagated as a
/// fatal error the way the source's `perror`+`exit(-99)` does.
#[derive(Debug, Snafu)]
pub enum LogSinkError {
    #[snafu(display("could not open log sink {path}: {source}", path = path.display()))]
    OpenFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}
