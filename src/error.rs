//! Unified error type.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The error type returned by kepler's fallible operations.
///
/// Request-level failures (404, 405, a panicking handler) are expressed as
/// HTTP [`Response`](crate::Response) values, not as `Error`s. This type
/// surfaces the failures that stop the process: a catalog that cannot be
/// read or parsed, and a listener that cannot bind.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed catalog {}{}: {message}", .path.display(), line_suffix(.line))]
    Parse {
        path: PathBuf,
        line: Option<u64>,
        message: String,
    },

    #[error("server io: {0}")]
    Server(#[from] io::Error),
}

impl Error {
    /// Sorts a CSV failure into [`Error::Io`] or [`Error::Parse`].
    pub(crate) fn from_csv(path: &Path, err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::Io { path: path.to_owned(), source },
            _ => Self::Parse { path: path.to_owned(), line, message },
        }
    }
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}
