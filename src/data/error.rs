use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Pipeline errors
// ---------------------------------------------------------------------------

/// Fatal failures of the load / clean stages.
///
/// Row-level date failures and empty filter results are not errors; they
/// degrade into absent years and zero counts.
#[derive(Error, Debug)]
pub enum DataError {
    /// The input file is missing, unreadable or not valid CSV.
    #[error("cannot read {}: {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file was read but lacks columns the pipeline needs.
    #[error("missing required column(s): {}", missing.join(", "))]
    Schema { missing: Vec<String> },
}

impl DataError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: impl Into<csv::Error>) -> Self {
        DataError::Source {
            path: path.into(),
            source: source.into(),
        }
    }
}
