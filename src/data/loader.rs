use std::path::Path;

use super::error::DataError;
use super::model::RawTable;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Read a comma-delimited file into a [`RawTable`].
///
/// The header row names the columns; every other row is kept as text.
/// Rows with fewer fields than the header are accepted, the missing trailing
/// cells read as absent later on. No column is required at this stage.
pub fn load_table(path: &Path) -> Result<RawTable, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| DataError::unreadable(path, e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DataError::unreadable(path, e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let rows = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DataError::unreadable(path, e))?;

    log::info!(
        "Read {} rows x {} columns from {}",
        rows.len(),
        headers.len(),
        path.display()
    );

    Ok(RawTable { headers, rows })
}
