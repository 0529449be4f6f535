use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::DataError;

use super::model::ColumnTable;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a comma-delimited file whose first row is the header into a
/// [`ColumnTable`].
///
/// Every data row is zipped positionally against the header:
/// * a short row appends only its leading columns (tolerated, not an error)
/// * surplus cells past the last header are ignored
///
/// Cells are kept as raw strings; numeric parsing happens in the transforms.
pub fn load_columns(path: &Path) -> Result<ColumnTable, DataError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => DataError::Io(e),
    })?;

    let table = read_columns(file, path)?;
    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        table.row_count(),
        table.headers,
        path.display()
    );
    Ok(table)
}

/// Parse CSV from any reader. `origin` is only used in error messages.
/// The reader is dropped (and a file handle closed) before returning.
pub fn read_columns<R: Read>(source: R, origin: &Path) -> Result<ColumnTable, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(DataError::EmptyFile {
            path: origin.to_path_buf(),
        });
    }

    let mut table = ColumnTable::with_headers(headers);
    for result in reader.records() {
        let record = result?;
        for (header, cell) in table.headers.iter().zip(record.iter()) {
            if let Some(column) = table.columns.get_mut(header) {
                column.push(cell.to_string());
            }
        }
    }

    Ok(table)
}
