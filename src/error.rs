use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Data-layer errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong between opening `data.csv` and handing a
/// finished series to the viewer. All variants are fatal for a run.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("input file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("input file has no header row: {}", path.display())]
    EmptyFile { path: PathBuf },

    /// `row` is the 1-based data row in the source file (header excluded).
    #[error("data row {row}: column '{column}' has unparseable value '{value}'")]
    MalformedRow {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("required column '{column}' is missing from the header")]
    MissingColumn { column: String },

    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
