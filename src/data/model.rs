use std::collections::BTreeMap;

use crate::error::DataError;

// ---------------------------------------------------------------------------
// ColumnTable – the raw CSV, column-oriented
// ---------------------------------------------------------------------------

/// Raw string cells keyed by header name, one `Vec` per column, in row order.
/// Built once by the loader and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnTable {
    /// Header names in file order.
    pub headers: Vec<String>,
    /// column_name → cells.
    pub columns: BTreeMap<String, Vec<String>>,
}

impl ColumnTable {
    /// Start an empty table for the given header row.
    pub fn with_headers(headers: Vec<String>) -> Self {
        let columns = headers
            .iter()
            .map(|h| (h.clone(), Vec::new()))
            .collect();
        Self { headers, columns }
    }

    /// Raw cells of `name`, or [`DataError::MissingColumn`].
    pub fn column(&self, name: &str) -> Result<&[String], DataError> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| DataError::MissingColumn {
                column: name.to_string(),
            })
    }

    /// Number of data rows, measured on the longest column.
    pub fn row_count(&self) -> usize {
        self.columns.values().map(Vec::len).max().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// AlignedTriple – (year, metric, CPI) raw cells, index-aligned
// ---------------------------------------------------------------------------

/// Three raw columns where index `i` in each refers to the same source row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignedTriple {
    pub years: Vec<String>,
    pub values: Vec<String>,
    pub cpis: Vec<String>,
    /// Zero-based data-row index (header excluded) each entry came from.
    pub source_rows: Vec<usize>,
}

impl AlignedTriple {
    pub fn push(&mut self, source_row: usize, year: &str, value: &str, cpi: &str) {
        self.source_rows.push(source_row);
        self.years.push(year.to_string());
        self.values.push(value.to_string());
        self.cpis.push(cpi.to_string());
    }

    /// Iterate rows as `(year, value, cpi)` string slices.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.years
            .iter()
            .zip(&self.values)
            .zip(&self.cpis)
            .map(|((y, v), c)| (y.as_str(), v.as_str(), c.as_str()))
    }

    /// Like [`rows`](Self::rows), paired with the source data-row index.
    pub fn indexed_rows(&self) -> impl Iterator<Item = (usize, (&str, &str, &str))> {
        self.source_rows.iter().copied().zip(self.rows())
    }

    pub fn len(&self) -> usize {
        self.years.len().min(self.values.len()).min(self.cpis.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// CleanedRow / CleanedSeries – gap-filled numeric rows
// ---------------------------------------------------------------------------

/// Where a cleaned row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrigin {
    /// Parsed from an input row.
    Observed,
    /// Synthesized by the gap-filler for a missing year.
    Filled,
}

/// One year of cleaned data. `cpi` is a percentage (e.g. `2.5` for 2.5 %).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CleanedRow {
    pub year: i64,
    pub value: f64,
    pub cpi: f64,
    pub origin: RowOrigin,
}

impl CleanedRow {
    pub fn observed(year: i64, value: f64, cpi: f64) -> Self {
        Self {
            year,
            value,
            cpi,
            origin: RowOrigin::Observed,
        }
    }

    /// A synthesized row: carried-forward value, zero CPI.
    pub fn filled(year: i64, value: f64) -> Self {
        Self {
            year,
            value,
            cpi: 0.0,
            origin: RowOrigin::Filled,
        }
    }

    /// The `(year, value, cpi)` tuple, without provenance.
    pub fn as_tuple(&self) -> (i64, f64, f64) {
        (self.year, self.value, self.cpi)
    }
}

/// Ordered output of the gap-filler.
pub type CleanedSeries = Vec<CleanedRow>;

/// Inflation-adjusted values, index-aligned with a [`CleanedSeries`].
pub type AdjustedSeries = Vec<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_lookup_reports_missing_name() {
        let table = ColumnTable::with_headers(vec!["year".into()]);
        assert!(table.column("year").unwrap().is_empty());
        match table.column("CPI") {
            Err(DataError::MissingColumn { column }) => assert_eq!(column, "CPI"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn triple_rows_stay_aligned() {
        let mut triple = AlignedTriple::default();
        triple.push(0, "2000", "1", "1.0");
        triple.push(3, "2001", "2", "1.5");
        assert_eq!(triple.len(), 2);
        assert_eq!(
            triple.indexed_rows().map(|(i, _)| i).collect::<Vec<_>>(),
            vec![0, 3]
        );
        assert_eq!(
            triple.rows().collect::<Vec<_>>(),
            vec![("2000", "1", "1.0"), ("2001", "2", "1.5")]
        );
    }

    #[test]
    fn filled_row_has_zero_cpi() {
        let row = CleanedRow::filled(2001, 1000.0);
        assert_eq!(row.as_tuple(), (2001, 1000.0, 0.0));
        assert_eq!(row.origin, RowOrigin::Filled);
    }
}
