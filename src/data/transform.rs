use crate::error::DataError;

use super::model::{AdjustedSeries, AlignedTriple, CleanedRow, CleanedSeries};

// ---------------------------------------------------------------------------
// Gap filling
// ---------------------------------------------------------------------------

/// Parse a co-filtered triple and synthesize a row for every year missing
/// between consecutive observations.
///
/// A synthesized row carries the previous observed value forward and gets a
/// CPI of `0.0`. Observed rows keep their own CPI.
///
/// A previous year of `0` means "nothing seen yet", so no gap is filled after
/// a row whose year is literally `0`. Years that do not ascend are emitted as
/// they come, without filling.
///
/// Fails with [`DataError::MalformedRow`] on the first cell that does not
/// parse (year as integer, value and CPI as float). The error carries the
/// 1-based data row of the source file, not the position in the triple.
pub fn fill_gaps(triple: &AlignedTriple) -> Result<CleanedSeries, DataError> {
    let mut filled = CleanedSeries::with_capacity(triple.len());
    let mut prev_year: i64 = 0;
    let mut prev_value: f64 = 0.0;

    for (source_row, (year, value, cpi)) in triple.indexed_rows() {
        let row = source_row + 1;
        let year: i64 = parse_cell(row, "year", year)?;
        let value: f64 = parse_cell(row, "value", value)?;
        let cpi: f64 = parse_cell(row, "CPI", cpi)?;

        if prev_year != 0 {
            if year <= prev_year {
                log::warn!("Data row {row}: year {year} does not follow {prev_year}");
            }
            while let Some(next) = prev_year.checked_add(1).filter(|next| year > *next) {
                prev_year = next;
                log::debug!("Filling missing year {prev_year} with {prev_value}");
                filled.push(CleanedRow::filled(prev_year, prev_value));
            }
        }

        prev_year = year;
        prev_value = value;
        filled.push(CleanedRow::observed(year, value, cpi));
    }

    Ok(filled)
}

fn parse_cell<T: std::str::FromStr>(
    row: usize,
    column: &'static str,
    raw: &str,
) -> Result<T, DataError> {
    raw.trim().parse().map_err(|_| DataError::MalformedRow {
        row,
        column,
        value: raw.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Inflation adjustment
// ---------------------------------------------------------------------------

/// Remove the inflation-driven part of each year-over-year change.
///
/// For `i > 0`:
/// `adjusted[i] = value[i-1] + (value[i] - value[i-1]) - value[i-1] * cpi[i] / 100`
///
/// Each step is based on the previous *raw* value, so the correction does not
/// compound. `adjusted[0]` is `value[0]`.
pub fn adjust_for_inflation(series: &[CleanedRow]) -> AdjustedSeries {
    let mut adjusted = AdjustedSeries::with_capacity(series.len());

    if let Some(first) = series.first() {
        adjusted.push(first.value);
    }

    for pair in series.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);
        let increase = cur.value - prev.value;
        let due_to_inflation = prev.value * (cur.cpi / 100.0);
        adjusted.push(prev.value + (increase - due_to_inflation));
    }

    adjusted
}
