use std::path::PathBuf;

use crate::config::{ColumnNames, Config};
use crate::error::DataError;

use super::filter::filter_trio_with;
use super::loader::load_columns;
use super::model::{AdjustedSeries, CleanedRow, CleanedSeries, ColumnTable, RowOrigin};
use super::transform::{adjust_for_inflation, fill_gaps};

// ---------------------------------------------------------------------------
// RentChart – everything the viewer needs
// ---------------------------------------------------------------------------

/// Gap-filled rows plus their inflation-adjusted values, index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct RentChart {
    /// File the data came from.
    pub source: PathBuf,
    pub rows: CleanedSeries,
    pub adjusted: AdjustedSeries,
}

impl RentChart {
    pub fn years(&self) -> impl Iterator<Item = i64> + '_ {
        self.rows.iter().map(|r| r.year)
    }

    pub fn unadjusted(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.value)
    }

    /// First and last year, if any rows survived cleaning.
    pub fn year_range(&self) -> Option<(i64, i64)> {
        Some((self.rows.first()?.year, self.rows.last()?.year))
    }

    /// Number of years synthesized by the gap-filler.
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.origin == RowOrigin::Filled)
            .count()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Load the configured file and run the transforms over it.
pub fn run(config: &Config) -> Result<RentChart, DataError> {
    let table = load_columns(&config.data_path)?;
    let mut chart = build_chart(&table, &config.columns, &config.missing_sentinel)?;
    chart.source = config.data_path.clone();
    Ok(chart)
}

/// Co-filter → gap-fill → inflation-adjust over an already loaded table.
pub fn build_chart(
    table: &ColumnTable,
    columns: &ColumnNames,
    missing_sentinel: &str,
) -> Result<RentChart, DataError> {
    let years = table.column(&columns.year)?;
    let values = table.column(&columns.metric)?;
    let cpis = table.column(&columns.cpi)?;

    let filtered = filter_trio_with(missing_sentinel, years, values, cpis);
    log::debug!(
        "Co-filter kept {} of {} rows",
        filtered.len(),
        table.row_count()
    );

    let rows: Vec<CleanedRow> = fill_gaps(&filtered)?;
    let adjusted = adjust_for_inflation(&rows);

    let chart = RentChart {
        source: PathBuf::new(),
        rows,
        adjusted,
    };
    match chart.year_range() {
        Some((first, last)) => log::info!(
            "Prepared {} years ({first}-{last}), {} gap-filled",
            chart.len(),
            chart.filled_count()
        ),
        None => log::warn!("No complete rows left after removing missing values"),
    }
    Ok(chart)
}
