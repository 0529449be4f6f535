use std::path::PathBuf;

use crate::data::filter::MISSING_SENTINEL;

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Compiled-in settings for a single run. There are no CLI flags; `main`
/// always uses [`Config::default`].
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file to read, relative to the working directory.
    pub data_path: PathBuf,
    pub columns: ColumnNames,
    /// Substring that marks a cell as missing.
    pub missing_sentinel: String,
    pub labels: ChartLabels,
    /// Initial window size in logical pixels.
    pub window_size: [f32; 2],
}

/// Header names of the three columns the pipeline consumes.
#[derive(Debug, Clone)]
pub struct ColumnNames {
    pub year: String,
    pub metric: String,
    pub cpi: String,
}

/// Text shown on the chart.
#[derive(Debug, Clone)]
pub struct ChartLabels {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
    pub unadjusted: String,
    pub adjusted: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.csv"),
            columns: ColumnNames::default(),
            missing_sentinel: MISSING_SENTINEL.to_string(),
            labels: ChartLabels::default(),
            window_size: [1000.0, 650.0],
        }
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            year: "year".to_string(),
            metric: "median_rent".to_string(),
            cpi: "CPI".to_string(),
        }
    }
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            title: "SF Rent vs. Time".to_string(),
            x_axis: "Year".to_string(),
            y_axis: "Average SF Rent in $/month".to_string(),
            unadjusted: "Unadjusted".to_string(),
            adjusted: "Adjusted for Inflation".to_string(),
        }
    }
}
