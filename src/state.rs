use crate::color::SeriesColors;
use crate::config::ChartLabels;
use crate::data::pipeline::RentChart;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The chart is computed before
/// the window opens and never changes afterwards.
pub struct AppState {
    pub chart: RentChart,
    pub labels: ChartLabels,
    pub colors: SeriesColors,
    /// Draw hollow markers on gap-filled years.
    pub mark_filled: bool,
}

impl AppState {
    pub fn new(chart: RentChart, labels: ChartLabels) -> Self {
        let non_finite = chart
            .unadjusted()
            .chain(chart.adjusted.iter().copied())
            .filter(|v| !v.is_finite())
            .count();
        if non_finite > 0 {
            log::warn!("{non_finite} non-finite values will be plotted");
        }

        Self {
            chart,
            labels,
            colors: SeriesColors::default(),
            mark_filled: true,
        }
    }

    /// One-line summary for the top bar.
    pub fn summary(&self) -> String {
        match self.chart.year_range() {
            Some((first, last)) => format!(
                "{}: {first}-{last}, {} years plotted, {} gap-filled",
                self.chart.source.display(),
                self.chart.len(),
                self.chart.filled_count()
            ),
            None => format!("{}: no complete rows", self.chart.source.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CleanedRow;
    use std::path::PathBuf;

    fn chart() -> RentChart {
        RentChart {
            source: PathBuf::from("data.csv"),
            rows: vec![
                CleanedRow::observed(2000, 1000.0, 2.0),
                CleanedRow::filled(2001, 1000.0),
                CleanedRow::observed(2002, 1200.0, 3.0),
            ],
            adjusted: vec![1000.0, 1000.0, 1170.0],
        }
    }

    #[test]
    fn summary_describes_range_and_fill() {
        let state = AppState::new(chart(), ChartLabels::default());
        assert_eq!(
            state.summary(),
            "data.csv: 2000-2002, 3 years plotted, 1 gap-filled"
        );
    }

    #[test]
    fn summary_for_empty_chart() {
        let empty = RentChart {
            rows: Vec::new(),
            adjusted: Vec::new(),
            ..chart()
        };
        let state = AppState::new(empty, ChartLabels::default());
        assert_eq!(state.summary(), "data.csv: no complete rows");
    }
}
