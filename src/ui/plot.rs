use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::data::model::RowOrigin;
use crate::data::pipeline::RentChart;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Rent plot (central panel)
// ---------------------------------------------------------------------------

/// Render the title and the unadjusted / adjusted rent lines.
pub fn rent_plot(ui: &mut Ui, state: &AppState) {
    let labels = &state.labels;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&labels.title);
    });

    if state.chart.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("Nothing to plot: every row had a missing value.");
        });
        return;
    }

    let unadjusted = series_points(state.chart.years(), state.chart.unadjusted());
    let adjusted = series_points(state.chart.years(), state.chart.adjusted.iter().copied());
    let filled = filled_points(&state.chart);

    Plot::new("rent_plot")
        .legend(Legend::default())
        .x_axis_label(labels.x_axis.as_str())
        .y_axis_label(labels.y_axis.as_str())
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(unadjusted.into_iter().collect::<PlotPoints>())
                    .name(&labels.unadjusted)
                    .color(state.colors.unadjusted)
                    .width(2.0),
            );
            plot_ui.line(
                Line::new(adjusted.into_iter().collect::<PlotPoints>())
                    .name(&labels.adjusted)
                    .color(state.colors.adjusted)
                    .width(2.0),
            );

            if state.mark_filled && !filled.is_empty() {
                plot_ui.points(
                    Points::new(filled.into_iter().collect::<PlotPoints>())
                        .name("Gap-filled year")
                        .color(state.colors.unadjusted)
                        .filled(false)
                        .radius(4.0),
                );
            }
        });
}

/// Pair each year with its value as a plot point.
pub fn series_points(
    years: impl Iterator<Item = i64>,
    values: impl Iterator<Item = f64>,
) -> Vec<[f64; 2]> {
    years.zip(values).map(|(y, v)| [y as f64, v]).collect()
}

/// Unadjusted points of the years the gap-filler synthesized.
pub fn filled_points(chart: &RentChart) -> Vec<[f64; 2]> {
    chart
        .rows
        .iter()
        .filter(|r| r.origin == RowOrigin::Filled)
        .map(|r| [r.year as f64, r.value])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CleanedRow;
    use std::path::PathBuf;

    #[test]
    fn points_pair_years_with_values() {
        let points = series_points([2000, 2001].into_iter(), [1.5, 2.5].into_iter());
        assert_eq!(points, vec![[2000.0, 1.5], [2001.0, 2.5]]);
    }

    #[test]
    fn only_filled_years_are_marked() {
        let chart = RentChart {
            source: PathBuf::from("data.csv"),
            rows: vec![
                CleanedRow::observed(2000, 1000.0, 2.0),
                CleanedRow::filled(2001, 1000.0),
                CleanedRow::filled(2002, 1000.0),
                CleanedRow::observed(2003, 1300.0, 3.0),
            ],
            adjusted: vec![1000.0, 1000.0, 1000.0, 1270.0],
        };
        assert_eq!(
            filled_points(&chart),
            vec![[2001.0, 1000.0], [2002.0, 1000.0]]
        );
    }
}
