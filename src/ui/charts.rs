use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use crate::data::filter::FrequencyTable;

// ---------------------------------------------------------------------------
// Publications per year (line chart)
// ---------------------------------------------------------------------------

/// Line chart of papers per year with a marker on each year.
pub fn publications_over_time(ui: &mut Ui, per_year: &FrequencyTable<i32>, min_year: i32) {
    if per_year.is_empty() {
        ui.label("No dated papers to plot.");
        return;
    }

    let points: Vec<[f64; 2]> = per_year
        .entries()
        .iter()
        .map(|&(year, count)| [f64::from(year), count as f64])
        .collect();

    ui.label(format!("Number of Publications per Year [from {min_year}]"));
    Plot::new("publications_over_time")
        .height(280.0)
        .x_axis_label("Year")
        .y_axis_label("Number of Papers")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::new(points.clone()))
                    .color(Color32::from_rgb(31, 119, 180))
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::new(points))
                    .color(Color32::from_rgb(31, 119, 180))
                    .radius(4.0),
            );
        });
}

// ---------------------------------------------------------------------------
// Top-N categories (horizontal bar chart)
// ---------------------------------------------------------------------------

/// Horizontal bars, largest count at the top, labelled with the category.
pub fn horizontal_bars(
    ui: &mut Ui,
    id: &str,
    title: &str,
    table: &FrequencyTable<String>,
    color: Color32,
) {
    if table.is_empty() {
        ui.label("Nothing to show.");
        return;
    }

    let n = table.len();
    // Entry 0 has the highest count; give it the highest position.
    let labels: Vec<String> = table.entries().iter().rev().map(|(k, _)| k.clone()).collect();
    let bars: Vec<Bar> = table
        .entries()
        .iter()
        .enumerate()
        .map(|(i, (name, count))| Bar::new((n - 1 - i) as f64, *count as f64).name(name))
        .collect();

    ui.label(title);
    Plot::new(id)
        .height(60.0 + 22.0 * n as f32)
        .x_axis_label("Number of Papers")
        .y_axis_formatter(move |mark, _range| axis_label(&labels, mark.value))
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().color(color));
        });
}

/// Category label for a grid mark; only whole positions get one.
fn axis_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}
