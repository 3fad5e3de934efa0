use eframe::egui::{Ui, Vec2b};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use crate::color::MetricGradient;
use crate::data::derive::{layer_columns, DerivedColumns};
use crate::data::model::{Metric, PackageDataset};

// ---------------------------------------------------------------------------
// 2D Pareto scatter
// ---------------------------------------------------------------------------

/// Scatter of two metrics, coloured by the third. One point group per
/// package so hovering shows the package id and its materials.
pub fn pareto_scatter(
    ui: &mut Ui,
    dataset: &PackageDataset,
    x: Metric,
    y: Metric,
    color_by: Metric,
    height: f32,
) {
    let gradient = MetricGradient::from_values(&dataset.metric_values(color_by));

    Plot::new(format!("pareto_{}_{}", x.column(), y.column()))
        .x_axis_label(x.to_string())
        .y_axis_label(y.to_string())
        .height(height)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for record in &dataset.records {
                let color = gradient.color_for(color_by.value(record));
                let name = format!(
                    "{}\nwall: {}\nroof: {}",
                    record.package, record.wall_materials_str, record.roof_materials_str
                );
                let points = Points::new(vec![[x.value(record), y.value(record)]])
                    .name(name)
                    .color(color)
                    .radius(3.0);
                plot_ui.points(points);
            }
        });
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Fixed-width histogram of one metric.
pub fn histogram(ui: &mut Ui, dataset: &PackageDataset, metric: Metric, bins: usize, height: f32) {
    let values = dataset.metric_values(metric);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(f64::EPSILON);
    let width = span / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in &values {
        let bin = (((v - min) / span) * bins as f64) as usize;
        counts[bin.min(bins - 1)] += 1;
    }

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Bar::new(min + (i as f64 + 0.5) * width, count as f64).width(width * 0.95)
        })
        .collect();

    Plot::new(format!("hist_{}", metric.column()))
        .x_axis_label(metric.to_string())
        .y_axis_label("Count")
        .height(height)
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(metric.label()));
        });
}

// ---------------------------------------------------------------------------
// Parallel coordinates
// ---------------------------------------------------------------------------

/// One polyline per package across nine axes: six categorical material
/// axes (placed by ordinal encoding) followed by the three metrics.
/// Each axis is normalised to [0, 1]; lines are coloured by GWP.
pub fn parallel_coordinates(
    ui: &mut Ui,
    dataset: &PackageDataset,
    derived: &DerivedColumns,
    height: f32,
) {
    let material_axes = layer_columns();
    let axis_names: Vec<String> = material_axes
        .iter()
        .cloned()
        .chain(Metric::ALL.iter().map(|m| m.column().to_string()))
        .collect();

    let metric_ranges: Vec<(Metric, f64, f64)> = Metric::ALL
        .iter()
        .map(|&m| {
            let vals = dataset.metric_values(m);
            let min = vals.iter().copied().fold(f64::INFINITY, f64::min);
            let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (m, min, max)
        })
        .collect();

    let gradient = MetricGradient::from_values(&dataset.metric_values(Metric::Gwp));

    let formatter_names = axis_names.clone();
    Plot::new("parallel_coordinates")
        .height(height)
        .show_y(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(Vec2b::new(false, false))
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round() as isize;
            if (mark.value - idx as f64).abs() > 1e-6 {
                return String::new();
            }
            formatter_names
                .get(usize::try_from(idx).unwrap_or(usize::MAX))
                .map(|n| n.replace('_', " "))
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for (row, record) in dataset.records.iter().enumerate() {
                let mut coords: Vec<[f64; 2]> = Vec::with_capacity(axis_names.len());

                for (axis, column) in material_axes.iter().enumerate() {
                    let ordinal = derived.axis_value(column, row).unwrap_or(0.0);
                    let n_values = derived
                        .encodings
                        .get(column)
                        .map(|e| e.len())
                        .unwrap_or(1);
                    let y = if n_values > 1 {
                        ordinal / (n_values - 1) as f64
                    } else {
                        0.5
                    };
                    coords.push([axis as f64, y]);
                }

                for (i, &(metric, min, max)) in metric_ranges.iter().enumerate() {
                    let span = max - min;
                    let y = if span.abs() < f64::EPSILON {
                        0.5
                    } else {
                        (metric.value(record) - min) / span
                    };
                    coords.push([(material_axes.len() + i) as f64, y]);
                }

                let line = Line::new(PlotPoints::from(coords))
                    .name(&record.package)
                    .color(gradient.color_for(record.gwp_kgco2e))
                    .width(1.0);
                plot_ui.line(line);
            }
        });
}
