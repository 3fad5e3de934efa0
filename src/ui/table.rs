use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::{Metric, PackageDataset};
use crate::data::rank::{sorted_by_metric, ScoredPackage};

// ---------------------------------------------------------------------------
// Package tables
// ---------------------------------------------------------------------------

/// Top-N table for a single metric (the per-metric top-10 tabs).
pub fn top_table(ui: &mut Ui, dataset: &PackageDataset, metric: Metric, n: usize) {
    let rows: Vec<usize> = sorted_by_metric(dataset, metric)
        .into_iter()
        .take(n)
        .collect();
    ui.push_id(("top_table", metric.column()), |ui: &mut Ui| {
        package_table(ui, dataset, &rows, None);
    });
}

/// Ranked table for the multi-criteria selector; shows the composite
/// score next to the metrics.
pub fn ranked_table(ui: &mut Ui, dataset: &PackageDataset, scored: &[ScoredPackage], n: usize) {
    let rows: Vec<usize> = scored.iter().take(n).map(|s| s.row).collect();
    let scores: Vec<f64> = scored.iter().take(n).map(|s| s.score).collect();
    ui.push_id("ranked_table", |ui: &mut Ui| {
        package_table(ui, dataset, &rows, Some(&scores));
    });
}

fn package_table(ui: &mut Ui, dataset: &PackageDataset, rows: &[usize], scores: Option<&[f64]>) {
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(80.0)) // package
        .column(Column::remainder()) // wall
        .column(Column::remainder()) // roof
        .column(Column::auto().at_least(70.0)) // heating
        .column(Column::auto().at_least(80.0)) // gwp
        .column(Column::auto().at_least(80.0)); // cost
    if scores.is_some() {
        table = table.column(Column::auto().at_least(60.0));
    }

    table
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Package");
            });
            header.col(|ui| {
                ui.strong("Wall materials");
            });
            header.col(|ui| {
                ui.strong("Roof materials");
            });
            for metric in Metric::ALL {
                header.col(|ui| {
                    ui.strong(metric.to_string());
                });
            }
            if scores.is_some() {
                header.col(|ui| {
                    ui.strong("Score");
                });
            }
        })
        .body(|mut body| {
            for (i, &row) in rows.iter().enumerate() {
                let record = &dataset.records[row];
                body.row(18.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.monospace(&record.package);
                    });
                    table_row.col(|ui| {
                        ui.label(&record.wall_materials_str);
                    });
                    table_row.col(|ui| {
                        ui.label(&record.roof_materials_str);
                    });
                    table_row.col(|ui| {
                        ui.label(format!("{:.2}", record.heating_demand_kwh_per_m2));
                    });
                    table_row.col(|ui| {
                        ui.label(format!("{:.0}", record.gwp_kgco2e));
                    });
                    table_row.col(|ui| {
                        ui.label(format!("{:.0}", record.cost_sek));
                    });
                    if let Some(scores) = scores {
                        table_row.col(|ui| {
                            ui.label(format!("{:.2}", scores[i]));
                        });
                    }
                });
            }
        });
}
