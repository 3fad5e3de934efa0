use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{Metric, PackageDataset};
use crate::data::stats::metric_summary;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RetrofitDashApp {
    pub state: AppState,
}

impl eframe::App for RetrofitDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: multi-criteria selector ----
        egui::SidePanel::left("selector_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard sections ----
        egui::CentralPanel::default().show(ctx, |ui| {
            self.dashboard(ui);
        });
    }
}

impl RetrofitDashApp {
    fn dashboard(&mut self, ui: &mut Ui) {
        let Some(dataset) = self.state.dataset.clone() else {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a retrofit summary CSV to begin  (File → Open…)");
            });
            return;
        };

        if dataset.is_empty() {
            ui.colored_label(
                Color32::RED,
                "The loaded file contains no packages; the dashboard cannot render.",
            );
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui: &mut Ui| {
                kpi_section(ui, &dataset);
                ui.separator();
                pareto_section(ui, &dataset);
                ui.separator();
                histogram_section(ui, &dataset);
                ui.separator();
                parcoords_section(ui, &dataset, &self.state);
                ui.separator();
                self.top10_section(ui, &dataset);
                ui.separator();
                self.ranking_section(ui, &dataset);
            });
    }

    fn top10_section(&mut self, ui: &mut Ui, dataset: &PackageDataset) {
        ui.heading("Top 10 Packages");
        ui.horizontal(|ui: &mut Ui| {
            for metric in Metric::ALL {
                let label = format!("Lowest {}", metric.label());
                if ui
                    .selectable_label(self.state.top10_tab == metric, label)
                    .clicked()
                {
                    self.state.top10_tab = metric;
                }
            }
        });
        table::top_table(ui, dataset, self.state.top10_tab, 10);
    }

    fn ranking_section(&mut self, ui: &mut Ui, dataset: &PackageDataset) {
        ui.heading("Multi-Criteria Top Packages");
        self.state.ensure_ranked();
        match &self.state.ranked {
            Some(Ok(scored)) => {
                table::ranked_table(ui, dataset, scored, self.state.top_n);
            }
            Some(Err(e)) => {
                ui.colored_label(Color32::YELLOW, e.to_string());
            }
            None => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard sections
// ---------------------------------------------------------------------------

fn kpi_section(ui: &mut Ui, dataset: &PackageDataset) {
    ui.heading("Key Performance Indicators");

    ui.columns(Metric::ALL.len(), |columns| {
        for (col, metric) in columns.iter_mut().zip(Metric::ALL) {
            match metric_summary(dataset, metric) {
                Ok(summary) => {
                    let best = &dataset.records[summary.best];
                    col.strong(format!("Lowest {}", metric.label()));
                    col.label(
                        RichText::new(format!("{:.2} {}", summary.min, metric.unit())).size(20.0),
                    );
                    col.label(format!("vs median {:.1}", summary.median));
                    col.monospace(&best.package);
                    col.label(format!("Wall: {}", best.wall_materials_str));
                    col.label(format!("Roof: {}", best.roof_materials_str));
                }
                Err(e) => {
                    col.colored_label(Color32::RED, e.to_string());
                }
            }
        }
    });

    if let (Ok(heat), Ok(gwp), Ok(cost)) = (
        metric_summary(dataset, Metric::HeatingDemand),
        metric_summary(dataset, Metric::Gwp),
        metric_summary(dataset, Metric::Cost),
    ) {
        ui.add_space(6.0);
        ui.label(format!(
            "Key insights: lowest heating demand {:.2} kWh/m² ({}), lowest GWP {:.0} kgCO₂e ({}), \
             cost range {:.0}–{:.0} SEK across packages.",
            heat.min,
            dataset.records[heat.best].package,
            gwp.min,
            dataset.records[gwp.best].package,
            cost.min,
            cost.max,
        ));
    }
}

fn pareto_section(ui: &mut Ui, dataset: &PackageDataset) {
    ui.heading("2D Pareto Plots");
    ui.columns(2, |columns| {
        columns[0].label("Cost vs GWP (coloured by heating)");
        plot::pareto_scatter(
            &mut columns[0],
            dataset,
            Metric::Cost,
            Metric::Gwp,
            Metric::HeatingDemand,
            360.0,
        );
        columns[1].label("Heating vs GWP (coloured by cost)");
        plot::pareto_scatter(
            &mut columns[1],
            dataset,
            Metric::HeatingDemand,
            Metric::Gwp,
            Metric::Cost,
            360.0,
        );
    });
}

fn histogram_section(ui: &mut Ui, dataset: &PackageDataset) {
    ui.heading("Distributions");
    ui.columns(Metric::ALL.len(), |columns| {
        for (col, metric) in columns.iter_mut().zip(Metric::ALL) {
            plot::histogram(col, dataset, metric, 30, 220.0);
        }
    });
}

fn parcoords_section(ui: &mut Ui, dataset: &PackageDataset, state: &AppState) {
    ui.heading("Parallel Coordinates");
    ui.label("Material layers (ordinal axes) and metrics per package, coloured by GWP.");
    plot::parallel_coordinates(ui, dataset, &state.derived, 320.0);
}
