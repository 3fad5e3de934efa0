use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – multi-criteria selector
// ---------------------------------------------------------------------------

/// Render the weight sliders and ranked-table length control.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Multi-Criteria Selector");
    ui.label("Choose how much each factor matters to you. Weights are normalized before scoring.");
    ui.separator();

    ui.add(
        egui::Slider::new(&mut state.weights.gwp, 0.0..=1.0)
            .step_by(0.01)
            .text("GWP importance"),
    );
    ui.add(
        egui::Slider::new(&mut state.weights.cost, 0.0..=1.0)
            .step_by(0.01)
            .text("Cost importance"),
    );
    ui.add(
        egui::Slider::new(&mut state.weights.heating, 0.0..=1.0)
            .step_by(0.01)
            .text("Heating importance"),
    );

    ui.add_space(6.0);
    match state.weights.normalized() {
        Ok(w) => {
            ui.strong("Normalized weights");
            ui.monospace(format!(
                "GWP {:.2}   Cost {:.2}   Heating {:.2}",
                w.gwp, w.cost, w.heating
            ));
        }
        Err(_) => {
            ui.colored_label(
                Color32::YELLOW,
                "Assign some weight to at least one criterion.",
            );
        }
    }

    ui.separator();
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Ranked rows:");
        ui.add(egui::DragValue::new(&mut state.top_n).range(1..=50));
    });

    if let Some(ds) = &state.dataset {
        ui.separator();
        ui.label(format!("{} packages loaded", ds.len()));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label("Retrofit Simulation Dashboard");
        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open retrofit summary")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::cached_load(&path) {
            Ok(dataset) => {
                // cached_load already logs the load.
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error loading {}: {e}", path.display()));
            }
        }
    }
}
