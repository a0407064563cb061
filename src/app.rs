use std::path::PathBuf;

use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::{form, panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct MatForgeApp {
    pub state: AppState,
}

impl MatForgeApp {
    pub fn new(catalog_path: PathBuf) -> Self {
        Self {
            state: AppState::new(catalog_path),
        }
    }
}

impl eframe::App for MatForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: tabs and status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // A failed startup load leaves nothing to show; surface the error
        // instead of the interactive screens.
        if self.state.load_failed {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.heading(
                        self.state
                            .status_message
                            .as_deref()
                            .unwrap_or("Failed to load the material catalog."),
                    );
                });
            });
            return;
        }

        match self.state.active_tab {
            Tab::Search => {
                // ---- Left side panel: filters and sorting ----
                egui::SidePanel::left("filter_panel")
                    .default_width(260.0)
                    .resizable(true)
                    .show(ctx, |ui| {
                        panels::side_panel(ui, &mut self.state);
                    });

                // ---- Central panel: result listing ----
                egui::CentralPanel::default().show(ctx, |ui| {
                    table::results_table(ui, &self.state);
                });
            }
            Tab::Compare => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    plot::compare_panel(ui, &mut self.state);
                });
            }
            Tab::AddMaterial => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    form::add_material_panel(ui, &mut self.state);
                });
            }
        }
    }
}
