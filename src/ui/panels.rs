use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{MATERIAL_TYPES, Property, distinct_types};
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Top bar – tabs, counts, status
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export results…").clicked() {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        for (tab, label) in [
            (Tab::Search, "Search"),
            (Tab::Compare, "Compare"),
            (Tab::AddMaterial, "Add Material"),
        ] {
            if ui
                .selectable_label(state.active_tab == tab, label)
                .clicked()
            {
                state.active_tab = tab;
            }
        }

        ui.separator();

        if !state.load_failed {
            ui.label(format!(
                "{} materials loaded, {} matching",
                state.records.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter and sort controls (Search tab)
// ---------------------------------------------------------------------------

/// Render the filter panel: type checkboxes, ten min/max range sliders, and
/// the sort controls. Any change triggers an immediate re-filter.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Material types ----
            ui.strong("Material Type");
            for material_type in search_types(state) {
                let mut checked = state.criteria.selected_types.contains(&material_type);
                if ui.checkbox(&mut checked, &material_type).changed() {
                    state.toggle_type(&material_type);
                }
            }
            ui.separator();

            // ---- Property ranges ----
            ui.strong("Property Ranges");
            for &prop in &Property::ALL {
                let (lo, hi) = prop.slider_range();
                let Some(range) = state.criteria.ranges.get_mut(&prop) else {
                    continue;
                };

                ui.label(prop.axis_label());
                if ui
                    .add(egui::Slider::new(&mut range.min, lo..=hi).text("min"))
                    .changed()
                {
                    // Keep min ≤ max by dragging max along.
                    if range.min > range.max {
                        range.max = range.min;
                    }
                    changed = true;
                }
                if ui
                    .add(egui::Slider::new(&mut range.max, lo..=hi).text("max"))
                    .changed()
                {
                    if range.max < range.min {
                        range.min = range.max;
                    }
                    changed = true;
                }
                ui.add_space(4.0);
            }
            ui.separator();

            // ---- Sorting ----
            ui.strong("Sort by");
            let current = state
                .sort
                .field
                .map(|p| p.label().to_string())
                .unwrap_or_else(|| "Unsorted".to_string());
            egui::ComboBox::from_id_salt("sort_by")
                .selected_text(current)
                .show_ui(ui, |ui: &mut Ui| {
                    if ui
                        .selectable_label(state.sort.field.is_none(), "Unsorted")
                        .clicked()
                    {
                        state.sort.field = None;
                        changed = true;
                    }
                    for &prop in &Property::ALL {
                        if ui
                            .selectable_label(state.sort.field == Some(prop), prop.label())
                            .clicked()
                        {
                            state.sort.field = Some(prop);
                            changed = true;
                        }
                    }
                });

            ui.horizontal(|ui: &mut Ui| {
                if ui
                    .selectable_label(state.sort.ascending, "Ascending")
                    .clicked()
                {
                    state.sort.ascending = true;
                    changed = true;
                }
                if ui
                    .selectable_label(!state.sort.ascending, "Descending")
                    .clicked()
                {
                    state.sort.ascending = false;
                    changed = true;
                }
            });
            ui.separator();

            if ui.button("Export to CSV").clicked() {
                export_dialog(state);
            }
        });

    if changed {
        state.refilter();
    }
}

/// Types offered on the Search tab: the fixed category set plus whatever
/// extra type text the loaded file happened to contain.
fn search_types(state: &AppState) -> Vec<String> {
    let mut types: Vec<String> = MATERIAL_TYPES.iter().map(|t| t.to_string()).collect();
    for t in distinct_types(&state.records) {
        if !types.contains(&t) {
            types.push(t);
        }
    }
    types
}

// ---------------------------------------------------------------------------
// Export dialog
// ---------------------------------------------------------------------------

pub fn export_dialog(state: &mut AppState) {
    if state.visible_indices.is_empty() {
        state.status_message = Some("No materials to export.".to_string());
        return;
    }

    let file = rfd::FileDialog::new()
        .set_title("Export filtered materials")
        .set_file_name("materials_export.csv")
        .add_filter("CSV files", &["csv"])
        .save_file();

    if let Some(path) = file {
        match state.export_subset(&path) {
            Ok(n) => {
                log::info!("Exported {n} materials to {}", path.display());
                state.status_message = Some(format!("Exported {n} materials"));
            }
            Err(e) => {
                log::error!("Export failed: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
