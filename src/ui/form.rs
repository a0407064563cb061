use eframe::egui::{self, Grid, ScrollArea, Ui};

use crate::data::model::{MATERIAL_TYPES, Property};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Add Material tab – one entry field per record field
// ---------------------------------------------------------------------------

/// Render the add-record form. Submission runs the validator and, on
/// success, appends to the catalog and rewrites the backing file.
pub fn add_material_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Add New Material");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            Grid::new("add_material_form")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui: &mut Ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut state.form.name);
                    ui.end_row();

                    for &prop in &Property::ALL {
                        ui.label(format!("{}:", prop.axis_label()));
                        ui.text_edit_singleline(state.form.value_mut(prop));
                        ui.end_row();
                    }

                    ui.label("Type:");
                    egui::ComboBox::from_id_salt("new_material_type")
                        .selected_text(&state.form.material_type)
                        .show_ui(ui, |ui: &mut Ui| {
                            for material_type in MATERIAL_TYPES {
                                if ui
                                    .selectable_label(
                                        state.form.material_type == material_type,
                                        material_type,
                                    )
                                    .clicked()
                                {
                                    state.form.material_type = material_type.to_string();
                                }
                            }
                        });
                    ui.end_row();
                });

            ui.add_space(8.0);
            if ui.button("Add Material").clicked() {
                state.submit_new_material();
            }
        });
}
