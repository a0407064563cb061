use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::Property;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results table (central panel, Search tab)
// ---------------------------------------------------------------------------

/// Render the filtered-and-sorted subset as a scrollable table, one column
/// per property in canonical order.
pub fn results_table(ui: &mut Ui, state: &AppState) {
    ui.heading(format!(
        "Filtered Materials ({})",
        state.visible_indices.len()
    ));
    ui.separator();

    if state.visible_indices.is_empty() {
        ui.label("No materials meet your criteria.");
        return;
    }

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(120.0)); // name
    for _ in Property::ALL {
        builder = builder.column(Column::auto().at_least(70.0));
    }
    builder = builder.column(Column::remainder()); // type

    builder
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            for prop in Property::ALL {
                header.col(|ui| {
                    ui.strong(prop.axis_label());
                });
            }
            header.col(|ui| {
                ui.strong("Type");
            });
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let record = &state.records[state.visible_indices[row.index()]];
                row.col(|ui| {
                    ui.label(&record.name);
                });
                for prop in Property::ALL {
                    row.col(|ui| {
                        ui.label(format!("{}", prop.value(record)));
                    });
                }
                row.col(|ui| {
                    ui.label(&record.material_type);
                });
            });
        });
}
