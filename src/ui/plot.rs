use eframe::egui::{self, RichText, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::data::model::{MaterialRecord, Property, distinct_types};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Compare tab – property scatter plot over the whole catalog
// ---------------------------------------------------------------------------

/// Render the Compare screen: X/Y property pickers, per-type include
/// checkboxes, and a labeled scatter of every included record.
pub fn compare_panel(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        property_combo(ui, "X-axis Property", "x_property", &mut state.x_property);
        property_combo(ui, "Y-axis Property", "y_property", &mut state.y_property);
    });

    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.strong("Material Types:");
        for material_type in distinct_types(&state.records) {
            let mut included = state.compare_types.contains(&material_type);
            let text = RichText::new(&material_type).color(state.type_colors.color_for(&material_type));
            if ui.checkbox(&mut included, text).changed() {
                if included {
                    state.compare_types.insert(material_type.clone());
                } else {
                    state.compare_types.remove(&material_type);
                }
            }
        }
    });
    ui.separator();

    let (Some(x_prop), Some(y_prop)) = (state.x_property, state.y_property) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Select both X and Y properties to plot");
        });
        return;
    };

    scatter_plot(ui, state, x_prop, y_prop);
}

fn property_combo(ui: &mut Ui, label: &str, id: &str, slot: &mut Option<Property>) {
    ui.label(label);
    let current = slot
        .map(|p| p.label().to_string())
        .unwrap_or_else(|| format!("Select {label}"));
    egui::ComboBox::from_id_salt(id)
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            for &prop in &Property::ALL {
                if ui.selectable_label(*slot == Some(prop), prop.label()).clicked() {
                    *slot = Some(prop);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter rendering
// ---------------------------------------------------------------------------

fn scatter_plot(ui: &mut Ui, state: &AppState, x_prop: Property, y_prop: Property) {
    Plot::new("compare_plot")
        .legend(Legend::default())
        .x_axis_label(x_prop.axis_label())
        .y_axis_label(y_prop.axis_label())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One Points series per type so the legend groups by category.
            for material_type in &state.compare_types {
                let color = state.type_colors.color_for(material_type);
                let group: Vec<&MaterialRecord> = state
                    .records
                    .iter()
                    .filter(|r| &r.material_type == material_type)
                    .collect();
                if group.is_empty() {
                    continue;
                }

                let coords: Vec<[f64; 2]> = group
                    .iter()
                    .map(|r| [x_prop.value(r), y_prop.value(r)])
                    .collect();

                for (record, &[x, y]) in group.iter().zip(&coords) {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(x, y),
                            RichText::new(&record.name).small().color(color),
                        )
                        .anchor(egui::Align2::LEFT_BOTTOM),
                    );
                }

                let points = Points::new(PlotPoints::from(coords))
                    .name(material_type)
                    .color(color)
                    .radius(4.0);
                plot_ui.points(points);
            }
        });
}
