use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::color::TypeColors;
use crate::data::filter::{FilterCriteria, filtered_indices};
use crate::data::model::{MaterialRecord, Property, distinct_types};
use crate::data::sort::{SortSpec, sorted_indices};
use crate::data::store::{self, SaveError};
use crate::data::validate::{MaterialForm, validate};

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Search,
    Compare,
    AddMaterial,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Owns the catalog and every
/// piece of control state; the panels only read and mutate through here.
pub struct AppState {
    /// Backing file the catalog was loaded from and is saved back to.
    pub catalog_path: PathBuf,

    /// The loaded catalog, in file order.
    pub records: Vec<MaterialRecord>,

    /// Set when the startup load failed; the interactive screens stay
    /// disabled because there is no catalog to show.
    pub load_failed: bool,

    /// Current range/type criteria from the Search controls.
    pub criteria: FilterCriteria,

    /// Current sort choice.
    pub sort: SortSpec,

    /// Indices of records passing the filters, in sort order (cached;
    /// rebuilt by [`AppState::refilter`] after every control change).
    pub visible_indices: Vec<usize>,

    /// Which screen is showing.
    pub active_tab: Tab,

    /// Types included on the Compare tab (defaults to all present).
    pub compare_types: BTreeSet<String>,

    /// Chosen scatter axes on the Compare tab.
    pub x_property: Option<Property>,
    pub y_property: Option<Property>,

    /// Text buffers behind the add-record form.
    pub form: MaterialForm,

    /// One colour per material type for plot points and legends.
    pub type_colors: TypeColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load the catalog and build the initial state. A failed load leaves
    /// an empty, disabled session with the error in `status_message`.
    pub fn new(catalog_path: PathBuf) -> Self {
        let mut state = AppState {
            catalog_path,
            records: Vec::new(),
            load_failed: false,
            criteria: FilterCriteria::wide_open(),
            sort: SortSpec::default(),
            visible_indices: Vec::new(),
            active_tab: Tab::default(),
            compare_types: BTreeSet::new(),
            x_property: None,
            y_property: None,
            form: MaterialForm::default(),
            type_colors: TypeColors::default(),
            status_message: None,
        };

        match store::load(&state.catalog_path) {
            Ok(records) => {
                state.records = records;
                state.on_catalog_changed();
            }
            Err(e) => {
                log::error!("Failed to load catalog: {e}");
                state.load_failed = true;
                state.status_message = Some(format!("Error: {e}"));
            }
        }
        state
    }

    /// Rebuild per-type bookkeeping after load or append.
    fn on_catalog_changed(&mut self) {
        let types = distinct_types(&self.records);
        self.type_colors = TypeColors::new(&types);
        // Compare defaults to every type present; newly added types join in.
        for t in &types {
            self.compare_types.insert(t.clone());
        }
        self.compare_types.retain(|t| types.contains(t));
        self.refilter();
    }

    /// Recompute `visible_indices` from the current criteria and sort spec.
    pub fn refilter(&mut self) {
        let subset = filtered_indices(&self.records, &self.criteria);
        self.visible_indices = sorted_indices(&self.records, &subset, self.sort);
    }

    /// Toggle one material type in the Search filter.
    pub fn toggle_type(&mut self, material_type: &str) {
        if !self.criteria.selected_types.remove(material_type) {
            self.criteria
                .selected_types
                .insert(material_type.to_string());
        }
        self.refilter();
    }

    /// Records of the current filtered-and-sorted subset, cloned for export.
    pub fn visible_records(&self) -> Vec<MaterialRecord> {
        self.visible_indices
            .iter()
            .map(|&i| self.records[i].clone())
            .collect()
    }

    /// Write the current subset to `path` with the backing-file layout.
    pub fn export_subset(&self, path: &Path) -> Result<usize, SaveError> {
        let subset = self.visible_records();
        store::write_csv(path, &subset)?;
        Ok(subset.len())
    }

    /// Validate the add form, append to the catalog, and persist the whole
    /// file. On success the form is cleared; every failure ends up as a
    /// status message and leaves the form intact for correction.
    pub fn submit_new_material(&mut self) {
        let record = match validate(&self.form) {
            Ok(r) => r,
            Err(e) => {
                self.status_message = Some(format!("Error: {e}"));
                return;
            }
        };
        let name = record.name.clone();

        if let Err(e) = store::append(&mut self.records, record) {
            self.status_message = Some(format!("Error: {e}"));
            return;
        }

        match store::save(&self.catalog_path, &self.records) {
            Ok(()) => {
                log::info!("Added material '{name}'");
                self.form = MaterialForm::default();
                self.status_message = Some(format!("Material '{name}' added"));
                self.on_catalog_changed();
            }
            Err(e) => {
                log::error!("Failed to save catalog: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Property;
    use crate::data::model::tests::sample;

    fn scratch_catalog(tag: &str, records: &[MaterialRecord]) -> PathBuf {
        let path =
            std::env::temp_dir().join(format!("matforge-state-{tag}-{}.csv", std::process::id()));
        store::write_csv(&path, records).unwrap();
        path
    }

    fn steel_pvc_state(tag: &str) -> (AppState, PathBuf) {
        let mut steel = sample("Steel", "Metals");
        steel.density = 7850.0;
        let mut pvc = sample("PVC", "Plastics");
        pvc.density = 1380.0;
        let path = scratch_catalog(tag, &[steel, pvc]);
        (AppState::new(path.clone()), path)
    }

    #[test]
    fn startup_load_failure_disables_session() {
        let state = AppState::new(PathBuf::from("/nonexistent/materials_data.csv"));
        assert!(state.load_failed);
        assert!(state.records.is_empty());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn nothing_visible_until_a_type_is_selected() {
        let (mut state, path) = steel_pvc_state("types");
        assert!(state.visible_indices.is_empty());

        state.toggle_type("Metals");
        assert_eq!(state.visible_indices, vec![0]);

        state.toggle_type("Metals");
        assert!(state.visible_indices.is_empty());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn sort_applies_to_filtered_subset() {
        let (mut state, path) = steel_pvc_state("sort");
        state.toggle_type("Metals");
        state.toggle_type("Plastics");
        state.sort = SortSpec {
            field: Some(Property::Density),
            ascending: true,
        };
        state.refilter();
        assert_eq!(state.visible_indices, vec![1, 0]); // PVC before Steel
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn submit_rejects_duplicate_and_keeps_catalog() {
        let (mut state, path) = steel_pvc_state("dup");
        state.form.name = "STEEL".to_string();
        state.form.material_type = "Metals".to_string();
        for &p in &Property::ALL {
            *state.form.value_mut(p) = "1".to_string();
        }

        state.submit_new_material();
        assert_eq!(state.records.len(), 2);
        assert!(
            state
                .status_message
                .as_deref()
                .is_some_and(|m| m.contains("already exists"))
        );
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn submit_appends_persists_and_clears_form() {
        let (mut state, path) = steel_pvc_state("add");
        state.form.name = "Alumina".to_string();
        state.form.material_type = "Ceramics".to_string();
        for &p in &Property::ALL {
            *state.form.value_mut(p) = "1".to_string();
        }

        state.submit_new_material();
        assert_eq!(state.records.len(), 3);
        assert_eq!(state.form, MaterialForm::default());
        assert!(state.compare_types.contains("Ceramics"));

        let reloaded = store::load(&path).unwrap();
        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded[2].name, "Alumina");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn export_writes_sorted_subset() {
        let (mut state, path) = steel_pvc_state("export");
        state.toggle_type("Metals");
        state.toggle_type("Plastics");
        state.sort = SortSpec {
            field: Some(Property::Density),
            ascending: false,
        };
        state.refilter();

        let out = std::env::temp_dir().join(format!("matforge-export-{}.csv", std::process::id()));
        let n = state.export_subset(&out).unwrap();
        assert_eq!(n, 2);

        let exported = store::load(&out).unwrap();
        assert_eq!(exported[0].name, "Steel");
        assert_eq!(exported[1].name, "PVC");
        std::fs::remove_file(out).unwrap();
        std::fs::remove_file(path).unwrap();
    }
}
