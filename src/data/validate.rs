use std::collections::BTreeMap;

use thiserror::Error;

use super::model::{MaterialRecord, Property, PropertyBounds};

/// Placeholder shown by the type combo box before the user picks a category.
pub const TYPE_NOT_SELECTED: &str = "Select Type";

// ---------------------------------------------------------------------------
// MaterialForm – raw field strings from the add-record screen
// ---------------------------------------------------------------------------

/// The unvalidated text buffers behind the add-record form.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialForm {
    pub name: String,
    pub values: BTreeMap<Property, String>,
    pub material_type: String,
}

impl Default for MaterialForm {
    fn default() -> Self {
        MaterialForm {
            name: String::new(),
            values: Property::ALL.iter().map(|&p| (p, String::new())).collect(),
            material_type: TYPE_NOT_SELECTED.to_string(),
        }
    }
}

impl MaterialForm {
    /// Mutable text buffer for one property's entry field.
    pub fn value_mut(&mut self, prop: Property) -> &mut String {
        self.values.entry(prop).or_default()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("all fields are required ('{0}' is empty)")]
    MissingField(&'static str),
    #[error("'{0}' must be a number")]
    NotNumeric(&'static str),
    #[error("{field} must be {bounds} {unit}", unit = .field.unit())]
    OutOfRange {
        field: Property,
        bounds: PropertyBounds,
    },
}

/// Turn raw form fields into a [`MaterialRecord`].
///
/// Checks run in three passes over the canonical field order, first failure
/// wins: every field present, every numeric field parseable, every value
/// within its acceptance bounds. The duplicate-name check is the store's
/// job (`store::append`), run by the caller once the record is built.
pub fn validate(form: &MaterialForm) -> Result<MaterialRecord, ValidationError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingField("Name"));
    }

    let mut raw_fields: Vec<(Property, &str)> = Vec::with_capacity(Property::ALL.len());
    for &prop in &Property::ALL {
        let raw = form.values.get(&prop).map(|s| s.trim()).unwrap_or("");
        if raw.is_empty() {
            return Err(ValidationError::MissingField(prop.label()));
        }
        raw_fields.push((prop, raw));
    }

    let material_type = form.material_type.trim();
    if material_type.is_empty() || material_type == TYPE_NOT_SELECTED {
        return Err(ValidationError::MissingField("Type"));
    }

    let mut parsed: Vec<(Property, f64)> = Vec::with_capacity(raw_fields.len());
    for (prop, raw) in raw_fields {
        let value: f64 = raw
            .parse()
            .map_err(|_| ValidationError::NotNumeric(prop.label()))?;
        parsed.push((prop, value));
    }

    for &(prop, value) in &parsed {
        let bounds = prop.accepted_bounds();
        if !bounds.contains(value) {
            return Err(ValidationError::OutOfRange {
                field: prop,
                bounds,
            });
        }
    }

    let value_of = |wanted: Property| {
        parsed
            .iter()
            .find(|&&(p, _)| p == wanted)
            .map(|&(_, v)| v)
            .unwrap_or_default()
    };

    Ok(MaterialRecord {
        name: name.to_string(),
        density: value_of(Property::Density),
        ultimate_tensile_strength: value_of(Property::UltimateTensileStrength),
        cost_per_kg: value_of(Property::CostPerKg),
        thermal_conductivity: value_of(Property::ThermalConductivity),
        max_service_temperature: value_of(Property::MaxServiceTemperature),
        young_modulus: value_of(Property::YoungModulus),
        thermal_capacity: value_of(Property::ThermalCapacity),
        yield_tensile_strength: value_of(Property::YieldTensileStrength),
        elongation: value_of(Property::Elongation),
        recycle_fraction: value_of(Property::RecycleFraction),
        material_type: material_type.to_string(),
    })
}
