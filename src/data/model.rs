use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MaterialRecord – one row of the catalog
// ---------------------------------------------------------------------------

/// A single material entry. Field order matches the canonical column order
/// of the backing CSV file; the serde renames map to its historical headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub name: String,
    #[serde(rename = "density_(kg/m^3)")]
    pub density: f64,
    #[serde(rename = "UTS_(MPa)")]
    pub ultimate_tensile_strength: f64,
    #[serde(rename = "cost_per_kg_($)")]
    pub cost_per_kg: f64,
    #[serde(rename = "thermal_conductivity_(W/mK)")]
    pub thermal_conductivity: f64,
    #[serde(rename = "maximum_temperature_(C)")]
    pub max_service_temperature: f64,
    #[serde(rename = "young_modulus_(GPa)")]
    pub young_modulus: f64,
    #[serde(rename = "thermal_capacity_(J/kgK)")]
    pub thermal_capacity: f64,
    #[serde(rename = "tensile_strength_yield_(MPa)")]
    pub yield_tensile_strength: f64,
    #[serde(rename = "Elongation_(%)")]
    pub elongation: f64,
    #[serde(rename = "recycle_fraction_(%)")]
    pub recycle_fraction: f64,
    #[serde(rename = "type")]
    pub material_type: String,
}

/// The category set offered by the add-record form. Loading tolerates
/// arbitrary type text; only new entries are restricted to this list.
pub const MATERIAL_TYPES: [&str; 5] = ["Metals", "Plastics", "Ceramics", "Composites", "Alloys"];

/// Distinct material types present in a catalog, in sorted order.
pub fn distinct_types(records: &[MaterialRecord]) -> BTreeSet<String> {
    records.iter().map(|r| r.material_type.clone()).collect()
}

// ---------------------------------------------------------------------------
// Property – the ten numeric fields as data
// ---------------------------------------------------------------------------

/// One of the ten numeric properties of a [`MaterialRecord`].
///
/// Everything the rest of the program needs per field hangs off this enum:
/// accessor, display label, unit, filter-slider range, and add-form bounds.
/// Keeping it in one table avoids ten hand-written copies of the same
/// range check drifting apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    Density,
    UltimateTensileStrength,
    CostPerKg,
    ThermalConductivity,
    MaxServiceTemperature,
    YoungModulus,
    ThermalCapacity,
    YieldTensileStrength,
    Elongation,
    RecycleFraction,
}

impl Property {
    /// Canonical field order (also the validation order).
    pub const ALL: [Property; 10] = [
        Property::Density,
        Property::UltimateTensileStrength,
        Property::CostPerKg,
        Property::ThermalConductivity,
        Property::MaxServiceTemperature,
        Property::YoungModulus,
        Property::ThermalCapacity,
        Property::YieldTensileStrength,
        Property::Elongation,
        Property::RecycleFraction,
    ];

    /// Read this property's value from a record.
    pub fn value(self, record: &MaterialRecord) -> f64 {
        match self {
            Property::Density => record.density,
            Property::UltimateTensileStrength => record.ultimate_tensile_strength,
            Property::CostPerKg => record.cost_per_kg,
            Property::ThermalConductivity => record.thermal_conductivity,
            Property::MaxServiceTemperature => record.max_service_temperature,
            Property::YoungModulus => record.young_modulus,
            Property::ThermalCapacity => record.thermal_capacity,
            Property::YieldTensileStrength => record.yield_tensile_strength,
            Property::Elongation => record.elongation,
            Property::RecycleFraction => record.recycle_fraction,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Property::Density => "Density",
            Property::UltimateTensileStrength => "UTS",
            Property::CostPerKg => "Cost",
            Property::ThermalConductivity => "Thermal Conductivity",
            Property::MaxServiceTemperature => "Maximum Temperature",
            Property::YoungModulus => "Young's Modulus",
            Property::ThermalCapacity => "Thermal Capacity",
            Property::YieldTensileStrength => "Yield Tensile Strength",
            Property::Elongation => "Elongation",
            Property::RecycleFraction => "Recycle Fraction",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Property::Density => "kg/m³",
            Property::UltimateTensileStrength => "MPa",
            Property::CostPerKg => "$/kg",
            Property::ThermalConductivity => "W/mK",
            Property::MaxServiceTemperature => "°C",
            Property::YoungModulus => "GPa",
            Property::ThermalCapacity => "J/kg·K",
            Property::YieldTensileStrength => "MPa",
            Property::Elongation => "%",
            Property::RecycleFraction => "%",
        }
    }

    /// Axis / column header text, e.g. `Density [kg/m³]`.
    pub fn axis_label(self) -> String {
        format!("{} [{}]", self.label(), self.unit())
    }

    /// Full span of the filter sliders for this property.
    pub fn slider_range(self) -> (f64, f64) {
        match self {
            Property::Density => (500.0, 12000.0),
            Property::UltimateTensileStrength => (0.0, 1500.0),
            Property::CostPerKg => (0.0, 100.0),
            Property::ThermalConductivity => (0.0, 2000.0),
            Property::MaxServiceTemperature => (0.0, 5000.0),
            Property::YoungModulus => (0.0, 1000.0),
            Property::ThermalCapacity => (0.0, 2500.0),
            Property::YieldTensileStrength => (0.0, 4000.0),
            Property::Elongation => (0.0, 150.0),
            Property::RecycleFraction => (0.0, 100.0),
        }
    }

    /// Bounds a value must satisfy before a record may enter the catalog.
    pub fn accepted_bounds(self) -> PropertyBounds {
        match self {
            Property::Density => PropertyBounds::positive(25000.0),
            Property::UltimateTensileStrength => PropertyBounds::positive(5000.0),
            Property::CostPerKg => PropertyBounds::positive(1000.0),
            Property::ThermalConductivity => PropertyBounds::non_negative(1000.0),
            Property::MaxServiceTemperature => PropertyBounds::non_negative(5000.0),
            Property::YoungModulus => PropertyBounds::non_negative(1500.0),
            Property::ThermalCapacity => PropertyBounds::non_negative(10000.0),
            Property::YieldTensileStrength => PropertyBounds::non_negative(1000.0),
            Property::Elongation => PropertyBounds::non_negative(100.0),
            Property::RecycleFraction => PropertyBounds::non_negative(100.0),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// PropertyBounds – acceptance interval for new records
// ---------------------------------------------------------------------------

/// Acceptance interval for one property of a new record. The lower end is
/// either `> 0` or `>= 0`; the upper end is always inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyBounds {
    pub zero_allowed: bool,
    pub upper: f64,
}

impl PropertyBounds {
    fn positive(upper: f64) -> Self {
        PropertyBounds {
            zero_allowed: false,
            upper,
        }
    }

    fn non_negative(upper: f64) -> Self {
        PropertyBounds {
            zero_allowed: true,
            upper,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let above_lower = if self.zero_allowed {
            value >= 0.0
        } else {
            value > 0.0
        };
        above_lower && value <= self.upper
    }
}

impl fmt::Display for PropertyBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.zero_allowed {
            write!(f, "between 0 and {}", self.upper)
        } else {
            write!(f, "greater than 0 and at most {}", self.upper)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Mid-range record used across the data-layer tests.
    pub(crate) fn sample(name: &str, material_type: &str) -> MaterialRecord {
        MaterialRecord {
            name: name.to_string(),
            density: 2700.0,
            ultimate_tensile_strength: 310.0,
            cost_per_kg: 2.5,
            thermal_conductivity: 237.0,
            max_service_temperature: 400.0,
            young_modulus: 69.0,
            thermal_capacity: 900.0,
            yield_tensile_strength: 276.0,
            elongation: 12.0,
            recycle_fraction: 90.0,
            material_type: material_type.to_string(),
        }
    }

    #[test]
    fn property_accessors_cover_all_fields() {
        let r = sample("Aluminium", "Metals");
        let values: Vec<f64> = Property::ALL.iter().map(|p| p.value(&r)).collect();
        assert_eq!(
            values,
            vec![2700.0, 310.0, 2.5, 237.0, 400.0, 69.0, 900.0, 276.0, 12.0, 90.0]
        );
    }

    #[test]
    fn exclusive_lower_bound_rejects_zero() {
        let b = Property::Density.accepted_bounds();
        assert!(!b.contains(0.0));
        assert!(b.contains(25000.0));
        assert!(!b.contains(25000.0001));
    }

    #[test]
    fn inclusive_lower_bound_accepts_zero() {
        let b = Property::ThermalConductivity.accepted_bounds();
        assert!(b.contains(0.0));
        assert!(b.contains(1000.0));
        assert!(!b.contains(-0.1));
    }

    #[test]
    fn distinct_types_sorted_unique() {
        let records = vec![
            sample("A", "Metals"),
            sample("B", "Plastics"),
            sample("C", "Metals"),
        ];
        let types: Vec<String> = distinct_types(&records).into_iter().collect();
        assert_eq!(types, vec!["Metals".to_string(), "Plastics".to_string()]);
    }
}
