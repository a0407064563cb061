use std::collections::{BTreeMap, BTreeSet};

use super::model::{MaterialRecord, Property};

// ---------------------------------------------------------------------------
// Filter criteria: one inclusive range per property + selected types
// ---------------------------------------------------------------------------

/// An inclusive `[min, max]` bound on one numeric property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeCriterion {
    pub min: f64,
    pub max: f64,
}

impl RangeCriterion {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// The complete filter state: ten ranges ANDed together plus a
/// type-membership set. Rebuilt from the control state on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub ranges: BTreeMap<Property, RangeCriterion>,
    pub selected_types: BTreeSet<String>,
}

impl FilterCriteria {
    /// Criteria with every range at its slider's full span and no types
    /// selected (the initial control state: nothing matches until the user
    /// ticks at least one type).
    pub fn wide_open() -> Self {
        let ranges = Property::ALL
            .iter()
            .map(|&p| {
                let (min, max) = p.slider_range();
                (p, RangeCriterion { min, max })
            })
            .collect();
        FilterCriteria {
            ranges,
            selected_types: BTreeSet::new(),
        }
    }

    fn matches(&self, record: &MaterialRecord) -> bool {
        if !self.selected_types.contains(&record.material_type) {
            return false;
        }
        self.ranges
            .iter()
            .all(|(prop, range)| range.contains(prop.value(record)))
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of records satisfying every criterion, in original order.
///
/// A record passes only when all ten property values lie within their closed
/// intervals *and* its type is in `selected_types`. An empty type set
/// therefore matches nothing; there is no implicit "select all".
pub fn filtered_indices(records: &[MaterialRecord], criteria: &FilterCriteria) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| criteria.matches(r))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::sample;

    fn steel_and_pvc() -> Vec<MaterialRecord> {
        let mut steel = sample("Steel", "Metals");
        steel.density = 7850.0;
        let mut pvc = sample("PVC", "Plastics");
        pvc.density = 1380.0;
        vec![steel, pvc]
    }

    fn criteria_with_types(types: &[&str]) -> FilterCriteria {
        let mut c = FilterCriteria::wide_open();
        c.selected_types = types.iter().map(|t| t.to_string()).collect();
        c
    }

    #[test]
    fn empty_type_set_matches_nothing() {
        let records = steel_and_pvc();
        let c = FilterCriteria::wide_open();
        assert!(filtered_indices(&records, &c).is_empty());
    }

    #[test]
    fn density_range_and_type_select_steel() {
        let records = steel_and_pvc();
        let mut c = criteria_with_types(&["Metals"]);
        c.ranges.insert(
            Property::Density,
            RangeCriterion {
                min: 7000.0,
                max: 8000.0,
            },
        );
        assert_eq!(filtered_indices(&records, &c), vec![0]);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let records = steel_and_pvc();
        let mut c = criteria_with_types(&["Metals"]);
        c.ranges.insert(
            Property::Density,
            RangeCriterion {
                min: 7850.0,
                max: 7850.0,
            },
        );
        assert_eq!(filtered_indices(&records, &c), vec![0]);

        c.ranges.insert(
            Property::Density,
            RangeCriterion {
                min: 7850.1,
                max: 9000.0,
            },
        );
        assert!(filtered_indices(&records, &c).is_empty());
    }

    #[test]
    fn all_ranges_must_hold_simultaneously() {
        let records = steel_and_pvc();
        let mut c = criteria_with_types(&["Metals", "Plastics"]);
        // Cost passes for both, but elongation excludes everything.
        c.ranges.insert(
            Property::Elongation,
            RangeCriterion {
                min: 50.0,
                max: 60.0,
            },
        );
        assert!(filtered_indices(&records, &c).is_empty());
    }

    #[test]
    fn filter_preserves_relative_order() {
        let mut records = steel_and_pvc();
        records.push({
            let mut r = sample("Titanium", "Metals");
            r.density = 4500.0;
            r
        });
        let c = criteria_with_types(&["Metals", "Plastics"]);
        assert_eq!(filtered_indices(&records, &c), vec![0, 1, 2]);
    }

    #[test]
    fn unlisted_type_is_excluded() {
        let records = steel_and_pvc();
        let c = criteria_with_types(&["Ceramics"]);
        assert!(filtered_indices(&records, &c).is_empty());
    }
}
