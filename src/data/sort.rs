use super::model::{MaterialRecord, Property};

// ---------------------------------------------------------------------------
// Sort specification
// ---------------------------------------------------------------------------

/// Which property to order results by, if any, and in which direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortSpec {
    pub field: Option<Property>,
    pub ascending: bool,
}

impl Default for SortSpec {
    fn default() -> Self {
        SortSpec {
            field: None,
            ascending: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Order a filtered subset (given as indices into `records`) by the spec.
///
/// Returns a new index vector; the input subset is never mutated. With no
/// sort field the subset comes back unchanged. The sort is stable in both
/// directions: records comparing equal on the sort field keep their
/// relative order from the input.
pub fn sorted_indices(records: &[MaterialRecord], subset: &[usize], spec: SortSpec) -> Vec<usize> {
    let mut ordered: Vec<usize> = subset.to_vec();
    let Some(field) = spec.field else {
        return ordered;
    };

    ordered.sort_by(|&a, &b| {
        let va = field.value(&records[a]);
        let vb = field.value(&records[b]);
        if spec.ascending {
            va.total_cmp(&vb)
        } else {
            vb.total_cmp(&va)
        }
    });
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::sample;

    fn records_with_costs(costs: &[(&str, f64)]) -> Vec<MaterialRecord> {
        costs
            .iter()
            .map(|&(name, cost)| {
                let mut r = sample(name, "Metals");
                r.cost_per_kg = cost;
                r
            })
            .collect()
    }

    #[test]
    fn no_field_is_identity() {
        let records = records_with_costs(&[("B", 9.0), ("A", 1.0), ("C", 4.0)]);
        let subset = vec![2, 0, 1];
        let ordered = sorted_indices(&records, &subset, SortSpec::default());
        assert_eq!(ordered, subset);
    }

    #[test]
    fn ascending_orders_by_value() {
        let records = records_with_costs(&[("B", 9.0), ("A", 1.0), ("C", 4.0)]);
        let spec = SortSpec {
            field: Some(Property::CostPerKg),
            ascending: true,
        };
        let ordered = sorted_indices(&records, &[0, 1, 2], spec);
        assert_eq!(ordered, vec![1, 2, 0]);
    }

    #[test]
    fn descending_ties_keep_input_order() {
        // Costs [5, 5, 2] with names A, B, C: the tied pair must stay A, B.
        let records = records_with_costs(&[("A", 5.0), ("B", 5.0), ("C", 2.0)]);
        let spec = SortSpec {
            field: Some(Property::CostPerKg),
            ascending: false,
        };
        let ordered = sorted_indices(&records, &[0, 1, 2], spec);
        let names: Vec<&str> = ordered.iter().map(|&i| records[i].name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn ascending_ties_keep_input_order() {
        let records = records_with_costs(&[("A", 5.0), ("B", 5.0), ("C", 2.0)]);
        let spec = SortSpec {
            field: Some(Property::CostPerKg),
            ascending: true,
        };
        let ordered = sorted_indices(&records, &[0, 1, 2], spec);
        let names: Vec<&str> = ordered.iter().map(|&i| records[i].name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn input_subset_is_untouched() {
        let records = records_with_costs(&[("B", 9.0), ("A", 1.0)]);
        let subset = vec![0, 1];
        let spec = SortSpec {
            field: Some(Property::CostPerKg),
            ascending: true,
        };
        let _ = sorted_indices(&records, &subset, spec);
        assert_eq!(subset, vec![0, 1]);
    }
}
