use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: material type → Color32
// ---------------------------------------------------------------------------

/// Maps the material types present in the catalog to distinct colours, so
/// scatter points and type checkboxes share one colour per category.
#[derive(Debug, Clone, Default)]
pub struct TypeColors {
    mapping: BTreeMap<String, Color32>,
}

impl TypeColors {
    /// Build a colour map from the distinct types of the loaded catalog.
    pub fn new(types: &BTreeSet<String>) -> Self {
        let palette = generate_palette(types.len());
        let mapping = types
            .iter()
            .zip(palette)
            .map(|(t, c)| (t.clone(), c))
            .collect();
        TypeColors { mapping }
    }

    /// Colour for a material type; grey for types not in the map.
    pub fn color_for(&self, material_type: &str) -> Color32 {
        self.mapping
            .get(material_type)
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_distinct() {
        let colors = generate_palette(5);
        assert_eq!(colors.len(), 5);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_type_falls_back_to_grey() {
        let types: BTreeSet<String> = ["Metals".to_string()].into_iter().collect();
        let map = TypeColors::new(&types);
        assert_eq!(map.color_for("Unobtanium"), Color32::GRAY);
        assert_ne!(map.color_for("Metals"), Color32::GRAY);
    }
}
