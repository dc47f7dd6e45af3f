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
// Color mapping: year label → Color32
// ---------------------------------------------------------------------------

/// Maps each distinct year of the dataset to a distinct colour so the
/// scatter series stay visually stable across refilters.
#[derive(Debug, Clone)]
pub struct YearColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl YearColors {
    /// Build the colour map from the set of distinct years.
    pub fn new(years: &BTreeSet<String>) -> Self {
        let palette = generate_palette(years.len());
        let mapping: BTreeMap<String, Color32> = years
            .iter()
            .zip(palette.into_iter())
            .map(|(y, c): (&String, Color32)| (y.clone(), c))
            .collect();

        YearColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a year label.
    pub fn color_for(&self, year: &str) -> Color32 {
        self.mapping
            .get(year)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_get_distinct_colors() {
        let years: BTreeSet<String> =
            ["2020", "2021", "2022"].iter().map(|y| y.to_string()).collect();
        let colors = YearColors::new(&years);
        let c0 = colors.color_for("2020");
        let c1 = colors.color_for("2021");
        let c2 = colors.color_for("2022");
        assert_ne!(c0, c1);
        assert_ne!(c1, c2);
        // Unknown years fall back to the default.
        assert_eq!(colors.color_for("1999"), Color32::GRAY);
    }
}
