use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues, starting
/// from `start_hue` degrees.
pub fn generate_palette(n: usize, start_hue: f32) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (start_hue + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.5);
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
// Series colours
// ---------------------------------------------------------------------------

/// Line colours for the two plotted series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesColors {
    pub unadjusted: Color32,
    pub adjusted: Color32,
}

impl Default for SeriesColors {
    fn default() -> Self {
        // Blue-ish first, orange-ish opposite.
        let palette = generate_palette(2, 210.0);
        Self {
            unadjusted: palette.first().copied().unwrap_or(Color32::LIGHT_BLUE),
            adjusted: palette.get(1).copied().unwrap_or(Color32::GOLD),
        }
    }
}
