use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Ridge colour ramp
// ---------------------------------------------------------------------------

/// Colour each ridge by its row index along a violet → green → yellow ramp,
/// darker and cooler at the top, brighter and warmer at the bottom.
pub fn ridge_ramp(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let t = if n == 1 { 0.0 } else { i as f32 / (n - 1) as f32 };
            // Hue sweeps 280° (violet) down to 70° (yellow-green).
            let hue = 280.0 - t * 210.0;
            let hsl = Hsl::new(hue, 0.65, 0.40 + 0.20 * t);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}
