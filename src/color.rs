use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Continuous metric gradient
// ---------------------------------------------------------------------------

/// Maps a metric's value range onto a cold-to-hot hue ramp, used to
/// colour scatter points and parallel-coordinate lines by a third metric.
#[derive(Debug, Clone, Copy)]
pub struct MetricGradient {
    min: f64,
    max: f64,
}

impl MetricGradient {
    /// Build a gradient over the observed range of `values`.
    pub fn from_values(values: &[f64]) -> Self {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        MetricGradient { min, max }
    }

    /// Colour for one value; out-of-range inputs clamp to the ends.
    pub fn color_for(&self, value: f64) -> Color32 {
        let range = self.max - self.min;
        let t = if range.abs() < f64::EPSILON {
            0.5
        } else {
            ((value - self.min) / range).clamp(0.0, 1.0)
        };
        // 210° (blue, low) → 0° (red, high).
        let hue = 210.0 * (1.0 - t as f32);
        let hsl = Hsl::new(hue, 0.75, 0.5);
        let rgb: Srgb = hsl.into_color();
        Color32::from_rgb(
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }
}
