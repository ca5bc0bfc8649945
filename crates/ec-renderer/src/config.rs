//! Overlay styling configuration
//!
//! Presentation constants for dimension lines. They can be adjusted freely
//! without affecting where annotations are placed.

use egui::Color32;
use serde::{Deserialize, Serialize};

/// Dimension line styling
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverlayStyle {
    /// Stroke width of the measurement line (px)
    pub line_width: f32,
    /// Distance from arrow tip to its back corners (px)
    pub arrow_size: f32,
    /// Half-angle of the arrowhead (degrees)
    pub arrow_half_angle_deg: f32,
    /// Label font size (px)
    pub font_size: f32,
    /// Padding around the label inside its background box (px)
    pub label_padding: f32,
    /// Corner radius of the label background (px)
    pub label_corner_radius: f32,
    /// Label background color (RGBA, unmultiplied)
    pub label_background: [u8; 4],
    /// Label outline color (RGBA, unmultiplied)
    pub outline_color: [u8; 4],
    /// Label outline width (px)
    pub outline_width: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            arrow_size: 8.0,
            arrow_half_angle_deg: 30.0,
            font_size: 14.0,
            label_padding: 4.0,
            label_corner_radius: 2.0,
            label_background: [0, 0, 0, 191],
            outline_color: [0, 0, 0, 255],
            outline_width: 3.0,
        }
    }
}

impl OverlayStyle {
    /// Arrowhead half-angle in radians
    pub fn arrow_half_angle(&self) -> f32 {
        self.arrow_half_angle_deg.to_radians()
    }

    /// Label background as an egui color
    pub fn background_color(&self) -> Color32 {
        let [r, g, b, a] = self.label_background;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    /// Label outline as an egui color
    pub fn outline_color(&self) -> Color32 {
        let [r, g, b, a] = self.outline_color;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arrow_angle() {
        let style = OverlayStyle::default();
        assert!((style.arrow_half_angle() - std::f32::consts::FRAC_PI_6).abs() < 1e-6);
    }

    #[test]
    fn test_outline_is_opaque_black() {
        assert_eq!(OverlayStyle::default().outline_color(), Color32::BLACK);
    }
}
