//! Dimension line drawing

use ec_core::DimensionColor;
use egui::Color32;
use glam::Vec2;

use crate::config::OverlayStyle;
use crate::surface::DrawSurface;

/// egui color for a dimension line
pub fn dimension_color(color: DimensionColor) -> Color32 {
    let [r, g, b] = color.0;
    Color32::from_rgb(r, g, b)
}

/// Arrowhead triangle with its tip at `to`, pointing away from `from`.
///
/// The back corners sit `size` pixels from the tip at `±half_angle` from the
/// reversed line direction.
pub fn arrowhead(from: Vec2, to: Vec2, size: f32, half_angle: f32) -> [Vec2; 3] {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let corner = |a: f32| to - size * Vec2::new(a.cos(), a.sin());
    [to, corner(angle - half_angle), corner(angle + half_angle)]
}

/// Draw a measurement line with arrowheads at both ends and a centered label
pub fn draw_dimension_line<S: DrawSurface + ?Sized>(
    surface: &mut S,
    start: Vec2,
    end: Vec2,
    label: &str,
    color: Color32,
    style: &OverlayStyle,
) {
    surface.stroke_line(start, end, style.line_width, color);

    let half_angle = style.arrow_half_angle();
    surface.fill_triangle(arrowhead(end, start, style.arrow_size, half_angle), color);
    surface.fill_triangle(arrowhead(start, end, style.arrow_size, half_angle), color);

    let mid = (start + end) * 0.5;
    let text_size = surface.measure_text(label, style.font_size);
    let padding = Vec2::splat(style.label_padding);

    surface.fill_rounded_rect(
        mid - text_size * 0.5 - padding,
        text_size + padding * 2.0,
        style.label_corner_radius,
        style.background_color(),
    );

    let text_pos = mid - text_size * 0.5;
    surface.stroke_text(
        label,
        text_pos,
        style.font_size,
        style.outline_width,
        style.outline_color(),
    );
    surface.fill_text(label, text_pos, style.font_size, color);
}
