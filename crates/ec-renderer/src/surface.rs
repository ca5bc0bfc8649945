//! 2D drawing surface abstraction
//!
//! The overlay only needs a handful of immediate-mode primitives. Positions
//! are in surface pixels with the origin at the top-left corner.

use egui::Color32;
use glam::Vec2;

/// Transparent 2D surface the overlay draws onto
pub trait DrawSurface {
    /// Current pixel size
    fn size(&self) -> Vec2;

    /// Change the pixel size
    fn resize(&mut self, size: Vec2);

    /// Erase everything drawn so far
    fn clear(&mut self);

    /// Stroke a straight line
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color32);

    /// Fill a triangle
    fn fill_triangle(&mut self, points: [Vec2; 3], color: Color32);

    /// Fill a rectangle with rounded corners
    fn fill_rounded_rect(&mut self, min: Vec2, size: Vec2, corner_radius: f32, color: Color32);

    /// Pixel size of `text` at `font_size`
    fn measure_text(&self, text: &str, font_size: f32) -> Vec2;

    /// Draw an outline around `text` with its top-left corner at `pos`
    fn stroke_text(&mut self, text: &str, pos: Vec2, font_size: f32, width: f32, color: Color32);

    /// Fill `text` with its top-left corner at `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, font_size: f32, color: Color32);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// A recorded draw call
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear,
        Line {
            from: Vec2,
            to: Vec2,
            width: f32,
            color: Color32,
        },
        Triangle {
            points: [Vec2; 3],
            color: Color32,
        },
        Rect {
            min: Vec2,
            size: Vec2,
            color: Color32,
        },
        StrokeText {
            text: String,
            pos: Vec2,
            color: Color32,
        },
        FillText {
            text: String,
            pos: Vec2,
            color: Color32,
        },
    }

    /// Surface that records calls instead of drawing.
    ///
    /// Text measures 7px per character at 14px font, scaled linearly.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub size: Vec2,
        pub calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        pub fn lines(&self) -> Vec<&DrawCall> {
            self.calls
                .iter()
                .filter(|c| matches!(c, DrawCall::Line { .. }))
                .collect()
        }

        pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
            self.calls.iter().filter(|c| pred(c)).count()
        }
    }

    impl DrawSurface for RecordingSurface {
        fn size(&self) -> Vec2 {
            self.size
        }

        fn resize(&mut self, size: Vec2) {
            self.size = size;
        }

        fn clear(&mut self) {
            self.calls.push(DrawCall::Clear);
        }

        fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color32) {
            self.calls.push(DrawCall::Line {
                from,
                to,
                width,
                color,
            });
        }

        fn fill_triangle(&mut self, points: [Vec2; 3], color: Color32) {
            self.calls.push(DrawCall::Triangle { points, color });
        }

        fn fill_rounded_rect(&mut self, min: Vec2, size: Vec2, _corner_radius: f32, color: Color32) {
            self.calls.push(DrawCall::Rect { min, size, color });
        }

        fn measure_text(&self, text: &str, font_size: f32) -> Vec2 {
            let char_width = 7.0 * font_size / 14.0;
            Vec2::new(text.chars().count() as f32 * char_width, font_size)
        }

        fn stroke_text(&mut self, text: &str, pos: Vec2, _font_size: f32, _width: f32, color: Color32) {
            self.calls.push(DrawCall::StrokeText {
                text: text.to_string(),
                pos,
                color,
            });
        }

        fn fill_text(&mut self, text: &str, pos: Vec2, _font_size: f32, color: Color32) {
            self.calls.push(DrawCall::FillText {
                text: text.to_string(),
                pos,
                color,
            });
        }
    }
}
