//! egui implementations of the overlay surface and host

use std::collections::HashSet;

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};
use glam::Vec2;

use crate::overlay::{FrameRequest, ListenerId, OverlayHost};
use crate::surface::DrawSurface;

/// Offsets used to fake a text outline (egui cannot stroke glyphs)
const OUTLINE_DIRECTIONS: [(f32, f32); 8] = [
    (-1.0, -1.0),
    (0.0, -1.0),
    (1.0, -1.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 1.0),
    (0.0, 1.0),
    (1.0, 1.0),
];

/// Drawing surface backed by an egui painter layer.
///
/// Surface coordinates are relative to `rect.min`. egui rebuilds its shape
/// list every frame, so [`DrawSurface::clear`] has nothing to erase.
pub struct EguiSurface {
    painter: Painter,
    origin: Pos2,
    size: Vec2,
}

impl EguiSurface {
    /// Wrap `painter`, drawing into `rect`
    pub fn new(painter: Painter, rect: Rect) -> Self {
        let painter = painter.with_clip_rect(rect);
        Self {
            painter,
            origin: rect.min,
            size: Vec2::new(rect.width(), rect.height()),
        }
    }

    fn to_pos(&self, p: Vec2) -> Pos2 {
        self.origin + egui::vec2(p.x, p.y)
    }
}

impl DrawSurface for EguiSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn resize(&mut self, size: Vec2) {
        self.size = size;
        let rect = Rect::from_min_size(self.origin, egui::vec2(size.x, size.y));
        self.painter.set_clip_rect(rect);
    }

    fn clear(&mut self) {}

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color32) {
        self.painter.line_segment(
            [self.to_pos(from), self.to_pos(to)],
            Stroke::new(width, color),
        );
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], color: Color32) {
        let points = points.iter().map(|&p| self.to_pos(p)).collect();
        self.painter
            .add(Shape::convex_polygon(points, color, Stroke::NONE));
    }

    fn fill_rounded_rect(&mut self, min: Vec2, size: Vec2, corner_radius: f32, color: Color32) {
        let rect = Rect::from_min_size(self.to_pos(min), egui::vec2(size.x, size.y));
        self.painter.rect_filled(rect, corner_radius, color);
    }

    fn measure_text(&self, text: &str, font_size: f32) -> Vec2 {
        let galley = self.painter.layout_no_wrap(
            text.to_owned(),
            FontId::proportional(font_size),
            Color32::WHITE,
        );
        let size = galley.size();
        Vec2::new(size.x, size.y)
    }

    fn stroke_text(&mut self, text: &str, pos: Vec2, font_size: f32, width: f32, color: Color32) {
        let radius = width / 2.0;
        let pos = self.to_pos(pos);
        for (dx, dy) in OUTLINE_DIRECTIONS {
            self.painter.text(
                pos + egui::vec2(dx, dy) * radius,
                Align2::LEFT_TOP,
                text,
                FontId::proportional(font_size),
                color,
            );
        }
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font_size: f32, color: Color32) {
        self.painter.text(
            self.to_pos(pos),
            Align2::LEFT_TOP,
            text,
            FontId::proportional(font_size),
            color,
        );
    }
}

/// Overlay host driven by egui's repaint loop.
///
/// A requested frame becomes due on the next `update` call; the app collects
/// it with [`EguiHost::take_due_frame`] and passes it to the overlay.
pub struct EguiHost {
    ctx: egui::Context,
    next_id: u64,
    scheduled: Option<FrameRequest>,
    listeners: HashSet<ListenerId>,
    window_size: Vec2,
}

impl EguiHost {
    /// Create a host for `ctx` with an initial window size
    pub fn new(ctx: egui::Context, window_size: Vec2) -> Self {
        Self {
            ctx,
            next_id: 0,
            scheduled: None,
            listeners: HashSet::new(),
            window_size,
        }
    }

    /// Take the frame callback due this update, if any
    pub fn take_due_frame(&mut self) -> Option<FrameRequest> {
        self.scheduled.take()
    }

    /// Keep a due frame pending for a later update.
    ///
    /// Requests another repaint so the frame still fires when this update
    /// skips the overlay. Returns whether a frame was due.
    pub fn defer_due_frame(&self) -> bool {
        if self.scheduled.is_none() {
            return false;
        }
        self.ctx.request_repaint();
        true
    }

    /// Record the current window size.
    ///
    /// Returns `true` when the size changed and a resize listener is
    /// registered, i.e. the overlay should be told about it.
    pub fn set_window_size(&mut self, size: Vec2) -> bool {
        if size == self.window_size {
            return false;
        }
        self.window_size = size;
        !self.listeners.is_empty()
    }
}

impl OverlayHost for EguiHost {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        self.scheduled = Some(request);
        self.ctx.request_repaint();
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.scheduled == Some(request) {
            self.scheduled = None;
        }
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.insert(id);
        id
    }

    fn remove_resize_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }

    fn window_size(&self) -> Vec2 {
        self.window_size
    }
}
