//! 3D viewport panel
//!
//! Shows each part as a projected wireframe box and mounts the dimension
//! overlay on a foreground layer above it. The overlay layer has no
//! interaction, so pointer input reaches the viewport underneath.

use ec_core::{EnclosureParams, PartKind, PartPlacement, part_placement, visible_parts};
use ec_renderer::{
    CameraSnapshot, DimensionOverlay, EguiHost, EguiSurface, OrbitCamera, OverlayFrame,
    OverlayStyle, Viewport, project_segment,
};
use glam::{Vec2, Vec3};

use crate::state::SharedAppState;
use crate::theme::palette;

/// Ground grid extent and spacing (mm)
const GRID_HALF_EXTENT: f32 = 200.0;
const GRID_SPACING: f32 = 20.0;

/// 3D viewport panel
pub struct ViewportPanel {
    camera: OrbitCamera,
    overlay: Option<DimensionOverlay<EguiHost>>,
    style: OverlayStyle,
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportPanel {
    /// Create a new viewport panel with the default camera
    pub fn new() -> Self {
        Self {
            camera: OrbitCamera::new(),
            overlay: None,
            style: OverlayStyle::default(),
        }
    }

    /// Render the viewport: toolbar, camera input, scene and dimension overlay
    pub fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        ui.horizontal(|ui| {
            ui.label("View:");
            if ui.button("Top").clicked() {
                self.camera.set_top_view();
            }
            if ui.button("Front").clicked() {
                self.camera.set_front_view();
            }
            if ui.button("Side").clicked() {
                self.camera.set_side_view();
            }
            if ui.button("Fit All").clicked() {
                let params = app_state.lock().params.clone();
                let (center, radius) = scene_bounds(&params);
                self.camera.fit_all(center, radius);
            }
        });

        let available_size = ui.available_size();
        if available_size.x <= 0.0 || available_size.y <= 0.0 {
            // Keep the overlay loop ticking until the viewport has room again
            if let Some(overlay) = &self.overlay {
                overlay.host().defer_due_frame();
            }
            return;
        }

        let (response, painter) =
            ui.allocate_painter(available_size, egui::Sense::click_and_drag());
        let rect = response.rect;
        self.handle_input(ui, &response);

        painter.rect_filled(rect, 0.0, palette::BG_BASE);

        // Fresh snapshot every frame so annotations never trail the camera
        let viewport = Viewport::new(0.0, 0.0, rect.width(), rect.height());
        let camera = self.camera.snapshot(viewport);

        let mut state = app_state.lock();
        let params = state.params.clone();
        draw_grid(&painter, rect, &camera);
        for part in visible_parts(&params) {
            if let Some(placement) = part_placement(&params, part) {
                draw_wireframe(&painter, rect, &camera, &placement, part);
            }
        }

        let frame = OverlayFrame {
            camera: &camera,
            dimensions: state.dimensions(),
            visible: params.show_dimensions,
        };
        self.update_overlay(ui.ctx(), rect, &frame);
    }

    fn handle_input(&mut self, ui: &egui::Ui, response: &egui::Response) {
        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            self.camera.orbit(-delta.x * 0.005, delta.y * 0.005);
        }
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            self.camera.pan(delta.x, delta.y);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.camera.zoom(scroll * 0.01);
            }
        }
    }

    fn update_overlay(&mut self, ctx: &egui::Context, rect: egui::Rect, frame: &OverlayFrame<'_>) {
        let layer = egui::LayerId::new(egui::Order::Foreground, egui::Id::new("dimension_overlay"));
        let mut surface = EguiSurface::new(ctx.layer_painter(layer), rect);
        let size = Vec2::new(rect.width(), rect.height());

        if self.overlay.is_none() {
            let host = EguiHost::new(ctx.clone(), size);
            let mut overlay = DimensionOverlay::new(host, self.style.clone());
            overlay.mount(Some(&mut surface), frame);
            self.overlay = Some(overlay);
            return;
        }
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };

        if overlay.host_mut().set_window_size(size) {
            overlay.on_resize(&mut surface);
        }
        if let Some(request) = overlay.host_mut().take_due_frame() {
            overlay.on_frame(request, Some(&mut surface), frame);
        }
    }
}

/// Center and radius enclosing every part in the layout
fn scene_bounds(params: &EnclosureParams) -> (Vec3, f32) {
    let placements: Vec<PartPlacement> = PartKind::ALL
        .into_iter()
        .filter_map(|part| part_placement(params, part))
        .collect();

    let min = placements
        .iter()
        .map(|placement| placement.min().as_vec3())
        .fold(Vec3::splat(f32::MAX), Vec3::min);
    let max = placements
        .iter()
        .map(|placement| placement.max().as_vec3())
        .fold(Vec3::splat(f32::MIN), Vec3::max);

    let center = (min + max) * 0.5;
    (center, (max - min).length() * 0.5)
}

fn draw_segment(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &CameraSnapshot,
    start: Vec3,
    end: Vec3,
    stroke: egui::Stroke,
) {
    let window = Vec2::new(rect.width(), rect.height());
    if let Some((a, b)) = project_segment(start, end, camera, window) {
        painter.line_segment(
            [rect.min + egui::vec2(a.x, a.y), rect.min + egui::vec2(b.x, b.y)],
            stroke,
        );
    }
}

fn draw_grid(painter: &egui::Painter, rect: egui::Rect, camera: &CameraSnapshot) {
    let stroke = egui::Stroke::new(1.0, palette::GRID);
    let lines = (2.0 * GRID_HALF_EXTENT / GRID_SPACING) as i32;
    for i in 0..=lines {
        let t = -GRID_HALF_EXTENT + i as f32 * GRID_SPACING;
        draw_segment(
            painter,
            rect,
            camera,
            Vec3::new(t, -GRID_HALF_EXTENT, 0.0),
            Vec3::new(t, GRID_HALF_EXTENT, 0.0),
            stroke,
        );
        draw_segment(
            painter,
            rect,
            camera,
            Vec3::new(-GRID_HALF_EXTENT, t, 0.0),
            Vec3::new(GRID_HALF_EXTENT, t, 0.0),
            stroke,
        );
    }
}

/// Box edges as pairs of corner indices (bit 0 = x, bit 1 = y, bit 2 = z)
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (0, 2),
    (1, 3),
    (4, 6),
    (5, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

fn draw_wireframe(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &CameraSnapshot,
    placement: &PartPlacement,
    part: PartKind,
) {
    let color = match part {
        PartKind::Seal => palette::WIREFRAME_SEAL,
        _ => palette::WIREFRAME,
    };
    let stroke = egui::Stroke::new(1.5, color);

    let (min, max) = (placement.min().as_vec3(), placement.max().as_vec3());
    let corner = |i: usize| {
        Vec3::new(
            if i & 1 == 0 { min.x } else { max.x },
            if i & 2 == 0 { min.y } else { max.y },
            if i & 4 == 0 { min.z } else { max.z },
        )
    };

    for (a, b) in BOX_EDGES {
        draw_segment(painter, rect, camera, corner(a), corner(b), stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_bounds_cover_all_parts() {
        let params = EnclosureParams::default();
        let (center, radius) = scene_bounds(&params);
        for part in PartKind::ALL {
            let placement = part_placement(&params, part).unwrap();
            assert!(placement.min().as_vec3().distance(center) <= radius + 1e-3);
            assert!(placement.max().as_vec3().distance(center) <= radius + 1e-3);
        }
    }

    #[test]
    fn test_box_edges_differ_in_one_axis() {
        for (a, b) in BOX_EDGES {
            assert_eq!((a ^ b).count_ones(), 1);
        }
    }
}
