//! World to screen projection

use glam::{Vec2, Vec3};

use crate::camera::CameraSnapshot;

/// Project a world-space point to screen pixels.
///
/// The point goes through the view and projection matrices to clip space,
/// then through the perspective divide to NDC, and finally onto the
/// snapshot's viewport with Y flipped (screen origin is top-left).
///
/// Returns `None` when the clip-space `w` is not positive, i.e. the point is
/// at or behind the camera plane and has no meaningful screen position.
/// `window_size` is only used when the snapshot carries no viewport.
pub fn project_to_screen(point: Vec3, camera: &CameraSnapshot, window_size: Vec2) -> Option<Vec2> {
    let view_pos = camera.view_matrix() * point.extend(1.0);
    let clip = camera.projection_matrix() * view_pos;

    // Also rejects NaN
    if !(clip.w > 0.0) {
        return None;
    }

    let ndc = Vec2::new(clip.x / clip.w, clip.y / clip.w);
    let viewport = camera.resolved_viewport(window_size);

    Some(Vec2::new(
        (ndc.x + 1.0) * viewport.width / 2.0 + viewport.x,
        (1.0 - ndc.y) * viewport.height / 2.0 + viewport.y,
    ))
}

/// Project both ends of a segment; `None` unless both are in front of the camera
pub fn project_segment(
    start: Vec3,
    end: Vec3,
    camera: &CameraSnapshot,
    window_size: Vec2,
) -> Option<(Vec2, Vec2)> {
    let start = project_to_screen(start, camera, window_size)?;
    let end = project_to_screen(end, camera, window_size)?;
    Some((start, end))
}
