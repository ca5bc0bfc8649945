//! Self-rescheduling dimension overlay
//!
//! [`DimensionOverlay`] owns the per-frame redraw loop for the annotation
//! layer. The host supplies the frame clock and resize notifications through
//! [`OverlayHost`]; each frame the caller hands in the current camera and
//! dimension lines, so the overlay never holds on to camera state.
//!
//! Lifecycle:
//!
//! ```text
//! mount ──> on_frame ──> on_frame ──> ... ──> unmount / drop
//!   │          │ each pass reschedules itself     │
//!   └ resize listener added                       └ pending frame cancelled,
//!                                                   resize listener removed
//! ```

use ec_core::DimensionLine;
use glam::Vec2;

use crate::camera::CameraSnapshot;
use crate::config::OverlayStyle;
use crate::painter::{dimension_color, draw_dimension_line};
use crate::projection::project_segment;
use crate::surface::DrawSurface;

/// Handle for a scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// Handle for a registered resize listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Frame clock and window events provided by the embedding application
pub trait OverlayHost {
    /// Schedule a callback on the next frame
    fn request_frame(&mut self) -> FrameRequest;

    /// Withdraw a scheduled callback
    fn cancel_frame(&mut self, request: FrameRequest);

    /// Start receiving window resize notifications
    fn add_resize_listener(&mut self) -> ListenerId;

    /// Stop receiving window resize notifications
    fn remove_resize_listener(&mut self, id: ListenerId);

    /// Current window size in pixels
    fn window_size(&self) -> Vec2;
}

/// Inputs for one overlay pass
#[derive(Debug, Clone, Copy)]
pub struct OverlayFrame<'a> {
    /// Camera state for this frame
    pub camera: &'a CameraSnapshot,
    /// Lines to draw, in draw order
    pub dimensions: &'a [DimensionLine],
    /// Whether annotations are shown
    pub visible: bool,
}

/// Outcome of one overlay pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Lines drawn
    pub drawn: usize,
    /// Lines skipped because an endpoint was behind the camera
    pub skipped: usize,
}

/// Frame-driven renderer for dimension annotations
pub struct DimensionOverlay<H: OverlayHost> {
    host: H,
    style: OverlayStyle,
    pending: Option<FrameRequest>,
    resize_listener: Option<ListenerId>,
}

impl<H: OverlayHost> DimensionOverlay<H> {
    /// Create an unmounted overlay
    pub fn new(host: H, style: OverlayStyle) -> Self {
        Self {
            host,
            style,
            pending: None,
            resize_listener: None,
        }
    }

    /// The frame/event host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the frame/event host
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Whether the overlay is mounted
    pub fn is_mounted(&self) -> bool {
        self.resize_listener.is_some()
    }

    /// The frame callback currently scheduled, if any
    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// Attach to the host and draw the first frame immediately.
    ///
    /// Sizes the surface to the window, registers for resize events and
    /// schedules the next frame. Does nothing if already mounted.
    pub fn mount<S: DrawSurface + ?Sized>(
        &mut self,
        mut surface: Option<&mut S>,
        frame: &OverlayFrame<'_>,
    ) -> FrameStats {
        if self.is_mounted() {
            return FrameStats::default();
        }

        self.resize_listener = Some(self.host.add_resize_listener());
        if let Some(surface) = surface.as_deref_mut() {
            surface.resize(self.host.window_size());
        }
        tracing::debug!("dimension overlay mounted");

        let stats = self.render(surface, frame);
        self.pending = Some(self.host.request_frame());
        stats
    }

    /// Run the pass for a fired frame callback and schedule the next one.
    ///
    /// Returns `None` without drawing if `request` is not the pending
    /// callback, which covers stale and cancelled requests as well as frames
    /// arriving after unmount.
    pub fn on_frame<S: DrawSurface + ?Sized>(
        &mut self,
        request: FrameRequest,
        surface: Option<&mut S>,
        frame: &OverlayFrame<'_>,
    ) -> Option<FrameStats> {
        if self.pending != Some(request) {
            return None;
        }

        let stats = self.render(surface, frame);
        self.pending = Some(self.host.request_frame());
        Some(stats)
    }

    /// Handle a window resize by matching the surface to the window
    pub fn on_resize<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        if self.is_mounted() {
            surface.resize(self.host.window_size());
        }
    }

    /// Detach from the host: cancel the pending frame and drop the resize listener
    pub fn unmount(&mut self) {
        if let Some(request) = self.pending.take() {
            self.host.cancel_frame(request);
        }
        if let Some(listener) = self.resize_listener.take() {
            self.host.remove_resize_listener(listener);
            tracing::debug!("dimension overlay unmounted");
        }
    }

    fn render<S: DrawSurface + ?Sized>(
        &self,
        surface: Option<&mut S>,
        frame: &OverlayFrame<'_>,
    ) -> FrameStats {
        let mut stats = FrameStats::default();

        let Some(surface) = surface else {
            tracing::trace!("overlay surface not ready, skipping frame");
            return stats;
        };

        surface.clear();
        if !frame.visible {
            return stats;
        }

        let window_size = self.host.window_size();
        for dim in frame.dimensions {
            match project_segment(dim.start, dim.end, frame.camera, window_size) {
                Some((start, end)) => {
                    draw_dimension_line(
                        &mut *surface,
                        start,
                        end,
                        &dim.label,
                        dimension_color(dim.color),
                        &self.style,
                    );
                    stats.drawn += 1;
                }
                None => stats.skipped += 1,
            }
        }

        tracing::trace!(drawn = stats.drawn, skipped = stats.skipped, "overlay frame");
        stats
    }
}

impl<H: OverlayHost> Drop for DimensionOverlay<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
