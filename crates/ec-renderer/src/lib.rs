//! Enclosure Viewer Overlay Renderer
//!
//! Projects enclosure dimension lines into screen space and draws them as
//! arrow-terminated, labeled segments on a transparent layer above the 3D view.
//!
//! # Module Structure
//!
//! ```text
//! ec-renderer/
//! ├── camera.rs        # Camera snapshots, viewports, orbit camera
//! ├── projection.rs    # World -> clip -> NDC -> screen mapping
//! ├── surface.rs       # DrawSurface trait (2D drawing context)
//! ├── painter.rs       # Dimension line / arrowhead / label drawing
//! ├── overlay.rs       # Cancellable per-frame overlay loop
//! ├── egui_backend.rs  # egui surface and frame host
//! └── config.rs        # Overlay styling
//! ```

pub mod camera;
pub mod config;
pub mod egui_backend;
pub mod overlay;
pub mod painter;
pub mod projection;
pub mod surface;

// Re-exports for convenience
pub use camera::{CameraSnapshot, OrbitCamera, Viewport};
pub use config::OverlayStyle;
pub use egui_backend::{EguiHost, EguiSurface};
pub use overlay::{
    DimensionOverlay, FrameRequest, FrameStats, ListenerId, OverlayFrame, OverlayHost,
};
pub use painter::{arrowhead, dimension_color, draw_dimension_line};
pub use projection::{project_segment, project_to_screen};
pub use surface::DrawSurface;
