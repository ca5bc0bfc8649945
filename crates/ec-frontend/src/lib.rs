//! Enclosure Viewer Frontend
//!
//! egui-based viewer for the parametric enclosure with live dimension
//! annotations.

pub mod actions;
pub mod app;
pub mod panels;
pub mod state;
pub mod theme;

// Re-exports for convenience
pub use app::EnclosureViewerApp;
pub use state::{AnnotationTarget, AppAction, AppState, SharedAppState};
