//! Color palette for the viewer
//!
//! Dark CAD-style viewport colors. Dimension colors come from `ec-core`.

pub mod palette {
    use egui::Color32;

    /// Base viewport background
    pub const BG_BASE: Color32 = Color32::from_rgb(24, 24, 28);
    /// Ground grid lines
    pub const GRID: Color32 = Color32::from_rgb(45, 45, 52);
    /// Part wireframe edges
    pub const WIREFRAME: Color32 = Color32::from_rgb(160, 160, 170);
    /// Seal wireframe edges
    pub const WIREFRAME_SEAL: Color32 = Color32::from_rgb(200, 170, 90);
    /// Secondary text (labels)
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
}
