//! Global constants for ec-core

/// Gap between enclosure parts in the scene layout (mm).
///
/// Shared by the scene layout and the dimension calculator; both must agree
/// for annotations to sit on the rendered parts.
pub const PART_SPACING: f64 = 20.0;

/// Distance between a part footprint and its dimension lines (mm)
pub const DIMENSION_OFFSET: f64 = 15.0;

/// Unit suffix appended to dimension labels
pub const LENGTH_UNIT: &str = "mm";

/// X-axis dimension color (red, sRGB)
pub const AXIS_X_COLOR: [u8; 3] = [0xf8, 0x45, 0x45];

/// Y-axis dimension color (green, sRGB)
pub const AXIS_Y_COLOR: [u8; 3] = [0x4f, 0xef, 0x4f];

/// Z-axis dimension color (blue, sRGB)
pub const AXIS_Z_COLOR: [u8; 3] = [0x4a, 0xa3, 0xf1];
