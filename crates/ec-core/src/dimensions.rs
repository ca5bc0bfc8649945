//! Dimension annotations for enclosure parts
//!
//! Each part gets three axis-aligned measurement lines placed just outside its
//! footprint: length along Y on the left, width along X in front, and height
//! along Z on the right, centered on the part's depth.

use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{AXIS_X_COLOR, AXIS_Y_COLOR, AXIS_Z_COLOR, DIMENSION_OFFSET, LENGTH_UNIT};
use crate::layout::{PartKind, part_placement};
use crate::params::EnclosureParams;

/// Principal axis measured by a dimension line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Display color (CAD convention: X red, Y green, Z blue)
    pub fn color(self) -> DimensionColor {
        match self {
            Axis::X => DimensionColor(AXIS_X_COLOR),
            Axis::Y => DimensionColor(AXIS_Y_COLOR),
            Axis::Z => DimensionColor(AXIS_Z_COLOR),
        }
    }

    /// Lowercase axis name
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// sRGB color of a dimension line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionColor(pub [u8; 3]);

impl DimensionColor {
    /// `#rrggbb` form
    pub fn hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// A labeled 3D measurement line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionLine {
    /// World-space start point (mm)
    pub start: Vec3,
    /// World-space end point (mm)
    pub end: Vec3,
    /// Measured value, e.g. "80.0mm"
    pub label: String,
    pub axis: Axis,
    pub color: DimensionColor,
}

impl DimensionLine {
    fn new(start: DVec3, end: DVec3, value: f64, axis: Axis) -> Self {
        Self {
            start: start.as_vec3(),
            end: end.as_vec3(),
            label: format_length(value),
            axis,
            color: axis.color(),
        }
    }
}

/// Format a length with one decimal and unit suffix.
///
/// Values exactly halfway between two tenths round away from zero, so
/// `80.25` becomes `"80.3mm"`. Everything else rounds to the nearest tenth
/// of the exact binary value.
pub fn format_length(value: f64) -> String {
    // Only odd multiples of 0.25 sit exactly on a tie; scaling by 4 is exact.
    let quarters = value * 4.0;
    let rounded = if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (value * 10.0).round() / 10.0
    } else {
        value
    };
    // -0.0 prints as "0.0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.1}{LENGTH_UNIT}")
}

/// Compute the dimension lines for a part.
///
/// Returns `[length (y), width (x), height (z)]`, or nothing for a seal when
/// the enclosure is not waterproof.
pub fn calculate_dimensions(params: &EnclosureParams, part: PartKind) -> Vec<DimensionLine> {
    let Some(placement) = part_placement(params, part) else {
        return Vec::new();
    };

    let base = placement.anchor;
    let (width, length, height) = (placement.width, placement.length, placement.height);

    let length_start = base - DVec3::X * DIMENSION_OFFSET;
    let width_start = base - DVec3::Y * DIMENSION_OFFSET;
    let height_start = DVec3::new(
        base.x + width + DIMENSION_OFFSET,
        base.y + length / 2.0,
        base.z,
    );

    let dims = vec![
        DimensionLine::new(
            length_start,
            length_start + DVec3::Y * length,
            length,
            Axis::Y,
        ),
        DimensionLine::new(width_start, width_start + DVec3::X * width, width, Axis::X),
        DimensionLine::new(
            height_start,
            height_start + DVec3::Z * height,
            height,
            Axis::Z,
        ),
    ];

    tracing::debug!(part = %part, count = dims.len(), "calculated dimensions");
    dims
}

/// Compute dimension lines for a part given by name.
///
/// Unknown names yield no lines rather than an error.
pub fn calculate_dimensions_for(params: &EnclosureParams, part: &str) -> Vec<DimensionLine> {
    match PartKind::parse(part) {
        Some(part) => calculate_dimensions(params, part),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const OFFSET: f32 = DIMENSION_OFFSET as f32;

    fn params() -> EnclosureParams {
        EnclosureParams::default()
    }

    #[test]
    fn test_base_has_three_dimensions() {
        let dims = calculate_dimensions(&params(), PartKind::Base);
        assert_eq!(dims.len(), 3);
    }

    #[test]
    fn test_base_labels() {
        let dims = calculate_dimensions(&params(), PartKind::Base);
        assert_eq!(dims[0].label, "80.0mm");
        assert_eq!(dims[1].label, "100.0mm");
        assert_eq!(dims[2].label, "30.0mm");
    }

    #[test]
    fn test_axis_order_and_colors() {
        for water_proof in [true, false] {
            for part in [PartKind::Base, PartKind::Lid] {
                let params = EnclosureParams {
                    water_proof,
                    length: 12.5,
                    width: 300.0,
                    ..params()
                };
                let dims = calculate_dimensions(&params, part);
                let axes: Vec<_> = dims.iter().map(|d| d.axis).collect();
                assert_eq!(axes, vec![Axis::Y, Axis::X, Axis::Z]);
                assert_eq!(dims[0].color.hex(), "#4fef4f");
                assert_eq!(dims[1].color.hex(), "#f84545");
                assert_eq!(dims[2].color.hex(), "#4aa3f1");
            }
        }
    }

    #[test]
    fn test_base_waterproof_position() {
        let dims = calculate_dimensions(&params(), PartKind::Base);
        assert_eq!(dims[0].start.x, -100.0 / 2.0 - 15.0);
        assert_eq!(dims[0].start, Vec3::new(-65.0, -40.0, 0.0));
        assert_eq!(dims[0].axis, Axis::Y);
    }

    #[test]
    fn test_base_non_waterproof_position() {
        let params = EnclosureParams {
            water_proof: false,
            ..params()
        };
        let dims = calculate_dimensions(&params, PartKind::Base);
        assert_eq!(dims[0].start.x, -(100.0 + 20.0 / 2.0) - 15.0);
    }

    #[test]
    fn test_lid_uses_roof_thickness() {
        let params = EnclosureParams {
            roof: 5.0,
            length: 75.0,
            width: 95.0,
            ..params()
        };
        let dims = calculate_dimensions(&params, PartKind::Lid);
        assert_eq!(dims[0].label, "75.0mm");
        assert_eq!(dims[1].label, "95.0mm");
        assert_eq!(dims[2].label, "5.0mm");
    }

    #[test]
    fn test_seal_without_waterproof_is_empty() {
        let params = EnclosureParams {
            water_proof: false,
            ..params()
        };
        assert!(calculate_dimensions(&params, PartKind::Seal).is_empty());
    }

    #[test]
    fn test_seal_uses_seal_thickness() {
        let params = EnclosureParams {
            seal_thickness: 3.0,
            ..params()
        };
        let dims = calculate_dimensions(&params, PartKind::Seal);
        assert_eq!(dims.len(), 3);
        assert_eq!(dims[2].label, "3.0mm");
        assert_eq!(dims[0].start.x, -100.0 - 100.0 / 2.0 - 20.0 - 15.0);
    }

    #[test]
    fn test_unknown_part_name_is_empty() {
        assert!(calculate_dimensions_for(&params(), "hinge").is_empty());
        assert_eq!(calculate_dimensions_for(&params(), "lid").len(), 3);
    }

    #[test]
    fn test_label_formatting() {
        assert_eq!(format_length(1.0), "1.0mm");
        assert_eq!(format_length(0.0), "0.0mm");
        assert_eq!(format_length(80.5), "80.5mm");
        assert_eq!(format_length(100.7), "100.7mm");
        assert_eq!(format_length(30.3), "30.3mm");
        assert_eq!(format_length(1000.0), "1000.0mm");
        assert_eq!(format_length(2000.0), "2000.0mm");
    }

    #[test]
    fn test_length_line_offset_left() {
        let dims = calculate_dimensions(&params(), PartKind::Base);
        let length = &dims[0];
        assert_eq!(length.start.x, -50.0 - OFFSET);
        assert_eq!(length.end.x, -50.0 - OFFSET);
        assert_eq!(length.start.y, -40.0);
        assert_eq!(length.end.y, 40.0);
    }

    #[test]
    fn test_width_line_offset_front() {
        let dims = calculate_dimensions(&params(), PartKind::Base);
        let width = &dims[1];
        assert_eq!(width.start.x, -50.0);
        assert_eq!(width.end.x, 50.0);
        assert_eq!(width.start.y, -40.0 - OFFSET);
        assert_eq!(width.end.y, -40.0 - OFFSET);
    }

    #[test]
    fn test_height_line_offset_right_and_centered() {
        let dims = calculate_dimensions(&params(), PartKind::Base);
        let height = &dims[2];
        assert_eq!(height.start.x, -50.0 + 100.0 + OFFSET);
        assert_eq!(height.end.x, -50.0 + 100.0 + OFFSET);
        assert_eq!(height.start.y, 0.0);
        assert_eq!(height.end.y, 0.0);
        assert_eq!(height.start.z, 0.0);
        assert_eq!(height.end.z, 30.0);
    }

    #[test]
    fn test_line_length_matches_label() {
        let params = EnclosureParams {
            length: 80.5,
            width: 100.7,
            height: 30.3,
            ..params()
        };
        let dims = calculate_dimensions(&params, PartKind::Base);
        assert_eq!(dims[0].label, "80.5mm");
        assert_eq!(dims[1].label, "100.7mm");
        assert_eq!(dims[2].label, "30.3mm");
        assert_relative_eq!(dims[0].start.distance(dims[0].end), 80.5, epsilon = 1e-4);
        assert_relative_eq!(dims[1].start.distance(dims[1].end), 100.7, epsilon = 1e-4);
        assert_relative_eq!(dims[2].start.distance(dims[2].end), 30.3, epsilon = 1e-4);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let params = EnclosureParams {
            length: 33.3,
            ..params()
        };
        for part in PartKind::ALL {
            assert_eq!(
                calculate_dimensions(&params, part),
                calculate_dimensions(&params, part)
            );
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let params = params();

        let base = calculate_dimensions(&params, PartKind::Base);
        assert_eq!(base[0].label, "80.0mm");
        assert_eq!(base[0].axis, Axis::Y);
        assert_eq!(base[0].start, Vec3::new(-65.0, -40.0, 0.0));

        let lid = calculate_dimensions(&params, PartKind::Lid);
        assert_eq!(lid[2].label, "2.0mm");

        let seal = calculate_dimensions(&params, PartKind::Seal);
        assert_eq!(seal.len(), 3);
        assert_eq!(seal[2].label, "2.0mm");
        assert_eq!(seal[0].start.x, -185.0);
    }

    #[test]
    fn test_degenerate_dimensions_do_not_panic() {
        let params = EnclosureParams {
            length: 0.0,
            width: -10.0,
            height: 0.0,
            ..params()
        };
        let dims = calculate_dimensions(&params, PartKind::Base);
        assert_eq!(dims.len(), 3);
        assert_eq!(dims[1].label, "-10.0mm");
        assert_eq!(dims[2].start, dims[2].end);
    }

    #[test]
    fn test_label_ties_round_away_from_zero() {
        assert_eq!(format_length(0.25), "0.3mm");
        assert_eq!(format_length(2.25), "2.3mm");
        assert_eq!(format_length(80.25), "80.3mm");
        assert_eq!(format_length(0.75), "0.8mm");
        assert_eq!(format_length(-0.25), "-0.3mm");
        assert_eq!(format_length(0.24), "0.2mm");
        assert_eq!(format_length(0.26), "0.3mm");
    }

    #[test]
    fn test_label_keeps_decimal_inputs_exact() {
        assert_eq!(format_length(30.05), "30.1mm");
        assert_eq!(format_length(1.05), "1.1mm");
        assert_eq!(format_length(-0.0), "0.0mm");
    }

    #[test]
    fn test_tie_values_reach_labels() {
        let params = EnclosureParams {
            length: 80.25,
            width: 2.25,
            height: 30.05,
            ..params()
        };
        let dims = calculate_dimensions(&params, PartKind::Base);
        assert_eq!(dims[0].label, "80.3mm");
        assert_eq!(dims[1].label, "2.3mm");
        assert_eq!(dims[2].label, "30.1mm");
    }

    #[test]
    fn test_tie_values_survive_params_file() {
        let params = EnclosureParams::load_from_bytes(b"(length: 0.25, height: 30.05)").unwrap();
        let dims = calculate_dimensions(&params, PartKind::Base);
        assert_eq!(dims[0].label, "0.3mm");
        assert_eq!(dims[2].label, "30.1mm");
    }
}
