//! Enclosure core
//!
//! Parameter model, scene part layout and dimension annotation geometry for
//! the parametric enclosure viewer. Nothing in here depends on rendering.

pub mod constants;
pub mod dimensions;
pub mod layout;
pub mod params;

pub use dimensions::{
    Axis, DimensionColor, DimensionLine, calculate_dimensions, calculate_dimensions_for,
    format_length,
};
pub use layout::{PartKind, PartPlacement, UnknownPart, part_placement, visible_parts};
pub use params::{EnclosureParams, ParamsError};
