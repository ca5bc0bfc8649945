//! Scene placement of enclosure parts
//!
//! Parts are laid out side by side along X on the ground plane. In waterproof
//! mode the base sits centered, the lid to its right and the seal gasket to
//! its left; otherwise base and lid straddle the origin with a single gap.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::PART_SPACING;
use crate::params::EnclosureParams;

/// Printable part of the enclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartKind {
    Base,
    Lid,
    Seal,
}

impl PartKind {
    /// All parts in scene order
    pub const ALL: [PartKind; 3] = [PartKind::Base, PartKind::Lid, PartKind::Seal];

    /// Lowercase identifier
    pub fn name(self) -> &'static str {
        match self {
            PartKind::Base => "base",
            PartKind::Lid => "lid",
            PartKind::Seal => "seal",
        }
    }

    /// Parse a part identifier, `None` if unknown
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|part| part.name() == name)
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown part identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown part: {0}")]
pub struct UnknownPart(pub String);

impl FromStr for PartKind {
    type Err = UnknownPart;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownPart(s.to_string()))
    }
}

/// World-space footprint of a part.
///
/// Kept in `f64` like the parameters, so labels see the exact entered values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartPlacement {
    /// Minimum corner of the part's bounding box
    pub anchor: DVec3,
    /// Extent along X
    pub width: f64,
    /// Extent along Y
    pub length: f64,
    /// Extent along Z
    pub height: f64,
}

impl PartPlacement {
    /// Minimum corner
    pub fn min(&self) -> DVec3 {
        self.anchor
    }

    /// Maximum corner
    pub fn max(&self) -> DVec3 {
        self.anchor + DVec3::new(self.width, self.length, self.height)
    }
}

/// Resolve where a part sits in the scene.
///
/// Returns `None` for the seal when the enclosure is not waterproof, since
/// no seal exists then.
pub fn part_placement(params: &EnclosureParams, part: PartKind) -> Option<PartPlacement> {
    let EnclosureParams {
        length,
        width,
        height,
        roof,
        water_proof,
        seal_thickness,
        ..
    } = *params;

    let (x, part_height) = match part {
        PartKind::Base => {
            let x = if water_proof {
                -width / 2.0
            } else {
                -(width + PART_SPACING / 2.0)
            };
            (x, height)
        }
        PartKind::Lid => {
            let x = if water_proof {
                width / 2.0 + PART_SPACING
            } else {
                PART_SPACING / 2.0
            };
            (x, roof)
        }
        PartKind::Seal => {
            if !water_proof {
                return None;
            }
            (-width - width / 2.0 - PART_SPACING, seal_thickness)
        }
    };

    Some(PartPlacement {
        anchor: DVec3::new(x, -length / 2.0, 0.0),
        width,
        length,
        height: part_height,
    })
}

/// Parts currently shown in the scene
pub fn visible_parts(params: &EnclosureParams) -> Vec<PartKind> {
    PartKind::ALL
        .into_iter()
        .filter(|part| match part {
            PartKind::Base => params.show_base,
            PartKind::Lid => params.show_lid,
            PartKind::Seal => params.water_proof,
        })
        .collect()
}
