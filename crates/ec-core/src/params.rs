//! Enclosure parameters and their RON file format

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Parametric enclosure settings (all lengths in mm)
///
/// Only `length`, `width`, `height`, `roof`, `water_proof` and
/// `seal_thickness` influence part layout; the rest describe the solid model
/// and are carried along so a saved file describes the whole enclosure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnclosureParams {
    /// Outer size along Y
    pub length: f64,
    /// Outer size along X
    pub width: f64,
    /// Base height along Z
    pub height: f64,
    /// Base floor thickness
    pub floor: f64,
    /// Lid (roof) thickness
    pub roof: f64,
    /// Wall thickness
    pub wall: f64,
    /// Waterproof mode: adds a seal part and widens the layout
    pub water_proof: bool,
    /// Seal gasket thickness
    pub seal_thickness: f64,
    pub insert_thickness: f64,
    pub insert_height: f64,
    pub insert_clearance: f64,
    pub corner_radius: f64,
    /// Show the base part in the scene
    pub show_base: bool,
    /// Show the lid part in the scene
    pub show_lid: bool,
    /// Show dimension annotations
    pub show_dimensions: bool,
}

impl Default for EnclosureParams {
    fn default() -> Self {
        Self {
            length: 80.0,
            width: 100.0,
            height: 30.0,
            floor: 2.0,
            roof: 2.0,
            wall: 1.0,
            water_proof: true,
            seal_thickness: 2.0,
            insert_thickness: 2.0,
            insert_height: 4.0,
            insert_clearance: 0.04,
            corner_radius: 3.0,
            show_base: true,
            show_lid: true,
            show_dimensions: true,
        }
    }
}

impl EnclosureParams {
    /// Whether `other` would move or resize any part in the scene
    pub fn layout_differs(&self, other: &Self) -> bool {
        self.length != other.length
            || self.width != other.width
            || self.height != other.height
            || self.roof != other.roof
            || self.water_proof != other.water_proof
            || self.seal_thickness != other.seal_thickness
    }

    /// Save parameters to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        let content = self.to_bytes()?;
        std::fs::write(path.as_ref(), content).map_err(|e| ParamsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Serialize parameters to RON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ParamsError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ParamsError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load parameters from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ParamsError::Io(e.to_string()))?;
        ron::from_str(&content).map_err(|e| ParamsError::Deserialize(e.to_string()))
    }

    /// Load parameters from RON bytes
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, ParamsError> {
        let content =
            std::str::from_utf8(data).map_err(|e| ParamsError::Deserialize(e.to_string()))?;
        ron::from_str(content).map_err(|e| ParamsError::Deserialize(e.to_string()))
    }
}

/// Parameter file errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParamsError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
