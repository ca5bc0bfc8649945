//! UI panels

mod params;
mod viewport;

pub use params::ParamsPanel;
pub use viewport::ViewportPanel;
