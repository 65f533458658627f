use serde::{Deserialize, Serialize};

/// A solid cylindrical link between two joints.
///
/// Links are ordered outward from the base; link `i` ends at the joint driven
/// by motor `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Link {
    /// Length along the chain, in metres.
    pub length: f64,
    /// Radius of the cylindrical cross-section, in metres.
    pub radius: f64,
}

impl Link {
    pub fn new(length: f64, radius: f64) -> Self {
        Self { length, radius }
    }

    /// Volume of the cylinder in m³.
    pub fn volume(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius * self.length
    }

    /// Mass of the link for a material of the given density (kg/m³).
    pub fn mass(&self, density: f64) -> f64 {
        density * self.volume()
    }
}
