use serde::{Deserialize, Serialize};

/// A joint motor with its gearbox and sizing margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Motor {
    /// Motor body mass in kg.
    pub mass: f64,
    /// Length of the motor body along the chain, in metres. The body's centre
    /// of mass sits half of this beyond the pivot.
    pub body_length: f64,
    /// Distance from the arm base to this motor's joint axis, in metres.
    pub pivot_position: f64,
    /// Output shaft speed in rpm.
    pub rpm: f64,
    /// Reduction between motor-side and load-side torque.
    pub gear_ratio: f64,
    /// Design margin applied to every torque and power figure of this joint.
    pub safety_factor: f64,
}

impl Motor {
    pub fn new(
        mass: f64,
        body_length: f64,
        pivot_position: f64,
        rpm: f64,
        gear_ratio: f64,
        safety_factor: f64,
    ) -> Self {
        Self {
            mass,
            body_length,
            pivot_position,
            rpm,
            gear_ratio,
            safety_factor,
        }
    }

    /// Position of the body's centre of mass measured from the arm base.
    pub fn center_of_mass(&self) -> f64 {
        self.pivot_position + self.body_length / 2.0
    }
}
