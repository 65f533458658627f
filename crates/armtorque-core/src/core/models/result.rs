/// Static torque about one joint split by the kind of weight producing it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TorqueBreakdown {
    /// Torque from the payload held at the tip, in N·m.
    pub payload: f64,
    /// Torque from every link at or beyond this joint, in N·m.
    pub links: f64,
    /// Torque from every motor body beyond this joint, in N·m.
    pub motors: f64,
}

impl TorqueBreakdown {
    pub fn total(&self) -> f64 {
        self.payload + self.links + self.motors
    }
}

/// Sizing figures for a single motor.
///
/// Torques are in N·m and powers in W. The `*_with_safety_factor` fields are
/// the plain figure multiplied by the motor's safety factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorResult {
    /// Structural motor number, 1 at the base and 6 next to the end effector.
    pub motor_number: usize,
    /// Load-side static torque at the joint.
    pub torque_total: f64,
    pub torque_with_safety_factor: f64,
    /// Motor-side torque, `torque_total / gear_ratio` (zero for a zero ratio).
    pub torque_before_gearing: f64,
    pub torque_before_gearing_with_safety_factor: f64,
    /// Power at the motor-side shaft (zero for zero rpm).
    pub power: f64,
    pub power_with_safety_factor: f64,
    pub breakdown: TorqueBreakdown,
}
