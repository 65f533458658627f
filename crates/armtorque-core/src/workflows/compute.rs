use crate::core::models::JOINT_COUNT;
use crate::core::models::input::CalculationInput;
use crate::core::models::result::MotorResult;
use crate::engine::error::ValidationError;
use crate::engine::{torque, validation};
use tracing::{debug, instrument, trace};

/// Computes the static torque and power requirements of all six motors.
///
/// The input is validated first and the first violated constraint is returned
/// as a [`ValidationError`]; no partial results are produced. On success the
/// results are ordered from the end-effector joint (motor 6) to the base joint
/// (motor 1).
///
/// # Errors
///
/// Returns [`ValidationError`] if any scalar is out of range, if there are not
/// exactly six links and six motors, or if any link or motor field is out of
/// range.
#[instrument(skip_all, name = "compute_torques")]
pub fn compute(input: &CalculationInput) -> Result<[MotorResult; JOINT_COUNT], ValidationError> {
    if let Err(e) = validation::validate(input) {
        debug!("Rejected calculation input: {}", e);
        return Err(e);
    }

    let results = torque::solve(input);
    for result in &results {
        trace!(
            motor = result.motor_number,
            torque = result.torque_total,
            power = result.power,
            "Solved joint"
        );
    }
    debug!("Solved static torques for {} joints.", results.len());

    Ok(results)
}
