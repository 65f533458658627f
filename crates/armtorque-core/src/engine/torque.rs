use crate::core::models::JOINT_COUNT;
use crate::core::models::input::CalculationInput;
use crate::core::models::motor::Motor;
use crate::core::models::result::{MotorResult, TorqueBreakdown};
use crate::core::statics::{
    joint_positions, link_weight, motor_side_torque, motor_weight, shaft_power, weight,
};

/// Solves the static torque at every joint of an already validated input.
///
/// Results are ordered from the end-effector joint (motor 6) down to the base
/// joint (motor 1).
pub(crate) fn solve(input: &CalculationInput) -> [MotorResult; JOINT_COUNT] {
    debug_assert_eq!(input.links.len(), JOINT_COUNT);
    debug_assert_eq!(input.motors.len(), JOINT_COUNT);

    let links = &input.links;
    let motors = &input.motors;

    let reach = joint_positions(links);
    let tip = reach[JOINT_COUNT - 1];
    let payload_weight = weight(input.payload_mass);
    let link_weights: Vec<f64> = links
        .iter()
        .map(|link| link_weight(link, input.link_density))
        .collect();
    let motor_weights: Vec<f64> = motors.iter().map(motor_weight).collect();

    std::array::from_fn(|slot| {
        let joint = JOINT_COUNT - 1 - slot;
        let pivot = motors[joint].pivot_position;

        let breakdown = TorqueBreakdown {
            payload: payload_weight * (tip - pivot),
            links: (joint..JOINT_COUNT)
                .map(|k| link_weights[k] * (reach[k] - pivot - links[k].length / 2.0))
                .sum(),
            motors: (joint + 1..JOINT_COUNT)
                .map(|k| motor_weights[k] * (motors[k].center_of_mass() - pivot))
                .sum(),
        };

        joint_result(joint, &motors[joint], breakdown)
    })
}

fn joint_result(joint: usize, motor: &Motor, breakdown: TorqueBreakdown) -> MotorResult {
    let sf = motor.safety_factor;
    let torque_total = breakdown.total();
    let torque_before_gearing = motor_side_torque(torque_total, motor.gear_ratio);
    let power = shaft_power(torque_before_gearing, motor.rpm);

    MotorResult {
        motor_number: joint + 1,
        torque_total,
        torque_with_safety_factor: sf * torque_total,
        torque_before_gearing,
        torque_before_gearing_with_safety_factor: sf * torque_before_gearing,
        power,
        power_with_safety_factor: sf * power,
        breakdown,
    }
}
