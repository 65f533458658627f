use super::models::link::Link;
use super::models::motor::Motor;

/// Standard gravity in m/s².
pub const GRAVITY: f64 = 9.80665;
/// Divisor of the torque-rpm power relation `P[kW] = T[N·m] · n[rpm] / 9550`.
pub const POWER_CONVERSION: f64 = 9550.0;
const WATTS_PER_KILOWATT: f64 = 1000.0;

#[inline]
pub fn weight(mass: f64) -> f64 {
    GRAVITY * mass
}

#[inline]
pub fn link_weight(link: &Link, density: f64) -> f64 {
    weight(link.mass(density))
}

#[inline]
pub fn motor_weight(motor: &Motor) -> f64 {
    weight(motor.mass)
}

/// Distances from the base to the far end of each link.
pub fn joint_positions(links: &[Link]) -> Vec<f64> {
    links
        .iter()
        .scan(0.0, |reach, link| {
            *reach += link.length;
            Some(*reach)
        })
        .collect()
}

/// Load-side torque divided down through the gearbox. A zero ratio yields zero.
#[inline]
pub fn motor_side_torque(torque: f64, gear_ratio: f64) -> f64 {
    if gear_ratio != 0.0 {
        torque / gear_ratio
    } else {
        0.0
    }
}

/// Shaft power in W for a torque in N·m at the given speed. Zero rpm yields zero.
#[inline]
pub fn shaft_power(torque: f64, rpm: f64) -> f64 {
    if rpm != 0.0 {
        torque * rpm * WATTS_PER_KILOWATT / POWER_CONVERSION
    } else {
        0.0
    }
}
