use super::error::{LinkField, MotorField, ValidationError};
use crate::core::models::JOINT_COUNT;
use crate::core::models::input::CalculationInput;

const MIN_SAFETY_FACTOR: f64 = 1.0;

// NaN and infinities fail every bound.
#[inline]
fn is_at_least(value: f64, bound: f64) -> bool {
    value.is_finite() && value >= bound
}

#[inline]
fn is_non_negative(value: f64) -> bool {
    is_at_least(value, 0.0)
}

#[inline]
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Checks every field of `input`, reporting the first violation found.
///
/// Scalars are checked first, then the sequence lengths, then each link/motor
/// pair from the base outward.
pub fn validate(input: &CalculationInput) -> Result<(), ValidationError> {
    if !is_non_negative(input.payload_mass) {
        return Err(ValidationError::PayloadMass(input.payload_mass));
    }
    if !is_non_negative(input.link_density) {
        return Err(ValidationError::LinkDensity(input.link_density));
    }
    if input.links.len() != JOINT_COUNT {
        return Err(ValidationError::LinkCount {
            expected: JOINT_COUNT,
            actual: input.links.len(),
        });
    }
    if input.motors.len() != JOINT_COUNT {
        return Err(ValidationError::MotorCount {
            expected: JOINT_COUNT,
            actual: input.motors.len(),
        });
    }

    for (i, (link, motor)) in input.links.iter().zip(&input.motors).enumerate() {
        let index = i + 1;
        let link_checks = [
            (LinkField::Length, link.length),
            (LinkField::Radius, link.radius),
        ];
        for (field, value) in link_checks {
            if !is_positive(value) {
                return Err(ValidationError::Link {
                    index,
                    field,
                    value,
                });
            }
        }

        let motor_checks = [
            (MotorField::Mass, motor.mass),
            (MotorField::BodyLength, motor.body_length),
            (MotorField::PivotPosition, motor.pivot_position),
            (MotorField::Rpm, motor.rpm),
            (MotorField::GearRatio, motor.gear_ratio),
        ];
        for (field, value) in motor_checks {
            if !is_non_negative(value) {
                return Err(ValidationError::Motor {
                    index,
                    field,
                    value,
                });
            }
        }
        if !is_at_least(motor.safety_factor, MIN_SAFETY_FACTOR) {
            return Err(ValidationError::Motor {
                index,
                field: MotorField::SafetyFactor,
                value: motor.safety_factor,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::link::Link;

    #[test]
    fn sample_input_is_valid() {
        assert_eq!(validate(&CalculationInput::sample()), Ok(()));
    }

    #[test]
    fn payload_is_checked_before_density() {
        let mut input = CalculationInput::sample();
        input.payload_mass = -1.0;
        input.link_density = -1.0;
        assert_eq!(validate(&input), Err(ValidationError::PayloadMass(-1.0)));
    }

    #[test]
    fn negative_density_is_rejected() {
        let mut input = CalculationInput::sample();
        input.link_density = -0.5;
        assert_eq!(validate(&input), Err(ValidationError::LinkDensity(-0.5)));
    }

    #[test]
    fn scalars_are_checked_before_sequence_lengths() {
        let mut input = CalculationInput::sample();
        input.links.pop();
        input.link_density = -2.0;
        assert_eq!(validate(&input), Err(ValidationError::LinkDensity(-2.0)));
    }

    #[test]
    fn five_links_are_rejected() {
        let mut input = CalculationInput::sample();
        input.links.pop();
        let err = validate(&input).unwrap_err();
        assert_eq!(
            err,
            ValidationError::LinkCount {
                expected: 6,
                actual: 5
            }
        );
        assert!(err.message().contains("6 links"));
    }

    #[test]
    fn seven_motors_are_rejected() {
        let mut input = CalculationInput::sample();
        input.motors.push(input.motors[5]);
        let err = validate(&input).unwrap_err();
        assert!(err.message().contains("6 motors"));
        assert!(err.message().contains("got 7"));
    }

    #[test]
    fn link_count_is_checked_before_motor_count() {
        let mut input = CalculationInput::sample();
        input.links.clear();
        input.motors.clear();
        assert!(matches!(
            validate(&input),
            Err(ValidationError::LinkCount { actual: 0, .. })
        ));
    }

    #[test]
    fn zero_link_length_reports_one_based_index() {
        let mut input = CalculationInput::sample();
        input.links[2] = Link::new(0.0, 0.015);
        let err = validate(&input).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Link {
                index: 3,
                field: LinkField::Length,
                value: 0.0
            }
        );
        assert!(err.message().starts_with("Link 3: length"));
    }

    #[test]
    fn zero_link_radius_is_rejected() {
        let mut input = CalculationInput::sample();
        input.links[5].radius = 0.0;
        assert!(matches!(
            validate(&input),
            Err(ValidationError::Link {
                index: 6,
                field: LinkField::Radius,
                ..
            })
        ));
    }

    #[test]
    fn each_negative_motor_field_is_identified() {
        let cases: [(MotorField, fn(&mut CalculationInput)); 5] = [
            (MotorField::Mass, |i| i.motors[1].mass = -1.0),
            (MotorField::BodyLength, |i| i.motors[1].body_length = -1.0),
            (MotorField::PivotPosition, |i| i.motors[1].pivot_position = -1.0),
            (MotorField::Rpm, |i| i.motors[1].rpm = -1.0),
            (MotorField::GearRatio, |i| i.motors[1].gear_ratio = -1.0),
        ];
        for (expected_field, mutate) in cases {
            let mut input = CalculationInput::sample();
            mutate(&mut input);
            assert_eq!(
                validate(&input),
                Err(ValidationError::Motor {
                    index: 2,
                    field: expected_field,
                    value: -1.0
                })
            );
        }
    }

    #[test]
    fn safety_factor_below_one_names_field_and_motor() {
        let mut input = CalculationInput::sample();
        input.motors[3].safety_factor = 0.9;
        let message = validate(&input).unwrap_err().message();
        assert!(message.contains("safety factor"));
        assert!(message.contains("Motor 4"));
    }

    #[test]
    fn zero_values_are_accepted_where_permitted() {
        let mut input = CalculationInput::sample();
        input.payload_mass = 0.0;
        input.link_density = 0.0;
        for motor in &mut input.motors {
            motor.mass = 0.0;
            motor.body_length = 0.0;
            motor.rpm = 0.0;
            motor.gear_ratio = 0.0;
            motor.safety_factor = 1.0;
        }
        input.motors[0].pivot_position = 0.0;
        assert_eq!(validate(&input), Ok(()));
    }

    #[test]
    fn earlier_joint_is_reported_before_later_joint() {
        let mut input = CalculationInput::sample();
        input.motors[4].safety_factor = 0.5;
        input.motors[1].rpm = -3.0;
        assert!(matches!(
            validate(&input),
            Err(ValidationError::Motor {
                index: 2,
                field: MotorField::Rpm,
                ..
            })
        ));
    }

    #[test]
    fn link_fields_are_checked_before_motor_fields_at_same_index() {
        let mut input = CalculationInput::sample();
        input.motors[0].mass = -1.0;
        input.links[0].radius = -0.01;
        assert!(matches!(
            validate(&input),
            Err(ValidationError::Link {
                index: 1,
                field: LinkField::Radius,
                ..
            })
        ));
    }

    #[test]
    fn infinite_values_fail_validation() {
        let mut input = CalculationInput::sample();
        input.payload_mass = f64::INFINITY;
        input.motors[5].pivot_position = 1.8;
        assert_eq!(
            validate(&input),
            Err(ValidationError::PayloadMass(f64::INFINITY))
        );

        let mut input = CalculationInput::sample();
        input.links[1].length = f64::INFINITY;
        assert!(matches!(
            validate(&input),
            Err(ValidationError::Link {
                index: 2,
                field: LinkField::Length,
                ..
            })
        ));

        let mut input = CalculationInput::sample();
        input.motors[2].safety_factor = f64::INFINITY;
        assert!(matches!(
            validate(&input),
            Err(ValidationError::Motor {
                index: 3,
                field: MotorField::SafetyFactor,
                ..
            })
        ));
    }

    #[test]
    fn nan_fails_validation() {
        let mut input = CalculationInput::sample();
        input.payload_mass = f64::NAN;
        assert!(matches!(validate(&input), Err(ValidationError::PayloadMass(_))));

        let mut input = CalculationInput::sample();
        input.motors[0].safety_factor = f64::NAN;
        assert!(matches!(
            validate(&input),
            Err(ValidationError::Motor {
                field: MotorField::SafetyFactor,
                ..
            })
        ));
    }
}
