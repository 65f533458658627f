use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkField {
    Length,
    Radius,
}

impl fmt::Display for LinkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkField::Length => write!(f, "length"),
            LinkField::Radius => write!(f, "radius"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorField {
    Mass,
    BodyLength,
    PivotPosition,
    Rpm,
    GearRatio,
    SafetyFactor,
}

impl MotorField {
    fn requirement(&self) -> &'static str {
        match self {
            MotorField::SafetyFactor => "must be at least 1",
            _ => "must be non-negative",
        }
    }
}

impl fmt::Display for MotorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MotorField::Mass => "mass",
            MotorField::BodyLength => "body length",
            MotorField::PivotPosition => "pivot position",
            MotorField::Rpm => "rpm",
            MotorField::GearRatio => "gear ratio",
            MotorField::SafetyFactor => "safety factor",
        };
        write!(f, "{}", name)
    }
}

/// The single failure mode of a torque calculation.
///
/// Link and motor indices are 1-based, matching how the arm is described to
/// users (motor 1 at the base).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Payload mass must be non-negative (got {0})")]
    PayloadMass(f64),

    #[error("Link density must be non-negative (got {0})")]
    LinkDensity(f64),

    #[error("Exactly {expected} links are required (got {actual})")]
    LinkCount { expected: usize, actual: usize },

    #[error("Exactly {expected} motors are required (got {actual})")]
    MotorCount { expected: usize, actual: usize },

    #[error("Link {index}: {field} must be greater than zero (got {value})")]
    Link {
        index: usize,
        field: LinkField,
        value: f64,
    },

    #[error("Motor {index}: {field} {requirement} (got {value})", requirement = .field.requirement())]
    Motor {
        index: usize,
        field: MotorField,
        value: f64,
    },
}

impl ValidationError {
    /// Human-readable description naming the violated constraint.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
