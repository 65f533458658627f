use armtorque::core::models::JOINT_COUNT;
use armtorque::engine::error::{LinkField, MotorField};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidAssignment(String),

    #[error(
        "Unsupported key '{0}'. Expected 'payload-mass', 'link-density', 'links.<n>.<field>' or 'motors.<n>.<field>'."
    )]
    UnknownKey(String),

    #[error("Unknown field '{field}' in key '{key}'.")]
    UnknownField { key: String, field: String },

    #[error("Index '{index}' in key '{key}' must be a number between 1 and {max}.", max = JOINT_COUNT)]
    InvalidIndex { key: String, index: String },

    #[error("Invalid float value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Target of a `-S KEY=VALUE` override. Indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetKey {
    PayloadMass,
    LinkDensity,
    Link { index: usize, field: LinkField },
    Motor { index: usize, field: MotorField },
}

fn parse_link_field(name: &str) -> Option<LinkField> {
    match name {
        "length" => Some(LinkField::Length),
        "radius" => Some(LinkField::Radius),
        _ => None,
    }
}

fn parse_motor_field(name: &str) -> Option<MotorField> {
    match name {
        "mass" => Some(MotorField::Mass),
        "body-length" => Some(MotorField::BodyLength),
        "pivot-position" => Some(MotorField::PivotPosition),
        "rpm" => Some(MotorField::Rpm),
        "gear-ratio" => Some(MotorField::GearRatio),
        "safety-factor" => Some(MotorField::SafetyFactor),
        _ => None,
    }
}

fn parse_index(key: &str, index: &str) -> Result<usize, ParseError> {
    match index.parse::<usize>() {
        Ok(n) if (1..=JOINT_COUNT).contains(&n) => Ok(n - 1),
        _ => Err(ParseError::InvalidIndex {
            key: key.to_string(),
            index: index.to_string(),
        }),
    }
}

pub fn parse_set_key(key: &str) -> Result<SetKey, ParseError> {
    let parts: Vec<&str> = key.split('.').collect();
    match parts.as_slice() {
        ["payload-mass"] => Ok(SetKey::PayloadMass),
        ["link-density"] => Ok(SetKey::LinkDensity),
        ["links", index, field] => {
            let index = parse_index(key, index)?;
            let field = parse_link_field(field).ok_or_else(|| ParseError::UnknownField {
                key: key.to_string(),
                field: field.to_string(),
            })?;
            Ok(SetKey::Link { index, field })
        }
        ["motors", index, field] => {
            let index = parse_index(key, index)?;
            let field = parse_motor_field(field).ok_or_else(|| ParseError::UnknownField {
                key: key.to_string(),
                field: field.to_string(),
            })?;
            Ok(SetKey::Motor { index, field })
        }
        _ => Err(ParseError::UnknownKey(key.to_string())),
    }
}

pub fn parse_assignment(kv_pair: &str) -> Result<(SetKey, f64), ParseError> {
    let (key, value) = kv_pair
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidAssignment(kv_pair.to_string()))?;
    let key = key.trim();
    let value = value.trim();

    let set_key = parse_set_key(key)?;
    let value = value.parse::<f64>().map_err(|_| ParseError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })?;
    Ok((set_key, value))
}
