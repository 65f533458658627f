use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileLink, FileMotor};
use super::models::AppConfig;
use crate::cli::ComputeArgs;
use crate::error::{CliError, Result};
use crate::utils::parser::{self, SetKey};
use armtorque::core::models::input::CalculationInputBuilder;
use armtorque::core::models::link::Link;
use armtorque::core::models::motor::Motor;
use armtorque::engine::error::{LinkField, MotorField};
use tracing::debug;

pub fn build_config(args: &ComputeArgs) -> Result<AppConfig> {
    let file_config = FileConfig::from_file(&args.input)?;
    merge(file_config, args)
}

fn merge(file_config: FileConfig, args: &ComputeArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let file_config = apply_set_values(file_config, &args.set_values)?;

    let payload_mass = args
        .payload_mass
        .or(file_config.payload_mass)
        .unwrap_or(defaults.payload_mass);
    let link_density = args
        .link_density
        .or(file_config.link_density)
        .unwrap_or(defaults.link_density);

    let links = file_config
        .links
        .iter()
        .enumerate()
        .map(|(i, link)| resolve_link(i + 1, link))
        .collect::<Result<Vec<_>>>()?;
    let motors = file_config
        .motors
        .iter()
        .enumerate()
        .map(|(i, motor)| resolve_motor(i + 1, motor, args.safety_factor, &defaults))
        .collect::<Result<Vec<_>>>()?;
    debug!(
        "Resolved {} link(s) and {} motor(s) from configuration.",
        links.len(),
        motors.len()
    );

    let input = CalculationInputBuilder::new()
        .payload_mass(payload_mass)
        .link_density(link_density)
        .links(links)
        .motors(motors)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        csv_output: args.csv.clone(),
        show_breakdown: args.breakdown,
        input,
    })
}

fn required(value: Option<f64>, key: String) -> Result<f64> {
    value.ok_or_else(|| CliError::Config(format!("`{}` is required.", key)))
}

fn resolve_link(number: usize, link: &FileLink) -> Result<Link> {
    Ok(Link {
        length: required(link.length, format!("links.{}.length", number))?,
        radius: required(link.radius, format!("links.{}.radius", number))?,
    })
}

fn resolve_motor(
    number: usize,
    motor: &FileMotor,
    safety_factor_override: Option<f64>,
    defaults: &DefaultsConfig,
) -> Result<Motor> {
    Ok(Motor {
        mass: required(motor.mass, format!("motors.{}.mass", number))?,
        body_length: motor.body_length.unwrap_or(defaults.body_length),
        pivot_position: required(
            motor.pivot_position,
            format!("motors.{}.pivot-position", number),
        )?,
        rpm: motor.rpm.unwrap_or(defaults.rpm),
        gear_ratio: motor.gear_ratio.unwrap_or(defaults.gear_ratio),
        safety_factor: safety_factor_override
            .or(motor.safety_factor)
            .unwrap_or(defaults.safety_factor),
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_assignment(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
        debug!("Applying override {:?} = {}", key, value);

        match key {
            SetKey::PayloadMass => config.payload_mass = Some(value),
            SetKey::LinkDensity => config.link_density = Some(value),
            SetKey::Link { index, field } => {
                if config.links.len() <= index {
                    config.links.resize_with(index + 1, Default::default);
                }
                let link = &mut config.links[index];
                match field {
                    LinkField::Length => link.length = Some(value),
                    LinkField::Radius => link.radius = Some(value),
                }
            }
            SetKey::Motor { index, field } => {
                if config.motors.len() <= index {
                    config.motors.resize_with(index + 1, Default::default);
                }
                let motor = &mut config.motors[index];
                let slot = match field {
                    MotorField::Mass => &mut motor.mass,
                    MotorField::BodyLength => &mut motor.body_length,
                    MotorField::PivotPosition => &mut motor.pivot_position,
                    MotorField::Rpm => &mut motor.rpm,
                    MotorField::GearRatio => &mut motor.gear_ratio,
                    MotorField::SafetyFactor => &mut motor.safety_factor,
                };
                *slot = Some(value);
            }
        }
    }
    Ok(config)
}
