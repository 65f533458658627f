use super::link::Link;
use super::motor::Motor;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything needed to size the six joints of the arm.
///
/// `links[i]` and `motors[i]` share the same structural position, index 0
/// being base-most and index 5 end-effector-most. The sequence lengths are not
/// enforced by the type; [`compute`](crate::workflows::compute::compute)
/// rejects anything other than six of each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CalculationInput {
    /// Mass held at the tip of the last link, in kg.
    pub payload_mass: f64,
    /// Density of the link material, in kg/m³.
    pub link_density: f64,
    pub links: Vec<Link>,
    pub motors: Vec<Motor>,
}

impl CalculationInput {
    /// A representative aluminium arm carrying a 5 kg payload.
    pub fn sample() -> Self {
        Self {
            payload_mass: 5.0,
            link_density: 2700.0,
            links: vec![
                Link::new(0.5, 0.02),
                Link::new(0.4, 0.02),
                Link::new(0.3, 0.015),
                Link::new(0.3, 0.015),
                Link::new(0.2, 0.01),
                Link::new(0.1, 0.01),
            ],
            motors: vec![
                Motor::new(2.0, 0.1, 0.0, 100.0, 10.0, 1.5),
                Motor::new(1.5, 0.08, 0.5, 120.0, 8.0, 1.5),
                Motor::new(1.2, 0.07, 0.9, 150.0, 6.0, 1.5),
                Motor::new(1.0, 0.06, 1.2, 180.0, 5.0, 1.5),
                Motor::new(0.8, 0.05, 1.5, 200.0, 4.0, 1.5),
                Motor::new(0.5, 0.04, 1.7, 250.0, 3.0, 1.5),
            ],
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum BuildError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Default)]
pub struct CalculationInputBuilder {
    payload_mass: Option<f64>,
    link_density: Option<f64>,
    links: Option<Vec<Link>>,
    motors: Option<Vec<Motor>>,
}

impl CalculationInputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payload_mass(mut self, mass: f64) -> Self {
        self.payload_mass = Some(mass);
        self
    }
    pub fn link_density(mut self, density: f64) -> Self {
        self.link_density = Some(density);
        self
    }
    pub fn links(mut self, links: Vec<Link>) -> Self {
        self.links = Some(links);
        self
    }
    pub fn link(mut self, link: Link) -> Self {
        self.links.get_or_insert_with(Vec::new).push(link);
        self
    }
    pub fn motors(mut self, motors: Vec<Motor>) -> Self {
        self.motors = Some(motors);
        self
    }
    pub fn motor(mut self, motor: Motor) -> Self {
        self.motors.get_or_insert_with(Vec::new).push(motor);
        self
    }

    pub fn build(self) -> Result<CalculationInput, BuildError> {
        Ok(CalculationInput {
            payload_mass: self
                .payload_mass
                .ok_or(BuildError::MissingParameter("payload_mass"))?,
            link_density: self
                .link_density
                .ok_or(BuildError::MissingParameter("link_density"))?,
            links: self.links.ok_or(BuildError::MissingParameter("links"))?,
            motors: self.motors.ok_or(BuildError::MissingParameter("motors"))?,
        })
    }
}
