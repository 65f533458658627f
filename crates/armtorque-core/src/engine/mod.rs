//! # Engine Module
//!
//! The calculation engine: fail-fast validation of a [`CalculationInput`] and
//! the static-equilibrium solver that turns a validated input into per-motor
//! torque and power figures.
//!
//! - **Error Handling** ([`error`]) - The validation error reported for bad inputs
//! - **Validation** ([`validation`]) - Ordered range checks on every input field
//! - **Solver** (`torque`) - Inward summation of payload, link and motor torques per joint
//!
//! [`CalculationInput`]: crate::core::models::input::CalculationInput

pub mod error;
pub mod validation;
pub(crate) mod torque;
