//! # armtorque Core Library
//!
//! Static joint torque and motor power sizing for six-joint serial robotic arms.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that the arithmetic stays
//! isolated from parsing, export and orchestration concerns.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Link`, `Motor`,
//!   `CalculationInput`, `MotorResult`), the physical constants and lever-arm
//!   helpers in [`core::statics`], and TOML/CSV I/O utilities.
//!
//! - **[`engine`]: The Logic Core.** Fail-fast input validation and the per-joint
//!   static-equilibrium summation.
//!
//! - **[`workflows`]: The Public API.** Ties validation and the solver together
//!   behind a single [`workflows::compute::compute`] call.
//!
//! ## Example
//!
//! ```
//! use armtorque::core::models::input::CalculationInput;
//! use armtorque::workflows::compute::compute;
//!
//! let input = CalculationInput::sample();
//! let results = compute(&input).unwrap();
//! assert_eq!(results.len(), 6);
//! assert_eq!(results[0].motor_number, 6);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

pub use engine::error::ValidationError;
pub use workflows::compute::compute;
