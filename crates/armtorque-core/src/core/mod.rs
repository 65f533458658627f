//! # Core Module
//!
//! Fundamental building blocks for static torque sizing of a serial arm.
//!
//! - **Arm Representation** ([`models`]) - Links, motors, the calculation input and per-motor results
//! - **Statics** ([`statics`]) - Gravitational constants, weights, lever arms and shaft power
//! - **File I/O** ([`io`]) - TOML input documents and CSV result export

pub mod io;
pub mod models;
pub mod statics;
