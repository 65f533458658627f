//! Data structures describing the arm and the computed per-motor figures.

pub mod input;
pub mod link;
pub mod motor;
pub mod result;

/// Number of joints, links and motors in the modelled arm.
pub const JOINT_COUNT: usize = 6;
