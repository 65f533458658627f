//! High-level entry points combining validation and solving.

pub mod compute;
