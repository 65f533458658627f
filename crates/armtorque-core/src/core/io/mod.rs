//! # I/O Module
//!
//! Reading and writing the documents that surround a calculation.
//!
//! - **Input Documents** ([`input`]) - TOML descriptions of an arm, loaded into a `CalculationInput`
//! - **Result Export** ([`export`]) - Spreadsheet-friendly CSV tables of motor results

pub mod export;
pub mod input;
