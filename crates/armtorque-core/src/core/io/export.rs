use crate::core::models::result::MotorResult;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct ResultRow {
    position: usize,
    motor: usize,
    torque_total: f64,
    torque_with_safety_factor: f64,
    torque_before_gearing: f64,
    torque_before_gearing_with_safety_factor: f64,
    power: f64,
    power_with_safety_factor: f64,
}

impl ResultRow {
    fn new(position: usize, result: &MotorResult) -> Self {
        Self {
            position,
            motor: result.motor_number,
            torque_total: result.torque_total,
            torque_with_safety_factor: result.torque_with_safety_factor,
            torque_before_gearing: result.torque_before_gearing,
            torque_before_gearing_with_safety_factor: result
                .torque_before_gearing_with_safety_factor,
            power: result.power,
            power_with_safety_factor: result.power_with_safety_factor,
        }
    }
}

/// Writes one CSV row per result, numbered by position in `results`.
pub fn write_csv<W: Write>(results: &[MotorResult], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (i, result) in results.iter().enumerate() {
        csv_writer.serialize(ResultRow::new(i + 1, result))?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_csv_to_path(results: &[MotorResult], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|e| ExportError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    write_csv(results, BufWriter::new(file))
}
