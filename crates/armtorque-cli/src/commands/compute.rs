use crate::cli::ComputeArgs;
use crate::config::{self, AppConfig};
use crate::error::Result;
use crate::report;
use armtorque::core::io::export;
use tracing::{info, warn};

pub fn run(args: ComputeArgs) -> Result<()> {
    info!("Loading arm description from {:?}", &args.input);
    let app_config = config::build_config(&args)?;
    let table = execute(&app_config)?;
    print!("{}", table);
    Ok(())
}

/// Computes and exports the results, returning the rendered table.
pub fn execute(app_config: &AppConfig) -> Result<String> {
    info!(
        "Computing static joint torques for {:?}...",
        app_config.input_path
    );
    let results = armtorque::compute(&app_config.input)?;

    for result in &results {
        if result.torque_total < 0.0 {
            warn!(
                "Motor {} has a negative static torque ({:.3} N·m); check pivot positions.",
                result.motor_number, result.torque_total
            );
        }
    }

    if let Some(csv_path) = &app_config.csv_output {
        info!("Exporting results to {:?}", csv_path);
        export::write_csv_to_path(&results, csv_path)?;
    }

    Ok(report::render_table(&results, app_config.show_breakdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use armtorque::core::models::input::CalculationInput;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn app_config(input: CalculationInput, csv_output: Option<PathBuf>) -> AppConfig {
        AppConfig {
            input_path: PathBuf::from("arm.toml"),
            csv_output,
            show_breakdown: false,
            input,
        }
    }

    #[test]
    fn execute_renders_table_and_writes_csv() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("results.csv");

        let table =
            execute(&app_config(CalculationInput::sample(), Some(csv_path.clone()))).unwrap();

        assert_eq!(table.lines().count(), 8);
        let csv = std::fs::read_to_string(&csv_path).unwrap();
        assert_eq!(csv.lines().count(), 7);
    }

    #[test]
    fn invalid_input_renders_nothing_and_exports_nothing() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("results.csv");
        let mut input = CalculationInput::sample();
        input.motors[2].safety_factor = 0.9;

        let result = execute(&app_config(input, Some(csv_path.clone())));

        match result {
            Err(CliError::Validation(e)) => assert!(e.message().contains("Motor 3")),
            _ => panic!("Expected validation error"),
        }
        assert!(!csv_path.exists());
    }
}
