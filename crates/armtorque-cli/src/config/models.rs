use armtorque::core::models::input::CalculationInput;
use std::path::PathBuf;

pub struct AppConfig {
    pub input_path: PathBuf,
    pub csv_output: Option<PathBuf>,
    pub show_breakdown: bool,
    pub input: CalculationInput,
}
