use crate::cli::TemplateArgs;
use crate::error::{CliError, Result};
use armtorque::core::models::input::CalculationInput;
use tracing::info;

pub fn run(args: TemplateArgs) -> Result<()> {
    let text = CalculationInput::sample()
        .to_toml_string()
        .map_err(|e| CliError::Other(e.into()))?;

    match &args.output {
        Some(path) => {
            if path.exists() && !args.force {
                return Err(CliError::Argument(format!(
                    "'{}' already exists. Use --force to overwrite it.",
                    path.display()
                )));
            }
            std::fs::write(path, text)?;
            info!("Template written to {:?}", path);
            println!("Template written to: {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}
