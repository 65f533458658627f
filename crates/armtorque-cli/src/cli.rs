use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "armtorque - Static joint torque and motor power sizing for six-joint serial robotic arms.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute static joint torques and motor power for an arm description.
    Compute(ComputeArgs),
    /// Write a sample arm description in TOML format.
    Template(TemplateArgs),
}

/// Arguments for the `compute` subcommand.
#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Path to the arm description file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Also export the results as a CSV spreadsheet to this path.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    // --- Overrides ---
    /// Override the payload mass (kg) from the input file.
    #[arg(short, long, value_name = "KG")]
    pub payload_mass: Option<f64>,

    /// Override the link material density (kg/m³) from the input file.
    #[arg(short = 'd', long, value_name = "KG_PER_M3")]
    pub link_density: Option<f64>,

    /// Apply this safety factor to every motor, overriding the input file.
    #[arg(long, value_name = "FACTOR")]
    pub safety_factor: Option<f64>,

    /// Set a specific input value, overriding the input file.
    /// Can be used multiple times. Example: -S motors.3.gear-ratio=80
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,

    // --- Presentation ---
    /// Show how payload, links and motor bodies contribute to each torque.
    #[arg(long)]
    pub breakdown: bool,
}

/// Arguments for the `template` subcommand.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Write the template to this path instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it already exists.
    #[arg(long, requires = "output")]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_accepts_overrides_and_repeated_set_values() {
        let cli = Cli::parse_from([
            "armtorque",
            "compute",
            "-i",
            "arm.toml",
            "--payload-mass",
            "7.5",
            "-S",
            "motors.2.rpm=90",
            "-S",
            "link-density=7850",
            "--csv",
            "out.csv",
            "-vv",
        ]);

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Compute(args) => {
                assert_eq!(args.input, PathBuf::from("arm.toml"));
                assert_eq!(args.payload_mass, Some(7.5));
                assert_eq!(args.set_values, vec!["motors.2.rpm=90", "link-density=7850"]);
                assert_eq!(args.csv, Some(PathBuf::from("out.csv")));
                assert!(!args.breakdown);
            }
            _ => panic!("Expected 'compute' subcommand"),
        }
    }

    #[test]
    fn compute_requires_input() {
        assert!(Cli::try_parse_from(["armtorque", "compute"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["armtorque", "template", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn template_force_requires_output() {
        assert!(Cli::try_parse_from(["armtorque", "template", "--force"]).is_err());
        assert!(Cli::try_parse_from(["armtorque", "template", "-o", "arm.toml", "--force"]).is_ok());
    }
}
