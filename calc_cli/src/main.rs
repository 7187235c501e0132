//! # Boxcol CLI Application
//!
//! Terminal front end for the box column compression check. Column data
//! comes from flags (defaults match a 6" x 6" x 1/2" A36 box, 3 m tall) or
//! from a JSON input file holding one or many columns.

mod config;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use calc_core::calculations::{
    BoxColumnInput, BoxColumnResult, BoxSection, CapacityOutcome, MemberProperties, SectionOutline,
};
use calc_core::equations::generate_equations_markdown;
use calc_core::{calculate_many, CalcError, CalcResult, SteelGrade};

/// Axial compression capacity of built-up steel box columns (AISC 360 Chapter E).
#[derive(Parser, Debug)]
#[command(name = "calc_cli")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Column label shown in the report
    #[arg(long, default_value = "")]
    label: String,

    /// Outer base b, parallel to the x-axis (in)
    #[arg(long, default_value_t = 6.0)]
    base: f64,

    /// Outer depth d, parallel to the y-axis (in)
    #[arg(long, default_value_t = 6.0)]
    depth: f64,

    /// Wall thickness t (in)
    #[arg(long, default_value_t = 0.5)]
    thickness: f64,

    /// Clear height L (m)
    #[arg(long, default_value_t = 3.0)]
    height: f64,

    /// Effective length factor about x
    #[arg(long, default_value_t = 1.0)]
    kx: f64,

    /// Effective length factor about y
    #[arg(long, default_value_t = 1.0)]
    ky: f64,

    /// Steel grade: "ASTM A36", "ASTM A572_Gr50" or "ASTM A500_GrB_46"
    #[arg(long, default_value = "ASTM A36")]
    material: String,

    /// Modulus of elasticity E (ksi)
    #[arg(long, default_value_t = 29000.0)]
    modulus: f64,

    /// Resistance factor φ
    #[arg(long, default_value_t = 0.90)]
    phi: f64,

    /// JSON file with one column or an array of columns (overrides the column flags)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the step-by-step derivation (text format only)
    #[arg(long)]
    steps: bool,

    /// Print the equation reference and exit
    #[arg(long)]
    equations: bool,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// One column's JSON report
#[derive(Serialize)]
struct ColumnReport<'a> {
    input: &'a BoxColumnInput,
    outline: SectionOutline,
    outcome: &'a CapacityOutcome<BoxColumnResult>,
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    input: &'a BoxColumnInput,
    error: &'a CalcError,
}

/// Determines the log level from CLI arguments.
fn get_log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the single column described by the flags.
fn input_from_args(args: &Args) -> CalcResult<BoxColumnInput> {
    let material: SteelGrade = args.material.parse()?;
    let input = BoxColumnInput {
        label: args.label.clone(),
        section: BoxSection::new(args.base, args.depth, args.thickness),
        material,
        member: MemberProperties {
            k_x: args.kx,
            k_y: args.ky,
            clear_height_m: args.height,
            elastic_modulus_ksi: args.modulus,
            phi: args.phi,
        },
    };
    input.validate()?;
    Ok(input)
}

fn print_error(e: &CalcError) {
    eprintln!("Error: {e}");
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{json}");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(get_log_level(args.verbose, args.quiet));

    if args.equations {
        println!("{}", generate_equations_markdown());
        return ExitCode::SUCCESS;
    }

    let inputs = match &args.input {
        Some(path) => match config::load_inputs(path) {
            Ok(inputs) => inputs,
            Err(e) => {
                error!(error = %e, "Failed to load input file");
                eprintln!("Input error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => match input_from_args(&args) {
            Ok(input) => vec![input],
            Err(e) => {
                print_error(&e);
                return ExitCode::FAILURE;
            }
        },
    };

    info!(columns = inputs.len(), "Calculating box columns");
    let results = calculate_many(&inputs);
    let mut failed = false;

    match args.format {
        OutputFormat::Text => {
            for (index, (input, result)) in inputs.iter().zip(&results).enumerate() {
                match result {
                    Ok(outcome) => {
                        println!("{}", report::render_summary(input, outcome));
                        if args.steps {
                            println!();
                            println!("{}", report::render_steps(input, outcome));
                        }
                    }
                    Err(e) => {
                        failed = true;
                        error!(column = index + 1, label = %input.label, code = e.error_code(), "Column failed");
                        eprintln!("Column #{} ('{}'):", index + 1, input.label);
                        print_error(e);
                    }
                }
                println!();
            }
        }
        OutputFormat::Json => {
            let mut reports = Vec::with_capacity(results.len());
            for (input, result) in inputs.iter().zip(&results) {
                let value = match result {
                    Ok(outcome) => serde_json::to_value(ColumnReport {
                        input,
                        outline: input.section.outline(),
                        outcome,
                    }),
                    Err(e) => {
                        failed = true;
                        serde_json::to_value(ErrorReport { input, error: e })
                    }
                };
                match value {
                    Ok(value) => reports.push(value),
                    Err(e) => {
                        error!(error = %e, "Failed to serialize report");
                        return ExitCode::FAILURE;
                    }
                }
            }
            let rendered = if reports.len() == 1 {
                serde_json::to_string_pretty(&reports[0])
            } else {
                serde_json::to_string_pretty(&reports)
            };
            match rendered {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    error!(error = %e, "Failed to serialize report");
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_input_form() {
        let args = Args::parse_from(["calc_cli"]);
        let input = input_from_args(&args).unwrap();
        assert_eq!(input.section, BoxSection::new(6.0, 6.0, 0.5));
        assert_eq!(input.material, SteelGrade::A36);
        assert!((input.member.clear_height_m - 3.0).abs() < 1e-12);
        assert!((input.member.phi - 0.90).abs() < 1e-12);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_unknown_material_flag() {
        let args = Args::parse_from(["calc_cli", "--material", "ASTM A992"]);
        let err = input_from_args(&args).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_MATERIAL");
    }

    #[test]
    fn test_invalid_geometry_flag() {
        let args = Args::parse_from(["calc_cli", "--thickness", "3.5"]);
        let err = input_from_args(&args).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_log_level() {
        assert_eq!(get_log_level(0, false), Level::WARN);
        assert_eq!(get_log_level(2, false), Level::DEBUG);
        assert_eq!(get_log_level(5, false), Level::TRACE);
        assert_eq!(get_log_level(3, true), Level::ERROR);
    }

    #[test]
    fn test_json_report_shape() {
        let args = Args::parse_from(["calc_cli", "--base", "4", "--depth", "10"]);
        let input = input_from_args(&args).unwrap();
        let outcome = calc_core::calculate(&input).unwrap();
        let value = serde_json::to_value(ColumnReport {
            input: &input,
            outline: input.section.outline(),
            outcome: &outcome,
        })
        .unwrap();

        assert_eq!(value["outcome"]["status"], "applicable");
        assert_eq!(value["input"]["material"], "ASTM A36");
        assert_eq!(value["outline"]["outer"][2][0], 4.0);
        assert_eq!(value["outcome"]["result"]["governing_axis"], "y");
    }
}
