use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use unece_units::config::GeneratorConfig;
use unece_units::error::GenerateError;
use unece_units::pipeline;

/// Read a UNECE Recommendation 20 spreadsheet and generate a units module.
///
/// UNECE publishes its "Codes for Units of Measurement used in International
/// Trade" as spreadsheets. Each row of the "Annex II & Annex III" sheet becomes
/// a `UnitDescriptor` constant named after the unit, e.g. "metre per second"
/// becomes METRE_PER_SECOND.
#[derive(Parser)]
#[command(name = "units-from-xls")]
#[command(about = "Reads in a .xls file and generates a units module", long_about)]
struct Cli {
    /// The spreadsheet to parse
    xlsfile: PathBuf,

    /// Where to put the generated .rs file
    #[arg(long, default_value_os_t = default_outfile())]
    outfile: PathBuf,

    /// TOML file overriding sheet name, column labels or aliases
    #[arg(long)]
    config: Option<PathBuf>,
}

fn default_outfile() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("generated")
        .join("units.rs")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(_) => {}
        Err(e @ GenerateError::InputNotFound(_)) => {
            eprintln!("{}", e);
            eprintln!("{}", Cli::command().render_help());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<(), GenerateError> {
    let config = match &cli.config {
        Some(path) => GeneratorConfig::load_from_file(path)?,
        None => GeneratorConfig::default(),
    };

    let report = pipeline::generate(&cli.xlsfile, &cli.outfile, &config)?;

    println!("Wrote {} units to {}", report.units, cli.outfile.display());
    if report.duplicates > 0 {
        println!("Skipped {} rows with duplicate identifiers", report.duplicates);
    }

    Ok(())
}
