use std::path::PathBuf;

use clap::Parser;
use region_sql_core::{GenerateSummary, GeneratorConfig, generate_with_config, load_config};
use tracing_subscriber::EnvFilter;

/// How the run summary is printed to stdout.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "region-sql", version)]
#[command(about = "Generate Province INSERT statements from a region listing")]
struct Cli {
    /// Region listing to read (default: regions.txt).
    #[arg(long)]
    input: Option<PathBuf>,
    /// SQL script to write (default: inserts.sql).
    #[arg(long)]
    output: Option<PathBuf>,
    /// YAML file providing input/output paths. Explicit flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print a run summary after success. Runs are silent without it.
    #[arg(long, value_enum)]
    summary: Option<SummaryFormat>,
    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let config = resolve_config(&cli)?;
    tracing::debug!(
        input = %config.input.display(),
        output = %config.output.display(),
        "resolved paths"
    );

    let summary = generate_with_config(&config).map_err(|e| e.to_string())?;
    match cli.summary {
        Some(format) => print_summary(&summary, format),
        None => Ok(()),
    }
}

fn resolve_config(cli: &Cli) -> Result<GeneratorConfig, String> {
    let mut config = match &cli.config {
        Some(path) => load_config(path).map_err(|e| e.to_string())?,
        None => GeneratorConfig::default(),
    };
    if let Some(input) = &cli.input {
        config.input = input.clone();
    }
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    Ok(config)
}

fn print_summary(summary: &GenerateSummary, format: SummaryFormat) -> Result<(), String> {
    match format {
        SummaryFormat::Text => {
            println!(
                "Wrote {} INSERT statement(s) to '{}'.",
                summary.statements,
                summary.output.display()
            );
        }
        SummaryFormat::Json => {
            let raw = serde_json::to_string_pretty(summary)
                .map_err(|err| format!("Failed to serialize summary: {err}"))?;
            println!("{raw}");
        }
    }
    Ok(())
}
