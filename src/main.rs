//! topsis-sort-c - Command-line interface
//!
//! Reads a decision matrix, boundary profiles and weights from headerless CSV
//! files, classifies every alternative and prints the report.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use topsis_sort_c::adapters::CsvDataSource;
use topsis_sort_c::application::{
    ClassificationReport, ClassifyCommand, ClassifyError, ClassifyHandler,
};
use topsis_sort_c::config::{AppConfig, ConfigError, LoggingConfig};
use topsis_sort_c::domain::foundation::DomainError;
use topsis_sort_c::domain::sorting::{AssignmentMode, NormalizationMethod, ReferenceRows};

/// Output format for the report
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Plain-text table
    #[default]
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// TOPSIS-Sort-C classifier
#[derive(Parser)]
#[command(name = "topsis-sort-c")]
#[command(about = "Sort alternatives into ordered classes with TOPSIS-Sort-C", long_about = None)]
#[command(version)]
struct Cli {
    /// Decision matrix (alternatives x criteria)
    #[arg(long)]
    matrix: PathBuf,

    /// Boundary profiles (profiles x criteria); defaults to the central profile
    #[arg(long)]
    profiles: Option<PathBuf>,

    /// Criterion weights, one row or one column
    #[arg(long)]
    weights: PathBuf,

    /// Criterion kinds (benefit, cost)
    #[arg(long)]
    criteria: Option<PathBuf>,

    /// Class labels, one per profile
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Normalization method (max, interval)
    #[arg(long)]
    method: Option<NormalizationMethod>,

    /// Rows used for the ideal solution (alternatives, alternatives+profiles)
    #[arg(long)]
    reference: Option<ReferenceRows>,

    /// Assignment mode (binary, nearest)
    #[arg(long)]
    mode: Option<AssignmentMode>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error("Failed to render report: {0}")]
    Render(String),
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = logging.env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    // logs go to stderr so stdout carries only the report
    if logging.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

fn render(report: &ClassificationReport, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(report.to_text()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).map_err(|e| CliError::Render(e.to_string()))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| CliError::Render(e.to_string()))
        }
    }
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let mut config = AppConfig::load()?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    config.validate().map_err(ConfigError::from)?;
    init_tracing(&config.logging)?;

    // Flags override configuration
    let mut options = config.sorting.to_options();
    if let Some(method) = cli.method {
        options.method = method;
    }
    if let Some(reference) = cli.reference {
        options.reference_rows = reference;
    }
    if let Some(mode) = cli.mode {
        options.mode = mode;
    }

    let mut source = CsvDataSource::new(&cli.matrix, &cli.weights);
    if let Some(path) = &cli.profiles {
        source = source.with_profiles(path);
    }
    if let Some(path) = &cli.criteria {
        source = source.with_criteria(path);
    }
    if let Some(path) = &cli.labels {
        source = source.with_labels(path);
    }

    let handler = ClassifyHandler::new(Arc::new(source));
    let report = handler.handle(ClassifyCommand::new(options)).await?;

    render(&report, cli.output)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(CliError::Classify(e)) => {
            let domain = DomainError::from(e);
            error!(code = %domain.code, "Classification failed");
            eprintln!("error: {}", domain);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
