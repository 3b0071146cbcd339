//! Contract Model Generator
//!
//! Turns a normalized API contract into per-file SDK models.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use colored::Colorize;
use contractgen_define::Contract;
use contractgen_gen::codegen::{GoTarget, TargetGenerator};
use contractgen_gen::config::GeneratorConfig;
use contractgen_gen::errors::GeneratorError;
use contractgen_gen::output::{generate, write_units};
use contractgen_gen::render::JsonModelRenderer;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// SDK language to generate models for
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Go,
}

impl Target {
    fn generator(self) -> &'static dyn TargetGenerator {
        match self {
            Target::Go => &GoTarget,
        }
    }
}

/// Contract model generator - transforms an API contract into SDK models
#[derive(Parser, Debug)]
#[command(name = "contractgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Normalized contract document (JSON)
    #[arg(short, long)]
    contract: PathBuf,

    /// Generator configuration (TOML); built-in tables are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory for generated models
    #[arg(short, long, default_value = "generated")]
    output: PathBuf,

    /// SDK target language
    #[arg(short, long, value_enum, default_value_t = Target::Go)]
    target: Target,

    /// Report special-case violations as warnings instead of failing
    #[arg(long)]
    lenient: bool,

    /// Print generated models without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,contractgen_gen=info".to_string(),
            2 => "info,contractgen_gen=debug".to_string(),
            _ => "debug,contractgen_gen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn load_contract(path: &Path) -> Result<Contract, GeneratorError> {
    let content = fs::read_to_string(path)
        .map_err(|e| GeneratorError::ParseError(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| GeneratorError::ParseError(format!("{}: {e}", path.display())))
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if cli.lenient {
        config.strict = false;
    }

    let contract = load_contract(&cli.contract)?;
    info!(
        requests = contract.requests.len(),
        types = contract.types.len(),
        "loaded contract"
    );

    let target = cli.target.generator();
    let units = generate(contract, &config, target)?;
    let paths = write_units(&units, &JsonModelRenderer, &cli.output, cli.dry_run)?;

    if !cli.dry_run {
        eprintln!(
            "{} {} {} models to {}",
            "✓".green(),
            paths.len(),
            target.name().bold(),
            cli.output.display()
        );
    }

    Ok(())
}
