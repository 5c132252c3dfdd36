use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use yq_continuations::config::Config;
use yq_continuations::continuation::catalog::ROOT;
use yq_continuations::driver::{self, DriverError};
use yq_continuations::engine::YqEngine;
use yq_continuations::tester::ExpressionTester;

/// yq-continuations - suggests yq expression continuations
#[derive(Parser)]
#[command(name = "yq-continuations")]
#[command(version)]
#[command(
    about = "Suggests continuations of a yq expression that produce output for a YAML file",
    long_about = None
)]
struct Cli {
    /// YAML file to query
    yaml_file_path: String,

    /// Base expression to extend
    #[arg(default_value = ROOT)]
    base_expression: String,

    /// Query engine binary (overrides config)
    #[arg(long)]
    engine: Option<String>,

    /// Skip querying the document for keys under the base expression
    #[arg(long)]
    no_keys: bool,

    /// Don't print the base expression's output
    #[arg(long)]
    quiet_base: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up stderr logging. `RUST_LOG` wins over the verbosity flag.
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("Usage: yq-continuations <yaml_file_path> [<base_expression>]");
            return Ok(ExitCode::from(1));
        }
        Err(e) => e.exit(),
    };

    setup_logging(cli.verbose);

    let config = Config::load();
    let mut options = config.run_options();
    if cli.no_keys {
        options.discover_keys = false;
    }
    if cli.quiet_base {
        options.show_base_output = false;
    }

    let engine = YqEngine::new(cli.engine.unwrap_or(config.engine));
    let tester = ExpressionTester::new(engine, &cli.yaml_file_path);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = driver::run(&tester, &cli.base_expression, &options, &mut out);

    match result {
        Ok(_) => {
            out.flush().context("Failed to flush stdout")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(DriverError::InvalidBase { expression, source }) => {
            warn!(%expression, error = %source, "base expression failed");
            writeln!(out, "Base expression is invalid").context("Failed to write to stdout")?;
            Ok(ExitCode::from(1))
        }
        Err(DriverError::Io(e)) => Err(e).context("Failed to write report"),
    }
}
