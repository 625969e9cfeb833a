use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use catalogen_generate::{CountError, GenerateOptions, GenerationEngine, GenerationError};
use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Count(#[from] CountError),
    #[error("error in writing file, check permissions: {0}")]
    Generation(#[from] GenerationError),
    #[error("failed to read count from stdin: {0}")]
    Stdin(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "catalogen",
    version,
    about = "Generate a synthetic product catalog test file"
)]
struct Cli {
    /// Number of records to generate; prompts on stdin when omitted.
    #[arg(long, value_name = "COUNT")]
    count: Option<String>,
    /// Directory the output file is written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let raw_count = match cli.count {
        Some(value) => value,
        None => prompt_for_count()?,
    };
    let count = catalogen_generate::validate_count(&raw_count)?;

    let options = GenerateOptions {
        out_dir: cli.out_dir,
        seed: None,
    };
    let engine = GenerationEngine::new(options);
    let result = engine.run(count)?;

    println!(
        "Products were generated and have been output to {}",
        result.path.display()
    );
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn prompt_for_count() -> Result<String, io::Error> {
    println!("How many products would you like to generate?");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
