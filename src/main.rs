use std::fs;
use std::path::{Path, PathBuf};

use catalog_import::{ImportError, Result, import};
use clap::{Parser, Subcommand};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;
    match cli.command {
        Command::Import(args) => execute_import(args),
    }
}

fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .map_err(|error| ImportError::Logging(error.to_string()))
}

fn execute_import(args: ImportArgs) -> Result<()> {
    let products = if is_url(&args.input) {
        import::from_url(&args.input)?
    } else {
        import::from_path(Path::new(&args.input))?
    };

    let json = serde_json::to_string_pretty(&products)?;
    match args.output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Import Shopify-style CSV product exports into a normalized catalog."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a CSV export and emit the catalog as JSON.
    Import(ImportArgs),
}

#[derive(clap::Args)]
struct ImportArgs {
    /// CSV source: a file path or an http(s) URL.
    #[arg(long)]
    input: String,

    /// Output file for the catalog JSON; defaults to stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}
