use std::path::PathBuf;

use catalog_tools::batch;
use catalog_tools::sizemap::SizeMapConfig;
use catalog_tools::{Result, ToolError};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

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
        Command::MatchPrices(args) => execute_match_prices(args),
        Command::Deactivate(args) => execute_deactivate(args),
    }
}

fn execute_match_prices(args: MatchPricesArgs) -> Result<()> {
    if !args.input.is_dir() {
        return Err(ToolError::MissingInput(args.input));
    }

    let config = match &args.size_map {
        Some(path) => load_size_map(path)?,
        None => SizeMapConfig::default(),
    };

    let report = batch::run_price_match(&args.input, &args.output, &config)?;
    info!(
        vendors = report.vendors.len(),
        total = report.total_items(),
        matched = report.total_matched(),
        removed = report.total_removed(),
        "price matching complete"
    );
    Ok(())
}

fn execute_deactivate(args: DeactivateArgs) -> Result<()> {
    if !args.input.is_dir() {
        return Err(ToolError::MissingInput(args.input));
    }

    let report = batch::run_deactivation(&args.input, &args.output)?;
    info!(
        vendors = report.vendors.len(),
        deactivated = report.total_deactivated(),
        "discontinuation sweep complete"
    );
    Ok(())
}

fn load_size_map(path: &PathBuf) -> Result<SizeMapConfig> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Reconcile vendor price lists against the internal item master."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Propagate vendor prices onto internal item codes.
    MatchPrices(MatchPricesArgs),

    /// Flag internal items whose vendor listing is discontinued.
    Deactivate(DeactivateArgs),
}

#[derive(clap::Args)]
struct MatchPricesArgs {
    /// Directory holding the item-master and vendor price-list files.
    #[arg(long)]
    input: PathBuf,

    /// Directory the update files and summary report are written to.
    #[arg(long)]
    output: PathBuf,

    /// Optional JSON file overriding the built-in size-mapping rules.
    #[arg(long)]
    size_map: Option<PathBuf>,
}

#[derive(clap::Args)]
struct DeactivateArgs {
    /// Directory holding the item-master and vendor catalog files.
    #[arg(long)]
    input: PathBuf,

    /// Directory the deactivation files and summary report are written to.
    #[arg(long)]
    output: PathBuf,
}
