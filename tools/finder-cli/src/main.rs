//! Finder - product search from the command line.
//!
//! Commands:
//! - `finder search` - Run one filtered search and print a results page
//! - `finder interactive` - Search, page and repeat searches in a session
//! - `finder recent` - List recent search keywords
//! - `finder config` - Manage configuration

mod backend;
mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, InteractiveArgs, RecentArgs, SearchArgs};

/// Finder - search the product catalog
#[derive(Parser)]
#[command(name = "finder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog once and print the results
    Search(SearchArgs),

    /// Start an interactive search session
    Interactive(InteractiveArgs),

    /// List recent search keywords
    Recent(RecentArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    init_logging(&ctx.config.logging.filter, cli.verbose);

    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Interactive(args) => commands::interactive::run(args, &ctx).await,
        Commands::Recent(args) => commands::recent::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins over the config filter.
fn init_logging(filter: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
