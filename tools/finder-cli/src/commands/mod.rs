//! CLI command implementations.

pub mod config;
pub mod interactive;
pub mod recent;
pub mod search;

use clap::{Args, Subcommand, ValueEnum};

/// How the search command prints its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Styled terminal text.
    Text,
    /// A self-contained HTML page.
    Html,
    /// The search state as JSON.
    Json,
}

/// Filter flags shared by the search commands.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Minimum price (defaults to the configured value).
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price (defaults to the configured value).
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Minimum rating, 0 to 5 (defaults to the configured value).
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Only Prime-eligible products.
    #[arg(long)]
    pub prime: bool,

    /// Use the built-in mock catalog instead of the API.
    #[arg(long)]
    pub mock: bool,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Keyword to search for.
    pub keyword: String,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Result page to show.
    #[arg(short, long, default_value = "1")]
    pub page: u32,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: Format,
}

/// Arguments for the interactive command.
#[derive(Args)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for the recent command.
#[derive(Args)]
pub struct RecentArgs {
    /// Use the built-in mock catalog instead of the API.
    #[arg(long)]
    pub mock: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Where to write the file.
        #[arg(default_value = "finder.toml")]
        path: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

impl FilterArgs {
    /// Configured defaults overridden by any flags given.
    pub fn resolve(&self, defaults: finder_core::SearchFilters) -> finder_core::SearchFilters {
        finder_core::SearchFilters {
            min_price: self.min_price.unwrap_or(defaults.min_price),
            max_price: self.max_price.unwrap_or(defaults.max_price),
            min_rating: self.min_rating.unwrap_or(defaults.min_rating),
            is_prime: self.prime || defaults.is_prime,
        }
    }
}
