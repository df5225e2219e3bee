//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use finder_client::{HttpConfig, StalePolicy};
use finder_core::SearchFilters;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Which backend answers searches.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Default filter values and response handling.
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API root the search endpoints hang off.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// The remote search API.
    #[default]
    Http,
    /// The built-in mock catalog.
    Mock,
}

/// Backend selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub kind: BackendKind,

    /// Simulated latency for the mock backend, in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_latency_ms() -> u64 {
    1000
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::default(),
            latency_ms: default_latency_ms(),
        }
    }
}

/// Initial filter values and stale-response handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub min_price: f64,

    #[serde(default = "default_max_price")]
    pub max_price: f64,

    #[serde(default)]
    pub min_rating: f64,

    #[serde(default)]
    pub prime_only: bool,

    /// What to do with a response that arrives after a newer request.
    #[serde(default)]
    pub stale_responses: StalePolicy,
}

fn default_max_price() -> f64 {
    SearchFilters::default().max_price
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_price: 0.0,
            max_price: default_max_price(),
            min_rating: 0.0,
            prime_only: false,
            stale_responses: StalePolicy::default(),
        }
    }
}

impl SearchConfig {
    /// The configured defaults as form filters.
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            min_price: self.min_price,
            max_price: self.max_price,
            min_rating: self.min_rating,
            is_prime: self.prime_only,
        }
    }
}

/// Log filter used when `RUST_LOG` is not set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// Generate a default finder.toml config file.
pub fn generate_default_config() -> String {
    r#"# Finder configuration

[api]
base_url = "http://localhost:8000/api"
timeout_secs = 10

[backend]
# "http" talks to the API above, "mock" searches the built-in catalog
kind = "http"
latency_ms = 1000

[search]
min_price = 0.0
max_price = 1000.0
min_rating = 0.0
prime_only = false
# "discard" or "last_resolved_wins"
stale_responses = "discard"

[logging]
filter = "info"
"#
    .to_string()
}
