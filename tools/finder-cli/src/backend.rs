//! Backend selection from configuration.

use std::time::Duration;

use anyhow::Result;
use finder_client::{HttpSearchApi, MockSearchApi, SearchApi, SearchOrchestrator};
use finder_core::MockCatalog;
use tracing::debug;

use crate::config::{BackendKind, CliConfig};

pub type Orchestrator = SearchOrchestrator<Box<dyn SearchApi>>;

/// Build the configured backend. `force_mock` overrides the config.
pub fn build(config: &CliConfig, force_mock: bool) -> Result<Box<dyn SearchApi>> {
    let kind = if force_mock {
        BackendKind::Mock
    } else {
        config.backend.kind
    };

    let api: Box<dyn SearchApi> = match kind {
        BackendKind::Mock => Box::new(
            MockSearchApi::new(MockCatalog::default())
                .with_latency(Duration::from_millis(config.backend.latency_ms)),
        ),
        BackendKind::Http => Box::new(HttpSearchApi::new(config.api.http_config())?),
    };
    debug!(backend = api.name(), "backend ready");

    Ok(api)
}

/// Build an orchestrator over the configured backend.
pub fn orchestrator(config: &CliConfig, force_mock: bool) -> Result<Orchestrator> {
    let api = build(config, force_mock)?;
    Ok(SearchOrchestrator::new(api).with_stale_policy(config.search.stale_responses))
}
