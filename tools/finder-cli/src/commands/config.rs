//! Configuration management commands.

use std::fs;
use std::path::Path;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, BackendKind, CliConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { path, force } => init_config(&path, force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("");
    ctx.output.info("[api]");
    ctx.output.kv("base_url", &config.api.base_url);
    ctx.output.kv("timeout_secs", &config.api.timeout_secs.to_string());

    ctx.output.info("");
    ctx.output.info("[backend]");
    let kind = match config.backend.kind {
        BackendKind::Http => "http",
        BackendKind::Mock => "mock",
    };
    ctx.output.kv("kind", kind);
    ctx.output.kv("latency_ms", &config.backend.latency_ms.to_string());

    ctx.output.info("");
    ctx.output.info("[search]");
    ctx.output.kv("min_price", &config.search.min_price.to_string());
    ctx.output.kv("max_price", &config.search.max_price.to_string());
    ctx.output.kv("min_rating", &config.search.min_rating.to_string());
    ctx.output.kv("prime_only", &config.search.prime_only.to_string());
    ctx.output
        .kv("stale_responses", config.search.stale_responses.as_str());

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("filter", &config.logging.filter);

    Ok(())
}

fn init_config(path: &str, force: bool, ctx: &Context) -> Result<()> {
    let target = ctx.resolve_path(path);

    if target.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            target.display()
        );
    }

    write_default_config(&target)?;

    ctx.output.success(&format!("Created {}", target.display()));
    Ok(())
}

/// Write the default config, as JSON for a `.json` path and as the commented
/// TOML template otherwise.
fn write_default_config(target: &Path) -> Result<()> {
    let path = target.to_string_lossy();
    if path.ends_with(".json") {
        CliConfig::default().save(&path)
    } else {
        fs::write(target, generate_default_config())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_client::StalePolicy;

    #[test]
    fn test_json_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("finder.json");
        write_default_config(&target).unwrap();

        let written = CliConfig::load(&target.to_string_lossy()).unwrap();
        assert_eq!(written.backend.kind, BackendKind::Http);
        assert_eq!(written.search.max_price, 1000.0);
        assert_eq!(written.search.stale_responses, StalePolicy::Discard);

        let raw = fs::read_to_string(&target).unwrap();
        assert!(raw.contains(r#""stale_responses": "discard""#));
    }

    #[test]
    fn test_toml_init_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("finder.toml");
        write_default_config(&target).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), generate_default_config());
    }
}
