//! Recent search keywords.

use anyhow::Result;
use finder_client::SearchApi;

use super::RecentArgs;
use crate::backend;
use crate::context::Context;

/// Run the recent command.
pub async fn run(args: RecentArgs, ctx: &Context) -> Result<()> {
    let api = backend::build(&ctx.config, args.mock)?;
    let recent = api.recent_searches().await?;

    if ctx.output.is_json() {
        ctx.output.json(&recent);
        return Ok(());
    }

    if recent.is_empty() {
        ctx.output.info("No recent searches.");
        return Ok(());
    }

    ctx.output.recent_searches(&recent);
    Ok(())
}
