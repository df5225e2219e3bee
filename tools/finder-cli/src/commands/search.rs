//! One-shot search.

use anyhow::{bail, Result};
use finder_client::Outcome;
use finder_core::form::SUBMIT_LABEL_BUSY;
use finder_core::FilterForm;
use finder_view::{present, render_page};

use super::{Format, SearchArgs};
use crate::backend;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let filters = args.filters.resolve(ctx.config.search.filters());
    let orch = backend::orchestrator(&ctx.config, args.filters.mock)?;
    let mut form = FilterForm::with_values(args.keyword, filters);

    let spinner = ctx.output.spinner(SUBMIT_LABEL_BUSY);
    let submitted = orch.submit(&mut form).await;
    spinner.finish_and_clear();
    submitted?;

    if args.page > 1 {
        let spinner = ctx.output.spinner(&format!("Loading page {}...", args.page));
        let outcome = orch.change_page(args.page).await;
        spinner.finish_and_clear();

        if outcome == Outcome::Ignored {
            let state = orch.snapshot();
            bail!(
                "Page {} is out of range ({} page(s) available)",
                args.page,
                state.total_pages()
            );
        }
    }

    let state = orch.snapshot();
    let format = if ctx.output.is_json() {
        Format::Json
    } else {
        args.format
    };

    match format {
        Format::Json => ctx.output.json(&state),
        Format::Html => println!("{}", render_page(&form, &state)),
        Format::Text => {
            if let Some(keyword) = state.keyword() {
                ctx.output.header(&format!("Results for \"{}\"", keyword));
            }
            ctx.output.kv("matches", &state.total_count().to_string());
            ctx.output.results(&present(&state));
            ctx.output.recent_searches(state.recent_searches());
        }
    }

    if let Some(error) = state.error() {
        bail!("{}", error);
    }

    Ok(())
}
