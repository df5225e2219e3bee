//! Interactive search session.

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use finder_client::{Outcome, SearchApi};
use finder_core::form::SUBMIT_LABEL_BUSY;
use finder_core::{FilterForm, SearchFilters, SearchState};
use finder_view::present;

use super::InteractiveArgs;
use crate::backend::{self, Orchestrator};
use crate::context::Context;

/// Menu entries, offered only when they apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    NewSearch,
    NextPage,
    PreviousPage,
    JumpToPage,
    RepeatRecent,
    Quit,
}

impl Action {
    fn label(self) -> &'static str {
        match self {
            Action::NewSearch => "New search",
            Action::NextPage => "Next page",
            Action::PreviousPage => "Previous page",
            Action::JumpToPage => "Go to page...",
            Action::RepeatRecent => "Repeat a recent search",
            Action::Quit => "Quit",
        }
    }
}

fn available_actions(state: &SearchState) -> Vec<Action> {
    let mut actions = vec![Action::NewSearch];
    if state.has_searched() {
        let page = state.current_page();
        let total = state.total_pages();
        if page < total {
            actions.push(Action::NextPage);
        }
        if page > 1 {
            actions.push(Action::PreviousPage);
        }
        if total > 1 {
            actions.push(Action::JumpToPage);
        }
    }
    if !state.recent_searches().is_empty() {
        actions.push(Action::RepeatRecent);
    }
    actions.push(Action::Quit);
    actions
}

/// Run the interactive command.
pub async fn run(args: InteractiveArgs, ctx: &Context) -> Result<()> {
    let orch = backend::orchestrator(&ctx.config, args.filters.mock)?;
    let theme = ColorfulTheme::default();
    let mut form = FilterForm::with_values("", args.filters.resolve(ctx.config.search.filters()));

    ctx.output.header("Product Search");
    ctx.output.debug(&format!("backend: {}", orch.api().name()));

    loop {
        let state = orch.snapshot();
        let actions = available_actions(&state);
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();

        let choice = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        let outcome = match actions[choice] {
            Action::NewSearch => {
                prompt_form(&theme, &mut form)?;
                submit(&orch, &mut form, ctx).await
            }
            Action::NextPage => go_to(&orch, state.current_page() + 1, ctx).await,
            Action::PreviousPage => go_to(&orch, state.current_page() - 1, ctx).await,
            Action::JumpToPage => {
                let total = state.total_pages();
                let page: u32 = Input::with_theme(&theme)
                    .with_prompt(format!("Page (1-{})", total))
                    .default(state.current_page())
                    .validate_with(move |p: &u32| {
                        if (1..=total).contains(p) {
                            Ok(())
                        } else {
                            Err(format!("Enter a page between 1 and {}", total))
                        }
                    })
                    .interact_text()?;
                go_to(&orch, page, ctx).await
            }
            Action::RepeatRecent => {
                let keywords: Vec<String> =
                    state.recent_searches().iter().map(str::to_string).collect();
                let picked = Select::with_theme(&theme)
                    .with_prompt("Recent searches")
                    .items(&keywords)
                    .default(0)
                    .interact()?;
                form.keyword = keywords[picked].clone();
                submit(&orch, &mut form, ctx).await
            }
            Action::Quit => return Ok(()),
        };

        if let Some(outcome) = outcome {
            show(&orch.snapshot(), outcome, ctx);
        }
    }
}

fn prompt_form(theme: &ColorfulTheme, form: &mut FilterForm) -> Result<()> {
    form.keyword = Input::with_theme(theme)
        .with_prompt("Keyword")
        .with_initial_text(form.keyword.clone())
        .allow_empty(true)
        .interact_text()?;

    let defaults = form.filters;
    form.filters = SearchFilters {
        min_price: Input::with_theme(theme)
            .with_prompt("Minimum price")
            .default(defaults.min_price)
            .interact_text()?,
        max_price: Input::with_theme(theme)
            .with_prompt("Maximum price")
            .default(defaults.max_price)
            .interact_text()?,
        min_rating: Input::with_theme(theme)
            .with_prompt("Minimum rating (0-5)")
            .default(defaults.min_rating)
            .interact_text()?,
        is_prime: Confirm::with_theme(theme)
            .with_prompt("Prime only?")
            .default(defaults.is_prime)
            .interact()?,
    };

    Ok(())
}

/// Submit the form. Validation problems are shown and the session goes on.
async fn submit(orch: &Orchestrator, form: &mut FilterForm, ctx: &Context) -> Option<Outcome> {
    let spinner = ctx.output.spinner(SUBMIT_LABEL_BUSY);
    let submitted = orch.submit(form).await;
    spinner.finish_and_clear();

    match submitted {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            ctx.output.warn(&e.to_string());
            None
        }
    }
}

async fn go_to(orch: &Orchestrator, page: u32, ctx: &Context) -> Option<Outcome> {
    let spinner = ctx.output.spinner(&format!("Loading page {}...", page));
    let outcome = orch.change_page(page).await;
    spinner.finish_and_clear();
    Some(outcome)
}

fn show(state: &SearchState, outcome: Outcome, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(state);
        return;
    }

    if let Some(error) = state.error() {
        ctx.output.error(error);
    }
    if outcome == Outcome::Ignored {
        ctx.output.warn("Nothing to load for that page.");
        return;
    }

    ctx.output.results(&present(state));
    ctx.output.recent_searches(state.recent_searches());
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_core::SearchResponse;

    fn state_with(count: u64) -> SearchState {
        let mut state = SearchState::new();
        state.begin_search("mouse");
        state.complete_search(SearchResponse {
            count,
            next: None,
            previous: None,
            results: Vec::new(),
        });
        state
    }

    #[test]
    fn test_fresh_session_offers_search_and_quit() {
        assert_eq!(
            available_actions(&SearchState::new()),
            vec![Action::NewSearch, Action::Quit]
        );
    }

    #[test]
    fn test_paging_actions_follow_position() {
        let mut state = state_with(30);
        assert_eq!(
            available_actions(&state),
            vec![Action::NewSearch, Action::NextPage, Action::JumpToPage, Action::Quit]
        );

        state.begin_page();
        state.complete_page(
            3,
            SearchResponse {
                count: 30,
                next: None,
                previous: None,
                results: Vec::new(),
            },
        );
        assert_eq!(
            available_actions(&state),
            vec![Action::NewSearch, Action::PreviousPage, Action::JumpToPage, Action::Quit]
        );
    }

    #[test]
    fn test_recent_searches_enable_repeat() {
        let mut state = state_with(1);
        let mut recent = finder_core::RecentSearchList::new();
        recent.record("mouse", 10);
        state.set_recent_searches(recent);
        assert!(available_actions(&state).contains(&Action::RepeatRecent));
    }
}
