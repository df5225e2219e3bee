//! HTML rendering of the search page.

use finder_core::{FilterForm, RecentSearchList, SearchState};

use crate::view::{present, PageControls, ProductCard, ResultsView};

/// Render the full search page for the current form and state.
pub fn render_page(form: &FilterForm, state: &SearchState) -> String {
    let title = match state.keyword() {
        Some(keyword) if state.has_searched() => format!("{} - Product Search", html_escape(keyword)),
        _ => "Product Search".to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{}</title>
    <style>{}</style>
</head>
<body>
<header class="site-header">
    <h1>Product Search</h1>
</header>
<main>
{}
{}
{}
{}
</main>
</body>
</html>"#,
        title,
        PAGE_STYLES,
        render_form(form),
        render_error_banner(state.error(), form),
        render_recent_searches(state.recent_searches()),
        render_results(&present(state)),
    )
}

/// Render the search form. Every control is disabled while the form is.
pub fn render_form(form: &FilterForm) -> String {
    let disabled = if form.is_disabled() { " disabled" } else { "" };
    let checked = if form.filters.is_prime { " checked" } else { "" };

    format!(
        r#"<form action="/search" method="GET" class="search-form" data-section="form">
    <input type="text" name="keyword" value="{keyword}" placeholder="Search for products..." aria-label="Search" required{disabled}>
    <fieldset class="filters">
        <label>Price Range
            <input type="number" name="minPrice" value="{min_price}" placeholder="Min"{disabled}>
            <input type="number" name="maxPrice" value="{max_price}" placeholder="Max"{disabled}>
        </label>
        <label>Minimum Rating
            <input type="number" name="minRating" value="{min_rating}" min="0" max="5" step="0.1"{disabled}>
        </label>
        <label class="prime-toggle">
            <input type="checkbox" name="isPrime" value="true"{checked}{disabled}>
            Prime Eligible Only
        </label>
    </fieldset>
    <button type="submit"{disabled}>{label}</button>
</form>"#,
        keyword = html_escape(&form.keyword),
        min_price = form.filters.min_price,
        max_price = form.filters.max_price,
        min_rating = form.filters.min_rating,
        checked = checked,
        disabled = disabled,
        label = form.submit_label(),
    )
}

/// Render the error banner: a request error from the state, else the form's
/// own validation error, else nothing.
pub fn render_error_banner(request_error: Option<&str>, form: &FilterForm) -> String {
    let message = match (request_error, form.error()) {
        (Some(message), _) => message.to_string(),
        (None, Some(e)) => e.to_string(),
        (None, None) => return String::new(),
    };

    format!(
        r#"<div class="error-banner" role="alert" data-section="error">{}</div>"#,
        html_escape(&message)
    )
}

/// Render recent searches as quick-repeat links. Empty list renders nothing.
pub fn render_recent_searches(recent: &RecentSearchList) -> String {
    if recent.is_empty() {
        return String::new();
    }

    let items: String = recent
        .iter()
        .map(|keyword| {
            format!(
                r#"<li><a href="/search?keyword={}">{}</a></li>"#,
                urlencoding_encode(keyword),
                html_escape(keyword)
            )
        })
        .collect();

    format!(
        r#"<section class="recent-searches" data-section="recent">
    <h2>Recent Searches</h2>
    <ul>{}</ul>
</section>"#,
        items
    )
}

/// Render the results area.
pub fn render_results(view: &ResultsView) -> String {
    match view {
        ResultsView::Hidden => String::new(),
        ResultsView::Loading => {
            r#"<section class="search-results loading" data-section="results">
    <div class="spinner" role="progressbar" aria-label="Loading results"></div>
</section>"#
                .to_string()
        }
        ResultsView::Empty { message } => format!(
            r#"<section class="search-results empty" data-section="results">
    <p class="empty-state">{}</p>
</section>"#,
            html_escape(message)
        ),
        ResultsView::Grid { cards, pagination } => {
            let cards_html: String = cards.iter().map(render_product_card).collect();
            let pagination_html = pagination.as_ref().map(render_pagination).unwrap_or_default();

            format!(
                r#"<section class="search-results" data-section="results">
    <div class="product-grid">
        {}
    </div>
    {}
</section>"#,
                cards_html, pagination_html
            )
        }
    }
}

fn render_product_card(card: &ProductCard) -> String {
    let prime = if card.is_prime {
        r#"<span class="prime-badge">Prime</span>"#
    } else {
        ""
    };

    format!(
        r#"<article class="product-card" data-product-id="{}">
    <img src="{}" alt="{}" loading="lazy">
    <div class="product-info">
        <h3 class="product-title">{}</h3>
        <div class="product-meta">
            <span class="product-price">{}</span>
            {}
        </div>
        <div class="product-rating"><span class="star">★</span> {}</div>
        <a href="{}" class="view-product" target="_blank" rel="noopener noreferrer">View Product</a>
    </div>
</article>"#,
        html_escape(&card.id),
        html_escape(&card.image_url),
        html_escape(&card.title),
        html_escape(&card.title),
        card.price,
        prime,
        card.rating,
        html_escape(&card.product_url),
    )
}

fn render_pagination(controls: &PageControls) -> String {
    let pages_html: String = controls
        .pages
        .iter()
        .map(|&p| {
            if controls.is_active(p) {
                format!(
                    r#"<span class="pagination-page current" aria-current="page">{}</span>"#,
                    p
                )
            } else {
                format!(r#"<a href="?page={}" class="pagination-page">{}</a>"#, p, p)
            }
        })
        .collect();

    let prev_link = match controls.prev {
        Some(p) => format!(
            r#"<a href="?page={}" class="pagination-prev" aria-label="Previous page">&larr; Prev</a>"#,
            p
        ),
        None => r#"<span class="pagination-prev disabled">&larr; Prev</span>"#.to_string(),
    };

    let next_link = match controls.next {
        Some(p) => format!(
            r#"<a href="?page={}" class="pagination-next" aria-label="Next page">Next &rarr;</a>"#,
            p
        ),
        None => r#"<span class="pagination-next disabled">Next &rarr;</span>"#.to_string(),
    };

    format!(
        r#"<nav class="pagination" aria-label="Search results pagination">
    {}
    <div class="pagination-pages">
        {}
    </div>
    {}
</nav>"#,
        prev_link, pages_html, next_link
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn urlencoding_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

const PAGE_STYLES: &str = r#"
:root { --primary: #3b82f6; --bg: #f9fafb; --card-bg: #ffffff; --text: #111827; --muted: #6b7280; --error: #ef4444; }
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: var(--bg); color: var(--text); }
.site-header { background: var(--card-bg); padding: 1.5rem 2rem; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
main { max-width: 1280px; margin: 0 auto; padding: 2rem; display: grid; gap: 2rem; }
.search-form { max-width: 42rem; display: grid; gap: 1rem; }
.search-form input[type=text], .search-form input[type=number] { width: 100%; padding: 0.5rem 0.75rem; border: 1px solid #d1d5db; border-radius: 0.5rem; }
.search-form button { background: var(--primary); color: white; padding: 0.5rem 1rem; border: none; border-radius: 0.5rem; cursor: pointer; }
.search-form button:disabled { background: #93c5fd; cursor: default; }
.error-banner { color: var(--error); border: 1px solid var(--error); border-radius: 0.5rem; padding: 0.75rem 1rem; }
.recent-searches ul { display: flex; gap: 0.75rem; list-style: none; }
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.5rem; }
.product-card { background: var(--card-bg); border-radius: 0.5rem; overflow: hidden; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
.product-card img { width: 100%; height: 12rem; object-fit: cover; }
.product-info { padding: 1rem; display: grid; gap: 0.5rem; }
.product-price { font-size: 1.5rem; font-weight: 700; }
.prime-badge { color: var(--primary); margin-left: 0.5rem; }
.star { color: #facc15; }
.view-product { display: block; text-align: center; background: #1f2937; color: white; padding: 0.5rem; border-radius: 0.25rem; text-decoration: none; }
.empty-state { text-align: center; color: var(--muted); padding: 2rem 0; }
.spinner { margin: 3rem auto; width: 3rem; height: 3rem; border-radius: 50%; border-bottom: 2px solid var(--primary); animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.pagination { display: flex; justify-content: center; align-items: center; gap: 1rem; margin-top: 2rem; }
.pagination-page.current { font-weight: 700; color: var(--primary); }
.disabled { color: var(--muted); }
"#;
