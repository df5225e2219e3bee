//! Output formatting for the CLI.

use console::style;
use finder_core::RecentSearchList;
use finder_view::{PageControls, ProductCard, ResultsView};
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Print the results area.
    pub fn results(&self, view: &ResultsView) {
        if self.json {
            return;
        }
        match view {
            ResultsView::Hidden => {}
            ResultsView::Loading => println!("{}", style("Searching...").dim()),
            ResultsView::Empty { message } => println!("\n{}", style(message).dim()),
            ResultsView::Grid { cards, pagination } => {
                println!();
                for (i, card) in cards.iter().enumerate() {
                    println!("{}", format_card(i + 1, card));
                }
                if let Some(controls) = pagination {
                    println!("\n  {}", format_pagination(controls));
                }
            }
        }
    }

    /// Print recent searches, most recent first.
    pub fn recent_searches(&self, recent: &RecentSearchList) {
        if recent.is_empty() {
            return;
        }
        self.header("Recent Searches");
        for keyword in recent.iter() {
            self.list_item(keyword);
        }
    }
}

/// One numbered result card over three lines.
pub fn format_card(num: usize, card: &ProductCard) -> String {
    let prime = if card.is_prime {
        format!("  {}", style("Prime").cyan().bold())
    } else {
        String::new()
    };
    format!(
        "{:>3}. {}\n     {}  ★ {}{}\n     {}",
        num,
        style(&card.title).bold(),
        style(&card.price).green(),
        card.rating,
        prime,
        style(&card.product_url).dim(),
    )
}

/// Page strip such as `‹ 1 [2] 3 ›  page 2 of 3`.
pub fn format_pagination(controls: &PageControls) -> String {
    let mut parts = Vec::with_capacity(controls.pages.len() + 2);
    if controls.prev.is_some() {
        parts.push("‹".to_string());
    }
    for &page in &controls.pages {
        if controls.is_active(page) {
            parts.push(format!("[{}]", page));
        } else {
            parts.push(page.to_string());
        }
    }
    if controls.next.is_some() {
        parts.push("›".to_string());
    }
    format!(
        "{}  page {} of {}",
        parts.join(" "),
        controls.current,
        controls.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_strip() {
        console::set_colors_enabled(false);
        let controls = PageControls::new(2, 3).unwrap();
        assert_eq!(format_pagination(&controls), "‹ 1 [2] 3 ›  page 2 of 3");

        let first = PageControls::new(1, 2).unwrap();
        assert_eq!(format_pagination(&first), "[1] 2 ›  page 1 of 2");
    }

    #[test]
    fn test_card_lines() {
        console::set_colors_enabled(false);
        let card = ProductCard {
            id: "1".to_string(),
            title: "Premium Wireless Mouse".to_string(),
            price: "$29.99".to_string(),
            rating: "4.5".to_string(),
            is_prime: true,
            image_url: String::new(),
            product_url: "#".to_string(),
        };
        let text = format_card(1, &card);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  1. Premium Wireless Mouse");
        assert_eq!(lines[1], "     $29.99  ★ 4.5  Prime");
        assert_eq!(lines[2], "     #");
    }
}
