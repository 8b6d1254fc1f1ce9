//! Terminal styling helpers
//!
//! Output is printed through `anstream`, which strips the escape codes
//! when stdout is not a terminal.

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark used for completed steps
pub const CHECK: &str = "✓";

/// Cross used for failed steps
pub const CROSS: &str = "✗";

/// Semantic styles for CLI output
pub trait Stylize: Display {
    /// De-emphasized text
    fn muted(&self) -> String {
        self.to_string().dimmed().to_string()
    }

    /// Headings
    fn emphasis(&self) -> String {
        self.to_string().bold().to_string()
    }

    /// Names the user will want to spot (chains, branches)
    fn accent(&self) -> String {
        self.to_string().cyan().to_string()
    }

    /// Successful results
    fn success(&self) -> String {
        self.to_string().green().to_string()
    }

    /// Non-fatal problems
    fn warn(&self) -> String {
        self.to_string().yellow().to_string()
    }

    /// Failures
    fn failure(&self) -> String {
        self.to_string().red().bold().to_string()
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Styled check mark
pub fn check() -> String {
    CHECK.success()
}

/// Styled cross
pub fn cross() -> String {
    CROSS.failure()
}

/// Styled arrow for list items
pub fn arrow() -> String {
    "→".muted()
}

/// Spinner style shared by long-running fetches
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
}

/// Render `#<number>` as a terminal hyperlink when supported
pub fn pr_link(number: u64, url: &str) -> String {
    let text = format!("#{number}");
    if !url.is_empty() && supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        terminal_link::Link::new(&text, url).to_string()
    } else {
        text
    }
}
