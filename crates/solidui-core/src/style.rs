//! Terminal text styles shared by prompts and messages

use colored::{ColoredString, Colorize};

/// Emphasis for key terms inside prompt messages
pub fn highlight(text: &str) -> ColoredString {
    text.cyan()
}

/// De-emphasized hints
pub fn subtle(text: &str) -> ColoredString {
    text.dimmed()
}

/// Banner text for the intro line
pub fn headline(text: &str) -> ColoredString {
    text.black().on_cyan()
}
