//! Custom widgets for the dashboard

mod footer;
mod header;
mod loading_spinner;
mod results_table;
mod section_card;
mod sidebar;
mod strategy_cards;

pub use footer::KeyHints;
pub use header::{HeaderStatus, MainHeader, APP_TITLE};
pub use loading_spinner::LoadingSpinner;
pub use results_table::{format_usd, ResultsDisplay};
pub use section_card::SectionCard;
pub use sidebar::Sidebar;
pub use strategy_cards::StrategyCards;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap of `text` into lines at most `width` display columns
///
/// Width is measured in terminal columns, so double-width characters
/// count twice. Words wider than `width` are split between characters.
/// Existing newlines are kept.
pub(crate) fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0usize;

        for word in paragraph.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);
            let gap = usize::from(current_width > 0);

            if current_width + gap + word_width <= width {
                if gap == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += gap + word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for c in word.chars() {
                let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
                if current_width > 0 && current_width + char_width > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += char_width;
            }
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
