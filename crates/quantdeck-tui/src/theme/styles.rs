//! Semantic style builders for the dashboard theme.

use quantdeck_core::Verdict;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Domain styles ---

/// Badge style for a PASS/FAIL verdict
pub fn verdict(verdict: Verdict) -> Style {
    let fg = if verdict.is_pass() {
        palette::PASS_FG
    } else {
        palette::FAIL_FG
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

/// P&L colored by sign; zero counts as a gain
pub fn pnl(value: f64) -> Style {
    if value >= 0.0 {
        Style::default().fg(palette::STATUS_GREEN)
    } else {
        Style::default().fg(palette::STATUS_RED)
    }
}

/// Sidebar entry style
pub fn nav_item(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(palette::SELECTED_FG)
            .bg(palette::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        text_secondary()
    }
}

// --- Block builders ---

/// Rounded bordered container
pub fn glass_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pnl_sign_colors() {
        assert_eq!(pnl(102.5).fg, Some(palette::STATUS_GREEN));
        assert_eq!(pnl(0.0).fg, Some(palette::STATUS_GREEN));
        assert_eq!(pnl(-30.1).fg, Some(palette::STATUS_RED));
    }

    #[test]
    fn test_verdict_styles_differ() {
        assert_ne!(verdict(Verdict::Pass), verdict(Verdict::Fail));
        assert!(verdict(Verdict::Fail).add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_nav_item_selected_has_background() {
        assert_eq!(nav_item(true).bg, Some(palette::SELECTED_BG));
        assert_eq!(nav_item(false).bg, None);
    }
}
