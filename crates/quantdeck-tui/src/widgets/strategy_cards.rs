//! Strategy library card grid

use quantdeck_core::Strategy;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Padding, Paragraph, Widget},
};

use super::wrap_text;
use crate::theme::{palette, styles};

/// Content width at which cards are laid out two per row
const TWO_COLUMN_WIDTH: u16 = 90;

/// One card per strategy, in list order
///
/// Scrolling moves whole card rows.
pub struct StrategyCards<'a> {
    strategies: &'a [Strategy],
    scroll: u16,
}

impl<'a> StrategyCards<'a> {
    pub fn new(strategies: &'a [Strategy]) -> Self {
        Self {
            strategies,
            scroll: 0,
        }
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }

    /// Largest useful scroll offset: the last card row at the top
    pub fn max_scroll(&self, area: Rect) -> u16 {
        let rows = self.strategies.len().div_ceil(usize::from(columns_for(area.width)));
        u16::try_from(rows.saturating_sub(1)).unwrap_or(u16::MAX)
    }
}

fn columns_for(width: u16) -> u16 {
    if width >= TWO_COLUMN_WIDTH {
        2
    } else {
        1
    }
}

/// Inner text width of a card rendered `card_width` wide
fn card_text_width(card_width: u16) -> u16 {
    // Borders plus one column of padding on each side
    card_width.saturating_sub(4)
}

fn card_lines(strategy: &Strategy, text_width: u16) -> Vec<Line<'static>> {
    wrap_text(&strategy.description, text_width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, styles::text_secondary())))
        .collect()
}

fn render_card(strategy: &Strategy, area: Rect, buf: &mut Buffer) {
    let block = styles::glass_block()
        .style(Style::default().bg(palette::CARD_BG))
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            format!(" {} ", strategy.name),
            styles::accent_bold(),
        ));

    Paragraph::new(card_lines(strategy, card_text_width(area.width)))
        .block(block)
        .render(area, buf);
}

impl Widget for StrategyCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.strategies.is_empty() || area.height == 0 {
            return;
        }

        let columns = columns_for(area.width);
        let rows: Vec<&[Strategy]> = self.strategies.chunks(usize::from(columns)).collect();
        let first_row = usize::from(self.scroll).min(rows.len() - 1);

        let column_constraints = vec![Constraint::Ratio(1, u32::from(columns)); columns.into()];
        let card_width = area.width / columns;

        let mut y = area.y;
        let bottom = area.y + area.height;
        for row in &rows[first_row..] {
            if y >= bottom {
                break;
            }

            let height = row
                .iter()
                .map(|s| card_lines(s, card_text_width(card_width)).len() as u16 + 2)
                .max()
                .unwrap_or(3)
                .min(bottom - y);

            let row_area = Rect::new(area.x, y, area.width, height);
            let cells = Layout::horizontal(column_constraints.clone()).split(row_area);
            for (strategy, cell) in row.iter().zip(cells.iter()) {
                render_card(strategy, *cell, buf);
            }

            y += height;
        }
    }
}
