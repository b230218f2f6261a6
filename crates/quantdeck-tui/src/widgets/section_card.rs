//! Free-text content panel

use quantdeck_core::markup::{self, MarkupLine};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

/// Renders section text with `**bold**` and line breaks interpreted
pub struct SectionCard<'a> {
    text: &'a str,
    scroll: u16,
}

impl<'a> SectionCard<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, scroll: 0 }
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }
}

fn to_line(line: MarkupLine) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .spans
        .into_iter()
        .map(|span| {
            let style = if span.bold {
                styles::text_bold()
            } else {
                styles::text_secondary()
            };
            Span::styled(span.text, style)
        })
        .collect();
    Line::from(spans)
}

fn card_block() -> Block<'static> {
    styles::glass_block()
        .style(Style::default().bg(palette::CARD_BG))
        .padding(Padding::horizontal(1))
}

impl SectionCard<'_> {
    fn paragraph(&self) -> Paragraph<'static> {
        let lines: Vec<Line> = markup::parse(self.text).into_iter().map(to_line).collect();
        Paragraph::new(lines).wrap(Wrap { trim: false })
    }

    /// Largest scroll offset that still leaves the last row in view
    pub fn max_scroll(&self, area: Rect) -> u16 {
        let inner = card_block().inner(area);
        let rows = u16::try_from(self.paragraph().line_count(inner.width)).unwrap_or(u16::MAX);
        rows.saturating_sub(inner.height)
    }
}

impl Widget for SectionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.paragraph()
            .block(card_block())
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
