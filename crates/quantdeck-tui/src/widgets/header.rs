//! Header bar widget
//!
//! Application title on the left, system status on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub const APP_TITLE: &str = "Quant Strategy Blueprint";

/// Status pill shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStatus {
    Nominal,
    Loading,
    Degraded,
}

impl HeaderStatus {
    fn label(&self) -> &'static str {
        match self {
            HeaderStatus::Nominal => "System Status: Nominal",
            HeaderStatus::Loading => "System Status: Loading",
            HeaderStatus::Degraded => "System Status: Degraded",
        }
    }

    fn style(&self) -> Style {
        let color = match self {
            HeaderStatus::Nominal => palette::STATUS_GREEN,
            HeaderStatus::Loading => palette::STATUS_YELLOW,
            HeaderStatus::Degraded => palette::STATUS_RED,
        };
        Style::default().fg(color)
    }
}

/// Main header showing the app title and status
pub struct MainHeader {
    status: HeaderStatus,
}

impl MainHeader {
    pub fn new(status: HeaderStatus) -> Self {
        Self { status }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block().style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled("Dashboard & Guide", styles::text_secondary()),
        ]);
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        let right = Line::from(vec![
            Span::styled("●", self.status.style()),
            Span::raw(" "),
            Span::styled(self.status.label(), styles::text_secondary()),
            Span::raw(" "),
        ]);
        let right_width = right.width() as u16;

        // Drop the status when it would overlap the title
        if left_width + right_width < inner.width {
            let x = inner.x + inner.width - right_width;
            buf.set_line(x, inner.y, &right, right_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_renders_title_and_status() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(HeaderStatus::Nominal), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains(APP_TITLE));
        assert!(term.buffer_contains("System Status: Nominal"));
    }

    #[test]
    fn test_header_drops_status_when_narrow() {
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(MainHeader::new(HeaderStatus::Loading), Rect::new(0, 0, 40, 3));

        assert!(term.buffer_contains("Quant Strategy"));
        assert!(!term.buffer_contains("System Status"));
    }
}
