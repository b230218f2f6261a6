//! Section navigation sidebar

use quantdeck_core::Section;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::layout;
use crate::theme::{palette, styles};

/// Lists the six sections and highlights the active one
pub struct Sidebar {
    active: Section,
}

impl Sidebar {
    pub fn new(active: Section) -> Self {
        Self { active }
    }

    fn item(&self, section: Section, compact: bool) -> Line<'static> {
        let selected = section == self.active;
        let style = styles::nav_item(selected);
        let number = section.index() + 1;

        if compact {
            return Line::from(Span::styled(format!(" {number} "), style));
        }

        let marker = if selected { "▶" } else { " " };
        Line::from(Span::styled(
            format!(" {marker} {number}  {}", section.label()),
            style,
        ))
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let compact = layout::is_compact(area);

        let mut block = styles::glass_block().style(Style::default().bg(palette::CARD_BG));
        if !compact {
            block = block.title(Span::styled(" Quant System ", styles::accent_bold()));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        // One blank row between entries
        let mut lines = Vec::with_capacity(Section::ALL.len() * 2);
        for section in Section::ALL {
            lines.push(self.item(section, compact));
            lines.push(Line::default());
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
