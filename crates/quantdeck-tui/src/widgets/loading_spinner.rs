//! Loading indicator shown while a fetch is in flight

use quantdeck_app::LoadingState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Braille spinner frames
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Centered spinner with the current loading message
pub struct LoadingSpinner<'a> {
    loading: &'a LoadingState,
}

impl<'a> LoadingSpinner<'a> {
    pub fn new(loading: &'a LoadingState) -> Self {
        Self { loading }
    }

    fn frame(&self) -> &'static str {
        SPINNER[(self.loading.animation_frame as usize) % SPINNER.len()]
    }
}

impl Widget for LoadingSpinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, center, _] = Layout::vertical([
            Constraint::Percentage(40),
            Constraint::Length(1),
            Constraint::Percentage(40),
        ])
        .areas(area);

        let line = Line::from(vec![
            Span::styled(self.frame(), styles::accent_bold()),
            Span::raw(" "),
            Span::styled(self.loading.message.as_str(), styles::text_secondary()),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(center, buf);
    }
}
