//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use quantdeck_app::{AppState, ContentView};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Header status derived from the load cycle
fn header_status(state: &AppState) -> widgets::HeaderStatus {
    if state.loading {
        widgets::HeaderStatus::Loading
    } else if state.failed {
        widgets::HeaderStatus::Degraded
    } else {
        widgets::HeaderStatus::Nominal
    }
}

/// How far the current content can scroll inside `area`
fn scroll_limit(state: &AppState, area: Rect) -> u16 {
    match state.view() {
        ContentView::Text(text) => widgets::SectionCard::new(text).max_scroll(area),
        ContentView::Strategies(strategies) => {
            widgets::StrategyCards::new(strategies).max_scroll(area)
        }
        ContentView::Replication(result) => widgets::ResultsDisplay::new(result).max_scroll(),
        ContentView::Loading(_) | ContentView::Empty => 0,
    }
}

/// Render the complete UI (View function in TEA)
///
/// The content area dispatches on [`AppState::view`]. The only state
/// written is the scroll limit, measured against the current frame size.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.show_help);
    let limit = scroll_limit(state, areas.content);
    state.set_scroll_limit(limit);

    frame.render_widget(
        widgets::MainHeader::new(header_status(state)),
        areas.header,
    );
    frame.render_widget(widgets::Sidebar::new(state.active_section), areas.sidebar);

    let title = Paragraph::new(Line::from(Span::styled(
        state.active_section.label(),
        styles::text_bold(),
    )));
    frame.render_widget(title, areas.title);

    let content = areas.content;
    match state.view() {
        ContentView::Loading(loading) => {
            frame.render_widget(widgets::LoadingSpinner::new(loading), content);
        }
        ContentView::Text(text) => {
            frame.render_widget(
                widgets::SectionCard::new(text).scroll(state.scroll_offset),
                content,
            );
        }
        ContentView::Strategies(strategies) => {
            frame.render_widget(
                widgets::StrategyCards::new(strategies).scroll(state.scroll_offset),
                content,
            );
        }
        ContentView::Replication(result) => {
            frame.render_widget(
                widgets::ResultsDisplay::new(result).scroll(state.scroll_offset),
                content,
            );
        }
        ContentView::Empty => {}
    }

    if state.show_help {
        frame.render_widget(widgets::KeyHints, areas.footer);
    }
}
