//! Screen layout definitions for the TUI
//!
//! Header on top, sidebar on the left, page title and content on the
//! right, and an optional key-hint footer.

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width in columns (fits the longest section label)
pub const SIDEBAR_WIDTH: u16 = 38;

/// Sidebar width when only section numbers are shown
pub const SIDEBAR_COMPACT_WIDTH: u16 = 7;

/// Terminal width below which the compact sidebar is used
const COMPACT_BREAKPOINT: u16 = 70;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar with status
    pub header: Rect,
    /// Section navigation
    pub sidebar: Rect,
    /// Active section label
    pub title: Rect,
    /// Loaded content or spinner
    pub content: Rect,
    /// Key hints; zero height when hidden
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect, show_help: bool) -> ScreenAreas {
    let footer_height = if show_help { 1 } else { 0 };

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(footer_height),
    ])
    .areas(area);

    let sidebar_width = if area.width < COMPACT_BREAKPOINT {
        SIDEBAR_COMPACT_WIDTH
    } else {
        SIDEBAR_WIDTH
    };

    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(10)]).areas(body);

    // Title row plus a spacer row
    let [title, content] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(main);

    ScreenAreas {
        header,
        sidebar,
        title,
        content,
        footer,
    }
}

/// Whether the sidebar is rendered in its compact (numbers only) form
pub fn is_compact(sidebar: Rect) -> bool {
    sidebar.width < SIDEBAR_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_help() {
        let areas = create(Rect::new(0, 0, 100, 30), true);

        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.footer.height, 1);
        assert_eq!(areas.footer.y, 29);
        assert_eq!(areas.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(areas.sidebar.height, 26); // 30 - 3 - 1
        assert_eq!(areas.title.x, SIDEBAR_WIDTH);
        assert_eq!(areas.content.y, 5); // header + title row + spacer
    }

    #[test]
    fn test_layout_without_help() {
        let areas = create(Rect::new(0, 0, 100, 30), false);

        assert_eq!(areas.footer.height, 0);
        assert_eq!(areas.sidebar.height, 27);
    }

    #[test]
    fn test_compact_sidebar_on_narrow_terminal() {
        let areas = create(Rect::new(0, 0, 60, 20), true);

        assert_eq!(areas.sidebar.width, SIDEBAR_COMPACT_WIDTH);
        assert!(is_compact(areas.sidebar));
        assert_eq!(areas.content.width, 60 - SIDEBAR_COMPACT_WIDTH);
    }
}
