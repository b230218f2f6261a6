//! Full-frame rendering tests

use super::*;
use crate::test_utils::TestTerminal;
use quantdeck_app::handler::update;
use quantdeck_app::state::FAILURE_MESSAGE;
use quantdeck_app::Message;
use quantdeck_content::catalog;
use quantdeck_core::{Content, ReplicationResult, Section};

fn render(state: &mut AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(120, 40);
    term.draw_with(|frame| view(frame, state));
    term
}

fn loaded_state(section: Section, content: Content) -> AppState {
    let mut state = AppState::new();
    state.select(section);
    state.apply_content(content);
    state
}

#[test]
fn test_loading_shows_only_spinner() {
    let mut state = AppState::new();
    state.select(Section::SystemArchitecture);
    state.text = "stale text".to_string();

    let term = render(&mut state);

    assert!(term.buffer_contains(&state.loading_state.message));
    assert!(!term.buffer_contains("stale text"));
    assert!(term.buffer_contains("System Status: Loading"));
}

#[test]
fn test_page_title_and_sidebar() {
    let mut state = loaded_state(Section::RigorousTesting, Content::Text("body".into()));
    let term = render(&mut state);

    assert!(term.buffer_contains("▶ 4  Rigorous Testing"));
    assert!(term.buffer_contains("Quant Strategy Blueprint"));
    assert!(term.buffer_contains("body"));
}

#[test]
fn test_text_section_renders_markup() {
    let text = catalog::explanation(Section::Objective).unwrap();
    let mut state = loaded_state(Section::Objective, Content::Text(text.to_string()));
    let term = render(&mut state);

    assert!(!term.buffer_contains("**"));
    assert!(!term.buffer_contains("<br"));
    assert!(term.buffer_contains("System Status: Nominal"));
}

#[test]
fn test_strategy_section_renders_cards() {
    let mut state = loaded_state(
        Section::AlphaLibrary,
        Content::Strategies(catalog::strategy_library()),
    );
    let term = render(&mut state);

    assert!(term.buffer_contains("Alpha 1: Pairs Trading"));
}

#[test]
fn test_replication_section_renders_scenario() {
    let json = r#"{"portfolio_pnl":{"sandbox_pnl":572.30,"backtest_pnl":572.30,"pnl_match":"PASS"},"alphas":{"alpha_1":{"trades":15,"pnl":102.5,"match":"PASS","analysis":"ok"}}}"#;
    let result = ReplicationResult::from_json(json).unwrap();
    let mut state = loaded_state(Section::ReplicationTest, Content::Replication(result));
    let term = render(&mut state);

    assert_eq!(term.content().matches("$572.30").count(), 2);
    assert!(term.buffer_contains("alpha_1"));
    assert!(term.buffer_contains("$102.50"));
}

#[test]
fn test_failure_text_replaces_content() {
    let mut state = AppState::new();
    state.select(Section::ReplicationTest);
    state.apply_failure();

    let term = render(&mut state);

    assert!(term.buffer_contains(FAILURE_MESSAGE));
    assert!(term.buffer_contains("System Status: Degraded"));
    assert!(!term.buffer_contains("Portfolio P&L Summary"));
}

#[test]
fn test_replication_without_report_renders_nothing() {
    let mut state = AppState::new();
    state.select(Section::ReplicationTest);
    state.loading = false;

    let term = render(&mut state);

    assert!(!term.buffer_contains("Portfolio P&L Summary"));
    assert!(!term.buffer_contains(FAILURE_MESSAGE));
}

#[test]
fn test_help_footer_toggles() {
    let mut state = loaded_state(Section::Objective, Content::Text("x".into()));
    let term = render(&mut state);
    assert!(term.line_contains(39, "reload"));
    assert!(!term.line_contains(1, "reload"));

    state.show_help = false;
    assert!(!render(&mut state).buffer_contains("reload"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut state = loaded_state(
        Section::ReplicationTest,
        Content::Replication(catalog::mock_replication_result()),
    );
    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &mut state));
}

#[test]
fn test_render_measures_scroll_limit() {
    let mut state = loaded_state(Section::Objective, Content::Text("short".into()));
    state.scroll_offset = 9;

    render(&mut state);

    assert_eq!(state.scroll_limit, 0);
    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn test_page_up_after_overscroll_moves_text() {
    let text = (1..=60)
        .map(|n| format!("paragraph line {n}"))
        .collect::<Vec<_>>()
        .join("\n");
    let mut state = loaded_state(Section::Objective, Content::Text(text));
    render(&mut state);

    for _ in 0..20 {
        update(&mut state, Message::PageDown);
        render(&mut state);
    }
    let bottom = render(&mut state);
    assert!(bottom.buffer_contains("paragraph line 60"));
    assert_eq!(state.scroll_offset, state.scroll_limit);

    update(&mut state, Message::PageUp);
    let moved = render(&mut state);
    assert!(!moved.buffer_contains("paragraph line 60"));
    assert!(moved.buffer_contains("paragraph line 40"));
}
