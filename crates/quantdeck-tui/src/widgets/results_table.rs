//! Replication test results: portfolio summary and per-alpha table

use quantdeck_core::{AlphaResult, PortfolioPnl, ReplicationResult, Verdict};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use super::wrap_text;
use crate::theme::{palette, styles};

/// Height of the portfolio summary block
const SUMMARY_HEIGHT: u16 = 5;

const NAME_WIDTH: u16 = 22;
const TRADES_WIDTH: u16 = 7;
const PNL_WIDTH: u16 = 12;
const MATCH_WIDTH: u16 = 6;
const COLUMN_SPACING: u16 = 1;

/// Dollar amount with two decimals, sign before the currency symbol
pub fn format_usd(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

/// Portfolio summary followed by one table row per alpha
///
/// Scrolling moves whole table rows; the summary stays put.
pub struct ResultsDisplay<'a> {
    result: &'a ReplicationResult,
    scroll: u16,
}

impl<'a> ResultsDisplay<'a> {
    pub fn new(result: &'a ReplicationResult) -> Self {
        Self { result, scroll: 0 }
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }

    /// Largest useful scroll offset: the last alpha row at the top
    pub fn max_scroll(&self) -> u16 {
        u16::try_from(self.result.alphas.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }
}

fn badge(verdict: Verdict) -> Span<'static> {
    Span::styled(verdict.as_str(), styles::verdict(verdict))
}

fn render_summary(portfolio: &PortfolioPnl, area: Rect, buf: &mut Buffer) {
    let block = styles::glass_block()
        .style(Style::default().bg(palette::CARD_BG))
        .title(Span::styled(" Portfolio P&L Summary ", styles::text_bold()));
    let inner = block.inner(area);
    block.render(area, buf);

    let tiles = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);
    let stats = [
        (
            "Sandbox P&L",
            Span::styled(format_usd(portfolio.sandbox_pnl), styles::text_primary()),
        ),
        (
            "Backtest P&L",
            Span::styled(format_usd(portfolio.backtest_pnl), styles::text_primary()),
        ),
        ("P&L Match", badge(portfolio.pnl_match)),
    ];

    for ((label, value), tile) in stats.into_iter().zip(tiles.iter()) {
        Paragraph::new(vec![
            Line::from(Span::styled(label, styles::text_muted())),
            Line::from(value),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().bg(palette::SURFACE))
        .render(*tile, buf);
    }
}

/// Width left for the analysis column inside a table `table_width` wide
fn analysis_width(table_width: u16) -> u16 {
    let fixed = NAME_WIDTH + TRADES_WIDTH + PNL_WIDTH + MATCH_WIDTH + 4 * COLUMN_SPACING;
    table_width.saturating_sub(fixed).max(10)
}

fn alpha_row(name: &str, alpha: &AlphaResult, analysis_width: u16) -> Row<'static> {
    let analysis_style = match alpha.verdict {
        Verdict::Pass => styles::text_secondary(),
        Verdict::Fail => Style::default().fg(palette::FAIL_ANALYSIS),
    };
    let analysis: Vec<Line> = wrap_text(&alpha.analysis, analysis_width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, analysis_style)))
        .collect();
    let height = analysis.len().max(1) as u16;

    let mut name_style = styles::accent();
    if !alpha.verdict.is_pass() {
        name_style = name_style.add_modifier(Modifier::BOLD);
    }

    Row::new(vec![
        Cell::from(Span::styled(name.to_string(), name_style)),
        Cell::from(Line::from(alpha.trades.to_string()).alignment(Alignment::Right)),
        Cell::from(
            Line::from(Span::styled(format_usd(alpha.pnl), styles::pnl(alpha.pnl)))
                .alignment(Alignment::Right),
        ),
        Cell::from(Line::from(badge(alpha.verdict)).alignment(Alignment::Center)),
        Cell::from(Text::from(analysis)),
    ])
    .height(height)
}

fn render_alphas(result: &ReplicationResult, skip: usize, area: Rect, buf: &mut Buffer) {
    let block = styles::glass_block()
        .style(Style::default().bg(palette::CARD_BG))
        .title(Span::styled(
            " Alphas Replication Analysis ",
            styles::text_bold(),
        ));
    let inner = block.inner(area);
    block.render(area, buf);

    let analysis_width = analysis_width(inner.width);
    let rows: Vec<Row> = result
        .alphas
        .iter()
        .skip(skip)
        .map(|(name, alpha)| alpha_row(name, alpha, analysis_width))
        .collect();

    let header = Row::new(vec![
        Cell::from("Alpha Name"),
        Cell::from(Line::from("Trades").alignment(Alignment::Right)),
        Cell::from(Line::from("P&L").alignment(Alignment::Right)),
        Cell::from(Line::from("Match").alignment(Alignment::Center)),
        Cell::from("Analysis"),
    ])
    .style(
        Style::default()
            .fg(palette::TEXT_SECONDARY)
            .bg(palette::SURFACE)
            .add_modifier(Modifier::BOLD),
    );

    let widths = [
        Constraint::Length(NAME_WIDTH),
        Constraint::Length(TRADES_WIDTH),
        Constraint::Length(PNL_WIDTH),
        Constraint::Length(MATCH_WIDTH),
        Constraint::Min(analysis_width),
    ];

    Widget::render(
        Table::new(rows, widths)
            .header(header)
            .column_spacing(COLUMN_SPACING),
        inner,
        buf,
    );
}

impl Widget for ResultsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [summary, table] =
            Layout::vertical([Constraint::Length(SUMMARY_HEIGHT), Constraint::Min(3)]).areas(area);

        render_summary(&self.result.portfolio_pnl, summary, buf);

        let skip = usize::from(self.scroll).min(self.result.alphas.len().saturating_sub(1));
        render_alphas(self.result, skip, table, buf);
    }
}
