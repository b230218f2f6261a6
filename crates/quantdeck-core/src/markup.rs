//! Minimal markup used in section explanations
//!
//! Explanations carry `**bold**` runs and `<br/>` line breaks alongside
//! ordinary newlines. [`parse`] turns that into display lines of styled
//! spans so renderers never see raw markup.

use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid line break regex"));

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold regex"));

/// A run of text with uniform styling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSpan {
    pub text: String,
    pub bold: bool,
}

impl MarkupSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// One display line; an empty `spans` vec is a blank line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupLine {
    pub spans: Vec<MarkupSpan>,
}

impl MarkupLine {
    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(|s| s.text.trim().is_empty())
    }

    /// Text of the line with markup removed
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Parse explanation text into display lines.
///
/// Runs of consecutive blank lines collapse to a single blank line, and
/// leading/trailing blank lines are dropped. An unmatched `**` is kept
/// literally.
pub fn parse(text: &str) -> Vec<MarkupLine> {
    let normalized = LINE_BREAK.replace_all(text, "\n");

    let mut lines: Vec<MarkupLine> = Vec::new();
    for raw in normalized.lines() {
        let line = parse_line(raw.trim_end());
        if line.is_blank() {
            if lines.last().is_some_and(|prev| !prev.is_blank()) {
                lines.push(MarkupLine::default());
            }
        } else {
            lines.push(line);
        }
    }

    while lines.last().is_some_and(MarkupLine::is_blank) {
        lines.pop();
    }
    lines
}

fn parse_line(raw: &str) -> MarkupLine {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for caps in BOLD.captures_iter(raw) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > cursor {
            spans.push(MarkupSpan::plain(&raw[cursor..whole.start()]));
        }
        spans.push(MarkupSpan::bold(inner.as_str()));
        cursor = whole.end();
    }

    if cursor < raw.len() {
        spans.push(MarkupSpan::plain(&raw[cursor..]));
    }

    MarkupLine { spans }
}

/// Strip all markup, joining lines with `\n`
pub fn to_plain_text(text: &str) -> String {
    parse(text)
        .iter()
        .map(MarkupLine::plain_text)
        .collect::<Vec<_>>()
        .join("\n")
}
