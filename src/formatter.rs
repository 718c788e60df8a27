//! Result formatter
//!
//! Turns the model's lightweight markup into styled lines. Each input line
//! falls into exactly one class, checked in order:
//!
//! 1. trimmed line starts and ends with `**` → heading
//! 2. trimmed line starts with `*` → bullet
//! 3. anything else → plain, verbatim
//!
//! Asterisk-only lines land in the first matching class: `**` and longer
//! runs are empty headings, a lone `*` is an empty bullet.

use crate::errors::{AdvisorError, Result};

/// Glyph prefixed to bullet items
pub const BULLET: &str = "• ";

/// Classification of one line of model output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Heading(String),
    Bullet(String),
    Plain(String),
}

/// Display style of a rendered line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Bold,
    Bullet,
    Normal,
}

/// A rendered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub style: LineStyle,
    pub text: String,
}

fn strip_markers(line: &str) -> &str {
    line.trim_matches(|c: char| c == '*' || c.is_whitespace())
}

/// Classify a single line
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.starts_with("**") && trimmed.ends_with("**") {
        LineKind::Heading(strip_markers(trimmed).to_string())
    } else if trimmed.starts_with('*') {
        LineKind::Bullet(strip_markers(trimmed).to_string())
    } else {
        LineKind::Plain(line.to_string())
    }
}

impl From<LineKind> for StyledLine {
    fn from(kind: LineKind) -> Self {
        match kind {
            LineKind::Heading(text) => StyledLine {
                style: LineStyle::Bold,
                text,
            },
            LineKind::Bullet(text) => StyledLine {
                style: LineStyle::Bullet,
                text: format!("{}{}", BULLET, text),
            },
            LineKind::Plain(text) => StyledLine {
                style: LineStyle::Normal,
                text,
            },
        }
    }
}

/// Read-only text area holding one recommendation
#[derive(Debug, Clone)]
pub struct OutputPane {
    title: &'static str,
    lines: Vec<StyledLine>,
    read_only: bool,
}

impl OutputPane {
    /// Create an empty, read-only pane
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            lines: Vec::new(),
            read_only: true,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn lines(&self) -> &[StyledLine] {
        &self.lines
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn unlock(&mut self) {
        self.read_only = false;
    }

    fn lock(&mut self) {
        self.read_only = true;
    }

    fn clear_unlocked(&mut self) {
        debug_assert!(!self.read_only);
        self.lines.clear();
    }

    fn push_unlocked(&mut self, line: StyledLine) {
        debug_assert!(!self.read_only);
        self.lines.push(line);
    }

    /// Append a line; only allowed while the pane is being repopulated
    pub fn push(&mut self, line: StyledLine) -> Result<()> {
        if self.read_only {
            return Err(AdvisorError::ReadOnlyPane);
        }
        self.push_unlocked(line);
        Ok(())
    }

    /// Displayed text, one row per line
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Replace the pane's content with `text`, formatted line by line
pub fn render(pane: &mut OutputPane, text: &str) {
    pane.unlock();
    pane.clear_unlocked();
    for line in text.split('\n') {
        pane.push_unlocked(classify_line(line).into());
    }
    pane.lock();
}
