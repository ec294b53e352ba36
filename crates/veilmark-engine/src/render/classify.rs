use crate::format::heading::{HeadingLevel, split_heading};
use crate::rope::{LineRef, Span};

use super::types::ListKind;

/// What a single line is, judged from its own prefix only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Heading {
        level: HeadingLevel,
        text: &'a str,
    },
    ListItem {
        kind: ListKind,
        /// The item number for ordered items.
        number: Option<u64>,
        text: &'a str,
    },
    Paragraph {
        text: &'a str,
    },
}

/// Classification of a single line containing only local facts.
///
/// Grouping into lists happens later, in the block builder.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// Span of the line content, without the line terminator.
    pub span: Span,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineClassifier;

impl LineClassifier {
    pub const BULLETS: [&'static str; 2] = ["- ", "* "];

    pub fn classify<'a>(&self, lr: &'a LineRef) -> LineClass<'a> {
        LineClass {
            span: lr.content_span(),
            kind: self.classify_text(lr.content()),
        }
    }

    /// Prefix checks in order: blank, heading, bullet, number, paragraph.
    pub fn classify_text<'a>(&self, line: &'a str) -> LineKind<'a> {
        let line = line.trim();
        if line.is_empty() {
            return LineKind::Blank;
        }

        if let Some((level, text)) = split_heading(line) {
            return LineKind::Heading {
                level,
                text: text.trim(),
            };
        }

        if let Some(text) = Self::BULLETS.iter().find_map(|b| line.strip_prefix(*b)) {
            return LineKind::ListItem {
                kind: ListKind::Unordered,
                number: None,
                text: text.trim(),
            };
        }

        if let Some((number, text)) = split_ordered(line) {
            return LineKind::ListItem {
                kind: ListKind::Ordered,
                number: Some(number),
                text: text.trim(),
            };
        }

        LineKind::Paragraph { text: line }
    }
}

/// Splits `12. text` into `(12, "text")`.
fn split_ordered(line: &str) -> Option<(u64, &str)> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let text = line[digits..].strip_prefix(". ")?;
    let number = line[..digits].parse().ok()?;
    Some((number, text))
}
