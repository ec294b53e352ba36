use serde::Serialize;

use crate::format::heading::HeadingLevel;
use crate::rope::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// `- item` or `* item`
    Unordered,
    /// `1. item`
    Ordered,
}

/// One `<li>` of a rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Span of the source line, without the line terminator.
    pub span: Span,
    /// Formatted item text.
    pub html: String,
}

/// A rendered block with the span of the source it came from.
///
/// `html` fields hold the formatter's output for the block's text only; the
/// surrounding element is produced by [`Block::write_html`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading {
        level: HeadingLevel,
        /// Anchor id, unique within the document.
        id: String,
        span: Span,
        html: String,
    },
    List {
        #[serde(rename = "list_kind")]
        kind: ListKind,
        /// Number of the first ordered item; `1` for unordered lists.
        start: u64,
        span: Span,
        items: Vec<ListItem>,
    },
    Paragraph {
        span: Span,
        html: String,
    },
}

impl Block {
    pub fn span(&self) -> Span {
        match self {
            Block::Heading { span, .. } | Block::List { span, .. } | Block::Paragraph { span, .. } => {
                *span
            }
        }
    }
}
