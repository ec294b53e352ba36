//! # Line Rendering
//!
//! Turns a block of CMS text into HTML, one line at a time.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is blank, a heading, an
//!    unordered or ordered list item, or a paragraph, judged by its prefix.
//! 2. **Block Construction** (`builder`): `BlockBuilder` groups contiguous
//!    items of one list kind and formats every piece of text with
//!    [`format_markdown`](crate::format_markdown).
//! 3. **Emission** (`html`): each [`Block`] writes its element.
//!
//! Every block keeps the byte span of the source it was built from.

pub mod builder;
pub mod classify;
pub mod html;
pub mod slug;
pub mod types;

use serde::Serialize;
use xi_rope::Rope;

use crate::rope::lines_with_spans;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier, LineKind};
pub use types::{Block, ListItem, ListKind};

/// The rendered form of one content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDoc {
    pub blocks: Vec<Block>,
}

impl RenderedDoc {
    /// Block elements joined by newlines.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            block.write_html(&mut out);
        }
        out
    }
}

pub fn render_markdown(content: &str) -> RenderedDoc {
    let rope = Rope::from(content);
    render_rope(&rope)
}

/// Renders content already held in a rope; spans index into `rope`.
pub fn render_rope(rope: &Rope) -> RenderedDoc {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        builder.push(&classifier.classify(&lr));
    }

    RenderedDoc {
        blocks: builder.finish(),
    }
}

/// Shorthand for `render_markdown(content).to_html()`.
///
/// ```
/// use veilmark_engine::render_html;
///
/// assert_eq!(
///     render_html("- **Lace**\n- Silk"),
///     "<ul class=\"list-disc pl-6 mb-4\">\n\
///      <li><strong class=\"font-bold\">Lace</strong></li>\n\
///      <li>Silk</li>\n\
///      </ul>",
/// );
/// ```
pub fn render_html(content: &str) -> String {
    render_markdown(content).to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rope::slice_to_string;

    #[test]
    fn empty_content_renders_nothing() {
        assert!(render_markdown("").blocks.is_empty());
        assert_eq!(render_html(""), "");
    }

    #[test]
    fn blank_lines_only() {
        assert!(render_markdown("\n\n\n").blocks.is_empty());
    }

    #[test]
    fn block_spans_slice_back_to_source() {
        let md = "# Título\n\nPrimeiro *parágrafo*.\n- um\n- dois\n";
        let rope = Rope::from(md);
        let doc = render_rope(&rope);

        let sources: Vec<_> = doc
            .blocks
            .iter()
            .map(|b| slice_to_string(&rope, b.span()))
            .collect();
        assert_eq!(
            sources,
            vec!["# Título", "Primeiro *parágrafo*.", "- um\n- dois"]
        );
    }

    #[test]
    fn crlf_content() {
        let html = render_html("# Hi\r\n\r\nthere\r\n");
        assert_eq!(
            html,
            "<h1 id=\"hi\" class=\"text-4xl font-bold\">Hi</h1>\n<p class=\"mb-4\">there</p>"
        );
    }
}
