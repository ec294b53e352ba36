use std::fmt::Write;

use html_escape::encode_double_quoted_attribute;

use super::types::{Block, ListKind};

pub const UNORDERED_LIST_CLASSES: &str = "list-disc pl-6 mb-4";
pub const ORDERED_LIST_CLASSES: &str = "list-decimal pl-6 mb-4";
pub const PARAGRAPH_CLASSES: &str = "mb-4";

impl Block {
    /// Appends this block's element to `out`.
    ///
    /// Formatted text is inserted verbatim; only the generated `id` attribute
    /// is escaped.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Block::Heading {
                level, id, html, ..
            } => {
                let _ = write!(
                    out,
                    r#"<{tag} id="{id}" class="{classes}">{html}</{tag}>"#,
                    tag = level.tag(),
                    id = encode_double_quoted_attribute(id),
                    classes = level.classes(),
                );
            }
            Block::List {
                kind, start, items, ..
            } => {
                let (tag, classes) = match kind {
                    ListKind::Unordered => ("ul", UNORDERED_LIST_CLASSES),
                    ListKind::Ordered => ("ol", ORDERED_LIST_CLASSES),
                };
                out.push('<');
                out.push_str(tag);
                if *kind == ListKind::Ordered && *start != 1 {
                    let _ = write!(out, r#" start="{start}""#);
                }
                let _ = writeln!(out, r#" class="{classes}">"#);
                for item in items {
                    let _ = writeln!(out, "<li>{}</li>", item.html);
                }
                let _ = write!(out, "</{tag}>");
            }
            Block::Paragraph { html, .. } => {
                let _ = write!(out, r#"<p class="{PARAGRAPH_CLASSES}">{html}</p>"#);
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}
