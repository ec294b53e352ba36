use log::trace;

use crate::format::format_markdown;
use crate::rope::Span;

use super::{
    classify::{LineClass, LineKind},
    slug::SlugRegistry,
    types::{Block, ListItem, ListKind},
};

/// A list whose items are still being collected.
#[derive(Debug)]
struct OpenList {
    kind: ListKind,
    start: u64,
    span: Span,
    items: Vec<ListItem>,
}

/// Single-pass state machine turning classified lines into blocks.
///
/// At most one list is open at a time. It is flushed by a blank line, a
/// heading, a paragraph, an item of the other list kind, or end of input.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    list: Option<OpenList>,
    slugs: SlugRegistry,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        match c.kind {
            LineKind::Blank => self.flush_list(),
            LineKind::Heading { level, text } => {
                self.flush_list();
                let html = format_markdown(text);
                let id = self.slugs.unique(&html);
                self.out.push(Block::Heading {
                    level,
                    id,
                    span: c.span,
                    html,
                });
            }
            LineKind::ListItem { kind, number, text } => {
                self.push_item(kind, number, c.span, text);
            }
            LineKind::Paragraph { text } => {
                self.flush_list();
                self.out.push(Block::Paragraph {
                    span: c.span,
                    html: format_markdown(text),
                });
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.out
    }

    fn push_item(&mut self, kind: ListKind, number: Option<u64>, span: Span, text: &str) {
        if self.list.as_ref().is_some_and(|open| open.kind != kind) {
            self.flush_list();
        }

        let item = ListItem {
            span,
            html: format_markdown(text),
        };
        if let Some(open) = self.list.as_mut() {
            open.span = open.span.cover(span);
            open.items.push(item);
            return;
        }
        self.list = Some(OpenList {
            kind,
            start: number.unwrap_or(1),
            span,
            items: vec![item],
        });
    }

    fn flush_list(&mut self) {
        let Some(open) = self.list.take() else {
            return;
        };
        trace!("closing {:?} list with {} items", open.kind, open.items.len());
        self.out.push(Block::List {
            kind: open.kind,
            start: open.start,
            span: open.span,
            items: open.items,
        });
    }
}
