//! Byte-span helpers over an [`xi_rope::Rope`] holding the source content.

pub mod lines;
pub mod slice;
pub mod span;

pub use lines::{LineRef, lines_with_spans};
pub use slice::slice_to_string;
pub use span::Span;
