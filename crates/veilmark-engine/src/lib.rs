pub mod format;
pub mod io;
pub mod render;
pub mod rope;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use format::{MAX_PASSES, format_markdown};
pub use render::{Block, ListItem, ListKind, RenderedDoc, render_html, render_markdown};
