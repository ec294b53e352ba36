use std::sync::LazyLock;

use regex::Regex;

pub const BOLD_OPEN: &str = r#"<strong class="font-bold">"#;
pub const BOLD_CLOSE: &str = "</strong>";
pub const ITALIC_OPEN: &str = r#"<em class="italic">"#;
pub const ITALIC_CLOSE: &str = "</em>";
pub const UNDERLINE_OPEN: &str = r#"<u class="underline">"#;
pub const UNDERLINE_CLOSE: &str = "</u>";

/// Compiled expressions used by the formatter.
///
/// Emphasis captures use `.+?` without the `s` flag, so a span never
/// crosses a line break.
pub struct Patterns {
    pub tag_b: Regex,
    pub tag_strong: Regex,
    pub tag_i: Regex,
    pub tag_em: Regex,
    pub tag_u: Regex,
    pub heading_line: Regex,

    pub long_asterisk_run: Regex,

    pub bold_italic_underline: Regex,
    pub bold_italic: Regex,
    pub bold_underline: Regex,
    pub italic_underline: Regex,
    pub bold: Regex,
    pub underline: Regex,
    pub italic: Regex,
}

pub static RE: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    tag_b: Regex::new(r"(?s)<b>(.*?)</b>").unwrap(),
    tag_strong: Regex::new(r"(?s)<strong>(.*?)</strong>").unwrap(),
    tag_i: Regex::new(r"(?s)<i>(.*?)</i>").unwrap(),
    tag_em: Regex::new(r"(?s)<em>(.*?)</em>").unwrap(),
    tag_u: Regex::new(r"(?s)<u>(.*?)</u>").unwrap(),
    heading_line: Regex::new(r"(?m)^(#{1,6}) ([^\r\n]+)").unwrap(),

    long_asterisk_run: Regex::new(r"\*{4,}").unwrap(),

    bold_italic_underline: Regex::new(r"\*\*\*__(.+?)__\*\*\*").unwrap(),
    bold_italic: Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap(),
    bold_underline: Regex::new(r"\*\*__(.+?)__\*\*").unwrap(),
    italic_underline: Regex::new(r"\*__(.+?)__\*").unwrap(),
    bold: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
    underline: Regex::new(r"__(.+?)__").unwrap(),
    italic: Regex::new(r"\*(.+?)\*").unwrap(),
});

pub fn bold(inner: &str) -> String {
    format!("{BOLD_OPEN}{inner}{BOLD_CLOSE}")
}

pub fn italic(inner: &str) -> String {
    format!("{ITALIC_OPEN}{inner}{ITALIC_CLOSE}")
}

pub fn underline(inner: &str) -> String {
    format!("{UNDERLINE_OPEN}{inner}{UNDERLINE_CLOSE}")
}
