use serde::Serialize;

/// Heading depth, `1` (`#`) through `6` (`######`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MARKER: char = '#';
    pub const MAX: u8 = 6;

    pub fn new(level: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&level).then_some(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Element name, `h1` through `h6`.
    pub fn tag(self) -> &'static str {
        match self.0 {
            1 => "h1",
            2 => "h2",
            3 => "h3",
            4 => "h4",
            5 => "h5",
            _ => "h6",
        }
    }

    /// Size and weight classes; shallower headings render larger.
    pub fn classes(self) -> &'static str {
        match self.0 {
            1 => "text-4xl font-bold",
            2 => "text-3xl font-bold",
            3 => "text-2xl font-semibold",
            4 => "text-xl font-semibold",
            5 => "text-lg font-medium",
            _ => "text-base font-medium",
        }
    }
}

/// Splits `## Title` into its level and text.
///
/// Requires 1-6 `#` followed by a single space and non-empty text. Seven or
/// more `#`, a missing space, or an empty title are not headings.
pub fn split_heading(line: &str) -> Option<(HeadingLevel, &str)> {
    let hashes = line
        .bytes()
        .take_while(|&b| b == HeadingLevel::MARKER as u8)
        .count();
    let level = HeadingLevel::new(u8::try_from(hashes).ok()?)?;
    let text = line[hashes..].strip_prefix(' ')?;
    if text.trim().is_empty() {
        return None;
    }
    Some((level, text))
}
