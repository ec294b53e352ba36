use serde::Serialize;

/// A byte range `[start, end)` into the source rope.
///
/// Rendered blocks keep the span of the lines they were built from, so a
/// block can always be traced back to the exact CMS text that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Smallest span covering both `self` and `other`.
    #[must_use]
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_joins_disjoint_spans() {
        let joined = Span::new(10, 14).cover(Span::new(0, 4));
        assert_eq!(joined, Span::new(0, 14));
    }
}
