use std::fmt;

/// Occurrence counts of each emphasis marker in a piece of text.
///
/// Counting walks maximal runs of `*` and `_`:
/// - a run of `n` asterisks holds `n / 2` bold markers (`***` holds one);
/// - only a lone `*` counts as an italic marker;
/// - a run of four or more asterisks is literal text and counts nothing;
/// - a run of `n` underscores holds `n / 2` underline markers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MarkerCounts {
    pub bold: usize,
    pub italic: usize,
    pub underline: usize,
}

impl MarkerCounts {
    pub fn scan(text: &str) -> Self {
        let mut counts = Self::default();
        let bytes = text.as_bytes();
        let mut i = 0;

        while i < bytes.len() {
            let b = bytes[i];
            if b != b'*' && b != b'_' {
                i += 1;
                continue;
            }

            let run = bytes[i..].iter().take_while(|&&c| c == b).count();
            if b == b'_' {
                counts.underline += run / 2;
            } else if run < LITERAL_RUN {
                counts.bold += run / 2;
                if run == 1 {
                    counts.italic += 1;
                }
            }
            i += run;
        }

        counts
    }
}

/// Asterisk runs at least this long are never emphasis markers.
pub const LITERAL_RUN: usize = 4;

/// A maximal run of one to three asterisks within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    len: usize,
    /// Followed by a non-space character.
    can_open: bool,
    /// Preceded by a non-space character.
    can_close: bool,
}

fn asterisk_runs(line: &str) -> Vec<Run> {
    let bytes = line.as_bytes();
    let mut runs = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'*' {
            i += 1;
            continue;
        }
        let len = bytes[i..].iter().take_while(|&&c| c == b'*').count();
        if len < LITERAL_RUN {
            runs.push(Run {
                len,
                can_open: line[i + len..].chars().next().is_some_and(|c| !c.is_whitespace()),
                can_close: line[..i].chars().next_back().is_some_and(|c| !c.is_whitespace()),
            });
        }
        i += len;
    }

    runs
}

/// Pairs `***` runs in order (first with second, third with fourth) and
/// reports whether a lone `*` sits inside any pair.
fn has_triple_nested(runs: &[Run]) -> bool {
    let mut inside = false;
    for run in runs {
        match run.len {
            3 => inside = !inside,
            1 if inside => return true,
            _ => {}
        }
    }
    false
}

/// Pairs `*` and `**` runs with a stack, closing on the innermost open run.
///
/// A run that can only close but meets an open run of the other length is an
/// asymmetric pair: `**a*` or `*a**`.
fn has_asymmetric_pair(runs: &[Run]) -> bool {
    let mut open: Vec<usize> = Vec::new();
    for run in runs.iter().filter(|r| r.len < 3) {
        if run.can_close {
            match open.last() {
                Some(&len) if len == run.len => {
                    open.pop();
                    continue;
                }
                Some(_) if !run.can_open => return true,
                _ => {}
            }
        }
        if run.can_open {
            open.push(run.len);
        }
    }
    false
}

/// Why a piece of text was left unformatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    OddBold(usize),
    OddItalic(usize),
    OddUnderline(usize),
    /// `***a *b* c***`
    TripleNested,
    /// `**a*` or `*a**`
    AsymmetricPair,
}

impl fmt::Display for Malformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddBold(n) => write!(f, "odd number of `**` markers ({n})"),
            Self::OddItalic(n) => write!(f, "odd number of `*` markers ({n})"),
            Self::OddUnderline(n) => write!(f, "odd number of `__` markers ({n})"),
            Self::TripleNested => f.write_str("`***` span wrapping a nested `*` span"),
            Self::AsymmetricPair => f.write_str("`*` paired with `**`"),
        }
    }
}

/// Returns the first reason `text` cannot be formatted safely, if any.
///
/// Counts cover the whole text; the nesting shapes are checked per line,
/// since no span crosses a line break.
pub fn find_malformation(text: &str) -> Option<Malformation> {
    let counts = MarkerCounts::scan(text);
    if counts.bold % 2 != 0 {
        return Some(Malformation::OddBold(counts.bold));
    }
    if counts.italic % 2 != 0 {
        return Some(Malformation::OddItalic(counts.italic));
    }
    if counts.underline % 2 != 0 {
        return Some(Malformation::OddUnderline(counts.underline));
    }

    for line in text.lines() {
        let runs = asterisk_runs(line);
        if has_triple_nested(&runs) {
            return Some(Malformation::TripleNested);
        }
        if has_asymmetric_pair(&runs) {
            return Some(Malformation::AsymmetricPair);
        }
    }
    None
}
