//! # Inline Formatting
//!
//! Converts the emphasis subset used by CMS blog text into class-annotated
//! HTML.
//!
//! ## Pipeline
//!
//! 1. Bare `<b>`, `<i>`, `<u>`, `<strong>` and `<em>` pairs become the
//!    canonical tags.
//! 2. `# Heading` lines become styled `<h1>`..`<h6>` elements.
//! 3. The balance check ([`balance::find_malformation`]) rejects odd marker
//!    counts and the two ambiguous nesting shapes. Rejected input is returned
//!    exactly as given. Runs of four or more `*` are literal text.
//! 4. Substitution rules run most specific first, repeated until nothing
//!    changes or [`MAX_PASSES`] is reached.
//!
//! The output is trusted HTML: callers embed it without further escaping.

pub mod balance;
pub mod heading;
pub mod patterns;

use std::borrow::Cow;

use log::{debug, trace};
use regex::{Captures, Regex};

use balance::find_malformation;
use heading::HeadingLevel;
use patterns::{
    BOLD_CLOSE, BOLD_OPEN, ITALIC_CLOSE, ITALIC_OPEN, RE, UNDERLINE_CLOSE, UNDERLINE_OPEN,
};

pub use heading::split_heading;

/// Upper bound on substitution passes.
pub const MAX_PASSES: usize = 10;

/// Formats a line (or block) of CMS text into an HTML fragment.
///
/// Malformed emphasis makes the whole input pass through unchanged; this
/// function never fails.
///
/// ```
/// use veilmark_engine::format_markdown;
///
/// assert_eq!(
///     format_markdown("**A** and *B*"),
///     r#"<strong class="font-bold">A</strong> and <em class="italic">B</em>"#,
/// );
/// assert_eq!(format_markdown("*unterminated"), "*unterminated");
/// ```
pub fn format_markdown(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    if text.contains(LITERAL_ASTERISK) {
        debug!("leaving text unformatted: contains the literal-run placeholder");
        return text.to_string();
    }

    let normalized = normalize_headings(&normalize_literal_tags(text));
    let masked = mask_literal_runs(&normalized);

    if let Some(reason) = find_malformation(&masked) {
        debug!("leaving text unformatted: {reason}");
        return text.to_string();
    }

    rewrite_to_fixed_point(masked, MAX_PASSES, apply_emphasis).replace(LITERAL_ASTERISK, "*")
}

/// Stands in for each asterisk of a literal run (`****` and longer) while
/// the emphasis rules run.
const LITERAL_ASTERISK: char = '\u{E000}';

fn mask_literal_runs(text: &str) -> String {
    RE.long_asterisk_run
        .replace_all(text, |caps: &Captures<'_>| {
            LITERAL_ASTERISK.to_string().repeat(caps[0].len())
        })
        .into_owned()
}

/// Applies `step` until the text stops changing or `max_passes` are spent.
fn rewrite_to_fixed_point(
    mut text: String,
    max_passes: usize,
    step: fn(&str) -> String,
) -> String {
    for _ in 0..max_passes {
        let next = step(&text);
        if next == text {
            return next;
        }
        text = next;
    }

    trace!("emphasis rewriting stopped after {max_passes} passes");
    text
}

fn normalize_literal_tags(text: &str) -> String {
    let text = RE.tag_b.replace_all(text, wrap(BOLD_OPEN, BOLD_CLOSE));
    let text = RE.tag_strong.replace_all(&text, wrap(BOLD_OPEN, BOLD_CLOSE));
    let text = RE.tag_i.replace_all(&text, wrap(ITALIC_OPEN, ITALIC_CLOSE));
    let text = RE.tag_em.replace_all(&text, wrap(ITALIC_OPEN, ITALIC_CLOSE));
    let text = RE.tag_u.replace_all(&text, wrap(UNDERLINE_OPEN, UNDERLINE_CLOSE));
    text.into_owned()
}

fn normalize_headings(text: &str) -> String {
    RE.heading_line
        .replace_all(text, |caps: &Captures<'_>| {
            let level = u8::try_from(caps[1].len()).ok().and_then(HeadingLevel::new);
            match level {
                Some(level) => format!(
                    r#"<{tag} class="{classes}">{text}</{tag}>"#,
                    tag = level.tag(),
                    classes = level.classes(),
                    text = &caps[2],
                ),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// One pass of every emphasis rule, in precedence order.
fn apply_emphasis(text: &str) -> String {
    let text = RE.bold_italic_underline.replace_all(text, |caps: &Captures<'_>| {
        patterns::bold(&patterns::italic(&patterns::underline(&caps[1])))
    });
    let text = RE.bold_italic.replace_all(&text, |caps: &Captures<'_>| {
        patterns::bold(&patterns::italic(&caps[1]))
    });
    let text = RE.bold_underline.replace_all(&text, |caps: &Captures<'_>| {
        patterns::bold(&patterns::underline(&caps[1]))
    });
    let text = RE.italic_underline.replace_all(&text, |caps: &Captures<'_>| {
        patterns::italic(&patterns::underline(&caps[1]))
    });
    let text = RE.bold.replace_all(&text, |caps: &Captures<'_>| {
        let inner = wrap_all(&RE.italic, &caps[1], patterns::italic);
        let inner = wrap_all(&RE.underline, &inner, patterns::underline);
        patterns::bold(&inner)
    });
    let text = RE.underline.replace_all(&text, |caps: &Captures<'_>| {
        patterns::underline(&wrap_all(&RE.italic, &caps[1], patterns::italic))
    });
    let text = RE.italic.replace_all(&text, |caps: &Captures<'_>| {
        patterns::italic(&wrap_all(&RE.underline, &caps[1], patterns::underline))
    });
    text.into_owned()
}

/// Wraps every capture of `re` in `text` with `wrapper`.
fn wrap_all<'t>(re: &Regex, text: &'t str, wrapper: fn(&str) -> String) -> Cow<'t, str> {
    re.replace_all(text, |caps: &Captures<'_>| wrapper(&caps[1]))
}

fn wrap(open: &str, close: &str) -> String {
    format!("{open}${{1}}{close}")
}
