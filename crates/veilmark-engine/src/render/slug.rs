//! Heading anchor ids.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Fallback for headings whose text has no letters or digits.
pub const FALLBACK_SLUG: &str = "section";

/// Generate a GitHub-style slug from heading HTML.
///
/// Tags are dropped and entities decoded first, so `<em class="italic">Véu</em> &amp; Grinalda`
/// and `Véu & Grinalda` give the same slug. Letters are lowercased, whitespace,
/// `-` and `_` become single hyphens, everything else is removed.
pub fn slugify(html: &str) -> String {
    let text = TAG.replace_all(html, "");
    let text = html_escape::decode_html_entities(&text);

    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_hyphen = true;
        }
    }
    slug
}

/// Hands out unique slugs within one document.
///
/// The first heading keeps its slug; repeats get `-1`, `-2`, ...
#[derive(Debug, Default)]
pub struct SlugRegistry {
    seen: HashMap<String, usize>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unique(&mut self, html: &str) -> String {
        let mut base = slugify(html);
        if base.is_empty() {
            base = FALLBACK_SLUG.to_string();
        }

        loop {
            let count = self.seen.entry(base.clone()).or_insert(0);
            let candidate = if *count == 0 {
                base.clone()
            } else {
                format!("{base}-{count}")
            };
            *count += 1;

            // "a-1" may already exist as a literal heading slug
            if candidate == base || !self.seen.contains_key(&candidate) {
                self.seen.entry(candidate.clone()).or_insert(1);
                return candidate;
            }
        }
    }
}
