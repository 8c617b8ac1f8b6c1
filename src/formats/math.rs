//! TeX span masking.
//!
//! The inline markdown passes are plain regex substitutions, and several of their markers
//! (`*`, `_`, `` ` ``) are ordinary TeX characters. Before those passes run, every math region is
//! swapped for an opaque placeholder built from private-use code points, and swapped back once
//! they are done, so the bytes between math delimiters reach MathJax untouched.

use regex::{Captures, Regex};
use std::sync::LazyLock;

const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

/// Code spans first so a `$` inside one never opens math, then escaped dollars, then display
/// before inline.
static MATH_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)`[^`]+`|\\\$|\$\$.+?\$\$|\\\[.+?\\\]|\\\(.+?\\\)|\$[^$\n]+?\$").unwrap()
});

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{E000}([0-9]+)\u{E001}").unwrap());

/// Text with its math regions lifted out.
#[derive(Debug, Default)]
pub struct MaskedMath {
    text: String,
    spans: Vec<String>,
}

impl MaskedMath {
    #[must_use]
    /// Replace every math region of `text` with a placeholder.
    ///
    /// Text that already contains the placeholder code points is left as is, since the
    /// placeholders could not be told apart from the author's own characters.
    pub fn mask(text: &str) -> Self {
        if text.contains(OPEN) || text.contains(CLOSE) {
            tracing::debug!("private-use code points in cell, math left unmasked");
            return Self {
                text: text.to_string(),
                spans: Vec::new(),
            };
        }

        let mut spans = Vec::new();
        let masked = MATH_SPAN.replace_all(text, |caps: &Captures| {
            if caps[0].starts_with('`') {
                return caps[0].to_string();
            }
            let placeholder = format!("{OPEN}{}{CLOSE}", spans.len());
            spans.push(caps[0].to_string());
            placeholder
        });

        Self {
            text: masked.into_owned(),
            spans,
        }
    }

    #[must_use]
    /// The masked text.
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    /// Number of math regions lifted out.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    #[must_use]
    /// Whether no math region was found.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    #[must_use]
    /// Put the math regions back into `text`, a transformed version of [`Self::text`].
    pub fn restore(&self, text: &str) -> String {
        if self.spans.is_empty() {
            return text.to_string();
        }
        PLACEHOLDER
            .replace_all(text, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.spans.get(index))
                    .map_or_else(|| caps[0].to_string(), Clone::clone)
            })
            .into_owned()
    }
}

#[cfg(test)]
#[path = "../tests/math.rs"]
mod tests;
