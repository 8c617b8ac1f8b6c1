//! Markdown format implementation using an ordered chain of regex passes.
//!
//! Cells are converted string-to-string, without building a document tree, so that TeX the
//! author wrote between math delimiters survives byte for byte. The passes run in a fixed
//! order and each one sees the output of the last:
//!
//! 1. ATX headings, deepest level first
//! 2. `**bold**`
//! 3. `*italic*`
//! 4. `_italic_`
//! 5. `` `code` ``
//! 6. flat ordered and unordered lists
//! 7. paragraphs split on blank lines
//!
//! With the math guard on, passes 2 to 6 only ever see TeX regions as opaque placeholders.

use crate::formats::math::MaskedMath;
use crate::formats::Format;
use regex::{Captures, Regex};
use std::fmt::Write;
use std::sync::LazyLock;

/// Heading patterns paired with their level, from `######` down to `#`.
static HEADINGS: LazyLock<Vec<(usize, Regex)>> = LazyLock::new(|| {
    (1..=6)
        .rev()
        .map(|level| {
            let pattern = format!(r"(?m)^#{{{level}}}\s+(.+)$");
            (level, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// A level 1 or 2 heading anywhere in the cell.
static SECTION_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#{1,2}\s+").unwrap());

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b_(.+?)_\b").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+").unwrap());
static UNORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*]\s+").unwrap());

static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Prefixes of blocks that are already HTML and must not be wrapped in `<p>`.
const BLOCK_PREFIXES: [&str; 6] = ["<h", "<ol", "<ul", "<li>", "</", "<div"];

/// Markdown with embedded TeX, rendered by regex passes.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownFormat {
    /// Mask TeX regions before the inline passes run.
    pub preserve_math: bool,
}

impl Default for MarkdownFormat {
    fn default() -> Self {
        Self {
            preserve_math: true,
        }
    }
}

impl MarkdownFormat {
    #[must_use]
    /// Markdown renderer with the math guard switched on or off.
    pub fn new(preserve_math: bool) -> Self {
        Self { preserve_math }
    }
}

impl Format for MarkdownFormat {
    fn render(&self, source: &str) -> String {
        let html = headings(source);

        let html = if self.preserve_math {
            let masked = MaskedMath::mask(&html);
            if !masked.is_empty() {
                tracing::trace!("masked {} math regions", masked.len());
            }
            masked.restore(&lists(&inline(masked.text())))
        } else {
            lists(&inline(&html))
        };

        paragraphs(&html)
    }

    fn opens_section(&self, source: &str) -> bool {
        SECTION_HEADING.is_match(source)
    }
}

/// Convert markdown to HTML with the math guard on.
#[must_use]
pub fn markdown_to_html(markdown: &str) -> String {
    MarkdownFormat::default().render(markdown)
}

fn headings(text: &str) -> String {
    let mut html = text.to_string();
    for (level, pattern) in HEADINGS.iter() {
        html = pattern
            .replace_all(&html, |caps: &Captures| {
                format!("<h{level}>{}</h{level}>", caps[1].trim())
            })
            .into_owned();
    }
    html
}

/// Bold, both italics and code spans, in that order.
fn inline(text: &str) -> String {
    let html = BOLD.replace_all(text, "<strong>${1}</strong>");
    let html = ITALIC_STAR.replace_all(&html, "<em>${1}</em>");
    let html = ITALIC_UNDERSCORE.replace_all(&html, "<em>${1}</em>");
    INLINE_CODE
        .replace_all(&html, "<code>${1}</code>")
        .into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Ordered => "ol",
            Self::Unordered => "ul",
        }
    }

    /// Classify a line, returning the item text with its marker stripped.
    fn item(line: &str) -> Option<(Self, &str)> {
        if let Some(marker) = ORDERED_ITEM.find(line) {
            Some((Self::Ordered, &line[marker.end()..]))
        } else {
            UNORDERED_ITEM
                .find(line)
                .map(|marker| (Self::Unordered, &line[marker.end()..]))
        }
    }
}

/// Group consecutive item lines into flat lists.
///
/// The open tag is glued to the first item and the close tag to the last, so a list stays a
/// single run of lines for the paragraph pass.
fn lists(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut open: Option<ListKind> = None;

    for line in text.split('\n') {
        if let Some((kind, content)) = ListKind::item(line) {
            let mut entry = String::new();
            if open != Some(kind) {
                close_list(&mut lines, open);
                write!(entry, r#"<{} class="indented-list">"#, kind.tag()).unwrap();
                open = Some(kind);
            }
            write!(entry, "<li>{content}</li>").unwrap();
            lines.push(entry);
        } else {
            close_list(&mut lines, open.take());
            lines.push(line.to_string());
        }
    }
    close_list(&mut lines, open);

    lines.join("\n")
}

fn close_list(lines: &mut [String], open: Option<ListKind>) {
    if let (Some(kind), Some(last)) = (open, lines.last_mut()) {
        write!(last, "</{}>", kind.tag()).unwrap();
    }
}

fn paragraphs(text: &str) -> String {
    BLANK_LINES
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            if is_block_level(block) || is_display_math(block) {
                block.to_string()
            } else {
                format!("<p>{block}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_block_level(block: &str) -> bool {
    BLOCK_PREFIXES
        .iter()
        .any(|prefix| block.starts_with(prefix))
}

fn is_display_math(block: &str) -> bool {
    block.starts_with("$$") || block.ends_with("$$")
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
