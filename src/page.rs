//! The fixed page around the converted cells.
//!
//! The head (styles, SageCell and MathJax loaders) and the navigation footer are static assets
//! compiled into the binary. Only a handful of `{{name}}` slots vary between pages: the title,
//! the stylesheet, the footer link and one SageCell registration per section.

use crate::section::SectionGroup;
use regex::{Captures, Regex};
use std::sync::LazyLock;

const HEADER: &str = include_str!("templates/header.html");
const FOOTER: &str = include_str!("templates/footer.html");
const SAGECELL: &str = include_str!("templates/sagecell.js");

static SLOT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
/// Page furniture that does not depend on the notebook.
pub struct PageOptions {
    /// Stylesheet linked from the head.
    pub stylesheet: String,
    /// Label on each evaluate button.
    pub eval_button_text: String,
    /// Target of the footer link.
    pub back_link_href: String,
    /// Text of the footer link.
    pub back_link_text: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            stylesheet: "style.css".to_string(),
            eval_button_text: "Run".to_string(),
            back_link_href: "lecture-notes.html".to_string(),
            back_link_text: "← Back to Lecture Notes".to_string(),
        }
    }
}

/// Fill `{{name}}` slots in one pass, so substituted text is never itself expanded.
fn fill(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    SLOT.replace_all(template, |caps: &Captures| {
        lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    })
    .into_owned()
}

#[must_use]
/// One linked SageCell group per section, for sections `0..section_count`.
pub fn sagecell_setup(section_count: usize, eval_button_text: &str) -> String {
    let label = js_string_escape(eval_button_text);
    (0..section_count)
        .map(|index| {
            fill(SAGECELL, |slot| match slot {
                "group" => Some(SectionGroup(index).to_string()),
                "eval_button_text" => Some(label.clone()),
                _ => None,
            })
        })
        .collect()
}

#[must_use]
/// Document head and the opening `<body>` tag.
pub fn header(title: &str, section_count: usize, options: &PageOptions) -> String {
    fill(HEADER, |slot| match slot {
        "title" => Some(html_escape(title)),
        "stylesheet" => Some(html_escape(&options.stylesheet)),
        "sagecell_setup" => Some(sagecell_setup(section_count, &options.eval_button_text)),
        _ => None,
    })
}

#[must_use]
/// Navigation footer and the closing tags.
pub fn footer(options: &PageOptions) -> String {
    fill(FOOTER, |slot| match slot {
        "back_link_href" => Some(html_escape(&options.back_link_href)),
        "back_link_text" => Some(html_escape(&options.back_link_text)),
        _ => None,
    })
}

/// Escape text for an HTML text node or a double-quoted attribute.
#[must_use]
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn js_string_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '<' => out.push_str("\\x3c"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/page.rs"]
mod tests;
