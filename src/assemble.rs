//! Document assembly: one forward pass over the cells of a notebook.
//!
//! Markdown cells go through the text transformer into `markdown-cell` containers. Code cells
//! are passed through verbatim inside `text/x-sage` scripts, tagged with the section they fall
//! in so that SageCell links them into one evaluation context. The page head is emitted first,
//! which is why sections are counted before the body is built.

use crate::config::Config;
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::notebook::{Cell, Notebook};
use crate::page::{self, PageOptions};
use crate::section::SectionTracker;
use std::fmt::Write;

#[derive(Debug, Clone)]
/// Everything that shapes a page apart from the notebook itself.
pub struct Options {
    /// Title used when the first cell has no heading.
    pub default_title: String,
    /// Title that wins over the one derived from the notebook.
    pub title: Option<String>,
    /// Mask TeX regions from the inline markdown passes.
    pub preserve_math: bool,
    /// Static page furniture.
    pub page: PageOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_title: "Lecture Notes".to_string(),
            title: None,
            preserve_math: true,
            page: PageOptions::default(),
        }
    }
}

impl From<&Config> for Options {
    fn from(cfg: &Config) -> Self {
        Self {
            default_title: cfg.default_title.clone(),
            title: None,
            preserve_math: cfg.preserve_math,
            page: PageOptions {
                stylesheet: cfg.stylesheet.clone(),
                eval_button_text: cfg.eval_button_text.clone(),
                back_link_href: cfg.back_link_href.clone(),
                back_link_text: cfg.back_link_text.clone(),
            },
        }
    }
}

#[must_use]
/// Title taken from a heading on the first line of the first cell, if it is markdown.
///
/// The first cell is the first one on disk, so a dropped leading `raw` cell means no title.
///
/// Leading `#` characters and surrounding whitespace are stripped. A heading with no text
/// yields `None`.
pub fn notebook_title(notebook: &Notebook) -> Option<String> {
    if notebook.leading_cell_dropped {
        return None;
    }
    let Some(Cell::Markdown { source }) = notebook.cells.first() else {
        return None;
    };
    let first_line = source.split('\n').next().unwrap_or_default();
    if !first_line.starts_with('#') {
        return None;
    }
    let title = first_line.trim_start_matches('#').trim();
    (!title.is_empty()).then(|| title.to_string())
}

#[must_use]
/// Number of markdown cells that open a section.
pub fn section_count(notebook: &Notebook, format: &impl Format) -> usize {
    notebook
        .cells
        .iter()
        .filter(|cell| matches!(cell, Cell::Markdown { source } if format.opens_section(source)))
        .count()
}

#[must_use]
/// Render the cells alone, without the page around them.
pub fn render_body(notebook: &Notebook, format: &impl Format) -> String {
    let mut body = String::new();
    let mut sections = SectionTracker::new();

    for cell in &notebook.cells {
        match cell {
            Cell::Markdown { source } => {
                if format.opens_section(source) {
                    let index = sections.advance();
                    tracing::debug!("section {index} opens");
                } else {
                    tracing::debug!("markdown cell stays in section {:?}", sections.current());
                }
                let html = format.render(source);
                write!(body, "<div class=\"markdown-cell\">{html}</div>\n\n").unwrap();
            }
            Cell::Code { source } => {
                let group = sections.group();
                tracing::debug!("code cell in {group}");
                write!(
                    body,
                    "<div class=\"sage-cell {group}\">\n<script type=\"text/x-sage\">\n{source}\n</script>\n</div>\n\n"
                )
                .unwrap();
            }
        }
    }

    body
}

#[must_use]
/// Build the complete HTML page for a notebook.
pub fn assemble(notebook: &Notebook, options: &Options) -> String {
    let format = MarkdownFormat::new(options.preserve_math);
    if notebook.is_empty() {
        tracing::warn!("notebook has no markdown or code cells");
    }

    let title = options
        .title
        .clone()
        .or_else(|| notebook_title(notebook))
        .unwrap_or_else(|| options.default_title.clone());
    let sections = section_count(notebook, &format);
    tracing::debug!("assembling {title:?} with {sections} linked sections");

    let mut html = page::header(&title, sections, &options.page);
    html.push_str(&render_body(notebook, &format));
    html.push_str(&page::footer(&options.page));
    html
}

#[cfg(test)]
#[path = "tests/assemble.rs"]
mod tests;
