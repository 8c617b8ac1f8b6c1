//! Notebook documents as an ordered run of markdown and code cells.
//!
//! The on-disk format is the Jupyter `.ipynb` JSON layout. Only the cell list is read; each
//! cell contributes its type and its source, which may be stored as one string or as a list of
//! lines that already carry their own newlines.

use crate::error::{ConvertError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One unit of a notebook: prose or executable source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Markdown with embedded TeX.
    Markdown {
        /// Cell text.
        source: String,
    },
    /// Source handed verbatim to the execution widget.
    Code {
        /// Cell text.
        source: String,
    },
}

impl Cell {
    /// Markdown cell from its text.
    pub fn markdown(source: impl Into<String>) -> Self {
        Self::Markdown {
            source: source.into(),
        }
    }

    /// Code cell from its text.
    pub fn code(source: impl Into<String>) -> Self {
        Self::Code {
            source: source.into(),
        }
    }

    #[must_use]
    /// Raw text of the cell regardless of kind.
    pub fn source(&self) -> &str {
        match self {
            Self::Markdown { source } | Self::Code { source } => source,
        }
    }
}

/// Ordered, read-only sequence of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    /// Cells in document order.
    pub cells: Vec<Cell>,
    /// The first cell on disk was of another type (e.g. `raw`) and was dropped.
    pub leading_cell_dropped: bool,
}

/// Top-level `.ipynb` object, reduced to what conversion needs.
#[derive(Debug, Deserialize)]
struct RawNotebook {
    #[serde(default)]
    cells: Vec<RawCell>,
}

#[derive(Debug, Deserialize)]
struct RawCell {
    cell_type: String,
    #[serde(default)]
    source: RawSource,
}

/// Cell text as stored: nbformat allows either shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSource {
    Text(String),
    Lines(Vec<String>),
}

impl Default for RawSource {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl RawSource {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Lines(lines) => lines.concat(),
        }
    }
}

impl Notebook {
    #[must_use]
    /// Wrap cells already in document order.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            leading_cell_dropped: false,
        }
    }

    /// Decode a notebook from its JSON text.
    ///
    /// Cells whose type is neither `markdown` nor `code` are skipped; a skipped first cell is
    /// remembered so the page title is still taken from the real first cell.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the text is not a notebook object.
    pub fn from_json(json_str: &str) -> std::result::Result<Self, serde_json::Error> {
        let raw: RawNotebook = serde_json::from_str(json_str)?;
        let leading_cell_dropped = raw
            .cells
            .first()
            .is_some_and(|cell| !matches!(cell.cell_type.as_str(), "markdown" | "code"));

        let cells: Vec<Cell> = raw
            .cells
            .into_iter()
            .filter_map(|cell| match cell.cell_type.as_str() {
                "markdown" => Some(Cell::markdown(cell.source.into_text())),
                "code" => Some(Cell::code(cell.source.into_text())),
                other => {
                    tracing::debug!("skipping {other} cell");
                    None
                }
            })
            .collect();
        tracing::debug!(
            "{} bytes of cell text",
            cells.iter().map(|cell| cell.source().len()).sum::<usize>()
        );

        Ok(Self {
            cells,
            leading_cell_dropped,
        })
    }

    /// Read and decode a notebook file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not decode as a notebook.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let notebook = Self::from_json(&contents).map_err(|source| ConvertError::Notebook {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("loaded {} cells from {}", notebook.cells.len(), path.display());
        Ok(notebook)
    }

    #[must_use]
    /// Whether the notebook holds no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/notebook.rs"]
mod tests;
