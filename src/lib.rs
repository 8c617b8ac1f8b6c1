//! sagenote: render notebooks as static HTML pages with live SageCells.
//!
//! Markdown cells are converted by a small regex pipeline that leaves TeX for MathJax, and code
//! cells become SageCell widgets linked per section of the notebook.

pub mod assemble;
pub mod config;
pub mod error;
pub mod formats;
pub mod logging;
pub mod notebook;
pub mod page;
pub mod section;

use crate::assemble::Options;
use crate::error::{ConvertError, Result};
use crate::notebook::Notebook;
use std::fs;
use std::path::{Path, PathBuf};

#[must_use]
/// Output path used when none is given: the input with an `html` extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("html")
}

/// Convert the notebook at `input` and write the page to `output`.
///
/// The page is built fully in memory before anything is written.
///
/// # Errors
///
/// Returns an error if the notebook cannot be read or decoded, if `output` names the input
/// file, or if the page cannot be written.
pub fn convert_file(input: &Path, output: &Path, options: &Options) -> Result<()> {
    if input == output {
        return Err(ConvertError::SameOutput {
            path: input.to_path_buf(),
        });
    }

    let notebook = Notebook::load(input)?;
    let html = assemble::assemble(&notebook, options);

    fs::write(output, html).map_err(|source| ConvertError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!("wrote {}", output.display());

    Ok(())
}
