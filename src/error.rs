//! Errors raised at the file boundary of a conversion.
//!
//! The transformer and assembler are total, so everything that can fail here is either
//! reading the notebook, decoding it, or writing the page.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading a notebook or writing its HTML page.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The file could not be read or written.
    #[error("{}: {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The file is not a notebook we can decode.
    #[error("{} is not a valid notebook: {source}", path.display())]
    Notebook {
        /// Notebook file that failed to decode.
        path: PathBuf,
        /// JSON decoding failure.
        source: serde_json::Error,
    },

    /// Writing the page would clobber the notebook it came from.
    #[error("refusing to overwrite input file {}", path.display())]
    SameOutput {
        /// Path shared by input and output.
        path: PathBuf,
    },
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
