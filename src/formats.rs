//! Format trait and implementations for the prose dialects a notebook cell may carry.
//!
//! This module defines the `Format` trait which abstracts over cell text dialects by
//! providing the rendering to an HTML fragment and the test for whether a cell opens a new
//! section of linked code cells.

pub mod markdown;
pub mod math;

/// A prose dialect the assembler can render.
pub trait Format {
    /// Render cell text as an HTML fragment.
    fn render(&self, source: &str) -> String;

    /// Whether the cell text starts a new section.
    fn opens_section(&self, source: &str) -> bool;
}
