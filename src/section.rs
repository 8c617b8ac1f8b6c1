//! Section tracking for linked code cells.
//!
//! A section is the run of cells under the most recent level 1 or 2 heading. All code cells in
//! one section share a SageCell evaluation context, so the page registers one linked group per
//! section and tags every code cell with the group it belongs to. The tracker is an explicit
//! accumulator owned by a single assembly pass.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Running position in the section sequence of one notebook.
pub struct SectionTracker {
    /// Index of the section being filled, `None` before the first heading.
    current: Option<usize>,
}

impl SectionTracker {
    #[must_use]
    /// Tracker positioned before any section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move into the next section and return its index.
    pub fn advance(&mut self) -> usize {
        let next = self.current.map_or(0, |index| index + 1);
        self.current = Some(next);
        next
    }

    #[must_use]
    /// Index of the section being filled, if a heading has been seen.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    /// Group a code cell at this point belongs to.
    ///
    /// Cells that precede every heading join section 0, so they share state with the first
    /// section rather than being left without a linked group.
    pub fn group(&self) -> SectionGroup {
        SectionGroup(self.current.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A linked evaluation group, rendered as the `sage-section-N` class.
pub struct SectionGroup(pub usize);

impl fmt::Display for SectionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sage-section-{}", self.0)
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
