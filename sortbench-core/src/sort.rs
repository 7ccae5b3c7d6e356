//! Sort Routines Under Test
//!
//! Two variants of the standard stable sort: one that sorts the vector it was
//! handed, and one that sorts a copy. The trial consumes its input either way,
//! so the distinction only matters for what the timed region pays for.

/// Sort routine under test. The name doubles as the mapping key and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SorterKind {
    /// Sort the input vector itself and return it.
    InPlace,
    /// Sort a copy, leaving the (consumed) input untouched.
    Copied,
}

impl SorterKind {
    /// All sorters, in display order.
    pub const ALL: [SorterKind; 2] = [SorterKind::InPlace, SorterKind::Copied];

    /// Short name used in labels and log output.
    pub fn name(&self) -> &'static str {
        match self {
            SorterKind::InPlace => "sort",
            SorterKind::Copied => "sorted",
        }
    }

    /// Sort ascending. Stable, tolerant of empty input and duplicates.
    pub fn sort(&self, input: Vec<u32>) -> Vec<u32> {
        match self {
            SorterKind::InPlace => {
                let mut out = input;
                out.sort();
                out
            }
            SorterKind::Copied => {
                let mut out = input.clone();
                out.sort();
                out
            }
        }
    }
}
