//! Partitioning of in-flow items into flex lines.

use std::ops::Range;

use flexlay_core::FlexWrap;

/// One line of a flex container: a run of consecutive items.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FlexLine {
    /// Indices into the container's ordered in-flow items
    pub(crate) items: Range<usize>,
    /// Cross size of the line
    pub(crate) cross: f32,
    /// Flow-relative cross offset inside the content box
    pub(crate) cross_pos: f32,
}

impl FlexLine {
    pub(crate) const fn new(items: Range<usize>) -> Self {
        Self {
            items,
            cross: 0.0,
            cross_pos: 0.0,
        }
    }
}

/// Break items into lines given their outer main sizes.
///
/// Without wrapping every item lands on one line. With wrapping an item
/// starts a new line when the current one is non-empty and the item would
/// push it past `available`; an item larger than `available` still gets a
/// line of its own.
pub(crate) fn break_lines(outer_main: &[f32], wrap: FlexWrap, available: f32) -> Vec<Range<usize>> {
    if outer_main.is_empty() {
        return Vec::new();
    }
    if wrap == FlexWrap::NoWrap {
        return vec![0..outer_main.len()];
    }

    let mut lines = Vec::new();
    let mut start = 0;
    let mut used = 0.0;
    for (i, &size) in outer_main.iter().enumerate() {
        if i > start && used + size > available {
            lines.push(start..i);
            start = i;
            used = 0.0;
        }
        used += size;
    }
    lines.push(start..outer_main.len());
    lines
}
