//! Main-axis resolution for a single flex line.

use flexlay_core::{FlexAlign, ItemId};

use crate::align::spacing;

/// Free space below this magnitude counts as an exact fit.
const EPSILON: f32 = 0.001;

/// An in-flow item as seen by its container during layout.
///
/// All positions and margins are flow-relative: `main_pos` runs from the
/// main-start edge of the content box, `cross_pos` from the cross-start edge.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FlexItem {
    pub(crate) id: ItemId,
    /// Flex grow factor
    pub(crate) grow: f32,
    /// Flex shrink factor
    pub(crate) shrink: f32,
    /// Hypothetical main size before grow/shrink
    pub(crate) base: f32,
    /// Resolved main size
    pub(crate) main: f32,
    /// Cross size (hypothetical until aligned)
    pub(crate) cross: f32,
    /// Whether the cross size comes from a definite attribute
    pub(crate) cross_definite: bool,
    /// Effective cross alignment
    pub(crate) align: FlexAlign,
    pub(crate) margin_main: (f32, f32),
    pub(crate) margin_cross: (f32, f32),
    pub(crate) main_pos: f32,
    pub(crate) cross_pos: f32,
}

impl FlexItem {
    pub(crate) fn outer_base(&self) -> f32 {
        self.base + self.margin_main.0 + self.margin_main.1
    }

    pub(crate) fn outer_main(&self) -> f32 {
        self.main + self.margin_main.0 + self.margin_main.1
    }

    pub(crate) fn outer_cross(&self) -> f32 {
        self.cross + self.margin_cross.0 + self.margin_cross.1
    }
}

/// Distribute `available` main space among the items of one line.
///
/// Positive free space goes to items in proportion to `grow`. A deficit is
/// taken in proportion to `shrink × base`, never pushing an item below
/// zero. When no item carries weight the line is left as it is and may
/// under- or overflow.
pub(crate) fn distribute_flex(items: &mut [FlexItem], available: f32) {
    for item in items.iter_mut() {
        item.main = item.base;
    }
    if items.is_empty() {
        return;
    }

    let used: f32 = items.iter().map(FlexItem::outer_base).sum();
    let remaining = available - used;

    if remaining.abs() < EPSILON {
        return;
    }

    if remaining > 0.0 {
        let total_grow: f32 = items.iter().map(|i| i.grow).sum();
        if total_grow > 0.0 {
            for item in items.iter_mut() {
                item.main = item.base + remaining * item.grow / total_grow;
            }
        }
    } else {
        let total_scaled: f32 = items.iter().map(|i| i.shrink * i.base).sum();
        if total_scaled > 0.0 {
            for item in items.iter_mut() {
                let scaled = item.shrink * item.base;
                item.main = (item.base + remaining * scaled / total_scaled).max(0.0);
            }
        }
    }
}

/// Assign flow-relative main positions to the items of one line, spending
/// leftover space according to `justify`.
pub(crate) fn justify_line(items: &mut [FlexItem], justify: FlexAlign, available: f32) {
    let used: f32 = items.iter().map(FlexItem::outer_main).sum();
    let (lead, gap) = spacing(justify, available - used, items.len());

    let mut pos = lead;
    for item in items.iter_mut() {
        item.main_pos = pos + item.margin_main.0;
        pos += item.outer_main() + gap;
    }
}
