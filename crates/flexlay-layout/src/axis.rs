//! Mapping between physical (x/y) and flow-relative (main/cross) axes.

use flexlay_core::{Edges, FlexDirection, FlexWrap, ItemStyle, Rect, Size};

/// Main/cross orientation of a container.
///
/// Margins are reported in flow order: the "start" of a reversed axis is its
/// physical end. Positions computed along a reversed axis are mirrored back
/// with [`Axes::main_to_physical`] / [`Axes::cross_to_physical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Axes {
    row: bool,
    main_reverse: bool,
    cross_reverse: bool,
}

impl Axes {
    pub(crate) const fn new(direction: FlexDirection, wrap: FlexWrap) -> Self {
        Self {
            row: direction.is_row(),
            main_reverse: direction.is_reverse(),
            cross_reverse: matches!(wrap, FlexWrap::WrapReverse),
        }
    }

    pub(crate) const fn of(style: &ItemStyle) -> Self {
        Self::new(style.direction, style.wrap)
    }

    pub(crate) const fn main(self, size: Size) -> f32 {
        if self.row {
            size.width
        } else {
            size.height
        }
    }

    pub(crate) const fn cross(self, size: Size) -> f32 {
        if self.row {
            size.height
        } else {
            size.width
        }
    }

    pub(crate) const fn size(self, main: f32, cross: f32) -> Size {
        if self.row {
            Size::new(main, cross)
        } else {
            Size::new(cross, main)
        }
    }

    /// Definite main-axis size attribute of an item.
    pub(crate) const fn main_attr(self, style: &ItemStyle) -> Option<f32> {
        if self.row {
            style.width
        } else {
            style.height
        }
    }

    /// Definite cross-axis size attribute of an item.
    pub(crate) const fn cross_attr(self, style: &ItemStyle) -> Option<f32> {
        if self.row {
            style.height
        } else {
            style.width
        }
    }

    /// `(start, end)` margins along the main axis, in flow order.
    pub(crate) const fn main_margins(self, margin: &Edges) -> (f32, f32) {
        let (start, end) = if self.row {
            (margin.left, margin.right)
        } else {
            (margin.top, margin.bottom)
        };
        if self.main_reverse {
            (end, start)
        } else {
            (start, end)
        }
    }

    /// `(start, end)` margins along the cross axis, in flow order.
    pub(crate) const fn cross_margins(self, margin: &Edges) -> (f32, f32) {
        let (start, end) = if self.row {
            (margin.top, margin.bottom)
        } else {
            (margin.left, margin.right)
        };
        if self.cross_reverse {
            (end, start)
        } else {
            (start, end)
        }
    }

    /// Total padding along the main axis.
    pub(crate) fn main_padding(self, padding: &Edges) -> f32 {
        if self.row {
            padding.horizontal()
        } else {
            padding.vertical()
        }
    }

    /// Total padding along the cross axis.
    pub(crate) fn cross_padding(self, padding: &Edges) -> f32 {
        if self.row {
            padding.vertical()
        } else {
            padding.horizontal()
        }
    }

    pub(crate) fn main_to_physical(self, pos: f32, size: f32, extent: f32) -> f32 {
        if self.main_reverse {
            extent - pos - size
        } else {
            pos
        }
    }

    pub(crate) fn cross_to_physical(self, pos: f32, size: f32, extent: f32) -> f32 {
        if self.cross_reverse {
            extent - pos - size
        } else {
            pos
        }
    }

    /// Frame in the container's coordinate space from flow-relative values
    /// already mapped to physical offsets inside `content`.
    pub(crate) fn frame(self, content: Rect, main_pos: f32, cross_pos: f32, size: Size) -> Rect {
        let (dx, dy) = if self.row {
            (main_pos, cross_pos)
        } else {
            (cross_pos, main_pos)
        };
        Rect::new(content.x + dx, content.y + dy, size.width, size.height)
    }
}
