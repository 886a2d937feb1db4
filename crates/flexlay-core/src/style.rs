//! Per-item layout attributes.

use serde::{Deserialize, Serialize};

use crate::geometry::Edges;

/// Direction of the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexDirection {
    /// Horizontal (left to right)
    Row,
    /// Horizontal (right to left)
    RowReverse,
    /// Vertical (top to bottom)
    #[default]
    Column,
    /// Vertical (bottom to top)
    ColumnReverse,
}

impl FlexDirection {
    /// Whether the main axis is horizontal.
    #[must_use]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    /// Whether items are placed from the main-axis end.
    #[must_use]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

/// Line wrapping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexWrap {
    /// All items on a single line
    #[default]
    NoWrap,
    /// Break into lines stacked from the cross start
    Wrap,
    /// Break into lines stacked from the cross end
    WrapReverse,
}

/// Alignment shared by `justify_content`, `align_content`, `align_items`
/// and `align_self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexAlign {
    /// Inherit from the container (only meaningful for `align_self`)
    #[default]
    Auto,
    /// Stretch to fill
    Stretch,
    /// Center
    Center,
    /// Pack at the start
    Start,
    /// Pack at the end
    End,
    /// Distribute space between items, none at the edges
    SpaceBetween,
    /// Distribute space around items, half-size at the edges
    SpaceAround,
    /// Distribute space evenly, including edges
    SpaceEvenly,
}

/// Positioning mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexPosition {
    /// Participates in flex flow
    #[default]
    Relative,
    /// Removed from flow and pinned against the container's content box
    Absolute,
}

/// The property table of a single item.
///
/// `None` in a size, offset or basis field means "undefined"; any `Some`
/// value, including zero, is a definite constraint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemStyle {
    /// Definite width
    pub width: Option<f32>,
    /// Definite height
    pub height: Option<f32>,

    /// Left offset (absolute items)
    pub left: Option<f32>,
    /// Right offset (absolute items)
    pub right: Option<f32>,
    /// Top offset (absolute items)
    pub top: Option<f32>,
    /// Bottom offset (absolute items)
    pub bottom: Option<f32>,

    /// Inner spacing
    pub padding: Edges,
    /// Outer spacing
    pub margin: Edges,

    /// Main-axis distribution of leftover space
    pub justify_content: FlexAlign,
    /// Cross-axis distribution of lines
    pub align_content: FlexAlign,
    /// Default cross-axis alignment of children
    pub align_items: FlexAlign,
    /// Cross-axis alignment override for this item
    pub align_self: FlexAlign,

    /// Positioning mode
    pub position: FlexPosition,
    /// Main axis of this item's children
    pub direction: FlexDirection,
    /// Line wrapping of this item's children
    pub wrap: FlexWrap,

    /// Flex grow factor
    pub grow: f32,
    /// Flex shrink factor
    pub shrink: f32,
    /// Secondary sort key for layout order
    pub order: i32,
    /// Flex basis (initial main size)
    pub basis: Option<f32>,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            left: None,
            right: None,
            top: None,
            bottom: None,
            padding: Edges::ZERO,
            margin: Edges::ZERO,
            justify_content: FlexAlign::Start,
            align_content: FlexAlign::Stretch,
            align_items: FlexAlign::Stretch,
            align_self: FlexAlign::Auto,
            position: FlexPosition::Relative,
            direction: FlexDirection::Column,
            wrap: FlexWrap::NoWrap,
            grow: 0.0,
            shrink: 1.0,
            order: 0,
            basis: None,
        }
    }
}

impl ItemStyle {
    /// Create a style with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set width and height.
    #[must_use]
    pub const fn size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the width.
    #[must_use]
    pub const fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the height.
    #[must_use]
    pub const fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the padding.
    #[must_use]
    pub const fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Set the margin.
    #[must_use]
    pub const fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    /// Set the main axis.
    #[must_use]
    pub const fn direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the wrapping mode.
    #[must_use]
    pub const fn wrap(mut self, wrap: FlexWrap) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set `justify_content`.
    #[must_use]
    pub const fn justify_content(mut self, align: FlexAlign) -> Self {
        self.justify_content = align;
        self
    }

    /// Set `align_content`.
    #[must_use]
    pub const fn align_content(mut self, align: FlexAlign) -> Self {
        self.align_content = align;
        self
    }

    /// Set `align_items`.
    #[must_use]
    pub const fn align_items(mut self, align: FlexAlign) -> Self {
        self.align_items = align;
        self
    }

    /// Set self alignment.
    #[must_use]
    pub const fn align_self(mut self, align: FlexAlign) -> Self {
        self.align_self = align;
        self
    }

    /// Make the item absolutely positioned.
    #[must_use]
    pub const fn absolute(mut self) -> Self {
        self.position = FlexPosition::Absolute;
        self
    }

    /// Set the grow factor.
    #[must_use]
    pub const fn grow(mut self, grow: f32) -> Self {
        self.grow = grow;
        self
    }

    /// Set the shrink factor.
    #[must_use]
    pub const fn shrink(mut self, shrink: f32) -> Self {
        self.shrink = shrink;
        self
    }

    /// Set the order key.
    #[must_use]
    pub const fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Set the basis.
    #[must_use]
    pub const fn basis(mut self, basis: f32) -> Self {
        self.basis = Some(basis);
        self
    }

    /// Whether the item is laid out in flow.
    #[must_use]
    pub const fn is_in_flow(&self) -> bool {
        matches!(self.position, FlexPosition::Relative)
    }
}
