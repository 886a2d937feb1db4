//! Wire encodings for host bindings.
//!
//! Hosts exchange continuous attributes as `f32` with NaN standing for
//! "undefined", enumerations as small `u32` codes and `order` as `i32`.
//! The codes and the packed layout below are fixed for binary
//! compatibility with existing callers.
//!
//! | bits    | attribute         |
//! |---------|-------------------|
//! | 0..4    | `justify_content` |
//! | 4..8    | `align_content`   |
//! | 8..12   | `align_items`     |
//! | 12..16  | `align_self`      |
//! | 16..20  | `position`        |
//! | 20..24  | `direction`       |
//! | 24..28  | `wrap`            |

use crate::error::{Result, TreeError};
use crate::style::{FlexAlign, FlexDirection, FlexPosition, FlexWrap, ItemStyle};
use crate::tree::{ItemId, ItemTree};

/// Decode an optional length from its NaN-sentinel wire form.
#[must_use]
pub fn from_wire(value: f32) -> Option<f32> {
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

/// Encode an optional length, undefined becoming NaN.
#[must_use]
pub fn to_wire(value: Option<f32>) -> f32 {
    value.unwrap_or(f32::NAN)
}

/// Numeric code of an enumerated attribute.
pub trait WireCode: Sized + Copy {
    /// Wire code of this value.
    fn code(self) -> u32;

    /// Value for `code`, or `None` when out of range.
    fn from_code(code: u32) -> Option<Self>;

    /// Like [`WireCode::from_code`], reporting the attribute on failure.
    fn decode(attribute: &'static str, value: u32) -> Result<Self> {
        Self::from_code(value).ok_or_else(|| {
            tracing::warn!(attribute, value, "rejected wire code");
            TreeError::InvalidCode { attribute, value }
        })
    }
}

impl WireCode for FlexAlign {
    fn code(self) -> u32 {
        match self {
            Self::Auto => 0,
            Self::Stretch => 1,
            Self::Center => 2,
            Self::Start => 3,
            Self::End => 4,
            Self::SpaceBetween => 5,
            Self::SpaceAround => 6,
            Self::SpaceEvenly => 7,
        }
    }

    fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            0 => Self::Auto,
            1 => Self::Stretch,
            2 => Self::Center,
            3 => Self::Start,
            4 => Self::End,
            5 => Self::SpaceBetween,
            6 => Self::SpaceAround,
            7 => Self::SpaceEvenly,
            _ => return None,
        })
    }
}

impl WireCode for FlexPosition {
    fn code(self) -> u32 {
        match self {
            Self::Relative => 0,
            Self::Absolute => 1,
        }
    }

    fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Relative),
            1 => Some(Self::Absolute),
            _ => None,
        }
    }
}

impl WireCode for FlexDirection {
    fn code(self) -> u32 {
        match self {
            Self::Row => 0,
            Self::RowReverse => 1,
            Self::Column => 2,
            Self::ColumnReverse => 3,
        }
    }

    fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            0 => Self::Row,
            1 => Self::RowReverse,
            2 => Self::Column,
            3 => Self::ColumnReverse,
            _ => return None,
        })
    }
}

impl WireCode for FlexWrap {
    fn code(self) -> u32 {
        match self {
            Self::NoWrap => 0,
            Self::Wrap => 1,
            Self::WrapReverse => 2,
        }
    }

    fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::NoWrap),
            1 => Some(Self::Wrap),
            2 => Some(Self::WrapReverse),
            _ => None,
        }
    }
}

const FIELD_MASK: u32 = 0xF;

const fn field(packed: u32, shift: u32) -> u32 {
    (packed >> shift) & FIELD_MASK
}

/// The seven enumerated attributes carried by one packed integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnumProps {
    /// `justify_content`
    pub justify_content: FlexAlign,
    /// `align_content`
    pub align_content: FlexAlign,
    /// `align_items`
    pub align_items: FlexAlign,
    /// `align_self`
    pub align_self: FlexAlign,
    /// `position`
    pub position: FlexPosition,
    /// `direction`
    pub direction: FlexDirection,
    /// `wrap`
    pub wrap: FlexWrap,
}

impl EnumProps {
    /// Decode every field of `packed`; fails on the first invalid field.
    pub fn unpack(packed: u32) -> Result<Self> {
        Ok(Self {
            justify_content: FlexAlign::decode("justify_content", field(packed, 0))?,
            align_content: FlexAlign::decode("align_content", field(packed, 4))?,
            align_items: FlexAlign::decode("align_items", field(packed, 8))?,
            align_self: FlexAlign::decode("align_self", field(packed, 12))?,
            position: FlexPosition::decode("position", field(packed, 16))?,
            direction: FlexDirection::decode("direction", field(packed, 20))?,
            wrap: FlexWrap::decode("wrap", field(packed, 24))?,
        })
    }

    /// Encode into the packed layout.
    #[must_use]
    pub fn pack(&self) -> u32 {
        self.justify_content.code()
            | (self.align_content.code() << 4)
            | (self.align_items.code() << 8)
            | (self.align_self.code() << 12)
            | (self.position.code() << 16)
            | (self.direction.code() << 20)
            | (self.wrap.code() << 24)
    }

    /// Snapshot the enumerated attributes of a style.
    #[must_use]
    pub const fn of(style: &ItemStyle) -> Self {
        Self {
            justify_content: style.justify_content,
            align_content: style.align_content,
            align_items: style.align_items,
            align_self: style.align_self,
            position: style.position,
            direction: style.direction,
            wrap: style.wrap,
        }
    }

    /// Write each field through its individual setter.
    pub fn apply(&self, tree: &mut ItemTree, id: ItemId) -> Result<()> {
        tree.set_justify_content(id, self.justify_content)?;
        tree.set_align_content(id, self.align_content)?;
        tree.set_align_items(id, self.align_items)?;
        tree.set_align_self(id, self.align_self)?;
        tree.set_position(id, self.position)?;
        tree.set_direction(id, self.direction)?;
        tree.set_wrap(id, self.wrap)
    }
}

/// Pack the enumerated attributes of `style`.
#[must_use]
pub fn pack_enum_props(style: &ItemStyle) -> u32 {
    EnumProps::of(style).pack()
}
