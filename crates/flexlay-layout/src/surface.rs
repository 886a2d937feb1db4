//! Flat handle-based surface for host bindings.
//!
//! [`FlexSurface`] owns an [`ItemTree`] and a [`LayoutEngine`] and exposes
//! every operation with wire types: lengths as `f32` with NaN for
//! "undefined", enumerations as `u32` codes, `order` as `i32`, child indices
//! as `u32`.

use flexlay_core::wire::{from_wire, to_wire, EnumProps, WireCode};
use flexlay_core::{
    Edges, FlexAlign, FlexDirection, FlexPosition, FlexWrap, ItemId, ItemTree, Result,
    SizingHook,
};

use crate::engine::LayoutEngine;

/// Item tree plus engine behind a flat, wire-typed API.
#[derive(Debug, Default)]
pub struct FlexSurface {
    tree: ItemTree,
    engine: LayoutEngine,
}

impl FlexSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Underlying tree.
    #[must_use]
    pub const fn tree(&self) -> &ItemTree {
        &self.tree
    }

    /// Underlying tree, mutably.
    pub fn tree_mut(&mut self) -> &mut ItemTree {
        &mut self.tree
    }

    /// Engine used by [`FlexSurface::layout`].
    #[must_use]
    pub const fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    // =========================================================================
    // Lifecycle and structure
    // =========================================================================

    /// Create a detached item with default attributes.
    pub fn create(&mut self) -> ItemId {
        self.tree.create_item()
    }

    /// Free a detached item and its subtree.
    pub fn free(&mut self, id: ItemId) -> Result<()> {
        self.tree.free_item(id)
    }

    /// Append `child` to `parent`.
    pub fn add(&mut self, parent: ItemId, child: ItemId) -> Result<()> {
        self.tree.append_child(parent, child)
    }

    /// Insert `child` at `index` (clamped to the child count).
    pub fn insert(&mut self, parent: ItemId, index: u32, child: ItemId) -> Result<()> {
        self.tree.insert_child(parent, index as usize, child)
    }

    /// Detach the child at `index`.
    pub fn remove(&mut self, parent: ItemId, index: u32) -> Result<Option<ItemId>> {
        self.tree.remove_child(parent, index as usize)
    }

    /// Number of children.
    pub fn count(&self, id: ItemId) -> Result<u32> {
        Ok(u32::try_from(self.tree.child_count(id)?).unwrap_or(u32::MAX))
    }

    /// Child at `index`.
    pub fn child(&self, id: ItemId, index: u32) -> Result<Option<ItemId>> {
        self.tree.child(id, index as usize)
    }

    /// Parent of `id`.
    pub fn parent(&self, id: ItemId) -> Result<Option<ItemId>> {
        self.tree.parent(id)
    }

    /// Topmost ancestor of `id`.
    pub fn root(&self, id: ItemId) -> Result<ItemId> {
        self.tree.root(id)
    }

    /// Lay out the tree rooted at `root`.
    pub fn layout(&mut self, root: ItemId) -> Result<()> {
        self.engine.compute(&mut self.tree, root)
    }

    // =========================================================================
    // Frame readback
    // =========================================================================

    /// Frame x relative to the parent.
    pub fn frame_x(&self, id: ItemId) -> Result<f32> {
        Ok(self.tree.frame(id)?.x)
    }

    /// Frame y relative to the parent.
    pub fn frame_y(&self, id: ItemId) -> Result<f32> {
        Ok(self.tree.frame(id)?.y)
    }

    /// Frame width.
    pub fn frame_width(&self, id: ItemId) -> Result<f32> {
        Ok(self.tree.frame(id)?.width)
    }

    /// Frame height.
    pub fn frame_height(&self, id: ItemId) -> Result<f32> {
        Ok(self.tree.frame(id)?.height)
    }

    // =========================================================================
    // Host data
    // =========================================================================

    /// Opaque host value stored on the item.
    pub fn managed_ptr(&self, id: ItemId) -> Result<usize> {
        self.tree.managed_ptr(id)
    }

    /// Store an opaque host value on the item.
    pub fn set_managed_ptr(&mut self, id: ItemId, ptr: usize) -> Result<()> {
        self.tree.set_managed_ptr(id, ptr)
    }

    /// Install or clear the item's self-sizing hook.
    pub fn set_self_sizing(&mut self, id: ItemId, hook: Option<SizingHook>) -> Result<()> {
        self.tree.set_self_sizing(id, hook)
    }

    // =========================================================================
    // Batch setters
    // =========================================================================

    /// Decode a packed enum integer and apply all seven fields.
    ///
    /// Nothing is written unless every field decodes.
    pub fn set_enum_props_batch(&mut self, id: ItemId, packed: u32) -> Result<()> {
        let props = EnumProps::unpack(packed)?;
        props.apply(&mut self.tree, id)
    }

    /// Packed enum integer of the item's current attributes.
    pub fn enum_props_batch(&self, id: ItemId) -> Result<u32> {
        Ok(EnumProps::of(self.tree.style(id)?).pack())
    }

    /// Set `top`, `right`, `bottom` and `left`.
    pub fn set_location(
        &mut self,
        id: ItemId,
        top: f32,
        right: f32,
        bottom: f32,
        left: f32,
    ) -> Result<()> {
        self.tree.set_location(
            id,
            from_wire(top),
            from_wire(right),
            from_wire(bottom),
            from_wire(left),
        )
    }

    /// Set `width` and `height`.
    pub fn set_size(&mut self, id: ItemId, width: f32, height: f32) -> Result<()> {
        self.tree.set_size(id, from_wire(width), from_wire(height))
    }

    /// Set the four margins.
    pub fn set_margin(
        &mut self,
        id: ItemId,
        top: f32,
        right: f32,
        bottom: f32,
        left: f32,
    ) -> Result<()> {
        self.tree.set_margin(id, Edges::new(top, right, bottom, left))
    }

    /// Set the four paddings.
    pub fn set_padding(
        &mut self,
        id: ItemId,
        top: f32,
        right: f32,
        bottom: f32,
        left: f32,
    ) -> Result<()> {
        self.tree.set_padding(id, Edges::new(top, right, bottom, left))
    }

    /// Set all four margins to `value`.
    pub fn set_uni_margin(&mut self, id: ItemId, value: f32) -> Result<()> {
        self.tree.set_uni_margin(id, value)
    }

    /// Set all four paddings to `value`.
    pub fn set_uni_padding(&mut self, id: ItemId, value: f32) -> Result<()> {
        self.tree.set_uni_padding(id, value)
    }

    /// Set `grow`, `shrink`, `order` and `basis`.
    pub fn set_misc(
        &mut self,
        id: ItemId,
        grow: f32,
        shrink: f32,
        order: i32,
        basis: f32,
    ) -> Result<()> {
        self.tree
            .set_misc(id, grow, shrink, order, from_wire(basis))
    }
}

macro_rules! optional_length {
    ($($get:ident, $set:ident;)*) => {
        impl FlexSurface {
            $(
                #[doc = concat!("`", stringify!($get), "` in wire form (NaN when undefined).")]
                pub fn $get(&self, id: ItemId) -> Result<f32> {
                    Ok(to_wire(self.tree.$get(id)?))
                }

                #[doc = concat!("Set `", stringify!($get), "`; NaN clears it.")]
                pub fn $set(&mut self, id: ItemId, value: f32) -> Result<()> {
                    self.tree.$set(id, from_wire(value))
                }
            )*
        }
    };
}

macro_rules! plain_value {
    ($($get:ident, $set:ident: $ty:ty;)*) => {
        impl FlexSurface {
            $(
                #[doc = concat!("`", stringify!($get), "` attribute.")]
                pub fn $get(&self, id: ItemId) -> Result<$ty> {
                    self.tree.$get(id)
                }

                #[doc = concat!("Set `", stringify!($get), "`.")]
                pub fn $set(&mut self, id: ItemId, value: $ty) -> Result<()> {
                    self.tree.$set(id, value)
                }
            )*
        }
    };
}

macro_rules! enum_code {
    ($($get:ident, $set:ident: $ty:ty;)*) => {
        impl FlexSurface {
            $(
                #[doc = concat!("`", stringify!($get), "` as its wire code.")]
                pub fn $get(&self, id: ItemId) -> Result<u32> {
                    Ok(self.tree.$get(id)?.code())
                }

                #[doc = concat!("Set `", stringify!($get), "` from a wire code; unknown codes are rejected.")]
                pub fn $set(&mut self, id: ItemId, code: u32) -> Result<()> {
                    let value = <$ty>::decode(stringify!($get), code)?;
                    self.tree.$set(id, value)
                }
            )*
        }
    };
}

optional_length! {
    width, set_width;
    height, set_height;
    left, set_left;
    right, set_right;
    top, set_top;
    bottom, set_bottom;
    basis, set_basis;
}

plain_value! {
    padding_left, set_padding_left: f32;
    padding_right, set_padding_right: f32;
    padding_top, set_padding_top: f32;
    padding_bottom, set_padding_bottom: f32;
    margin_left, set_margin_left: f32;
    margin_right, set_margin_right: f32;
    margin_top, set_margin_top: f32;
    margin_bottom, set_margin_bottom: f32;
    grow, set_grow: f32;
    shrink, set_shrink: f32;
    order, set_order: i32;
}

enum_code! {
    justify_content, set_justify_content: FlexAlign;
    align_content, set_align_content: FlexAlign;
    align_items, set_align_items: FlexAlign;
    align_self, set_align_self: FlexAlign;
    position, set_position: FlexPosition;
    direction, set_direction: FlexDirection;
    wrap, set_wrap: FlexWrap;
}
