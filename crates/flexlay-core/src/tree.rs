//! Arena-backed item tree.
//!
//! Items live in slots of an [`ItemTree`] and are addressed by generational
//! [`ItemId`] handles. Parent/child links are stored as handles, so attaching
//! checks ancestry up front and the tree can never become cyclic.

use std::fmt;

use crate::error::{Result, TreeError};
use crate::geometry::{Edges, Rect};
use crate::sizing::SizingHook;
use crate::style::{FlexAlign, FlexDirection, FlexPosition, FlexWrap, ItemStyle};

/// Opaque handle to an item of an [`ItemTree`].
///
/// A handle stays valid until its item is freed. Freed slots are reused
/// with a bumped generation, so an old handle never aliases a new item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId {
    index: u32,
    generation: u32,
}

impl ItemId {
    const fn slot(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    style: ItemStyle,
    children: Vec<ItemId>,
    parent: Option<ItemId>,
    frame: Rect,
    managed_ptr: usize,
    self_sizing: Option<SizingHook>,
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Owner of every item and of the parent/child relation between them.
#[derive(Debug, Clone, Default)]
pub struct ItemTree {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
}

impl ItemTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unattached item with default attributes.
    pub fn create_item(&mut self) -> ItemId {
        self.create_with_style(ItemStyle::default())
    }

    /// Create an unattached item with the given attributes.
    pub fn create_with_style(&mut self, style: ItemStyle) -> ItemId {
        let node = Node {
            style,
            ..Node::default()
        };
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            ItemId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            ItemId {
                index,
                generation: 0,
            }
        }
    }

    /// Whether `id` refers to a live item.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.node(id).is_ok()
    }

    /// Number of live items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Whether the tree holds no live items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn node(&self, id: ItemId) -> Result<&Node> {
        self.slots
            .get(id.slot())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
            .ok_or(TreeError::StaleItem(id))
    }

    fn node_mut(&mut self, id: ItemId) -> Result<&mut Node> {
        self.slots
            .get_mut(id.slot())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
            .ok_or(TreeError::StaleItem(id))
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Attach `child` at the end of `parent`'s children.
    pub fn append_child(&mut self, parent: ItemId, child: ItemId) -> Result<()> {
        self.insert_child(parent, usize::MAX, child)
    }

    /// Attach `child` at `index` among `parent`'s children.
    ///
    /// An index past the end appends. A child that already has a parent is
    /// detached from it first.
    pub fn insert_child(&mut self, parent: ItemId, index: usize, child: ItemId) -> Result<()> {
        self.node(parent)?;
        self.node(child)?;
        if self.is_ancestor_or_self(child, parent)? {
            tracing::debug!(%parent, %child, "rejected cyclic attach");
            return Err(TreeError::Cycle { parent, child });
        }

        self.detach(child)?;

        let siblings = &mut self.node_mut(parent)?.children;
        let index = index.min(siblings.len());
        siblings.insert(index, child);
        self.node_mut(child)?.parent = Some(parent);
        tracing::trace!(%parent, %child, index, "attached item");
        Ok(())
    }

    /// Detach and return the child at `index`, or `None` when out of range.
    pub fn remove_child(&mut self, parent: ItemId, index: usize) -> Result<Option<ItemId>> {
        let siblings = &mut self.node_mut(parent)?.children;
        if index >= siblings.len() {
            return Ok(None);
        }
        let child = siblings.remove(index);
        self.node_mut(child)?.parent = None;
        Ok(Some(child))
    }

    fn detach(&mut self, child: ItemId) -> Result<()> {
        if let Some(old_parent) = self.node_mut(child)?.parent.take() {
            self.node_mut(old_parent)?.children.retain(|&c| c != child);
        }
        Ok(())
    }

    fn is_ancestor_or_self(&self, ancestor: ItemId, mut item: ItemId) -> Result<bool> {
        loop {
            if item == ancestor {
                return Ok(true);
            }
            match self.node(item)?.parent {
                Some(parent) => item = parent,
                None => return Ok(false),
            }
        }
    }

    /// Number of children of `id`.
    pub fn child_count(&self, id: ItemId) -> Result<usize> {
        Ok(self.node(id)?.children.len())
    }

    /// Child of `id` at `index`, or `None` when out of range.
    pub fn child(&self, id: ItemId, index: usize) -> Result<Option<ItemId>> {
        Ok(self.node(id)?.children.get(index).copied())
    }

    /// Children of `id` in insertion order.
    pub fn children(&self, id: ItemId) -> Result<&[ItemId]> {
        Ok(&self.node(id)?.children)
    }

    /// Parent of `id`, if attached.
    pub fn parent(&self, id: ItemId) -> Result<Option<ItemId>> {
        Ok(self.node(id)?.parent)
    }

    /// Topmost ancestor of `id` (`id` itself when unattached).
    pub fn root(&self, id: ItemId) -> Result<ItemId> {
        let mut item = id;
        while let Some(parent) = self.node(item)?.parent {
            item = parent;
        }
        Ok(item)
    }

    /// Free a root item and its whole subtree.
    ///
    /// Every handle into the subtree becomes stale. Attached items are
    /// rejected since their parent owns them.
    pub fn free_item(&mut self, id: ItemId) -> Result<()> {
        if self.node(id)?.parent.is_some() {
            return Err(TreeError::Attached(id));
        }

        let mut stack = vec![id];
        let mut freed = 0usize;
        while let Some(item) = stack.pop() {
            let slot = &mut self.slots[item.slot()];
            if let Some(node) = slot.node.take() {
                stack.extend(node.children);
                slot.generation = slot.generation.wrapping_add(1);
                self.free_list.push(item.index);
                freed += 1;
            }
        }
        tracing::debug!(root = %id, freed, "freed subtree");
        Ok(())
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Attributes of `id`.
    pub fn style(&self, id: ItemId) -> Result<&ItemStyle> {
        Ok(&self.node(id)?.style)
    }

    /// Mutable attributes of `id`.
    pub fn style_mut(&mut self, id: ItemId) -> Result<&mut ItemStyle> {
        Ok(&mut self.node_mut(id)?.style)
    }

    /// Opaque host token of `id` (0 when unset).
    pub fn managed_ptr(&self, id: ItemId) -> Result<usize> {
        Ok(self.node(id)?.managed_ptr)
    }

    /// Store an opaque host token on `id`.
    pub fn set_managed_ptr(&mut self, id: ItemId, ptr: usize) -> Result<()> {
        self.node_mut(id)?.managed_ptr = ptr;
        Ok(())
    }

    /// Self-sizing hook of `id`.
    pub fn self_sizing(&self, id: ItemId) -> Result<Option<&SizingHook>> {
        Ok(self.node(id)?.self_sizing.as_ref())
    }

    /// Install or clear the self-sizing hook of `id`.
    pub fn set_self_sizing(&mut self, id: ItemId, hook: Option<SizingHook>) -> Result<()> {
        self.node_mut(id)?.self_sizing = hook;
        Ok(())
    }

    /// Set the four margins.
    pub fn set_margin(&mut self, id: ItemId, margin: Edges) -> Result<()> {
        self.set_margin_top(id, margin.top)?;
        self.set_margin_right(id, margin.right)?;
        self.set_margin_bottom(id, margin.bottom)?;
        self.set_margin_left(id, margin.left)
    }

    /// Set the four paddings.
    pub fn set_padding(&mut self, id: ItemId, padding: Edges) -> Result<()> {
        self.set_padding_top(id, padding.top)?;
        self.set_padding_right(id, padding.right)?;
        self.set_padding_bottom(id, padding.bottom)?;
        self.set_padding_left(id, padding.left)
    }

    /// Set all four margins to `value`.
    pub fn set_uni_margin(&mut self, id: ItemId, value: f32) -> Result<()> {
        self.set_margin(id, Edges::uniform(value))
    }

    /// Set all four paddings to `value`.
    pub fn set_uni_padding(&mut self, id: ItemId, value: f32) -> Result<()> {
        self.set_padding(id, Edges::uniform(value))
    }

    /// Set the four offsets.
    pub fn set_location(
        &mut self,
        id: ItemId,
        top: Option<f32>,
        right: Option<f32>,
        bottom: Option<f32>,
        left: Option<f32>,
    ) -> Result<()> {
        self.set_top(id, top)?;
        self.set_right(id, right)?;
        self.set_bottom(id, bottom)?;
        self.set_left(id, left)
    }

    /// Set width and height.
    pub fn set_size(&mut self, id: ItemId, width: Option<f32>, height: Option<f32>) -> Result<()> {
        self.set_width(id, width)?;
        self.set_height(id, height)
    }

    /// Set grow, shrink, order and basis.
    pub fn set_misc(
        &mut self,
        id: ItemId,
        grow: f32,
        shrink: f32,
        order: i32,
        basis: Option<f32>,
    ) -> Result<()> {
        self.set_grow(id, grow)?;
        self.set_shrink(id, shrink)?;
        self.set_order(id, order)?;
        self.set_basis(id, basis)
    }

    // =========================================================================
    // Frames
    // =========================================================================

    /// Frame of `id` from the most recent layout pass.
    pub fn frame(&self, id: ItemId) -> Result<Rect> {
        Ok(self.node(id)?.frame)
    }

    /// Store a computed frame. Called by the layout engine.
    pub fn set_frame(&mut self, id: ItemId, frame: Rect) -> Result<()> {
        self.node_mut(id)?.frame = frame;
        Ok(())
    }
}

macro_rules! style_accessors {
    ($($get:ident, $set:ident: $ty:ty => $($field:ident).+;)*) => {
        impl ItemTree {
            $(
                #[doc = concat!("Get the `", stringify!($get), "` attribute.")]
                pub fn $get(&self, id: ItemId) -> Result<$ty> {
                    Ok(self.node(id)?.style.$($field).+)
                }

                #[doc = concat!("Set the `", stringify!($get), "` attribute.")]
                pub fn $set(&mut self, id: ItemId, value: $ty) -> Result<()> {
                    self.node_mut(id)?.style.$($field).+ = value;
                    Ok(())
                }
            )*
        }
    };
}

style_accessors! {
    width, set_width: Option<f32> => width;
    height, set_height: Option<f32> => height;
    left, set_left: Option<f32> => left;
    right, set_right: Option<f32> => right;
    top, set_top: Option<f32> => top;
    bottom, set_bottom: Option<f32> => bottom;
    padding_left, set_padding_left: f32 => padding.left;
    padding_right, set_padding_right: f32 => padding.right;
    padding_top, set_padding_top: f32 => padding.top;
    padding_bottom, set_padding_bottom: f32 => padding.bottom;
    margin_left, set_margin_left: f32 => margin.left;
    margin_right, set_margin_right: f32 => margin.right;
    margin_top, set_margin_top: f32 => margin.top;
    margin_bottom, set_margin_bottom: f32 => margin.bottom;
    justify_content, set_justify_content: FlexAlign => justify_content;
    align_content, set_align_content: FlexAlign => align_content;
    align_items, set_align_items: FlexAlign => align_items;
    align_self, set_align_self: FlexAlign => align_self;
    position, set_position: FlexPosition => position;
    direction, set_direction: FlexDirection => direction;
    wrap, set_wrap: FlexWrap => wrap;
    grow, set_grow: f32 => grow;
    shrink, set_shrink: f32 => shrink;
    order, set_order: i32 => order;
    basis, set_basis: Option<f32> => basis;
}
