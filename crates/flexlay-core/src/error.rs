//! Error types for flexlay.

use thiserror::Error;

use crate::tree::ItemId;

/// Structural misuse of an item tree.
///
/// Out-of-range child indices are not errors; they yield `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The handle was never issued by this tree or its item was freed.
    #[error("stale or unknown item handle {0}")]
    StaleItem(ItemId),

    /// Attaching would make an item its own ancestor.
    #[error("cannot attach {child} under {parent}: {child} is an ancestor of {parent}")]
    Cycle {
        /// Prospective parent
        parent: ItemId,
        /// Item being attached
        child: ItemId,
    },

    /// Only root items can be freed; attached items belong to their parent.
    #[error("item {0} is attached to a parent; remove it before freeing")]
    Attached(ItemId),

    /// Layout was requested on an item that has a parent.
    #[error("layout must start at a root item, {0} has a parent")]
    NotRoot(ItemId),

    /// A wire code outside the range of an enumerated attribute.
    #[error("invalid {attribute} code {value}")]
    InvalidCode {
        /// Attribute name
        attribute: &'static str,
        /// Rejected code
        value: u32,
    },
}

/// Convenience alias for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
