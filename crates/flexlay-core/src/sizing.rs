//! Self-sizing hook for leaf content.

use std::fmt;
use std::sync::Arc;

use crate::geometry::Size;
use crate::tree::ItemId;

/// Intrinsic size provider attached to an item.
///
/// The layout engine consults the hook for any dimension the item leaves
/// undefined. The result is used for the current layout pass only; the
/// hook is called again on the next pass.
///
/// Implementations must not have side effects on the tree being laid out.
pub trait SelfSizing {
    /// Report the intrinsic `(width, height)` of `item`.
    fn size_for(&self, item: ItemId) -> Size;
}

impl<F> SelfSizing for F
where
    F: Fn(ItemId) -> Size,
{
    fn size_for(&self, item: ItemId) -> Size {
        self(item)
    }
}

/// Shared handle to a self-sizing hook.
#[derive(Clone)]
pub struct SizingHook(Arc<dyn SelfSizing + Send + Sync>);

impl SizingHook {
    /// Wrap a hook implementation.
    pub fn new(hook: impl SelfSizing + Send + Sync + 'static) -> Self {
        Self(Arc::new(hook))
    }

    /// Invoke the hook.
    #[must_use]
    pub fn size_for(&self, item: ItemId) -> Size {
        self.0.size_for(item)
    }
}

impl fmt::Debug for SizingHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizingHook").finish_non_exhaustive()
    }
}
