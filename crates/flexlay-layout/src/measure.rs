//! Intrinsic sizing (the measure pass).
//!
//! An item's measured size uses its definite `width`/`height` where set.
//! Undefined dimensions come from the item's self-sizing hook when it has
//! one, otherwise from its in-flow content: padding plus children laid end
//! to end along the item's own main axis. Content only wraps when the item's
//! own main size is definite, since there is nothing to wrap against
//! otherwise. An item with no hook and no in-flow children measures zero,
//! padding included.
//!
//! Measurement reads attributes only, never the parent's resolved size, so
//! every item is measured once per pass and the result is memoized in the
//! [`MeasureCache`].

use flexlay_core::{ItemId, ItemStyle, ItemTree, Result, Size};

use crate::axis::Axes;
use crate::cache::MeasureCache;
use crate::lines::break_lines;

/// Measured border-box size of `id`.
pub(crate) fn measure(tree: &ItemTree, id: ItemId, cache: &mut MeasureCache) -> Result<Size> {
    if let Some(size) = cache.get(id) {
        return Ok(size);
    }

    let style = *tree.style(id)?;
    let size = if let (Some(width), Some(height)) = (style.width, style.height) {
        Size::new(width, height)
    } else {
        let intrinsic = match tree.self_sizing(id)? {
            Some(hook) => hook.size_for(id),
            None => content_size(tree, id, &style, cache)?,
        };
        Size::new(
            style.width.unwrap_or(intrinsic.width),
            style.height.unwrap_or(intrinsic.height),
        )
    };

    cache.insert(id, size);
    Ok(size)
}

/// Children of `id` in layout order (stable on equal `order`).
pub(crate) fn ordered_children(tree: &ItemTree, id: ItemId) -> Result<Vec<(ItemId, ItemStyle)>> {
    let mut children = tree
        .children(id)?
        .iter()
        .map(|&child| Ok((child, *tree.style(child)?)))
        .collect::<Result<Vec<_>>>()?;
    children.sort_by_key(|(_, style)| style.order);
    Ok(children)
}

fn content_size(
    tree: &ItemTree,
    id: ItemId,
    style: &ItemStyle,
    cache: &mut MeasureCache,
) -> Result<Size> {
    let axes = Axes::of(style);
    let pad_main = axes.main_padding(&style.padding);
    let pad_cross = axes.cross_padding(&style.padding);

    let mut outer_main = Vec::new();
    let mut outer_cross = Vec::new();
    for (child, child_style) in ordered_children(tree, id)? {
        if !child_style.is_in_flow() {
            continue;
        }
        let size = measure(tree, child, cache)?;
        let (ms, me) = axes.main_margins(&child_style.margin);
        let (cs, ce) = axes.cross_margins(&child_style.margin);
        outer_main.push(child_style.basis.unwrap_or_else(|| axes.main(size)) + ms + me);
        outer_cross.push(axes.cross(size) + cs + ce);
    }
    if outer_main.is_empty() {
        return Ok(Size::ZERO);
    }

    let (main, cross) = match axes.main_attr(style) {
        Some(main_size) => {
            let available = main_size - pad_main;
            break_lines(&outer_main, style.wrap, available)
                .into_iter()
                .fold((0.0f32, 0.0f32), |(main, cross), line| {
                    let line_main: f32 = outer_main[line.clone()].iter().sum();
                    let line_cross = outer_cross[line].iter().copied().fold(0.0, f32::max);
                    (main.max(line_main), cross + line_cross)
                })
        }
        None => (
            outer_main.iter().sum(),
            outer_cross.iter().copied().fold(0.0, f32::max),
        ),
    };

    Ok(axes.size(main + pad_main, cross + pad_cross))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexlay_core::{Edges, FlexDirection, FlexPosition, FlexWrap, SizingHook};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_definite_size_wins() {
        let mut tree = ItemTree::new();
        let id = tree.create_with_style(ItemStyle::new().size(30.0, 40.0));
        tree.set_self_sizing(id, Some(SizingHook::new(|_: ItemId| Size::new(1.0, 1.0))))
            .unwrap();
        let size = measure(&tree, id, &mut MeasureCache::new()).unwrap();
        assert_eq!(size, Size::new(30.0, 40.0));
    }

    #[test]
    fn test_leaf_without_hook_is_zero() {
        let mut tree = ItemTree::new();
        let id = tree.create_item();
        let size = measure(&tree, id, &mut MeasureCache::new()).unwrap();
        assert_eq!(size, Size::ZERO);
    }

    #[test]
    fn test_padded_leaf_measures_zero() {
        let mut tree = ItemTree::new();
        let id = tree.create_with_style(ItemStyle::new().padding(Edges::uniform(10.0)));
        let size = measure(&tree, id, &mut MeasureCache::new()).unwrap();
        assert_eq!(size, Size::ZERO);

        // A definite dimension is kept, only the undefined one is zero
        tree.set_width(id, Some(40.0)).unwrap();
        let size = measure(&tree, id, &mut MeasureCache::new()).unwrap();
        assert_eq!(size, Size::new(40.0, 0.0));
    }

    #[test]
    fn test_padded_container_counts_padding() {
        let mut tree = ItemTree::new();
        let parent = tree.create_with_style(ItemStyle::new().padding(Edges::uniform(10.0)));
        let child = tree.create_item();
        tree.append_child(parent, child).unwrap();
        let size = measure(&tree, parent, &mut MeasureCache::new()).unwrap();
        assert_eq!(size, Size::new(20.0, 20.0));
    }

    #[test]
    fn test_hook_fills_only_undefined_dimensions() {
        let mut tree = ItemTree::new();
        let id = tree.create_with_style(ItemStyle::new().width(50.0));
        tree.set_self_sizing(id, Some(SizingHook::new(|_: ItemId| Size::new(7.0, 9.0))))
            .unwrap();
        let size = measure(&tree, id, &mut MeasureCache::new()).unwrap();
        assert_eq!(size, Size::new(50.0, 9.0));
    }

    #[test]
    fn test_hook_called_once_per_pass() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut tree = ItemTree::new();
        let id = tree.create_item();
        tree.set_self_sizing(
            id,
            Some(SizingHook::new(move |_: ItemId| {
                counter.fetch_add(1, Ordering::SeqCst);
                Size::new(1.0, 2.0)
            })),
        )
        .unwrap();

        let mut cache = MeasureCache::new();
        measure(&tree, id, &mut cache).unwrap();
        measure(&tree, id, &mut cache).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        cache.clear();
        measure(&tree, id, &mut cache).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_content_size_row() {
        let mut tree = ItemTree::new();
        let parent = tree.create_with_style(
            ItemStyle::new()
                .direction(FlexDirection::Row)
                .padding(Edges::uniform(5.0)),
        );
        let a = tree.create_with_style(ItemStyle::new().size(20.0, 10.0));
        let b = tree.create_with_style(
            ItemStyle::new()
                .size(30.0, 25.0)
                .margin(Edges::new(0.0, 0.0, 0.0, 4.0)),
        );
        tree.append_child(parent, a).unwrap();
        tree.append_child(parent, b).unwrap();

        let size = measure(&tree, parent, &mut MeasureCache::new()).unwrap();
        assert_eq!(size, Size::new(64.0, 35.0));
    }

    #[test]
    fn test_content_size_column_uses_basis() {
        let mut tree = ItemTree::new();
        let parent = tree.create_item();
        let a = tree.create_with_style(ItemStyle::new().size(20.0, 10.0).basis(40.0));
        let b = tree.create_with_style(ItemStyle::new().size(30.0, 10.0));
        tree.append_child(parent, a).unwrap();
        tree.append_child(parent, b).unwrap();

        let size = measure(&tree, parent, &mut MeasureCache::new()).unwrap();
        assert_eq!(size, Size::new(30.0, 50.0));
    }

    #[test]
    fn test_content_size_skips_absolute_children() {
        let mut tree = ItemTree::new();
        let parent = tree.create_item();
        let abs = tree.create_with_style(ItemStyle::new().size(100.0, 100.0));
        tree.set_position(abs, FlexPosition::Absolute).unwrap();
        tree.append_child(parent, abs).unwrap();

        let size = measure(&tree, parent, &mut MeasureCache::new()).unwrap();
        assert_eq!(size, Size::ZERO);
    }

    #[test]
    fn test_content_wraps_against_definite_main() {
        let mut tree = ItemTree::new();
        let parent = tree.create_with_style(
            ItemStyle::new()
                .width(100.0)
                .direction(FlexDirection::Row)
                .wrap(FlexWrap::Wrap),
        );
        for _ in 0..3 {
            let child = tree.create_with_style(ItemStyle::new().size(60.0, 20.0));
            tree.append_child(parent, child).unwrap();
        }

        let size = measure(&tree, parent, &mut MeasureCache::new()).unwrap();
        assert_eq!(size, Size::new(100.0, 60.0));
    }

    #[test]
    fn test_nested_auto_containers() {
        let mut tree = ItemTree::new();
        let outer = tree.create_with_style(ItemStyle::new().direction(FlexDirection::Row));
        let inner = tree.create_item();
        let leaf = tree.create_with_style(ItemStyle::new().size(15.0, 25.0));
        tree.append_child(inner, leaf).unwrap();
        tree.append_child(outer, inner).unwrap();

        let size = measure(&tree, outer, &mut MeasureCache::new()).unwrap();
        assert_eq!(size, Size::new(15.0, 25.0));
    }

    #[test]
    fn test_ordered_children_stable() {
        let mut tree = ItemTree::new();
        let parent = tree.create_item();
        let a = tree.create_with_style(ItemStyle::new().order(1));
        let b = tree.create_item();
        let c = tree.create_with_style(ItemStyle::new().order(-1));
        let d = tree.create_item();
        for id in [a, b, c, d] {
            tree.append_child(parent, id).unwrap();
        }
        let ids: Vec<_> = ordered_children(&tree, parent)
            .unwrap()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec![c, b, d, a]);
    }
}
