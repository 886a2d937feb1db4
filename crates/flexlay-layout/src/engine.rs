//! Layout engine implementation.

use flexlay_core::{ItemId, ItemStyle, ItemTree, Rect, Result, Size, TreeError};

use crate::absolute::place_absolute;
use crate::align::{align_item, align_lines, effective_align};
use crate::axis::Axes;
use crate::cache::MeasureCache;
use crate::flex::{distribute_flex, justify_line, FlexItem};
use crate::lines::{break_lines, FlexLine};
use crate::measure::{measure, ordered_children};

/// Layout engine with per-pass measurement memoization.
///
/// Each [`LayoutEngine::compute`] call is a full pass:
///
/// 1. **Measure** (bottom-up, on demand): intrinsic sizes from attributes,
///    self-sizing hooks and content, memoized for the pass.
/// 2. **Place** (top-down, depth-first): each container resolves its lines,
///    distributes main space, aligns across, overlays absolute children and
///    then recurses into every child with the child's final size.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    cache: MeasureCache,
    passes: u64,
}

impl LayoutEngine {
    /// Create a new layout engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out the tree rooted at `root`.
    ///
    /// The root is framed at the origin with its `width`/`height` (undefined
    /// counts as zero). Fails without touching any frame when `root` is stale
    /// or has a parent.
    pub fn compute(&mut self, tree: &mut ItemTree, root: ItemId) -> Result<()> {
        if tree.parent(root)?.is_some() {
            return Err(TreeError::NotRoot(root));
        }

        self.cache.clear();
        self.passes += 1;
        let _span = tracing::debug_span!("layout", %root, pass = self.passes).entered();

        let style = tree.style(root)?;
        let frame = Rect::from_size(Size::new(
            style.width.unwrap_or(0.0),
            style.height.unwrap_or(0.0),
        ));
        tree.set_frame(root, frame)?;
        self.layout_item(tree, root, frame.size())?;

        tracing::debug!(
            measured = self.cache.len(),
            hits = self.cache.hits(),
            misses = self.cache.misses(),
            "layout pass complete"
        );
        Ok(())
    }

    /// Number of completed passes.
    #[must_use]
    pub const fn passes(&self) -> u64 {
        self.passes
    }

    /// Measure cache hits of the last pass.
    #[must_use]
    pub const fn cache_hits(&self) -> usize {
        self.cache.hits()
    }

    /// Measure cache misses of the last pass.
    #[must_use]
    pub const fn cache_misses(&self) -> usize {
        self.cache.misses()
    }

    fn layout_item(&mut self, tree: &mut ItemTree, id: ItemId, size: Size) -> Result<()> {
        let style = *tree.style(id)?;
        let children = ordered_children(tree, id)?;
        if children.is_empty() {
            return Ok(());
        }

        let pad = style.padding;
        let content = Rect::new(
            pad.left,
            pad.top,
            (size.width - pad.horizontal()).max(0.0),
            (size.height - pad.vertical()).max(0.0),
        );

        let (in_flow, absolute): (Vec<_>, Vec<_>) =
            children.into_iter().partition(|(_, s)| s.is_in_flow());

        let mut placed = self.place_in_flow(tree, &style, &in_flow, content)?;
        for (child, child_style) in &absolute {
            let measured = measure(tree, *child, &mut self.cache)?;
            placed.push((*child, place_absolute(child_style, measured, content)));
        }

        for &(child, frame) in &placed {
            tree.set_frame(child, frame)?;
        }
        for (child, frame) in placed {
            self.layout_item(tree, child, frame.size())?;
        }
        Ok(())
    }

    fn place_in_flow(
        &mut self,
        tree: &ItemTree,
        style: &ItemStyle,
        children: &[(ItemId, ItemStyle)],
        content: Rect,
    ) -> Result<Vec<(ItemId, Rect)>> {
        if children.is_empty() {
            return Ok(Vec::new());
        }

        let axes = Axes::of(style);
        let main_extent = axes.main(content.size());
        let cross_extent = axes.cross(content.size());

        let mut items = Vec::with_capacity(children.len());
        for (child, child_style) in children {
            items.push(self.flex_item(tree, axes, style, *child, child_style)?);
        }

        let outer: Vec<f32> = items.iter().map(FlexItem::outer_base).collect();
        let mut lines: Vec<FlexLine> = break_lines(&outer, style.wrap, main_extent)
            .into_iter()
            .map(FlexLine::new)
            .collect();

        for line in &mut lines {
            let line_items = &mut items[line.items.clone()];
            distribute_flex(line_items, main_extent);
            justify_line(line_items, style.justify_content, main_extent);
            line.cross = line_items
                .iter()
                .map(FlexItem::outer_cross)
                .fold(0.0, f32::max);
        }
        align_lines(&mut lines, style.align_content, cross_extent);

        tracing::trace!(
            items = items.len(),
            lines = lines.len(),
            main_extent,
            cross_extent,
            "placed container"
        );

        let mut placed = Vec::with_capacity(items.len());
        for line in &lines {
            for item in &mut items[line.items.clone()] {
                align_item(item, line.cross);
                let main_pos = axes.main_to_physical(item.main_pos, item.main, main_extent);
                let cross_pos = axes.cross_to_physical(
                    line.cross_pos + item.cross_pos,
                    item.cross,
                    cross_extent,
                );
                let frame = axes.frame(
                    content,
                    main_pos,
                    cross_pos,
                    axes.size(item.main, item.cross),
                );
                placed.push((item.id, frame));
            }
        }
        Ok(placed)
    }

    fn flex_item(
        &mut self,
        tree: &ItemTree,
        axes: Axes,
        container: &ItemStyle,
        id: ItemId,
        style: &ItemStyle,
    ) -> Result<FlexItem> {
        let measured = measure(tree, id, &mut self.cache)?;
        let base = style.basis.unwrap_or_else(|| axes.main(measured));
        Ok(FlexItem {
            id,
            grow: style.grow,
            shrink: style.shrink,
            base,
            main: base,
            cross: axes.cross(measured),
            cross_definite: axes.cross_attr(style).is_some(),
            align: effective_align(style.align_self, container.align_items),
            margin_main: axes.main_margins(&style.margin),
            margin_cross: axes.cross_margins(&style.margin),
            main_pos: 0.0,
            cross_pos: 0.0,
        })
    }
}

/// Lay out the tree rooted at `root` with a fresh engine.
pub fn compute_layout(tree: &mut ItemTree, root: ItemId) -> Result<()> {
    LayoutEngine::new().compute(tree, root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexlay_core::{Edges, FlexAlign, FlexDirection, FlexWrap};

    fn row(width: f32, height: f32) -> ItemStyle {
        ItemStyle::new()
            .size(width, height)
            .direction(FlexDirection::Row)
    }

    fn frames(tree: &ItemTree, ids: &[ItemId]) -> Vec<Rect> {
        ids.iter().map(|&id| tree.frame(id).unwrap()).collect()
    }

    #[test]
    fn test_layout_engine_new() {
        let engine = LayoutEngine::new();
        assert_eq!(engine.passes(), 0);
        assert_eq!(engine.cache_hits(), 0);
    }

    #[test]
    fn test_rejects_non_root() {
        let mut tree = ItemTree::new();
        let root = tree.create_item();
        let child = tree.create_item();
        tree.append_child(root, child).unwrap();
        tree.set_frame(child, Rect::new(1.0, 2.0, 3.0, 4.0)).unwrap();

        let err = LayoutEngine::new().compute(&mut tree, child).unwrap_err();
        assert_eq!(err, TreeError::NotRoot(child));
        assert_eq!(tree.frame(child).unwrap(), Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_undefined_root_size_is_zero() {
        let mut tree = ItemTree::new();
        let root = tree.create_item();
        compute_layout(&mut tree, root).unwrap();
        assert_eq!(tree.frame(root).unwrap(), Rect::default());
    }

    #[test]
    fn test_column_is_default_direction() {
        let mut tree = ItemTree::new();
        let root = tree.create_with_style(ItemStyle::new().size(100.0, 300.0));
        let a = tree.create_with_style(ItemStyle::new().height(50.0));
        let b = tree.create_with_style(ItemStyle::new().height(70.0));
        tree.append_child(root, a).unwrap();
        tree.append_child(root, b).unwrap();

        compute_layout(&mut tree, root).unwrap();
        assert_eq!(
            frames(&tree, &[a, b]),
            vec![
                Rect::new(0.0, 0.0, 100.0, 50.0),
                Rect::new(0.0, 50.0, 100.0, 70.0)
            ]
        );
    }

    #[test]
    fn test_row_reverse_mirrors_placement() {
        let mut tree = ItemTree::new();
        let root = tree.create_with_style(row(300.0, 100.0).direction(FlexDirection::RowReverse));
        let a = tree.create_with_style(ItemStyle::new().size(100.0, 100.0));
        let b = tree.create_with_style(ItemStyle::new().size(50.0, 100.0));
        tree.append_child(root, a).unwrap();
        tree.append_child(root, b).unwrap();

        compute_layout(&mut tree, root).unwrap();
        assert_eq!(tree.frame(a).unwrap().x, 200.0);
        assert_eq!(tree.frame(b).unwrap().x, 150.0);
    }

    #[test]
    fn test_column_reverse_with_justify_end() {
        let mut tree = ItemTree::new();
        let root = tree.create_with_style(
            ItemStyle::new()
                .size(100.0, 200.0)
                .direction(FlexDirection::ColumnReverse)
                .justify_content(FlexAlign::End),
        );
        let a = tree.create_with_style(ItemStyle::new().height(40.0));
        tree.append_child(root, a).unwrap();

        compute_layout(&mut tree, root).unwrap();
        assert_eq!(tree.frame(a).unwrap(), Rect::new(0.0, 0.0, 100.0, 40.0));
    }

    #[test]
    fn test_padding_offsets_children() {
        let mut tree = ItemTree::new();
        let root = tree.create_with_style(row(200.0, 100.0).padding(Edges::new(5.0, 10.0, 15.0, 20.0)));
        let a = tree.create_with_style(ItemStyle::new().grow(1.0));
        tree.append_child(root, a).unwrap();

        compute_layout(&mut tree, root).unwrap();
        assert_eq!(tree.frame(a).unwrap(), Rect::new(20.0, 5.0, 170.0, 80.0));
    }

    #[test]
    fn test_margins_in_row() {
        let mut tree = ItemTree::new();
        let root = tree.create_with_style(row(300.0, 100.0).align_items(FlexAlign::Start));
        let a = tree.create_with_style(
            ItemStyle::new()
                .size(50.0, 50.0)
                .margin(Edges::new(10.0, 5.0, 0.0, 5.0)),
        );
        let b = tree.create_with_style(ItemStyle::new().size(50.0, 50.0));
        tree.append_child(root, a).unwrap();
        tree.append_child(root, b).unwrap();

        compute_layout(&mut tree, root).unwrap();
        assert_eq!(tree.frame(a).unwrap(), Rect::new(5.0, 10.0, 50.0, 50.0));
        assert_eq!(tree.frame(b).unwrap(), Rect::new(60.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn test_order_sorts_stably() {
        let mut tree = ItemTree::new();
        let root = tree.create_with_style(row(300.0, 100.0));
        let a = tree.create_with_style(ItemStyle::new().width(10.0).order(1));
        let b = tree.create_with_style(ItemStyle::new().width(20.0));
        let c = tree.create_with_style(ItemStyle::new().width(30.0));
        for id in [a, b, c] {
            tree.append_child(root, id).unwrap();
        }

        compute_layout(&mut tree, root).unwrap();
        assert_eq!(tree.frame(b).unwrap().x, 0.0);
        assert_eq!(tree.frame(c).unwrap().x, 20.0);
        assert_eq!(tree.frame(a).unwrap().x, 50.0);
        // Child list itself is untouched
        assert_eq!(tree.children(root).unwrap(), &[a, b, c]);
    }

    #[test]
    fn test_align_self_overrides_align_items() {
        let mut tree = ItemTree::new();
        let root = tree.create_with_style(row(300.0, 100.0).align_items(FlexAlign::Center));
        let a = tree.create_with_style(ItemStyle::new().size(10.0, 20.0));
        let b = tree.create_with_style(ItemStyle::new().size(10.0, 20.0).align_self(FlexAlign::End));
        let c = tree.create_with_style(ItemStyle::new().width(10.0).align_self(FlexAlign::Stretch));
        for id in [a, b, c] {
            tree.append_child(root, id).unwrap();
        }

        compute_layout(&mut tree, root).unwrap();
        assert_eq!(tree.frame(a).unwrap().y, 40.0);
        assert_eq!(tree.frame(b).unwrap().y, 80.0);
        assert_eq!(tree.frame(c).unwrap().height, 100.0);
    }

    #[test]
    fn test_wrap_lines_and_stretch() {
        let mut tree = ItemTree::new();
        let root = tree.create_with_style(row(150.0, 100.0).wrap(FlexWrap::Wrap));
        let ids: Vec<_> = (0..3)
            .map(|_| tree.create_with_style(ItemStyle::new().width(60.0)))
            .collect();
        for &id in &ids {
            tree.append_child(root, id).unwrap();
        }

        compute_layout(&mut tree, root).unwrap();
        // Two lines of zero hypothetical cross size share 100 equally
        assert_eq!(
            frames(&tree, &ids),
            vec![
                Rect::new(0.0, 0.0, 60.0, 50.0),
                Rect::new(60.0, 0.0, 60.0, 50.0),
                Rect::new(0.0, 50.0, 60.0, 50.0)
            ]
        );
    }

    #[test]
    fn test_wrap_reverse_stacks_from_cross_end() {
        let mut tree = ItemTree::new();
        let root = tree.create_with_style(
            row(100.0, 100.0)
                .wrap(FlexWrap::WrapReverse)
                .align_content(FlexAlign::Start),
        );
        let a = tree.create_with_style(ItemStyle::new().size(60.0, 20.0));
        let b = tree.create_with_style(ItemStyle::new().size(60.0, 30.0));
        tree.append_child(root, a).unwrap();
        tree.append_child(root, b).unwrap();

        compute_layout(&mut tree, root).unwrap();
        assert_eq!(tree.frame(a).unwrap(), Rect::new(0.0, 80.0, 60.0, 20.0));
        assert_eq!(tree.frame(b).unwrap(), Rect::new(0.0, 50.0, 60.0, 30.0));
    }

    #[test]
    fn test_nested_containers_recurse() {
        let mut tree = ItemTree::new();
        let root = tree.create_with_style(row(200.0, 100.0));
        let left = tree.create_with_style(ItemStyle::new().grow(1.0));
        let right = tree.create_with_style(ItemStyle::new().grow(1.0));
        let inner = tree.create_with_style(ItemStyle::new().height(30.0));
        tree.append_child(root, left).unwrap();
        tree.append_child(root, right).unwrap();
        tree.append_child(right, inner).unwrap();

        compute_layout(&mut tree, root).unwrap();
        assert_eq!(tree.frame(right).unwrap(), Rect::new(100.0, 0.0, 100.0, 100.0));
        // Frames are relative to the containing item
        assert_eq!(tree.frame(inner).unwrap(), Rect::new(0.0, 0.0, 100.0, 30.0));
    }

    #[test]
    fn test_auto_sized_child_uses_content() {
        let mut tree = ItemTree::new();
        let root = tree.create_with_style(row(300.0, 100.0).align_items(FlexAlign::Start));
        let boxed = tree.create_with_style(ItemStyle::new().padding(Edges::uniform(5.0)));
        let leaf = tree.create_with_style(ItemStyle::new().size(40.0, 20.0));
        tree.append_child(root, boxed).unwrap();
        tree.append_child(boxed, leaf).unwrap();

        compute_layout(&mut tree, root).unwrap();
        assert_eq!(tree.frame(boxed).unwrap(), Rect::new(0.0, 0.0, 50.0, 30.0));
        assert_eq!(tree.frame(leaf).unwrap(), Rect::new(5.0, 5.0, 40.0, 20.0));
    }

    #[test]
    fn test_padded_leaf_takes_no_space() {
        let mut tree = ItemTree::new();
        let root = tree.create_with_style(row(300.0, 100.0).align_items(FlexAlign::Start));
        let leaf = tree.create_with_style(ItemStyle::new().padding(Edges::uniform(10.0)));
        let next = tree.create_with_style(ItemStyle::new().size(20.0, 20.0));
        tree.append_child(root, leaf).unwrap();
        tree.append_child(root, next).unwrap();

        compute_layout(&mut tree, root).unwrap();
        assert_eq!(tree.frame(leaf).unwrap(), Rect::default());
        assert_eq!(tree.frame(next).unwrap().x, 0.0);
    }

    #[test]
    fn test_absolute_child_recurses() {
        let mut tree = ItemTree::new();
        let root = tree.create_with_style(row(200.0, 200.0));
        let overlay = tree.create_with_style(ItemStyle::new().absolute());
        tree.set_location(overlay, Some(0.0), Some(0.0), Some(0.0), Some(0.0))
            .unwrap();
        let inner = tree.create_with_style(ItemStyle::new().grow(1.0));
        tree.append_child(root, overlay).unwrap();
        tree.append_child(overlay, inner).unwrap();

        compute_layout(&mut tree, root).unwrap();
        assert_eq!(tree.frame(overlay).unwrap(), Rect::new(0.0, 0.0, 200.0, 200.0));
        assert_eq!(tree.frame(inner).unwrap(), Rect::new(0.0, 0.0, 200.0, 200.0));
    }

    #[test]
    fn test_cache_cleared_between_passes() {
        let mut tree = ItemTree::new();
        let root = tree.create_with_style(row(100.0, 100.0));
        let a = tree.create_item();
        tree.append_child(root, a).unwrap();

        let mut engine = LayoutEngine::new();
        engine.compute(&mut tree, root).unwrap();
        let misses = engine.cache_misses();
        engine.compute(&mut tree, root).unwrap();
        assert_eq!(engine.cache_misses(), misses);
        assert_eq!(engine.passes(), 2);
    }
}
