//! Frames of absolutely positioned items.
//!
//! Absolute items are pinned against the content box of their container and
//! take no part in flow. Each axis is resolved independently:
//!
//! - both offsets set: the size is the gap between them minus margins
//! - one offset set: the item keeps its own size, anchored at that edge
//! - no offset set: as if the start offset were 0

use flexlay_core::{ItemStyle, Rect, Size};

/// Frame of an absolute item inside `content`, given its measured size.
pub(crate) fn place_absolute(style: &ItemStyle, measured: Size, content: Rect) -> Rect {
    let (x, width) = resolve_axis(
        style.left,
        style.right,
        measured.width,
        (style.margin.left, style.margin.right),
        (content.x, content.right()),
    );
    let (y, height) = resolve_axis(
        style.top,
        style.bottom,
        measured.height,
        (style.margin.top, style.margin.bottom),
        (content.y, content.bottom()),
    );
    Rect::new(x, y, width, height)
}

fn resolve_axis(
    start: Option<f32>,
    end: Option<f32>,
    size: f32,
    (margin_start, margin_end): (f32, f32),
    (low, high): (f32, f32),
) -> (f32, f32) {
    match (start, end) {
        (Some(start), Some(end)) => {
            let size = (high - low - start - end - margin_start - margin_end).max(0.0);
            (low + start + margin_start, size)
        }
        (Some(start), None) => (low + start + margin_start, size),
        (None, Some(end)) => (high - end - margin_end - size, size),
        (None, None) => (low + margin_start, size),
    }
}
