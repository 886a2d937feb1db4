//! Free-space distribution and cross-axis alignment.

use flexlay_core::FlexAlign;

use crate::flex::FlexItem;
use crate::lines::FlexLine;

/// Leading offset and inter-item gap for distributing `free` space over
/// `count` boxes.
///
/// `Start`, `Auto` and `Stretch` leave the space trailing. With negative free
/// space `SpaceBetween` falls back to start and the other space modes to
/// center, so overflow is never spread as negative gaps.
pub(crate) fn spacing(align: FlexAlign, free: f32, count: usize) -> (f32, f32) {
    match align {
        FlexAlign::End => (free, 0.0),
        FlexAlign::Center => (free / 2.0, 0.0),
        FlexAlign::SpaceBetween => {
            if free > 0.0 && count >= 2 {
                (0.0, free / (count - 1) as f32)
            } else {
                (0.0, 0.0)
            }
        }
        FlexAlign::SpaceAround => {
            if free > 0.0 && count > 0 {
                let gap = free / count as f32;
                (gap / 2.0, gap)
            } else {
                (free / 2.0, 0.0)
            }
        }
        FlexAlign::SpaceEvenly => {
            if free > 0.0 {
                let gap = free / (count + 1) as f32;
                (gap, gap)
            } else {
                (free / 2.0, 0.0)
            }
        }
        FlexAlign::Start | FlexAlign::Stretch | FlexAlign::Auto => (0.0, 0.0),
    }
}

/// Cross alignment an item actually uses: its own `align_self` unless that
/// is `Auto`, otherwise the container's `align_items` (`Auto` there means
/// `Stretch`).
pub(crate) const fn effective_align(align_self: FlexAlign, align_items: FlexAlign) -> FlexAlign {
    match (align_self, align_items) {
        (FlexAlign::Auto, FlexAlign::Auto) => FlexAlign::Stretch,
        (FlexAlign::Auto, inherited) => inherited,
        (own, _) => own,
    }
}

/// Position lines inside a cross extent of `available` per `align_content`.
///
/// A lone line always spans the whole extent.
pub(crate) fn align_lines(lines: &mut [FlexLine], align_content: FlexAlign, available: f32) {
    if let [line] = &mut *lines {
        line.cross = available;
        line.cross_pos = 0.0;
        return;
    }

    let used: f32 = lines.iter().map(|l| l.cross).sum();
    let free = available - used;

    let (lead, gap) = match align_content {
        FlexAlign::Stretch | FlexAlign::Auto => {
            if free > 0.0 && !lines.is_empty() {
                let extra = free / lines.len() as f32;
                for line in lines.iter_mut() {
                    line.cross += extra;
                }
            }
            (0.0, 0.0)
        }
        other => spacing(other, free, lines.len()),
    };

    let mut pos = lead;
    for line in lines.iter_mut() {
        line.cross_pos = pos;
        pos += line.cross + gap;
    }
}

/// Size and place an item across its line. `cross_pos` ends up relative to
/// the line's cross start.
pub(crate) fn align_item(item: &mut FlexItem, line_cross: f32) {
    let (start, end) = item.margin_cross;
    match item.align {
        FlexAlign::Stretch if !item.cross_definite => {
            item.cross = (line_cross - start - end).max(0.0);
            item.cross_pos = start;
        }
        FlexAlign::End => item.cross_pos = line_cross - item.cross - end,
        FlexAlign::Center => {
            item.cross_pos = start + (line_cross - item.outer_cross()) / 2.0;
        }
        _ => item.cross_pos = start,
    }
}
