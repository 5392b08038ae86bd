//! Cross-axis alignment of items within their line.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-cross-margins>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-cross-align>

use log::trace;

use crate::chapter6::{FlexItem, ItemAlignment};
use crate::chapter9::FlexLine;

/// Resolve `auto` cross-axis margins of the line's items.
///
/// If the item's outer cross size, with its auto margins treated as zero, is
/// smaller than the line, the difference is shared by the auto margins.
/// Otherwise an auto cross-start margin becomes zero and the cross-end margin
/// is set so the outer cross size equals the line's cross size.
pub fn resolve_cross_axis_auto_margins(line: &FlexLine, items: &mut [FlexItem]) {
    for item in line.line_items_mut(items) {
        let auto = item.auto_margins;
        if !auto.has_cross() {
            continue;
        }
        let fixed_before = if auto.cross_before { 0.0 } else { item.margins.cross_before };
        let fixed_after = if auto.cross_after { 0.0 } else { item.margins.cross_after };
        let border_box = item.used_cross_size()
            + item.borders.cross_before
            + item.borders.cross_after
            + item.padding.cross_before
            + item.padding.cross_after;
        let outer_cross_size = border_box + fixed_before + fixed_after;
        if outer_cross_size < line.cross_size {
            let remainder = line.cross_size - outer_cross_size;
            match (auto.cross_before, auto.cross_after) {
                (true, true) => {
                    item.margins.cross_before = remainder / 2.0;
                    item.margins.cross_after = remainder / 2.0;
                }
                (true, false) => item.margins.cross_before = remainder,
                _ => item.margins.cross_after = remainder,
            }
        } else {
            if auto.cross_before {
                item.margins.cross_before = 0.0;
            }
            item.margins.cross_after = line.cross_size - border_box - item.margins.cross_before;
        }
    }
}

/// Physical edge an item is aligned against within its line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum CrossPlacement {
    Start,
    End,
    Center,
}

fn placement_for(item: &FlexItem, cross_reverse: bool) -> CrossPlacement {
    if item.auto_margins.has_cross() {
        return CrossPlacement::Start;
    }
    let (flex_start, flex_end) = if cross_reverse {
        (CrossPlacement::End, CrossPlacement::Start)
    } else {
        (CrossPlacement::Start, CrossPlacement::End)
    };
    match item.alignment {
        ItemAlignment::Stretch | ItemAlignment::FlexStart => flex_start,
        ItemAlignment::Baseline => {
            trace!(
                target: "css::flexbox::cross",
                "baseline alignment of {:?} laid out as flex-start",
                item.box_id
            );
            flex_start
        }
        ItemAlignment::FlexEnd => flex_end,
        ItemAlignment::Center => CrossPlacement::Center,
    }
}

/// Set each item's cross offset relative to the center of its line.
///
/// Line-relative coordinates run from `-cross_size / 2` to `cross_size / 2`;
/// `cross_offset` is the item's content-box start. Lines are moved into place
/// by `align_all_flex_lines`. `wrap-reverse` swaps flex-start and flex-end.
pub fn align_flex_items_along_cross_axis(line: &FlexLine, items: &mut [FlexItem], cross_reverse: bool) {
    let half_line_size = line.cross_size / 2.0;
    for item in line.line_items_mut(items) {
        item.cross_offset = match placement_for(item, cross_reverse) {
            CrossPlacement::Start => -half_line_size + item.cross_edges_before(),
            CrossPlacement::End => half_line_size - item.used_cross_size() - item.cross_edges_after(),
            CrossPlacement::Center => -(item.outer_cross_size() / 2.0) + item.cross_edges_before(),
        };
    }
}
