//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use log::debug;

use super::FlexLine;
use crate::chapter6::FlexItem;

/// Split `items` into flex lines.
///
/// A single-line container puts every item on one line. Otherwise items are
/// collected greedily by outer hypothetical main size: a line breaks before an
/// item that, together with the gap in front of it, would overflow
/// `available_main_size`. A line always takes at least one item, so an
/// oversized item sits on a line of its own.
pub fn collect_flex_items_into_flex_lines(
    items: &[FlexItem],
    is_single_line: bool,
    available_main_size: f32,
    main_gap: f32,
) -> Vec<FlexLine> {
    if items.is_empty() {
        return Vec::new();
    }
    if is_single_line {
        return vec![FlexLine::new(0..items.len())];
    }

    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut line_main_size = 0.0f32;
    for (index, item) in items.iter().enumerate() {
        let outer_size = item.outer_hypothetical_main_size();
        if index > line_start && line_main_size + main_gap + outer_size > available_main_size {
            lines.push(FlexLine::new(line_start..index));
            line_start = index;
            line_main_size = 0.0;
        }
        if index > line_start {
            line_main_size += main_gap;
        }
        line_main_size += outer_size;
    }
    lines.push(FlexLine::new(line_start..items.len()));

    debug!(
        target: "css::flexbox::lines",
        "[FLEX-LINES] {} items in {} lines (available {available_main_size})",
        items.len(),
        lines.len()
    );
    lines
}
