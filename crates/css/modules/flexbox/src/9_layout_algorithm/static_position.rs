//! Spec: <https://www.w3.org/TR/css-flexbox-1/#abspos-items>

use css_box::{BoxId, LayoutContext, LayoutState, Point};
use log::trace;

use super::FlexLine;
use crate::chapter6::{AutoMargins, FlexItem};
use crate::chapter7::resolve_axes;
use crate::chapter8::align_items::align_flex_items_along_cross_axis;
use crate::chapter8::justify::{MainAxisAlignment, distribute_remaining_free_space};

/// Static position of an absolutely positioned `child` of `container`.
///
/// The child is placed as if it were the sole flex item of a container and
/// both had their current used sizes: `justify-content` decides the main
/// axis, the child's `align-self` the cross axis, and auto margins count as
/// zero. Returns the child's content-edge offset from the container's
/// padding edge.
pub fn calculate_static_position(
    ctx: &LayoutContext<'_>,
    state: &LayoutState<'_>,
    container: BoxId,
    child: BoxId,
) -> Point {
    let container_style = ctx.tree.style(container);
    let axes = resolve_axes(
        container_style.flex_direction,
        container_style.flex_wrap,
        container_style.writing_mode,
    );
    let container_used = state.get(container);
    let child_used = state.get(child);

    let mut item = FlexItem::from_style(
        child,
        ctx.tree.style(child),
        container_style,
        &child_used,
        axes.is_row,
    );
    item.auto_margins = AutoMargins::default();
    let (inner_main_size, inner_cross_size, main_size, cross_size) = if axes.is_row {
        (
            container_used.content_width(),
            container_used.content_height(),
            child_used.content_width(),
            child_used.content_height(),
        )
    } else {
        (
            container_used.content_height(),
            container_used.content_width(),
            child_used.content_height(),
            child_used.content_width(),
        )
    };
    item.main_size = Some(main_size);
    item.cross_size = Some(cross_size);

    let mut items = [item];
    let mut line = FlexLine::new(0..1);
    line.cross_size = inner_cross_size;
    align_flex_items_along_cross_axis(&line, &mut items, axes.cross_reverse);
    line.remaining_free_space = inner_main_size - items[0].outer_main_size();
    let alignment = MainAxisAlignment {
        inner_main_size,
        justify_content: container_style.justify_content,
        main_reverse: axes.main_reverse,
        main_gap: 0.0,
    };
    distribute_remaining_free_space(&line, &mut items, &alignment);

    let [placed] = items;
    let cross_offset = placed.cross_offset + inner_cross_size / 2.0;
    let (x, y) = if axes.is_row {
        (placed.main_offset, cross_offset)
    } else {
        (cross_offset, placed.main_offset)
    };
    let position = Point {
        x: x + container_used.padding_left,
        y: y + container_used.padding_top,
    };
    trace!(
        target: "css::flexbox::items",
        "[FLEX-STATIC] {child:?} in {container:?} at {position:?}"
    );
    position
}
