//! Flex Layout Algorithm
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>
//!
//! A [`FlexLayout`] holds everything one run of a flex container needs: the
//! collaborators, the container's resolved axes, the item arena and the flex
//! lines. `run` walks the numbered steps of the algorithm; each submodule adds
//! the steps of one concern to `FlexLayout`.
//!
//! ```text
//! generate items ─▶ base sizes ─▶ container main size ─▶ lines
//!   ─▶ flexible lengths ─▶ cross sizes ─▶ main/cross alignment
//!   ─▶ container cross size ─▶ line packing
//!   ─▶ intrinsic sizes (measuring) | copy to boxes + lay out items (normal)
//! ```

mod base_size;
mod container_size;
mod cross_size;
mod flexible_lengths;
mod intrinsic;
mod line_breaking;
mod static_position;

use std::ops::Range;

use anyhow::{Context as _, Result};
use css_box::{
    AvailableSize, AvailableSpace, BoxId, LayoutContext, LayoutState, LayoutMode, Point,
    independent_formatting_context,
};
use css_orchestrator::style_model::{ComputedStyle, Size};
use css_sizing::{pixel_height, pixel_width, should_treat_height_as_auto, should_treat_width_as_auto};
use log::{debug, info};

use crate::chapter5::{AxisAgnosticAvailableSpace, cross_gap, main_gap};
use crate::chapter6::{FlexItem, collect_flex_items};
use crate::chapter7::{FlexAxes, resolve_axes};
use crate::chapter8::align_content::{
    CrossAxisAlignment, align_all_flex_lines, handle_align_content_stretch,
};
use crate::chapter8::align_items::{
    align_flex_items_along_cross_axis, resolve_cross_axis_auto_margins,
};
use crate::chapter8::justify::{MainAxisAlignment, distribute_remaining_free_space};
use crate::config::FlexLayoutConfig;
use crate::numeric::snap_to_layout_unit;

pub use flexible_lengths::resolve_flexible_lengths_for_line;
pub use line_breaking::collect_flex_items_into_flex_lines;
pub use static_position::calculate_static_position;

/// A run of consecutive flex items laid out along one main-axis line.
#[derive(Clone, Debug, PartialEq)]
pub struct FlexLine {
    /// Indices into the item arena.
    pub items: Range<usize>,
    pub cross_size: f32,
    /// Positive when items can grow, negative when they overflow the line.
    pub remaining_free_space: f32,
    pub chosen_flex_fraction: f32,
}

impl FlexLine {
    /// Line over `items`.
    ///
    /// # Panics
    /// Panics if `items` is empty; flex lines always hold at least one item.
    pub fn new(items: Range<usize>) -> Self {
        assert!(!items.is_empty(), "flex lines are never empty");
        Self {
            items,
            cross_size: 0.0,
            remaining_free_space: 0.0,
            chosen_flex_fraction: 0.0,
        }
    }

    #[inline]
    pub fn line_items<'items>(&self, items: &'items [FlexItem]) -> &'items [FlexItem] {
        &items[self.items.clone()]
    }

    #[inline]
    pub fn line_items_mut<'items>(&self, items: &'items mut [FlexItem]) -> &'items mut [FlexItem] {
        &mut items[self.items.clone()]
    }
}

/// Flex axis a size or edge belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Axis {
    Main,
    Cross,
}

/// State of one layout run of a flex container.
pub struct FlexLayout<'run, 'ctx, 'state> {
    ctx: LayoutContext<'ctx>,
    state: &'run mut LayoutState<'state>,
    container: BoxId,
    container_style: &'ctx ComputedStyle,
    config: FlexLayoutConfig,
    axes: FlexAxes,
    main_gap: f32,
    cross_gap: f32,
    items: Vec<FlexItem>,
    lines: Vec<FlexLine>,
    /// Space offered to the container's content box.
    available_for_container: AxisAgnosticAvailableSpace,
    /// Space offered to the items (step 2).
    available_for_items: AxisAgnosticAvailableSpace,
}

impl<'run, 'ctx, 'state> FlexLayout<'run, 'ctx, 'state> {
    /// Prepare a run of `container` in `available`, the space offered to its content box.
    pub fn new(
        ctx: LayoutContext<'ctx>,
        state: &'run mut LayoutState<'state>,
        container: BoxId,
        config: FlexLayoutConfig,
        available: AvailableSpace,
    ) -> Self {
        let container_style = ctx.tree.style(container);
        let axes = resolve_axes(
            container_style.flex_direction,
            container_style.flex_wrap,
            container_style.writing_mode,
        );
        let available_for_container = AxisAgnosticAvailableSpace::from_physical(available, axes.is_row);

        // Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-available>
        let container_used = state.get(container);
        let width = if container_used.has_definite_width() {
            AvailableSize::Definite(container_used.content_width())
        } else {
            available.width
        };
        let height = if container_used.has_definite_height() {
            AvailableSize::Definite(container_used.content_height())
        } else {
            available.height
        };
        let available_for_items =
            AxisAgnosticAvailableSpace::from_physical(AvailableSpace::new(width, height), axes.is_row);

        Self {
            ctx,
            state,
            container,
            container_style,
            config,
            axes,
            main_gap: main_gap(container_style, axes.is_row),
            cross_gap: cross_gap(container_style, axes.is_row),
            items: Vec::new(),
            lines: Vec::new(),
            available_for_container,
            available_for_items,
        }
    }

    /// Run the flex layout algorithm.
    ///
    /// Under an intrinsic sizing constraint only the container's intrinsic
    /// size is recorded. Otherwise item geometry is written to the layout
    /// state and every item's contents are laid out.
    ///
    /// # Errors
    /// Returns an error if a nested layout of an item fails.
    pub fn run(&mut self) -> Result<()> {
        debug!(
            target: "css::flexbox::items",
            "[FLEX] {:?} {:?} container={} items={}",
            self.container,
            self.axes,
            self.available_for_container,
            self.available_for_items
        );

        // 1. Generate anonymous flex items
        self.generate_flex_items();

        // Definite sizes, rule 3.
        self.preset_stretched_cross_sizes();

        // 3. Determine the flex base size and hypothetical main size of each item
        self.determine_flex_base_sizes()?;

        // 4. Determine the main size of the flex container
        if !self.is_intrinsic_sizing() {
            self.determine_main_size_of_flex_container()?;
        }

        // 5. Collect flex items into flex lines
        self.lines = collect_flex_items_into_flex_lines(
            &self.items,
            self.axes.is_single_line,
            self.line_breaking_limit(),
            self.main_gap,
        );

        // 6. Resolve the flexible lengths
        self.resolve_flexible_lengths();

        // 7. Determine the hypothetical cross size of each item
        self.determine_hypothetical_cross_sizes(false)?;

        // 8. Calculate the cross size of each flex line
        self.calculate_cross_size_of_each_flex_line();

        // 9. Handle 'align-content: stretch'
        if self.has_definite_size(self.container, Axis::Cross) {
            let inner_cross_size = self.inner_size(self.container, Axis::Cross);
            handle_align_content_stretch(
                &mut self.lines,
                inner_cross_size,
                self.container_style.align_content,
                self.cross_gap,
            );
        }

        // 11. Determine the used cross size of each flex item
        self.determine_used_cross_size_of_each_flex_item(false);

        // 12. Distribute any remaining free space
        self.distribute_any_remaining_free_space();

        // 13.-14. Resolve cross-axis auto margins and align items in their lines
        self.align_items_in_lines();

        // 15. Determine the flex container's used cross size
        self.determine_flex_container_used_cross_size();

        // Definite sizes, rule 4, then re-resolve cross sizes with percentages.
        self.mark_item_cross_sizes_definite();
        self.determine_hypothetical_cross_sizes(true)?;
        self.determine_used_cross_size_of_each_flex_item(true);
        self.align_items_in_lines();

        // 16. Align all flex lines
        self.align_lines();

        if self.is_intrinsic_sizing() {
            return self.determine_intrinsic_size_of_flex_container();
        }

        self.copy_dimensions_from_flex_items_to_boxes();
        self.layout_inside_flex_items()?;
        if self.config.dump_flex_lines {
            self.dump_flex_lines();
        }
        Ok(())
    }

    /// The container is being measured under a min- or max-content constraint.
    fn is_intrinsic_sizing(&self) -> bool {
        let space = self.available_for_container.space;
        space.width.is_intrinsic_sizing_constraint() || space.height.is_intrinsic_sizing_constraint()
    }

    fn generate_flex_items(&mut self) {
        let children = collect_flex_items(self.ctx.tree, self.container, self.axes.main_reverse);
        let container_used = self.state.get(self.container);
        self.items.reserve_exact(children.len());
        let capacity = self.items.capacity();
        for child in children {
            let style = self.ctx.tree.style(child);
            let used = self.state.get_mutable(child);
            used.initialize_from_style(style, &container_used);
            self.items.push(FlexItem::from_style(
                child,
                style,
                self.container_style,
                used,
                self.axes.is_row,
            ));
        }
        debug_assert_eq!(self.items.capacity(), capacity, "the item arena is never reallocated");
        debug!(
            target: "css::flexbox::items",
            "[FLEX-ITEMS] {:?}: {} items",
            self.container,
            self.items.len()
        );
    }

    fn resolve_flexible_lengths(&mut self) {
        let inner_main_size = self.inner_size(self.container, Axis::Main);
        for line in &mut self.lines {
            resolve_flexible_lengths_for_line(line, &mut self.items, inner_main_size, self.main_gap);
        }
        let main_sizes: Vec<(BoxId, f32)> = self
            .items
            .iter()
            .map(|item| (item.box_id, item.used_main_size()))
            .collect();
        for (id, size) in main_sizes {
            self.set_size(id, Axis::Main, size);
        }
    }

    fn distribute_any_remaining_free_space(&mut self) {
        let alignment = MainAxisAlignment {
            inner_main_size: self.inner_size(self.container, Axis::Main),
            justify_content: self.container_style.justify_content,
            main_reverse: self.axes.main_reverse,
            main_gap: self.main_gap,
        };
        for line in &self.lines {
            distribute_remaining_free_space(line, &mut self.items, &alignment);
        }
    }

    fn align_items_in_lines(&mut self) {
        for line in &self.lines {
            resolve_cross_axis_auto_margins(line, &mut self.items);
            align_flex_items_along_cross_axis(line, &mut self.items, self.axes.cross_reverse);
        }
    }

    fn align_lines(&mut self) {
        let alignment = CrossAxisAlignment {
            inner_cross_size: self.inner_size(self.container, Axis::Cross),
            align_content: self.container_style.align_content,
            cross_reverse: self.axes.cross_reverse,
            is_single_line: self.axes.is_single_line,
            cross_gap: self.cross_gap,
        };
        align_all_flex_lines(&self.lines, &mut self.items, &alignment);
    }

    /// Write used margins, sizes and offsets of every item to the layout state.
    fn copy_dimensions_from_flex_items_to_boxes(&mut self) {
        let snap = self.config.snap_to_layout_units;
        let round = |value: f32| if snap { snap_to_layout_unit(value) } else { value };
        let is_row = self.axes.is_row;
        for item in &self.items {
            let used = self.state.get_mutable(item.box_id);
            let margins = item.margins.to_physical(is_row);
            used.margin_top = margins.top;
            used.margin_right = margins.right;
            used.margin_bottom = margins.bottom;
            used.margin_left = margins.left;

            let main_size = round(item.used_main_size());
            let cross_size = round(item.used_cross_size());
            let (width, height, x, y) = if is_row {
                (main_size, cross_size, item.main_offset, item.cross_offset)
            } else {
                (cross_size, main_size, item.cross_offset, item.main_offset)
            };
            used.set_content_width(width);
            used.set_content_height(height);
            used.offset = Point {
                x: round(x),
                y: round(y),
            };
        }
    }

    /// Lay out the contents of every item at its final size.
    fn layout_inside_flex_items(&mut self) -> Result<()> {
        for item in &self.items {
            let id = item.box_id;
            let available = self
                .state
                .get(id)
                .available_inner_space_or_constraints_from(self.available_for_container.space);
            let mut context = independent_formatting_context(&self.ctx, id);
            context
                .run(&self.ctx, self.state, LayoutMode::Normal, available)
                .with_context(|| format!("laying out flex item {id:?} in {available}"))?;
        }
        Ok(())
    }

    fn dump_flex_lines(&self) {
        let used = self.state.get(self.container);
        info!(
            target: "css::flexbox::dump",
            "flex-container {:?}, direction: {}, current-size: {}x{}",
            self.container,
            if self.axes.is_row { "row" } else { "column" },
            used.content_width(),
            used.content_height()
        );
        for (line_index, line) in self.lines.iter().enumerate() {
            info!(
                target: "css::flexbox::dump",
                "{:?} flex-line #{line_index}: cross {}",
                self.container,
                line.cross_size
            );
            for (item_index, item) in line.line_items(&self.items).iter().enumerate() {
                info!(
                    target: "css::flexbox::dump",
                    "{:?}   flex-item #{item_index}: {:?} (main:{}, cross:{})",
                    self.container,
                    item.box_id,
                    item.main_size.unwrap_or(-1.0),
                    item.cross_size.unwrap_or(-1.0)
                );
            }
        }
    }

    //=========================================================================
    // Axis helpers
    //=========================================================================

    #[inline]
    fn is_horizontal(&self, axis: Axis) -> bool {
        (axis == Axis::Main) == self.axes.is_row
    }

    #[inline]
    fn style(&self, id: BoxId) -> &'ctx ComputedStyle {
        self.ctx.tree.style(id)
    }

    fn computed_size(&self, id: BoxId, axis: Axis) -> Size {
        let style = self.style(id);
        if self.is_horizontal(axis) { style.width } else { style.height }
    }

    fn computed_min_size(&self, id: BoxId, axis: Axis) -> Size {
        let style = self.style(id);
        if self.is_horizontal(axis) { style.min_width } else { style.min_height }
    }

    fn computed_max_size(&self, id: BoxId, axis: Axis) -> Size {
        let style = self.style(id);
        if self.is_horizontal(axis) { style.max_width } else { style.max_height }
    }

    fn has_definite_size(&self, id: BoxId, axis: Axis) -> bool {
        let used = self.state.get(id);
        if self.is_horizontal(axis) {
            used.has_definite_width()
        } else {
            used.has_definite_height()
        }
    }

    fn inner_size(&self, id: BoxId, axis: Axis) -> f32 {
        let used = self.state.get(id);
        if self.is_horizontal(axis) {
            used.content_width()
        } else {
            used.content_height()
        }
    }

    /// Content-box size for a `width`/`height`-like value of `id` on `axis`.
    fn specified_size(&self, id: BoxId, axis: Axis, size: Size) -> f32 {
        if self.is_horizontal(axis) {
            pixel_width(&self.ctx, self.state, id, size)
        } else {
            pixel_height(&self.ctx, self.state, id, size)
        }
    }

    fn has_min_size(&self, id: BoxId, axis: Axis) -> bool {
        self.computed_min_size(id, axis).length_percentage().is_some()
    }

    fn has_max_size(&self, id: BoxId, axis: Axis) -> bool {
        self.computed_max_size(id, axis).length_percentage().is_some()
    }

    /// Used `(min, max)` bounds of `id` on `axis`.
    ///
    /// Unset bounds are zero and infinity. Percentage bounds count as unset
    /// unless `resolve_percentages` is true.
    fn clamp_bounds(&self, id: BoxId, axis: Axis, resolve_percentages: bool) -> (f32, f32) {
        let resolve = |size: Size| {
            size.length_percentage()
                .filter(|value| resolve_percentages || !value.is_percentage())
                .map(|_| self.specified_size(id, axis, size))
        };
        (
            resolve(self.computed_min_size(id, axis)).unwrap_or(0.0),
            resolve(self.computed_max_size(id, axis)).unwrap_or(f32::INFINITY),
        )
    }

    /// Commit a definite content size of `id` on `axis`.
    fn set_size(&mut self, id: BoxId, axis: Axis, size: f32) {
        let horizontal = self.is_horizontal(axis);
        let used = self.state.get_mutable(id);
        if horizontal {
            used.set_content_width(size);
        } else {
            used.set_content_height(size);
        }
    }

    fn should_treat_size_as_auto(&self, id: BoxId, axis: Axis) -> bool {
        let style = self.style(id);
        if self.is_horizontal(axis) {
            should_treat_width_as_auto(style, self.available_for_items.space)
        } else {
            should_treat_height_as_auto(style, self.available_for_items.space)
        }
    }

    /// Space `id` offers its own contents, constraints inherited from the container's space.
    fn item_inner_space(&self, id: BoxId) -> AvailableSpace {
        self.state
            .get(id)
            .available_inner_space_or_constraints_from(self.available_for_container.space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if a line does not expose exactly the items of its range.
    fn line_items_follow_range() {
        let items: Vec<FlexItem> = (1u64..=4).map(|id| FlexItem::new(BoxId(id))).collect();
        let line = FlexLine::new(1..3);
        let ids: Vec<BoxId> = line.line_items(&items).iter().map(|item| item.box_id).collect();
        assert_eq!(ids, vec![BoxId(2), BoxId(3)]);
    }

    #[test]
    #[should_panic(expected = "never empty")]
    /// # Panics
    /// Panics because an empty flex line violates the line invariant.
    fn empty_line_is_rejected() {
        let _line = FlexLine::new(2..2);
    }
}
