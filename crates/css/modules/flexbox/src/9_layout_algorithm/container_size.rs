//! Used sizes of the flex container and definite item cross sizes.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-main-container>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-cross-container>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#definite-sizes>

use anyhow::{Context as _, Result};
use css_box::{AvailableSize, BoxId};
use css_sizing::{calculate_max_content_height, calculate_max_content_width};
use log::debug;

use super::{Axis, FlexLayout};
use crate::chapter5::total_gap;
use crate::numeric::css_clamp;

impl FlexLayout<'_, '_, '_> {
    /// Step 4. An indefinite main size takes the available space in a row and
    /// the max-content size otherwise.
    pub(super) fn determine_main_size_of_flex_container(&mut self) -> Result<()> {
        let container = self.container;
        if self.has_definite_size(container, Axis::Main) {
            return Ok(());
        }
        let available = self.available_for_container.space;
        let main_size = if self.axes.is_row {
            match available.width {
                AvailableSize::Definite(width) => width,
                _ => calculate_max_content_width(&self.ctx, self.state, container)
                    .context("max-content width of the flex container")?,
            }
        } else {
            calculate_max_content_height(&self.ctx, self.state, container, self.available_for_items.space.width)
                .context("max-content height of the flex container")?
        };
        let (min, max) = self.clamp_bounds(container, Axis::Main, false);
        let main_size = css_clamp(main_size, min, max);
        self.set_size(container, Axis::Main, main_size);
        debug!(
            target: "css::flexbox::lines",
            "[FLEX-CONTAINER] {container:?} main size {main_size:.3}"
        );
        Ok(())
    }

    /// Main size items are broken into lines against.
    ///
    /// Under a min-content constraint every item gets its own line; without a
    /// definite limit all items share one.
    pub(super) fn line_breaking_limit(&self) -> f32 {
        if self.has_definite_size(self.container, Axis::Main) {
            return self.inner_size(self.container, Axis::Main);
        }
        match self.available_for_items.main {
            AvailableSize::Definite(size) => size,
            AvailableSize::MinContent => 0.0,
            AvailableSize::MaxContent | AvailableSize::Indefinite => f32::INFINITY,
        }
    }

    /// Step 15.
    pub(super) fn determine_flex_container_used_cross_size(&mut self) {
        let container = self.container;
        let cross_size = if self.has_definite_size(container, Axis::Cross) {
            self.inner_size(container, Axis::Cross)
        } else {
            let computed = self.computed_size(container, Axis::Cross);
            if computed.is_auto() || computed.contains_percentage() || computed.is_intrinsic_sizing_keyword() {
                // Content-based: the lines and the gaps between them.
                self.lines.iter().map(|line| line.cross_size).sum::<f32>()
                    + total_gap(self.cross_gap, self.lines.len())
            } else {
                self.specified_size(container, Axis::Cross, computed)
            }
        };
        let (min, max) = self.clamp_bounds(container, Axis::Cross, false);
        let cross_size = css_clamp(cross_size, min, max);
        self.set_size(container, Axis::Cross, cross_size);
        debug!(
            target: "css::flexbox::cross",
            "[FLEX-CONTAINER] {container:?} cross size {cross_size:.3}"
        );
    }

    /// A single-line container with a definite cross size gives its stretched
    /// items a definite cross size up front: the container's inner cross size
    /// minus the item's edges, clamped by its min/max cross sizes.
    pub(super) fn preset_stretched_cross_sizes(&mut self) {
        if !self.axes.is_single_line || !self.has_definite_size(self.container, Axis::Cross) {
            return;
        }
        let inner_cross_size = self.inner_size(self.container, Axis::Cross);
        let stretched: Vec<(BoxId, f32)> = self
            .items
            .iter()
            .filter(|item| item.is_stretched())
            .map(|item| {
                let edges = item.margins.cross_sum() + item.borders.cross_sum() + item.padding.cross_sum();
                let (min, max) = self.clamp_bounds(item.box_id, Axis::Cross, true);
                (item.box_id, css_clamp(inner_cross_size - edges, min, max))
            })
            .collect();
        for (id, cross_size) in stretched {
            self.set_size(id, Axis::Cross, cross_size);
        }
    }

    /// Once line cross sizes are known, items of a container with an `auto`
    /// cross size have definite cross sizes.
    pub(super) fn mark_item_cross_sizes_definite(&mut self) {
        if !self.computed_size(self.container, Axis::Cross).is_auto() {
            return;
        }
        let cross_sizes: Vec<(BoxId, f32)> = self
            .items
            .iter()
            .map(|item| (item.box_id, item.used_cross_size()))
            .collect();
        for (id, cross_size) in cross_sizes {
            self.set_size(id, Axis::Cross, cross_size);
        }
    }
}
