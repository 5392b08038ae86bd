//! Item measurements and intrinsic sizes of the flex container.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#intrinsic-sizes>

use anyhow::Result;
use css_box::BoxId;
use css_sizing::{
    calculate_fit_content_height, calculate_fit_content_width, calculate_max_content_height,
    calculate_max_content_width, calculate_min_content_height, calculate_min_content_width,
};
use log::debug;

use super::{Axis, FlexLayout, FlexLine, collect_flex_items_into_flex_lines};
use crate::chapter5::total_gap;
use crate::chapter6::FlexItem;
use crate::numeric::css_clamp;

/// Which content contribution an intrinsic size is built from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Contribution {
    MinContent,
    MaxContent,
}

impl FlexLayout<'_, '_, '_> {
    //=========================================================================
    // Item measurements
    //=========================================================================

    pub(super) fn min_content_main_size(&self, id: BoxId) -> Result<f32> {
        if self.axes.is_row {
            return calculate_min_content_width(&self.ctx, self.state, id);
        }
        calculate_min_content_height(&self.ctx, self.state, id, self.item_inner_space(id).width)
    }

    pub(super) fn max_content_main_size(&self, id: BoxId) -> Result<f32> {
        if self.axes.is_row {
            return calculate_max_content_width(&self.ctx, self.state, id);
        }
        calculate_max_content_height(&self.ctx, self.state, id, self.item_inner_space(id).width)
    }

    pub(super) fn fit_content_main_size(&self, id: BoxId) -> Result<f32> {
        let available = self.item_inner_space(id);
        if self.axes.is_row {
            return calculate_fit_content_width(&self.ctx, self.state, id, available);
        }
        calculate_fit_content_height(&self.ctx, self.state, id, available)
    }

    pub(super) fn fit_content_cross_size(&self, id: BoxId) -> Result<f32> {
        let available = self.item_inner_space(id);
        if self.axes.is_row {
            return calculate_fit_content_height(&self.ctx, self.state, id, available);
        }
        calculate_fit_content_width(&self.ctx, self.state, id, available)
    }

    fn min_content_cross_size(&self, id: BoxId) -> Result<f32> {
        if self.axes.is_row {
            return calculate_min_content_height(&self.ctx, self.state, id, self.item_inner_space(id).width);
        }
        calculate_min_content_width(&self.ctx, self.state, id)
    }

    fn max_content_cross_size(&self, id: BoxId) -> Result<f32> {
        if self.axes.is_row {
            return calculate_max_content_height(&self.ctx, self.state, id, self.item_inner_space(id).width);
        }
        calculate_max_content_width(&self.ctx, self.state, id)
    }

    //=========================================================================
    // Contributions
    //=========================================================================

    /// Outer main-size contribution: the larger of the content size and a
    /// non-auto preferred size, clamped by the used min/max main sizes.
    ///
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#intrinsic-item-contributions>
    fn main_content_contribution(&self, item: &FlexItem, contribution: Contribution) -> Result<f32> {
        let id = item.box_id;
        let content_size = match contribution {
            Contribution::MinContent => self.min_content_main_size(id)?,
            Contribution::MaxContent => self.max_content_main_size(id)?,
        };
        let preferred = self.computed_size(id, Axis::Main);
        let larger_size = if preferred.length_percentage().is_some() {
            content_size.max(self.specified_size(id, Axis::Main, preferred))
        } else {
            content_size
        };
        let clamped = css_clamp(larger_size, item.min_main_size, item.max_main_size);
        Ok(item.add_main_margin_box_sizes(clamped))
    }

    fn cross_content_contribution(
        &self,
        item: &FlexItem,
        contribution: Contribution,
        resolve_percentage_min_max_sizes: bool,
    ) -> Result<f32> {
        let id = item.box_id;
        let size = if self.should_treat_size_as_auto(id, Axis::Cross) {
            match contribution {
                Contribution::MinContent => self.min_content_cross_size(id)?,
                Contribution::MaxContent => self.max_content_cross_size(id)?,
            }
        } else {
            self.specified_size(id, Axis::Cross, self.computed_size(id, Axis::Cross))
        };
        let (min, max) = self.clamp_bounds(id, Axis::Cross, resolve_percentage_min_max_sizes);
        Ok(item.add_cross_margin_box_sizes(css_clamp(size, min, max)))
    }

    fn largest_cross_contribution(
        &self,
        contribution: Contribution,
        resolve_percentage_min_max_sizes: bool,
    ) -> Result<f32> {
        let mut largest = 0.0f32;
        for item in &self.items {
            largest = largest.max(self.cross_content_contribution(
                item,
                contribution,
                resolve_percentage_min_max_sizes,
            )?);
        }
        Ok(largest)
    }

    //=========================================================================
    // Container intrinsic sizes
    //=========================================================================

    /// Record the container's intrinsic size on each axis measured under a constraint.
    pub(super) fn determine_intrinsic_size_of_flex_container(&mut self) -> Result<()> {
        if self.available_for_container.main.is_intrinsic_sizing_constraint() {
            let main_size = self.calculate_intrinsic_main_size_of_flex_container()?;
            self.set_size(self.container, Axis::Main, main_size);
        }
        if self.available_for_items.cross.is_intrinsic_sizing_constraint() {
            let cross_size = self.calculate_intrinsic_cross_size_of_flex_container()?;
            self.set_size(self.container, Axis::Cross, cross_size);
        }
        Ok(())
    }

    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#intrinsic-main-sizes>
    fn calculate_intrinsic_main_size_of_flex_container(&mut self) -> Result<f32> {
        let contribution = if self.available_for_items.main.is_min_content() {
            Contribution::MinContent
        } else {
            Contribution::MaxContent
        };

        // A multi-line container's min-content size is its largest min-content contribution.
        if !self.axes.is_single_line && contribution == Contribution::MinContent {
            let mut largest = 0.0f32;
            for item in &self.items {
                largest = largest.max(self.main_content_contribution(item, contribution)?);
            }
            return Ok(largest);
        }

        // 1. Desired flex fraction of every item
        for index in 0..self.items.len() {
            let mut item = self.items[index];
            let desired = self.main_content_contribution(&item, contribution)? - item.outer_flex_base_size();
            item.scaled_flex_shrink_factor = item.flex_shrink * item.flex_base_size;
            item.desired_flex_fraction = if desired > 0.0 {
                if item.flex_grow >= 1.0 {
                    desired / item.flex_grow
                } else {
                    desired * item.flex_grow
                }
            } else if desired < 0.0 {
                if item.scaled_flex_shrink_factor == 0.0 {
                    f32::NEG_INFINITY
                } else {
                    desired / item.scaled_flex_shrink_factor
                }
            } else {
                0.0
            };
            self.items[index] = item;
        }

        // 2. Place every item into one line of infinite length
        self.lines.clear();
        if !self.items.is_empty() {
            self.lines.push(FlexLine::new(0..self.items.len()));
        }

        let mut largest_sum = 0.0f32;
        for line in &mut self.lines {
            let line_items = line.line_items(&self.items);

            // 3. The line's chosen flex fraction
            let greatest = line_items
                .iter()
                .map(|item| item.desired_flex_fraction)
                .fold(0.0, f32::max);
            let sum_of_flex_grow_factors: f32 = line_items.iter().map(|item| item.flex_grow).sum();
            let sum_of_flex_shrink_factors: f32 = line_items.iter().map(|item| item.flex_shrink).sum();
            let mut chosen = greatest;
            if chosen > 0.0 && sum_of_flex_grow_factors < 1.0 {
                chosen /= sum_of_flex_grow_factors;
            }
            if chosen < 0.0 && sum_of_flex_shrink_factors < 1.0 {
                chosen *= sum_of_flex_shrink_factors;
            }
            if !chosen.is_finite() {
                chosen = 0.0;
            }
            line.chosen_flex_fraction = chosen;

            // 4. Flex every item by the chosen fraction and sum the outer sizes
            let sum: f32 = line_items
                .iter()
                .map(|item| {
                    let product = if item.desired_flex_fraction > 0.0 {
                        chosen * item.flex_grow
                    } else if item.desired_flex_fraction < 0.0 {
                        chosen * item.scaled_flex_shrink_factor
                    } else {
                        0.0
                    };
                    let size = css_clamp(item.flex_base_size + product, item.min_main_size, item.max_main_size);
                    item.add_main_margin_box_sizes(size)
                })
                .sum::<f32>()
                + total_gap(self.main_gap, line_items.len());

            // 5. The largest line sum
            largest_sum = largest_sum.max(sum);
        }

        debug!(
            target: "css::flexbox::intrinsic",
            "[FLEX-INTRINSIC] {:?} {:?} main size {largest_sum:.3}",
            self.container,
            contribution
        );
        Ok(largest_sum)
    }

    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#intrinsic-cross-sizes>
    fn calculate_intrinsic_cross_size_of_flex_container(&mut self) -> Result<f32> {
        let contribution = if self.available_for_items.cross.is_min_content() {
            Contribution::MinContent
        } else {
            Contribution::MaxContent
        };

        // Single-line containers, and the min-content size of multi-line
        // columns, take the largest contribution. Percentage bounds resolve
        // against the first pass.
        if self.axes.is_single_line || (!self.axes.is_row && contribution == Contribution::MinContent) {
            let first_pass = self.largest_cross_contribution(contribution, false)?;
            self.set_size(self.container, Axis::Cross, first_pass);
            return self.largest_cross_contribution(contribution, true);
        }

        // Multi-line: sum the line cross sizes of a layout in the constrained space.
        self.lines = collect_flex_items_into_flex_lines(
            &self.items,
            false,
            self.line_breaking_limit(),
            self.main_gap,
        );
        self.determine_hypothetical_cross_sizes(false)?;
        self.calculate_cross_size_of_each_flex_line();
        self.determine_used_cross_size_of_each_flex_item(false);
        let sum: f32 = self.lines.iter().map(|line| line.cross_size).sum::<f32>()
            + total_gap(self.cross_gap, self.lines.len());
        debug!(
            target: "css::flexbox::intrinsic",
            "[FLEX-INTRINSIC] {:?} {:?} cross size {sum:.3} over {} lines",
            self.container,
            contribution,
            self.lines.len()
        );
        Ok(sum)
    }
}
