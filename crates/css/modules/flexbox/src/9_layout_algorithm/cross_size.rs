//! Cross sizes of items and lines.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#cross-sizing>

use anyhow::{Context as _, Result};
use css_box::{
    AvailableSize, AvailableSpace, LayoutMode, LayoutState, independent_formatting_context,
};
use css_sizing::{calculate_fit_content_height, calculate_fit_content_width};
use log::debug;

use super::{Axis, FlexLayout};
use crate::chapter6::FlexItem;
use crate::numeric::css_clamp;

impl FlexLayout<'_, '_, '_> {
    /// Step 7 for every item.
    ///
    /// The second pass, after the container's cross size is known, only
    /// re-clamps definite sizes with percentage bounds resolved.
    pub(super) fn determine_hypothetical_cross_sizes(&mut self, resolve_percentage_min_max_sizes: bool) -> Result<()> {
        for index in 0..self.items.len() {
            let mut item = self.items[index];
            item.hypothetical_cross_size = self
                .hypothetical_cross_size(&item, resolve_percentage_min_max_sizes)
                .with_context(|| format!("hypothetical cross size of {:?}", item.box_id))?;
            self.items[index] = item;
        }
        Ok(())
    }

    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-cross-item>
    fn hypothetical_cross_size(&self, item: &FlexItem, resolve_percentage_min_max_sizes: bool) -> Result<f32> {
        let id = item.box_id;
        let (min, max) = self.clamp_bounds(id, Axis::Cross, resolve_percentage_min_max_sizes);

        if self.has_definite_size(id, Axis::Cross) {
            let cross_size = if resolve_percentage_min_max_sizes {
                item.hypothetical_cross_size
            } else {
                self.inner_size(id, Axis::Cross)
            };
            return Ok(css_clamp(cross_size, min, max));
        }

        let main_size = item.used_main_size();
        if self.should_treat_size_as_auto(id, Axis::Cross) {
            let fit_content_cross_size = if self.axes.is_row {
                let available_width = item
                    .main_size
                    .map_or(AvailableSize::Indefinite, AvailableSize::Definite);
                calculate_fit_content_height(
                    &self.ctx,
                    self.state,
                    id,
                    AvailableSpace::new(available_width, AvailableSize::Indefinite),
                )?
            } else {
                calculate_fit_content_width(&self.ctx, self.state, id, self.available_for_items.space)?
            };
            return Ok(css_clamp(fit_content_cross_size, min, max));
        }

        // Indefinite but not auto: lay out at the used main size and measure.
        let mut throwaway = LayoutState::with_parent(self.state);
        let used = throwaway.get_mutable(id);
        let available = if self.axes.is_row {
            used.set_content_width(main_size);
            AvailableSpace::new(AvailableSize::Definite(main_size), AvailableSize::Indefinite)
        } else {
            used.set_content_height(main_size);
            AvailableSpace::new(AvailableSize::Indefinite, AvailableSize::Definite(main_size))
        };
        let mut context = independent_formatting_context(&self.ctx, id);
        context
            .run(&self.ctx, &mut throwaway, LayoutMode::Normal, available)
            .with_context(|| format!("laying out {id:?} in {available}"))?;
        let automatic_cross_size = if self.axes.is_row {
            context.automatic_content_height(&throwaway)
        } else {
            context.automatic_content_width(&throwaway)
        };
        Ok(css_clamp(automatic_cross_size, min, max))
    }

    /// Step 8.
    ///
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-cross-line>
    pub(super) fn calculate_cross_size_of_each_flex_line(&mut self) {
        if self.axes.is_single_line && self.has_definite_size(self.container, Axis::Cross) {
            let inner_cross_size = self.inner_size(self.container, Axis::Cross);
            for line in &mut self.lines {
                line.cross_size = inner_cross_size;
            }
            return;
        }

        for line in &mut self.lines {
            line.cross_size = line
                .line_items(&self.items)
                .iter()
                .map(FlexItem::outer_hypothetical_cross_size)
                .fold(0.0, f32::max);
        }

        // A single line is clamped by the container's min/max cross sizes.
        if self.axes.is_single_line {
            let (min, max) = self.clamp_bounds(self.container, Axis::Cross, false);
            for line in &mut self.lines {
                line.cross_size = css_clamp(line.cross_size, min, max);
            }
        }
        debug!(
            target: "css::flexbox::cross",
            "[FLEX-LINE-CROSS] {:?} {:?}",
            self.container,
            self.lines.iter().map(|line| line.cross_size).collect::<Vec<_>>()
        );
    }

    /// Step 11: stretched items fill their line, others keep their hypothetical size.
    ///
    /// Percentage min/max cross sizes only bound stretched items once the
    /// container's cross size is known.
    ///
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-stretch>
    pub(super) fn determine_used_cross_size_of_each_flex_item(&mut self, resolve_percentage_min_max_sizes: bool) {
        let bounds: Vec<(f32, f32)> = self
            .items
            .iter()
            .map(|item| self.clamp_bounds(item.box_id, Axis::Cross, resolve_percentage_min_max_sizes))
            .collect();
        for line in &self.lines {
            for index in line.items.clone() {
                let item = &mut self.items[index];
                item.cross_size = Some(if item.is_stretched() {
                    let (min, max) = bounds[index];
                    let unclamped = line.cross_size
                        - item.margins.cross_sum()
                        - item.borders.cross_sum()
                        - item.padding.cross_sum();
                    css_clamp(unclamped, min, max)
                } else {
                    item.hypothetical_cross_size
                });
            }
        }
    }
}
