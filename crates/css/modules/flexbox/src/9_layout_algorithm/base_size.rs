//! Flex base size, hypothetical main size and automatic minimum size.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-main-item>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#min-size-auto>

use anyhow::{Context as _, Result};
use css_box::{BoxId, LayoutMode, LayoutState, independent_formatting_context};
use css_orchestrator::style_model::{FlexBasis, LengthPercentage, Overflow, Size};
use log::debug;

use super::{Axis, FlexLayout};
use crate::chapter6::FlexItem;
use crate::numeric::css_clamp;

impl FlexLayout<'_, '_, '_> {
    /// Step 3 for every item.
    pub(super) fn determine_flex_base_sizes(&mut self) -> Result<()> {
        for index in 0..self.items.len() {
            let mut item = self.items[index];
            self.determine_flex_base_size_and_hypothetical_main_size(&mut item)?;
            self.items[index] = item;
        }
        Ok(())
    }

    fn determine_flex_base_size_and_hypothetical_main_size(&mut self, item: &mut FlexItem) -> Result<()> {
        let id = item.box_id;
        if self.ctx.tree.capabilities(id).is_replaced {
            self.ctx.tree.prepare_for_replaced_layout(id);
        }

        item.used_flex_basis = self.used_flex_basis(id);
        item.used_flex_basis_is_definite = match item.used_flex_basis {
            FlexBasis::LengthPercentage(LengthPercentage::Length(_)) => true,
            FlexBasis::LengthPercentage(LengthPercentage::Percentage(_)) => {
                self.has_definite_size(self.container, Axis::Main)
            }
            FlexBasis::Auto | FlexBasis::Content => false,
        };
        item.flex_base_size = self
            .flex_base_size(item)
            .with_context(|| format!("flex base size of {id:?}"))?;

        item.max_main_size = if self.has_max_size(id, Axis::Main) {
            self.specified_size(id, Axis::Main, self.computed_max_size(id, Axis::Main))
        } else {
            f32::INFINITY
        };
        item.min_main_size = if self.has_min_size(id, Axis::Main) {
            self.specified_size(id, Axis::Main, self.computed_min_size(id, Axis::Main))
        } else {
            self.automatic_minimum_size(item)?
        };

        // Floor the content box at zero.
        item.hypothetical_main_size =
            css_clamp(item.flex_base_size, item.min_main_size, item.max_main_size).max(0.0);

        // Temporary main size so descendants can resolve percentages against it.
        self.set_temporary_main_size(id, item.hypothetical_main_size);

        debug!(
            target: "css::flexbox::base_size",
            "[FLEX-BASE] {id:?} basis={:?} definite={} base={:.3} min={:.3} max={:.3} hypothetical={:.3}",
            item.used_flex_basis,
            item.used_flex_basis_is_definite,
            item.flex_base_size,
            item.min_main_size,
            item.max_main_size,
            item.hypothetical_main_size
        );
        Ok(())
    }

    /// `flex-basis: auto` takes the main size property, or `content` if that is `auto`.
    ///
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#valdef-flex-basis-auto>
    fn used_flex_basis(&self, id: BoxId) -> FlexBasis {
        match self.style(id).flex_basis {
            FlexBasis::Auto => self
                .computed_size(id, Axis::Main)
                .length_percentage()
                .map_or(FlexBasis::Content, FlexBasis::LengthPercentage),
            basis => basis,
        }
    }

    fn flex_base_size(&self, item: &FlexItem) -> Result<f32> {
        let id = item.box_id;

        // A. Definite used flex basis
        if let FlexBasis::LengthPercentage(basis) = item.used_flex_basis
            && item.used_flex_basis_is_definite
        {
            return Ok(self.specified_size(id, Axis::Main, Size::from(basis)));
        }

        let is_content = item.used_flex_basis == FlexBasis::Content;

        // B. Aspect ratio with a definite cross size
        if is_content && let Some(main_size) = self.main_size_through_aspect_ratio(id) {
            return Ok(main_size);
        }

        // C. Content basis under an intrinsic sizing constraint
        if is_content && self.available_for_items.main.is_intrinsic_sizing_constraint() {
            return if self.available_for_items.main.is_min_content() {
                self.min_content_main_size(id)
            } else {
                self.max_content_main_size(id)
            };
        }

        // E. Size the item into the available space
        if self.has_definite_size(id, Axis::Main) {
            return Ok(self.inner_size(id, Axis::Main));
        }
        self.calculate_indefinite_main_size(item)
    }

    /// Definite cross size of a box with an aspect ratio, converted to the main axis.
    fn main_size_through_aspect_ratio(&self, id: BoxId) -> Option<f32> {
        let ratio = self
            .ctx
            .tree
            .capabilities(id)
            .intrinsic_aspect_ratio
            .filter(|ratio| *ratio > 0.0)?;
        if !self.has_definite_size(id, Axis::Cross) {
            return None;
        }
        let cross_size = self.inner_size(id, Axis::Cross);
        Some(if self.axes.is_row {
            cross_size * ratio
        } else {
            cross_size / ratio
        })
    }

    /// Main size of an item without a definite main size, using its flex basis
    /// in place of its main size. `content` sizes as max-content.
    fn calculate_indefinite_main_size(&self, item: &FlexItem) -> Result<f32> {
        let id = item.box_id;
        if item.used_flex_basis == FlexBasis::Content {
            return self.max_content_main_size(id);
        }
        if self.axes.is_row {
            return self.fit_content_main_size(id);
        }

        // Block-axis main size: lay out at the fit-content width and measure the height.
        let fit_content_cross_size = self.fit_content_cross_size(id)?;
        let mut throwaway = LayoutState::with_parent(self.state);
        throwaway.get_mutable(id).set_content_width(fit_content_cross_size);
        let mut context = independent_formatting_context(&self.ctx, id);
        context
            .run(&self.ctx, &mut throwaway, LayoutMode::Normal, self.available_for_items.space)
            .with_context(|| format!("laying out {id:?} at width {fit_content_cross_size}"))?;
        Ok(context.automatic_content_height(&throwaway))
    }

    /// Used min main size of an item whose `min-*` main size is `auto`.
    fn automatic_minimum_size(&self, item: &FlexItem) -> Result<f32> {
        let id = item.box_id;
        // Scroll containers have no content-based minimum.
        if self.style(id).overflow != Overflow::Visible {
            return Ok(0.0);
        }
        let content_size_suggestion = self.min_content_main_size(id)?;
        let unclamped = if self.has_definite_size(id, Axis::Main) {
            self.inner_size(id, Axis::Main).min(content_size_suggestion)
        } else if self.ctx.tree.capabilities(id).is_replaced
            && let Some(transferred) = self.main_size_through_aspect_ratio(id)
        {
            transferred.min(content_size_suggestion)
        } else {
            content_size_suggestion
        };
        Ok(unclamped.min(item.max_main_size))
    }

    fn set_temporary_main_size(&mut self, id: BoxId, size: f32) {
        let horizontal = self.is_horizontal(Axis::Main);
        let used = self.state.get_mutable(id);
        if horizontal {
            used.set_temporary_content_width(size);
        } else {
            used.set_temporary_content_height(size);
        }
    }
}
