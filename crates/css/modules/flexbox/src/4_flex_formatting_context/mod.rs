//! Flex Formatting Context (FFC)
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-formatting-context>

use anyhow::{Context as _, Result};
use css_box::{AvailableSpace, BoxId, FormattingContext, LayoutContext, LayoutMode, LayoutState, Point};
use css_orchestrator::style_model::Display;
use log::debug;

use crate::chapter9::{FlexLayout, calculate_static_position};
use crate::config::FlexLayoutConfig;

/// Returns true when a box with this `display` establishes a flex formatting context.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>
#[inline]
pub const fn establishes_flex_formatting_context(display: Display) -> bool {
    matches!(display, Display::Flex | Display::InlineFlex)
}

/// Formatting context of one flex container.
///
/// The host's [`css_box::FormattingContextFactory`] hands one out for every
/// box that establishes a flex formatting context; the container's own used
/// values (edges, and sizes the parent already resolved) must be in the
/// layout state before `run`.
#[derive(Clone, Debug)]
pub struct FlexFormattingContext {
    container: BoxId,
    config: FlexLayoutConfig,
}

impl FlexFormattingContext {
    /// Context for `container` with the default configuration.
    #[inline]
    pub fn new(container: BoxId) -> Self {
        Self::with_config(container, FlexLayoutConfig::default())
    }

    #[inline]
    pub const fn with_config(container: BoxId, config: FlexLayoutConfig) -> Self {
        Self { container, config }
    }

    #[inline]
    pub const fn container(&self) -> BoxId {
        self.container
    }

    /// Static position of an absolutely positioned child, relative to the
    /// container's padding edge. Valid once the container and the child are sized.
    pub fn calculate_static_position(
        &self,
        ctx: &LayoutContext<'_>,
        state: &LayoutState<'_>,
        child: BoxId,
    ) -> Point {
        calculate_static_position(ctx, state, self.container, child)
    }
}

impl FormattingContext for FlexFormattingContext {
    fn run(
        &mut self,
        ctx: &LayoutContext<'_>,
        state: &mut LayoutState<'_>,
        mode: LayoutMode,
        available: AvailableSpace,
    ) -> Result<()> {
        debug!(
            target: "css::flexbox::items",
            "[FLEX-RUN] {:?} {mode:?} in {available}",
            self.container
        );
        FlexLayout::new(*ctx, state, self.container, self.config, available)
            .run()
            .with_context(|| format!("flex layout of {:?}", self.container))
    }

    fn automatic_content_width(&self, state: &LayoutState<'_>) -> f32 {
        state.get(self.container).content_width()
    }

    fn automatic_content_height(&self, state: &LayoutState<'_>) -> f32 {
        state.get(self.container).content_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if `flex` and `inline-flex` do not establish a flex formatting context.
    fn flex_formats_established_for_flex_keywords() {
        assert!(establishes_flex_formatting_context(Display::Flex));
        assert!(establishes_flex_formatting_context(Display::InlineFlex));
    }

    #[test]
    /// # Panics
    /// Panics if a non-flex display value establishes a flex formatting context.
    fn non_flex_keywords_do_not_establish() {
        assert!(!establishes_flex_formatting_context(Display::Inline));
        assert!(!establishes_flex_formatting_context(Display::Block));
        assert!(!establishes_flex_formatting_context(Display::None));
        assert!(!establishes_flex_formatting_context(Display::Contents));
    }

    #[test]
    /// # Panics
    /// Panics if the configured context does not keep its container.
    fn keeps_container_and_config() {
        let config = FlexLayoutConfig {
            snap_to_layout_units: true,
            dump_flex_lines: false,
        };
        let context = FlexFormattingContext::with_config(BoxId(7), config);
        assert_eq!(context.container(), BoxId(7));
        assert_eq!(context.config, config);
    }
}
