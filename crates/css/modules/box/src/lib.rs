//! CSS Box Model Module Level 3 — Box dimensions, margins, borders, padding.
//! Spec: <https://www.w3.org/TR/css-box-3/>
//!
//! Besides the box-model arithmetic this crate owns the per-layout geometry
//! store (`LayoutState`) and the seam through which formatting contexts invoke
//! each other (`FormattingContext`, `FormattingContextFactory`).

pub mod available_space;
pub mod formatting_context;
pub mod layout_state;
pub mod tree;
pub mod used_values;

pub use available_space::{AvailableSize, AvailableSpace};
pub use formatting_context::{
    FormattingContext, FormattingContextFactory, LayoutContext, LayoutMode,
    independent_formatting_context,
};
pub use layout_state::LayoutState;
pub use tree::{BoxCapabilities, BoxId, LayoutTree};
pub use used_values::{Point, SizeConstraint, UsedValues};

use css_orchestrator::style_model::{BoxSizing, ComputedStyle};

/// Resolved box edges in CSS px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxSides {
    pub margin_top: f32,
    pub margin_right: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,

    pub padding_top: f32,
    pub padding_right: f32,
    pub padding_bottom: f32,
    pub padding_left: f32,

    pub border_top: f32,
    pub border_right: f32,
    pub border_bottom: f32,
    pub border_left: f32,
}

impl BoxSides {
    /// Horizontal padding plus border.
    #[inline]
    pub fn horizontal_padding_border(&self) -> f32 {
        self.padding_left + self.padding_right + self.border_left + self.border_right
    }

    /// Vertical padding plus border.
    #[inline]
    pub fn vertical_padding_border(&self) -> f32 {
        self.padding_top + self.padding_bottom + self.border_top + self.border_bottom
    }
}

/// Resolve margin/padding/border widths from `ComputedStyle`.
///
/// Percentages on every side resolve against the containing block width.
/// Padding and border widths are clamped to be non-negative, margins can be
/// negative, and `auto` margins resolve to zero.
/// Spec: CSS 2.2 §8.1 (box model) and CSS Box Sizing L3.
pub fn compute_box_sides(style: &ComputedStyle, containing_block_width: f32) -> BoxSides {
    let margin = style.margin;
    let padding = style.padding;
    let border = style.border_width;
    BoxSides {
        margin_top: margin.top.resolve_or_zero(containing_block_width),
        margin_right: margin.right.resolve_or_zero(containing_block_width),
        margin_bottom: margin.bottom.resolve_or_zero(containing_block_width),
        margin_left: margin.left.resolve_or_zero(containing_block_width),

        padding_top: padding.top.resolve(containing_block_width).max(0.0),
        padding_right: padding.right.resolve(containing_block_width).max(0.0),
        padding_bottom: padding.bottom.resolve(containing_block_width).max(0.0),
        padding_left: padding.left.resolve(containing_block_width).max(0.0),

        border_top: border.top.max(0.0),
        border_right: border.right.max(0.0),
        border_bottom: border.bottom.max(0.0),
        border_left: border.left.max(0.0),
    }
}

/// Convert a specified size into a content-box size.
///
/// Spec: <https://www.w3.org/TR/css-sizing-3/#box-sizing>
#[inline]
pub fn content_box_size(specified: f32, box_sizing: BoxSizing, padding_border: f32) -> f32 {
    match box_sizing {
        BoxSizing::ContentBox => specified,
        BoxSizing::BorderBox => (specified - padding_border).max(0.0),
    }
}
