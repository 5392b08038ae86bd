//! CSS Flexible Box Layout Module Level 1 — Flex formatting context.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>
//!
//! ## Architecture
//!
//! A [`FlexFormattingContext`] lays out the children of one flex container.
//! Children's own contents are laid out (and measured for intrinsic sizes)
//! through their independent formatting contexts, obtained from the host's
//! `css_box::FormattingContextFactory`. All geometry is read from and written
//! to a `css_box::LayoutState`; measurements run on throwaway layers.
//!
//! ## Spec Coverage Status
//!
//! - [Production] Flex base sizes, automatic minimum sizes, flexible lengths
//! - [Production] Multi-line containers, `gap`, `wrap-reverse`
//! - [Production] `justify-content`, `align-items`/`align-self`, `align-content`, auto margins
//! - [Production] Intrinsic main and cross sizes of flex containers
//! - [Production] Static position of absolutely positioned children
//! - [MVP] `align-self: baseline` is laid out as `flex-start`
//! - [Not Implemented] Vertical writing modes, `visibility: collapse`

// Chapter modules mapped to the Flexbox Level 1 spec structure.
// Spec: §4 — Flex Formatting Context
#[path = "4_flex_formatting_context/mod.rs"]
mod chapter4;
// Spec: §5 — Flex Containers
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// Spec: §6 — Flex Items
#[path = "6_flex_items/mod.rs"]
mod chapter6;
// Spec: §7 — Axis and Order
#[path = "7_axis_and_order/mod.rs"]
mod chapter7;
// Spec: §8 — Alignment
#[path = "8_alignment/mod.rs"]
mod chapter8;
// Spec: §9 — Flex Layout Algorithm
#[path = "9_layout_algorithm/mod.rs"]
mod chapter9;

pub mod config;
mod numeric;

pub use chapter4::{FlexFormattingContext, establishes_flex_formatting_context};
pub use chapter5::{AxisAgnosticAvailableSpace, cross_gap, main_gap, total_gap};
pub use chapter6::{AutoMargins, AxisEdges, FlexItem, ItemAlignment, collect_flex_items, is_flex_item};
pub use chapter7::{FlexAxes, order_key, resolve_axes, sort_items_by_order};
pub use chapter8::align_content::{CrossAxisAlignment, align_all_flex_lines, handle_align_content_stretch};
pub use chapter8::align_items::{align_flex_items_along_cross_axis, resolve_cross_axis_auto_margins};
pub use chapter8::justify::{MainAxisAlignment, distribute_remaining_free_space};
pub use chapter8::{Distribution, SpacePlan};
pub use chapter9::{
    FlexLayout, FlexLine, calculate_static_position, collect_flex_items_into_flex_lines,
    resolve_flexible_lengths_for_line,
};
pub use config::FlexLayoutConfig;
pub use numeric::{css_clamp, snap_to_layout_unit};
