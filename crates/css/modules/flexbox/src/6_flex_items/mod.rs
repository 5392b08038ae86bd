//! Flex Items — identification and per-item layout record
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>

use css_box::{BoxCapabilities, BoxId, LayoutTree, UsedValues};
use css_orchestrator::style_model::{AlignItems, AlignSelf, ComputedStyle, Display, FlexBasis, Sides};

use crate::chapter7::sort_items_by_order;

/// Box-edge values split by axis role.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AxisEdges {
    pub main_before: f32,
    pub main_after: f32,
    pub cross_before: f32,
    pub cross_after: f32,
}

impl AxisEdges {
    /// Map physical sides to axis roles.
    ///
    /// Row layouts map main to left/right, column layouts map main to top/bottom.
    #[inline]
    pub const fn from_physical(is_row: bool, top: f32, right: f32, bottom: f32, left: f32) -> Self {
        if is_row {
            Self {
                main_before: left,
                main_after: right,
                cross_before: top,
                cross_after: bottom,
            }
        } else {
            Self {
                main_before: top,
                main_after: bottom,
                cross_before: left,
                cross_after: right,
            }
        }
    }

    /// Inverse of [`AxisEdges::from_physical`].
    #[inline]
    pub const fn to_physical(self, is_row: bool) -> Sides<f32> {
        if is_row {
            Sides {
                top: self.cross_before,
                right: self.main_after,
                bottom: self.cross_after,
                left: self.main_before,
            }
        } else {
            Sides {
                top: self.main_before,
                right: self.cross_after,
                bottom: self.main_after,
                left: self.cross_before,
            }
        }
    }

    #[inline]
    pub fn main_sum(&self) -> f32 {
        self.main_before + self.main_after
    }

    #[inline]
    pub fn cross_sum(&self) -> f32 {
        self.cross_before + self.cross_after
    }
}

/// Which margins were specified as `auto`, by axis role.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AutoMargins {
    pub main_before: bool,
    pub main_after: bool,
    pub cross_before: bool,
    pub cross_after: bool,
}

impl AutoMargins {
    #[inline]
    pub fn main_count(&self) -> usize {
        usize::from(self.main_before) + usize::from(self.main_after)
    }

    #[inline]
    pub const fn has_cross(&self) -> bool {
        self.cross_before || self.cross_after
    }
}

/// Used cross-axis alignment of an item after resolving `align-self: auto`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ItemAlignment {
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
    /// Baseline alignment is laid out as flex-start.
    Baseline,
}

impl ItemAlignment {
    /// Resolve `align-self`, falling back to the container's `align-items`.
    ///
    /// Spec: <https://www.w3.org/TR/css-align-3/#align-self-property>
    pub const fn resolve(align_items: AlignItems, align_self: AlignSelf) -> Self {
        match align_self {
            AlignSelf::Auto => Self::from_align_items(align_items),
            AlignSelf::Normal | AlignSelf::Stretch => Self::Stretch,
            AlignSelf::FlexStart | AlignSelf::Start | AlignSelf::SelfStart => Self::FlexStart,
            AlignSelf::FlexEnd | AlignSelf::End | AlignSelf::SelfEnd => Self::FlexEnd,
            AlignSelf::Center => Self::Center,
            AlignSelf::Baseline => Self::Baseline,
        }
    }

    const fn from_align_items(align_items: AlignItems) -> Self {
        match align_items {
            AlignItems::Normal | AlignItems::Stretch => Self::Stretch,
            AlignItems::FlexStart | AlignItems::Start | AlignItems::SelfStart => Self::FlexStart,
            AlignItems::FlexEnd | AlignItems::End | AlignItems::SelfEnd => Self::FlexEnd,
            AlignItems::Center => Self::Center,
            AlignItems::Baseline => Self::Baseline,
        }
    }
}

/// One child's participation in flex layout.
///
/// Records live in a vector allocated once per layout run; later passes
/// address them by index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexItem {
    pub box_id: BoxId,

    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub alignment: ItemAlignment,
    /// Computed cross size (`height` in rows, `width` in columns) is `auto`.
    pub cross_size_is_auto: bool,

    /// Never `FlexBasis::Auto` once base sizes are determined.
    pub used_flex_basis: FlexBasis,
    pub used_flex_basis_is_definite: bool,

    pub flex_base_size: f32,
    pub hypothetical_main_size: f32,
    /// Used min main size: the specified one or the automatic minimum size.
    pub min_main_size: f32,
    pub max_main_size: f32,
    pub target_main_size: f32,
    pub main_size: Option<f32>,

    pub hypothetical_cross_size: f32,
    pub cross_size: Option<f32>,

    pub flex_factor: Option<f32>,
    pub scaled_flex_shrink_factor: f32,
    pub desired_flex_fraction: f32,

    pub frozen: bool,
    pub is_min_violation: bool,
    pub is_max_violation: bool,

    /// Content-box offsets relative to the container's content box once
    /// lines are aligned; line-relative before that.
    pub main_offset: f32,
    pub cross_offset: f32,

    pub margins: AxisEdges,
    pub borders: AxisEdges,
    pub padding: AxisEdges,
    pub auto_margins: AutoMargins,
}

impl FlexItem {
    /// Bare record with unit flex factors and no edges.
    pub const fn new(box_id: BoxId) -> Self {
        Self {
            box_id,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            alignment: ItemAlignment::Stretch,
            cross_size_is_auto: true,
            used_flex_basis: FlexBasis::Content,
            used_flex_basis_is_definite: false,
            flex_base_size: 0.0,
            hypothetical_main_size: 0.0,
            min_main_size: 0.0,
            max_main_size: f32::INFINITY,
            target_main_size: 0.0,
            main_size: None,
            hypothetical_cross_size: 0.0,
            cross_size: None,
            flex_factor: None,
            scaled_flex_shrink_factor: 0.0,
            desired_flex_fraction: 0.0,
            frozen: false,
            is_min_violation: false,
            is_max_violation: false,
            main_offset: 0.0,
            cross_offset: 0.0,
            margins: AxisEdges {
                main_before: 0.0,
                main_after: 0.0,
                cross_before: 0.0,
                cross_after: 0.0,
            },
            borders: AxisEdges {
                main_before: 0.0,
                main_after: 0.0,
                cross_before: 0.0,
                cross_after: 0.0,
            },
            padding: AxisEdges {
                main_before: 0.0,
                main_after: 0.0,
                cross_before: 0.0,
                cross_after: 0.0,
            },
            auto_margins: AutoMargins {
                main_before: false,
                main_after: false,
                cross_before: false,
                cross_after: false,
            },
        }
    }

    /// Record for `box_id` seeded from its style and resolved box edges.
    ///
    /// Auto margins start out as zero and are resolved during alignment.
    pub fn from_style(
        box_id: BoxId,
        style: &ComputedStyle,
        container_style: &ComputedStyle,
        used: &UsedValues,
        is_row: bool,
    ) -> Self {
        let margin = style.margin;
        let auto = |top: bool, right: bool, bottom: bool, left: bool| {
            if is_row {
                AutoMargins {
                    main_before: left,
                    main_after: right,
                    cross_before: top,
                    cross_after: bottom,
                }
            } else {
                AutoMargins {
                    main_before: top,
                    main_after: bottom,
                    cross_before: left,
                    cross_after: right,
                }
            }
        };
        let auto_margins = auto(
            margin.top.is_auto(),
            margin.right.is_auto(),
            margin.bottom.is_auto(),
            margin.left.is_auto(),
        );
        let cross_size_is_auto = if is_row {
            style.height.is_auto()
        } else {
            style.width.is_auto()
        };
        Self {
            flex_grow: style.flex_grow.max(0.0),
            flex_shrink: style.flex_shrink.max(0.0),
            alignment: ItemAlignment::resolve(container_style.align_items, style.align_self),
            cross_size_is_auto,
            margins: AxisEdges::from_physical(
                is_row,
                used.margin_top,
                used.margin_right,
                used.margin_bottom,
                used.margin_left,
            ),
            borders: AxisEdges::from_physical(
                is_row,
                used.border_top,
                used.border_right,
                used.border_bottom,
                used.border_left,
            ),
            padding: AxisEdges::from_physical(
                is_row,
                used.padding_top,
                used.padding_right,
                used.padding_bottom,
                used.padding_left,
            ),
            auto_margins,
            ..Self::new(box_id)
        }
    }

    #[inline]
    pub fn main_edges_before(&self) -> f32 {
        self.margins.main_before + self.borders.main_before + self.padding.main_before
    }

    #[inline]
    pub fn main_edges_after(&self) -> f32 {
        self.margins.main_after + self.borders.main_after + self.padding.main_after
    }

    #[inline]
    pub fn cross_edges_before(&self) -> f32 {
        self.margins.cross_before + self.borders.cross_before + self.padding.cross_before
    }

    #[inline]
    pub fn cross_edges_after(&self) -> f32 {
        self.margins.cross_after + self.borders.cross_after + self.padding.cross_after
    }

    /// Content size plus margins, borders and padding in the main axis.
    #[inline]
    pub fn add_main_margin_box_sizes(&self, content_size: f32) -> f32 {
        content_size + self.main_edges_before() + self.main_edges_after()
    }

    /// Content size plus margins, borders and padding in the cross axis.
    #[inline]
    pub fn add_cross_margin_box_sizes(&self, content_size: f32) -> f32 {
        content_size + self.cross_edges_before() + self.cross_edges_after()
    }

    #[inline]
    pub fn outer_flex_base_size(&self) -> f32 {
        self.add_main_margin_box_sizes(self.flex_base_size)
    }

    #[inline]
    pub fn outer_hypothetical_main_size(&self) -> f32 {
        self.add_main_margin_box_sizes(self.hypothetical_main_size)
    }

    #[inline]
    pub fn outer_target_main_size(&self) -> f32 {
        self.add_main_margin_box_sizes(self.target_main_size)
    }

    /// Resolved main size, or the target main size before resolution finishes.
    #[inline]
    pub fn used_main_size(&self) -> f32 {
        self.main_size.unwrap_or(self.target_main_size)
    }

    #[inline]
    pub fn outer_main_size(&self) -> f32 {
        self.add_main_margin_box_sizes(self.used_main_size())
    }

    #[inline]
    pub fn outer_hypothetical_cross_size(&self) -> f32 {
        self.add_cross_margin_box_sizes(self.hypothetical_cross_size)
    }

    /// Used cross size, or the hypothetical one before it is determined.
    #[inline]
    pub fn used_cross_size(&self) -> f32 {
        self.cross_size.unwrap_or(self.hypothetical_cross_size)
    }

    #[inline]
    pub fn outer_cross_size(&self) -> f32 {
        self.add_cross_margin_box_sizes(self.used_cross_size())
    }

    /// `align-self: stretch` with an auto cross size and no auto cross margins.
    #[inline]
    pub fn is_stretched(&self) -> bool {
        self.alignment == ItemAlignment::Stretch
            && self.cross_size_is_auto
            && !self.auto_margins.has_cross()
    }
}

/// Returns true when the child qualifies as an in-flow flex item.
///
/// Behavior:
/// - Excludes `display: none`.
/// - Excludes out-of-flow boxes (absolute/fixed).
/// - Excludes anonymous boxes holding only collapsible whitespace.
/// - Assumes `display: contents` was flattened upstream.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>
#[inline]
pub const fn is_flex_item(style: &ComputedStyle, capabilities: &BoxCapabilities) -> bool {
    !matches!(style.display, Display::None)
        && !style.position.is_out_of_flow()
        && !capabilities.is_collapsible_whitespace
}

/// In-flow children of `container` in `order`-modified document order,
/// reversed for reversed flex directions.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#order-modified-document-order>
pub fn collect_flex_items(tree: &dyn LayoutTree, container: BoxId, reverse: bool) -> Vec<BoxId> {
    let candidates: Vec<(BoxId, i32)> = tree
        .children(container)
        .iter()
        .copied()
        .filter(|&child| is_flex_item(tree.style(child), &tree.capabilities(child)))
        .map(|child| (child, tree.style(child).order))
        .collect();
    sort_items_by_order(&candidates, reverse)
}
