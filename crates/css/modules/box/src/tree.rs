//! Read-only view of the box tree used by formatting contexts.

use css_orchestrator::style_model::ComputedStyle;

/// Opaque handle of a box in the host's box tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BoxId(pub u64);

/// Fixed capability set of a box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoxCapabilities {
    /// Replaced content (images, form controls).
    pub is_replaced: bool,
    pub natural_width: Option<f32>,
    pub natural_height: Option<f32>,
    /// Width divided by height.
    pub intrinsic_aspect_ratio: Option<f32>,
    /// Anonymous box wrapping only collapsible whitespace.
    pub is_collapsible_whitespace: bool,
}

impl BoxCapabilities {
    #[inline]
    pub const fn has_intrinsic_aspect_ratio(&self) -> bool {
        self.intrinsic_aspect_ratio.is_some()
    }
}

/// Box tree queries a formatting context may issue.
pub trait LayoutTree {
    fn style(&self, id: BoxId) -> &ComputedStyle;

    /// Children in document order.
    fn children(&self, id: BoxId) -> &[BoxId];

    /// Box whose content box acts as the containing block of `id`.
    fn containing_block(&self, id: BoxId) -> Option<BoxId>;

    fn capabilities(&self, id: BoxId) -> BoxCapabilities;

    /// Give replaced content a chance to compute its natural size.
    fn prepare_for_replaced_layout(&self, _id: BoxId) {}
}
