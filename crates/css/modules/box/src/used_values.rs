//! Per-box used geometry recorded during layout.

use crate::available_space::{AvailableSize, AvailableSpace};
use crate::{compute_box_sides, content_box_size};
use css_orchestrator::style_model::{BoxSizing, ComputedStyle, Size};

/// Position of a box's content edge relative to its containing block's content edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Intrinsic sizing constraint a box is currently being measured under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeConstraint {
    #[default]
    None,
    MinContent,
    MaxContent,
}

/// Used values of one box.
///
/// Sizes are content-box sizes. A size is "definite" once a formatting
/// context commits to it with `set_content_width`/`set_content_height`;
/// the temporary setters record a size without making it definite.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UsedValues {
    content_width: f32,
    content_height: f32,
    has_definite_width: bool,
    has_definite_height: bool,

    pub width_constraint: SizeConstraint,
    pub height_constraint: SizeConstraint,

    pub margin_top: f32,
    pub margin_right: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,

    pub border_top: f32,
    pub border_right: f32,
    pub border_bottom: f32,
    pub border_left: f32,

    pub padding_top: f32,
    pub padding_right: f32,
    pub padding_bottom: f32,
    pub padding_left: f32,

    pub offset: Point,
}

impl UsedValues {
    #[inline]
    pub const fn content_width(&self) -> f32 {
        self.content_width
    }

    #[inline]
    pub const fn content_height(&self) -> f32 {
        self.content_height
    }

    #[inline]
    pub const fn has_definite_width(&self) -> bool {
        self.has_definite_width
    }

    #[inline]
    pub const fn has_definite_height(&self) -> bool {
        self.has_definite_height
    }

    /// Commit a definite content width.
    #[inline]
    pub fn set_content_width(&mut self, width: f32) {
        self.content_width = width.max(0.0);
        self.has_definite_width = true;
    }

    /// Commit a definite content height.
    #[inline]
    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = height.max(0.0);
        self.has_definite_height = true;
    }

    /// Record a width without changing its definiteness.
    #[inline]
    pub fn set_temporary_content_width(&mut self, width: f32) {
        self.content_width = width.max(0.0);
    }

    /// Record a height without changing its definiteness.
    #[inline]
    pub fn set_temporary_content_height(&mut self, height: f32) {
        self.content_height = height.max(0.0);
    }

    #[inline]
    pub fn set_indefinite_content_width(&mut self) {
        self.content_width = 0.0;
        self.has_definite_width = false;
    }

    #[inline]
    pub fn set_indefinite_content_height(&mut self) {
        self.content_height = 0.0;
        self.has_definite_height = false;
    }

    #[inline]
    pub fn border_box_left(&self) -> f32 {
        self.border_left + self.padding_left
    }

    #[inline]
    pub fn border_box_right(&self) -> f32 {
        self.border_right + self.padding_right
    }

    #[inline]
    pub fn border_box_top(&self) -> f32 {
        self.border_top + self.padding_top
    }

    #[inline]
    pub fn border_box_bottom(&self) -> f32 {
        self.border_bottom + self.padding_bottom
    }

    #[inline]
    pub fn margin_box_left(&self) -> f32 {
        self.margin_left + self.border_box_left()
    }

    #[inline]
    pub fn margin_box_right(&self) -> f32 {
        self.margin_right + self.border_box_right()
    }

    #[inline]
    pub fn margin_box_top(&self) -> f32 {
        self.margin_top + self.border_box_top()
    }

    #[inline]
    pub fn margin_box_bottom(&self) -> f32 {
        self.margin_bottom + self.border_box_bottom()
    }

    #[inline]
    pub fn margin_box_width(&self) -> f32 {
        self.margin_box_left() + self.content_width + self.margin_box_right()
    }

    #[inline]
    pub fn margin_box_height(&self) -> f32 {
        self.margin_box_top() + self.content_height + self.margin_box_bottom()
    }

    /// Space available to this box's children.
    ///
    /// A box being measured under an intrinsic constraint passes that
    /// constraint on. Otherwise its definite content size is offered, and an
    /// indefinite size inherits an intrinsic constraint from `outer`.
    pub fn available_inner_space_or_constraints_from(&self, outer: AvailableSpace) -> AvailableSpace {
        let mut width = match self.width_constraint {
            SizeConstraint::MinContent => AvailableSize::MinContent,
            SizeConstraint::MaxContent => AvailableSize::MaxContent,
            SizeConstraint::None if self.has_definite_width => AvailableSize::Definite(self.content_width),
            SizeConstraint::None => AvailableSize::Indefinite,
        };
        let mut height = match self.height_constraint {
            SizeConstraint::MinContent => AvailableSize::MinContent,
            SizeConstraint::MaxContent => AvailableSize::MaxContent,
            SizeConstraint::None if self.has_definite_height => {
                AvailableSize::Definite(self.content_height)
            }
            SizeConstraint::None => AvailableSize::Indefinite,
        };
        if width.is_indefinite() && outer.width.is_intrinsic_sizing_constraint() {
            width = outer.width;
        }
        if height.is_indefinite() && outer.height.is_intrinsic_sizing_constraint() {
            height = outer.height;
        }
        AvailableSpace::new(width, height)
    }

    /// Seed box edges and definite sizes from computed style.
    ///
    /// Lengths are always definite. Percentages are definite only when the
    /// containing block's size on that axis is. Definite sizes are converted to
    /// content-box sizes and clamped by any resolvable `min-*`/`max-*`.
    pub fn initialize_from_style(&mut self, style: &ComputedStyle, containing_block: &Self) {
        let sides = compute_box_sides(style, containing_block.content_width);
        self.margin_top = sides.margin_top;
        self.margin_right = sides.margin_right;
        self.margin_bottom = sides.margin_bottom;
        self.margin_left = sides.margin_left;
        self.border_top = sides.border_top;
        self.border_right = sides.border_right;
        self.border_bottom = sides.border_bottom;
        self.border_left = sides.border_left;
        self.padding_top = sides.padding_top;
        self.padding_right = sides.padding_right;
        self.padding_bottom = sides.padding_bottom;
        self.padding_left = sides.padding_left;

        let horizontal = AxisReference {
            size: containing_block.content_width,
            definite: containing_block.has_definite_width,
            box_sizing: style.box_sizing,
            padding_border: sides.horizontal_padding_border(),
        };
        match horizontal.clamped(style.width, style.min_width, style.max_width) {
            Some(width) => self.set_content_width(width),
            None => self.set_indefinite_content_width(),
        }

        let vertical = AxisReference {
            size: containing_block.content_height,
            definite: containing_block.has_definite_height,
            box_sizing: style.box_sizing,
            padding_border: sides.vertical_padding_border(),
        };
        match vertical.clamped(style.height, style.min_height, style.max_height) {
            Some(height) => self.set_content_height(height),
            None => self.set_indefinite_content_height(),
        }
    }
}

/// Percentage basis and box-sizing inputs for one axis.
struct AxisReference {
    size: f32,
    definite: bool,
    box_sizing: BoxSizing,
    padding_border: f32,
}

impl AxisReference {
    fn resolve(&self, size: Size) -> Option<f32> {
        let specified = match size {
            Size::Length(px) => px,
            Size::Percentage(fraction) if self.definite => fraction * self.size,
            _ => return None,
        };
        Some(content_box_size(specified, self.box_sizing, self.padding_border))
    }

    fn clamped(&self, size: Size, min: Size, max: Size) -> Option<f32> {
        let value = self.resolve(size)?;
        let min_value = self.resolve(min).unwrap_or(0.0);
        let max_value = self.resolve(max).unwrap_or(f32::INFINITY);
        Some(value.min(max_value).max(min_value))
    }
}
