#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WritingMode {
    #[default]
    HorizontalTb,
    VerticalRl,
    VerticalLr,
}

impl WritingMode {
    /// True for `horizontal-tb`, the only mode where the inline axis is physical x.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::HorizontalTb)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Auto,
    Scroll,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
}

impl Position {
    /// Absolutely and fixed positioned boxes are taken out of flow.
    #[inline]
    pub const fn is_out_of_flow(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Inline,
    Block,
    InlineBlock,
    Flex,
    InlineFlex,
    None,
    Contents,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxSizing {
    #[default]
    ContentBox,
    BorderBox,
}

/// Four physical sides of a box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> Sides<T> {
    /// Same value on every side.
    #[inline]
    pub const fn all(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// A `<length-percentage>` value. Percentages are stored as fractions (0.5 = 50%).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LengthPercentage {
    Length(f32),
    Percentage(f32),
}

impl Default for LengthPercentage {
    #[inline]
    fn default() -> Self {
        Self::Length(0.0)
    }
}

impl LengthPercentage {
    /// Resolve against the given percentage basis.
    #[inline]
    pub fn resolve(self, reference: f32) -> f32 {
        match self {
            Self::Length(px) => px,
            Self::Percentage(fraction) => fraction * reference,
        }
    }

    #[inline]
    pub const fn is_percentage(self) -> bool {
        matches!(self, Self::Percentage(_))
    }
}

/// Margin value: `<length-percentage> | auto`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LengthPercentageAuto {
    #[default]
    Auto,
    Length(f32),
    Percentage(f32),
}

impl LengthPercentageAuto {
    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Resolve against the given percentage basis; `auto` resolves to zero.
    #[inline]
    pub fn resolve_or_zero(self, reference: f32) -> f32 {
        match self {
            Self::Auto => 0.0,
            Self::Length(px) => px,
            Self::Percentage(fraction) => fraction * reference,
        }
    }
}

/// Value of `width`, `height` and their `min-*`/`max-*` counterparts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Size {
    #[default]
    Auto,
    /// `none`, only meaningful for `max-*` properties.
    None,
    Length(f32),
    /// Fraction of the containing block size (0.5 = 50%).
    Percentage(f32),
    MinContent,
    MaxContent,
    FitContent,
}

impl Size {
    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    #[inline]
    pub const fn is_length(self) -> bool {
        matches!(self, Self::Length(_))
    }

    #[inline]
    pub const fn contains_percentage(self) -> bool {
        matches!(self, Self::Percentage(_))
    }

    /// Intrinsic sizing keywords (`min-content`, `max-content`, `fit-content`).
    #[inline]
    pub const fn is_intrinsic_sizing_keyword(self) -> bool {
        matches!(self, Self::MinContent | Self::MaxContent | Self::FitContent)
    }

    /// Length or percentage as a `LengthPercentage`, if it is one.
    #[inline]
    pub const fn length_percentage(self) -> Option<LengthPercentage> {
        match self {
            Self::Length(px) => Some(LengthPercentage::Length(px)),
            Self::Percentage(fraction) => Some(LengthPercentage::Percentage(fraction)),
            _ => None,
        }
    }
}

impl From<LengthPercentage> for Size {
    #[inline]
    fn from(value: LengthPercentage) -> Self {
        match value {
            LengthPercentage::Length(px) => Self::Length(px),
            LengthPercentage::Percentage(fraction) => Self::Percentage(fraction),
        }
    }
}

/// Value of `flex-basis`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FlexBasis {
    #[default]
    Auto,
    Content,
    LengthPercentage(LengthPercentage),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    #[inline]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    #[inline]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JustifyContent {
    Start,
    #[default]
    FlexStart,
    End,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignItems {
    Normal,
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Start,
    End,
    SelfStart,
    SelfEnd,
    Center,
    Baseline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignSelf {
    #[default]
    Auto,
    Normal,
    Stretch,
    FlexStart,
    FlexEnd,
    Start,
    End,
    SelfStart,
    SelfEnd,
    Center,
    Baseline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignContent {
    Normal,
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Computed values read by layout. Lengths are in CSS px.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    // Display and box model
    pub display: Display,
    pub position: Position,
    pub overflow: Overflow,
    /// Writing mode used for axis mapping in layout algorithms.
    pub writing_mode: WritingMode,
    pub box_sizing: BoxSizing,
    pub margin: Sides<LengthPercentageAuto>,
    pub padding: Sides<LengthPercentage>,
    pub border_width: Sides<f32>,
    // Dimensions
    pub width: Size,
    pub height: Size,
    pub min_width: Size,
    pub min_height: Size,
    pub max_width: Size,
    pub max_height: Size,
    // Flexbox
    pub order: i32,
    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: FlexBasis,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_self: AlignSelf,
    pub align_content: AlignContent,
    /// Gap between rows (px).
    pub row_gap: f32,
    /// Gap between columns (px).
    pub column_gap: f32,
}

impl Default for ComputedStyle {
    #[inline]
    fn default() -> Self {
        Self {
            display: Display::Block,
            position: Position::Static,
            overflow: Overflow::Visible,
            writing_mode: WritingMode::HorizontalTb,
            box_sizing: BoxSizing::ContentBox,
            margin: Sides::all(LengthPercentageAuto::Length(0.0)),
            padding: Sides::all(LengthPercentage::Length(0.0)),
            border_width: Sides::all(0.0),
            width: Size::Auto,
            height: Size::Auto,
            min_width: Size::Auto,
            min_height: Size::Auto,
            max_width: Size::None,
            max_height: Size::None,
            order: 0,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::NoWrap,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: FlexBasis::Auto,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            align_self: AlignSelf::Auto,
            align_content: AlignContent::Stretch,
            row_gap: 0.0,
            column_gap: 0.0,
        }
    }
}

impl ComputedStyle {
    /// A `display: flex` style with initial values everywhere else.
    #[inline]
    pub fn flex_container() -> Self {
        Self {
            display: Display::Flex,
            ..Self::default()
        }
    }

    /// Shorthand for `flex: <grow> <shrink> <basis>`.
    #[inline]
    #[must_use]
    pub fn with_flex(mut self, grow: f32, shrink: f32, basis: FlexBasis) -> Self {
        self.flex_grow = grow;
        self.flex_shrink = shrink;
        self.flex_basis = basis;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if defaults diverge from CSS initial values used by flex layout.
    fn defaults_match_initial_values() {
        let style = ComputedStyle::default();
        assert!((style.flex_shrink - 1.0).abs() < f32::EPSILON);
        assert!(style.flex_grow.abs() < f32::EPSILON);
        assert_eq!(style.flex_basis, FlexBasis::Auto);
        assert!(style.max_width.is_none());
        assert!(style.min_height.is_auto());
        assert_eq!(style.align_self, AlignSelf::Auto);
        assert_eq!(style.margin.left, LengthPercentageAuto::Length(0.0));
    }

    #[test]
    /// # Panics
    /// Panics if percentage resolution does not use the reference size.
    fn resolves_length_percentages() {
        assert!((LengthPercentage::Percentage(0.25).resolve(200.0) - 50.0).abs() < 0.001);
        assert!((LengthPercentage::Length(12.0).resolve(200.0) - 12.0).abs() < 0.001);
        assert!(LengthPercentageAuto::Auto.resolve_or_zero(200.0).abs() < 0.001);
        assert_eq!(
            Size::Percentage(0.5).length_percentage(),
            Some(LengthPercentage::Percentage(0.5))
        );
        assert_eq!(Size::Auto.length_percentage(), None);
    }

    #[test]
    /// # Panics
    /// Panics if the flex shorthand helper does not set all three longhands.
    fn flex_shorthand_sets_longhands() {
        let style = ComputedStyle::default().with_flex(
            2.0,
            0.0,
            FlexBasis::LengthPercentage(LengthPercentage::Length(10.0)),
        );
        assert!((style.flex_grow - 2.0).abs() < f32::EPSILON);
        assert!(style.flex_shrink.abs() < f32::EPSILON);
        assert!(FlexDirection::ColumnReverse.is_reverse());
        assert!(!FlexDirection::ColumnReverse.is_row());
    }
}
