//! Flex Containers — container-level inputs shared by the layout passes
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

use std::fmt;

use css_box::{AvailableSize, AvailableSpace};
use css_orchestrator::style_model::ComputedStyle;

/// Available space expressed in flex axes, alongside the physical original.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisAgnosticAvailableSpace {
    pub main: AvailableSize,
    pub cross: AvailableSize,
    pub space: AvailableSpace,
}

impl AxisAgnosticAvailableSpace {
    #[inline]
    pub const fn from_physical(space: AvailableSpace, is_row: bool) -> Self {
        if is_row {
            Self {
                main: space.width,
                cross: space.height,
                space,
            }
        } else {
            Self {
                main: space.height,
                cross: space.width,
                space,
            }
        }
    }
}

impl fmt::Display for AxisAgnosticAvailableSpace {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "main {} cross {}", self.main, self.cross)
    }
}

/// Gap between adjacent items on a line.
///
/// Spec: <https://www.w3.org/TR/css-align-3/#column-row-gap>
#[inline]
pub const fn main_gap(style: &ComputedStyle, is_row: bool) -> f32 {
    if is_row { style.column_gap } else { style.row_gap }
}

/// Gap between adjacent flex lines.
#[inline]
pub const fn cross_gap(style: &ComputedStyle, is_row: bool) -> f32 {
    if is_row { style.row_gap } else { style.column_gap }
}

/// Total gap space between `count` adjacent entries.
#[inline]
pub fn total_gap(gap: f32, count: usize) -> f32 {
    gap * count.saturating_sub(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if gaps are not picked by axis.
    fn gaps_follow_axis() {
        let style = ComputedStyle {
            row_gap: 4.0,
            column_gap: 9.0,
            ..ComputedStyle::flex_container()
        };
        assert!((main_gap(&style, true) - 9.0).abs() < f32::EPSILON);
        assert!((cross_gap(&style, true) - 4.0).abs() < f32::EPSILON);
        assert!((main_gap(&style, false) - 4.0).abs() < f32::EPSILON);
        assert!((total_gap(9.0, 3) - 18.0).abs() < f32::EPSILON);
        assert!(total_gap(9.0, 0).abs() < f32::EPSILON);
    }

    #[test]
    /// # Panics
    /// Panics if column containers do not map main to height.
    fn column_maps_main_to_height() {
        let space = AvailableSpace::new(AvailableSize::Definite(10.0), AvailableSize::MaxContent);
        let agnostic = AxisAgnosticAvailableSpace::from_physical(space, false);
        assert_eq!(agnostic.main, AvailableSize::MaxContent);
        assert_eq!(agnostic.cross, AvailableSize::Definite(10.0));
    }
}
