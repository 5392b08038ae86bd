//! Available space handed from a parent formatting context to a child.
//! Spec: <https://www.w3.org/TR/css-sizing-3/#available>

use core::fmt;

/// Available size along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AvailableSize {
    /// Fixed size (e.g., parent has width: 400px)
    Definite(f32),

    /// Indefinite size (e.g., parent has height: auto)
    Indefinite,

    /// Sizing under a min-content constraint
    MinContent,

    /// Sizing under a max-content constraint
    MaxContent,
}

impl AvailableSize {
    #[inline]
    pub const fn is_definite(self) -> bool {
        matches!(self, Self::Definite(_))
    }

    #[inline]
    pub const fn is_indefinite(self) -> bool {
        matches!(self, Self::Indefinite)
    }

    #[inline]
    pub const fn is_min_content(self) -> bool {
        matches!(self, Self::MinContent)
    }

    #[inline]
    pub const fn is_max_content(self) -> bool {
        matches!(self, Self::MaxContent)
    }

    /// True under a min-content or max-content constraint.
    #[inline]
    pub const fn is_intrinsic_sizing_constraint(self) -> bool {
        matches!(self, Self::MinContent | Self::MaxContent)
    }

    /// Definite value, zero under a min-content constraint, infinity otherwise.
    #[inline]
    pub const fn to_px(self) -> f32 {
        match self {
            Self::Definite(size) => size,
            Self::MinContent => 0.0,
            Self::MaxContent | Self::Indefinite => f32::INFINITY,
        }
    }

    /// Definite value, or zero for every other kind.
    #[inline]
    pub const fn to_px_or_zero(self) -> f32 {
        match self {
            Self::Definite(size) => size,
            _ => 0.0,
        }
    }

    /// The definite value, if any.
    #[inline]
    pub const fn definite(self) -> Option<f32> {
        match self {
            Self::Definite(size) => Some(size),
            _ => None,
        }
    }
}

impl fmt::Display for AvailableSize {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Definite(size) => write!(formatter, "definite({size})"),
            Self::Indefinite => formatter.write_str("indefinite"),
            Self::MinContent => formatter.write_str("min-content"),
            Self::MaxContent => formatter.write_str("max-content"),
        }
    }
}

/// Available width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvailableSpace {
    pub width: AvailableSize,
    pub height: AvailableSize,
}

impl AvailableSpace {
    #[inline]
    pub const fn new(width: AvailableSize, height: AvailableSize) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for AvailableSpace {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} x {}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if pixel conversion does not follow the constraint kind.
    fn pixel_conversion_per_kind() {
        assert!((AvailableSize::Definite(40.0).to_px() - 40.0).abs() < f32::EPSILON);
        assert!(AvailableSize::MinContent.to_px().abs() < f32::EPSILON);
        assert!(AvailableSize::MaxContent.to_px().is_infinite());
        assert!(AvailableSize::Indefinite.to_px().is_infinite());
        assert!(AvailableSize::MaxContent.to_px_or_zero().abs() < f32::EPSILON);
        assert_eq!(AvailableSize::Indefinite.definite(), None);
    }

    #[test]
    /// # Panics
    /// Panics if intrinsic constraints are not classified as such.
    fn classifies_intrinsic_constraints() {
        assert!(AvailableSize::MinContent.is_intrinsic_sizing_constraint());
        assert!(AvailableSize::MaxContent.is_intrinsic_sizing_constraint());
        assert!(!AvailableSize::Indefinite.is_intrinsic_sizing_constraint());
        assert!(!AvailableSize::Definite(0.0).is_intrinsic_sizing_constraint());
        let space = AvailableSpace::new(AvailableSize::Definite(10.0), AvailableSize::MaxContent);
        assert_eq!(space.to_string(), "definite(10) x max-content");
    }
}
