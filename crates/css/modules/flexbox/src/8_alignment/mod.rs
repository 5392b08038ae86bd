//! Alignment — justify-content, align-items/align-self, align-content
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#alignment>
//!
//! Main-axis justification and line packing share one distribution planner:
//! a [`SpacePlan`] turns a distribution keyword plus the free space into a
//! leading offset and an extra between-spacing, and [`SpacePlan::accumulate_offsets`]
//! walks the entries from the packing edge.

pub mod align_content;
pub mod align_items;
pub mod justify;

use css_orchestrator::style_model::{AlignContent, JustifyContent};

/// Distribution keyword shared by `justify-content` and `align-content`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Distribution {
    /// Packed toward the flex-start edge, which is the end edge of a reversed axis.
    FlexStart,
    FlexEnd,
    /// Packed toward the physical start edge, regardless of reversal.
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl From<JustifyContent> for Distribution {
    fn from(justify: JustifyContent) -> Self {
        match justify {
            JustifyContent::FlexStart => Self::FlexStart,
            JustifyContent::FlexEnd => Self::FlexEnd,
            JustifyContent::Start => Self::Start,
            JustifyContent::End => Self::End,
            JustifyContent::Center => Self::Center,
            JustifyContent::SpaceBetween => Self::SpaceBetween,
            JustifyContent::SpaceAround => Self::SpaceAround,
            JustifyContent::SpaceEvenly => Self::SpaceEvenly,
        }
    }
}

impl From<AlignContent> for Distribution {
    /// `stretch` lines have already absorbed the free space and pack as flex-start.
    fn from(align: AlignContent) -> Self {
        match align {
            AlignContent::Normal | AlignContent::Stretch | AlignContent::FlexStart => {
                Self::FlexStart
            }
            AlignContent::FlexEnd => Self::FlexEnd,
            AlignContent::Start => Self::Start,
            AlignContent::End => Self::End,
            AlignContent::Center => Self::Center,
            AlignContent::SpaceBetween => Self::SpaceBetween,
            AlignContent::SpaceAround => Self::SpaceAround,
            AlignContent::SpaceEvenly => Self::SpaceEvenly,
        }
    }
}

/// Leading offset and extra spacing for one run of entries along an axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpacePlan {
    /// Offset of the first packed entry from the packing edge.
    pub leading: f32,
    /// Extra spacing between adjacent entries (excludes CSS gap).
    pub between: f32,
    /// Entries are packed against the end edge, walking backwards.
    pub from_end: bool,
}

impl SpacePlan {
    /// Plan `count` entries sharing `free_space`.
    ///
    /// Fallbacks: `space-between` needs two entries and positive free space,
    /// otherwise it packs as flex-start. `space-around` and `space-evenly`
    /// with negative free space center.
    pub fn new(distribution: Distribution, free_space: f32, count: usize, reverse: bool) -> Self {
        let packed = |from_end: bool| Self {
            leading: 0.0,
            between: 0.0,
            from_end,
        };
        let centered = Self {
            leading: free_space / 2.0,
            between: 0.0,
            from_end: false,
        };
        match distribution {
            Distribution::FlexStart => packed(reverse),
            Distribution::FlexEnd => packed(!reverse),
            Distribution::Start => packed(false),
            Distribution::End => packed(true),
            Distribution::Center => centered,
            Distribution::SpaceBetween => {
                if count >= 2 && free_space > 0.0 {
                    Self {
                        leading: 0.0,
                        between: free_space / (count - 1) as f32,
                        from_end: false,
                    }
                } else {
                    packed(reverse)
                }
            }
            Distribution::SpaceAround => {
                if free_space < 0.0 || count == 0 {
                    centered
                } else {
                    let between = free_space / count as f32;
                    Self {
                        leading: between / 2.0,
                        between,
                        from_end: false,
                    }
                }
            }
            Distribution::SpaceEvenly => {
                if free_space < 0.0 {
                    centered
                } else {
                    let between = free_space / (count + 1) as f32;
                    Self {
                        leading: between,
                        between,
                        from_end: false,
                    }
                }
            }
        }
    }

    /// Start offset of each entry, in physical order, within `extent`.
    pub fn accumulate_offsets(&self, extent: f32, sizes: &[f32], gap: f32) -> Vec<f32> {
        let mut offsets = vec![0.0; sizes.len()];
        if self.from_end {
            let mut cursor = extent - self.leading;
            for (offset, size) in offsets.iter_mut().zip(sizes).rev() {
                cursor -= size;
                *offset = cursor;
                cursor -= gap + self.between;
            }
        } else {
            let mut cursor = self.leading;
            for (offset, size) in offsets.iter_mut().zip(sizes) {
                *offset = cursor;
                cursor += size + gap + self.between;
            }
        }
        offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(distribution: Distribution, reverse: bool) -> Vec<f32> {
        let sizes = [10.0, 20.0, 30.0];
        let free = 100.0 - 60.0 - 2.0 * 5.0;
        SpacePlan::new(distribution, free, sizes.len(), reverse).accumulate_offsets(100.0, &sizes, 5.0)
    }

    fn assert_offsets(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len());
        for (got, want) in actual.iter().zip(expected) {
            assert!((got - want).abs() < 0.001, "got {actual:?}, expected {expected:?}");
        }
    }

    #[test]
    /// # Panics
    /// Panics if packing keywords do not honor the reversed axis.
    fn packing_respects_reverse() {
        assert_offsets(&offsets(Distribution::FlexStart, false), &[0.0, 15.0, 40.0]);
        assert_offsets(&offsets(Distribution::FlexStart, true), &[30.0, 45.0, 70.0]);
        assert_offsets(&offsets(Distribution::FlexEnd, false), &[30.0, 45.0, 70.0]);
        assert_offsets(&offsets(Distribution::Start, true), &[0.0, 15.0, 40.0]);
        assert_offsets(&offsets(Distribution::End, true), &[30.0, 45.0, 70.0]);
    }

    #[test]
    /// # Panics
    /// Panics if spacing keywords do not share the free space as specified.
    fn spacing_distributions() {
        assert_offsets(&offsets(Distribution::Center, false), &[15.0, 30.0, 55.0]);
        assert_offsets(&offsets(Distribution::SpaceBetween, false), &[0.0, 30.0, 70.0]);
        assert_offsets(&offsets(Distribution::SpaceAround, false), &[5.0, 30.0, 65.0]);
        assert_offsets(&offsets(Distribution::SpaceEvenly, false), &[7.5, 30.0, 62.5]);
    }

    #[test]
    /// # Panics
    /// Panics if fallbacks for insufficient items or negative free space are wrong.
    fn distribution_fallbacks() {
        let single = SpacePlan::new(Distribution::SpaceBetween, 50.0, 1, true);
        assert!(single.from_end);
        assert!(single.leading.abs() < f32::EPSILON);

        let overflow = SpacePlan::new(Distribution::SpaceAround, -20.0, 3, false);
        assert!((overflow.leading + 10.0).abs() < f32::EPSILON);
        assert!(overflow.between.abs() < f32::EPSILON);

        let evenly = SpacePlan::new(Distribution::SpaceEvenly, -8.0, 2, false);
        assert!((evenly.leading + 4.0).abs() < f32::EPSILON);
    }
}
