//! Line packing along the cross axis (`align-content`).
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-stretch>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-align>

use css_orchestrator::style_model::AlignContent;
use log::debug;

use super::{Distribution, SpacePlan};
use crate::chapter5::total_gap;
use crate::chapter6::FlexItem;
use crate::chapter9::FlexLine;

/// Container inputs for packing flex lines.
#[derive(Copy, Clone, Debug)]
pub struct CrossAxisAlignment {
    pub inner_cross_size: f32,
    pub align_content: AlignContent,
    /// `flex-wrap: wrap-reverse`.
    pub cross_reverse: bool,
    pub is_single_line: bool,
    pub cross_gap: f32,
}

/// Grow every line by the same amount so the lines fill `inner_cross_size`.
///
/// Only applies to `align-content: stretch` (and `normal`) when the lines,
/// gaps included, are smaller than the container. Callers only invoke this
/// for containers with a definite cross size.
pub fn handle_align_content_stretch(
    lines: &mut [FlexLine],
    inner_cross_size: f32,
    align_content: AlignContent,
    cross_gap: f32,
) {
    if !matches!(align_content, AlignContent::Stretch | AlignContent::Normal) || lines.is_empty() {
        return;
    }
    let used: f32 = lines.iter().map(|line| line.cross_size).sum::<f32>() + total_gap(cross_gap, lines.len());
    if used >= inner_cross_size {
        return;
    }
    let extra_per_line = (inner_cross_size - used) / lines.len() as f32;
    for line in lines.iter_mut() {
        line.cross_size += extra_per_line;
    }
}

/// Move every item from line-relative to container-relative cross offsets.
///
/// A single line is centered in the container. Multiple lines are packed by
/// `align-content`; with `wrap-reverse` the first line sits at the cross-end
/// edge and flex-start/flex-end swap.
pub fn align_all_flex_lines(lines: &[FlexLine], items: &mut [FlexItem], alignment: &CrossAxisAlignment) {
    if lines.is_empty() {
        return;
    }
    if alignment.is_single_line {
        let center_of_line = alignment.inner_cross_size / 2.0;
        for line in lines {
            for item in line.line_items_mut(items) {
                item.cross_offset += center_of_line;
            }
        }
        return;
    }

    // Physical order: cross-start to cross-end.
    let physical: Vec<usize> = if alignment.cross_reverse {
        (0..lines.len()).rev().collect()
    } else {
        (0..lines.len()).collect()
    };
    let sizes: Vec<f32> = physical.iter().map(|&index| lines[index].cross_size).collect();
    let free_space = alignment.inner_cross_size
        - sizes.iter().sum::<f32>()
        - total_gap(alignment.cross_gap, sizes.len());
    let plan = SpacePlan::new(
        Distribution::from(alignment.align_content),
        free_space,
        sizes.len(),
        alignment.cross_reverse,
    );
    let starts = plan.accumulate_offsets(alignment.inner_cross_size, &sizes, alignment.cross_gap);
    for (&index, start) in physical.iter().zip(starts) {
        let line = &lines[index];
        let center_of_line = start + line.cross_size / 2.0;
        for item in line.line_items_mut(items) {
            item.cross_offset += center_of_line;
        }
    }
    debug!(
        target: "css::flexbox::cross",
        "[FLEX-ALIGN-CONTENT] {:?} lines={} free={free_space:.3} plan={plan:?}",
        alignment.align_content,
        lines.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_box::BoxId;

    fn two_lines() -> (Vec<FlexLine>, Vec<FlexItem>) {
        let items = vec![FlexItem::new(BoxId(1)), FlexItem::new(BoxId(2))];
        let mut first = FlexLine::new(0..1);
        first.cross_size = 20.0;
        let mut second = FlexLine::new(1..2);
        second.cross_size = 30.0;
        (vec![first, second], items)
    }

    fn alignment(align_content: AlignContent, cross_reverse: bool) -> CrossAxisAlignment {
        CrossAxisAlignment {
            inner_cross_size: 100.0,
            align_content,
            cross_reverse,
            is_single_line: false,
            cross_gap: 0.0,
        }
    }

    #[test]
    /// # Panics
    /// Panics if stretch does not share the leftover space equally between lines.
    fn stretch_grows_lines_equally() {
        let (mut lines, _items) = two_lines();
        handle_align_content_stretch(&mut lines, 100.0, AlignContent::Stretch, 10.0);
        assert!((lines[0].cross_size - 40.0).abs() < 0.001);
        assert!((lines[1].cross_size - 50.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if non-stretch values grow the lines.
    fn center_does_not_stretch() {
        let (mut lines, _items) = two_lines();
        handle_align_content_stretch(&mut lines, 100.0, AlignContent::Center, 0.0);
        assert!((lines[0].cross_size - 20.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if flex-end packing does not move the lines to the cross-end edge.
    fn flex_end_packs_lines_at_end() {
        let (lines, mut items) = two_lines();
        align_all_flex_lines(&lines, &mut items, &alignment(AlignContent::FlexEnd, false));
        // Line centers: 50 + 10 and 70 + 15.
        assert!((items[0].cross_offset - 60.0).abs() < 0.001);
        assert!((items[1].cross_offset - 85.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if wrap-reverse does not stack the first line at the cross-end edge.
    fn wrap_reverse_stacks_from_end() {
        let (lines, mut items) = two_lines();
        align_all_flex_lines(&lines, &mut items, &alignment(AlignContent::FlexStart, true));
        assert!((items[0].cross_offset - 90.0).abs() < 0.001);
        assert!((items[1].cross_offset - 65.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if a single line is not centered in the container.
    fn single_line_is_centered() {
        let (lines, mut items) = two_lines();
        let single = CrossAxisAlignment {
            is_single_line: true,
            ..alignment(AlignContent::Center, false)
        };
        align_all_flex_lines(&lines[..1], &mut items, &single);
        assert!((items[0].cross_offset - 50.0).abs() < 0.001);
    }
}
