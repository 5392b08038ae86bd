//! Main-axis alignment: auto margins, then `justify-content`.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-main-align>

use css_orchestrator::style_model::JustifyContent;
use log::debug;

use super::{Distribution, SpacePlan};
use crate::chapter5::total_gap;
use crate::chapter6::FlexItem;
use crate::chapter9::FlexLine;

/// Container inputs for main-axis alignment of one line.
#[derive(Copy, Clone, Debug)]
pub struct MainAxisAlignment {
    pub inner_main_size: f32,
    pub justify_content: JustifyContent,
    pub main_reverse: bool,
    pub main_gap: f32,
}

/// Distribute the line's remaining free space and set each item's main offset.
///
/// Positive free space is shared equally by the line's auto margins; with no
/// positive free space they resolve to zero. Whatever is left is distributed by
/// `justify-content`; a line with auto margins packs as flex-start.
/// `main_offset` is the item's content-box offset from the container's
/// main-start content edge.
pub fn distribute_remaining_free_space(
    line: &FlexLine,
    items: &mut [FlexItem],
    alignment: &MainAxisAlignment,
) {
    let line_items = line.line_items_mut(items);
    let auto_margins: usize = line_items
        .iter()
        .map(|item| item.auto_margins.main_count())
        .sum();
    if auto_margins > 0 {
        let size_per_auto_margin = if line.remaining_free_space > 0.0 {
            line.remaining_free_space / auto_margins as f32
        } else {
            0.0
        };
        for item in line_items.iter_mut() {
            if item.auto_margins.main_before {
                item.margins.main_before = size_per_auto_margin;
            }
            if item.auto_margins.main_after {
                item.margins.main_after = size_per_auto_margin;
            }
        }
    }

    let outer_sizes: Vec<f32> = line_items.iter().map(FlexItem::outer_main_size).collect();
    let used_main_space: f32 = outer_sizes.iter().sum();
    let free_space = alignment.inner_main_size
        - used_main_space
        - total_gap(alignment.main_gap, outer_sizes.len());
    let distribution = if auto_margins > 0 {
        Distribution::FlexStart
    } else {
        Distribution::from(alignment.justify_content)
    };
    let plan = SpacePlan::new(distribution, free_space, outer_sizes.len(), alignment.main_reverse);
    let starts = plan.accumulate_offsets(alignment.inner_main_size, &outer_sizes, alignment.main_gap);
    for (item, start) in line_items.iter_mut().zip(starts) {
        item.main_offset = start + item.main_edges_before();
    }
    debug!(
        target: "css::flexbox::main_align",
        "[FLEX-JUSTIFY] {:?} free={free_space:.3} auto_margins={auto_margins} plan={plan:?}",
        alignment.justify_content
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_box::BoxId;

    fn sized_items(sizes: &[f32]) -> Vec<FlexItem> {
        sizes
            .iter()
            .zip(1u64..)
            .map(|(&size, id)| {
                let mut item = FlexItem::new(BoxId(id));
                item.main_size = Some(size);
                item
            })
            .collect()
    }

    fn line_for(items: &[FlexItem], inner: f32) -> FlexLine {
        let mut line = FlexLine::new(0..items.len());
        line.remaining_free_space = inner - items.iter().map(FlexItem::outer_main_size).sum::<f32>();
        line
    }

    #[test]
    /// # Panics
    /// Panics if `space-between` does not span the full inner main size.
    fn space_between_conserves_space() {
        let mut items = sized_items(&[30.0, 50.0, 20.0]);
        let line = line_for(&items, 300.0);
        let alignment = MainAxisAlignment {
            inner_main_size: 300.0,
            justify_content: JustifyContent::SpaceBetween,
            main_reverse: false,
            main_gap: 0.0,
        };
        distribute_remaining_free_space(&line, &mut items, &alignment);
        assert!(items[0].main_offset.abs() < 0.001);
        assert!((items[1].main_offset - 130.0).abs() < 0.001);
        let last = items[2];
        assert!((last.main_offset + last.outer_main_size() - 300.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if auto margins do not absorb positive free space before justification.
    fn auto_margins_take_free_space_first() {
        let mut items = sized_items(&[40.0, 60.0]);
        items[1].auto_margins.main_before = true;
        let line = line_for(&items, 200.0);
        let alignment = MainAxisAlignment {
            inner_main_size: 200.0,
            justify_content: JustifyContent::Center,
            main_reverse: false,
            main_gap: 0.0,
        };
        distribute_remaining_free_space(&line, &mut items, &alignment);
        assert!((items[1].margins.main_before - 100.0).abs() < 0.001);
        assert!(items[0].main_offset.abs() < 0.001);
        assert!((items[1].main_offset - 140.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if negative free space does not zero auto margins.
    fn auto_margins_zero_on_overflow() {
        let mut items = sized_items(&[150.0, 100.0]);
        items[0].auto_margins.main_after = true;
        items[0].margins.main_after = 7.0;
        let line = line_for(&items, 200.0);
        let alignment = MainAxisAlignment {
            inner_main_size: 200.0,
            justify_content: JustifyContent::FlexStart,
            main_reverse: false,
            main_gap: 0.0,
        };
        distribute_remaining_free_space(&line, &mut items, &alignment);
        assert!(items[0].margins.main_after.abs() < 0.001);
        assert!((items[1].main_offset - 150.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if a reversed main axis does not pack flex-start items against the end edge.
    fn reversed_flex_start_packs_at_end() {
        let mut items = sized_items(&[30.0, 50.0]);
        let line = line_for(&items, 200.0);
        let alignment = MainAxisAlignment {
            inner_main_size: 200.0,
            justify_content: JustifyContent::FlexStart,
            main_reverse: true,
            main_gap: 10.0,
        };
        distribute_remaining_free_space(&line, &mut items, &alignment);
        assert!((items[1].main_offset - 150.0).abs() < 0.001);
        assert!((items[0].main_offset - 110.0).abs() < 0.001);
    }
}
