//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use log::debug;

use super::FlexLine;
use crate::chapter5::total_gap;
use crate::chapter6::FlexItem;
use crate::numeric::css_clamp;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum FlexFactor {
    Grow,
    Shrink,
}

/// Outer sizes of the line's items: target size when frozen, base size otherwise.
fn remaining_free_space(items: &[FlexItem], available: f32) -> f32 {
    let used: f32 = items
        .iter()
        .map(|item| {
            if item.frozen {
                item.outer_target_main_size()
            } else {
                item.outer_flex_base_size()
            }
        })
        .sum();
    available - used
}

fn sum_of_unfrozen_flex_factors(items: &[FlexItem]) -> f32 {
    items
        .iter()
        .filter(|item| !item.frozen)
        .filter_map(|item| item.flex_factor)
        .sum()
}

/// Resolve the main size of every item on `line`.
///
/// Items grow when their outer hypothetical sizes leave room in
/// `inner_main_size` (minus gaps), otherwise they shrink in proportion to
/// their scaled shrink factors. Sizes that violate an item's min/max main
/// size are clamped and frozen, one violation direction per iteration, so the
/// loop runs at most once per item. Returns the number of iterations.
///
/// # Panics
/// Panics if an iteration fails to freeze an item.
pub fn resolve_flexible_lengths_for_line(
    line: &mut FlexLine,
    items: &mut [FlexItem],
    inner_main_size: f32,
    main_gap: f32,
) -> usize {
    let line_items = line.line_items_mut(items);
    let available = inner_main_size - total_gap(main_gap, line_items.len());

    // 1. Determine the used flex factor
    let hypothetical_sum: f32 = line_items.iter().map(FlexItem::outer_hypothetical_main_size).sum();
    let used_flex_factor = if hypothetical_sum < available {
        FlexFactor::Grow
    } else {
        FlexFactor::Shrink
    };

    // 2.-3. Size inflexible items
    for item in line_items.iter_mut() {
        item.target_main_size = item.flex_base_size;
        item.frozen = false;
        let factor = match used_flex_factor {
            FlexFactor::Grow => item.flex_grow,
            FlexFactor::Shrink => item.flex_shrink,
        };
        item.flex_factor = Some(factor);
        let inflexible = factor == 0.0
            || (used_flex_factor == FlexFactor::Grow && item.flex_base_size > item.hypothetical_main_size)
            || (used_flex_factor == FlexFactor::Shrink && item.flex_base_size < item.hypothetical_main_size);
        if inflexible {
            item.frozen = true;
            item.target_main_size = item.hypothetical_main_size;
        }
    }

    // 4. Calculate initial free space
    let initial_free_space = remaining_free_space(line_items, available);

    // 5. Loop
    let mut iterations = 0;
    while !line_items.iter().all(|item| item.frozen) {
        iterations += 1;
        assert!(
            iterations <= line_items.len(),
            "flexible length resolution must freeze an item per iteration"
        );

        // b. Remaining free space
        line.remaining_free_space = remaining_free_space(line_items, available);
        let sum_of_flex_factors = sum_of_unfrozen_flex_factors(line_items);
        if sum_of_flex_factors < 1.0 {
            let scaled = initial_free_space * sum_of_flex_factors;
            if scaled.abs() < line.remaining_free_space.abs() {
                line.remaining_free_space = scaled;
            }
        }

        // c. Distribute free space proportional to the flex factors
        if line.remaining_free_space != 0.0 {
            match used_flex_factor {
                FlexFactor::Grow => {
                    for item in line_items.iter_mut().filter(|item| !item.frozen) {
                        let ratio = item.flex_factor.unwrap_or(0.0) / sum_of_flex_factors;
                        item.target_main_size = item.flex_base_size + line.remaining_free_space * ratio;
                    }
                }
                FlexFactor::Shrink => {
                    for item in line_items.iter_mut().filter(|item| !item.frozen) {
                        item.scaled_flex_shrink_factor = item.flex_factor.unwrap_or(0.0) * item.flex_base_size;
                    }
                    let sum_of_scaled_factors: f32 = line_items
                        .iter()
                        .filter(|item| !item.frozen)
                        .map(|item| item.scaled_flex_shrink_factor)
                        .sum();
                    for item in line_items.iter_mut().filter(|item| !item.frozen) {
                        let ratio = if sum_of_scaled_factors == 0.0 {
                            1.0
                        } else {
                            item.scaled_flex_shrink_factor / sum_of_scaled_factors
                        };
                        item.target_main_size =
                            item.flex_base_size - line.remaining_free_space.abs() * ratio;
                    }
                }
            }
        }

        // d. Fix min/max violations
        let mut total_violation = 0.0f32;
        for item in line_items.iter_mut().filter(|item| !item.frozen) {
            let unclamped = item.target_main_size;
            item.target_main_size =
                css_clamp(unclamped, item.min_main_size, item.max_main_size).max(0.0);
            item.is_min_violation = item.target_main_size > unclamped;
            item.is_max_violation = item.target_main_size < unclamped;
            total_violation += item.target_main_size - unclamped;
        }

        // e. Freeze over-flexed items
        for item in line_items.iter_mut().filter(|item| !item.frozen) {
            item.frozen = if total_violation == 0.0 {
                true
            } else if total_violation > 0.0 {
                item.is_min_violation
            } else {
                item.is_max_violation
            };
        }
    }

    line.remaining_free_space = remaining_free_space(line_items, available);

    // 6. Set each item's used main size to its target main size
    for item in line_items.iter_mut() {
        item.main_size = Some(item.target_main_size);
    }
    debug!(
        target: "css::flexbox::flexible_lengths",
        "[FLEX-LENGTHS] {:?} {} items, initial free {initial_free_space:.3}, remaining {:.3} after {iterations} iterations",
        used_flex_factor,
        line_items.len(),
        line.remaining_free_space
    );
    iterations
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_box::BoxId;

    fn item(grow: f32, shrink: f32, base: f32) -> FlexItem {
        let mut item = FlexItem::new(BoxId(1));
        item.flex_grow = grow;
        item.flex_shrink = shrink;
        item.flex_base_size = base;
        item.hypothetical_main_size = base;
        item
    }

    fn resolve(items: &mut [FlexItem], inner: f32, gap: f32) -> (FlexLine, usize) {
        let mut line = FlexLine::new(0..items.len());
        let iterations = resolve_flexible_lengths_for_line(&mut line, items, inner, gap);
        (line, iterations)
    }

    fn assert_sizes(items: &[FlexItem], expected: &[f32]) {
        for (item, want) in items.iter().zip(expected) {
            let got = item.used_main_size();
            assert!((got - want).abs() < 0.001, "got {got}, expected {want}");
        }
    }

    #[test]
    /// # Panics
    /// Panics if equal grow factors do not share free space equally.
    fn equal_grow_factors_split_evenly() {
        let mut items = [item(1.0, 1.0, 0.0), item(1.0, 1.0, 0.0), item(1.0, 1.0, 0.0)];
        let (line, _) = resolve(&mut items, 300.0, 0.0);
        assert_sizes(&items, &[100.0, 100.0, 100.0]);
        assert!(line.remaining_free_space.abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if shrinking is not weighted by the flex base size.
    fn shrink_is_weighted_by_base_size() {
        let mut items = [item(0.0, 1.0, 200.0), item(0.0, 1.0, 200.0)];
        resolve(&mut items, 300.0, 0.0);
        assert_sizes(&items, &[150.0, 150.0]);

        let mut uneven = [item(0.0, 1.0, 300.0), item(0.0, 1.0, 100.0)];
        resolve(&mut uneven, 200.0, 0.0);
        assert_sizes(&uneven, &[150.0, 50.0]);
    }

    #[test]
    /// # Panics
    /// Panics if a max violation is not frozen and its space redistributed.
    fn max_violation_freezes_and_redistributes() {
        let mut capped = item(1.0, 1.0, 0.0);
        capped.max_main_size = 50.0;
        let mut items = [capped, item(1.0, 1.0, 0.0)];
        let (_, iterations) = resolve(&mut items, 300.0, 0.0);
        assert_sizes(&items, &[50.0, 250.0]);
        assert!(items[0].is_max_violation);
        assert_eq!(iterations, 2);
    }

    #[test]
    /// # Panics
    /// Panics if a fractional grow sum takes more than its share of free space.
    fn fractional_grow_takes_partial_space() {
        let mut items = [item(0.25, 1.0, 0.0), item(0.25, 1.0, 0.0)];
        let (line, _) = resolve(&mut items, 400.0, 0.0);
        assert_sizes(&items, &[100.0, 100.0]);
        assert!((line.remaining_free_space - 200.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if gaps are not removed from the space items flex into.
    fn gaps_reduce_free_space() {
        let mut items = [item(1.0, 1.0, 0.0), item(1.0, 1.0, 0.0)];
        resolve(&mut items, 210.0, 10.0);
        assert_sizes(&items, &[100.0, 100.0]);
    }

    #[test]
    /// # Panics
    /// Panics if the loop runs more often than there are items.
    fn iterations_are_bounded_by_item_count() {
        let mut first = item(1.0, 1.0, 0.0);
        first.max_main_size = 20.0;
        let mut second = item(1.0, 1.0, 0.0);
        second.max_main_size = 30.0;
        let mut third = item(1.0, 1.0, 0.0);
        third.min_main_size = 500.0;
        let mut items = [first, second, third];
        let (_, iterations) = resolve(&mut items, 300.0, 0.0);
        assert!(iterations <= items.len());
        // The min-violating item overflows the line, the others shrink to zero.
        assert_sizes(&items, &[0.0, 0.0, 500.0]);
    }

    #[test]
    /// # Panics
    /// Panics if inflexible items do not keep their hypothetical size.
    fn inflexible_items_keep_hypothetical_size() {
        let mut items = [item(0.0, 0.0, 120.0), item(1.0, 1.0, 0.0)];
        resolve(&mut items, 100.0, 0.0);
        assert_sizes(&items, &[120.0, 0.0]);
    }
}
