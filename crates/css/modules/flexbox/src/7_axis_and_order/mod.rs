//! Axis resolution and ordering utilities
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>

use std::collections::BTreeMap;

use css_orchestrator::style_model::{FlexDirection, FlexWrap, WritingMode};

/// Resolved axes information for a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FlexAxes {
    /// True when the main axis is horizontal (row-wise layout).
    pub is_row: bool,
    /// True when main axis is reversed (row-reverse or column-reverse).
    pub main_reverse: bool,
    /// True for `flex-wrap: wrap-reverse`.
    pub cross_reverse: bool,
    /// True for `flex-wrap: nowrap`.
    pub is_single_line: bool,
}

/// Resolve main/cross axes for the container's flex-direction and flex-wrap.
///
/// Only `horizontal-tb` is supported: the main axis of a row is physical x.
///
/// # Panics
/// Panics for vertical writing modes.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[expect(clippy::panic, reason = "vertical writing modes are not implemented")]
pub fn resolve_axes(direction: FlexDirection, wrap: FlexWrap, writing_mode: WritingMode) -> FlexAxes {
    if !writing_mode.is_horizontal() {
        panic!("flex layout does not support writing-mode {writing_mode:?}");
    }
    FlexAxes {
        is_row: direction.is_row(),
        main_reverse: direction.is_reverse(),
        cross_reverse: matches!(wrap, FlexWrap::WrapReverse),
        is_single_line: matches!(wrap, FlexWrap::NoWrap),
    }
}

/// Compute a stable ordering key for a flex item.
/// Returns (order, `original_index`) so sorting by this key respects DOM order ties.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>
pub const fn order_key(order: i32, original_index: usize) -> (i32, usize) {
    (order, original_index)
}

/// Sort items into `order`-modified document order.
///
/// Items are bucketed by `order`; buckets ascend and keep input order. When
/// `reverse` is set, buckets descend and each bucket is walked backwards, so the
/// result is the exact reverse of the forward order.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#order-property>
pub fn sort_items_by_order<T: Copy>(items: &[(T, i32)], reverse: bool) -> Vec<T> {
    let mut buckets: BTreeMap<i32, Vec<(usize, T)>> = BTreeMap::new();
    for (original_index, &(handle, order)) in items.iter().enumerate() {
        buckets
            .entry(order_key(order, original_index).0)
            .or_default()
            .push((original_index, handle));
    }
    let mut sorted = Vec::with_capacity(items.len());
    if reverse {
        for bucket in buckets.values().rev() {
            sorted.extend(bucket.iter().rev().map(|&(_, handle)| handle));
        }
    } else {
        for bucket in buckets.values() {
            sorted.extend(bucket.iter().map(|&(_, handle)| handle));
        }
    }
    sorted
}
