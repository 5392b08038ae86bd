#![allow(clippy::unwrap_used, reason = "layout errors fail the test")]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live at the crate root")]

mod common;

use common::{Content, ROOT, TestTree, approx, init_logging, sized};
use css_orchestrator::style_model::{
    AlignItems, AlignSelf, ComputedStyle, JustifyContent, LengthPercentageAuto, Sides, Size,
};

/// A 300x100 row container.
fn fixed_container() -> ComputedStyle {
    ComputedStyle {
        width: Size::Length(300.0),
        height: Size::Length(100.0),
        ..ComputedStyle::flex_container()
    }
}

#[test]
fn centered_on_both_axes() {
    init_logging();
    let mut tree = TestTree::new(ComputedStyle {
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..fixed_container()
    });
    let first = tree.push(ROOT, sized(50.0, 20.0), Content::Empty);
    let second = tree.push(ROOT, sized(50.0, 20.0), Content::Empty);

    let state = tree.layout(400.0).unwrap();

    let first = state.get(first);
    let second = state.get(second);
    assert!(approx(first.offset.x, 100.0));
    assert!(approx(second.offset.x, 150.0));
    assert!(approx(first.offset.y, 40.0));
    assert!(approx(second.offset.y, 40.0));
}

#[test]
fn auto_margins_absorb_free_space_on_both_axes() {
    init_logging();
    let mut tree = TestTree::new(fixed_container());
    let item = tree.push(
        ROOT,
        ComputedStyle {
            margin: Sides::all(LengthPercentageAuto::Auto),
            ..sized(50.0, 20.0)
        },
        Content::Empty,
    );

    let state = tree.layout(400.0).unwrap();

    let used = state.get(item);
    assert!(approx(used.margin_left, 125.0));
    assert!(approx(used.margin_right, 125.0));
    assert!(approx(used.margin_top, 40.0));
    assert!(approx(used.margin_bottom, 40.0));
    assert!(approx(used.offset.x, 125.0));
    assert!(approx(used.offset.y, 40.0));
}

#[test]
fn stretched_items_fill_the_line_up_to_their_max_size() {
    init_logging();
    let mut tree = TestTree::new(fixed_container());
    let auto_height = ComputedStyle {
        width: Size::Length(50.0),
        ..ComputedStyle::default()
    };
    let stretched = tree.push(ROOT, auto_height.clone(), Content::Empty);
    let capped = tree.push(
        ROOT,
        ComputedStyle {
            max_height: Size::Length(60.0),
            ..auto_height
        },
        Content::Empty,
    );

    let state = tree.layout(400.0).unwrap();

    assert!(approx(state.get(stretched).content_height(), 100.0));
    assert!(approx(state.get(capped).content_height(), 60.0));
    assert!(approx(state.get(capped).offset.y, 0.0));
}

#[test]
fn align_self_overrides_align_items() {
    init_logging();
    let mut tree = TestTree::new(ComputedStyle {
        align_items: AlignItems::FlexStart,
        ..fixed_container()
    });
    let start = tree.push(ROOT, sized(50.0, 20.0), Content::Empty);
    let end = tree.push(
        ROOT,
        ComputedStyle {
            align_self: AlignSelf::FlexEnd,
            ..sized(50.0, 20.0)
        },
        Content::Empty,
    );
    let centered = tree.push(
        ROOT,
        ComputedStyle {
            align_self: AlignSelf::Center,
            ..sized(50.0, 30.0)
        },
        Content::Empty,
    );

    let state = tree.layout(400.0).unwrap();

    assert!(approx(state.get(start).offset.y, 0.0));
    assert!(approx(state.get(end).offset.y, 80.0));
    assert!(approx(state.get(centered).offset.y, 35.0));
}

#[test]
fn auto_height_container_takes_the_tallest_item() {
    init_logging();
    let mut tree = TestTree::new(ComputedStyle {
        align_items: AlignItems::FlexEnd,
        ..ComputedStyle::flex_container()
    });
    let short = tree.push(ROOT, sized(50.0, 20.0), Content::Empty);
    let tall = tree.push(ROOT, sized(50.0, 45.0), Content::Empty);

    let state = tree.layout(400.0).unwrap();

    assert!(approx(state.get(ROOT).content_height(), 45.0));
    assert!(approx(state.get(short).offset.y, 25.0));
    assert!(approx(state.get(tall).offset.y, 0.0));
}

#[test]
fn percentage_max_size_caps_stretch_once_container_height_is_known() {
    init_logging();
    let mut tree = TestTree::new(ComputedStyle {
        width: Size::Length(300.0),
        ..ComputedStyle::flex_container()
    });
    tree.push(ROOT, sized(50.0, 60.0), Content::Empty);
    let capped = tree.push(
        ROOT,
        ComputedStyle {
            width: Size::Length(50.0),
            max_height: Size::Percentage(0.5),
            ..ComputedStyle::default()
        },
        Content::Empty,
    );

    let state = tree.layout(400.0).unwrap();

    assert!(approx(state.get(ROOT).content_height(), 60.0));
    let height = state.get(capped).content_height();
    assert!(approx(height, 30.0), "height {height}");
}
