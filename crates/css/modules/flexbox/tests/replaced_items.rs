#![allow(clippy::unwrap_used, reason = "layout errors fail the test")]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live at the crate root")]

mod common;

use common::{Content, ROOT, TestTree, approx, init_logging};
use css_orchestrator::style_model::{AlignItems, ComputedStyle, Size};

const IMAGE: Content = Content::Replaced {
    width: 40.0,
    height: 20.0,
};

fn fixed_container() -> ComputedStyle {
    ComputedStyle {
        width: Size::Length(300.0),
        height: Size::Length(100.0),
        align_items: AlignItems::FlexStart,
        ..ComputedStyle::flex_container()
    }
}

#[test]
fn replaced_item_keeps_its_natural_size() {
    init_logging();
    let mut tree = TestTree::new(fixed_container());
    let image = tree.push(ROOT, ComputedStyle::default(), IMAGE);

    let state = tree.layout(400.0).unwrap();

    let used = state.get(image);
    assert!(approx(used.content_width(), 40.0));
    assert!(approx(used.content_height(), 20.0));
    assert!(tree.replaced_preparations.get() >= 1);
}

#[test]
fn definite_cross_size_transfers_through_the_aspect_ratio() {
    init_logging();
    let mut tree = TestTree::new(fixed_container());
    let image = tree.push(
        ROOT,
        ComputedStyle {
            height: Size::Length(50.0),
            ..ComputedStyle::default()
        },
        IMAGE,
    );
    let next = tree.push(ROOT, ComputedStyle::default(), Content::Words(vec![30.0]));

    let state = tree.layout(400.0).unwrap();

    let used = state.get(image);
    assert!(approx(used.content_width(), 100.0), "width {}", used.content_width());
    assert!(approx(used.content_height(), 50.0));
    assert!(approx(state.get(next).offset.x, 100.0));
}

#[test]
fn transferred_minimum_lets_replaced_items_shrink_to_natural_width() {
    init_logging();
    let mut tree = TestTree::new(ComputedStyle {
        width: Size::Length(60.0),
        ..fixed_container()
    });
    let image = tree.push(
        ROOT,
        ComputedStyle {
            height: Size::Length(50.0),
            ..ComputedStyle::default()
        },
        IMAGE,
    );

    let state = tree.layout(400.0).unwrap();

    // Flex base size 100 through the ratio, automatic minimum min(100, 40).
    assert!(approx(state.get(image).content_width(), 60.0));
}
