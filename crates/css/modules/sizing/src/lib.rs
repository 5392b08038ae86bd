//! CSS Sizing Module - intrinsic and extrinsic size helpers shared by formatting contexts
//!
//! [Spec: CSS Box Sizing Module Level 3](https://www.w3.org/TR/css-sizing-3/)
//!
//! ## Architecture
//!
//! Intrinsic sizes are measured, not guessed: every min-/max-content query
//! creates a throwaway `LayoutState` layered over the caller's state, marks
//! the measured box with the sizing constraint, runs the box's own
//! independent formatting context in `LayoutMode::IntrinsicSizing`, and reads
//! back the automatic content size. The throwaway layer is dropped afterwards,
//! so measurements never leak into committed geometry.
//!
//! ```text
//! calculate_max_content_width(box)
//!   ↓
//! LayoutState::with_parent(state)      (shadow layer)
//!   ↓
//! box.width_constraint = MaxContent, width indefinite
//!   ↓
//! factory → FormattingContext::run(IntrinsicSizing, max-content x indefinite)
//!   ↓
//! automatic_content_width()
//! ```
//!
//! Replaced boxes with a natural size short-circuit the measurement.
//!
//! ## Spec Coverage Status
//!
//! - [Production] min-content / max-content width and height
//! - [Production] fit-content and stretch-fit sizes
//! - [Production] Box-sizing aware resolution of `width`/`height` values
//! - [Production] "treat as auto" rules for percentage sizes

use anyhow::{Context as _, Result};
use css_box::{
    AvailableSize, AvailableSpace, BoxId, LayoutContext, LayoutMode, LayoutState, SizeConstraint,
    compute_box_sides, content_box_size, independent_formatting_context,
};
use css_orchestrator::style_model::{ComputedStyle, Size};
use tracing::debug;

//=============================================================================
// Auto Treatment
//=============================================================================

/// Whether `width` behaves as `auto` in the given available space.
///
/// Percentages behave as `auto` when the percentage basis is indefinite or a
/// max-content constraint. Intrinsic sizing keywords always do.
#[inline]
pub fn should_treat_width_as_auto(style: &ComputedStyle, available: AvailableSpace) -> bool {
    treat_as_auto(style.width, available.width)
}

/// Whether `height` behaves as `auto` in the given available space.
#[inline]
pub fn should_treat_height_as_auto(style: &ComputedStyle, available: AvailableSpace) -> bool {
    treat_as_auto(style.height, available.height)
}

fn treat_as_auto(size: Size, available: AvailableSize) -> bool {
    match size {
        Size::Auto | Size::MinContent | Size::MaxContent | Size::FitContent => true,
        Size::Percentage(_) => available.is_indefinite() || available.is_max_content(),
        Size::Length(_) | Size::None => false,
    }
}

//=============================================================================
// Specified Sizes
//=============================================================================

/// Containing block content width of `id`, zero for the root.
fn containing_block_width(ctx: &LayoutContext<'_>, state: &LayoutState<'_>, id: BoxId) -> f32 {
    ctx.tree
        .containing_block(id)
        .map_or(0.0, |block| state.get(block).content_width())
}

fn containing_block_height(ctx: &LayoutContext<'_>, state: &LayoutState<'_>, id: BoxId) -> f32 {
    ctx.tree
        .containing_block(id)
        .map_or(0.0, |block| state.get(block).content_height())
}

/// Resolve a width-like value of `id` into a content-box width.
///
/// Percentages resolve against the containing block width. Keywords that do
/// not name a length resolve to zero; callers check them first.
pub fn pixel_width(ctx: &LayoutContext<'_>, state: &LayoutState<'_>, id: BoxId, size: Size) -> f32 {
    let Some(value) = size.length_percentage() else {
        return 0.0;
    };
    let reference = containing_block_width(ctx, state, id);
    let style = ctx.tree.style(id);
    let sides = compute_box_sides(style, reference);
    content_box_size(
        value.resolve(reference),
        style.box_sizing,
        sides.horizontal_padding_border(),
    )
}

/// Resolve a height-like value of `id` into a content-box height.
pub fn pixel_height(ctx: &LayoutContext<'_>, state: &LayoutState<'_>, id: BoxId, size: Size) -> f32 {
    let Some(value) = size.length_percentage() else {
        return 0.0;
    };
    let style = ctx.tree.style(id);
    let sides = compute_box_sides(style, containing_block_width(ctx, state, id));
    content_box_size(
        value.resolve(containing_block_height(ctx, state, id)),
        style.box_sizing,
        sides.vertical_padding_border(),
    )
}

//=============================================================================
// Intrinsic Sizes
//=============================================================================

fn measure_width(
    ctx: &LayoutContext<'_>,
    state: &LayoutState<'_>,
    id: BoxId,
    constraint: SizeConstraint,
    available_width: AvailableSize,
) -> Result<f32> {
    if let Some(natural) = ctx.tree.capabilities(id).natural_width {
        return Ok(natural);
    }
    let mut throwaway = LayoutState::with_parent(state);
    let used = throwaway.get_mutable(id);
    used.width_constraint = constraint;
    used.set_indefinite_content_width();

    let mut context = independent_formatting_context(ctx, id);
    context
        .run(
            ctx,
            &mut throwaway,
            LayoutMode::IntrinsicSizing,
            AvailableSpace::new(available_width, AvailableSize::Indefinite),
        )
        .with_context(|| format!("measuring {available_width} width of {id:?}"))?;
    let width = context.automatic_content_width(&throwaway);
    debug!(?id, %available_width, width, "intrinsic width");
    Ok(width)
}

fn measure_height(
    ctx: &LayoutContext<'_>,
    state: &LayoutState<'_>,
    id: BoxId,
    constraint: SizeConstraint,
    available_width: AvailableSize,
    available_height: AvailableSize,
) -> Result<f32> {
    if let Some(natural) = ctx.tree.capabilities(id).natural_height {
        return Ok(natural);
    }
    let mut throwaway = LayoutState::with_parent(state);
    let used = throwaway.get_mutable(id);
    used.height_constraint = constraint;
    used.set_indefinite_content_height();
    if let AvailableSize::Definite(width) = available_width {
        used.set_content_width(width);
    }

    let mut context = independent_formatting_context(ctx, id);
    context
        .run(
            ctx,
            &mut throwaway,
            LayoutMode::IntrinsicSizing,
            AvailableSpace::new(available_width, available_height),
        )
        .with_context(|| format!("measuring {available_height} height of {id:?}"))?;
    let height = context.automatic_content_height(&throwaway);
    debug!(?id, %available_width, %available_height, height, "intrinsic height");
    Ok(height)
}

/// Min-content width of `id`.
///
/// # Errors
/// Returns an error if the measuring layout fails.
pub fn calculate_min_content_width(
    ctx: &LayoutContext<'_>,
    state: &LayoutState<'_>,
    id: BoxId,
) -> Result<f32> {
    measure_width(ctx, state, id, SizeConstraint::MinContent, AvailableSize::MinContent)
}

/// Max-content width of `id`.
///
/// # Errors
/// Returns an error if the measuring layout fails.
pub fn calculate_max_content_width(
    ctx: &LayoutContext<'_>,
    state: &LayoutState<'_>,
    id: BoxId,
) -> Result<f32> {
    measure_width(ctx, state, id, SizeConstraint::MaxContent, AvailableSize::MaxContent)
}

/// Min-content height of `id` laid out in `available_width`.
///
/// # Errors
/// Returns an error if the measuring layout fails.
pub fn calculate_min_content_height(
    ctx: &LayoutContext<'_>,
    state: &LayoutState<'_>,
    id: BoxId,
    available_width: AvailableSize,
) -> Result<f32> {
    measure_height(
        ctx,
        state,
        id,
        SizeConstraint::MinContent,
        available_width,
        AvailableSize::MinContent,
    )
}

/// Max-content height of `id` laid out in `available_width`.
///
/// # Errors
/// Returns an error if the measuring layout fails.
pub fn calculate_max_content_height(
    ctx: &LayoutContext<'_>,
    state: &LayoutState<'_>,
    id: BoxId,
    available_width: AvailableSize,
) -> Result<f32> {
    measure_height(
        ctx,
        state,
        id,
        SizeConstraint::MaxContent,
        available_width,
        AvailableSize::MaxContent,
    )
}

//=============================================================================
// Extrinsic Sizes
//=============================================================================

/// Width `id` takes if its margin box fills `available_width`; zero when that
/// space is not definite.
///
/// Spec: <https://www.w3.org/TR/css-sizing-3/#stretch-fit-size>
pub fn calculate_stretch_fit_width(
    state: &LayoutState<'_>,
    id: BoxId,
    available_width: AvailableSize,
) -> f32 {
    let Some(available) = available_width.definite() else {
        return 0.0;
    };
    let used = state.get(id);
    available - used.margin_box_left() - used.margin_box_right()
}

/// Height `id` takes if its margin box fills `available_height`.
pub fn calculate_stretch_fit_height(
    state: &LayoutState<'_>,
    id: BoxId,
    available_height: AvailableSize,
) -> f32 {
    let Some(available) = available_height.definite() else {
        return 0.0;
    };
    let used = state.get(id);
    available - used.margin_box_top() - used.margin_box_bottom()
}

/// Fit-content width: `clamp(min-content, stretch-fit, max-content)` in
/// definite space, the min-content width under a min-content constraint,
/// otherwise the max-content width.
///
/// Spec: <https://www.w3.org/TR/css-sizing-3/#fit-content-size>
///
/// # Errors
/// Returns an error if a measuring layout fails.
pub fn calculate_fit_content_width(
    ctx: &LayoutContext<'_>,
    state: &LayoutState<'_>,
    id: BoxId,
    available: AvailableSpace,
) -> Result<f32> {
    if available.width.is_definite() {
        let min_content = calculate_min_content_width(ctx, state, id)?;
        let max_content = calculate_max_content_width(ctx, state, id)?;
        let stretch_fit = calculate_stretch_fit_width(state, id, available.width);
        return Ok(stretch_fit.min(max_content).max(min_content));
    }
    if available.width.is_min_content() {
        return calculate_min_content_width(ctx, state, id);
    }
    calculate_max_content_width(ctx, state, id)
}

/// Fit-content height, measured at `available.width`.
///
/// # Errors
/// Returns an error if a measuring layout fails.
pub fn calculate_fit_content_height(
    ctx: &LayoutContext<'_>,
    state: &LayoutState<'_>,
    id: BoxId,
    available: AvailableSpace,
) -> Result<f32> {
    if available.height.is_definite() {
        let min_content = calculate_min_content_height(ctx, state, id, available.width)?;
        let max_content = calculate_max_content_height(ctx, state, id, available.width)?;
        let stretch_fit = calculate_stretch_fit_height(state, id, available.height);
        return Ok(stretch_fit.min(max_content).max(min_content));
    }
    if available.height.is_min_content() {
        return calculate_min_content_height(ctx, state, id, available.width);
    }
    calculate_max_content_height(ctx, state, id, available.width)
}
