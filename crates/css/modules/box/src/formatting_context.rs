//! Seam between formatting contexts.
//!
//! A formatting context lays out the contents of one box. Contexts never know
//! each other's concrete types: a child's context is obtained from the
//! host-provided [`FormattingContextFactory`] and driven through the
//! [`FormattingContext`] trait, which is how nested and speculative layouts run.

use anyhow::Result;
use log::trace;

use crate::available_space::AvailableSpace;
use crate::layout_state::LayoutState;
use crate::tree::{BoxId, LayoutTree};

/// Whether a run produces final geometry or only measures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    #[default]
    Normal,
    /// Only the context's intrinsic size matters, descendants are not finalized.
    IntrinsicSizing,
}

pub trait FormattingContext {
    /// Lay out the contents of the context root in `state`.
    ///
    /// `available` is the space available to the root's content box.
    ///
    /// # Errors
    /// Returns an error if a nested layout fails.
    fn run(
        &mut self,
        ctx: &LayoutContext<'_>,
        state: &mut LayoutState<'_>,
        mode: LayoutMode,
        available: AvailableSpace,
    ) -> Result<()>;

    /// Content width the root would take if its width were `auto`, valid after `run`.
    fn automatic_content_width(&self, state: &LayoutState<'_>) -> f32;

    /// Content height the root would take if its height were `auto`, valid after `run`.
    fn automatic_content_height(&self, state: &LayoutState<'_>) -> f32;
}

pub trait FormattingContextFactory {
    /// Context for `id` when it establishes an independent formatting context.
    fn create_independent_formatting_context_if_needed(
        &self,
        id: BoxId,
    ) -> Option<Box<dyn FormattingContext>>;
}

/// Collaborators shared by every formatting context of one layout pass.
#[derive(Clone, Copy)]
pub struct LayoutContext<'ctx> {
    pub tree: &'ctx dyn LayoutTree,
    pub factory: &'ctx dyn FormattingContextFactory,
}

impl<'ctx> LayoutContext<'ctx> {
    #[inline]
    pub fn new(tree: &'ctx dyn LayoutTree, factory: &'ctx dyn FormattingContextFactory) -> Self {
        Self { tree, factory }
    }
}

/// Context for a box that is required to establish one (flex items, boxes
/// being measured).
///
/// # Panics
/// Panics when the factory has no context for `id`; callers only ask for
/// boxes that establish an independent formatting context by construction.
#[expect(clippy::panic, reason = "a missing context is a box-tree construction bug")]
pub fn independent_formatting_context(
    ctx: &LayoutContext<'_>,
    id: BoxId,
) -> Box<dyn FormattingContext> {
    trace!("independent formatting context requested for {id:?}");
    match ctx.factory.create_independent_formatting_context_if_needed(id) {
        Some(context) => context,
        None => panic!("box {id:?} does not establish an independent formatting context"),
    }
}
