//! Layered store of used values.
//!
//! A root state owns the committed geometry of a layout pass. Speculative
//! measurements run on a child state created with [`LayoutState::with_parent`]:
//! reads fall through to the parent chain, writes land in the child's own
//! delta map, and dropping the child discards them.

use std::collections::HashMap;

use crate::tree::BoxId;
use crate::used_values::UsedValues;

#[derive(Debug, Default)]
pub struct LayoutState<'parent> {
    parent: Option<&'parent LayoutState<'parent>>,
    used_values: HashMap<BoxId, UsedValues>,
}

impl<'parent> LayoutState<'parent> {
    /// Empty root state.
    #[inline]
    pub fn new() -> Self {
        Self {
            parent: None,
            used_values: HashMap::new(),
        }
    }

    /// Throwaway state shadowing `parent`.
    #[inline]
    pub fn with_parent(parent: &'parent LayoutState<'parent>) -> Self {
        Self {
            parent: Some(parent),
            used_values: HashMap::new(),
        }
    }

    /// True when this state shadows another one.
    #[inline]
    pub const fn is_throwaway(&self) -> bool {
        self.parent.is_some()
    }

    /// Number of boxes written in this layer.
    #[inline]
    pub fn len(&self) -> usize {
        self.used_values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.used_values.is_empty()
    }

    fn lookup(&self, id: BoxId) -> Option<&UsedValues> {
        self.used_values
            .get(&id)
            .or_else(|| self.parent.and_then(|parent| parent.lookup(id)))
    }

    /// True if this layer or an ancestor layer has values for `id`.
    #[inline]
    pub fn contains(&self, id: BoxId) -> bool {
        self.lookup(id).is_some()
    }

    /// Used values of `id`, defaulted when no layer has them.
    #[inline]
    pub fn get(&self, id: BoxId) -> UsedValues {
        self.lookup(id).copied().unwrap_or_default()
    }

    /// Writable used values of `id` in this layer, copied up from the parent
    /// chain on first access.
    pub fn get_mutable(&mut self, id: BoxId) -> &mut UsedValues {
        let parent = self.parent;
        self.used_values.entry(id).or_insert_with(|| {
            parent
                .and_then(|ancestor| ancestor.lookup(id))
                .copied()
                .unwrap_or_default()
        })
    }

    #[inline]
    pub fn resolved_definite_width(&self, id: BoxId) -> f32 {
        self.get(id).content_width()
    }

    #[inline]
    pub fn resolved_definite_height(&self, id: BoxId) -> f32 {
        self.get(id).content_height()
    }
}
