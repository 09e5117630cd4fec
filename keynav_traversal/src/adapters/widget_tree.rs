// Copyright 2026 the Keynav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for Keynav Widget Tree.
//!
//! ## Feature
//!
//! Enable with `widget_tree_adapter`.
//!
//! ## Notes
//!
//! Implements the walker's collaborator traits over a borrowed
//! [`Tree`]: focus capabilities come straight from the tree, and the raw
//! ordering policy is a per-call snapshot of the focus container's subtree.
//!
//! The default ordering is: widgets with an explicit focus order first
//! (ascending), then unordered widgets top-to-bottom and left-to-right by
//! bounds, with document order as the stable tie-break. The snapshot spans
//! the whole focus container; clipping to a nested boundary is the walker's
//! job, not the policy's.

use alloc::vec::Vec;

use keynav_widget_tree::{Tree, WidgetId};
use kurbo::Rect;

use crate::types::{FocusLookup, FocusPolicy, PolicyProvider};

impl FocusLookup<WidgetId> for &Tree {
    fn wants_focus(&self, node: &WidgetId) -> bool {
        Tree::wants_focus(self, *node)
    }

    fn contains(&self, container: &WidgetId, node: &WidgetId) -> bool {
        Tree::contains(self, *container, *node)
    }

    fn focus_container_of(&self, node: &WidgetId) -> WidgetId {
        Tree::find_focus_container(self, *node)
    }
}

/// A per-call raw ordering over one focus container's subtree.
///
/// Created by [`PolicyProvider::policy_for`] on a borrowed [`Tree`] and
/// dropped when the walker operation returns. The snapshot is taken fresh on
/// every call, so structural or flag changes between calls are always
/// reflected.
pub struct OrderedSnapshot<'a> {
    tree: &'a Tree,
    order: Vec<WidgetId>,
}

impl core::fmt::Debug for OrderedSnapshot<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrderedSnapshot")
            .field("len", &self.order.len())
            .finish_non_exhaustive()
    }
}

impl OrderedSnapshot<'_> {
    fn position(&self, node: &WidgetId) -> Option<usize> {
        self.order.iter().position(|n| n == node)
    }
}

impl FocusPolicy<WidgetId> for OrderedSnapshot<'_> {
    fn raw_next(&self, node: &WidgetId) -> Option<WidgetId> {
        let i = self.position(node)?;
        self.order.get(i + 1).copied()
    }

    fn raw_previous(&self, node: &WidgetId) -> Option<WidgetId> {
        let i = self.position(node)?;
        i.checked_sub(1).map(|j| self.order[j])
    }

    fn raw_default(&self, container: &WidgetId) -> Option<WidgetId> {
        self.order
            .iter()
            .copied()
            .find(|n| self.tree.contains(*container, *n))
    }
}

impl<'a> PolicyProvider<WidgetId> for &'a Tree {
    type Policy = OrderedSnapshot<'a>;

    fn policy_for(&self, node: &WidgetId) -> Option<OrderedSnapshot<'a>> {
        if !self.is_alive(*node) {
            return None;
        }
        let scope = self.find_focus_container(*node);
        let mut order: Vec<WidgetId> = self.subtree(scope).collect();
        // Stable sort keeps document order for widgets that tie on every key.
        order.sort_by(|a, b| {
            let (ga, oa) = order_key(self, *a);
            let (gb, ob) = order_key(self, *b);
            (ga, oa)
                .cmp(&(gb, ob))
                .then_with(|| position_key(&self.local(*a).bounds, &self.local(*b).bounds))
        });
        Some(OrderedSnapshot { tree: *self, order })
    }
}

// Explicit focus order groups before unordered widgets; 0 means unset.
fn order_key(tree: &Tree, id: WidgetId) -> (u8, u32) {
    match tree.local(id).focus_order {
        0 => (1, 0),
        o => (0, o),
    }
}

// Top-to-bottom, then left-to-right. Bounds are assumed finite; NaN falls
// back to equal so the stable sort is unaffected.
fn position_key(a: &Rect, b: &Rect) -> core::cmp::Ordering {
    use core::cmp::Ordering::Equal;
    a.y0.partial_cmp(&b.y0)
        .unwrap_or(Equal)
        .then(a.x0.partial_cmp(&b.x0).unwrap_or(Equal))
}
