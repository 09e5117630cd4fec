// Copyright 2026 the Keynav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walker implementation.
//!
//! ## Overview
//!
//! Drives a raw [`FocusPolicy`] step by step and filters the raw order down
//! to focus-eligible nodes inside a boundary container.
//!
//! ## Filtering
//!
//! - A raw node is accepted when it wants keyboard focus *and* the boundary
//!   container contains it (ancestor-or-self).
//! - Rejected nodes become the new stepping point; the raw order advances
//!   monotonically, so the loop terminates at raw exhaustion.
//! - "No more components" is an ordinary `None`, never an error.
//!
//! ## Scoping
//!
//! Every operation acquires a fresh policy from the [`PolicyProvider`] at
//! entry and drops it on return, including early returns. No traversal state
//! survives between calls.
//!
//! ## See Also
//!
//! [`cycle`](crate::cycle) for Tab-style wrap-around built on this walker.

use alloc::vec::Vec;

use crate::types::{Direction, FocusLookup, FocusPolicy, PolicyProvider};

/// Keyboard-focus traversal over an externally owned widget tree.
///
/// ## Usage
///
/// - Construct with [`FocusWalker::new`] from a [`FocusLookup`] (node
///   capabilities) and a [`PolicyProvider`] (per-call raw ordering factory).
/// - Call [`FocusWalker::next`] / [`FocusWalker::previous`] from Tab /
///   Shift-Tab handlers, [`FocusWalker::default_focus`] when a container
///   gains focus, and [`FocusWalker::all`] to enumerate a container's
///   focusable widgets in traversal order.
///
/// All operations are pure reads of the tree the lookup wraps; identical
/// tree state yields identical results.
pub struct FocusWalker<K, L: FocusLookup<K>, P: PolicyProvider<K>> {
    pub(crate) lookup: L,
    pub(crate) provider: P,
    pub(crate) _phantom: core::marker::PhantomData<fn() -> K>,
}

impl<K, L: FocusLookup<K>, P: PolicyProvider<K>> core::fmt::Debug for FocusWalker<K, L, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FocusWalker").finish_non_exhaustive()
    }
}

impl<K: Clone + Eq, L: FocusLookup<K>, P: PolicyProvider<K>> FocusWalker<K, L, P> {
    /// Create a walker from a lookup and a policy provider.
    pub fn new(lookup: L, provider: P) -> Self {
        Self {
            lookup,
            provider,
            _phantom: core::marker::PhantomData,
        }
    }

    /// The next focus-eligible widget after `current`, scoped to `current`'s
    /// focus container, or `None` when the traversal order is exhausted.
    pub fn next(&self, current: &K) -> Option<K> {
        self.sibling(current, Direction::Forward)
    }

    /// The previous focus-eligible widget before `current`, scoped to
    /// `current`'s focus container, or `None` at the start of the order.
    pub fn previous(&self, current: &K) -> Option<K> {
        self.sibling(current, Direction::Backward)
    }

    /// The widget that should receive focus when `container` gains focus.
    ///
    /// Takes the policy's raw default for `container`; if that widget itself
    /// wants focus it is returned directly (it is definitionally inside
    /// `container`, so no containment re-check is needed). Otherwise the
    /// first eligible widget reachable forward from it is returned. `None`
    /// when no policy exists, the policy has no raw default, or nothing
    /// inside `container` is eligible.
    pub fn default_focus(&self, container: &K) -> Option<K> {
        let policy = self.provider.policy_for(container)?;
        let raw = policy.raw_default(container)?;
        if self.lookup.wants_focus(&raw) {
            return Some(raw);
        }
        self.find_eligible(&policy, raw, container, Direction::Forward)
    }

    /// Every focus-eligible widget inside `container`, in forward traversal
    /// order. Empty when no policy exists or nothing is eligible.
    pub fn all(&self, container: &K) -> Vec<K> {
        let mut out = Vec::new();
        let Some(policy) = self.provider.policy_for(container) else {
            return out;
        };
        let mut current = self.default_focus(container);
        while let Some(node) = current {
            current = self.find_eligible(&policy, node.clone(), container, Direction::Forward);
            out.push(node);
        }
        out
    }

    fn sibling(&self, current: &K, direction: Direction) -> Option<K> {
        let policy = self.provider.policy_for(current)?;
        let boundary = self.lookup.focus_container_of(current);
        self.find_eligible(&policy, current.clone(), &boundary, direction)
    }

    fn raw_step(policy: &P::Policy, node: &K, direction: Direction) -> Option<K> {
        match direction {
            Direction::Forward => policy.raw_next(node),
            Direction::Backward => policy.raw_previous(node),
        }
    }

    /// Advance from `start` in `direction` until a widget that wants focus
    /// and lies inside `boundary` is found, or the raw order is exhausted.
    ///
    /// Never returns `start`; the first step always moves off it. Bounded by
    /// the raw order's length because the policy advances monotonically.
    fn find_eligible(
        &self,
        policy: &P::Policy,
        start: K,
        boundary: &K,
        direction: Direction,
    ) -> Option<K> {
        let mut current = start;
        while let Some(node) = Self::raw_step(policy, &current, direction) {
            if self.lookup.wants_focus(&node) && self.lookup.contains(boundary, &node) {
                return Some(node);
            }
            current = node;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    // A hand-built scope: an explicit raw order, a parent map, and per-node
    // flags. Policies are snapshots of the raw order, created per call.
    #[derive(Clone)]
    struct Scope {
        order: Vec<u32>,
        parents: Vec<(u32, u32)>, // (child, parent)
        eligible: Vec<u32>,
        containers: Vec<u32>,
        root: u32,
        has_policy: bool,
    }

    impl Scope {
        fn parent_of(&self, node: u32) -> Option<u32> {
            self.parents
                .iter()
                .find(|(c, _)| *c == node)
                .map(|(_, p)| *p)
        }
    }

    impl FocusLookup<u32> for Scope {
        fn wants_focus(&self, node: &u32) -> bool {
            self.eligible.contains(node)
        }

        fn contains(&self, container: &u32, node: &u32) -> bool {
            let mut cur = *node;
            loop {
                if cur == *container {
                    return true;
                }
                match self.parent_of(cur) {
                    Some(p) => cur = p,
                    None => return false,
                }
            }
        }

        fn focus_container_of(&self, node: &u32) -> u32 {
            let mut cur = *node;
            loop {
                if self.containers.contains(&cur) {
                    return cur;
                }
                match self.parent_of(cur) {
                    Some(p) => cur = p,
                    None => return self.root,
                }
            }
        }
    }

    struct SnapshotPolicy {
        order: Vec<u32>,
        scope: Scope,
    }

    impl FocusPolicy<u32> for SnapshotPolicy {
        fn raw_next(&self, node: &u32) -> Option<u32> {
            let i = self.order.iter().position(|n| n == node)?;
            self.order.get(i + 1).copied()
        }

        fn raw_previous(&self, node: &u32) -> Option<u32> {
            let i = self.order.iter().position(|n| n == node)?;
            i.checked_sub(1).map(|j| self.order[j])
        }

        fn raw_default(&self, container: &u32) -> Option<u32> {
            self.order
                .iter()
                .copied()
                .find(|n| self.scope.contains(container, n))
        }
    }

    impl PolicyProvider<u32> for Scope {
        type Policy = SnapshotPolicy;

        fn policy_for(&self, _node: &u32) -> Option<SnapshotPolicy> {
            if !self.has_policy {
                return None;
            }
            Some(SnapshotPolicy {
                order: self.order.clone(),
                scope: self.clone(),
            })
        }
    }

    // Tree used by most tests:
    //
    //   0 (root container)
    //   ├── 1
    //   ├── 2 (nested container)
    //   │   ├── 3
    //   │   └── 4
    //   └── 5
    //
    // Raw order is document order.
    fn scope() -> Scope {
        Scope {
            order: vec![0, 1, 2, 3, 4, 5],
            parents: vec![(1, 0), (2, 0), (3, 2), (4, 2), (5, 0)],
            eligible: vec![1, 3, 4, 5],
            containers: vec![0, 2],
            root: 0,
            has_policy: true,
        }
    }

    fn walker(s: Scope) -> FocusWalker<u32, Scope, Scope> {
        FocusWalker::new(s.clone(), s)
    }

    #[test]
    fn next_skips_ineligible_nodes() {
        let mut s = scope();
        s.containers = vec![0];
        let w = walker(s);
        // 2 is not eligible; stepping from 1 lands on 3.
        assert_eq!(w.next(&1), Some(3));
        assert_eq!(w.next(&3), Some(4));
        assert_eq!(w.next(&5), None);
    }

    #[test]
    fn previous_is_symmetric() {
        let mut s = scope();
        s.containers = vec![0];
        let w = walker(s);
        assert_eq!(w.previous(&5), Some(4));
        assert_eq!(w.previous(&3), Some(1));
        assert_eq!(w.previous(&1), None);
    }

    #[test]
    fn boundary_clips_raw_results() {
        let w = walker(scope());
        // 3 and 4 live in nested container 2: stepping forward from 4 finds
        // raw node 5, which is outside the boundary, so the walk exhausts.
        assert_eq!(w.next(&4), None);
        assert_eq!(w.previous(&3), None);
        // Inside the boundary, stepping works as usual.
        assert_eq!(w.next(&3), Some(4));
    }

    #[test]
    fn absent_policy_yields_empty_results() {
        let mut s = scope();
        s.has_policy = false;
        let w = walker(s);
        assert_eq!(w.next(&1), None);
        assert_eq!(w.previous(&4), None);
        assert_eq!(w.default_focus(&0), None);
        assert!(w.all(&0).is_empty());
    }

    #[test]
    fn default_focus_returns_eligible_raw_default_directly() {
        let mut s = scope();
        s.eligible = vec![0, 1, 3];
        let w = walker(s);
        // Raw default of 0 is 0 itself, which is eligible here.
        assert_eq!(w.default_focus(&0), Some(0));
    }

    #[test]
    fn default_focus_searches_forward_from_ineligible_raw_default() {
        let w = walker(scope());
        // Raw default of 0 is 0 (ineligible); first eligible forward is 1.
        assert_eq!(w.default_focus(&0), Some(1));
        // Raw default of 2 is 2 (ineligible); forward search finds 3.
        assert_eq!(w.default_focus(&2), Some(3));
    }

    #[test]
    fn default_focus_none_when_nothing_reachable() {
        let mut s = scope();
        s.eligible = vec![];
        let w = walker(s);
        assert_eq!(w.default_focus(&0), None);
        assert_eq!(w.default_focus(&2), None);
    }

    #[test]
    fn all_enumerates_in_forward_order() {
        let mut s = scope();
        s.containers = vec![0];
        let w = walker(s);
        assert_eq!(w.all(&0), vec![1, 3, 4, 5]);
    }

    #[test]
    fn all_scopes_to_nested_container() {
        let w = walker(scope());
        assert_eq!(w.all(&2), vec![3, 4]);
        // The nested enumeration is a subsequence of the outer one.
        let outer = {
            let mut s = scope();
            s.containers = vec![0];
            walker(s).all(&0)
        };
        assert_eq!(outer, vec![1, 3, 4, 5]);
    }

    #[test]
    fn never_returns_the_starting_node() {
        let mut s = scope();
        s.containers = vec![0];
        s.eligible = vec![3];
        let w = walker(s);
        // 3 is eligible but must not be returned for its own step.
        assert_eq!(w.next(&3), None);
        assert_eq!(w.previous(&3), None);
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let mut s = scope();
        s.containers = vec![0];
        let w = walker(s);
        assert_eq!(w.next(&1), w.next(&1));
        assert_eq!(w.all(&0), w.all(&0));
        assert_eq!(w.default_focus(&0), w.default_focus(&0));
    }

    #[test]
    fn single_eligible_widget_has_no_siblings() {
        let mut s = scope();
        s.containers = vec![0];
        s.eligible = vec![4];
        let w = walker(s);
        assert_eq!(w.default_focus(&0), Some(4));
        assert_eq!(w.next(&4), None);
        assert_eq!(w.previous(&4), None);
        assert_eq!(w.all(&0), vec![4]);
    }
}
