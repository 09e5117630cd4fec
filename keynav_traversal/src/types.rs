// Copyright 2026 the Keynav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for focus traversal: the direction tag and the collaborator traits.
//!
//! ## Overview
//!
//! These traits describe what the walker needs from the outside world: a raw
//! ordering policy over a container's subtree ([`FocusPolicy`]), the per-node
//! focus capabilities ([`FocusLookup`]), and a per-call policy factory
//! ([`PolicyProvider`]). They are consumed by the
//! [`walker`](crate::walker) and implemented by downstream toolkits (or by
//! the adapters in this crate).

/// Direction of a traversal step.
///
/// Selects which raw operation the walker calls, so one filtering loop
/// serves both Tab and Shift-Tab navigation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    /// Advance toward the next widget in raw order.
    Forward,
    /// Advance toward the previous widget in raw order.
    Backward,
}

/// A raw traversal-order policy over the full subtree of a container.
///
/// This is the pluggable ordering object (for example: explicit order number
/// then tree order, or pure tree order). It has no eligibility awareness;
/// filtering belongs to the [walker](crate::walker::FocusWalker).
///
/// ## Contract
///
/// Raw stepping must advance monotonically: starting from any node and
/// repeatedly taking [`raw_next`](Self::raw_next) (or
/// [`raw_previous`](Self::raw_previous)) never revisits a node and
/// eventually yields `None`. The walker relies on this and performs no cycle
/// detection.
pub trait FocusPolicy<K> {
    /// The raw node after `node`, or `None` when the order is exhausted.
    fn raw_next(&self, node: &K) -> Option<K>;
    /// The raw node before `node`, or `None` when the order is exhausted.
    fn raw_previous(&self, node: &K) -> Option<K>;
    /// The policy's notion of the default raw node within `container`, or
    /// `None` when the container has no nodes under this policy.
    fn raw_default(&self, container: &K) -> Option<K>;
}

/// Per-node focus capabilities consumed by the walker.
///
/// Implement this over your widget tree. All three queries are pure reads of
/// externally owned state; the walker calls them fresh on every navigation
/// request, so flag changes between calls are always observed.
pub trait FocusLookup<K> {
    /// Whether the node currently accepts keyboard focus.
    fn wants_focus(&self, node: &K) -> bool;
    /// Whether `container` contains `node`, where a container counts as
    /// containing itself and all of its descendants.
    fn contains(&self, container: &K, node: &K) -> bool;
    /// The nearest ancestor-or-self acting as the traversal boundary for
    /// `node`.
    fn focus_container_of(&self, node: &K) -> K;
}

/// Per-call factory for [`FocusPolicy`] instances.
///
/// The walker acquires one policy value at the start of each public
/// operation and drops it when the operation returns (on every path). `None`
/// means the node participates in no focus traversal scheme; every operation
/// then yields an empty result.
pub trait PolicyProvider<K> {
    /// The policy type produced for this tree.
    type Policy: FocusPolicy<K>;
    /// Create a policy scoped to `node`'s traversal scheme, if it has one.
    fn policy_for(&self, node: &K) -> Option<Self::Policy>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_a_plain_tag() {
        assert_eq!(Direction::Forward, Direction::Forward);
        assert_ne!(Direction::Forward, Direction::Backward);
        let d = Direction::Backward;
        let copied = d;
        assert_eq!(d, copied);
    }
}
