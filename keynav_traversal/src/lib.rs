// Copyright 2026 the Keynav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=keynav_traversal --heading-base-level=0

//! Keynav Traversal: deterministic, `no_std` keyboard-focus traversal for UI widget trees.
//!
//! ## Overview
//!
//! This crate answers four questions about keyboard navigation — which widget
//! receives focus next (Tab), previous (Shift-Tab), first (when a container
//! gains focus), and the full traversal order of a container. It does not own
//! the widget tree and it does not define the raw ordering.
//! Instead, feed it a [`FocusLookup`](crate::types::FocusLookup) (per-node focus capabilities) and a
//! [`PolicyProvider`](crate::types::PolicyProvider) (per-call factory for the raw ordering policy), and the
//! [`FocusWalker`](crate::walker::FocusWalker) filters the raw order down to eligible widgets.
//!
//! ## Inputs
//!
//! A [`FocusPolicy`](crate::types::FocusPolicy) is the pluggable ordering object: `raw_next`,
//! `raw_previous`, and `raw_default` over the full subtree of a container,
//! with no eligibility awareness. Policies must advance monotonically; the
//! walker performs no cycle detection.
//! A [`FocusLookup`](crate::types::FocusLookup) supplies the eligibility flag, the ancestor-or-self
//! containment test, and the focus-container lookup.
//!
//! ## Filtering
//!
//! The walker steps the raw policy and skips every widget that either does
//! not want keyboard focus or falls outside the bounding focus container,
//! until an eligible widget is found or the raw order is exhausted.
//! Exhaustion is an ordinary `None`, not an error; a container with no
//! eligible descendants yields `None`/empty from every operation.
//!
//! ## Scoping
//!
//! Every traversal is clipped to the starting widget's focus container: raw
//! nodes outside that container's subtree are never returned, even when the
//! raw policy would visit them. The policy instance itself is a per-call
//! scoped value, acquired at operation entry and dropped on every return
//! path; no traversal state survives between calls, so flag changes between
//! calls are always observed.
//!
//! ## Layering
//!
//! The walker only computes traversal order. A higher-level focus manager
//! decides when to move focus, e.g. on key events; the
//! [`cycle`](crate::cycle) helpers add Tab-style wrap-around on top of the
//! walker for exactly that use.
//!
//! ## Workflow
//!
//! 1) Implement [`FocusLookup`](crate::types::FocusLookup) and [`PolicyProvider`](crate::types::PolicyProvider) over your tree, or
//!    enable the `widget_tree_adapter` feature for ready-made impls over
//!    [`keynav_widget_tree`](https://docs.rs/keynav_widget_tree) with the default ordering (explicit focus
//!    order, then position, then document order).
//! 2) Construct a [`FocusWalker`](crate::walker::FocusWalker) from the two and call
//!    [`next`](crate::walker::FocusWalker::next) / [`previous`](crate::walker::FocusWalker::previous) from key handlers,
//!    [`default_focus`](crate::walker::FocusWalker::default_focus) when a container gains focus, and
//!    [`all`](crate::walker::FocusWalker::all) to enumerate.
//!
//! ## Key-handler sketch
//!
//! ```no_run
//! use keynav_traversal::cycle::{next_wrapping, previous_wrapping};
//! use keynav_traversal::types::{FocusLookup, PolicyProvider};
//! use keynav_traversal::walker::FocusWalker;
//!
//! /// Move focus for a Tab / Shift-Tab press and return the new target.
//! fn on_tab<K, L, P>(walker: &FocusWalker<K, L, P>, focused: &K, shift: bool) -> Option<K>
//! where
//!     K: Clone + Eq,
//!     L: FocusLookup<K>,
//!     P: PolicyProvider<K>,
//! {
//!     if shift {
//!         previous_wrapping(walker, focused)
//!     } else {
//!         next_wrapping(walker, focused)
//!     }
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod cycle;
pub mod types;
pub mod walker;
