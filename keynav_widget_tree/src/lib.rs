// Copyright 2026 the Keynav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=keynav_widget_tree --heading-base-level=0

//! Keynav Widget Tree: a generationally indexed widget tree for keyboard navigation.
//!
//! Keynav Widget Tree is a reusable building block for UI toolkits that need
//! keyboard-focus traversal over a widget hierarchy.
//!
//! - Represents a hierarchy of widgets with parent/child links, bounds, focus
//!   flags, and explicit focus order.
//! - Provides the focus queries traversal needs: eligibility, containment,
//!   and focus-container scoping.
//! - Supports structural updates (insert, remove, reparent) with stable,
//!   generational [`WidgetId`] handles.
//!
//! ## Where this fits
//!
//! This crate owns the tree; [`keynav_traversal`] computes traversal order
//! over it (or over any other tree, via its traits). The split keeps the
//! walker a pure read-only query layer: nothing in the traversal crate
//! creates, mutates, or destroys widgets.
//!
//! [`keynav_traversal`]: https://docs.rs/keynav_traversal
//!
//! ## Not a layout engine
//!
//! This crate does not measure, arrange, or paint. [`LocalWidget::bounds`] is
//! an input produced by whatever layout system you use; it is consumed only
//! by position-based focus ordering (top-to-bottom, then left-to-right).
//!
//! ## API overview
//!
//! - [`Tree`]: container managing widgets and their links.
//! - [`LocalWidget`]: per-widget data (bounds, explicit focus order, flags).
//! - [`WidgetFlags`]: focus participation and scoping controls.
//!   See [`WidgetFlags::WANTS_FOCUS`] and [`WidgetFlags::FOCUS_CONTAINER`].
//! - [`WidgetId`]: generational handle of a widget.
//!
//! Key operations:
//! - [`Tree::insert`] → [`WidgetId`]
//! - [`Tree::set_wants_focus`] / [`Tree::set_focus_order`] / [`Tree::set_focus_container`]
//! - [`Tree::find_focus_container`] — nearest ancestor-or-self traversal boundary.
//! - [`Tree::contains`] — ancestor-or-self containment test.
//! - [`Tree::subtree`] — depth-first document-order iteration.
//!
//! ### Minimal usage
//!
//! ```
//! use keynav_widget_tree::{Tree, LocalWidget, WidgetFlags};
//! use kurbo::Rect;
//!
//! let mut tree = Tree::new();
//!
//! let dialog = tree.insert(
//!     None,
//!     LocalWidget { flags: WidgetFlags::FOCUS_CONTAINER, ..Default::default() },
//! );
//!
//! let button = tree.insert(
//!     Some(dialog),
//!     LocalWidget {
//!         bounds: Rect::new(10.0, 10.0, 90.0, 40.0),
//!         flags: WidgetFlags::WANTS_FOCUS,
//!         ..Default::default()
//!     },
//! );
//!
//! assert_eq!(tree.find_focus_container(button), dialog);
//! assert!(tree.contains(dialog, button));
//! assert!(tree.wants_focus(button));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::Tree;
pub use types::{LocalWidget, WidgetFlags, WidgetId};
