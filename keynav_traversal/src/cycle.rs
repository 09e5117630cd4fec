// Copyright 2026 the Keynav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrap-around helpers: Tab-style cycling built on the walker.
//!
//! ## Usage
//!
//! [`FocusWalker::next`] and [`FocusWalker::previous`] stop with `None` at
//! the ends of the traversal order. Keypress handlers usually want the focus
//! to cycle instead: Tab on the last widget returns to the first, Shift-Tab
//! on the first jumps to the last. These helpers add that policy without
//! changing the walker's own semantics.
//!
//! A wrap stays inside the current focus container. When the container has a
//! sole eligible widget, wrapping returns that widget itself; when it has
//! none, the result is `None`.

use crate::types::{FocusLookup, PolicyProvider};
use crate::walker::FocusWalker;

/// The next eligible widget after `current`, wrapping to the container's
/// default widget at the end of the order.
pub fn next_wrapping<K: Clone + Eq, L: FocusLookup<K>, P: PolicyProvider<K>>(
    walker: &FocusWalker<K, L, P>,
    current: &K,
) -> Option<K> {
    if let Some(found) = walker.next(current) {
        return Some(found);
    }
    let container = walker.lookup.focus_container_of(current);
    walker.default_focus(&container)
}

/// The previous eligible widget before `current`, wrapping to the last
/// widget of the container's traversal order at the start.
pub fn previous_wrapping<K: Clone + Eq, L: FocusLookup<K>, P: PolicyProvider<K>>(
    walker: &FocusWalker<K, L, P>,
    current: &K,
) -> Option<K> {
    if let Some(found) = walker.previous(current) {
        return Some(found);
    }
    let container = walker.lookup.focus_container_of(current);
    walker.all(&container).pop()
}
