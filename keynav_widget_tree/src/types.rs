// Copyright 2026 the Keynav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the widget tree: widget identifiers, flags, and local data.

use kurbo::Rect;

/// Identifier for a widget in the tree.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `WidgetId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `WidgetId`.
///
/// ### Liveness
///
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check whether a `WidgetId` still refers to a live widget.
/// Stale `WidgetId`s never alias a different live widget because the generation must match.
///
/// ### Notes
///
/// - The generation increments on slot reuse and never decreases.
/// - `u32` is ample for practical lifetimes; behavior on generation overflow is unspecified.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct WidgetId(pub(crate) u32, pub(crate) u32);

impl WidgetId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Widget flags controlling focus participation and traversal scoping.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WidgetFlags: u8 {
        /// Widget accepts keyboard focus (participates in focus traversal).
        const WANTS_FOCUS     = 0b0000_0001;
        /// Widget is a focus container: traversal started inside it never
        /// leaves its subtree.
        const FOCUS_CONTAINER = 0b0000_0010;
    }
}

impl Default for WidgetFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Local data for a widget.
#[derive(Clone, Debug)]
pub struct LocalWidget {
    /// On-screen bounds. Consumed by position-based focus ordering
    /// (top-to-bottom, then left-to-right); not used for layout.
    pub bounds: Rect,
    /// Explicit focus order. `0` means unset; widgets with an explicit order
    /// sort before unordered widgets, ascending.
    pub focus_order: u32,
    /// Focus participation and scoping flags.
    ///
    /// See [`WidgetFlags`] for available bits.
    pub flags: WidgetFlags,
}

impl Default for LocalWidget {
    fn default() -> Self {
        Self {
            bounds: Rect::ZERO,
            focus_order: 0,
            flags: WidgetFlags::default(),
        }
    }
}
