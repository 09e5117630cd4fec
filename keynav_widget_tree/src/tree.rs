// Copyright 2026 the Keynav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, updates, focus queries.

use alloc::vec::Vec;
use kurbo::Rect;

use crate::types::{LocalWidget, WidgetFlags, WidgetId};

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level widget tree.
pub struct Tree {
    nodes: Vec<Option<Widget>>, // slots
    generations: Vec<u32>,      // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Tree")
            .field("widgets_total", &total)
            .field("widgets_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Widget {
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
    local: LocalWidget,
}

impl Widget {
    fn new(local: LocalWidget) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            local,
        }
    }
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a new widget as a child of `parent` (or as a root if `None`).
    pub fn insert(&mut self, parent: Option<WidgetId>, local: LocalWidget) -> WidgetId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            // The slot's generation survives the free, so ids minted for the
            // previous occupant stay stale.
            let generation = self.generations[idx] + 1;
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Widget::new(local));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "WidgetId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Widget::new(local)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "WidgetId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = WidgetId::new(idx, generation);
        if let Some(p) = parent {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a widget (and its subtree) from the tree.
    pub fn remove(&mut self, id: WidgetId) {
        if !self.is_alive(id) {
            return;
        }
        // Detach from parent first
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        // Depth-first remove children
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        // Free slot
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Reparent `id` under `new_parent` (or detach it as a root if `None`).
    ///
    /// The widget is appended to the new parent's child list, so it comes
    /// last in that parent's document order.
    pub fn reparent(&mut self, id: WidgetId, new_parent: Option<WidgetId>) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
    }

    /// Update bounds.
    pub fn set_bounds(&mut self, id: WidgetId, bounds: Rect) {
        if let Some(node) = self.node_opt_mut(id) {
            node.local.bounds = bounds;
        }
    }

    /// Update the explicit focus order. `0` clears it.
    pub fn set_focus_order(&mut self, id: WidgetId, order: u32) {
        if let Some(node) = self.node_opt_mut(id) {
            node.local.focus_order = order;
        }
    }

    /// Replace the widget's flags wholesale.
    pub fn set_flags(&mut self, id: WidgetId, flags: WidgetFlags) {
        if let Some(node) = self.node_opt_mut(id) {
            node.local.flags = flags;
        }
    }

    /// Set or clear [`WidgetFlags::WANTS_FOCUS`].
    pub fn set_wants_focus(&mut self, id: WidgetId, wants: bool) {
        if let Some(node) = self.node_opt_mut(id) {
            node.local.flags.set(WidgetFlags::WANTS_FOCUS, wants);
        }
    }

    /// Set or clear [`WidgetFlags::FOCUS_CONTAINER`].
    pub fn set_focus_container(&mut self, id: WidgetId, container: bool) {
        if let Some(node) = self.node_opt_mut(id) {
            node.local.flags.set(WidgetFlags::FOCUS_CONTAINER, container);
        }
    }

    /// Whether `id` refers to a live widget.
    pub fn is_alive(&self, id: WidgetId) -> bool {
        self.generations.get(id.idx()).copied() == Some(id.1)
            && self.nodes[id.idx()].is_some()
    }

    /// The widget's local data. Panics on a stale id.
    pub fn local(&self, id: WidgetId) -> &LocalWidget {
        &self.node(id).local
    }

    /// The widget's parent, or `None` for a root.
    pub fn parent_of(&self, id: WidgetId) -> Option<WidgetId> {
        self.node(id).parent
    }

    /// The widget's children, in document order.
    pub fn children_of(&self, id: WidgetId) -> &[WidgetId] {
        &self.node(id).children
    }

    /// Whether the widget wants keyboard focus.
    pub fn wants_focus(&self, id: WidgetId) -> bool {
        self.node(id).local.flags.contains(WidgetFlags::WANTS_FOCUS)
    }

    /// Whether `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor_of(&self, ancestor: WidgetId, id: WidgetId) -> bool {
        let mut cur = self.node(id).parent;
        while let Some(p) = cur {
            if p == ancestor {
                return true;
            }
            cur = self.node(p).parent;
        }
        false
    }

    /// Whether `container` contains `id` (ancestor-or-self).
    ///
    /// This is the containment test used to clip focus traversal to a
    /// boundary container: a container contains itself and all descendants.
    pub fn contains(&self, container: WidgetId, id: WidgetId) -> bool {
        container == id || self.is_ancestor_of(container, id)
    }

    /// The nearest ancestor-or-self marked [`WidgetFlags::FOCUS_CONTAINER`].
    ///
    /// Falls back to the root of `id`'s tree when no ancestor carries the
    /// flag, making the whole tree the traversal boundary.
    pub fn find_focus_container(&self, id: WidgetId) -> WidgetId {
        let mut cur = id;
        loop {
            let node = self.node(cur);
            if node.local.flags.contains(WidgetFlags::FOCUS_CONTAINER) {
                return cur;
            }
            match node.parent {
                Some(p) => cur = p,
                None => return cur,
            }
        }
    }

    /// Depth-first (document order) traversal of the subtree rooted at `id`,
    /// inclusive of `id` itself.
    pub fn subtree(&self, id: WidgetId) -> impl Iterator<Item = WidgetId> + '_ {
        let mut out = Vec::new();
        if self.is_alive(id) {
            self.collect_subtree(id, &mut out);
        }
        out.into_iter()
    }

    // --- internals ---

    fn collect_subtree(&self, id: WidgetId, out: &mut Vec<WidgetId>) {
        out.push(id);
        for &child in &self.node(id).children {
            self.collect_subtree(child, out);
        }
    }

    fn node(&self, id: WidgetId) -> &Widget {
        self.nodes[id.idx()].as_ref().expect("dangling WidgetId")
    }

    fn node_opt_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        if self.generations.get(id.idx()).copied() != Some(id.1) {
            return None;
        }
        self.nodes.get_mut(id.idx())?.as_mut()
    }

    fn link_parent(&mut self, id: WidgetId, parent: WidgetId) {
        let parent_node = self.node_mut(parent);
        parent_node.children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: WidgetId, parent: WidgetId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }

    fn node_mut(&mut self, id: WidgetId) -> &mut Widget {
        self.nodes[id.idx()].as_mut().expect("dangling WidgetId")
    }
}
