// Copyright 2026 the Keynav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walker basics.
//!
//! This minimal example drives the walker over a hand-rolled raw order,
//! skipping widgets that do not want focus, and prints the resulting
//! traversal sequence.
//!
//! Run:
//! - `cargo run -p keynav_demos --example focus_basics`

use keynav_traversal::types::{FocusLookup, FocusPolicy, PolicyProvider};
use keynav_traversal::walker::FocusWalker;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
struct Node(u32);

// One flat container Node(0) with children 1..=5 in raw order; only the
// odd-numbered children accept focus.
struct Lookup;
impl FocusLookup<Node> for Lookup {
    fn wants_focus(&self, node: &Node) -> bool {
        node.0 % 2 == 1
    }

    fn contains(&self, container: &Node, node: &Node) -> bool {
        container.0 == 0 || container == node
    }

    fn focus_container_of(&self, _node: &Node) -> Node {
        Node(0)
    }
}

struct Linear;
impl FocusPolicy<Node> for Linear {
    fn raw_next(&self, node: &Node) -> Option<Node> {
        (node.0 < 5).then_some(Node(node.0 + 1))
    }

    fn raw_previous(&self, node: &Node) -> Option<Node> {
        node.0.checked_sub(1).map(Node)
    }

    fn raw_default(&self, container: &Node) -> Option<Node> {
        Some(*container)
    }
}

struct Provider;
impl PolicyProvider<Node> for Provider {
    type Policy = Linear;

    fn policy_for(&self, _node: &Node) -> Option<Linear> {
        Some(Linear)
    }
}

fn main() {
    let walker: FocusWalker<Node, Lookup, Provider> = FocusWalker::new(Lookup, Provider);

    println!("== Traversal order of Node(0) ==");
    for node in walker.all(&Node(0)) {
        println!("  {node:?}");
    }

    let first = walker.default_focus(&Node(0)).expect("odd children exist");
    println!("default = {first:?}");
    println!("next({first:?})     = {:?}", walker.next(&first));
    println!("previous({first:?}) = {:?}", walker.previous(&first));
}
