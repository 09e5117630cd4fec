// Copyright 2026 the Keynav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab cycling with wrap-around.
//!
//! Simulates repeated Tab presses in a toolbar: the walker's `next` stops at
//! the end of the traversal order, and the `cycle` helpers wrap back to the
//! start so focus keeps moving.
//!
//! Run:
//! - `cargo run -p keynav_demos --example focus_tab_cycle`

use keynav_traversal::cycle::{next_wrapping, previous_wrapping};
use keynav_traversal::walker::FocusWalker;
use keynav_widget_tree::{LocalWidget, Tree, WidgetFlags};
use kurbo::Rect;

fn main() {
    let mut tree = Tree::new();
    let toolbar = tree.insert(
        None,
        LocalWidget {
            bounds: Rect::new(0.0, 0.0, 400.0, 40.0),
            flags: WidgetFlags::FOCUS_CONTAINER,
            ..Default::default()
        },
    );

    let labels = ["open", "save", "undo", "redo"];
    let buttons: Vec<_> = labels
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let x = i as f64 * 100.0;
            tree.insert(
                Some(toolbar),
                LocalWidget {
                    bounds: Rect::new(x, 0.0, x + 90.0, 40.0),
                    flags: WidgetFlags::WANTS_FOCUS,
                    ..Default::default()
                },
            )
        })
        .collect();

    let walker = FocusWalker::new(&tree, &tree);
    let name = |id| labels[buttons.iter().position(|b| *b == id).unwrap()];

    let mut focused = walker.default_focus(&toolbar).expect("toolbar has buttons");
    println!("focus starts on {:?}", name(focused));

    // Six Tab presses: wraps from `redo` back to `open`.
    for _ in 0..6 {
        focused = next_wrapping(&walker, &focused).expect("container is non-empty");
        println!("tab      -> {:?}", name(focused));
    }

    // Two Shift-Tab presses walk backwards, wrapping at the front.
    for _ in 0..2 {
        focused = previous_wrapping(&walker, &focused).expect("container is non-empty");
        println!("shift-tab -> {:?}", name(focused));
    }
}
