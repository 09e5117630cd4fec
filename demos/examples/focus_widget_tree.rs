// Copyright 2026 the Keynav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget tree → walker adapter with a small dialog.
//!
//! This example builds a dialog with a form panel, shows how the default
//! ordering (explicit focus order, then position) shapes the Tab sequence,
//! and how a nested focus container clips traversal.
//!
//! Run:
//! - `cargo run -p keynav_demos --example focus_widget_tree`

use std::collections::HashMap;

use keynav_traversal::walker::FocusWalker;
use keynav_widget_tree::{LocalWidget, Tree, WidgetFlags, WidgetId};
use kurbo::Rect;

fn main() {
    let mut tree = Tree::new();
    let mut names: HashMap<WidgetId, &str> = HashMap::new();

    // Dialog (focus container) with two text fields, an OK/Cancel row, and a
    // nested "advanced" panel that is its own focus container.
    let dialog = tree.insert(
        None,
        LocalWidget {
            bounds: Rect::new(0.0, 0.0, 400.0, 300.0),
            flags: WidgetFlags::FOCUS_CONTAINER,
            ..Default::default()
        },
    );
    names.insert(dialog, "dialog");

    let mut field = |tree: &mut Tree, parent, name, bounds, flags| {
        let id = tree.insert(
            Some(parent),
            LocalWidget {
                bounds,
                flags,
                ..Default::default()
            },
        );
        names.insert(id, name);
        id
    };

    let name_field = field(
        &mut tree,
        dialog,
        "name",
        Rect::new(20.0, 20.0, 380.0, 50.0),
        WidgetFlags::WANTS_FOCUS,
    );
    let email_field = field(
        &mut tree,
        dialog,
        "email",
        Rect::new(20.0, 60.0, 380.0, 90.0),
        WidgetFlags::WANTS_FOCUS,
    );
    let ok = field(
        &mut tree,
        dialog,
        "ok",
        Rect::new(220.0, 260.0, 290.0, 290.0),
        WidgetFlags::WANTS_FOCUS,
    );
    let cancel = field(
        &mut tree,
        dialog,
        "cancel",
        Rect::new(300.0, 260.0, 380.0, 290.0),
        WidgetFlags::WANTS_FOCUS,
    );

    let advanced = field(
        &mut tree,
        dialog,
        "advanced",
        Rect::new(20.0, 100.0, 380.0, 250.0),
        WidgetFlags::FOCUS_CONTAINER,
    );
    let port = field(
        &mut tree,
        advanced,
        "port",
        Rect::new(40.0, 120.0, 360.0, 150.0),
        WidgetFlags::WANTS_FOCUS,
    );
    let _label = field(
        &mut tree,
        advanced,
        "label",
        Rect::new(40.0, 160.0, 360.0, 190.0),
        WidgetFlags::empty(),
    );
    let proxy = field(
        &mut tree,
        advanced,
        "proxy",
        Rect::new(40.0, 200.0, 360.0, 230.0),
        WidgetFlags::WANTS_FOCUS,
    );

    println!("== Tab order of the dialog (position-based) ==");
    for id in FocusWalker::new(&tree, &tree).all(&dialog) {
        println!("  {}", names[&id]);
    }

    // OK before Cancel regardless of position: give both an explicit order.
    tree.set_focus_order(ok, 1);
    tree.set_focus_order(cancel, 2);
    let walker = FocusWalker::new(&tree, &tree);
    println!("== After assigning explicit order to the buttons ==");
    for id in walker.all(&dialog) {
        println!("  {}", names[&id]);
    }

    // The advanced panel is its own boundary: Tab inside it stays inside.
    println!("== Inside the advanced panel ==");
    println!("  default  = {}", names[&walker.default_focus(&advanced).unwrap()]);
    println!(
        "  next(port)  = {:?}",
        walker.next(&port).map(|id| names[&id])
    );
    println!(
        "  next(proxy) = {:?}",
        walker.next(&proxy).map(|id| names[&id])
    );

    let _ = (name_field, email_field);
}
