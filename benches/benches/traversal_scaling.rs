// Copyright 2026 the Keynav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traversal cost over wide and deep trees.
//!
//! Measures a single Tab step and a full enumeration. Each walker operation
//! re-snapshots the focus container's subtree, so both scale with the
//! container size; this bench tracks that constant.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use keynav_traversal::walker::FocusWalker;
use keynav_widget_tree::{LocalWidget, Tree, WidgetFlags, WidgetId};
use kurbo::Rect;

fn wide_tree(children: usize) -> (Tree, WidgetId, Vec<WidgetId>) {
    let mut tree = Tree::new();
    let root = tree.insert(
        None,
        LocalWidget {
            flags: WidgetFlags::FOCUS_CONTAINER,
            ..Default::default()
        },
    );
    let ids = (0..children)
        .map(|i| {
            let y = i as f64 * 10.0;
            tree.insert(
                Some(root),
                LocalWidget {
                    bounds: Rect::new(0.0, y, 100.0, y + 10.0),
                    flags: WidgetFlags::WANTS_FOCUS,
                    ..Default::default()
                },
            )
        })
        .collect();
    (tree, root, ids)
}

fn deep_tree(depth: usize) -> (Tree, WidgetId, Vec<WidgetId>) {
    let mut tree = Tree::new();
    let root = tree.insert(
        None,
        LocalWidget {
            flags: WidgetFlags::FOCUS_CONTAINER,
            ..Default::default()
        },
    );
    let mut parent = root;
    let ids = (0..depth)
        .map(|i| {
            let y = i as f64 * 10.0;
            let id = tree.insert(
                Some(parent),
                LocalWidget {
                    bounds: Rect::new(0.0, y, 100.0, y + 10.0),
                    flags: WidgetFlags::WANTS_FOCUS,
                    ..Default::default()
                },
            );
            parent = id;
            id
        })
        .collect();
    (tree, root, ids)
}

fn bench_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("next");
    for &n in &[100_usize, 1_000, 10_000] {
        let (tree, _root, ids) = wide_tree(n);
        let mid = ids[n / 2];
        group.bench_with_input(BenchmarkId::new("wide", n), &n, |b, _| {
            let walker = FocusWalker::new(&tree, &tree);
            b.iter(|| black_box(walker.next(&mid)));
        });
    }
    for &n in &[100_usize, 1_000] {
        let (tree, _root, ids) = deep_tree(n);
        let mid = ids[n / 2];
        group.bench_with_input(BenchmarkId::new("deep", n), &n, |b, _| {
            let walker = FocusWalker::new(&tree, &tree);
            b.iter(|| black_box(walker.next(&mid)));
        });
    }
    group.finish();
}

fn bench_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("all");
    for &n in &[100_usize, 1_000, 10_000] {
        let (tree, root, _ids) = wide_tree(n);
        group.bench_with_input(BenchmarkId::new("wide", n), &n, |b, _| {
            let walker = FocusWalker::new(&tree, &tree);
            b.iter(|| black_box(walker.all(&root)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_next, bench_all);
criterion_main!(benches);
