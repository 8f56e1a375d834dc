//! Benchmarks for origin propagation and style declarations.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use boxstyle::LayoutTree;
use boxstyle::style::{StyleDeclaration, node_style};

/// A root with `width` children, each heading a chain `depth` nodes deep.
fn build_tree(width: usize, depth: usize) -> (LayoutTree<usize>, boxstyle::NodeId) {
    let mut tree = LayoutTree::new();
    let root = tree.create_node(0);
    for i in 0..width {
        let mut parent = root;
        for d in 0..depth {
            let node = tree.create_node(i * depth + d);
            tree.append(parent, node).unwrap();
            tree.set_content_top(node, 1).unwrap();
            parent = node;
        }
    }
    (tree, root)
}

// ============================================================================
// Layout Benchmarks
// ============================================================================

fn bench_move_wide_tree(c: &mut Criterion) {
    let (mut tree, root) = build_tree(1000, 1);
    let mut offset = 0;
    c.bench_function("move_wide_tree", |b| {
        b.iter(|| {
            offset += 1;
            tree.set_origin(root, black_box(offset), black_box(offset)).unwrap();
        });
    });
}

fn bench_move_deep_tree(c: &mut Criterion) {
    let (mut tree, root) = build_tree(10, 100);
    let mut offset = 0;
    c.bench_function("move_deep_tree", |b| {
        b.iter(|| {
            offset += 1;
            tree.set_content_left(root, black_box(offset)).unwrap();
        });
    });
}

// ============================================================================
// Style Benchmarks
// ============================================================================

fn bench_apply_css(c: &mut Criterion) {
    let block = "display: pack; direction: column; padding: 4 8; margin: 1 2 3 4; \
                 color: #336699; font-family: serif; font-size: 14; flex: 1";
    c.bench_function("apply_css", |b| {
        b.iter(|| {
            let mut style = StyleDeclaration::new(node_style::schema());
            style.apply_css(black_box(block)).unwrap();
            style
        });
    });
}

criterion_group!(
    benches,
    bench_move_wide_tree,
    bench_move_deep_tree,
    bench_apply_css
);
criterion_main!(benches);
