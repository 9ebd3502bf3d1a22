use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use triple_bst::tree::{ByX, ByY, Tree, Triple};

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// A record whose x and y keys coincide, so one tree serves both policies.
fn record(key: i32) -> Triple {
    Triple::new(key, key, 0)
}

/// Builds a tree by inserting keys in ascending order. Nothing rebalances,
/// so every insert walks the whole right spine.
fn get_unbalanced_tree(num_levels: usize) -> Tree<ByX> {
    let mut tree = Tree::new();
    for key in 0..num_nodes_in_full_tree(num_levels) as i32 {
        tree.insert(record(key));
    }
    tree
}

/// Builds a tree by inserting midpoints first, so the result is balanced
/// even though insertion order is all that decides shape.
fn get_balanced_tree(num_levels: usize) -> Tree<ByX> {
    let mut tree = Tree::new();
    let keys: Vec<i32> = (0..num_nodes_in_full_tree(num_levels) as i32).collect();
    fill_balanced_tree(&mut tree, &keys);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<ByX>, keys: &[i32]) {
    if !keys.is_empty() {
        let mid = keys.len() / 2;
        tree.insert(record(keys[mid]));
        fill_balanced_tree(tree, &keys[..mid]);
        fill_balanced_tree(tree, &keys[mid + 1..]);
    }
}

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs tests for
/// various sizes and shapes of trees before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<ByX>, i32)) {
    let mut group = c.benchmark_group(name);

    // For trees of size 2^3, 2^7, 2^11...
    for num_levels in [3, 7, 11] {
        // Test unbalanced and balanced trees.
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_key_in_tree = num_nodes_in_full_tree(num_levels) as i32 - 1;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_key_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_key_in_tree));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

/// All routines run against balanced and unbalanced trees of various sizes
/// and cover hits as well as misses.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, key| {
        let _record = black_box(tree.search(key));
    });
    bench_helper(c, "search-miss", |tree, key| {
        let _record = black_box(tree.search(key + 1));
    });

    bench_helper(c, "insert", |tree, key| {
        tree.insert(record(key + 1));
    });

    bench_helper(c, "in-order", |tree, _| {
        let _count = black_box(tree.in_order().count());
    });
    bench_helper(c, "rekey", |tree, _| {
        let _by_y = black_box(Tree::<ByY>::rekeyed(tree));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
