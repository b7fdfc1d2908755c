//! Shared helpers for fringe benchmark suites.

use fringe_frontier::Node;
use lock_tests::world::World;

/// `n` nodes with distinct states and values that arrive out of order.
#[must_use]
pub fn scrambled_nodes(n: u32) -> Vec<Node<u32, i64>> {
    (0..n)
        .map(|s| Node::new(s).with_value(i64::from(s.wrapping_mul(2_654_435_761) % 10_007)))
        .collect()
}

/// An open `side x side` grid with start and goal in opposite corners.
///
/// # Panics
///
/// Panics if `side < 2`. Benchmark setup failures are fatal.
#[must_use]
pub fn open_grid(side: usize) -> World {
    assert!(side >= 2, "grid needs distinct start and goal");
    let rows: Vec<String> = (0..side)
        .map(|y| {
            (0..side)
                .map(|x| match (x, y) {
                    (0, 0) => 'S',
                    _ if x == side - 1 && y == side - 1 => 'G',
                    _ => '.',
                })
                .collect()
        })
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    World::grid(&rows).expect("generated grid is well formed")
}
