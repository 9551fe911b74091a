//! Shape compliance test helpers.
//!
//! These functions verify that a [`Shape`] satisfies the invariants the
//! rest of the workspace relies on. Reused across the shape, lattice and
//! reachability test modules.

use crate::shape::Shape;
use indexmap::IndexSet;

/// Assert that `position(index(c)) == c` for every coordinate and that
/// `index` covers `[0, cell_count)` exactly once.
pub fn assert_index_bijective(shape: &Shape) {
    let mut seen = IndexSet::new();
    for i in 0..shape.cell_count() {
        let coord = shape
            .position(i)
            .unwrap_or_else(|| panic!("position({i}) returned None"));
        assert_eq!(
            shape.index(&coord),
            Some(i),
            "index(position({i})) = {:?}, expected {i}",
            shape.index(&coord)
        );
        assert!(seen.insert(coord.clone()), "duplicate coordinate {coord:?}");
    }
    assert_eq!(seen.len(), shape.cell_count());
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(shape: &Shape) {
    for coord in shape.coords() {
        for nb in shape.neighbours(&coord) {
            assert!(
                shape.neighbours(&nb).contains(&coord),
                "neighbour symmetry violated: {nb:?} in N({coord:?}) but {coord:?} not in N({nb:?})"
            );
        }
    }
}

/// Assert that every neighbour is in bounds and one unit step away.
pub fn assert_neighbours_orthogonal(shape: &Shape) {
    for coord in shape.coords() {
        assert_eq!(shape.neighbour_candidates(&coord).len(), 2 * shape.ndim());
        for nb in shape.neighbours(&coord) {
            assert!(shape.is_in_bounds(&nb), "{nb:?} out of bounds");
            let l1: i32 = nb.iter().zip(&coord).map(|(a, b)| (a - b).abs()).sum();
            assert_eq!(l1, 1, "{nb:?} is not a unit step from {coord:?}");
        }
    }
}

/// Run all compliance checks on a shape.
pub fn run_full_compliance(shape: &Shape) {
    assert_index_bijective(shape);
    assert_neighbours_symmetric(shape);
    assert_neighbours_orthogonal(shape);
}
