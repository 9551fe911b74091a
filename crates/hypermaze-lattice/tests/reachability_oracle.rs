//! Breadth-first reachability checked against the union-find oracle.

use hypermaze_lattice::{generate_with_goal, reachable_set, MazeGenerator, Shape};
use hypermaze_test_utils::{connected_component, fixtures, seeded_rng};
use proptest::prelude::*;

fn bfs_indices(lattice: &hypermaze_lattice::Lattice, start: &[i32]) -> Vec<usize> {
    reachable_set(lattice, start).unwrap().indices()
}

#[test]
fn hand_built_2d_fixtures() {
    let rows: [&[&str]; 3] = [
        &[
            "..#..", //
            "..#..", //
            "..#..", //
            "#####", //
            ".....", //
        ],
        &[
            ".#.#.", //
            ".#.#.", //
            "...#.", //
            "####.", //
            ".....", //
        ],
        &[
            "#####", //
            "#...#", //
            "#.#.#", //
            "#...#", //
            "#####", //
        ],
    ];
    for grid in rows {
        let l = fixtures::lattice_from_rows(grid);
        for start in l.shape().coords() {
            assert_eq!(
                bfs_indices(&l, &start),
                connected_component(&l, &start),
                "start {start:?} in {grid:?}"
            );
        }
    }
}

#[test]
fn every_start_of_the_4d_fixture() {
    let l = fixtures::pocketed_4d();
    for start in l.shape().coords() {
        assert_eq!(
            bfs_indices(&l, &start),
            connected_component(&l, &start),
            "start {start:?}"
        );
    }
}

#[test]
fn generated_lattices_match_from_center() {
    let mut rng = seeded_rng(2024);
    for (ndim, extent) in [(3, 11), (4, 5), (4, 7)] {
        let g = MazeGenerator::new(ndim, extent, 0.5).unwrap();
        for _ in 0..10 {
            let l = g.generate(&mut rng);
            let center = l.center();
            assert_eq!(bfs_indices(&l, &center), connected_component(&l, &center));
        }
    }
}

#[test]
fn goal_lies_in_the_oracle_component() {
    let mut rng = seeded_rng(77);
    let g = MazeGenerator::new(4, 5, 0.6).unwrap();
    for _ in 0..50 {
        let maze = generate_with_goal(&g, &mut rng);
        let component = connected_component(&maze.lattice, &maze.lattice.center());
        let goal = maze.lattice.index(&maze.goal).unwrap();
        assert!(component.binary_search(&goal).is_ok());
        assert_eq!(component.len(), maze.reachable);
    }
}

proptest! {
    #[test]
    fn random_lattices_agree(
        seed in any::<u64>(),
        ndim in 2usize..=4,
        extent in 1u32..6,
        p in 0.0f64..=1.0,
    ) {
        let g = MazeGenerator::with_shape(Shape::new(ndim, extent).unwrap(), p).unwrap();
        let l = g.generate(&mut seeded_rng(seed));
        let start = l.position(seed as usize % l.cell_count()).unwrap();
        prop_assert_eq!(bfs_indices(&l, &start), connected_component(&l, &start));
    }
}
