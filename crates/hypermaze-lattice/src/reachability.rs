//! Breadth-first reachability and goal selection.
//!
//! The goal is only ever drawn from the connected component of open
//! cells around the start, so every generated maze is solvable. When
//! that component is just the start cell the goal equals the start;
//! this is accepted rather than treated as an error.

use crate::generator::MazeGenerator;
use crate::lattice::Lattice;
use crate::shape::Shape;
use hypermaze_core::{Coord, LatticeError};
use rand::Rng;
use std::collections::VecDeque;

/// The set of coordinates reachable from a start cell.
///
/// Members are kept in breadth-first discovery order, so the start is
/// always first and distances from the start are non-decreasing.
/// Membership checks are O(1) via a flat-index bitmap.
#[derive(Clone, Debug)]
pub struct ReachableSet {
    shape: Shape,
    order: Vec<Coord>,
    visited: Vec<bool>,
}

impl ReachableSet {
    /// The coordinate the search started from.
    pub fn start(&self) -> &Coord {
        &self.order[0]
    }

    /// Number of reachable coordinates, including the start.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false`: the start is always a member.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `coord` is reachable from the start.
    pub fn contains(&self, coord: &[i32]) -> bool {
        self.shape
            .index(coord)
            .is_some_and(|i| self.visited[i])
    }

    /// The `i`-th member in discovery order.
    pub fn get(&self, i: usize) -> Option<&Coord> {
        self.order.get(i)
    }

    /// Members in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.order.iter()
    }

    /// Flat indices of all members, ascending.
    pub fn indices(&self) -> Vec<usize> {
        self.visited
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| v.then_some(i))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ReachableSet {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Compute the connected component of open cells containing `start`.
///
/// Expands orthogonal neighbours that are open and not yet visited.
/// `start` is included even if it is a wall; generated lattices never
/// have a walled center, but hand-built fixtures may start anywhere.
///
/// # Errors
///
/// Returns [`LatticeError::CoordOutOfBounds`] if `start` is not inside
/// the lattice.
pub fn reachable_set(lattice: &Lattice, start: &[i32]) -> Result<ReachableSet, LatticeError> {
    let start_index = lattice.shape().checked_index(start)?;
    Ok(search(lattice, Coord::from_slice(start), start_index))
}

fn search(lattice: &Lattice, start: Coord, start_index: usize) -> ReachableSet {
    let mut visited = vec![false; lattice.cell_count()];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited[start_index] = true;
    queue.push_back(start);

    while let Some(coord) = queue.pop_front() {
        for nb in lattice.neighbours(&coord) {
            let Some(i) = lattice.index(&nb) else {
                continue;
            };
            if !visited[i] && lattice.cells()[i].is_open() {
                visited[i] = true;
                queue.push_back(nb);
            }
        }
        order.push(coord);
    }

    tracing::trace!(
        reachable = order.len(),
        cells = lattice.cell_count(),
        "reachability search complete"
    );

    ReachableSet {
        shape: lattice.shape().clone(),
        order,
        visited,
    }
}

/// Choose a goal uniformly among the members of `reachable`.
///
/// The start itself is a candidate, so the goal may equal the start.
/// An empty set cannot be produced by [`reachable_set`]; if one is
/// passed anyway the start is returned.
pub fn select_goal<R: Rng + ?Sized>(reachable: &ReachableSet, rng: &mut R) -> Coord {
    if reachable.order.len() <= 1 {
        return reachable.order.first().cloned().unwrap_or_default();
    }
    let i = rng.random_range(0..reachable.order.len());
    reachable.order[i].clone()
}

/// A freshly generated lattice together with its goal.
#[derive(Clone, Debug)]
pub struct GeneratedMaze {
    /// The new lattice.
    pub lattice: Lattice,
    /// Goal coordinate, reachable from the lattice center.
    pub goal: Coord,
    /// Size of the component around the center the goal was drawn from.
    pub reachable: usize,
}

/// Generate a lattice and draw a goal reachable from its center.
///
/// This is the full regeneration step: fill, search from the center,
/// pick the goal. The generator's RNG stream is shared by both draws.
pub fn generate_with_goal<R: Rng + ?Sized>(generator: &MazeGenerator, rng: &mut R) -> GeneratedMaze {
    let lattice = generator.generate(rng);
    let start = lattice.center();
    let start_index = lattice.shape().center_index();
    let reachable = search(&lattice, start, start_index);
    let goal = select_goal(&reachable, rng);
    tracing::info!(
        reachable = reachable.len(),
        open = lattice.open_count(),
        goal = ?goal.as_slice(),
        "generated maze"
    );
    GeneratedMaze {
        reachable: reachable.len(),
        lattice,
        goal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::Cell;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use smallvec::smallvec;

    /// 2-D fixture; rows are y, columns are x.
    fn grid(rows: &[&str]) -> Lattice {
        let extent = rows.len() as u32;
        let shape = Shape::new(2, extent).unwrap();
        Lattice::from_fn(shape, |c| {
            let row = rows[c[1] as usize].as_bytes();
            Cell::from_char(row[c[0] as usize] as char).unwrap_or(Cell::Wall)
        })
    }

    #[test]
    fn follows_corridors_and_stops_at_walls() {
        let l = grid(&[
            "..#..", //
            "#.#.#", //
            "#....", //
            "#####", //
            "....#", //
        ]);
        let r = reachable_set(&l, &[2, 2]).unwrap();
        let expected: Vec<Coord> = vec![
            smallvec![0, 0],
            smallvec![1, 0],
            smallvec![3, 0],
            smallvec![4, 0],
            smallvec![1, 1],
            smallvec![3, 1],
            smallvec![1, 2],
            smallvec![2, 2],
            smallvec![3, 2],
            smallvec![4, 2],
        ];
        assert_eq!(r.len(), expected.len());
        for c in &expected {
            assert!(r.contains(c), "{c:?} should be reachable");
        }
        // Bottom row is cut off by the wall row.
        assert!(!r.contains(&[0, 4]));
        assert!(!r.contains(&[2, 0]));
    }

    #[test]
    fn start_is_first_and_distances_non_decreasing() {
        let l = Lattice::filled(Shape::new(3, 5).unwrap(), Cell::Open);
        let r = reachable_set(&l, &[2, 2, 2]).unwrap();
        assert_eq!(r.len(), 125);
        assert_eq!(r.start().as_slice(), &[2, 2, 2]);
        let dist = |c: &Coord| -> i32 { c.iter().map(|v| (v - 2).abs()).sum() };
        let dists: Vec<i32> = r.iter().map(dist).collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn diagonal_cells_are_not_adjacent() {
        // Only the center and the four corners are open.
        let l = Lattice::from_fn(Shape::new(2, 3).unwrap(), |c| {
            if c[0] != 1 && c[1] != 1 {
                Cell::Open
            } else {
                Cell::Wall
            }
        });
        assert_eq!(l.open_count(), 5);
        let r = reachable_set(&l, &[1, 1]).unwrap();
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn walled_start_is_still_included() {
        let l = Lattice::filled(Shape::new(2, 5).unwrap(), Cell::Wall);
        let r = reachable_set(&l, &[0, 0]).unwrap();
        assert_eq!(r.len(), 1);
        assert!(r.contains(&[0, 0]));
    }

    #[test]
    fn out_of_bounds_start_is_an_error() {
        let l = Lattice::filled(Shape::new(2, 5).unwrap(), Cell::Open);
        assert!(matches!(
            reachable_set(&l, &[5, 0]),
            Err(LatticeError::CoordOutOfBounds { .. })
        ));
        assert!(reachable_set(&l, &[1, 1, 1]).is_err());
    }

    #[test]
    fn singleton_component_goal_is_start() {
        let l = Lattice::filled(Shape::new(4, 5).unwrap(), Cell::Wall);
        let r = reachable_set(&l, &l.center()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(select_goal(&r, &mut rng), l.center());
    }

    #[test]
    fn goal_is_always_reachable() {
        let g = MazeGenerator::new(3, 11, 0.4).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..25 {
            let lattice = g.generate(&mut rng);
            let r = reachable_set(&lattice, &lattice.center()).unwrap();
            let goal = select_goal(&r, &mut rng);
            assert!(r.contains(&goal));
            assert!(lattice.is_open(&goal));
        }
    }

    #[test]
    fn goal_selection_covers_the_component() {
        let l = grid(&[
            "#####", //
            "#####", //
            "#...#", //
            "#####", //
            "#####", //
        ]);
        let r = reachable_set(&l, &[2, 2]).unwrap();
        assert_eq!(r.len(), 3);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut hits = [0usize; 3];
        for _ in 0..300 {
            let goal = select_goal(&r, &mut rng);
            hits[(goal[0] - 1) as usize] += 1;
        }
        assert!(hits.iter().all(|&h| h > 50), "skewed goal choice: {hits:?}");
    }

    #[test]
    fn generate_with_goal_is_deterministic_and_consistent() {
        let g = MazeGenerator::new(4, 7, 0.5).unwrap();
        let a = generate_with_goal(&g, &mut ChaCha8Rng::seed_from_u64(8));
        let b = generate_with_goal(&g, &mut ChaCha8Rng::seed_from_u64(8));
        assert_eq!(a.lattice, b.lattice);
        assert_eq!(a.goal, b.goal);

        let r = reachable_set(&a.lattice, &a.lattice.center()).unwrap();
        assert_eq!(r.len(), a.reachable);
        assert!(r.contains(&a.goal));
    }

    #[test]
    fn indices_match_members() {
        let l = grid(&[
            "#####", //
            "#..##", //
            "#.##.", //
            "####.", //
            "#####", //
        ]);
        let r = reachable_set(&l, &[2, 2]).unwrap();
        // The center (2,2) is forced open and touches (2,1) and (1,2).
        let mut from_iter: Vec<usize> = r.iter().map(|c| l.index(c).unwrap()).collect();
        from_iter.sort_unstable();
        assert_eq!(r.indices(), from_iter);
        assert_eq!(r.len(), 4);
        assert!(!r.contains(&[4, 2]));
    }
}
