//! Union-find reference for connected components.
//!
//! Deliberately independent of `hypermaze_lattice::reachability`: it
//! walks flat indices with its own stride arithmetic and merges every
//! adjacent open pair, rather than searching outward from a start.

use hypermaze_lattice::Lattice;

struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }
}

/// Flat indices of the component containing `start`, ascending.
///
/// The start is always included and treated as passable even when it
/// is a wall, so a walled start still joins its open neighbours.
/// Panics if `start` is outside the lattice.
pub fn connected_component(lattice: &Lattice, start: &[i32]) -> Vec<usize> {
    let extent = lattice.extent() as usize;
    let n = lattice.cell_count();
    let start = lattice
        .index(start)
        .unwrap_or_else(|| panic!("oracle start {start:?} out of bounds"));
    let mut open: Vec<bool> = lattice.cells().iter().map(|c| c.is_open()).collect();
    open[start] = true;

    let mut sets = DisjointSet::new(n);
    for i in 0..n {
        if !open[i] {
            continue;
        }
        // Forward neighbour on each axis: +stride unless at the upper edge.
        let mut stride = 1;
        for _ in 0..lattice.ndim() {
            let digit = (i / stride) % extent;
            if digit + 1 < extent && open[i + stride] {
                sets.union(i, i + stride);
            }
            stride *= extent;
        }
    }

    let root = sets.find(start);
    (0..n)
        .filter(|&i| open[i] && sets.find(i) == root)
        .collect()
}
