//! Reusable lattice fixtures.
//!
//! Every lattice constructor opens the center, so fixtures that expect
//! a wall at the center will not get one.

use hypermaze_core::Coord;
use hypermaze_lattice::{Cell, Lattice, Shape};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn shape(ndim: usize, extent: u32) -> Shape {
    Shape::new(ndim, extent)
        .unwrap_or_else(|e| panic!("fixture shape {ndim}D x {extent}: {e}"))
}

/// Deterministic random source for tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Every cell open.
pub fn open_lattice(ndim: usize, extent: u32) -> Lattice {
    Lattice::filled(shape(ndim, extent), Cell::Open)
}

/// Every cell a wall except the center.
pub fn walled_lattice(ndim: usize, extent: u32) -> Lattice {
    Lattice::filled(shape(ndim, extent), Cell::Wall)
}

/// Open lattice with walls at exactly the listed coordinates.
pub fn lattice_with_walls(ndim: usize, extent: u32, walls: &[Coord]) -> Lattice {
    Lattice::from_fn(shape(ndim, extent), |c| {
        if walls.contains(c) {
            Cell::Wall
        } else {
            Cell::Open
        }
    })
}

/// Walled lattice with open cells at exactly the listed coordinates
/// (plus the center).
pub fn lattice_with_openings(ndim: usize, extent: u32, openings: &[Coord]) -> Lattice {
    Lattice::from_fn(shape(ndim, extent), |c| {
        if openings.contains(c) {
            Cell::Open
        } else {
            Cell::Wall
        }
    })
}

/// 2-D lattice drawn as text: one string per `y`, one character per
/// `x`, `.` open and `#` wall.
///
/// Panics if the rows do not form a square or contain other characters.
pub fn lattice_from_rows(rows: &[&str]) -> Lattice {
    let extent = rows.len();
    for row in rows {
        assert_eq!(row.len(), extent, "fixture rows must form a square");
    }
    Lattice::from_fn(shape(2, extent as u32), |c| {
        let ch = rows[c[1] as usize].as_bytes()[c[0] as usize] as char;
        Cell::from_char(ch).unwrap_or_else(|| panic!("bad fixture cell {ch:?}"))
    })
}

/// 4-D, extent 5 lattice (625 cells) with a fixed, irregular wall
/// pattern: several isolated pockets and a winding component around
/// the center.
pub fn pocketed_4d() -> Lattice {
    Lattice::from_fn(shape(4, 5), |c| {
        let (x, y, z, w) = (c[0], c[1], c[2], c[3]);
        let sum = x + 2 * y + 3 * z + 5 * w;
        if w == 0 && z == 0 {
            // Chequered floor: no two open cells adjacent within it.
            if (x + y) % 2 == 0 {
                Cell::Open
            } else {
                Cell::Wall
            }
        } else if sum % 3 == 0 || (x == 4 && y == 4) {
            Cell::Wall
        } else {
            Cell::Open
        }
    })
}
