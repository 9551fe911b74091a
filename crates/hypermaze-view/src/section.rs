//! Cross-section extraction: what a renderer draws for one plane.

use crate::plane::{Plane, PlaneId};
use crate::projection::{goal_visible, slice};
use hypermaze_lattice::Lattice;
use std::fmt;

/// Contents of one displayed grid square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Blocked cell.
    Wall,
    /// Passable cell.
    Open,
    /// The player's cell.
    Player,
    /// The goal, when it lies in this slice.
    Goal,
}

impl Tile {
    /// Single-character rendering used by [`CrossSection`]'s `Display`.
    pub fn as_char(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => '.',
            Self::Player => '@',
            Self::Goal => '*',
        }
    }
}

/// An `extent × extent` grid of tiles for one plane.
///
/// Rows are indexed by the plane's vertical axis value and columns by
/// its horizontal axis value, both starting at zero. `Display` prints
/// the highest row first so that vertical zero sits at the bottom.
///
/// The player is always visible on every plane. The goal is drawn only
/// when it shares the player's values on every axis the plane holds
/// fixed; the player takes precedence if both occupy one square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossSection {
    plane: PlaneId,
    extent: usize,
    tiles: Vec<Tile>,
}

impl CrossSection {
    /// Extract the grid `plane` shows through `lattice` at `player`.
    ///
    /// `player` and `goal` must be coordinates of `lattice`.
    pub fn extract(lattice: &Lattice, plane: &Plane, player: &[i32], goal: &[i32]) -> Self {
        let extent = lattice.extent() as usize;
        let show_goal = goal_visible(plane, player, goal);
        let (h, v) = (plane.horz().index(), plane.vert().index());

        let mut tiles = Vec::with_capacity(extent * extent);
        for vert in 0..extent as i32 {
            for horz in 0..extent as i32 {
                let tile = if player[h] == horz && player[v] == vert {
                    Tile::Player
                } else if show_goal && goal[h] == horz && goal[v] == vert {
                    Tile::Goal
                } else if lattice.is_open(&slice(plane, player, vert, horz)) {
                    Tile::Open
                } else {
                    Tile::Wall
                };
                tiles.push(tile);
            }
        }

        Self {
            plane: plane.id(),
            extent,
            tiles,
        }
    }

    /// The plane this section was taken from.
    pub fn plane(&self) -> PlaneId {
        self.plane
    }

    /// Squares per side.
    pub fn extent(&self) -> usize {
        self.extent
    }

    /// Tile at the given vertical and horizontal plane coordinates.
    pub fn tile(&self, vert: usize, horz: usize) -> Option<Tile> {
        if vert >= self.extent || horz >= self.extent {
            return None;
        }
        Some(self.tiles[vert * self.extent + horz])
    }

    /// Rows in ascending vertical order.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.extent.max(1))
    }

    /// Number of squares holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}

impl fmt::Display for CrossSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows().collect::<Vec<_>>().into_iter().rev() {
            for tile in row {
                write!(f, "{}", tile.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
