//! Open/wall cell storage over a [`Shape`].

use crate::shape::Shape;
use hypermaze_core::{Coord, LatticeError};
use smallvec::SmallVec;
use std::fmt;

/// Contents of one lattice cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Passable.
    Open,
    /// Blocked.
    Wall,
}

impl Cell {
    /// Whether the cell is passable.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Map `.` to [`Cell::Open`] and `#` to [`Cell::Wall`].
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Self::Open),
            '#' => Some(Self::Wall),
            _ => None,
        }
    }

    /// Inverse of [`from_char`](Self::from_char).
    pub fn as_char(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A hypercubic lattice of open and wall cells.
///
/// Cells are stored flat in [`Shape::index`] order. The center cell is
/// always open: every constructor forces it, so a player spawned at the
/// center can never be embedded in a wall.
///
/// A lattice is immutable once built. Regeneration replaces the whole
/// lattice rather than editing it in place.
///
/// # Examples
///
/// ```
/// use hypermaze_lattice::{Cell, Lattice, Shape};
///
/// let shape = Shape::new(3, 5).unwrap();
/// let lattice = Lattice::filled(shape, Cell::Wall);
/// assert_eq!(lattice.open_count(), 1);
/// assert!(lattice.is_open(&[2, 2, 2]));
/// assert!(!lattice.is_open(&[0, 0, 0]));
/// assert!(!lattice.is_open(&[9, 9, 9]));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Lattice {
    shape: Shape,
    cells: Vec<Cell>,
}

impl Lattice {
    /// Build a lattice from explicit flat storage.
    ///
    /// Returns `Err(LatticeError::CellCountMismatch)` if `cells` does not
    /// hold exactly `shape.cell_count()` entries. The center is forced open.
    pub fn new(shape: Shape, cells: Vec<Cell>) -> Result<Self, LatticeError> {
        if cells.len() != shape.cell_count() {
            return Err(LatticeError::CellCountMismatch {
                expected: shape.cell_count(),
                actual: cells.len(),
            });
        }
        Ok(Self::with_open_center(shape, cells))
    }

    /// A lattice where every cell (except the center) is `cell`.
    pub fn filled(shape: Shape, cell: Cell) -> Self {
        let cells = vec![cell; shape.cell_count()];
        Self::with_open_center(shape, cells)
    }

    /// A lattice whose cells are computed from their coordinates.
    ///
    /// `f` is called once per cell in flat-index order; its answer for
    /// the center is overridden to open.
    pub fn from_fn(shape: Shape, mut f: impl FnMut(&Coord) -> Cell) -> Self {
        let cells = shape.coords().map(|c| f(&c)).collect();
        Self::with_open_center(shape, cells)
    }

    pub(crate) fn with_open_center(shape: Shape, mut cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), shape.cell_count());
        let center = shape.center_index();
        cells[center] = Cell::Open;
        Self { shape, cells }
    }

    /// Geometry of this lattice.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Cells per axis.
    pub fn extent(&self) -> u32 {
        self.shape.extent()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Flat cell storage in index order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// The center coordinate, which is always open.
    pub fn center(&self) -> Coord {
        self.shape.center()
    }

    /// See [`Shape::index`].
    pub fn index(&self, coord: &[i32]) -> Option<usize> {
        self.shape.index(coord)
    }

    /// See [`Shape::position`].
    pub fn position(&self, index: usize) -> Option<Coord> {
        self.shape.position(index)
    }

    /// See [`Shape::is_in_bounds`].
    pub fn is_in_bounds(&self, coord: &[i32]) -> bool {
        self.shape.is_in_bounds(coord)
    }

    /// See [`Shape::neighbours`].
    pub fn neighbours(&self, coord: &[i32]) -> SmallVec<[Coord; 8]> {
        self.shape.neighbours(coord)
    }

    /// See [`Shape::neighbour_candidates`].
    pub fn neighbour_candidates(&self, coord: &[i32]) -> SmallVec<[Coord; 8]> {
        self.shape.neighbour_candidates(coord)
    }

    /// Contents of the cell at `coord`, or `None` outside the lattice.
    pub fn cell(&self, coord: &[i32]) -> Option<Cell> {
        self.shape.index(coord).map(|i| self.cells[i])
    }

    /// Contents of the cell at flat index `index`.
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Whether `coord` is inside the lattice and open.
    ///
    /// Coordinates outside the lattice are reported as not open.
    pub fn is_open(&self, coord: &[i32]) -> bool {
        self.cell(coord).is_some_and(Cell::is_open)
    }
}

impl fmt::Debug for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lattice")
            .field("ndim", &self.ndim())
            .field("extent", &self.extent())
            .field("cell_count", &self.cell_count())
            .field("open_count", &self.open_count())
            .finish()
    }
}
