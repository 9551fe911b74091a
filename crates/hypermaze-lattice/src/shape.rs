//! Geometry of an `extent^ndim` hypercubic lattice.

use hypermaze_core::{Axis, Coord, LatticeError};
use smallvec::SmallVec;

/// Dimensionality and per-axis extent of a hypercubic lattice.
///
/// `Shape` owns all coordinate arithmetic: the mixed-radix mapping
/// between coordinates and flat indices, bounds checks, and orthogonal
/// neighbourhoods. It holds no cell data; see [`Lattice`](crate::Lattice).
///
/// Flat indices use axis 0 as the fastest-varying digit:
/// `index = Σ coord[i] * extent^i`.
///
/// # Examples
///
/// ```
/// use hypermaze_lattice::Shape;
///
/// let shape = Shape::new(3, 3).unwrap();
/// assert_eq!(shape.cell_count(), 27);
/// assert_eq!(shape.index(&[0, 1, 2]), Some(21));
/// assert_eq!(shape.position(21).unwrap().as_slice(), &[0, 1, 2]);
/// assert_eq!(shape.center().as_slice(), &[1, 1, 1]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    ndim: usize,
    extent: u32,
    cell_count: usize,
    strides: SmallVec<[usize; 4]>,
}

impl Shape {
    /// Largest supported dimensionality; every axis must be nameable by [`Axis`].
    pub const MAX_NDIM: usize = u8::MAX as usize + 1;

    /// Create a shape with `ndim` axes of `extent` cells each.
    ///
    /// # Errors
    ///
    /// - [`LatticeError::DimensionTooSmall`] if `ndim < 2`
    /// - [`LatticeError::DimensionTooLarge`] if `ndim > MAX_NDIM`
    /// - [`LatticeError::EmptyExtent`] if `extent == 0`
    /// - [`LatticeError::CellCountOverflow`] if `extent^ndim` overflows
    ///   `usize` or `extent` exceeds the `i32` coordinate range
    pub fn new(ndim: usize, extent: u32) -> Result<Self, LatticeError> {
        if ndim < 2 {
            return Err(LatticeError::DimensionTooSmall { ndim });
        }
        if ndim > Self::MAX_NDIM {
            return Err(LatticeError::DimensionTooLarge {
                ndim,
                max: Self::MAX_NDIM,
            });
        }
        if extent == 0 {
            return Err(LatticeError::EmptyExtent);
        }
        if extent > i32::MAX as u32 {
            return Err(LatticeError::CellCountOverflow { ndim, extent });
        }

        let mut strides = SmallVec::with_capacity(ndim);
        let mut stride = 1usize;
        for _ in 0..ndim {
            strides.push(stride);
            stride = stride
                .checked_mul(extent as usize)
                .ok_or(LatticeError::CellCountOverflow { ndim, extent })?;
        }

        Ok(Self {
            ndim,
            extent,
            cell_count: stride,
            strides,
        })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Cells per axis.
    pub fn extent(&self) -> u32 {
        self.extent
    }

    /// Total number of cells, `extent^ndim`.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// All axes of this shape, in order.
    pub fn axes(&self) -> impl Iterator<Item = Axis> {
        Axis::all(self.ndim)
    }

    /// The center coordinate: every axis at `extent / 2` (rounded down).
    pub fn center(&self) -> Coord {
        SmallVec::from_elem((self.extent / 2) as i32, self.ndim)
    }

    /// Flat index of [`center`](Self::center).
    pub fn center_index(&self) -> usize {
        let half = (self.extent / 2) as usize;
        self.strides.iter().map(|&stride| half * stride).sum()
    }

    /// Whether `coord` has one value per axis, each in `[0, extent)`.
    pub fn is_in_bounds(&self, coord: &[i32]) -> bool {
        coord.len() == self.ndim
            && coord
                .iter()
                .all(|&v| v >= 0 && (v as u32) < self.extent)
    }

    /// Flat index of `coord`, or `None` if it is out of bounds or has
    /// the wrong arity.
    pub fn index(&self, coord: &[i32]) -> Option<usize> {
        if !self.is_in_bounds(coord) {
            return None;
        }
        Some(
            coord
                .iter()
                .zip(&self.strides)
                .map(|(&v, &stride)| v as usize * stride)
                .sum(),
        )
    }

    /// Coordinate of flat index `index`: the exact inverse of [`index`](Self::index).
    ///
    /// Returns `None` if `index >= cell_count()`.
    pub fn position(&self, index: usize) -> Option<Coord> {
        if index >= self.cell_count {
            return None;
        }
        let extent = self.extent as usize;
        let mut rest = index;
        let mut coord = Coord::with_capacity(self.ndim);
        for _ in 0..self.ndim {
            coord.push((rest % extent) as i32);
            rest /= extent;
        }
        Some(coord)
    }

    /// Validate `coord`, returning its flat index.
    pub fn checked_index(&self, coord: &[i32]) -> Result<usize, LatticeError> {
        self.index(coord).ok_or_else(|| LatticeError::CoordOutOfBounds {
            coord: Coord::from_slice(coord),
            bounds: format!("{}D, each axis in [0, {})", self.ndim, self.extent),
        })
    }

    /// The `2 * ndim` coordinates one unit step from `coord` along a
    /// single axis, without bounds filtering.
    ///
    /// Ordered by axis, with the backward step before the forward step.
    pub fn neighbour_candidates(&self, coord: &[i32]) -> SmallVec<[Coord; 8]> {
        let mut out = SmallVec::with_capacity(2 * coord.len());
        for axis in 0..coord.len() {
            for delta in [-1, 1] {
                let mut nb = Coord::from_slice(coord);
                nb[axis] = nb[axis].saturating_add(delta);
                out.push(nb);
            }
        }
        out
    }

    /// Orthogonal neighbours of `coord` that lie inside the lattice.
    ///
    /// Diagonal cells are never neighbours: each result differs from
    /// `coord` on exactly one axis by exactly one.
    pub fn neighbours(&self, coord: &[i32]) -> SmallVec<[Coord; 8]> {
        let mut out = self.neighbour_candidates(coord);
        out.retain(|nb| self.is_in_bounds(nb));
        out
    }

    /// Iterate every coordinate in flat-index order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cell_count).filter_map(move |i| self.position(i))
    }
}
