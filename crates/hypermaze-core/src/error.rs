//! Error types for lattice construction and move handling.
//!
//! Blocked moves are not errors: a move into a wall or off the edge of
//! the lattice is a normal no-op. The errors here describe caller
//! defects that legitimate input can never produce.

use std::error::Error;
use std::fmt;

use crate::axis::Axis;
use crate::id::Coord;

/// Errors arising from lattice construction, generation parameters, or
/// lattice queries that require an in-bounds coordinate.
#[derive(Clone, Debug, PartialEq)]
pub enum LatticeError {
    /// Fewer than two dimensions were requested.
    DimensionTooSmall {
        /// The requested dimensionality.
        ndim: usize,
    },
    /// More dimensions were requested than [`Axis`] can name.
    DimensionTooLarge {
        /// The requested dimensionality.
        ndim: usize,
        /// The largest supported dimensionality.
        max: usize,
    },
    /// The per-axis extent is zero.
    EmptyExtent,
    /// `extent ^ ndim` does not fit in `usize` or exceeds the `i32`
    /// coordinate range.
    CellCountOverflow {
        /// The requested dimensionality.
        ndim: usize,
        /// The requested per-axis extent.
        extent: u32,
    },
    /// Explicit cell storage does not have `extent ^ ndim` entries.
    CellCountMismatch {
        /// The required number of cells.
        expected: usize,
        /// The number of cells supplied.
        actual: usize,
    },
    /// Wall probability is NaN, infinite, or outside `[0, 1]`.
    InvalidWallProbability {
        /// The rejected value.
        value: f64,
    },
    /// A coordinate is outside the lattice or has the wrong arity.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionTooSmall { ndim } => {
                write!(f, "lattice needs at least 2 dimensions, got {ndim}")
            }
            Self::DimensionTooLarge { ndim, max } => {
                write!(f, "lattice supports at most {max} dimensions, got {ndim}")
            }
            Self::EmptyExtent => write!(f, "lattice extent must be at least 1"),
            Self::CellCountOverflow { ndim, extent } => {
                write!(f, "cell count {extent}^{ndim} overflows")
            }
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::InvalidWallProbability { value } => {
                write!(f, "wall probability must be within [0, 1], got {value}")
            }
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord:?} out of bounds: {bounds}")
            }
        }
    }
}

impl Error for LatticeError {}

/// Errors from move handling.
///
/// These indicate an integration defect in the input mapping, not a
/// blocked move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The request names an axis the lattice does not have.
    UnknownAxis {
        /// The requested axis.
        axis: Axis,
        /// Dimensionality of the lattice.
        ndim: usize,
    },
    /// An axis name could not be resolved to an axis of the lattice.
    UnknownAxisName {
        /// The unresolved name.
        name: String,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAxis { axis, ndim } => {
                write!(f, "axis '{axis}' is not part of a {ndim}-dimensional lattice")
            }
            Self::UnknownAxisName { name } => write!(f, "unknown axis name '{name}'"),
        }
    }
}

impl Error for MoveError {}
