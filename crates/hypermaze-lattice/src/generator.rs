//! Stochastic maze generation.
//!
//! Every cell is an independent Bernoulli trial: wall with probability
//! `wall_probability`, open otherwise. There is no connectivity bias,
//! so the component around the center can be arbitrarily small. The
//! center itself is always forced open.
//!
//! The random source is always passed in by the caller. Seeding a
//! `ChaCha8Rng` reproduces the same lattice bit for bit.

use crate::lattice::{Cell, Lattice};
use crate::shape::Shape;
use hypermaze_core::LatticeError;
use rand::Rng;

/// Wall probability used when none is configured.
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.6;

/// Generates lattices of a fixed shape and wall density.
///
/// # Examples
///
/// ```
/// use hypermaze_lattice::MazeGenerator;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let generator = MazeGenerator::new(4, 11, 0.6).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let lattice = generator.generate(&mut rng);
/// assert_eq!(lattice.cell_count(), 14641);
/// assert!(lattice.is_open(&lattice.center()));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MazeGenerator {
    shape: Shape,
    wall_probability: f64,
}

impl MazeGenerator {
    /// Create a generator for `ndim`-dimensional lattices with `extent`
    /// cells per axis.
    ///
    /// # Errors
    ///
    /// Returns any [`Shape::new`] error, or
    /// [`LatticeError::InvalidWallProbability`] if `wall_probability` is
    /// not a finite value in `[0, 1]`.
    pub fn new(ndim: usize, extent: u32, wall_probability: f64) -> Result<Self, LatticeError> {
        Self::with_shape(Shape::new(ndim, extent)?, wall_probability)
    }

    /// Create a generator for an existing shape.
    pub fn with_shape(shape: Shape, wall_probability: f64) -> Result<Self, LatticeError> {
        if !wall_probability.is_finite() || !(0.0..=1.0).contains(&wall_probability) {
            return Err(LatticeError::InvalidWallProbability {
                value: wall_probability,
            });
        }
        Ok(Self {
            shape,
            wall_probability,
        })
    }

    /// Shape of every generated lattice.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Probability that any given cell is a wall.
    pub fn wall_probability(&self) -> f64 {
        self.wall_probability
    }

    /// Fill a fresh lattice.
    ///
    /// Draws exactly one sample per cell in flat-index order, including
    /// the center, whose sample is then discarded.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Lattice {
        let cells = (0..self.shape.cell_count())
            .map(|_| {
                if rng.random_bool(self.wall_probability) {
                    Cell::Wall
                } else {
                    Cell::Open
                }
            })
            .collect();
        let lattice = Lattice::with_open_center(self.shape.clone(), cells);
        tracing::debug!(
            ndim = lattice.ndim(),
            extent = lattice.extent(),
            open = lattice.open_count(),
            "generated lattice"
        );
        lattice
    }
}
