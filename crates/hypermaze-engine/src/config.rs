//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the input for constructing a [`MazeWorld`](crate::MazeWorld).
//! [`validate()`](WorldConfig::validate) checks every parameter up
//! front, so a world that constructs successfully never fails later
//! for configuration reasons.

use std::error::Error;
use std::fmt;

use hypermaze_core::LatticeError;
use hypermaze_lattice::{MazeGenerator, DEFAULT_WALL_PROBABILITY};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`WorldConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Lattice shape or generator parameters are invalid.
    Lattice(LatticeError),
    /// `extent ^ ndim` exceeds the configured cell budget.
    TooManyCells {
        /// Cells the lattice would need.
        cells: usize,
        /// The configured budget.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::TooManyCells { cells, max } => {
                write!(f, "lattice needs {cells} cells, budget is {max}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LatticeError> for ConfigError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a maze world.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// Number of lattice axes. Default: 4.
    pub ndim: usize,
    /// Cells per axis. Default: 11.
    pub extent: u32,
    /// Probability that a generated cell is a wall. Default: 0.6.
    pub wall_probability: f64,
    /// Seed for the world's random source. Default: 0.
    pub seed: u64,
    /// Upper bound on `extent ^ ndim`. Default: 2^24.
    pub max_cells: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            ndim: 4,
            extent: 11,
            wall_probability: DEFAULT_WALL_PROBABILITY,
            seed: 0,
            max_cells: 1 << 24,
        }
    }
}

impl WorldConfig {
    /// Validate all parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator().map(|_| ())
    }

    /// Build the generator this configuration describes.
    pub(crate) fn generator(&self) -> Result<MazeGenerator, ConfigError> {
        let generator = MazeGenerator::new(self.ndim, self.extent, self.wall_probability)?;
        let cells = generator.shape().cell_count();
        if cells > self.max_cells {
            return Err(ConfigError::TooManyCells {
                cells,
                max: self.max_cells,
            });
        }
        Ok(generator)
    }
}
