//! Generation identifiers and the [`Coord`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Identifies one generated lattice/goal pair.
///
/// Starts at zero for the lattice built at construction and is
/// incremented on every reset, so view collaborators can tell that any
/// lattice or goal they cached is stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenerationId(pub u64);

impl GenerationId {
    /// The identifier that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GenerationId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A coordinate in the lattice, one value per axis.
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for lattices up
/// to 4 dimensions, which covers the 3-D and 4-D mazes. Higher
/// dimensional lattices spill to the heap transparently.
pub type Coord = SmallVec<[i32; 4]>;
