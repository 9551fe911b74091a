//! Named lattice axes and unit steps along them.

use std::fmt;

/// Single-letter names for the first eight axes, in axis order.
const AXIS_LETTERS: [char; 8] = ['x', 'y', 'z', 'w', 'v', 'u', 't', 's'];

/// One named dimension of the lattice.
///
/// `Axis(n)` is the n-th axis of a lattice; the first four are named
/// `x`, `y`, `z` and `w`. Axes past the eighth are named `a8`, `a9`, …
/// so any dimensionality has a stable, printable name.
///
/// # Examples
///
/// ```
/// use hypermaze_core::Axis;
///
/// assert_eq!(Axis(3).to_string(), "w");
/// assert_eq!(Axis::from_name("z"), Some(Axis(2)));
/// assert_eq!(Axis::from_name("a9"), Some(Axis(9)));
/// assert_eq!(Axis::all(3).count(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Axis(pub u8);

impl Axis {
    /// Axis `x`.
    pub const X: Axis = Axis(0);
    /// Axis `y`.
    pub const Y: Axis = Axis(1);
    /// Axis `z`.
    pub const Z: Axis = Axis(2);
    /// Axis `w`.
    pub const W: Axis = Axis(3);

    /// Position of this axis in the lattice's axis ordering.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this axis exists in a lattice with `ndim` dimensions.
    pub fn is_within(self, ndim: usize) -> bool {
        self.index() < ndim
    }

    /// All axes of an `ndim`-dimensional lattice, in order.
    pub fn all(ndim: usize) -> impl Iterator<Item = Axis> {
        (0..ndim.min(u8::MAX as usize + 1)).map(|i| Axis(i as u8))
    }

    /// Parse an axis name produced by [`Display`](fmt::Display).
    ///
    /// Returns `None` for unrecognised names. Whether the axis exists in
    /// a particular lattice is a separate question; see [`is_within`](Self::is_within).
    pub fn from_name(name: &str) -> Option<Axis> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => AXIS_LETTERS
                .iter()
                .position(|&l| l == c)
                .map(|i| Axis(i as u8)),
            (Some('a'), Some(_)) => {
                let n: u8 = name[1..].parse().ok()?;
                (n as usize >= AXIS_LETTERS.len()).then_some(Axis(n))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match AXIS_LETTERS.get(self.index()) {
            Some(c) => write!(f, "{c}"),
            None => write!(f, "a{}", self.0),
        }
    }
}

/// A unit move along one axis.
///
/// Moves are always a single cell; making the delta an enum keeps
/// anything other than ±1 unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Decrease the coordinate by one.
    Backward,
    /// Increase the coordinate by one.
    Forward,
}

impl Step {
    /// Signed coordinate delta: `-1` or `+1`.
    pub fn delta(self) -> i32 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }

    /// Convert a signed delta back into a step. Only `-1` and `1` map.
    pub fn from_delta(delta: i32) -> Option<Step> {
        match delta {
            -1 => Some(Self::Backward),
            1 => Some(Self::Forward),
            _ => None,
        }
    }

    /// The step in the opposite direction.
    pub fn reversed(self) -> Step {
        match self {
            Self::Backward => Self::Forward,
            Self::Forward => Self::Backward,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backward => write!(f, "-1"),
            Self::Forward => write!(f, "+1"),
        }
    }
}
