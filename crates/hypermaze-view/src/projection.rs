//! The plane table and the slicing rules shared by every plane.

use crate::plane::{planes_for, LayoutRect, Plane, PlaneId};
use hypermaze_core::Coord;
use indexmap::IndexMap;

/// All planes of a lattice, with their repaint flags.
///
/// Planes are kept in [`planes_for`] order. Any change to the player or
/// the lattice invalidates the whole set through
/// [`mark_all_dirty`](Self::mark_all_dirty); the renderer clears flags
/// one plane at a time with [`mark_rendered`](Self::mark_rendered).
///
/// # Examples
///
/// ```
/// use hypermaze_view::ProjectionSet;
///
/// let mut set = ProjectionSet::new(4);
/// assert_eq!(set.len(), 6);
/// assert_eq!(set.dirty_planes().len(), 6);
///
/// for id in set.dirty_planes() {
///     set.mark_rendered(id);
/// }
/// assert!(!set.any_dirty());
///
/// set.mark_all_dirty();
/// assert_eq!(set.dirty_planes().len(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct ProjectionSet {
    ndim: usize,
    planes: IndexMap<PlaneId, Plane>,
}

impl ProjectionSet {
    /// Build the plane table for an `ndim`-dimensional lattice.
    pub fn new(ndim: usize) -> Self {
        let planes = planes_for(ndim).into_iter().map(|p| (p.id(), p)).collect();
        Self { ndim, planes }
    }

    /// Dimensionality the planes were built for.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Number of planes.
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Whether there are no planes (only for `ndim < 2`).
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Look up a plane.
    pub fn get(&self, id: PlaneId) -> Option<&Plane> {
        self.planes.get(&id)
    }

    /// Planes in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Plane> {
        self.planes.values()
    }

    /// Flag every plane for repaint.
    pub fn mark_all_dirty(&mut self) {
        for plane in self.planes.values_mut() {
            plane.dirty = true;
        }
        tracing::debug!(planes = self.planes.len(), "invalidated all planes");
    }

    /// Clear one plane's repaint flag. Returns `false` for an unknown id.
    pub fn mark_rendered(&mut self, id: PlaneId) -> bool {
        match self.planes.get_mut(&id) {
            Some(plane) => {
                plane.dirty = false;
                true
            }
            None => false,
        }
    }

    /// Ids of the planes awaiting repaint, in table order.
    pub fn dirty_planes(&self) -> Vec<PlaneId> {
        self.planes
            .values()
            .filter(|p| p.dirty)
            .map(Plane::id)
            .collect()
    }

    /// Whether any plane awaits repaint.
    pub fn any_dirty(&self) -> bool {
        self.planes.values().any(|p| p.dirty)
    }

    /// Store a new layout rectangle for a plane and flag it for repaint.
    ///
    /// Returns `false` for an unknown id.
    pub fn set_layout(&mut self, id: PlaneId, rect: LayoutRect) -> bool {
        match self.planes.get_mut(&id) {
            Some(plane) => {
                plane.layout = Some(rect);
                plane.dirty = true;
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a ProjectionSet {
    type Item = &'a Plane;
    type IntoIter = indexmap::map::Values<'a, PlaneId, Plane>;

    fn into_iter(self) -> Self::IntoIter {
        self.planes.values()
    }
}

/// The lattice coordinate shown at `(horz, vert)` on `plane`.
///
/// Axes off the plane keep the player's values; the two plane axes are
/// replaced by `horz` and `vert`.
pub fn slice(plane: &Plane, player: &[i32], vert: i32, horz: i32) -> Coord {
    let mut coord = Coord::from_slice(player);
    coord[plane.horz().index()] = horz;
    coord[plane.vert().index()] = vert;
    coord
}

/// Whether the goal lies in the slice `plane` shows around `player`.
///
/// True only when the two agree on every axis the plane holds fixed.
/// The plane axes themselves are not compared.
pub fn goal_visible(plane: &Plane, player: &[i32], goal: &[i32]) -> bool {
    plane
        .other_axes()
        .iter()
        .all(|a| player[a.index()] == goal[a.index()])
}
