//! Axis-pair planes and their generation.

use hypermaze_core::Axis;
use smallvec::SmallVec;
use std::fmt;

/// Identifies a plane by the axes it displays.
///
/// `horz` is always the lower axis and `vert` the higher one, so each
/// unordered axis pair has exactly one id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaneId {
    /// Axis drawn left to right.
    pub horz: Axis,
    /// Axis drawn bottom to top.
    pub vert: Axis,
}

impl PlaneId {
    /// Id for the plane spanned by `a` and `b`, in either order.
    ///
    /// Returns `None` if `a == b`.
    pub fn new(a: Axis, b: Axis) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { horz: a, vert: b }),
            std::cmp::Ordering::Greater => Some(Self { horz: b, vert: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Whether `axis` is one of the two displayed axes.
    pub fn contains(&self, axis: Axis) -> bool {
        self.horz == axis || self.vert == axis
    }
}

impl fmt::Display for PlaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.horz, self.vert)
    }
}

/// Screen rectangle a plane is drawn into.
///
/// Supplied by the layout collaborator; this crate only stores it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// One 2-D view through the lattice.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    id: PlaneId,
    other_axes: SmallVec<[Axis; 4]>,
    pub(crate) dirty: bool,
    pub(crate) layout: Option<LayoutRect>,
}

impl Plane {
    fn new(id: PlaneId, ndim: usize) -> Self {
        Self {
            id,
            other_axes: Axis::all(ndim).filter(|a| !id.contains(*a)).collect(),
            dirty: true,
            layout: None,
        }
    }

    /// The plane's axis pair.
    pub fn id(&self) -> PlaneId {
        self.id
    }

    /// Horizontal axis.
    pub fn horz(&self) -> Axis {
        self.id.horz
    }

    /// Vertical axis.
    pub fn vert(&self) -> Axis {
        self.id.vert
    }

    /// The `D - 2` axes held fixed at the player's position, ascending.
    pub fn other_axes(&self) -> &[Axis] {
        &self.other_axes
    }

    /// Whether the plane must be repainted.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Last layout rectangle assigned to this plane, if any.
    pub fn layout(&self) -> Option<LayoutRect> {
        self.layout
    }
}

/// Every plane of a `ndim`-dimensional lattice, all initially dirty.
///
/// Ordered by the higher axis, then the lower one: for `ndim = 4` this
/// is `xy, xz, yz, xw, yw, zw`. Always yields `ndim * (ndim - 1) / 2`
/// planes.
///
/// # Examples
///
/// ```
/// use hypermaze_view::planes_for;
///
/// let names: Vec<String> = planes_for(3).iter().map(|p| p.id().to_string()).collect();
/// assert_eq!(names, ["xy", "xz", "yz"]);
/// ```
pub fn planes_for(ndim: usize) -> Vec<Plane> {
    let mut planes = Vec::with_capacity(ndim * ndim.saturating_sub(1) / 2);
    for vert in Axis::all(ndim) {
        for horz in Axis::all(vert.index()) {
            planes.push(Plane::new(PlaneId { horz, vert }, ndim));
        }
    }
    planes
}
