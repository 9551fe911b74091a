//! Keyboard bindings for move requests.

use hypermaze_core::{Axis, MoveRequest, Step};
use indexmap::IndexMap;

/// Maps key characters to move requests.
///
/// The default layout pairs a backward and a forward key per axis:
///
/// | Axis | Backward | Forward |
/// |------|----------|---------|
/// | x    | `a`      | `q`     |
/// | y    | `s`      | `w`     |
/// | z    | `d`      | `e`     |
/// | w    | `f`, `z` | `r`, `c`|
///
/// # Examples
///
/// ```
/// use hypermaze_core::{Axis, MoveRequest, Step};
/// use hypermaze_engine::KeyBindings;
///
/// let keys = KeyBindings::default();
/// assert_eq!(keys.resolve('q', 3), Some(MoveRequest::new(Axis::X, Step::Forward)));
/// // No w axis in a 3-D world.
/// assert_eq!(keys.resolve('r', 3), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBindings {
    keys: IndexMap<char, MoveRequest>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self::empty();
        for (key, axis, step) in [
            ('a', Axis::X, Step::Backward),
            ('q', Axis::X, Step::Forward),
            ('s', Axis::Y, Step::Backward),
            ('w', Axis::Y, Step::Forward),
            ('d', Axis::Z, Step::Backward),
            ('e', Axis::Z, Step::Forward),
            ('f', Axis::W, Step::Backward),
            ('z', Axis::W, Step::Backward),
            ('r', Axis::W, Step::Forward),
            ('c', Axis::W, Step::Forward),
        ] {
            keys.bind(key, MoveRequest::new(axis, step));
        }
        keys
    }
}

impl KeyBindings {
    /// A layout with no bindings.
    pub fn empty() -> Self {
        Self {
            keys: IndexMap::new(),
        }
    }

    /// Bind `key`, returning the request it was previously bound to.
    pub fn bind(&mut self, key: char, request: MoveRequest) -> Option<MoveRequest> {
        self.keys.insert(key, request)
    }

    /// Remove the binding for `key`.
    pub fn unbind(&mut self, key: char) -> Option<MoveRequest> {
        self.keys.shift_remove(&key)
    }

    /// The request bound to `key`, if its axis exists in an
    /// `ndim`-dimensional world.
    pub fn resolve(&self, key: char, ndim: usize) -> Option<MoveRequest> {
        self.keys
            .get(&key)
            .copied()
            .filter(|req| req.axis.is_within(ndim))
    }

    /// All bindings usable in an `ndim`-dimensional world, in binding order.
    pub fn active(&self, ndim: usize) -> impl Iterator<Item = (char, MoveRequest)> + '_ {
        self.keys
            .iter()
            .filter(move |(_, req)| req.axis.is_within(ndim))
            .map(|(&k, &req)| (k, req))
    }
}
