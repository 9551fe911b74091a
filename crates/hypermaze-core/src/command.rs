//! Player commands delivered by the input collaborator.

use crate::axis::{Axis, Step};

/// Request to move the player one cell along a single axis.
///
/// Produced once per discrete key press. Whether the move is allowed
/// is decided by the world; a blocked request is silently dropped.
///
/// # Examples
///
/// ```
/// use hypermaze_core::{Axis, MoveRequest, Step};
///
/// let req = MoveRequest::new(Axis::X, Step::Backward);
/// assert_eq!(req.axis, Axis::X);
/// assert_eq!(req.step.delta(), -1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    /// The axis to move along.
    pub axis: Axis,
    /// Direction of the move.
    pub step: Step,
}

impl MoveRequest {
    /// Build a move request.
    pub fn new(axis: Axis, step: Step) -> Self {
        Self { axis, step }
    }
}

/// Raw pointer coordinates, passed through unvalidated for display.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InspectPoint {
    /// Horizontal pointer position.
    pub x: f64,
    /// Vertical pointer position.
    pub y: f64,
}
