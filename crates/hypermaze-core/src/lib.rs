//! Core types for the hypermaze workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate: axes and steps, the
//! [`Coord`] alias, generation identifiers, player commands, and the
//! error types raised by lattice construction and move handling.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod command;
pub mod error;
pub mod id;

pub use axis::{Axis, Step};
pub use command::{InspectPoint, MoveRequest};
pub use error::{LatticeError, MoveError};
pub use id::{Coord, GenerationId};
