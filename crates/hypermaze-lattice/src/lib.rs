//! Lattice storage, maze generation and reachability for hypermaze.
//!
//! This crate defines the dimension-generic [`Shape`] (coordinate
//! arithmetic), the [`Lattice`] of open and wall cells built on it, the
//! [`MazeGenerator`] that fills lattices from an injected random source,
//! and the breadth-first [`reachability`] solver that guarantees every
//! goal can actually be reached.
//!
//! # Indexing
//!
//! Coordinates map to flat storage offsets by a mixed-radix sum with
//! axis 0 as the fastest-varying digit. [`Shape::index`] and
//! [`Shape::position`] are exact inverses over `[0, extent^ndim)`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod generator;
pub mod lattice;
pub mod reachability;
pub mod shape;

#[cfg(test)]
pub(crate) mod compliance;

pub use generator::{MazeGenerator, DEFAULT_WALL_PROBABILITY};
pub use lattice::{Cell, Lattice};
pub use reachability::{generate_with_goal, reachable_set, select_goal, GeneratedMaze, ReachableSet};
pub use shape::Shape;
