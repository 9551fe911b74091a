//! Fixture lattices and reference solvers for hypermaze tests.
//!
//! [`fixtures`] builds small hand-shaped lattices and seeded random
//! sources. [`oracle`] recomputes connectivity with a union-find that
//! shares no code with the breadth-first solver it is checked against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod oracle;

pub use fixtures::seeded_rng;
pub use oracle::connected_component;
