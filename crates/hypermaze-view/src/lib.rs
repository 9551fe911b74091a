//! Projection planes and cross-section extraction for hypermaze.
//!
//! A `D`-dimensional player position is shown as a family of 2-D views,
//! one per unordered pair of axes. Each [`Plane`] fixes every axis it
//! does not display to the player's current value, and the
//! [`ProjectionSet`] tracks which planes need repainting.
//!
//! [`CrossSection`] turns one plane into the grid of [`Tile`]s a
//! renderer draws. Nothing in this crate touches a drawing surface.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod plane;
pub mod projection;
pub mod section;

pub use plane::{planes_for, LayoutRect, Plane, PlaneId};
pub use projection::{goal_visible, slice, ProjectionSet};
pub use section::{CrossSection, Tile};
