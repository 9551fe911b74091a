//! Hypermaze: navigate procedurally generated 3-D and 4-D mazes through
//! 2-D cross sections.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all hypermaze sub-crates. For most users, adding `hypermaze` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hypermaze::prelude::*;
//!
//! let config = WorldConfig {
//!     ndim: 3,
//!     seed: 42,
//!     ..WorldConfig::default()
//! };
//! let mut world = MazeWorld::new(config).unwrap();
//! let (_, events) = world.subscribe();
//!
//! let keys = KeyBindings::default();
//! for key in ['a', 'q', 'w', 'e'] {
//!     if let Some(request) = keys.resolve(key, world.ndim()) {
//!         world.handle_move_request(request).unwrap();
//!     }
//! }
//!
//! // One cross section per dirty plane: xy, xz, yz.
//! let sections = world.render_dirty();
//! assert_eq!(sections.len(), 3);
//! assert!(world.lattice().is_open(world.player()));
//! let _ = events.try_iter().count();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hypermaze-core` | Axes, steps, coordinates, commands, error types |
//! | [`lattice`] | `hypermaze-lattice` | Lattice storage, generation, reachability |
//! | [`view`] | `hypermaze-view` | Projection planes and cross sections |
//! | [`engine`] | `hypermaze-engine` | The maze world, events, config, key bindings |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`hypermaze-core`).
///
/// Contains [`types::Axis`], [`types::Step`], [`types::Coord`], the
/// player commands, and [`types::LatticeError`] / [`types::MoveError`].
pub use hypermaze_core as types;

/// Lattice storage, generation and reachability (`hypermaze-lattice`).
///
/// [`lattice::MazeGenerator`] fills lattices; [`lattice::reachable_set`]
/// and [`lattice::generate_with_goal`] guarantee a reachable goal.
pub use hypermaze_lattice as lattice;

/// Projection planes and cross sections (`hypermaze-view`).
pub use hypermaze_view as view;

/// The maze world and its helpers (`hypermaze-engine`).
///
/// [`engine::MazeWorld`] owns all game state and publishes
/// [`engine::WorldEvent`]s.
pub use hypermaze_engine as engine;

/// Common imports for typical hypermaze usage.
///
/// ```rust
/// use hypermaze::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use hypermaze_core::{Axis, Coord, GenerationId, InspectPoint, MoveRequest, Step};

    // Errors
    pub use hypermaze_core::{LatticeError, MoveError};

    // Lattice
    pub use hypermaze_lattice::{Cell, Lattice, MazeGenerator, Shape};

    // View
    pub use hypermaze_view::{CrossSection, LayoutRect, PlaneId, ProjectionSet, Tile};

    // Engine
    pub use hypermaze_engine::{
        ConfigError, FrameMetrics, KeyBindings, MazeWorld, MoveOutcome, WorldConfig, WorldEvent,
    };
}
