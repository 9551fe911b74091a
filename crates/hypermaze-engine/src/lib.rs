//! World orchestration for the hypermaze lattice explorer.
//!
//! Provides [`MazeWorld`], the owner of the lattice, player, goal and
//! projection flags, which applies move requests, resets on reaching
//! the goal, and publishes [`WorldEvent`]s over crossbeam channels.
//! Also supplies the small helpers a front end needs around it:
//! [`WorldConfig`], [`KeyBindings`] and [`FrameMetrics`].
//!
//! The engine never installs a `tracing` subscriber; that is left to
//! the binary embedding it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod event;
pub mod keymap;
pub mod metrics;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use event::{EventBus, SubscriberId, WorldEvent};
pub use keymap::KeyBindings;
pub use metrics::{FrameMetrics, FPS_WINDOW_MS};
pub use world::{MazeWorld, MoveOutcome};
