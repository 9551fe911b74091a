//! The maze world: player, goal, lattice and the move/reset cycle.
//!
//! [`MazeWorld`] is the single owner of all mutable game state. Input
//! collaborators feed it [`MoveRequest`]s and [`InspectPoint`]s; view
//! collaborators read its lattice, player, goal and projection flags,
//! and subscribe to [`WorldEvent`]s.
//!
//! # Ownership model
//!
//! `MazeWorld` is [`Send`] but every mutating method takes `&mut self`,
//! so moves, inspects, frame updates and render passes are applied
//! strictly one after another. A move that reaches the goal performs
//! the whole reset before returning; no caller can observe a world
//! whose player stands on a stale goal.

use crossbeam_channel::Receiver;
use hypermaze_core::{Axis, Coord, GenerationId, InspectPoint, MoveError, MoveRequest};
use hypermaze_lattice::{generate_with_goal, reachable_set, Lattice, MazeGenerator};
use hypermaze_view::{CrossSection, LayoutRect, PlaneId, ProjectionSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, WorldConfig};
use crate::event::{EventBus, SubscriberId, WorldEvent};
use crate::metrics::FrameMetrics;

// Compile-time assertion: the default world can move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<MazeWorld>();
    }
};

// ── MoveOutcome ─────────────────────────────────────────────────

/// What a move request did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The target was a wall or outside the lattice. Nothing changed.
    Blocked,
    /// The player moved one cell.
    Moved,
    /// The player moved onto the goal and the world was regenerated.
    GoalReached,
}

// ── MazeWorld ───────────────────────────────────────────────────

/// Single-threaded maze world.
///
/// Created from a [`WorldConfig`] via [`new()`](MazeWorld::new), which
/// seeds a `ChaCha8Rng` from [`WorldConfig::seed`]. Any other random
/// source can be injected with [`with_rng()`](MazeWorld::with_rng).
///
/// # Examples
///
/// ```
/// use hypermaze_core::{Axis, MoveRequest, Step};
/// use hypermaze_engine::{MazeWorld, MoveOutcome, WorldConfig};
///
/// let mut world = MazeWorld::new(WorldConfig { ndim: 3, ..WorldConfig::default() }).unwrap();
/// assert_eq!(world.player().as_slice(), &[5, 5, 5]);
///
/// let (_, events) = world.subscribe();
/// let outcome = world.handle_move_request(MoveRequest::new(Axis::X, Step::Forward)).unwrap();
/// match outcome {
///     MoveOutcome::Blocked => assert!(events.is_empty()),
///     _ => assert!(!events.is_empty()),
/// }
/// ```
pub struct MazeWorld<R = ChaCha8Rng> {
    generator: MazeGenerator,
    rng: R,
    lattice: Lattice,
    player: Coord,
    goal: Coord,
    reachable: usize,
    generation: GenerationId,
    projections: ProjectionSet,
    events: EventBus,
    metrics: FrameMetrics,
    last_inspect: Option<InspectPoint>,
}

impl MazeWorld<ChaCha8Rng> {
    /// Create a world from a [`WorldConfig`].
    ///
    /// Validates the configuration, generates the first lattice and
    /// goal, and places the player at the center.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> MazeWorld<R> {
    /// Create a world drawing all randomness from `rng`.
    ///
    /// [`WorldConfig::seed`] is ignored.
    pub fn with_rng(config: WorldConfig, mut rng: R) -> Result<Self, ConfigError> {
        let generator = config.generator()?;
        let maze = generate_with_goal(&generator, &mut rng);
        let projections = ProjectionSet::new(generator.shape().ndim());
        Ok(Self {
            player: maze.lattice.center(),
            lattice: maze.lattice,
            goal: maze.goal,
            reachable: maze.reachable,
            generation: GenerationId::default(),
            generator,
            rng,
            projections,
            events: EventBus::new(),
            metrics: FrameMetrics::default(),
            last_inspect: None,
        })
    }

    /// Create a world around a prepared lattice and goal.
    ///
    /// Dimensionality and extent come from `lattice`; only
    /// `wall_probability` and `max_cells` are read from `config`, for
    /// the lattices generated on later resets. The goal is not required
    /// to be reachable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Lattice`] if the wall probability is
    /// invalid or `goal` is not a coordinate of `lattice`.
    pub fn from_parts(
        config: &WorldConfig,
        lattice: Lattice,
        goal: Coord,
        rng: R,
    ) -> Result<Self, ConfigError> {
        let generator = WorldConfig {
            ndim: lattice.ndim(),
            extent: lattice.extent(),
            ..config.clone()
        }
        .generator()?;
        lattice.shape().checked_index(&goal)?;
        let player = lattice.center();
        let reachable = reachable_set(&lattice, &player)?.len();
        Ok(Self {
            projections: ProjectionSet::new(lattice.ndim()),
            player,
            lattice,
            goal,
            reachable,
            generation: GenerationId::default(),
            generator,
            rng,
            events: EventBus::new(),
            metrics: FrameMetrics::default(),
            last_inspect: None,
        })
    }

    // ── Moves ───────────────────────────────────────────────────

    /// Whether `request` would move the player into an open cell.
    ///
    /// Moving off the edge of the lattice or into a wall is `Ok(false)`.
    ///
    /// # Errors
    ///
    /// [`MoveError::UnknownAxis`] if the axis is not part of this world.
    pub fn validate_move(&self, request: MoveRequest) -> Result<bool, MoveError> {
        Ok(self.move_target(request)?.is_some())
    }

    fn move_target(&self, request: MoveRequest) -> Result<Option<Coord>, MoveError> {
        let ndim = self.lattice.ndim();
        if !request.axis.is_within(ndim) {
            return Err(MoveError::UnknownAxis {
                axis: request.axis,
                ndim,
            });
        }
        let mut target = self.player.clone();
        let i = request.axis.index();
        target[i] = target[i].saturating_add(request.step.delta());
        Ok(self.lattice.is_open(&target).then_some(target))
    }

    /// Apply a move request.
    ///
    /// A blocked move changes nothing and publishes nothing. An accepted
    /// move publishes [`WorldEvent::MoveCommitted`], moves the player
    /// and invalidates every plane. If the player lands on the goal the
    /// world is [`reset`](Self::reset) before this returns.
    ///
    /// # Errors
    ///
    /// [`MoveError::UnknownAxis`] if the axis is not part of this world.
    pub fn handle_move_request(&mut self, request: MoveRequest) -> Result<MoveOutcome, MoveError> {
        let Some(target) = self.move_target(request)? else {
            tracing::debug!(
                axis = %request.axis,
                step = %request.step,
                player = ?self.player.as_slice(),
                "move blocked"
            );
            return Ok(MoveOutcome::Blocked);
        };

        self.events.publish(&WorldEvent::MoveCommitted {
            from: self.player.clone(),
            to: target.clone(),
            axis: request.axis,
            step: request.step,
        });
        tracing::debug!(
            axis = %request.axis,
            step = %request.step,
            to = ?target.as_slice(),
            "move committed"
        );
        self.player = target;
        self.projections.mark_all_dirty();

        if self.player == self.goal {
            tracing::info!(generation = %self.generation, "goal reached");
            self.reset();
            return Ok(MoveOutcome::GoalReached);
        }
        Ok(MoveOutcome::Moved)
    }

    /// Resolve an axis name such as `"w"` against this world.
    ///
    /// # Errors
    ///
    /// [`MoveError::UnknownAxisName`] if the name is not an axis of
    /// this world.
    pub fn axis_named(&self, name: &str) -> Result<Axis, MoveError> {
        Axis::from_name(name)
            .filter(|a| a.is_within(self.lattice.ndim()))
            .ok_or_else(|| MoveError::UnknownAxisName {
                name: name.to_owned(),
            })
    }

    // ── Reset ───────────────────────────────────────────────────

    /// Regenerate the lattice and goal and return the player to the center.
    ///
    /// Uses the same dimensionality, extent and wall probability as
    /// before. Bumps the generation, invalidates every plane and
    /// publishes [`WorldEvent::Reset`].
    pub fn reset(&mut self) {
        let maze = generate_with_goal(&self.generator, &mut self.rng);
        self.player = maze.lattice.center();
        self.lattice = maze.lattice;
        self.goal = maze.goal;
        self.reachable = maze.reachable;
        self.generation = self.generation.next();
        self.projections.mark_all_dirty();

        tracing::info!(
            generation = %self.generation,
            reachable = self.reachable,
            goal = ?self.goal.as_slice(),
            "world reset"
        );
        self.events.publish(&WorldEvent::Reset {
            generation: self.generation,
            goal: self.goal.clone(),
        });
    }

    // ── Inspect, frames and rendering ───────────────────────────

    /// Record the latest pointer position. Never validated.
    pub fn handle_inspect(&mut self, point: InspectPoint) {
        self.last_inspect = Some(point);
    }

    /// Advance frame accounting by `delta_ms` milliseconds.
    ///
    /// Returns `true` if the frame rate shown to the user changed.
    pub fn update(&mut self, delta_ms: f64) -> bool {
        self.metrics.record_frame(delta_ms)
    }

    /// Extract a cross section for every dirty plane and mark each one
    /// rendered.
    pub fn render_dirty(&mut self) -> Vec<CrossSection> {
        let dirty = self.projections.dirty_planes();
        let mut sections = Vec::with_capacity(dirty.len());
        for id in dirty {
            if let Some(section) = self.cross_section(id) {
                sections.push(section);
            }
            self.projections.mark_rendered(id);
        }
        sections
    }

    /// Cross section of one plane, without touching its dirty flag.
    pub fn cross_section(&self, id: PlaneId) -> Option<CrossSection> {
        let plane = self.projections.get(id)?;
        Some(CrossSection::extract(
            &self.lattice,
            plane,
            &self.player,
            &self.goal,
        ))
    }

    /// Store a plane's layout rectangle and flag it for repaint.
    ///
    /// Returns `false` for a plane this world does not have.
    pub fn set_layout(&mut self, id: PlaneId, rect: LayoutRect) -> bool {
        self.projections.set_layout(id, rect)
    }

    // ── Subscriptions ───────────────────────────────────────────

    /// Subscribe to world events.
    pub fn subscribe(&mut self) -> (SubscriberId, Receiver<WorldEvent>) {
        self.events.subscribe()
    }

    /// Cancel a subscription. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.events.subscriber_count()
    }
}

impl<R> MazeWorld<R> {
    /// The current lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The player's position.
    pub fn player(&self) -> &Coord {
        &self.player
    }

    /// The current goal.
    pub fn goal(&self) -> &Coord {
        &self.goal
    }

    /// Size of the component around the center the goal was drawn from.
    pub fn reachable_count(&self) -> usize {
        self.reachable
    }

    /// The plane table and its dirty flags.
    pub fn projections(&self) -> &ProjectionSet {
        &self.projections
    }

    /// Generation of the current lattice; zero until the first reset.
    pub fn generation(&self) -> GenerationId {
        self.generation
    }

    /// The most recent pointer position, if any.
    pub fn last_inspect(&self) -> Option<InspectPoint> {
        self.last_inspect
    }

    /// Frame-rate counters.
    pub fn metrics(&self) -> &FrameMetrics {
        &self.metrics
    }

    /// Number of lattice axes.
    pub fn ndim(&self) -> usize {
        self.lattice.ndim()
    }

    /// Wall probability used for regeneration.
    pub fn wall_probability(&self) -> f64 {
        self.generator.wall_probability()
    }
}

impl<R> std::fmt::Debug for MazeWorld<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MazeWorld")
            .field("lattice", &self.lattice)
            .field("player", &self.player.as_slice())
            .field("goal", &self.goal.as_slice())
            .field("generation", &self.generation)
            .field("subscribers", &self.events.subscriber_count())
            .finish()
    }
}
