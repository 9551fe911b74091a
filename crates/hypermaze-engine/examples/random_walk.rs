//! Headless random walker.
//!
//! Drives a 4-D world with uniformly random key presses until the goal
//! has been reached a given number of times, printing the xy cross
//! section after every reset.
//!
//! Run with:
//!   RUST_LOG=hypermaze_engine=info cargo run --example random_walk -- 3

use hypermaze_core::Axis;
use hypermaze_engine::{KeyBindings, MazeWorld, MoveOutcome, WorldConfig, WorldEvent};
use hypermaze_view::PlaneId;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ─── Parameters ─────────────────────────────────────────────────

const DEFAULT_RESETS: u32 = 2;
const MAX_PRESSES: u64 = 5_000_000;
// Sparse walls so the walker has room to wander.
const WALL_PROBABILITY: f64 = 0.3;
const EXTENT: u32 = 7;
const FRAME_MS: f64 = 16.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let resets: u32 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_RESETS,
    };

    let config = WorldConfig {
        extent: EXTENT,
        wall_probability: WALL_PROBABILITY,
        seed: 7,
        ..WorldConfig::default()
    };
    let mut world = MazeWorld::new(config)?;
    let (_, events) = world.subscribe();

    let keys = KeyBindings::default();
    let active: Vec<char> = keys.active(world.ndim()).map(|(k, _)| k).collect();
    let mut walker = ChaCha8Rng::seed_from_u64(99);
    let xy = PlaneId::new(Axis::X, Axis::Y).ok_or("xy plane")?;

    println!(
        "{}D world, extent {}, goal {:?} ({} cells reachable)",
        world.ndim(),
        EXTENT,
        world.goal().as_slice(),
        world.reachable_count()
    );

    let (mut reached, mut moved, mut blocked) = (0u32, 0u64, 0u64);
    for _ in 0..MAX_PRESSES {
        if reached == resets {
            break;
        }
        let key = active[walker.random_range(0..active.len())];
        let Some(request) = keys.resolve(key, world.ndim()) else {
            continue;
        };
        match world.handle_move_request(request)? {
            MoveOutcome::Blocked => blocked += 1,
            MoveOutcome::Moved => moved += 1,
            MoveOutcome::GoalReached => {
                moved += 1;
                reached += 1;
            }
        }
        world.update(FRAME_MS);
        world.render_dirty();

        for event in events.try_iter() {
            if let WorldEvent::Reset { generation, goal } = event {
                println!("\ngeneration {generation}: new goal {:?}", goal.as_slice());
                if let Some(section) = world.cross_section(xy) {
                    print!("{section}");
                }
            }
        }
    }

    println!(
        "\n{reached} goals reached: {moved} moves, {blocked} blocked, {} fps simulated",
        world.metrics().fps
    );
    Ok(())
}
