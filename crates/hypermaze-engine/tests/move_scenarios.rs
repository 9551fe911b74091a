//! Move validation and commit behaviour on hand-built lattices.

use hypermaze_core::{Axis, Coord, MoveRequest, Step};
use hypermaze_engine::{MazeWorld, MoveOutcome, WorldConfig, WorldEvent};
use hypermaze_test_utils::{fixtures, seeded_rng};
use smallvec::smallvec;

fn world_on(lattice: hypermaze_lattice::Lattice, goal: Coord) -> MazeWorld {
    MazeWorld::from_parts(&WorldConfig::default(), lattice, goal, seeded_rng(9)).unwrap()
}

fn left() -> MoveRequest {
    MoveRequest::new(Axis::X, Step::Backward)
}

// ── Scenario: 11^3 lattice, player at the center ───────────────

#[test]
fn open_neighbour_is_moved_into_with_one_event() {
    let mut world = world_on(fixtures::open_lattice(3, 11), smallvec![0, 0, 0]);
    let (_, events) = world.subscribe();
    assert_eq!(world.player().as_slice(), &[5, 5, 5]);

    assert_eq!(world.validate_move(left()), Ok(true));
    assert_eq!(world.handle_move_request(left()), Ok(MoveOutcome::Moved));
    assert_eq!(world.player().as_slice(), &[4, 5, 5]);

    let got: Vec<WorldEvent> = events.try_iter().collect();
    assert_eq!(
        got,
        vec![WorldEvent::MoveCommitted {
            from: smallvec![5, 5, 5],
            to: smallvec![4, 5, 5],
            axis: Axis::X,
            step: Step::Backward,
        }]
    );
}

#[test]
fn walled_neighbour_blocks_silently() {
    let lattice = fixtures::lattice_with_walls(3, 11, &[smallvec![4, 5, 5]]);
    let mut world = world_on(lattice, smallvec![0, 0, 0]);
    let (_, events) = world.subscribe();
    world.render_dirty();

    assert_eq!(world.validate_move(left()), Ok(false));
    assert_eq!(world.handle_move_request(left()), Ok(MoveOutcome::Blocked));
    assert_eq!(world.player().as_slice(), &[5, 5, 5]);
    assert!(events.is_empty());
    assert!(!world.projections().any_dirty());
}

// ── Boundaries ─────────────────────────────────────────────────

#[test]
fn validate_move_at_both_edges_of_every_axis() {
    for ndim in [3usize, 4] {
        let extent = 5u32;
        let lattice = fixtures::open_lattice(ndim, extent);
        for axis in Axis::all(ndim) {
            for (edge, outward, inward) in [
                (0, Step::Backward, Step::Forward),
                (extent as i32 - 1, Step::Forward, Step::Backward),
            ] {
                // Walk from the center to the edge along `axis`.
                let mut world = world_on(lattice.clone(), smallvec![0; ndim]);
                while world.player()[axis.index()] != edge {
                    let outcome = world.handle_move_request(MoveRequest::new(axis, outward));
                    assert_eq!(outcome, Ok(MoveOutcome::Moved));
                }
                assert_eq!(
                    world.validate_move(MoveRequest::new(axis, outward)),
                    Ok(false),
                    "{ndim}D axis {axis} edge {edge}"
                );
                assert_eq!(
                    world.validate_move(MoveRequest::new(axis, inward)),
                    Ok(true)
                );
                let before = world.player().clone();
                assert_eq!(
                    world.handle_move_request(MoveRequest::new(axis, outward)),
                    Ok(MoveOutcome::Blocked)
                );
                assert_eq!(world.player(), &before);
            }
        }
    }
}

#[test]
fn validate_move_matches_lattice_on_a_corridor() {
    // Only the x axis through the center is open.
    let openings: Vec<Coord> = (0..7).map(|x| smallvec![x, 3, 3]).collect();
    let lattice = fixtures::lattice_with_openings(3, 7, &openings);
    let mut world = world_on(lattice, smallvec![0, 3, 3]);

    for axis in [Axis::Y, Axis::Z] {
        for step in [Step::Backward, Step::Forward] {
            assert_eq!(world.validate_move(MoveRequest::new(axis, step)), Ok(false));
        }
    }
    assert_eq!(world.handle_move_request(left()), Ok(MoveOutcome::Moved));
    assert_eq!(world.handle_move_request(left()), Ok(MoveOutcome::Moved));
    // Third step lands on the goal at x = 0.
    assert_eq!(world.handle_move_request(left()), Ok(MoveOutcome::GoalReached));
}

// ── Event ordering ─────────────────────────────────────────────

#[test]
fn each_accepted_move_changes_one_axis_by_one() {
    let mut world = world_on(fixtures::open_lattice(4, 7), smallvec![0, 0, 0, 0]);
    let (_, events) = world.subscribe();
    let script = [
        (Axis::W, Step::Forward),
        (Axis::Y, Step::Backward),
        (Axis::Z, Step::Forward),
        (Axis::X, Step::Forward),
    ];
    for (axis, step) in script {
        let before = world.player().clone();
        assert_eq!(
            world.handle_move_request(MoveRequest::new(axis, step)),
            Ok(MoveOutcome::Moved)
        );
        let after = world.player();
        for a in Axis::all(4) {
            let d = after[a.index()] - before[a.index()];
            if a == axis {
                assert_eq!(d, step.delta());
            } else {
                assert_eq!(d, 0);
            }
        }
    }
    assert_eq!(events.len(), script.len());
}

#[test]
fn late_subscribers_miss_earlier_events() {
    let mut world = world_on(fixtures::open_lattice(3, 5), smallvec![0, 0, 0]);
    world.handle_move_request(left()).unwrap();
    let (id, events) = world.subscribe();
    world.handle_move_request(left()).unwrap();
    assert_eq!(events.len(), 1);

    assert!(world.unsubscribe(id));
    world
        .handle_move_request(MoveRequest::new(Axis::Y, Step::Forward))
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(world.subscriber_count(), 0);
}
