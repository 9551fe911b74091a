//! Benchmark profiles and utilities for the hypermaze workspace.
//!
//! Provides pre-built [`WorldConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 4-D, extent 11 (14,641 cells), the default game
//! - [`profile_3d`]: 3-D, extent 11 (1,331 cells)
//! - [`stress_profile`]: 4-D, extent 21 (~194K cells)
//! - [`move_script`]: deterministic key-press sequence for world benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hypermaze_core::{Axis, MoveRequest, Step};
use hypermaze_engine::WorldConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build the reference benchmark profile: 4-D, extent 11, default walls.
pub fn reference_profile(seed: u64) -> WorldConfig {
    WorldConfig {
        seed,
        ..WorldConfig::default()
    }
}

/// Build a 3-D profile at extent 11.
pub fn profile_3d(seed: u64) -> WorldConfig {
    WorldConfig {
        ndim: 3,
        seed,
        ..WorldConfig::default()
    }
}

/// Build a stress profile: 4-D, extent 21.
///
/// Same wall probability as [`reference_profile`] at ~13x the cells.
pub fn stress_profile(seed: u64) -> WorldConfig {
    WorldConfig {
        extent: 21,
        seed,
        ..WorldConfig::default()
    }
}

/// Generate `n` uniformly random unit moves over `ndim` axes.
pub fn move_script(n: usize, ndim: usize, seed: u64) -> Vec<MoveRequest> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let axis = Axis(rng.random_range(0..ndim) as u8);
            let step = if rng.random_bool(0.5) {
                Step::Forward
            } else {
                Step::Backward
            };
            MoveRequest::new(axis, step)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        reference_profile(42).validate().unwrap();
        profile_3d(42).validate().unwrap();
        stress_profile(42).validate().unwrap();
    }

    #[test]
    fn move_script_deterministic_and_in_range() {
        let a = move_script(500, 3, 7);
        let b = move_script(500, 3, 7);
        assert_eq!(a, b);
        assert!(a.iter().all(|m| m.axis.is_within(3)));
        assert!(a.iter().any(|m| m.step == Step::Forward));
        assert!(a.iter().any(|m| m.step == Step::Backward));
    }
}
