#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic wave and difficulty formulas.
//!
//! The wave index is a pure function of elapsed round time and feeds the
//! spawn cadence, population cap, and descent speed. Waves increase without
//! bound; there is no terminal wave.

use std::time::Duration;

/// Real-time length of one difficulty wave.
pub const WAVE_DURATION: Duration = Duration::from_secs(30);

/// Spawn interval applied during wave 1.
pub const BASE_SPAWN_INTERVAL: Duration = Duration::from_millis(3000);

/// Amount the spawn interval shrinks per wave past the first.
pub const SPAWN_INTERVAL_STEP: Duration = Duration::from_millis(200);

/// Floor below which the spawn interval never drops.
pub const MIN_SPAWN_INTERVAL: Duration = Duration::from_millis(500);

/// Descent speed applied during wave 1, in field units per second.
pub const BASE_DESCENT_SPEED: f32 = 28.0;

/// Amount the descent speed grows per wave past the first.
pub const DESCENT_SPEED_STEP: f32 = 7.0;

/// Largest number of zombies permitted on screen regardless of wave.
pub const MAX_POPULATION: usize = 8;

/// Computes the wave index active after the provided elapsed round time.
///
/// Waves start at 1 and advance every [`WAVE_DURATION`]; the result is
/// monotonically non-decreasing in `elapsed`.
#[must_use]
pub fn wave_for_elapsed(elapsed: Duration) -> u32 {
    let index = elapsed.as_millis() / WAVE_DURATION.as_millis();
    u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1)
}

/// Minimum real time between successive spawns during the provided wave.
#[must_use]
pub fn spawn_interval(wave: u32) -> Duration {
    let reduction = SPAWN_INTERVAL_STEP.saturating_mul(wave.saturating_sub(1));
    BASE_SPAWN_INTERVAL
        .saturating_sub(reduction)
        .max(MIN_SPAWN_INTERVAL)
}

/// Largest number of zombies allowed on screen during the provided wave.
#[must_use]
pub fn population_cap(wave: u32) -> usize {
    let cap = 2_usize.saturating_add(wave as usize);
    cap.min(MAX_POPULATION)
}

/// Descent speed assigned to zombies spawned during the provided wave.
#[must_use]
pub fn descent_speed(wave: u32) -> f32 {
    BASE_DESCENT_SPEED + wave.saturating_sub(1) as f32 * DESCENT_SPEED_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_matches_elapsed_formula() {
        assert_eq!(wave_for_elapsed(Duration::ZERO), 1);
        assert_eq!(wave_for_elapsed(Duration::from_millis(29_999)), 1);
        assert_eq!(wave_for_elapsed(Duration::from_millis(30_000)), 2);
        assert_eq!(wave_for_elapsed(Duration::from_secs(95)), 4);
    }

    #[test]
    fn wave_is_non_decreasing() {
        let mut previous = 0;
        for seconds in 0..300 {
            let wave = wave_for_elapsed(Duration::from_secs(seconds));
            assert!(wave >= previous);
            previous = wave;
        }
    }

    #[test]
    fn spawn_interval_shrinks_to_floor() {
        assert_eq!(spawn_interval(1), Duration::from_millis(3000));
        assert_eq!(spawn_interval(2), Duration::from_millis(2800));
        assert_eq!(spawn_interval(13), Duration::from_millis(600));
        assert_eq!(spawn_interval(14), Duration::from_millis(500));
        assert_eq!(spawn_interval(200), Duration::from_millis(500));
    }

    #[test]
    fn population_cap_saturates_at_eight() {
        assert_eq!(population_cap(1), 3);
        assert_eq!(population_cap(5), 7);
        assert_eq!(population_cap(6), 8);
        assert_eq!(population_cap(60), 8);
    }

    #[test]
    fn descent_speed_scales_linearly() {
        assert_eq!(descent_speed(1), 28.0);
        assert_eq!(descent_speed(2), 35.0);
        assert_eq!(descent_speed(4), 49.0);
    }
}
