#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic spawn controller that emits zombie spawn commands.
//!
//! The system accumulates simulated time from [`Event::TimeAdvanced`] and
//! fires at most one spawn per invocation once the wave's interval has
//! elapsed and the population cap leaves room. Horizontal placement comes
//! from an internal linear congruential generator; words come from the
//! provided [`WordSource`], re-drawn a bounded number of times to avoid
//! duplicating a word already on screen.

use std::time::Duration;

use word_horde_core::{Command, Event, FieldBounds, ZombieView};
use word_horde_system_difficulty as difficulty;
use word_horde_words::WordSource;

const RNG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const RNG_INCREMENT: u64 = 1;

/// Number of redraws attempted before accepting a duplicate word.
///
/// Accepting the duplicate rather than blocking the spawn is deliberate:
/// two identical words on screen degrade the experience slightly but never
/// correctness.
pub const UNIQUENESS_RETRIES: u32 = 10;

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided placement seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

/// Pure system that deterministically emits spawn commands while a round is
/// live.
#[derive(Debug)]
pub struct Spawning {
    accumulator: Duration,
    rng_state: u64,
}

impl Spawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            accumulator: Duration::ZERO,
            rng_state: config.rng_seed,
        }
    }

    /// Consumes events and immutable views to emit at most one spawn
    /// command.
    ///
    /// The accumulator only resets when a spawn actually fires, so time
    /// spent waiting at the population cap still counts toward the next
    /// opening.
    pub fn handle<W>(
        &mut self,
        events: &[Event],
        wave: u32,
        zombies: &ZombieView,
        bounds: FieldBounds,
        words: &mut W,
        out: &mut Vec<Command>,
    ) where
        W: WordSource,
    {
        let mut accumulated = Duration::ZERO;
        for event in events {
            if let Event::TimeAdvanced { dt } = event {
                accumulated = accumulated.saturating_add(*dt);
            }
        }

        if accumulated.is_zero() {
            return;
        }

        self.accumulator = self.accumulator.saturating_add(accumulated);

        if zombies.len() >= difficulty::population_cap(wave) {
            return;
        }

        if self.accumulator <= difficulty::spawn_interval(wave) {
            return;
        }

        let word = self.select_word(wave, zombies, words);
        let x = self.select_x(bounds);
        out.push(Command::SpawnZombie {
            word,
            x,
            speed: difficulty::descent_speed(wave),
        });
        self.accumulator = Duration::ZERO;
    }

    fn select_word<W>(&mut self, wave: u32, zombies: &ZombieView, words: &mut W) -> String
    where
        W: WordSource,
    {
        let mut word = words.word_for_wave(wave);
        for _ in 0..UNIQUENESS_RETRIES {
            let on_screen = zombies.iter().any(|snapshot| snapshot.word == word);
            if !on_screen {
                break;
            }
            word = words.word_for_wave(wave);
        }
        word.to_owned()
    }

    fn select_x(&mut self, bounds: FieldBounds) -> f32 {
        let (low, high) = bounds.spawn_band();
        let span = (high - low).max(1.0) as u64;
        let value = self.advance_rng();
        low + (value % span) as f32
    }

    fn advance_rng(&mut self) -> u64 {
        self.rng_state = self
            .rng_state
            .wrapping_mul(RNG_MULTIPLIER)
            .wrapping_add(RNG_INCREMENT);
        self.rng_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use word_horde_core::FieldBounds;

    struct FixedWords(&'static str);

    impl WordSource for FixedWords {
        fn word_for_wave(&mut self, _wave: u32) -> &'static str {
            self.0
        }
    }

    #[test]
    fn positions_stay_inside_the_spawn_band() {
        let mut spawning = Spawning::new(Config::new(0x4d59_5df4_d0f3_3173));
        let bounds = FieldBounds::standard();
        let (low, high) = bounds.spawn_band();
        for _ in 0..1000 {
            let x = spawning.select_x(bounds);
            assert!(x >= low && x < high, "x out of band: {x}");
        }
    }

    #[test]
    fn no_time_means_no_spawn() {
        let mut spawning = Spawning::new(Config::new(1));
        let mut out = Vec::new();
        spawning.handle(
            &[],
            1,
            &ZombieView::default(),
            FieldBounds::standard(),
            &mut FixedWords("bite"),
            &mut out,
        );
        assert!(out.is_empty());
    }
}
