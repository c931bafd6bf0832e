#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative round state for the Word Horde engine.
//!
//! A [`Session`] owns every mutable value of one round: the zombie roster,
//! the identifier allocator, the clock, the typed prefix, the target lock,
//! and the raw counters. Adapters mutate it exclusively through [`apply`],
//! which executes one [`Command`] to completion and broadcasts the resulting
//! [`Event`] values. Read access goes through the [`query`] module.
//!
//! The targeting state machine, motion integration, wave scheduling, and
//! loss detection all live here because they are the operations that touch
//! session state directly; spawn cadence is decided by the spawning system
//! and arrives as `Command::SpawnZombie`.

use std::time::Duration;

use word_horde_core::{
    Command, Event, FieldBounds, FinalStats, KeyInput, RoundPhase, ZombieId, MAX_TICK_DELTA,
    ZOMBIE_HEIGHT,
};
use word_horde_system_difficulty as difficulty;
use word_horde_system_stats as stats;

/// Represents the authoritative state of one round.
#[derive(Debug)]
pub struct Session {
    bounds: FieldBounds,
    zombies: Vec<Zombie>,
    next_id: u32,
    elapsed: Duration,
    wave: u32,
    typed: String,
    target: Option<ZombieId>,
    kills: u32,
    errors: u32,
    total_chars: u32,
    phase: RoundPhase,
}

impl Session {
    /// Creates a fresh session on the standard field, ready for its first
    /// tick.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bounds(FieldBounds::standard())
    }

    /// Creates a fresh session on a field with explicit dimensions.
    #[must_use]
    pub fn with_bounds(bounds: FieldBounds) -> Self {
        Self {
            bounds,
            zombies: Vec::new(),
            next_id: 0,
            elapsed: Duration::ZERO,
            wave: 1,
            typed: String::new(),
            target: None,
            kills: 0,
            errors: 0,
            total_chars: 0,
            phase: RoundPhase::Playing,
        }
    }

    fn zombie_index(&self, id: ZombieId) -> Option<usize> {
        self.zombies.iter().position(|zombie| zombie.id == id)
    }

    fn tick(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        let dt = dt.min(MAX_TICK_DELTA);
        self.elapsed = self.elapsed.saturating_add(dt);
        out_events.push(Event::TimeAdvanced { dt });

        let wave = difficulty::wave_for_elapsed(self.elapsed);
        if wave != self.wave {
            self.wave = wave;
            out_events.push(Event::WaveReached { wave });
        }

        let seconds = dt.as_secs_f32();
        for zombie in &mut self.zombies {
            zombie.y += zombie.speed * seconds;
        }

        let boundary = self.bounds.collision_boundary();
        if self
            .zombies
            .iter()
            .any(|zombie| zombie.y + ZOMBIE_HEIGHT >= boundary)
        {
            self.end_round(out_events);
        }
    }

    fn end_round(&mut self, out_events: &mut Vec<Event>) {
        self.phase = RoundPhase::Ended;
        self.zombies.clear();
        self.typed.clear();
        self.target = None;
        out_events.push(Event::RoundEnded {
            stats: FinalStats {
                kills: self.kills,
                errors: self.errors,
                wpm: stats::words_per_minute(self.total_chars, self.elapsed),
                accuracy: stats::accuracy_percent(self.total_chars, self.errors),
                wave: self.wave,
            },
        });
    }

    fn spawn(&mut self, word: String, x: f32, speed: f32, out_events: &mut Vec<Event>) {
        debug_assert!(
            !word.is_empty() && word.bytes().all(|byte| byte.is_ascii_lowercase()),
            "word sources must only supply lowercase ASCII words"
        );

        let id = ZombieId::new(self.next_id);
        self.next_id += 1;
        self.zombies.push(Zombie {
            id,
            word: word.clone(),
            x,
            y: -ZOMBIE_HEIGHT,
            speed,
        });
        out_events.push(Event::ZombieSpawned { id, word, x, speed });
    }

    fn handle_key(&mut self, input: KeyInput, out_events: &mut Vec<Event>) {
        match input {
            KeyInput::Escape => {
                self.typed.clear();
                if let Some(id) = self.target.take() {
                    out_events.push(Event::TargetReleased { id });
                }
            }
            KeyInput::Backspace => {
                if self.typed.pop().is_some() && self.typed.is_empty() {
                    if let Some(id) = self.target.take() {
                        out_events.push(Event::TargetReleased { id });
                    }
                }
            }
            KeyInput::Letter(letter) => self.handle_letter(letter, out_events),
        }
    }

    fn handle_letter(&mut self, letter: char, out_events: &mut Vec<Event>) {
        if let Some(target_id) = self.target {
            let Some(index) = self.zombie_index(target_id) else {
                // The lock referenced a zombie that no longer exists. Restore
                // the invariant silently and discard the keystroke.
                self.typed.clear();
                self.target = None;
                return;
            };

            let mut candidate = self.typed.clone();
            candidate.push(letter);

            if self.zombies[index].word.starts_with(&candidate) {
                self.typed = candidate;
                if self.zombies[index].word == self.typed {
                    self.kill(index, out_events);
                }
            } else {
                self.typing_error(out_events);
            }
            return;
        }

        let mut candidate = self.typed.clone();
        candidate.push(letter);

        // Lock onto the matching zombie closest to the player (greatest y),
        // ties broken by roster order.
        let mut best: Option<usize> = None;
        for (index, zombie) in self.zombies.iter().enumerate() {
            if !zombie.word.starts_with(&candidate) {
                continue;
            }
            match best {
                Some(current) if self.zombies[current].y >= zombie.y => {}
                _ => best = Some(index),
            }
        }

        let Some(index) = best else {
            self.typing_error(out_events);
            return;
        };

        let id = self.zombies[index].id;
        self.typed = candidate;
        self.target = Some(id);
        out_events.push(Event::TargetLocked { id });

        if self.zombies[index].word == self.typed {
            self.kill(index, out_events);
        }
    }

    fn kill(&mut self, index: usize, out_events: &mut Vec<Event>) {
        let zombie = self.zombies.remove(index);
        self.kills += 1;
        self.total_chars += zombie.word.len() as u32;
        self.typed.clear();
        self.target = None;
        out_events.push(Event::ZombieKilled {
            id: zombie.id,
            word: zombie.word,
            x: zombie.x,
            y: zombie.y,
        });
    }

    fn typing_error(&mut self, out_events: &mut Vec<Event>) {
        self.errors += 1;
        out_events.push(Event::TypingError);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the session, mutating state
/// deterministically.
///
/// Commands submitted after the round ended are ignored, so a stale tick or
/// keystroke can never mutate a finished round.
pub fn apply(session: &mut Session, command: Command, out_events: &mut Vec<Event>) {
    if session.phase == RoundPhase::Ended {
        return;
    }

    match command {
        Command::Tick { dt } => session.tick(dt, out_events),
        Command::Key { input } => session.handle_key(input, out_events),
        Command::SpawnZombie { word, x, speed } => session.spawn(word, x, speed, out_events),
    }
}

/// Query functions that provide read-only access to the session state.
pub mod query {
    use super::{difficulty, stats, Session};
    use word_horde_core::{
        FieldBounds, LiveStats, RoundPhase, ZombieId, ZombieSnapshot, ZombieView,
    };
    use std::time::Duration;

    /// Captures a read-only view of the live zombie roster.
    #[must_use]
    pub fn zombie_view(session: &Session) -> ZombieView {
        ZombieView::from_snapshots(
            session
                .zombies
                .iter()
                .map(|zombie| ZombieSnapshot {
                    id: zombie.id,
                    word: zombie.word.clone(),
                    x: zombie.x,
                    y: zombie.y,
                    speed: zombie.speed,
                })
                .collect(),
        )
    }

    /// The in-progress typed prefix.
    #[must_use]
    pub fn typed_prefix(session: &Session) -> &str {
        &session.typed
    }

    /// The currently locked target, if any.
    #[must_use]
    pub fn target(session: &Session) -> Option<ZombieId> {
        session.target
    }

    /// The difficulty wave active this tick.
    #[must_use]
    pub fn wave(session: &Session) -> u32 {
        session.wave
    }

    /// The lifecycle phase of the round.
    #[must_use]
    pub fn phase(session: &Session) -> RoundPhase {
        session.phase
    }

    /// Real time accumulated by the round so far.
    #[must_use]
    pub fn elapsed(session: &Session) -> Duration {
        session.elapsed
    }

    /// Dimensions of the playing field.
    #[must_use]
    pub fn field_bounds(session: &Session) -> FieldBounds {
        session.bounds
    }

    /// Statistics exposed live on every tick.
    #[must_use]
    pub fn live_stats(session: &Session) -> LiveStats {
        LiveStats {
            kills: session.kills,
            errors: session.errors,
            wpm: stats::words_per_minute(session.total_chars, session.elapsed),
        }
    }

    /// The spawn interval that applies during the current wave.
    #[must_use]
    pub fn spawn_interval(session: &Session) -> Duration {
        difficulty::spawn_interval(session.wave)
    }
}

#[derive(Clone, Debug)]
struct Zombie {
    id: ZombieId,
    word: String,
    x: f32,
    y: f32,
    speed: f32,
}
