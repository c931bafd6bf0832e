//! Single-round driver: loop scheduling and event routing.

use std::mem;
use std::time::Duration;

use anyhow::{Context, Result};
use word_horde_core::{Command, Event, FinalStats, KeyInput, RoundPhase};
use word_horde_presentation::{CosmeticLayer, Frame};
use word_horde_session::{apply, query, Session};
use word_horde_system_spawning::{Config, Spawning};
use word_horde_words::TieredWords;

/// Owns one round of play from first tick to loss.
///
/// Ticks and keystrokes run to completion in submission order; systems see
/// the event batch of the previous tick, which keeps single-threaded
/// scheduling deterministic. Dropping the driver tears the
/// round down; constructing a new one starts the next round with no shared
/// state.
#[derive(Debug)]
pub struct Round {
    session: Session,
    spawning: Spawning,
    words: TieredWords,
    cosmetics: CosmeticLayer,
    pending_events: Vec<Event>,
    final_stats: Option<FinalStats>,
}

impl Round {
    /// Constructs a fresh round from a seed.
    ///
    /// Fails only when the vocabulary is malformed, which is a content
    /// defect surfaced before any zombie can spawn.
    pub fn new(seed: u64) -> Result<Self> {
        let words = TieredWords::new(seed).context("word source failed validation")?;
        Ok(Self {
            session: Session::new(),
            spawning: Spawning::new(Config::new(seed)),
            words,
            cosmetics: CosmeticLayer::new(),
            pending_events: Vec::new(),
            final_stats: None,
        })
    }

    /// Advances the round by one tick of real time.
    ///
    /// Runs the spawn controller over the previous batch of events, applies
    /// its commands, then applies the tick itself.
    pub fn tick(&mut self, dt: Duration) {
        if self.final_stats.is_some() {
            return;
        }

        let batch = mem::take(&mut self.pending_events);
        let mut commands = Vec::new();
        self.spawning.handle(
            &batch,
            query::wave(&self.session),
            &query::zombie_view(&self.session),
            query::field_bounds(&self.session),
            &mut self.words,
            &mut commands,
        );

        let mut events = Vec::new();
        for command in commands {
            apply(&mut self.session, command, &mut events);
        }
        apply(&mut self.session, Command::Tick { dt }, &mut events);
        self.absorb(events);
    }

    /// Delivers one classified keystroke.
    pub fn key(&mut self, input: KeyInput) {
        if self.final_stats.is_some() {
            return;
        }

        let mut events = Vec::new();
        apply(&mut self.session, Command::Key { input }, &mut events);
        self.absorb(events);
    }

    fn absorb(&mut self, events: Vec<Event>) {
        let now = query::elapsed(&self.session);
        self.cosmetics.observe(&events, now);
        self.cosmetics.expire(now);

        for event in &events {
            if let Event::RoundEnded { stats } = event {
                self.final_stats = Some(*stats);
            }
        }
        self.pending_events.extend(events);
    }

    /// Composes the display snapshot for the current state.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::compose(
            &query::zombie_view(&self.session),
            query::target(&self.session),
            query::typed_prefix(&self.session),
            query::wave(&self.session),
            query::live_stats(&self.session),
            &self.cosmetics,
            query::elapsed(&self.session),
        )
    }

    /// Whether a zombie reached the boundary and ended the round.
    #[must_use]
    pub fn is_over(&self) -> bool {
        debug_assert_eq!(
            self.final_stats.is_some(),
            query::phase(&self.session) == RoundPhase::Ended
        );
        self.final_stats.is_some()
    }

    /// Final statistics, available once the round ended.
    #[must_use]
    pub fn final_stats(&self) -> Option<FinalStats> {
        self.final_stats
    }
}
