#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Word Horde engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative session, and pure systems. Adapters submit [`Command`]
//! values describing desired mutations, the session executes those commands
//! via its `apply` entry point, and then broadcasts [`Event`] values for
//! systems and presenters to react to deterministically. Systems consume
//! event streams, query immutable snapshots, and respond exclusively with
//! new command batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Width of a zombie sprite in field units, including its word label.
pub const ZOMBIE_WIDTH: f32 = 80.0;

/// Height of a zombie sprite in field units; word label plus figure.
pub const ZOMBIE_HEIGHT: f32 = 110.0;

/// Horizontal margin kept free on either side of the spawn band.
pub const SPAWN_MARGIN: f32 = 10.0;

/// Depth of the strip at the bottom of the field occupied by the player.
pub const PLAYER_STRIP: f32 = 90.0;

/// Upper bound applied to tick deltas before integration.
///
/// Bounds the effect of scheduler stalls or suspended drivers on simulated
/// motion.
pub const MAX_TICK_DELTA: Duration = Duration::from_millis(100);

/// Commands that express all permissible session mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of real time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Delivers one classified keystroke to the targeting state machine.
    Key {
        /// The classified key event.
        input: KeyInput,
    },
    /// Requests that a new zombie enter the field at the top edge.
    SpawnZombie {
        /// Word the player must type to defeat the zombie.
        word: String,
        /// Horizontal position assigned by the spawn controller.
        x: f32,
        /// Descent speed in field units per second.
        speed: f32,
    },
}

/// Events broadcast by the session after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Clamped duration of real time applied to the tick.
        dt: Duration,
    },
    /// Confirms that a zombie entered the field.
    ZombieSpawned {
        /// Identifier allocated to the new zombie.
        id: ZombieId,
        /// Word carried by the zombie.
        word: String,
        /// Horizontal position of the zombie.
        x: f32,
        /// Descent speed in field units per second.
        speed: f32,
    },
    /// Announces that the typed prefix locked onto a zombie.
    TargetLocked {
        /// Identifier of the locked zombie.
        id: ZombieId,
    },
    /// Announces that the target lock was released without a kill.
    TargetReleased {
        /// Identifier of the previously locked zombie.
        id: ZombieId,
    },
    /// Confirms that the locked zombie's word was completed.
    ///
    /// Presenters may stage a transient dying copy at the reported position;
    /// the copy carries no simulation meaning.
    ZombieKilled {
        /// Identifier of the defeated zombie.
        id: ZombieId,
        /// Word that was completed.
        word: String,
        /// Horizontal position at the moment of the kill.
        x: f32,
        /// Vertical position at the moment of the kill.
        y: f32,
    },
    /// Reports a mistyped letter.
    ///
    /// Presenters may flash briefly; the signal carries no simulation
    /// meaning.
    TypingError,
    /// Announces that the round advanced to a new difficulty wave.
    WaveReached {
        /// Wave index that became active, starting at 1.
        wave: u32,
    },
    /// Announces that a zombie reached the collision boundary.
    RoundEnded {
        /// Final statistics for the finished round.
        stats: FinalStats,
    },
}

/// Keystroke classification consumed by the targeting state machine.
///
/// Only the 26 unprefixed letter keys, backspace, and escape participate in
/// typing. Adapters never construct commands for any other key, so unknown
/// keys are dropped before they reach the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyInput {
    /// A letter key, normalized to lowercase ASCII.
    Letter(char),
    /// Removes the last character of the typed prefix.
    Backspace,
    /// Clears the typed prefix and the target lock.
    Escape,
}

impl KeyInput {
    /// Classifies a raw character as a typing letter.
    ///
    /// Returns `None` for characters outside `a-z`/`A-Z`; such keystrokes are
    /// ignored without effect and never counted as errors.
    #[must_use]
    pub fn from_char(raw: char) -> Option<Self> {
        if raw.is_ascii_alphabetic() {
            Some(Self::Letter(raw.to_ascii_lowercase()))
        } else {
            None
        }
    }
}

/// Unique identifier assigned to a zombie.
///
/// Identifiers are allocated by the session, strictly increasing, and never
/// reused within a round.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ZombieId(u32);

impl ZombieId {
    /// Creates a new zombie identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Lifecycle phase of a round.
///
/// The not-yet-started state has no representation here: a session is
/// constructed directly into `Playing` and discarded after `Ended`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// The round is live and processing ticks and keystrokes.
    Playing,
    /// A zombie reached the collision boundary; no further commands apply.
    Ended,
}

/// Dimensions of the playing field in field units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldBounds {
    width: f32,
    height: f32,
}

impl FieldBounds {
    /// Creates a field with explicit dimensions.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The standard 900 by 550 unit field.
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(900.0, 550.0)
    }

    /// Width of the field in field units.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height of the field in field units.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Vertical line whose crossing by any zombie's bottom edge ends the
    /// round. The player occupies the strip below it.
    #[must_use]
    pub const fn collision_boundary(&self) -> f32 {
        self.height - PLAYER_STRIP
    }

    /// Half-open horizontal range available for spawn positions.
    ///
    /// Keeps a freshly spawned zombie fully inside the field with a margin
    /// on both sides.
    #[must_use]
    pub const fn spawn_band(&self) -> (f32, f32) {
        (SPAWN_MARGIN, self.width - ZOMBIE_WIDTH - SPAWN_MARGIN)
    }
}

impl Default for FieldBounds {
    fn default() -> Self {
        Self::standard()
    }
}

/// Immutable representation of a single zombie's state used for queries.
#[derive(Clone, Debug, PartialEq)]
pub struct ZombieSnapshot {
    /// Unique identifier assigned to the zombie.
    pub id: ZombieId,
    /// Word the player must type to defeat the zombie.
    pub word: String,
    /// Horizontal position, constant after spawn.
    pub x: f32,
    /// Vertical position; negative while still above the visible field.
    pub y: f32,
    /// Descent speed in field units per second.
    pub speed: f32,
}

/// Read-only snapshot describing all live zombies.
#[derive(Clone, Debug, Default)]
pub struct ZombieView {
    snapshots: Vec<ZombieSnapshot>,
}

impl ZombieView {
    /// Creates a new view from the provided snapshots.
    ///
    /// Snapshots are ordered by identifier, which doubles as roster order
    /// because identifiers are allocated in spawn order.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<ZombieSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &ZombieSnapshot> {
        self.snapshots.iter()
    }

    /// Number of live zombies captured by the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether the view captured no zombies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<ZombieSnapshot> {
        self.snapshots
    }
}

/// Statistics exposed live on every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStats {
    /// Zombies defeated so far this round.
    pub kills: u32,
    /// Mistyped letters so far this round.
    pub errors: u32,
    /// Current words-per-minute estimate, 0 during the suppression window.
    pub wpm: u32,
}

/// Final statistics reported once when a round ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalStats {
    /// Zombies defeated during the round.
    pub kills: u32,
    /// Mistyped letters during the round.
    pub errors: u32,
    /// Words-per-minute over the whole round.
    pub wpm: u32,
    /// Percentage of correct characters among all attempted, rounded.
    pub accuracy: u32,
    /// Wave that was active when the round ended.
    pub wave: u32,
}

#[cfg(test)]
mod tests {
    use super::{FieldBounds, FinalStats, KeyInput, LiveStats, ZombieId, ZOMBIE_WIDTH};
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn zombie_id_round_trips_through_bincode() {
        assert_round_trip(&ZombieId::new(42));
    }

    #[test]
    fn final_stats_round_trip_through_bincode() {
        assert_round_trip(&FinalStats {
            kills: 12,
            errors: 3,
            wpm: 41,
            accuracy: 94,
            wave: 4,
        });
    }

    #[test]
    fn live_stats_default_is_zeroed() {
        assert_eq!(
            LiveStats::default(),
            LiveStats {
                kills: 0,
                errors: 0,
                wpm: 0
            }
        );
    }

    #[test]
    fn letters_normalize_to_lowercase() {
        assert_eq!(KeyInput::from_char('Q'), Some(KeyInput::Letter('q')));
        assert_eq!(KeyInput::from_char('z'), Some(KeyInput::Letter('z')));
    }

    #[test]
    fn non_letters_are_not_classified() {
        assert_eq!(KeyInput::from_char('1'), None);
        assert_eq!(KeyInput::from_char(' '), None);
        assert_eq!(KeyInput::from_char('é'), None);
    }

    #[test]
    fn standard_field_matches_expected_geometry() {
        let bounds = FieldBounds::standard();
        assert_eq!(bounds.width(), 900.0);
        assert_eq!(bounds.height(), 550.0);
        assert_eq!(bounds.collision_boundary(), 460.0);
        let (low, high) = bounds.spawn_band();
        assert_eq!(low, 10.0);
        assert_eq!(high, 900.0 - ZOMBIE_WIDTH - 10.0);
    }
}
