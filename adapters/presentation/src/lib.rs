#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for Word Horde adapters.
//!
//! The simulation owns the authoritative session; presenters consume an
//! immutable [`Frame`] assembled after each tick. The purely cosmetic layer
//! — dying zombies that linger briefly and the error flash — is timer-driven
//! display state, so it lives here and expires on the presenter's clock,
//! decoupled from the simulation tick.

use std::time::Duration;

use anyhow::Result as AnyResult;
use glam::Vec2;
use word_horde_core::{Event, FinalStats, LiveStats, ZombieId, ZombieView};

/// How long a defeated zombie remains visible after its kill.
pub const DYING_LINGER: Duration = Duration::from_millis(500);

/// How long the error flash remains active after a mistyped letter.
pub const ERROR_FLASH: Duration = Duration::from_millis(300);

/// A zombie as a presenter draws it.
#[derive(Clone, Debug, PartialEq)]
pub struct ZombieSprite {
    /// Identifier of the zombie.
    pub id: ZombieId,
    /// Word displayed above the figure.
    pub word: String,
    /// Position of the sprite's top-left corner in field units.
    pub position: Vec2,
    /// Whether this zombie currently holds the target lock.
    pub targeted: bool,
}

/// A defeated zombie kept on screen for its death animation.
#[derive(Clone, Debug, PartialEq)]
pub struct DyingZombie {
    /// Identifier the zombie had while alive.
    pub id: ZombieId,
    /// Word the zombie carried.
    pub word: String,
    /// Position at the moment of the kill.
    pub position: Vec2,
    expires_at: Duration,
}

/// Immutable display snapshot assembled once per tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Live zombies in roster order.
    pub zombies: Vec<ZombieSprite>,
    /// Defeated zombies still within their linger window.
    pub dying: Vec<DyingZombie>,
    /// The in-progress typed prefix.
    pub typed: String,
    /// Current difficulty wave.
    pub wave: u32,
    /// Live statistics readout.
    pub stats: LiveStats,
    /// Whether the error flash is active this frame.
    pub flash_error: bool,
}

impl Frame {
    /// Composes a frame from session queries and the cosmetic layer.
    ///
    /// `now` is the presenter's clock, used only to resolve cosmetic expiry.
    #[must_use]
    pub fn compose(
        zombies: &ZombieView,
        target: Option<ZombieId>,
        typed: &str,
        wave: u32,
        stats: LiveStats,
        cosmetics: &CosmeticLayer,
        now: Duration,
    ) -> Self {
        Self {
            zombies: zombies
                .iter()
                .map(|snapshot| ZombieSprite {
                    id: snapshot.id,
                    word: snapshot.word.clone(),
                    position: Vec2::new(snapshot.x, snapshot.y),
                    targeted: target == Some(snapshot.id),
                })
                .collect(),
            dying: cosmetics.dying_at(now),
            typed: typed.to_owned(),
            wave,
            stats,
            flash_error: cosmetics.flash_active(now),
        }
    }
}

/// Timer-driven cosmetic state derived from simulation events.
///
/// Holds no simulation meaning: dropping the whole layer changes nothing
/// about the round.
#[derive(Clone, Debug, Default)]
pub struct CosmeticLayer {
    dying: Vec<DyingZombie>,
    flash_until: Option<Duration>,
}

impl CosmeticLayer {
    /// Creates an empty cosmetic layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a batch of simulation events into the layer.
    ///
    /// `now` is the presenter's clock at the moment the batch was observed.
    pub fn observe(&mut self, events: &[Event], now: Duration) {
        for event in events {
            match event {
                Event::ZombieKilled { id, word, x, y } => {
                    self.dying.push(DyingZombie {
                        id: *id,
                        word: word.clone(),
                        position: Vec2::new(*x, *y),
                        expires_at: now + DYING_LINGER,
                    });
                }
                Event::TypingError => {
                    self.flash_until = Some(now + ERROR_FLASH);
                }
                _ => {}
            }
        }
    }

    /// Drops cosmetic entries whose window has elapsed.
    pub fn expire(&mut self, now: Duration) {
        self.dying.retain(|zombie| zombie.expires_at > now);
        if let Some(until) = self.flash_until {
            if until <= now {
                self.flash_until = None;
            }
        }
    }

    fn dying_at(&self, now: Duration) -> Vec<DyingZombie> {
        self.dying
            .iter()
            .filter(|zombie| zombie.expires_at > now)
            .cloned()
            .collect()
    }

    fn flash_active(&self, now: Duration) -> bool {
        self.flash_until.is_some_and(|until| until > now)
    }
}

/// Contract implemented by concrete presenters.
pub trait PresentFrame {
    /// Presents one display snapshot.
    fn present(&mut self, frame: &Frame) -> AnyResult<()>;

    /// Presents the final summary after the round ended.
    fn present_summary(&mut self, stats: &FinalStats) -> AnyResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use word_horde_core::{ZombieSnapshot, ZombieView};

    fn killed(id: u32, word: &str) -> Event {
        Event::ZombieKilled {
            id: ZombieId::new(id),
            word: word.to_owned(),
            x: 100.0,
            y: 200.0,
        }
    }

    #[test]
    fn dying_zombies_linger_then_expire() {
        let mut cosmetics = CosmeticLayer::new();
        cosmetics.observe(&[killed(1, "bite")], Duration::from_secs(10));

        let frame_now = |cosmetics: &CosmeticLayer, now| {
            Frame::compose(
                &ZombieView::default(),
                None,
                "",
                1,
                LiveStats::default(),
                cosmetics,
                now,
            )
        };

        assert_eq!(frame_now(&cosmetics, Duration::from_millis(10_400)).dying.len(), 1);
        assert!(frame_now(&cosmetics, Duration::from_millis(10_500)).dying.is_empty());

        cosmetics.expire(Duration::from_millis(10_500));
        assert!(cosmetics.dying.is_empty());
    }

    #[test]
    fn error_flash_auto_clears() {
        let mut cosmetics = CosmeticLayer::new();
        cosmetics.observe(&[Event::TypingError], Duration::from_secs(5));

        assert!(cosmetics.flash_active(Duration::from_millis(5_299)));
        assert!(!cosmetics.flash_active(Duration::from_millis(5_300)));

        cosmetics.expire(Duration::from_millis(5_300));
        assert_eq!(cosmetics.flash_until, None);
    }

    #[test]
    fn frame_marks_the_locked_zombie() {
        let view = ZombieView::from_snapshots(vec![
            ZombieSnapshot {
                id: ZombieId::new(0),
                word: "bite".to_owned(),
                x: 50.0,
                y: 10.0,
                speed: 28.0,
            },
            ZombieSnapshot {
                id: ZombieId::new(1),
                word: "claw".to_owned(),
                x: 300.0,
                y: 40.0,
                speed: 28.0,
            },
        ]);

        let frame = Frame::compose(
            &view,
            Some(ZombieId::new(1)),
            "cl",
            2,
            LiveStats {
                kills: 3,
                errors: 1,
                wpm: 24,
            },
            &CosmeticLayer::new(),
            Duration::ZERO,
        );

        assert_eq!(frame.zombies.len(), 2);
        assert!(!frame.zombies[0].targeted);
        assert!(frame.zombies[1].targeted);
        assert_eq!(frame.zombies[1].position, Vec2::new(300.0, 40.0));
        assert_eq!(frame.typed, "cl");
        assert_eq!(frame.wave, 2);
    }
}
