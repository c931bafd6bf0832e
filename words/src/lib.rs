#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Word source for the Word Horde engine.
//!
//! Supplies difficulty-appropriate vocabulary as a pure function of the
//! wave index with randomized selection. The tier thresholds and word lists
//! are content decisions; the contract is shape only: every word is a
//! lowercase ASCII-letter string of at least three characters, and the
//! drawn tier never gets easier as the wave increases.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Shortest word the engine will ever put on screen.
pub const MIN_WORD_LEN: usize = 3;

const WORDS_EASY: &[&str] = &[
    "flee", "hide", "bite", "hunt", "rots", "dead", "kill", "moan", "howl", "claw", "gore",
    "bone", "loot", "shot", "fire", "trap", "limp", "gash", "haze", "dusk", "rust", "fear",
    "dark", "guts", "foul", "grim", "club", "axe", "run", "dig", "rot", "gut", "raw", "cut",
];

const WORDS_MEDIUM: &[&str] = &[
    "zombie", "plague", "hunter", "corpse", "terror", "hunger", "escape", "bunker", "supply",
    "danger", "attack", "defend", "rescue", "reload", "shelter", "menace", "ravage", "devour",
    "undead", "infect", "stench", "gallop", "frenzy", "groans", "barrel", "thrash", "putrid",
    "lurch", "gnarly", "shiver", "cringe", "stumble", "lurking", "creeper",
];

const WORDS_HARD: &[&str] = &[
    "outbreak", "infected", "barricade", "survivor", "shambling", "carnivore", "decompose",
    "bloodlust", "predator", "quarantine", "desperate", "apocalypse", "fortified", "sanctuary",
    "desolate", "overrun", "decimated", "reanimated", "pestilence", "onslaught", "cadaverous",
    "devastate", "rampage", "undying", "scavenger", "marauder", "fortitude", "hunkering",
];

/// Configuration or content defect detected while constructing a word source.
///
/// The engine fails fast at round start rather than spawn a malformed
/// zombie.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    /// A vocabulary tier contains no words.
    #[error("vocabulary tier `{tier}` is empty")]
    EmptyTier {
        /// Name of the offending tier.
        tier: &'static str,
    },
    /// A word violates the lowercase-ASCII, minimum-length shape contract.
    #[error("vocabulary word `{word}` is not a lowercase ASCII word of length >= {MIN_WORD_LEN}")]
    MalformedWord {
        /// The offending word.
        word: String,
    },
}

/// Source of difficulty-appropriate words for spawning.
///
/// Implementations must always return a lowercase ASCII-letter word of at
/// least [`MIN_WORD_LEN`] characters; validity is established at
/// construction, never per call.
pub trait WordSource {
    /// Draws a word suited to the provided wave index.
    fn word_for_wave(&mut self, wave: u32) -> &'static str;
}

/// Word source backed by the built-in tiered vocabulary.
///
/// Selection is uniform over the pool for the wave and fully determined by
/// the construction seed.
#[derive(Clone, Debug)]
pub struct TieredWords {
    rng: ChaCha8Rng,
}

impl TieredWords {
    /// Creates a seeded word source, validating the vocabulary first.
    pub fn new(seed: u64) -> Result<Self, VocabularyError> {
        validate_tier("easy", WORDS_EASY)?;
        validate_tier("medium", WORDS_MEDIUM)?;
        validate_tier("hard", WORDS_HARD)?;
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }
}

impl WordSource for TieredWords {
    fn word_for_wave(&mut self, wave: u32) -> &'static str {
        let (first, second) = tier_pools(wave);
        let index = self.rng.gen_range(0..first.len() + second.len());
        if index < first.len() {
            first[index]
        } else {
            second[index - first.len()]
        }
    }
}

/// Word pools drawn from for the provided wave.
///
/// Wave 1 draws easy words only, waves 2-3 mix easy and medium, waves 4-6
/// mix medium and hard, and later waves draw hard words only. The second
/// pool is empty for unmixed waves.
fn tier_pools(wave: u32) -> (&'static [&'static str], &'static [&'static str]) {
    match wave {
        0 | 1 => (WORDS_EASY, &[]),
        2 | 3 => (WORDS_EASY, WORDS_MEDIUM),
        4..=6 => (WORDS_MEDIUM, WORDS_HARD),
        _ => (WORDS_HARD, &[]),
    }
}

fn validate_tier(tier: &'static str, words: &[&str]) -> Result<(), VocabularyError> {
    if words.is_empty() {
        return Err(VocabularyError::EmptyTier { tier });
    }

    for word in words {
        let well_formed =
            word.len() >= MIN_WORD_LEN && word.bytes().all(|byte| byte.is_ascii_lowercase());
        if !well_formed {
            return Err(VocabularyError::MalformedWord {
                word: (*word).to_owned(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_vocabulary_is_well_formed() {
        let _ = TieredWords::new(0).expect("vocabulary must validate");
    }

    #[test]
    fn every_word_satisfies_the_shape_contract() {
        let mut source = TieredWords::new(7).expect("vocabulary");
        for wave in 1..20 {
            for _ in 0..50 {
                let word = source.word_for_wave(wave);
                assert!(word.len() >= MIN_WORD_LEN);
                assert!(word.bytes().all(|byte| byte.is_ascii_lowercase()));
            }
        }
    }

    #[test]
    fn identical_seeds_draw_identical_sequences() {
        let mut first = TieredWords::new(42).expect("vocabulary");
        let mut second = TieredWords::new(42).expect("vocabulary");
        for wave in [1, 2, 5, 9] {
            assert_eq!(first.word_for_wave(wave), second.word_for_wave(wave));
        }
    }

    #[test]
    fn wave_one_draws_from_the_easy_tier_only() {
        let mut source = TieredWords::new(3).expect("vocabulary");
        for _ in 0..100 {
            let word = source.word_for_wave(1);
            assert!(WORDS_EASY.contains(&word));
        }
    }

    #[test]
    fn late_waves_draw_from_the_hard_tier_only() {
        let mut source = TieredWords::new(3).expect("vocabulary");
        for _ in 0..100 {
            let word = source.word_for_wave(7);
            assert!(WORDS_HARD.contains(&word));
        }
    }

    #[test]
    fn middle_waves_mix_adjacent_tiers() {
        let mut source = TieredWords::new(11).expect("vocabulary");
        for _ in 0..100 {
            let word = source.word_for_wave(3);
            assert!(WORDS_EASY.contains(&word) || WORDS_MEDIUM.contains(&word));
            let word = source.word_for_wave(5);
            assert!(WORDS_MEDIUM.contains(&word) || WORDS_HARD.contains(&word));
        }
    }

    #[test]
    fn malformed_words_are_rejected() {
        assert_eq!(
            validate_tier("test", &["ok!"]),
            Err(VocabularyError::MalformedWord {
                word: "ok!".to_owned()
            })
        );
        assert_eq!(
            validate_tier("test", &["ab"]),
            Err(VocabularyError::MalformedWord {
                word: "ab".to_owned()
            })
        );
        assert_eq!(
            validate_tier("test", &[]),
            Err(VocabularyError::EmptyTier { tier: "test" })
        );
    }
}
