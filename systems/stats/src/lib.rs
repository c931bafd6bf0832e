#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure statistics formulas derived from session counters.
//!
//! All inputs are raw counters owned by the session; nothing here mutates
//! state, so live readouts and the final round summary share one code path.

use std::time::Duration;

/// Characters per standardized word used by the WPM convention.
const CHARS_PER_WORD: f64 = 5.0;

/// Elapsed play below this many minutes reports a WPM of zero.
///
/// Suppresses the noisy estimates produced during roughly the first three
/// seconds of a round.
const WPM_SUPPRESSION_MINUTES: f64 = 0.05;

/// Computes the words-per-minute estimate for the provided progress.
///
/// Uses the five-characters-per-word convention, rounded to the nearest
/// integer. Reports 0 until enough time has elapsed for the estimate to be
/// meaningful.
#[must_use]
pub fn words_per_minute(total_chars: u32, elapsed: Duration) -> u32 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if minutes <= WPM_SUPPRESSION_MINUTES {
        return 0;
    }

    let wpm = f64::from(total_chars) / CHARS_PER_WORD / minutes;
    wpm.round() as u32
}

/// Computes the rounded percentage of correct characters among all attempted.
///
/// Correct characters are those belonging to completed words; every mistyped
/// letter counts once. Defined as 0 when nothing was attempted.
#[must_use]
pub fn accuracy_percent(total_chars: u32, errors: u32) -> u32 {
    let attempted = u64::from(total_chars) + u64::from(errors);
    if attempted == 0 {
        return 0;
    }

    let ratio = f64::from(total_chars) / attempted as f64;
    (ratio * 100.0).round() as u32
}
