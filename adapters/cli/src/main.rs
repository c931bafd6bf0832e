#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs headless Word Horde rounds.
//!
//! Without a terminal UI the binary drives a deterministic autoplay bot:
//! each round it ticks the engine at a fixed rate, types toward the zombie
//! closest to the player, and prints periodic HUD frames plus the final
//! summary. Useful for exercising the full loop and for eyeballing pacing.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use word_horde_cli::presenter::TextPresenter;
use word_horde_cli::round::Round;
use word_horde_core::{FieldBounds, KeyInput};
use word_horde_presentation::PresentFrame;

/// Headless Word Horde runner.
#[derive(Debug, Parser)]
#[command(name = "word-horde")]
struct Options {
    /// Seed shared by word selection and spawn placement.
    #[arg(long, default_value_t = 0x5eed_0f_2026)]
    seed: u64,

    /// Simulation ticks per second.
    #[arg(long, default_value_t = 60)]
    tick_hz: u32,

    /// Maximum simulated seconds per round before giving up on a loss.
    #[arg(long, default_value_t = 180)]
    max_seconds: u64,

    /// Number of rounds to play back to back.
    #[arg(long, default_value_t = 1)]
    rounds: u32,

    /// Ticks between bot keystrokes; larger is slower typing.
    #[arg(long, default_value_t = 9)]
    keystroke_ticks: u32,

    /// Watch the horde descend without typing.
    #[arg(long)]
    idle: bool,
}

fn main() -> Result<()> {
    let options = Options::parse();

    for index in 0..options.rounds {
        // Restart is synchronous: the previous Round is dropped before the
        // next one is constructed.
        let seed = options.seed.wrapping_add(u64::from(index));
        run_round(&options, seed)?;
    }
    Ok(())
}

fn run_round(options: &Options, seed: u64) -> Result<()> {
    let mut round = Round::new(seed)?;
    let mut presenter = TextPresenter::new(FieldBounds::standard());

    let tick_hz = options.tick_hz.max(1);
    let dt = Duration::from_secs(1) / tick_hz;
    let max_ticks = options.max_seconds * u64::from(tick_hz);
    let frame_stride = u64::from(tick_hz); // one printed frame per second
    let keystroke_ticks = u64::from(options.keystroke_ticks.max(1));

    println!("=== round seeded with {seed:#x} ===");
    for tick_index in 0..max_ticks {
        round.tick(dt);

        if !options.idle && tick_index % keystroke_ticks == 0 {
            if let Some(letter) = next_bot_letter(&round) {
                round.key(KeyInput::Letter(letter));
            }
        }

        if round.is_over() {
            break;
        }

        if tick_index % frame_stride == 0 {
            presenter.present(&round.frame())?;
        }
    }

    match round.final_stats() {
        Some(stats) => presenter.present_summary(&stats)?,
        None => println!("--- survived the full run ---"),
    }
    Ok(())
}

/// Picks the bot's next letter: continue the locked word, otherwise start
/// on the zombie closest to the player.
fn next_bot_letter(round: &Round) -> Option<char> {
    let frame = round.frame();

    if let Some(target) = frame.zombies.iter().find(|zombie| zombie.targeted) {
        return target
            .word
            .as_bytes()
            .get(frame.typed.len())
            .map(|byte| *byte as char);
    }

    frame
        .zombies
        .iter()
        .max_by(|a, b| a.position.y.total_cmp(&b.position.y))
        .and_then(|zombie| zombie.word.as_bytes().first())
        .map(|byte| *byte as char)
}
