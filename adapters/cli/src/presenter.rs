//! Plain-text presenter for headless runs.

use anyhow::Result;
use word_horde_core::{FinalStats, FieldBounds};
use word_horde_presentation::{Frame, PresentFrame};

/// Presenter that writes a HUD line and a zombie roster to stdout.
#[derive(Debug, Default)]
pub struct TextPresenter {
    bounds: FieldBounds,
}

impl TextPresenter {
    /// Creates a presenter for the provided field.
    #[must_use]
    pub fn new(bounds: FieldBounds) -> Self {
        Self { bounds }
    }
}

impl PresentFrame for TextPresenter {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        let flash = if frame.flash_error { "  !!" } else { "" };
        println!(
            "wave {:>2}  kills {:>3}  errors {:>3}  wpm {:>3}  typed [{}]{}",
            frame.wave, frame.stats.kills, frame.stats.errors, frame.stats.wpm, frame.typed, flash
        );

        let boundary = self.bounds.collision_boundary();
        for zombie in &frame.zombies {
            let marker = if zombie.targeted { ">" } else { " " };
            let depth = (zombie.position.y / boundary * 100.0).clamp(-100.0, 100.0);
            println!(
                "  {marker} #{:<4} {:<12} x={:>6.1} depth={:>5.1}%",
                zombie.id.get(),
                zombie.word,
                zombie.position.x,
                depth
            );
        }
        for zombie in &frame.dying {
            println!("    #{:<4} {:<12} (dying)", zombie.id.get(), zombie.word);
        }
        Ok(())
    }

    fn present_summary(&mut self, stats: &FinalStats) -> Result<()> {
        println!("--- the horde got you on wave {} ---", stats.wave);
        println!("zombies killed  {}", stats.kills);
        println!("typing speed    {} wpm", stats.wpm);
        println!("accuracy        {}%", stats.accuracy);
        println!("errors          {}", stats.errors);
        Ok(())
    }
}
