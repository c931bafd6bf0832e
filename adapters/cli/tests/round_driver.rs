use std::time::Duration;

use word_horde_cli::round::Round;
use word_horde_core::KeyInput;

const DT: Duration = Duration::from_millis(50);

fn tick_until_spawn(round: &mut Round) {
    for _ in 0..200 {
        round.tick(DT);
        if !round.frame().zombies.is_empty() {
            return;
        }
    }
    panic!("no zombie spawned within ten simulated seconds");
}

#[test]
fn first_zombie_appears_after_the_wave_one_interval() {
    let mut round = Round::new(1).expect("valid vocabulary");
    let mut ticks = 0;
    while round.frame().zombies.is_empty() {
        round.tick(DT);
        ticks += 1;
        assert!(ticks <= 200, "no spawn within ten simulated seconds");
    }
    // Wave 1 spawn interval is 3000 ms.
    assert!(ticks > 60, "spawned after only {ticks} ticks");
}

#[test]
fn typing_the_displayed_word_scores_a_kill() {
    let mut round = Round::new(2).expect("valid vocabulary");
    tick_until_spawn(&mut round);

    let word = round.frame().zombies[0].word.clone();
    for letter in word.chars() {
        round.key(KeyInput::Letter(letter));
    }

    let frame = round.frame();
    assert_eq!(frame.stats.kills, 1);
    assert_eq!(frame.typed, "");
    assert_eq!(frame.dying.len(), 1, "kill stages a dying copy");
    assert!(!round.is_over());
}

#[test]
fn an_idle_round_ends_in_a_loss() {
    let mut round = Round::new(3).expect("valid vocabulary");

    // Wave 1 zombies fall 28 units/s from -110 to the 460 boundary:
    // roughly 20 s. Give the round a minute.
    for _ in 0..1200 {
        round.tick(DT);
        if round.is_over() {
            break;
        }
    }

    assert!(round.is_over());
    let stats = round.final_stats().expect("final stats after loss");
    assert_eq!(stats.kills, 0);
    assert_eq!(stats.accuracy, 0);
    assert!(stats.wave >= 1);

    // The finished driver ignores further input.
    let before = round.frame();
    round.key(KeyInput::Letter('a'));
    round.tick(DT);
    assert_eq!(round.frame().stats, before.stats);
}

#[test]
fn restarting_builds_an_untouched_round() {
    let mut first = Round::new(4).expect("valid vocabulary");
    for _ in 0..1200 {
        first.tick(DT);
        if first.is_over() {
            break;
        }
    }
    assert!(first.is_over());

    // Synchronous restart: drop the old driver, construct a new one.
    drop(first);
    let second = Round::new(4).expect("valid vocabulary");
    let frame = second.frame();
    assert!(frame.zombies.is_empty());
    assert_eq!(frame.stats.kills, 0);
    assert_eq!(frame.wave, 1);
    assert!(!second.is_over());
}
