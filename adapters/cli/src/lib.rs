#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives the Word Horde engine.
//!
//! The [`round::Round`] driver owns every per-round value — session, spawn
//! controller, word source, cosmetic layer — so restarting is nothing more
//! than dropping the old driver and constructing a new one; no stale tick or
//! keystroke can reach a discarded session.

pub mod presenter;
pub mod round;
