//! Terminal input module (game-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` events into [`tui_hanoi_types::InputEvent`] so the game loop
//! never touches terminal event types directly.

pub mod map;

pub use tui_hanoi_types as types;

pub use map::{map_event, should_quit};
