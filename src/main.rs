//! Terminal Tower of Hanoi runner.
//!
//! The game is purely event-driven: the loop blocks on the next terminal
//! event, feeds clicks and resizes to the core, and redraws after every event.
//! Events are handled to completion, strictly in delivery order; there is no
//! tick and nothing runs concurrently with the handler.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event;

use tui_hanoi::core::{Game, GameSnapshot, Layout};
use tui_hanoi::input::map_event;
use tui_hanoi::term::{HanoiView, TerminalRenderer, Viewport};
use tui_hanoi::types::InputEvent;

/// Classic configuration: three pegs, five disks.
const TOWER_COUNT: usize = 3;
const BLOCK_COUNT: usize = 5;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    // Seed only affects block colors; wall-clock millis give a fresh palette
    // per session, like the original widget's per-load random colors.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_millis().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1);

    let mut game = Game::new(TOWER_COUNT, BLOCK_COUNT, seed);
    let view = HanoiView::new();
    let mut snapshot = GameSnapshot::default();

    let (mut width, mut height) = crossterm::terminal::size().unwrap_or((80, 24));
    game.on_resize(&Layout::compute(
        game.tower_count(),
        width as f32,
        height as f32,
    ));

    loop {
        game.snapshot_into(&mut snapshot);
        let fb = view.render(&snapshot, Viewport::new(width, height));
        term.draw(&fb)?;

        match map_event(event::read()?) {
            Some(InputEvent::Quit) => return Ok(()),
            Some(InputEvent::Click { x, y }) => {
                // Hit-test against the center of the clicked cell, so a click
                // anywhere in the cell counts as inside it.
                game.handle_click(x as f32 + 0.5, y as f32 + 0.5);
            }
            Some(InputEvent::Resize {
                width: w,
                height: h,
            }) => {
                width = w;
                height = h;
                game.on_resize(&Layout::compute(
                    game.tower_count(),
                    width as f32,
                    height as f32,
                ));
                term.invalidate();
            }
            None => {}
        }
    }
}
