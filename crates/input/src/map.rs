//! Event mapping from terminal events to game input events.
//!
//! The puzzle is pointer-driven: the only game inputs are clicks. Left and
//! right button presses map to the same click event, mirroring the original
//! widget where the context menu was suppressed and secondary clicks played
//! like primary ones. Keyboard input exists solely to leave the game.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::types::InputEvent;

/// Map a terminal event to a game input event, if it carries one.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Down(MouseButton::Right) => {
                Some(InputEvent::Click {
                    x: mouse.column,
                    y: mouse.row,
                })
            }
            _ => None,
        },
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
            Some(InputEvent::Quit)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
