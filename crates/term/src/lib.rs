//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into a
//! simple framebuffer of styled character cells which is then flushed to the
//! terminal backend in one pass.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: snapshot in, framebuffer out
//! - Own every terminal mode switch (raw mode, alternate screen, mouse capture)
//!   in one place so the game loop cannot leave the terminal broken

pub mod fb;
pub mod renderer;
pub mod view;

pub use fb::{Cell, FrameBuffer, Style};
pub use renderer::TerminalRenderer;
pub use view::{HanoiView, Viewport};
