//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Tower of Hanoi rules, state management, and click
//! resolution. It has **zero dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical block colors
//! - **Testable**: Comprehensive unit tests for all puzzle rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Fixed-capacity stacks, no allocation in the click path
//!
//! # Module Structure
//!
//! - [`game`]: The game controller - towers, move history, selection, win check
//! - [`tower`]: An ordered block stack with a hit-test region
//! - [`layout`]: Screen-space layout of towers and buttons from a viewport size
//! - [`snapshot`]: Renderer-facing read model of the full game state
//! - [`rng`]: Simple LCG used to pick block display colors
//!
//! # Puzzle Rules
//!
//! - Blocks are ranked by id; 1 is the smallest.
//! - A block may move onto an empty tower or onto a strictly larger block.
//! - Every tower reads strictly decreasing ids from bottom to top, always.
//! - The game is won when the last tower holds every block.
//!
//! # Example
//!
//! ```
//! use tui_hanoi_core::{Game, Layout};
//! use tui_hanoi_types::{ClickOutcome, GamePhase};
//!
//! let mut game = Game::new(3, 3, 7);
//! game.on_resize(&Layout::compute(3, 120.0, 40.0));
//!
//! // Click the first tower to pick up its top block, then an empty tower to drop it.
//! let first = game.tower_center(0).unwrap();
//! let last = game.tower_center(2).unwrap();
//! assert_eq!(game.handle_click(first.0, first.1), ClickOutcome::Selected(0));
//! assert_eq!(
//!     game.handle_click(last.0, last.1),
//!     ClickOutcome::Moved { from: 0, to: 2 }
//! );
//! assert_eq!(game.phase(), GamePhase::Playing);
//! assert_eq!(game.move_count(), 1);
//! ```

pub mod game;
pub mod layout;
pub mod rng;
pub mod snapshot;
pub mod tower;

pub use tui_hanoi_types as types;

// Re-export commonly used types for convenience
pub use game::Game;
pub use layout::Layout;
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, TowerSnapshot};
pub use tower::Tower;
