//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Coordinate space
//!
//! All hit-testing happens in screen space: terminal cell coordinates with `x`
//! growing rightward and `y` growing downward. Layout math works in `f32` so a
//! uniform scale factor can be applied; pointer events arrive as integer cells
//! and are tested against the cell's center point.
//!
//! # Design-space constants
//!
//! The layout is authored against a reference viewport and scaled down to fit
//! whatever terminal is actually available:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DESIGN_WIDTH` | 120 | Reference viewport width in cells |
//! | `DESIGN_HEIGHT` | 40 | Reference viewport height in cells |
//! | `TOWER_HEIGHT` | 18 | Tower hit region height at scale 1.0 |
//! | `BUTTON_WIDTH` | 15 | Button width at scale 1.0 |
//! | `BUTTON_HEIGHT` | 3 | Button height at scale 1.0 |
//! | `EDGE_MARGIN` | 2 | Gap between buttons and the viewport edge |
//!
//! # Examples
//!
//! ```
//! use tui_hanoi_types::{Block, BoundingBox, GamePhase, Rgb};
//!
//! let block = Block::new(3, Rgb::new(90, 160, 220));
//! assert_eq!(block.id, 3);
//!
//! let mut bounds = BoundingBox::default();
//! bounds.update(10.0, 5.0, 20.0, 8.0);
//! assert!(bounds.contains(15.0, 9.0));
//! assert!(!bounds.contains(10.0, 9.0)); // edges are outside
//!
//! assert_eq!(GamePhase::default(), GamePhase::Playing);
//! ```

/// Maximum number of towers the fixed backing storage can hold.
pub const MAX_TOWERS: usize = 8;

/// Maximum number of blocks the fixed backing storage can hold.
pub const MAX_BLOCKS: usize = 16;

/// Reference viewport width in cells (layout is authored at this size).
pub const DESIGN_WIDTH: f32 = 120.0;

/// Reference viewport height in cells.
pub const DESIGN_HEIGHT: f32 = 40.0;

/// Tower hit region height in cells at scale 1.0.
pub const TOWER_HEIGHT: f32 = 18.0;

/// Button width in cells at scale 1.0.
pub const BUTTON_WIDTH: f32 = 15.0;

/// Button height in cells at scale 1.0.
pub const BUTTON_HEIGHT: f32 = 3.0;

/// Gap between the buttons and the viewport edge at scale 1.0.
pub const EDGE_MARGIN: f32 = 2.0;

/// Fraction of the viewport height where the tower baseline sits.
pub const BASELINE_FRACTION: f32 = 0.8;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A ranked disk that sits on a tower.
///
/// `id` is the size rank: 1 is the smallest block and larger ids are wider.
/// Ids are unique across the game and assigned densely from `1..=block_count`.
/// `color` is an opaque display attribute; legality checks only compare ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub id: u8,
    pub color: Rgb,
}

impl Block {
    pub const fn new(id: u8, color: Rgb) -> Self {
        Self { id, color }
    }
}

/// One completed relocation of a top block, recorded for undo.
///
/// `from != to` always holds: a deselect never produces a `Move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    from: usize,
    to: usize,
}

impl Move {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Index of the tower the block was moved from.
    pub fn from(&self) -> usize {
        self.from
    }

    /// Index of the tower the block was moved to.
    pub fn to(&self) -> usize {
        self.to
    }
}

/// Axis-aligned rectangular hit region.
///
/// Containment uses strict inequalities on all four edges: a point exactly on
/// an edge or corner is NOT inside. A default (zero-sized) box contains
/// nothing, which is what regions should do before the first layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl BoundingBox {
    /// Replace the rectangle with a new position and size.
    pub fn update(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }

    /// True iff the point lies strictly inside the rectangle.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        (self.x < px && px < self.x + self.width) && (self.y < py && py < self.y + self.height)
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// The two phases of a game.
///
/// `Finished` is entered exactly when the last tower holds every block and is
/// only left via restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    Finished,
}

/// What a pointer click actually did to the game.
///
/// Invalid or no-op interactions are absorbed rather than surfaced as errors;
/// the variant makes the absorption explicit and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click hit nothing actionable (outside every region, an empty tower
    /// with nothing selected, or undo with an empty history).
    Ignored,
    /// A non-empty tower became the selection.
    Selected(usize),
    /// Clicking the selected tower toggled the selection off.
    Deselected(usize),
    /// A legal move was executed and recorded.
    Moved { from: usize, to: usize },
    /// An illegal move was attempted; nothing moved but the selection cleared.
    Rejected { from: usize, to: usize },
    /// The restart button reset the game.
    Restarted,
    /// The undo button reverted the most recent move.
    Undone { from: usize, to: usize },
}

/// A device-independent input event delivered to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer activation at a screen cell. Secondary clicks are delivered
    /// identically to primary clicks.
    Click { x: u16, y: u16 },
    /// The terminal was resized.
    Resize { width: u16, height: u16 },
    /// The user asked to leave the game.
    Quit,
}
