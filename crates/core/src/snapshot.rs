//! Renderer-facing read model of the full game state.
//!
//! A snapshot is everything the terminal view needs to draw one frame: tower
//! contents in order, selection flags, the move count, the phase, and the
//! screen regions. Callers keep one snapshot and refill it each frame via
//! [`crate::Game::snapshot_into`].

use arrayvec::ArrayVec;

use crate::types::{Block, BoundingBox, GamePhase, MAX_BLOCKS, MAX_TOWERS};

/// One tower as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TowerSnapshot {
    /// Blocks bottom to top.
    pub blocks: ArrayVec<Block, MAX_BLOCKS>,
    pub selected: bool,
    pub bounds: BoundingBox,
}

/// The full per-frame view of the game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub towers: ArrayVec<TowerSnapshot, MAX_TOWERS>,
    pub move_count: usize,
    pub block_count: usize,
    pub phase: GamePhase,
    pub restart_bounds: BoundingBox,
    pub undo_bounds: BoundingBox,
    pub scale: f32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.towers.clear();
        self.move_count = 0;
        self.block_count = 0;
        self.phase = GamePhase::Playing;
        self.restart_bounds = BoundingBox::default();
        self.undo_bounds = BoundingBox::default();
        self.scale = 1.0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            towers: ArrayVec::new(),
            move_count: 0,
            block_count: 0,
            phase: GamePhase::Playing,
            restart_bounds: BoundingBox::default(),
            undo_bounds: BoundingBox::default(),
            scale: 1.0,
        }
    }
}
