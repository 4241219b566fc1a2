//! Game module - the controller that owns towers, history, and selection
//!
//! All state mutation happens synchronously inside [`Game::handle_click`] or
//! [`Game::on_resize`]; there is exactly one mutator context and no timing
//! component. Click resolution follows a fixed priority order: tower hit-test,
//! win check, restart button, undo button, all within one invocation.

use arrayvec::ArrayVec;

use crate::layout::Layout;
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, TowerSnapshot};
use crate::tower::Tower;
use crate::types::{
    Block, BoundingBox, ClickOutcome, GamePhase, Move, MAX_BLOCKS, MAX_TOWERS,
};

/// The Tower of Hanoi game controller.
///
/// Owns every tower and block, the move history, the current selection, and
/// the game phase. The controller is the sole legality enforcer: towers accept
/// whatever they are handed, and only [`Game::handle_click`] decides what may
/// move where.
#[derive(Debug, Clone)]
pub struct Game {
    towers: ArrayVec<Tower, MAX_TOWERS>,
    /// Every block in the game, indexed by `id - 1`. Created once, reused
    /// across resets.
    blocks: ArrayVec<Block, MAX_BLOCKS>,
    history: Vec<Move>,
    /// Index of the selected tower, if any. Mirrors the towers' `selected`
    /// flags: at most one is set, and it is this one.
    selected: Option<usize>,
    phase: GamePhase,
    restart_bounds: BoundingBox,
    undo_bounds: BoundingBox,
    scale: f32,
}

impl Game {
    /// Create a game with `tower_count` towers and `block_count` blocks, all
    /// stacked on tower 0. Block colors are derived from `seed`.
    ///
    /// Counts are capped by the fixed backing storage (`MAX_TOWERS`,
    /// `MAX_BLOCKS`); beyond that they are not validated, and a game with
    /// fewer than two towers is legal but unwinnable in any interesting sense.
    pub fn new(tower_count: usize, block_count: usize, seed: u32) -> Self {
        let tower_count = tower_count.min(MAX_TOWERS).max(1);
        let block_count = block_count.min(MAX_BLOCKS);

        let mut towers = ArrayVec::new();
        for _ in 0..tower_count {
            towers.push(Tower::new());
        }

        let mut rng = SimpleRng::new(seed);
        let mut blocks = ArrayVec::new();
        for id in 1..=block_count {
            blocks.push(Block::new(id as u8, rng.next_color()));
        }

        let mut game = Self {
            towers,
            blocks,
            history: Vec::new(),
            selected: None,
            phase: GamePhase::Playing,
            restart_bounds: BoundingBox::default(),
            undo_bounds: BoundingBox::default(),
            scale: 1.0,
        };
        game.reset();
        game
    }

    /// Resolve a pointer click at screen point `(px, py)`.
    ///
    /// Region checks run in a fixed order within the one invocation: towers
    /// (first containing region wins), then the win check, then the restart
    /// button, then the undo button. While `Finished`, only restart responds.
    pub fn handle_click(&mut self, px: f32, py: f32) -> ClickOutcome {
        let mut outcome = ClickOutcome::Ignored;

        match self.phase {
            GamePhase::Playing => {
                for i in 0..self.towers.len() {
                    if !self.towers[i].bounds().contains(px, py) {
                        continue;
                    }
                    outcome = self.click_tower(i);
                    break;
                }

                // Win check runs on every click, after any tower action.
                if self.last_tower_full() {
                    self.phase = GamePhase::Finished;
                }

                if self.restart_bounds.contains(px, py) {
                    self.reset();
                    outcome = ClickOutcome::Restarted;
                }

                if self.undo_bounds.contains(px, py) && !self.history.is_empty() {
                    outcome = self.undo_last();
                }
            }
            GamePhase::Finished => {
                if self.restart_bounds.contains(px, py) {
                    self.reset();
                    outcome = ClickOutcome::Restarted;
                }
            }
        }

        outcome
    }

    /// Apply a freshly computed layout. Never mutates puzzle state.
    pub fn on_resize(&mut self, layout: &Layout) {
        for (tower, bounds) in self.towers.iter_mut().zip(layout.towers()) {
            tower.set_bounds(*bounds);
        }
        self.restart_bounds = *layout.restart();
        self.undo_bounds = *layout.undo();
        self.scale = layout.scale();
    }

    /// Return to the initial position: all blocks on tower 0 largest-first,
    /// empty history, no selection, phase `Playing`.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.selected = None;
        self.history.clear();

        for tower in &mut self.towers {
            tower.reset();
        }
        // Bottom-to-top insertion order is block id descending.
        for block in self.blocks.iter().rev() {
            self.towers[0].push(*block);
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn selected_tower(&self) -> Option<usize> {
        self.selected
    }

    pub fn tower_count(&self) -> usize {
        self.towers.len()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn tower(&self, index: usize) -> Option<&Tower> {
        self.towers.get(index)
    }

    /// Center point of a tower's hit region; handy for driving clicks in
    /// tests and benchmarks.
    pub fn tower_center(&self, index: usize) -> Option<(f32, f32)> {
        self.towers.get(index).map(|t| {
            let b = t.bounds();
            (b.x() + b.width() / 2.0, b.y() + b.height() / 2.0)
        })
    }

    pub fn restart_bounds(&self) -> &BoundingBox {
        &self.restart_bounds
    }

    pub fn undo_bounds(&self) -> &BoundingBox {
        &self.undo_bounds
    }

    /// Fill `out` with everything the renderer needs, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.towers.clear();
        for tower in &self.towers {
            let mut snap = TowerSnapshot {
                blocks: ArrayVec::new(),
                selected: tower.selected(),
                bounds: *tower.bounds(),
            };
            snap.blocks.extend(tower.blocks().iter().copied());
            out.towers.push(snap);
        }
        out.move_count = self.history.len();
        out.block_count = self.blocks.len();
        out.phase = self.phase;
        out.restart_bounds = self.restart_bounds;
        out.undo_bounds = self.undo_bounds;
        out.scale = self.scale;
    }

    /// Resolve a click that landed on tower `i`.
    fn click_tower(&mut self, i: usize) -> ClickOutcome {
        match self.selected {
            None => {
                // Only a tower with blocks can become the selection.
                if self.towers[i].is_empty() {
                    ClickOutcome::Ignored
                } else {
                    self.towers[i].set_selected(true);
                    self.selected = Some(i);
                    ClickOutcome::Selected(i)
                }
            }
            Some(s) if s == i => {
                self.towers[i].set_selected(false);
                self.selected = None;
                ClickOutcome::Deselected(i)
            }
            Some(s) => self.try_move(s, i),
        }
    }

    /// Attempt to move the top block of `from` onto `to`.
    ///
    /// Legal iff the destination is empty or its top block is strictly larger.
    /// An illegal attempt still clears the selection; that is deliberate,
    /// inherited behavior, not a bug to fix (pinned by test).
    fn try_move(&mut self, from: usize, to: usize) -> ClickOutcome {
        let outcome = match (self.towers[from].top(), self.towers[to].top()) {
            (Some(block), dest_top) if dest_top.map_or(true, |t| block.id < t.id) => {
                self.towers[to].push(block);
                self.towers[from].pop_top();
                self.history.push(Move::new(from, to));
                ClickOutcome::Moved { from, to }
            }
            (Some(_), _) => ClickOutcome::Rejected { from, to },
            // Unreachable while the selection invariant holds: only non-empty
            // towers are selectable.
            (None, _) => ClickOutcome::Ignored,
        };

        self.towers[from].set_selected(false);
        self.selected = None;
        outcome
    }

    /// Revert the most recent move: the exact inverse transfer, with no
    /// legality check. Undo always reconstructs a previously legal position,
    /// so re-checking would be redundant (pinned by test).
    fn undo_last(&mut self) -> ClickOutcome {
        if let Some(i) = self.selected.take() {
            self.towers[i].set_selected(false);
        }

        let Some(last) = self.history.pop() else {
            return ClickOutcome::Ignored;
        };

        if let Some(block) = self.towers[last.to()].top() {
            self.towers[last.from()].push(block);
            self.towers[last.to()].pop_top();
        }

        ClickOutcome::Undone {
            from: last.from(),
            to: last.to(),
        }
    }

    fn last_tower_full(&self) -> bool {
        match self.towers.last() {
            Some(tower) => tower.len() == self.blocks.len(),
            None => false,
        }
    }
}
