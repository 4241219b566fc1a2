//! Tower module - an ordered stack of blocks with a hit-test region
//!
//! The stack is stored bottom to top in a fixed-capacity vector, so the top
//! block is always the last element (O(1) access, no allocation). The stacking
//! invariant (strictly decreasing ids bottom to top) is maintained by
//! construction: [`Tower::push`] trusts its caller, and the game controller is
//! the sole legality enforcer. Pushing an out-of-order block is a caller bug.

use arrayvec::ArrayVec;

use crate::types::{Block, BoundingBox, MAX_BLOCKS};

/// An ordered stack-like region holding blocks, rendered as a vertical column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tower {
    /// Blocks bottom to top; the last element is the top of the stack.
    blocks: ArrayVec<Block, MAX_BLOCKS>,
    /// UI flag: this tower is the current selection.
    selected: bool,
    /// Screen-space hit region, rewritten by the layout path on resize.
    bounds: BoundingBox,
}

impl Tower {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `block` as the new top of this tower.
    ///
    /// Legality is the caller's responsibility; the tower itself never
    /// re-validates the stacking order.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// The block nearest the top, or `None` if the tower is empty.
    pub fn top(&self) -> Option<Block> {
        self.blocks.last().copied()
    }

    /// Remove the topmost block. Does nothing on an empty tower.
    pub fn pop_top(&mut self) -> Option<Block> {
        self.blocks.pop()
    }

    /// Empty the tower and clear its selection flag.
    pub fn reset(&mut self) {
        self.blocks.clear();
        self.selected = false;
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks in bottom-to-top order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn set_bounds(&mut self, bounds: BoundingBox) {
        self.bounds = bounds;
    }
}
