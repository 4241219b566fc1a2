//! Layout module - screen-space regions for towers and buttons
//!
//! [`Layout::compute`] is a pure function from a viewport size to hit regions,
//! so the host environment can call it on construction and on every resize and
//! hand the result to [`crate::Game::on_resize`]. Resizes never touch puzzle
//! state; they only replace rectangles and the render scale.
//!
//! The geometry follows the original widget: a uniform scale fitted against a
//! reference viewport, towers dividing the full width evenly, tower tops a
//! scaled constant above the baseline at 80% of the viewport height, the
//! restart button centered at the bottom edge and the undo button tucked into
//! the top-right corner.

use arrayvec::ArrayVec;

use crate::types::{
    BoundingBox, BASELINE_FRACTION, BUTTON_HEIGHT, BUTTON_WIDTH, DESIGN_HEIGHT, DESIGN_WIDTH,
    EDGE_MARGIN, MAX_TOWERS, TOWER_HEIGHT,
};

/// Hit regions and render scale for one viewport size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    scale: f32,
    towers: ArrayVec<BoundingBox, MAX_TOWERS>,
    restart: BoundingBox,
    undo: BoundingBox,
}

impl Layout {
    /// Compute the layout for `tower_count` towers in a `width` x `height`
    /// viewport (terminal cells).
    pub fn compute(tower_count: usize, width: f32, height: f32) -> Self {
        let tower_count = tower_count.min(MAX_TOWERS).max(1);

        // Fit whichever axis is tighter so everything stays on screen.
        let scale = (width / DESIGN_WIDTH).min(height / DESIGN_HEIGHT);

        let tower_width = width / tower_count as f32;
        let baseline = height * BASELINE_FRACTION;
        let tower_height = TOWER_HEIGHT * scale;

        let mut towers = ArrayVec::new();
        for i in 0..tower_count {
            let mut bounds = BoundingBox::default();
            bounds.update(
                tower_width * i as f32,
                baseline - tower_height,
                tower_width,
                tower_height,
            );
            towers.push(bounds);
        }

        let button_w = BUTTON_WIDTH * scale;
        let button_h = BUTTON_HEIGHT * scale;
        let margin = EDGE_MARGIN * scale;

        let mut restart = BoundingBox::default();
        restart.update(
            (width - button_w) / 2.0,
            height - margin - button_h,
            button_w,
            button_h,
        );

        let mut undo = BoundingBox::default();
        undo.update(width - button_w - margin, margin, button_w, button_h);

        Self {
            scale,
            towers,
            restart,
            undo,
        }
    }

    /// Render scale factor; used only by drawing, never by game rules.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Tower hit regions, by tower index.
    pub fn towers(&self) -> &[BoundingBox] {
        &self.towers
    }

    pub fn restart(&self) -> &BoundingBox {
        &self.restart
    }

    pub fn undo(&self) -> &BoundingBox {
        &self.undo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_uses_tighter_axis() {
        let wide = Layout::compute(3, 240.0, 40.0);
        assert_eq!(wide.scale(), 1.0); // height-limited

        let tall = Layout::compute(3, 60.0, 400.0);
        assert_eq!(tall.scale(), 0.5); // width-limited
    }

    #[test]
    fn towers_tile_the_full_width() {
        let layout = Layout::compute(3, 120.0, 40.0);
        let towers = layout.towers();
        assert_eq!(towers.len(), 3);

        for (i, bounds) in towers.iter().enumerate() {
            assert_eq!(bounds.x(), 40.0 * i as f32);
            assert_eq!(bounds.width(), 40.0);
        }

        // Adjacent regions share an edge; strict containment keeps them
        // disjoint, so a click on the shared edge hits neither.
        assert!(!towers[0].contains(40.0, 25.0));
        assert!(!towers[1].contains(40.0, 25.0));
        assert!(towers[1].contains(40.5, 25.0));
    }

    #[test]
    fn towers_sit_on_the_baseline() {
        let layout = Layout::compute(3, 120.0, 40.0);
        let bounds = &layout.towers()[0];
        assert_eq!(bounds.y() + bounds.height(), 40.0 * BASELINE_FRACTION);
        assert_eq!(bounds.height(), TOWER_HEIGHT);
    }

    #[test]
    fn buttons_do_not_overlap_towers() {
        let layout = Layout::compute(3, 120.0, 40.0);

        // Undo lives above the tower tops, restart below the baseline.
        let tower_top = layout.towers()[0].y();
        assert!(layout.undo().y() + layout.undo().height() < tower_top);
        let baseline = layout.towers()[0].y() + layout.towers()[0].height();
        assert!(layout.restart().y() > baseline);
    }

    #[test]
    fn tower_count_is_capped_by_storage() {
        let layout = Layout::compute(100, 120.0, 40.0);
        assert_eq!(layout.towers().len(), MAX_TOWERS);
    }
}
