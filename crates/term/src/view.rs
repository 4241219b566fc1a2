//! HanoiView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The view draws in the same screen space the game hit-tests in, so a region
//! on screen is exactly the region that reacts to clicks: tower posts and
//! bases inside the tower bounds, blocks as centered bars whose width grows
//! with their id, and the two buttons inside their own bounds.

use tui_hanoi_core::snapshot::{GameSnapshot, TowerSnapshot};
use tui_hanoi_types::{BoundingBox, GamePhase, Rgb};

use crate::fb::{FrameBuffer, Style};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the puzzle into a framebuffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HanoiView;

const BACKGROUND: Rgb = Rgb::new(15, 15, 20);
const SELECTED_TOWER: Rgb = Rgb::new(0, 255, 0);
const OCCUPIED_TOWER: Rgb = Rgb::new(82, 155, 210);
const EMPTY_TOWER: Rgb = Rgb::new(110, 110, 120);
const BUTTON_BG: Rgb = Rgb::new(90, 90, 90);
const BUTTON_BG_DISABLED: Rgb = Rgb::new(40, 40, 45);
const BUTTON_FG: Rgb = Rgb::new(255, 255, 255);
const BUTTON_FG_DISABLED: Rgb = Rgb::new(150, 150, 150);
const TEXT: Rgb = Rgb::new(230, 230, 230);

impl HanoiView {
    pub fn new() -> Self {
        Self
    }

    /// Render one frame of the current game state.
    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Style::new(TEXT, BACKGROUND));

        match snapshot.phase {
            GamePhase::Playing => {
                for tower in &snapshot.towers {
                    self.draw_tower(&mut fb, tower, snapshot.block_count);
                }
                self.draw_move_counter(&mut fb, viewport, "Moves", snapshot.move_count);
                self.draw_button(
                    &mut fb,
                    &snapshot.undo_bounds,
                    "Undo",
                    snapshot.move_count > 0,
                );
                self.draw_button(&mut fb, &snapshot.restart_bounds, "Restart", true);
            }
            GamePhase::Finished => {
                self.draw_move_counter(&mut fb, viewport, "Total Moves", snapshot.move_count);
                self.draw_button(&mut fb, &snapshot.restart_bounds, "Restart", true);
            }
        }

        fb
    }

    fn draw_tower(&self, fb: &mut FrameBuffer, tower: &TowerSnapshot, block_count: usize) {
        let bounds = &tower.bounds;
        let left = cell(bounds.x());
        let top = cell(bounds.y());
        let width = cell(bounds.width()).max(3);
        let bottom = cell(bounds.y() + bounds.height()).saturating_sub(1);
        let center = left + width / 2;

        let color = if tower.selected {
            SELECTED_TOWER
        } else if tower.blocks.is_empty() {
            EMPTY_TOWER
        } else {
            OCCUPIED_TOWER
        };
        let post = Style::new(color, BACKGROUND);

        // Post from the top of the region down to the base.
        for y in top..bottom {
            fb.put_char(center, y, '│', post);
        }

        // Base spans the region, with a small inset on each side.
        let inset = 1;
        let base_w = width.saturating_sub(inset * 2);
        fb.fill_rect(left + inset, bottom, base_w, 1, '─', post);

        // Widest block (plus breathing room) fits the base; each rank adds one
        // step of width on each side.
        let step = (base_w.saturating_sub(1)) / (block_count.max(1) as u16 + 1);
        for (row, block) in tower.blocks.iter().enumerate() {
            let y = match bottom.checked_sub(1 + row as u16) {
                Some(y) => y,
                None => break,
            };
            let bar_w = (step * block.id as u16).max(1);
            let bar_x = center.saturating_sub(bar_w / 2);
            let style = Style::new(block.color, BACKGROUND);
            fb.fill_rect(bar_x, y, bar_w, 1, '█', style);
        }
    }

    fn draw_move_counter(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        label: &str,
        count: usize,
    ) {
        let label_x = centered_x(viewport.width, label.chars().count() as u16);
        fb.put_str(label_x, 1, label, Style::new(TEXT, BACKGROUND).bold());

        let value = count.to_string();
        let value_x = centered_x(viewport.width, value.chars().count() as u16);
        fb.put_str(value_x, 2, &value, Style::new(TEXT, BACKGROUND));
    }

    fn draw_button(&self, fb: &mut FrameBuffer, bounds: &BoundingBox, label: &str, enabled: bool) {
        let x = cell(bounds.x());
        let y = cell(bounds.y());
        let w = cell(bounds.width()).max(label.chars().count() as u16);
        let h = cell(bounds.height()).max(1);

        let style = if enabled {
            Style::new(BUTTON_FG, BUTTON_BG).bold()
        } else {
            Style::new(BUTTON_FG_DISABLED, BUTTON_BG_DISABLED)
        };

        fb.fill_rect(x, y, w, h, ' ', style);
        let label_x = x + (w.saturating_sub(label.chars().count() as u16)) / 2;
        let label_y = y + h / 2;
        fb.put_str(label_x, label_y, label, style);
    }
}

/// Round a screen-space coordinate to a cell index.
fn cell(v: f32) -> u16 {
    v.round().max(0.0) as u16
}

fn centered_x(total: u16, len: u16) -> u16 {
    total.saturating_sub(len) / 2
}
