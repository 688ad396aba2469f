//! Character-grid rasterizer
//!
//! Samples the world at the center of each cell. Obstacles render as `#`,
//! the flyer as `@` (drawn over obstacles), followed by a status line.

use super::Renderer;
use crate::consts::*;
use crate::sim::{GamePhase, Snapshot};

const EMPTY: char = ' ';
const OBSTACLE: char = '#';
const FLYER: char = '@';

/// Renders frames into an in-memory string
#[derive(Debug, Clone)]
pub struct TextRenderer {
    cols: usize,
    rows: usize,
    frame: String,
    frames_drawn: u64,
}

impl TextRenderer {
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            frame: String::with_capacity((cols + 1) * (rows + 1)),
            frames_drawn: 0,
        }
    }

    /// The most recently drawn frame
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Character for the world pixel at (`px`, `py`)
    fn sample(frame: &Snapshot, px: f32, py: f32) -> char {
        let flyer = &frame.flyer;
        let flyer_left = FLYER_X as f32;
        if px >= flyer_left
            && px < flyer_left + FLYER_SIZE as f32
            && py >= flyer.y
            && py < flyer.bottom()
        {
            return FLYER;
        }

        let blocked = frame.obstacles.iter().any(|slot| {
            px >= slot.x as f32
                && px < slot.right() as f32
                && (py < slot.gap_offset as f32 || py >= slot.gap_bottom() as f32)
        });
        if blocked { OBSTACLE } else { EMPTY }
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, frame: &Snapshot) {
        let cell_w = SCREEN_WIDTH as f32 / self.cols as f32;
        let cell_h = SCREEN_HEIGHT as f32 / self.rows as f32;

        self.frame.clear();
        for row in 0..self.rows {
            let py = (row as f32 + 0.5) * cell_h;
            for col in 0..self.cols {
                let px = (col as f32 + 0.5) * cell_w;
                self.frame.push(Self::sample(frame, px, py));
            }
            self.frame.push('\n');
        }

        self.frame.push_str(&format!(
            "Score: {}  Best: {}",
            frame.score, frame.best_score
        ));
        if frame.phase == GamePhase::GameOver {
            self.frame.push_str("  GAME OVER");
        }
        self.frames_drawn += 1;
    }
}
