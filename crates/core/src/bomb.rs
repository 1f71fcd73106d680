//! Bomb module - opt-in explosive objective blocks
//!
//! A fraction of the objective blocks can be armed as bombs. Exploding a row
//! removes it together with the row below it and scores double. The explosion
//! raises an [`Explosion`] effect token that a renderer animates frame by frame.
//!
//! Nothing here runs unless the session enables bombs.

use arrayvec::ArrayVec;
use rand::Rng;
use tracing::debug;

use crate::board::{Board, RowRemoval};
use crate::types::{
    Block, BOARD_HEIGHT, BOARD_WIDTH, BOMB_RATIO, EXPLOSION_CENTER_COL, EXPLOSION_FRAMES,
    EXPLOSION_RADIUS, EXPLOSION_ROWS,
};

const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Number of bombs armed for a given objective count: `max(1, objectives / 7)`
pub fn bomb_budget(objectives: u32) -> u32 {
    (objectives / BOMB_RATIO).max(1)
}

/// Arm randomly chosen objective cells as bombs. Returns how many were armed.
pub fn arm_bombs<R: Rng>(board: &mut Board, rng: &mut R, objectives: u32) -> u32 {
    let mut candidates: ArrayVec<(i8, i8), BOARD_SIZE> = ArrayVec::new();
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            if board.get(x, y) == Some(Some(Block::Objective)) && !board.is_bomb(x, y) {
                candidates.push((x, y));
            }
        }
    }

    let mut armed = 0;
    for _ in 0..bomb_budget(objectives) {
        if candidates.is_empty() {
            break;
        }
        let i = rng.random_range(0..candidates.len());
        let (x, y) = candidates.swap_remove(i);
        if board.arm_bomb(x, y) {
            armed += 1;
        }
    }
    debug!(armed, objectives, "bombs armed");
    armed
}

/// Remove `row` and the row below it (clamped to the board)
pub fn explode(board: &mut Board, row: u8) -> RowRemoval {
    let mut mask = [false; BOARD_HEIGHT as usize];
    let end = (row as usize + EXPLOSION_ROWS as usize).min(BOARD_HEIGHT as usize);
    for flag in mask.iter_mut().take(end).skip(row as usize) {
        *flag = true;
    }
    let removal = board.remove_rows(&mask);
    debug!(row, rows = removal.count(), objectives = removal.objectives, "bomb exploded");
    removal
}

/// Timed visual effect raised by an explosion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Explosion {
    pub row: u8,
    pub col: u8,
    pub radius: u8,
    pub frames: u8,
    pub current_frame: u8,
}

impl Explosion {
    pub fn new(row: u8) -> Self {
        Self {
            row,
            col: EXPLOSION_CENTER_COL,
            radius: EXPLOSION_RADIUS,
            frames: EXPLOSION_FRAMES,
            current_frame: 0,
        }
    }

    /// Radius to draw at the current frame; grows from `radius` to `2 * radius`
    pub fn display_radius(&self) -> f32 {
        self.radius as f32 * (self.current_frame as f32 / self.frames as f32 + 1.0)
    }

    /// Advance one frame. Returns true once the effect has finished.
    pub fn advance(&mut self) -> bool {
        self.current_frame = self.current_frame.saturating_add(1);
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.current_frame >= self.frames
    }
}
