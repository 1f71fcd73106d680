//! Read-only view of a session for rendering collaborators
//!
//! A snapshot is plain `Copy` data; [`GameState::snapshot_into`](crate::GameState::snapshot_into)
//! refills an existing one without allocating.

use crate::bomb::Explosion;
use crate::pieces::{HeldPiece, Shape, Tetromino};
use crate::types::{PieceKind, Phase, BOARD_HEIGHT, BOARD_WIDTH, QUEUE_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Grid codes: 0 empty, 1..=7 piece kinds, 8 objective, 9 armed bomb
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub hold: Option<HeldPiece>,
    pub next_queue: [PieceKind; QUEUE_LEN],
    pub can_hold: bool,
    pub score: u32,
    pub objectives_remaining: u32,
    pub lines: u32,
    pub phase: Phase,
    pub game_over: bool,
    pub game_won: bool,
    pub explosion: Option<Explosion>,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Falling
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            hold: None,
            next_queue: [PieceKind::I; QUEUE_LEN],
            can_hold: true,
            score: 0,
            objectives_remaining: 0,
            lines: 0,
            phase: Phase::Falling,
            game_over: false,
            game_won: false,
            explosion: None,
            episode_id: 0,
        }
    }
}
