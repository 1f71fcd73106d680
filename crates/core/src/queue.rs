//! Queue module - uniform random piece generation with a fixed lookahead
//!
//! Every piece is drawn uniformly from the seven kinds (no bag). The queue
//! always holds exactly [`QUEUE_LEN`] pending kinds: drawing pops the front and
//! appends a fresh one in the same call, so it is never observably short.
//!
//! The random source is supplied by the caller on every call that needs it,
//! which keeps the queue itself plain data.

use rand::Rng;

use crate::pieces::Tetromino;
use crate::types::{PieceKind, QUEUE_LEN};

/// Uniformly pick one of the seven kinds
pub fn random_kind<R: Rng>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())]
}

/// Fixed-depth lookahead of upcoming pieces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    pending: [PieceKind; QUEUE_LEN],
}

impl PieceQueue {
    /// Fill a new queue with [`QUEUE_LEN`] random kinds
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut pending = [PieceKind::I; QUEUE_LEN];
        for slot in &mut pending {
            *slot = random_kind(rng);
        }
        Self { pending }
    }

    /// Build a queue with known contents
    pub fn from_kinds(pending: [PieceKind; QUEUE_LEN]) -> Self {
        Self { pending }
    }

    /// Peek at the next piece without removing it
    pub fn peek(&self) -> PieceKind {
        self.pending[0]
    }

    /// Upcoming kinds, front first
    pub fn pending(&self) -> &[PieceKind; QUEUE_LEN] {
        &self.pending
    }

    /// Take the front kind and append a newly generated one
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> PieceKind {
        let next = self.pending[0];
        self.pending.rotate_left(1);
        self.pending[QUEUE_LEN - 1] = random_kind(rng);
        next
    }

    /// Draw the next piece positioned at its spawn anchor
    pub fn next_piece<R: Rng>(&mut self, rng: &mut R) -> Tetromino {
        Tetromino::new(self.draw(rng))
    }
}
