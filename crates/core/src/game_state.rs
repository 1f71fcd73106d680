//! Game state module - manages the complete game session
//!
//! This module ties together the board, the piece queue, the hold slot and
//! scoring, and runs the drop state machine:
//!
//! ```text
//! Falling --(tick fails to move)--> Locking --> Cleared --> SpawnCheck --> Falling
//!                                                  |            |
//!                                                  |            +--> GameOver
//!                                                  +--> Won
//!                                                  +--> Exploding --(effect done)--> SpawnCheck
//! ```
//!
//! `Exploding` is only reachable with bombs enabled. Once the session reaches
//! `GameOver` or `Won` every command is a no-op until [`GameState::reset`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::board::{Board, RowRemoval};
use crate::bomb::{self, Explosion};
use crate::config::{ConfigError, GameConfig, HoldPolicy};
use crate::layout::generate_initial_layout;
use crate::pieces::{HeldPiece, Tetromino};
use crate::queue::PieceQueue;
use crate::scoring::{calculate_score, ClearKind};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, PieceKind, Phase, BOARD_HEIGHT, QUEUE_LEN};

/// Complete game session
///
/// Generic over the random source so tests and tools can inject their own;
/// the default is a seeded [`ChaCha8Rng`].
#[derive(Debug, Clone)]
pub struct GameState<R = ChaCha8Rng> {
    config: GameConfig,
    rng: R,
    board: Board,
    queue: PieceQueue,
    active: Option<Tetromino>,
    hold: Option<HeldPiece>,
    can_hold: bool,
    score: u32,
    /// Objective blocks left; kept equal to a board recount after every clear.
    objectives: u32,
    lines: u32,
    phase: Phase,
    explosion: Option<Explosion>,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
}

impl GameState<ChaCha8Rng> {
    /// Create a new session seeded from `config.seed`
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameState<R> {
    /// Create a new session drawing all randomness from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::deal(config, rng))
    }

    /// Build a session from an already validated configuration
    fn deal(config: GameConfig, mut rng: R) -> Self {
        let mut board = Board::new();
        let objectives = deal_board(&config, &mut board, &mut rng);
        let mut queue = PieceQueue::new(&mut rng);
        let active = queue.next_piece(&mut rng);

        Self {
            config,
            rng,
            board,
            queue,
            active: Some(active),
            hold: None,
            can_hold: true,
            score: 0,
            objectives,
            lines: 0,
            phase: Phase::Falling,
            explosion: None,
            episode_id: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn hold_piece(&self) -> Option<HeldPiece> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn next_queue(&self) -> &[PieceKind; QUEUE_LEN] {
        self.queue.pending()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn objectives_remaining(&self) -> u32 {
        self.objectives
    }

    /// Total rows removed this session, by any clearing path
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn game_won(&self) -> bool {
        self.phase == Phase::Won
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn explosion(&self) -> Option<Explosion> {
        self.explosion
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.hold = self.hold;
        out.next_queue = *self.queue.pending();
        out.can_hold = self.can_hold;
        out.score = self.score;
        out.objectives_remaining = self.objectives;
        out.lines = self.lines;
        out.phase = self.phase;
        out.game_over = self.game_over();
        out.game_won = self.game_won();
        out.explosion = self.explosion;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Whether move/rotate/hold/drop commands currently have any effect
    fn accepts_input(&self) -> bool {
        self.phase == Phase::Falling && self.active.is_some()
    }

    fn fits(&self, piece: &Tetromino) -> bool {
        self.board.is_valid_placement(&piece.shape, piece.x, piece.y)
    }

    /// Translate the active piece. Applies only if the new placement is valid.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let (Some(x), Some(y)) = (active.x.checked_add(dx), active.y.checked_add(dy)) else {
            return false;
        };
        let moved = Tetromino { x, y, ..active };
        if !self.fits(&moved) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Rotate the active piece in place. No kicks: if the rotated matrix does
    /// not fit at the same anchor the piece keeps its previous shape.
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = Tetromino {
            shape: active.shape.rotated(clockwise),
            ..active
        };
        if !self.fits(&rotated) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Swap the active piece with the hold slot (or stash it and draw from the
    /// queue when the slot is empty). Allowed once per locked piece.
    pub fn hold(&mut self) -> bool {
        if !self.accepts_input() || !self.can_hold {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let next = match self.hold.replace(HeldPiece::from(active)) {
            Some(held) => Tetromino::spawn_with(held.kind, held.shape),
            None => self.queue.next_piece(&mut self.rng),
        };
        self.active = Some(next);
        self.can_hold = false;

        if self.config.hold_policy == HoldPolicy::Strict && !self.fits(&next) {
            info!(kind = next.kind.as_str(), "held piece does not fit; game over");
            self.phase = Phase::GameOver;
        }
        true
    }

    /// One gravity step. Moves the active piece down, or when it cannot move
    /// runs the lock / clear / spawn sequence. Returns true if a lock occurred.
    pub fn tick(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        if self.try_move(0, 1) {
            return false;
        }
        self.resolve_landing();
        true
    }

    /// Manual single step down. Never locks, even when blocked.
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Move down until blocked, then resolve the landing exactly once
    pub fn hard_drop(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        while self.try_move(0, 1) {}
        self.resolve_landing();
        true
    }

    /// Advance the explosion effect by one frame. When it finishes, the next
    /// piece is spawned. Returns true on the frame the effect completes.
    pub fn advance_effect(&mut self) -> bool {
        if self.phase != Phase::Exploding {
            return false;
        }
        let finished = self.explosion.as_mut().map_or(true, Explosion::advance);
        if finished {
            self.explosion = None;
            self.run_phases(Phase::SpawnCheck);
        }
        finished
    }

    /// Discard the session and deal a new one, continuing the random stream
    pub fn reset(&mut self) {
        self.board.clear();
        self.objectives = deal_board(&self.config, &mut self.board, &mut self.rng);
        self.queue = PieceQueue::new(&mut self.rng);
        self.active = Some(self.queue.next_piece(&mut self.rng));
        self.hold = None;
        self.can_hold = true;
        self.score = 0;
        self.lines = 0;
        self.phase = Phase::Falling;
        self.explosion = None;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.try_rotate(true),
            GameAction::RotateCcw => self.try_rotate(false),
            GameAction::Hold => self.hold(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    fn resolve_landing(&mut self) {
        self.run_phases(Phase::Locking);
    }

    /// Drive the state machine from `start` until it settles
    fn run_phases(&mut self, start: Phase) {
        self.phase = start;
        while let Some(next) = self.step_phase() {
            self.phase = next;
        }
    }

    /// One state machine transition. `None` once a resting state is reached.
    fn step_phase(&mut self) -> Option<Phase> {
        match self.phase {
            Phase::Locking => {
                if let Some(piece) = self.active.take() {
                    self.board.lock_piece(&piece);
                }
                Some(Phase::Cleared)
            }
            Phase::Cleared => Some(self.clear_rows()),
            Phase::SpawnCheck => Some(self.spawn_next()),
            Phase::Falling | Phase::Exploding | Phase::GameOver | Phase::Won => None,
        }
    }

    fn clear_rows(&mut self) -> Phase {
        let mut exploded = false;
        if self.config.bombs_enabled {
            let bomb_row = (0..BOARD_HEIGHT as usize)
                .find(|&y| self.board.is_row_full(y) && self.board.row_has_bomb(y));
            if let Some(row) = bomb_row {
                let removal = bomb::explode(&mut self.board, row as u8);
                self.account(&removal, ClearKind::Bomb);
                self.explosion = Some(Explosion::new(row as u8));
                exploded = true;
            }
        }

        let removal = self.board.clear_full_rows();
        self.account(&removal, ClearKind::Line);
        self.reconcile_objectives();

        if self.objectives == 0 {
            info!(score = self.score, "all objective blocks cleared");
            return Phase::Won;
        }
        if exploded {
            return Phase::Exploding;
        }
        Phase::SpawnCheck
    }

    fn account(&mut self, removal: &RowRemoval, kind: ClearKind) {
        if removal.rows.is_empty() {
            return;
        }
        self.score += calculate_score(removal.count(), kind);
        self.lines += removal.count();
        self.objectives = self.objectives.saturating_sub(removal.objectives);
        debug!(
            rows = removal.count(),
            objectives_cleared = removal.objectives,
            remaining = self.objectives,
            ?kind,
            "rows cleared"
        );
    }

    /// Overwrite the tracked objective count with an exact recount
    fn reconcile_objectives(&mut self) {
        let actual = self.board.count_objectives();
        if actual != self.objectives {
            warn!(
                tracked = self.objectives,
                actual, "objective count drifted; using recount"
            );
            self.objectives = actual;
        }
    }

    fn spawn_next(&mut self) -> Phase {
        let piece = self.queue.next_piece(&mut self.rng);
        self.active = Some(piece);
        self.can_hold = true;

        if !self.fits(&piece) {
            info!(kind = piece.kind.as_str(), score = self.score, "spawn blocked; game over");
            return Phase::GameOver;
        }
        Phase::Falling
    }
}

impl Default for GameState {
    fn default() -> Self {
        let config = GameConfig::default();
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::deal(config, rng)
    }
}

/// Generate the objective layout (and bombs, when enabled) on an empty board
fn deal_board<R: Rng>(config: &GameConfig, board: &mut Board, rng: &mut R) -> u32 {
    let objectives =
        generate_initial_layout(board, rng, config.start_row(), config.min_objectives);
    if config.bombs_enabled {
        bomb::arm_bombs(board, rng, objectives);
    }
    objectives
}
