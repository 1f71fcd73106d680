//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, so the
//! engine, the runner, and any rendering collaborator can share them.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: `x = BOARD_WIDTH / 2 - shape_width / 2`, `y = 0`
//!
//! # Objective Layout
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `OBJECTIVE_ROWS` | 6 | Depth of the band holding pre-placed objective blocks |
//! | `MIN_OBJECTIVES` | 12 | Minimum number of objective blocks per session |
//! | `CLUSTER_COUNT` | 3 | Number of objective clusters |
//! | `CLUSTER_SIZE` | 3 | Cluster window size |
//!
//! # Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LINE_CLEAR_POINTS` | 100 | Points per row removed by an ordinary clear |
//! | `BOMB_CLEAR_POINTS` | 200 | Points per row removed by a bomb explosion |
//!
//! # Examples
//!
//! ```
//! use tetrimino_break_types::{Block, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! assert_eq!(Block::Piece(PieceKind::O).code(), 2);
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of upcoming pieces held in the lookahead queue
pub const QUEUE_LEN: usize = 5;

/// Runner frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default gravity interval (1000ms = one row per second)
pub const GRAVITY_INTERVAL_MS: u32 = 1000;

/// Depth of the objective band at the bottom of the board
pub const OBJECTIVE_ROWS: u8 = 6;

/// Minimum number of objective blocks generated per session
pub const MIN_OBJECTIVES: u8 = 12;

/// Number of objective clusters
pub const CLUSTER_COUNT: usize = 3;

/// Cluster window size; offsets span `-(CLUSTER_SIZE / 2 + 1)..=CLUSTER_SIZE / 2`
pub const CLUSTER_SIZE: i8 = 3;

/// Placement probability at a cluster center
pub const CLUSTER_CENTER_PROBABILITY: f64 = 0.6;

/// Probability lost per unit of Manhattan distance from the cluster center
pub const CLUSTER_FALLOFF: f64 = 0.15;

/// One bomb is armed per this many objective blocks (at least one)
pub const BOMB_RATIO: u32 = 7;

/// Points per row removed by an ordinary clear
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Points per row removed by a bomb explosion
pub const BOMB_CLEAR_POINTS: u32 = 200;

/// Rows removed by one explosion (the bomb row and the one below it)
pub const EXPLOSION_ROWS: u8 = 2;

/// Base radius of the explosion effect, in cells
pub const EXPLOSION_RADIUS: u8 = 2;

/// Number of frames the explosion effect lasts
pub const EXPLOSION_FRAMES: u8 = 8;

/// Column the explosion effect is centered on
pub const EXPLOSION_CENTER_COL: u8 = 5;

/// 24-bit color of objective blocks
pub const OBJECTIVE_RGB: (u8, u8, u8) = (100, 100, 200);


/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and one fixed color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrimino_break_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Index in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// The fixed color bound to this kind
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0, 255, 255),
            PieceKind::O => (255, 255, 0),
            PieceKind::T => (255, 0, 255),
            PieceKind::S => (0, 255, 0),
            PieceKind::Z => (255, 0, 0),
            PieceKind::J => (0, 0, 255),
            PieceKind::L => (255, 165, 0),
        }
    }
}

/// Color tag of a filled cell
///
/// Cells written by locking a piece carry that piece's kind. Objective blocks
/// are pre-placed at session start and must all be cleared to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    Piece(PieceKind),
    Objective,
}

impl Block {
    /// Compact grid code: 1..=7 for piece kinds, 8 for objective blocks.
    /// 0 is reserved for empty cells.
    pub fn code(&self) -> u8 {
        match self {
            Block::Piece(kind) => kind.index() as u8 + 1,
            Block::Objective => 8,
        }
    }

    pub fn is_objective(&self) -> bool {
        matches!(self, Block::Objective)
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Block::Piece(kind) => kind.rgb(),
            Block::Objective => OBJECTIVE_RGB,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Block)`: Filled cell with its color tag
pub type Cell = Option<Block>;

/// Grid code used in snapshots for an objective block armed as a bomb
pub const BOMB_CODE: u8 = 9;

/// Game actions produced by the input collaborator
///
/// Each action maps to one engine command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; never locks
    SoftDrop,
    /// Drop piece as far as it goes and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Hold current piece (if available)
    Hold,
    /// Discard the session and start a new one
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrimino_break_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateCcw"), Some(GameAction::RotateCcw));
    /// assert_eq!(GameAction::from_str("pause"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "hold" => Some(GameAction::Hold),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Hold => "hold",
            GameAction::Restart => "restart",
        }
    }
}

/// Drop / gravity state machine
///
/// `Falling` is the resting state between operations. `Locking`, `Cleared` and
/// `SpawnCheck` are passed through within a single tick. `Exploding` only occurs
/// with bombs enabled and lasts until the explosion effect finishes.
/// `GameOver` and `Won` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Falling,
    Locking,
    Cleared,
    SpawnCheck,
    Exploding,
    GameOver,
    Won,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameOver | Phase::Won)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Falling => "falling",
            Phase::Locking => "locking",
            Phase::Cleared => "cleared",
            Phase::SpawnCheck => "spawnCheck",
            Phase::Exploding => "exploding",
            Phase::GameOver => "gameOver",
            Phase::Won => "won",
        }
    }
}
