//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and session state. It has no UI,
//! networking or I/O, and every random decision comes from a seedable source,
//! so the same seed always deals the same game.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with placement checks, row clearing and the bomb layer
//! - [`pieces`]: tetromino matrices and matrix rotation
//! - [`queue`]: uniform piece generation with a five-piece lookahead
//! - [`layout`]: clustered placement of the objective blocks
//! - [`bomb`]: opt-in bomb arming and double-row explosions
//! - [`scoring`]: flat per-row scoring
//! - [`game_state`]: the session and its drop state machine
//! - [`config`]: session configuration
//! - [`snapshot`]: read-only session view
//!
//! # Game Rules
//!
//! - The bottom of the board starts with at least 12 objective blocks.
//!   Clearing every one of them wins the game.
//! - Pieces are drawn uniformly at random; five upcoming pieces are visible.
//! - Rotation turns the piece matrix in place, with no wall kicks.
//! - Hold stores one piece and can be used once per locked piece.
//! - A piece locks only when a gravity tick or a hard drop cannot move it down.
//! - Each cleared row scores 100 points.
//!
//! # Example
//!
//! ```
//! use tetrimino_break_core::{GameConfig, GameState};
//! use tetrimino_break_types::GameAction;
//!
//! let mut game = GameState::new(GameConfig::with_seed(12345)).unwrap();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(!game.game_won());
//! assert_eq!(game.objectives_remaining(), game.board().count_objectives());
//! ```

pub mod board;
pub mod bomb;
pub mod config;
pub mod game_state;
pub mod layout;
pub mod pieces;
pub mod queue;
pub mod scoring;
pub mod snapshot;

pub use tetrimino_break_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, RowRemoval};
pub use bomb::{arm_bombs, explode, Explosion};
pub use config::{ConfigError, GameConfig, HoldPolicy};
pub use game_state::GameState;
pub use layout::generate_initial_layout;
pub use pieces::{spawn_shape, HeldPiece, Shape, Tetromino};
pub use queue::PieceQueue;
pub use scoring::{calculate_score, ClearKind};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
