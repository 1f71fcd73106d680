//! Tetrimino Break (workspace facade crate).
//!
//! Re-exports the member crates under `tetrimino_break::{core,engine,types}`
//! and hosts the headless runner used by the default binary.

pub use tetrimino_break_core as core;
pub use tetrimino_break_engine as engine;
pub use tetrimino_break_types as types;

pub mod runner;
