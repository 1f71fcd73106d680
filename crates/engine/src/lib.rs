//! Engine crate - drives a game session from an external clock.
//!
//! The core crate is purely turn-based: it only changes state when a command
//! is called. This crate adds the fixed-rate gravity clock and serializes
//! clock ticks with input actions.

pub mod clock;
pub mod session;

pub use tetrimino_break_core as core;
pub use tetrimino_break_types as types;

pub use clock::GravityClock;
pub use session::{FrameReport, Session};
