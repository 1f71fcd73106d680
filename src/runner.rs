//! Headless runner: plays a seeded session with scripted random input.
//!
//! Useful as a soak test for the engine and as a reproducible trace source:
//! the same seed and frame budget always produce the same outcome.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::core::{GameConfig, GameSnapshot};
use crate::engine::Session;
use crate::types::{GameAction, Phase, TICK_MS};

/// Frames simulated when `--frames` is not given (about ten minutes).
pub const DEFAULT_FRAMES: u32 = 37_500;

/// Chance per frame that the scripted player presses something.
const INPUT_PROBABILITY: f64 = 0.2;

const SCRIPTED_ACTIONS: [GameAction; 7] = [
    GameAction::MoveLeft,
    GameAction::MoveRight,
    GameAction::SoftDrop,
    GameAction::HardDrop,
    GameAction::RotateCw,
    GameAction::RotateCcw,
    GameAction::Hold,
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunArgs {
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
    pub frames: Option<u32>,
}

pub fn parse_run_args(args: &[String]) -> Result<RunArgs> {
    let mut out = RunArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                out.seed = Some(
                    v.parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--config" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                out.config = Some(PathBuf::from(v));
            }
            "--frames" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --frames"))?;
                out.frames = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --frames value: {}", v))?,
                );
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(out)
}

/// Resolve the session configuration. A `--seed` flag overrides the file.
pub fn load_config(args: &RunArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GameConfig::from_json_str(&json)
                .with_context(|| format!("loading config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub frames: u32,
    pub locks: u32,
    pub snapshot: GameSnapshot,
}

/// Simulate up to `frames` frames, stopping early when the session ends.
pub fn run_headless(config: GameConfig, frames: u32) -> Result<RunOutcome> {
    // Input stream is independent of the game stream so both stay reproducible.
    let mut input_rng = ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(1));
    let mut session = Session::new(config)?;
    let mut locks = 0u32;
    let mut frame = 0u32;

    while frame < frames && !session.game().is_finished() {
        let pressed = input_rng.random::<f64>() < INPUT_PROBABILITY;
        if pressed && session.game().phase() == Phase::Falling {
            let action = SCRIPTED_ACTIONS[input_rng.random_range(0..SCRIPTED_ACTIONS.len())];
            let score_before = session.game().score();
            session.apply_action(action);
            if action == GameAction::HardDrop {
                locks += 1;
            }
            if session.game().score() != score_before {
                debug!(frame, score = session.game().score(), "rows cleared");
            }
        }
        if session.update(TICK_MS).locked {
            locks += 1;
        }
        frame += 1;
    }

    let snapshot = session.game().snapshot();
    info!(
        frames = frame,
        locks,
        score = snapshot.score,
        lines = snapshot.lines,
        objectives = snapshot.objectives_remaining,
        phase = snapshot.phase.as_str(),
        "run finished"
    );
    Ok(RunOutcome {
        frames: frame,
        locks,
        snapshot,
    })
}
