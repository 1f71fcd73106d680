//! Headless Tetrimino Break runner (default binary).
//!
//! Usage: `tetrimino-break [--seed N] [--config PATH] [--frames N]`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tetrimino_break::runner::{load_config, parse_run_args, run_headless, DEFAULT_FRAMES};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_run_args(&args)?;
    let config = load_config(&args)?;
    tracing::info!(seed = config.seed, bombs = config.bombs_enabled, "starting session");

    let outcome = run_headless(config, args.frames.unwrap_or(DEFAULT_FRAMES))?;
    if outcome.snapshot.game_won {
        println!("won with score {}", outcome.snapshot.score);
    } else if outcome.snapshot.game_over {
        println!("game over with score {}", outcome.snapshot.score);
    } else {
        println!(
            "stopped after {} frames, score {}, {} objectives left",
            outcome.frames, outcome.snapshot.score, outcome.snapshot.objectives_remaining
        );
    }
    Ok(())
}
