//! Session driver: one game plus its gravity clock
//!
//! Input actions and gravity ticks are applied one at a time, each running to
//! completion before the next, so a renderer reading between calls always sees
//! a consistent state.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::clock::GravityClock;
use crate::core::{ConfigError, GameConfig, GameSnapshot, GameState};
use crate::types::{GameAction, Phase};

/// What happened during one [`Session::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// A gravity tick ran this frame
    pub ticked: bool,
    /// A piece locked this frame
    pub locked: bool,
    /// The explosion effect finished this frame
    pub effect_finished: bool,
}

#[derive(Debug, Clone)]
pub struct Session<R = ChaCha8Rng> {
    game: GameState<R>,
    clock: GravityClock,
}

impl Session<ChaCha8Rng> {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let clock = GravityClock::new(config.gravity_interval_ms);
        Ok(Self {
            game: GameState::new(config)?,
            clock,
        })
    }
}

impl<R: Rng> Session<R> {
    pub fn from_game(game: GameState<R>) -> Self {
        let clock = GravityClock::new(game.config().gravity_interval_ms);
        Self { game, clock }
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    pub fn clock(&self) -> &GravityClock {
        &self.clock
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }

    /// Apply one input action. Restart also restarts the gravity clock.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let applied = self.game.apply_action(action);
        if action == GameAction::Restart {
            self.clock.reset();
            debug!(episode = self.game.episode_id(), "session restarted");
        }
        applied
    }

    /// Advance time by `elapsed_ms`.
    ///
    /// While an explosion effect is playing, every frame advances the effect
    /// instead of gravity. Terminal sessions do nothing.
    pub fn update(&mut self, elapsed_ms: u32) -> FrameReport {
        let mut report = FrameReport::default();
        match self.game.phase() {
            Phase::Exploding => {
                report.effect_finished = self.game.advance_effect();
                if report.effect_finished {
                    self.clock.reset();
                }
            }
            Phase::Falling => {
                if self.clock.advance(elapsed_ms) {
                    report.ticked = true;
                    report.locked = self.game.tick();
                }
            }
            _ => {}
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TICK_MS;

    #[test]
    fn test_gravity_moves_piece_once_per_interval() {
        let mut session = Session::new(GameConfig::with_seed(1)).unwrap();
        let y0 = session.game().active().unwrap().y;

        let mut frames = 0;
        while !session.update(TICK_MS).ticked {
            frames += 1;
            assert!(frames < 100, "gravity never fired");
        }
        assert_eq!(session.game().active().unwrap().y, y0 + 1);
    }

    #[test]
    fn test_restart_resets_clock() {
        let mut session = Session::new(GameConfig::with_seed(1)).unwrap();
        session.update(900);
        assert_eq!(session.clock().elapsed_ms(), 900);

        assert!(session.apply_action(GameAction::Restart));
        assert_eq!(session.clock().elapsed_ms(), 0);
        assert_eq!(session.game().episode_id(), 1);
    }

    #[test]
    fn test_terminal_session_ignores_time() {
        let mut session = Session::new(GameConfig::with_seed(9)).unwrap();
        // Stack pieces in the spawn column until the game ends.
        for _ in 0..200 {
            if session.game().is_finished() {
                break;
            }
            session.apply_action(GameAction::HardDrop);
        }
        assert!(session.game().is_finished());

        let before = session.game().snapshot();
        let report = session.update(5000);
        assert_eq!(report, FrameReport::default());
        assert_eq!(session.game().snapshot(), before);
    }
}
