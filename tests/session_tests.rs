//! Clock-driven sessions and the headless runner

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tetrimino_break::core::{GameConfig, GameState};
use tetrimino_break::engine::Session;
use tetrimino_break::runner::run_headless;
use tetrimino_break::types::{GameAction, Phase, GRAVITY_INTERVAL_MS, TICK_MS};

#[test]
fn test_piece_falls_under_gravity_alone() {
    let mut session = Session::new(GameConfig::with_seed(10)).unwrap();
    let start_y = session.game().active().unwrap().y;

    let frames_per_tick = GRAVITY_INTERVAL_MS.div_ceil(TICK_MS);
    for _ in 0..frames_per_tick * 3 {
        session.update(TICK_MS);
    }
    assert_eq!(session.game().active().unwrap().y, start_y + 3);
}

#[test]
fn test_idle_session_eventually_locks() {
    let mut session = Session::new(GameConfig::with_seed(10)).unwrap();
    let mut locked = false;
    for _ in 0..40 {
        if session.update(GRAVITY_INTERVAL_MS).locked {
            locked = true;
            break;
        }
    }
    assert!(locked);
    let game = session.game();
    assert_eq!(game.objectives_remaining(), game.board().count_objectives());
    assert!(game.is_finished() || game.active().is_some());
}

#[test]
fn test_custom_gravity_interval() {
    let config = GameConfig {
        gravity_interval_ms: 50,
        ..GameConfig::with_seed(2)
    };
    let mut session = Session::new(config).unwrap();
    assert_eq!(session.clock().interval_ms(), 50);
    assert!(!session.update(TICK_MS * 3).ticked);
    assert!(session.update(TICK_MS).ticked);
}

#[test]
fn test_actions_between_ticks() {
    let mut session = Session::new(GameConfig::with_seed(12)).unwrap();
    let x = session.game().active().unwrap().x;
    assert!(session.apply_action(GameAction::MoveLeft));
    session.update(TICK_MS);
    assert_eq!(session.game().active().unwrap().x, x - 1);
}

#[test]
fn test_headless_runs_stay_consistent() {
    for seed in 0..8 {
        let config = GameConfig {
            bombs_enabled: seed % 2 == 0,
            ..GameConfig::with_seed(seed)
        };
        let outcome = run_headless(config, 5000).unwrap();
        let snap = outcome.snapshot;
        assert!(!(snap.game_over && snap.game_won));
        if outcome.frames < 5000 {
            assert!(snap.phase.is_terminal());
        }
        if snap.game_won {
            assert_eq!(snap.objectives_remaining, 0);
        }
        assert_ne!(snap.phase, Phase::Locking);
    }
}

#[test]
fn test_session_around_injected_game() {
    let config = GameConfig {
        gravity_interval_ms: 200,
        ..GameConfig::default()
    };
    let game = GameState::with_rng(config.clone(), ChaCha8Rng::seed_from_u64(77)).unwrap();
    let expected = game.snapshot();

    let mut session = Session::from_game(game);
    assert_eq!(session.clock().interval_ms(), 200);
    assert_eq!(session.game().snapshot(), expected);

    let start_y = session.game().active().unwrap().y;
    assert!(session.update(200).ticked);
    assert_eq!(session.game().active().unwrap().y, start_y + 1);
}
