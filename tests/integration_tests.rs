//! Game flow through the public API

use tetrimino_break::core::{GameConfig, GameSnapshot, GameState};
use tetrimino_break::types::{GameAction, Phase, BOMB_CODE};

fn game(seed: u64) -> GameState {
    GameState::new(GameConfig::with_seed(seed)).unwrap()
}

/// Objective count must always match the board.
fn assert_consistent(game: &GameState) {
    assert_eq!(game.objectives_remaining(), game.board().count_objectives());
    assert_eq!(game.game_over(), game.phase() == Phase::GameOver);
    assert_eq!(game.game_won(), game.phase() == Phase::Won);
    assert!(!(game.game_over() && game.game_won()));
}

#[test]
fn test_initial_layout_for_many_seeds() {
    for seed in 0..32 {
        let game = game(seed);
        assert_consistent(&game);
        assert!(game.objectives_remaining() >= 12);
        assert_eq!(game.phase(), Phase::Falling);
        assert_eq!(game.score(), 0);

        let snap = game.snapshot();
        // Objective band starts at row 14.
        for row in &snap.board[..14] {
            assert!(row.iter().all(|c| *c == 0));
        }
    }
}

#[test]
fn test_oversized_moves_are_rejected() {
    let mut game = game(1);
    let before = game.snapshot();
    assert!(!game.try_move(i8::MAX, 0));
    assert!(!game.try_move(i8::MIN, i8::MIN));
    assert!(!game.try_move(0, i8::MAX));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = game(2024);
    let mut b = game(2024);
    let script = [
        GameAction::MoveLeft,
        GameAction::RotateCw,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::MoveRight,
        GameAction::HardDrop,
    ];
    for action in script {
        assert_eq!(a.apply_action(action), b.apply_action(action));
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_stacking_in_center_ends_game() {
    let mut game = game(77);
    let mut drops = 0;
    while !game.is_finished() {
        assert!(game.hard_drop());
        assert_consistent(&game);
        drops += 1;
        assert!(drops < 200, "game never ended");
    }
    assert!(game.game_over());

    // Terminal: everything is a no-op.
    let frozen = game.snapshot();
    for action in [
        GameAction::MoveLeft,
        GameAction::RotateCcw,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Hold,
    ] {
        assert!(!game.apply_action(action));
    }
    assert!(!game.tick());
    assert_eq!(game.snapshot(), frozen);
}

#[test]
fn test_restart_after_game_over() {
    let mut game = game(8);
    while !game.is_finished() {
        game.hard_drop();
    }
    assert!(game.apply_action(GameAction::Restart));
    assert_eq!(game.phase(), Phase::Falling);
    assert_eq!(game.score(), 0);
    assert_eq!(game.episode_id(), 1);
    assert_consistent(&game);
}

#[test]
fn test_hold_then_second_hold_rejected() {
    let mut game = game(4);
    let first = game.active().unwrap().kind;
    let front = game.next_queue()[0];

    assert!(game.apply_action(GameAction::Hold));
    assert_eq!(game.hold_piece().map(|h| h.kind), Some(first));
    assert_eq!(game.active().unwrap().kind, front);
    assert!(!game.can_hold());
    assert!(!game.apply_action(GameAction::Hold));

    game.hard_drop();
    if !game.is_finished() {
        assert!(game.can_hold());
    }
}

#[test]
fn test_snapshot_into_reuses_buffer() {
    let game = game(6);
    let mut snap = GameSnapshot::default();
    game.snapshot_into(&mut snap);
    assert_eq!(snap, game.snapshot());
    assert!(snap.playable());
    assert_eq!(snap.next_queue, *game.next_queue());

    let objective_cells = snap.board.iter().flatten().filter(|c| **c == 8).count() as u32;
    assert_eq!(objective_cells, game.objectives_remaining());

    snap.clear();
    assert_eq!(snap, GameSnapshot::default());
    assert!(snap.active.is_none());
    assert!(snap.board.iter().flatten().all(|c| *c == 0));
}

#[test]
fn test_bombs_armed_when_enabled() {
    let config = GameConfig::from_json_str(r#"{"seed": 31, "bombsEnabled": true}"#).unwrap();
    let game = GameState::new(config).unwrap();
    let bombs = game.board().bomb_count();
    assert!(bombs >= 1);
    assert_eq!(bombs, (game.objectives_remaining() / 7).max(1));

    let snap = game.snapshot();
    let bomb_cells = snap.board.iter().flatten().filter(|c| **c == BOMB_CODE).count() as u32;
    assert_eq!(bomb_cells, bombs);
}

#[test]
fn test_no_bombs_by_default() {
    assert_eq!(game(31).board().bomb_count(), 0);
}
