//! Piece matrix and queue tests

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tetrimino_break::core::{spawn_shape, PieceQueue, Shape, Tetromino};
use tetrimino_break::types::{PieceKind, QUEUE_LEN};

fn cells(shape: &Shape) -> Vec<(i8, i8)> {
    let mut v: Vec<_> = shape.minos().collect();
    v.sort();
    v
}

#[test]
fn test_every_kind_has_four_minos() {
    for kind in PieceKind::ALL {
        assert_eq!(spawn_shape(kind).minos().count(), 4, "{:?}", kind);
    }
}

#[test]
fn test_t_rotates_clockwise() {
    let t = spawn_shape(PieceKind::T);
    let cw = t.rotated_cw();
    assert_eq!((cw.rows(), cw.cols()), (3, 2));
    // [1,0]
    // [1,1]
    // [1,0]
    assert_eq!(cells(&cw), vec![(0, 0), (0, 1), (0, 2), (1, 1)]);
    assert!(cw.is_filled(1, 1));
    assert!(!cw.is_filled(0, 1));
    // Outside the 3x2 matrix.
    assert!(!cw.is_filled(0, 2));
    assert!(!cw.is_filled(3, 0));
}

#[test]
fn test_t_rotates_counter_clockwise() {
    let ccw = spawn_shape(PieceKind::T).rotated_ccw();
    // [0,1]
    // [1,1]
    // [0,1]
    assert_eq!(cells(&ccw), vec![(0, 1), (1, 0), (1, 1), (1, 2)]);
}

#[test]
fn test_four_rotations_return_to_start() {
    for kind in PieceKind::ALL {
        let start = spawn_shape(kind);
        let mut shape = start;
        for _ in 0..4 {
            shape = shape.rotated_cw();
        }
        assert_eq!(shape, start, "{:?}", kind);
    }
}

#[test]
fn test_o_is_rotation_invariant() {
    let o = spawn_shape(PieceKind::O);
    assert_eq!(o.rotated_cw(), o);
    assert_eq!(o.rotated_ccw(), o);
}

#[test]
fn test_spawn_anchor_is_centered() {
    assert_eq!(Tetromino::new(PieceKind::I).x, 3);
    assert_eq!(Tetromino::new(PieceKind::O).x, 4);
    assert_eq!(Tetromino::new(PieceKind::J).x, 4);
    assert!(PieceKind::ALL.iter().all(|k| Tetromino::new(*k).y == 0));
}

#[test]
fn test_queue_draw_shifts_and_refills() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut queue = PieceQueue::from_kinds([
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
    ]);

    assert_eq!(queue.draw(&mut rng), PieceKind::I);
    assert_eq!(
        &queue.pending()[..QUEUE_LEN - 1],
        &[PieceKind::O, PieceKind::T, PieceKind::S, PieceKind::Z]
    );
    assert_eq!(queue.peek(), PieceKind::O);
}

#[test]
fn test_queue_is_seed_deterministic() {
    let draw_all = |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut queue = PieceQueue::new(&mut rng);
        (0..50).map(|_| queue.draw(&mut rng)).collect::<Vec<_>>()
    };
    assert_eq!(draw_all(5), draw_all(5));
}
