//! Pieces module - tetromino shape matrices and rotation
//!
//! A shape is a small rectangular binary matrix. Rotation is a pure geometric
//! transform of that matrix: clockwise transposes and reverses rows, so the
//! result has rows and columns swapped. There are no rotation-state tables and
//! no wall kicks; the caller validates the rotated matrix at the unchanged anchor.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest extent of any tetromino matrix in either direction
pub const MAX_SHAPE_DIM: usize = 4;

/// Rectangular binary matrix of occupied cells (at most 4x4, stored inline)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from row slices of 0/1 values.
    ///
    /// Panics if the matrix is empty, ragged, or larger than 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM, "bad shape height");
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE_DIM, "bad shape width");

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged shape");
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether cell (row, col) is occupied. Out-of-matrix cells are empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Occupied cells as `(col, row)` offsets from the matrix's top-left corner.
    pub fn minos(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Rotate 90° clockwise: transpose, then reverse the rows.
    pub fn rotated_cw(&self) -> Self {
        let rows = self.cols as usize;
        let cols = self.rows as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, out_row) in cells.iter_mut().enumerate().take(rows) {
            for (j, out) in out_row.iter_mut().enumerate().take(cols) {
                *out = self.cells[cols - 1 - j][i];
            }
        }
        Self {
            rows: rows as u8,
            cols: cols as u8,
            cells,
        }
    }

    /// Rotate 90° counter-clockwise (inverse of [`Shape::rotated_cw`]).
    pub fn rotated_ccw(&self) -> Self {
        let rows = self.cols as usize;
        let cols = self.rows as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, out_row) in cells.iter_mut().enumerate().take(rows) {
            for (j, out) in out_row.iter_mut().enumerate().take(cols) {
                *out = self.cells[j][rows - 1 - i];
            }
        }
        Self {
            rows: rows as u8,
            cols: cols as u8,
            cells,
        }
    }

    pub fn rotated(&self, clockwise: bool) -> Self {
        if clockwise {
            self.rotated_cw()
        } else {
            self.rotated_ccw()
        }
    }

    /// Spawn column for this shape: centered by integer division.
    pub fn spawn_x(&self) -> i8 {
        (BOARD_WIDTH / 2) as i8 - (self.cols / 2) as i8
    }
}

/// Canonical spawn matrix for a piece kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}

/// Active falling piece: matrix, color (its kind), and top-left anchor in board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino with its canonical matrix at the spawn anchor
    pub fn new(kind: PieceKind) -> Self {
        Self::spawn_with(kind, spawn_shape(kind))
    }

    /// Place an arbitrary matrix (e.g. a held, rotated one) at the spawn anchor
    pub fn spawn_with(kind: PieceKind, shape: Shape) -> Self {
        Self {
            kind,
            shape,
            x: shape.spawn_x(),
            y: 0,
        }
    }

    /// Board cells covered by this piece
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .minos()
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}

/// Piece parked in the hold slot: matrix and color only, no position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeldPiece {
    pub kind: PieceKind,
    pub shape: Shape,
}

impl From<Tetromino> for HeldPiece {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
        }
    }
}
