//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or filled with a color tag
//! (a piece kind or the objective marker). Uses a flat array for cache locality
//! and zero allocation; row removal is an in-place shift, never a reallocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! A parallel bomb layer marks armed objective cells. It is independent of the
//! cell color and moves together with the cells when rows shift.

use arrayvec::ArrayVec;

use crate::pieces::{Shape, Tetromino};
use crate::types::{Block, Cell, BOARD_HEIGHT, BOARD_WIDTH, BOMB_CODE};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// One flag per board row
pub type RowMask = [bool; BOARD_HEIGHT as usize];

/// Outcome of removing a set of rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRemoval {
    /// Removed row indices (pre-removal coordinates), top to bottom
    pub rows: ArrayVec<u8, { BOARD_HEIGHT as usize }>,
    /// Objective cells that were in the removed rows
    pub objectives: u32,
    /// Armed bombs that were in the removed rows
    pub bombs: u32,
}

impl RowRemoval {
    pub fn count(&self) -> u32 {
        self.rows.len() as u32
    }
}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
    /// Armed bomb flags, same indexing as `cells`
    bombs: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            bombs: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                if cell != Some(Block::Objective) {
                    self.bombs[idx] = false;
                }
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Whether `shape` anchored at (x, y) fits.
    ///
    /// Fails if any occupied cell leaves `[0, width)` horizontally, reaches
    /// `y >= height`, or overlaps a filled cell at `y >= 0`. Cells above the
    /// board (`y < 0`) are only checked horizontally.
    pub fn is_valid_placement(&self, shape: &Shape, x: i8, y: i8) -> bool {
        // i16 so anchors near the i8 limits cannot overflow.
        shape.minos().all(|(dx, dy)| {
            let px = x as i16 + dx as i16;
            let py = y as i16 + dy as i16;
            if px < 0 || px >= BOARD_WIDTH as i16 || py >= BOARD_HEIGHT as i16 {
                return false;
            }
            py < 0 || !self.is_occupied(px as i8, py as i8)
        })
    }

    /// Copy a piece's occupied cells into the board with its color.
    ///
    /// No validation: overlapping cells are overwritten and cells outside the
    /// grid are dropped. Callers are expected to have validated the placement.
    pub fn lock_piece(&mut self, piece: &Tetromino) {
        let block = Some(Block::Piece(piece.kind));
        for (px, py) in piece.cells() {
            self.set(px, py, block);
        }
    }

    /// Check if a row is completely filled (any color)
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Detect every full row in one top-to-bottom pass
    pub fn full_rows(&self) -> RowMask {
        let mut mask = [false; BOARD_HEIGHT as usize];
        for (y, flag) in mask.iter_mut().enumerate() {
            *flag = self.is_row_full(y);
        }
        mask
    }

    /// Remove every row flagged in `mask` and shift the survivors down.
    ///
    /// Objective cells and bombs in the removed rows are tallied before
    /// removal. Uses a two-pointer scan from the bottom with `copy_within`,
    /// then blanks the rows left open at the top.
    pub fn remove_rows(&mut self, mask: &RowMask) -> RowRemoval {
        let mut removal = RowRemoval::default();
        for (y, _) in mask.iter().enumerate().filter(|(_, m)| **m) {
            removal.rows.push(y as u8);
            let start = y * BOARD_WIDTH as usize;
            for i in start..start + BOARD_WIDTH as usize {
                if self.cells[i] == Some(Block::Objective) {
                    removal.objectives += 1;
                }
                if self.bombs[i] {
                    removal.bombs += 1;
                }
            }
        }

        if removal.rows.is_empty() {
            return removal;
        }

        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if mask[read_y] {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                let dst_start = write_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, dst_start);
                self.bombs
                    .copy_within(src_start..src_start + width, dst_start);
            }
        }

        self.cells[..write_y * width].fill(None);
        self.bombs[..write_y * width].fill(false);

        removal
    }

    /// Clear all full rows, shifting the rest down
    pub fn clear_full_rows(&mut self) -> RowRemoval {
        let mask = self.full_rows();
        self.remove_rows(&mask)
    }

    /// Exact count of objective cells on the board
    pub fn count_objectives(&self) -> u32 {
        self.cells
            .iter()
            .filter(|c| **c == Some(Block::Objective))
            .count() as u32
    }

    /// Count of filled cells of any color
    pub fn count_filled(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_some()).count() as u32
    }

    /// Arm the objective cell at (x, y) as a bomb.
    /// Returns false if the cell is not an objective block.
    pub fn arm_bomb(&mut self, x: i8, y: i8) -> bool {
        match Self::index(x, y) {
            Some(idx) if self.cells[idx] == Some(Block::Objective) => {
                self.bombs[idx] = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_bomb(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_some_and(|idx| self.bombs[idx])
    }

    pub fn bomb_count(&self) -> u32 {
        self.bombs.iter().filter(|b| **b).count() as u32
    }

    /// Whether row `y` holds an armed bomb
    pub fn row_has_bomb(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        self.bombs[start..start + BOARD_WIDTH as usize]
            .iter()
            .any(|b| *b)
    }

    /// Cells of row `y`
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the board as grid codes: 0 empty, 1..=7 pieces, 8 objective, 9 armed bomb
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, code) in row.iter_mut().enumerate() {
                let idx = y * width + x;
                *code = match self.cells[idx] {
                    None => 0,
                    Some(_) if self.bombs[idx] => BOMB_CODE,
                    Some(block) => block.code(),
                };
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.bombs.fill(false);
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut board = Self::new();
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                board.cells[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn fill_row(board: &mut Board, y: i8, block: Block) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(block));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_remove_rows_tallies_objectives_and_bombs() {
        let mut board = Board::new();
        fill_row(&mut board, 19, Block::Piece(PieceKind::I));
        board.set(2, 19, Some(Block::Objective));
        board.set(7, 19, Some(Block::Objective));
        assert!(board.arm_bomb(7, 19));

        let removal = board.clear_full_rows();
        assert_eq!(removal.rows.as_slice(), &[19]);
        assert_eq!(removal.objectives, 2);
        assert_eq!(removal.bombs, 1);
        assert_eq!(board.count_filled(), 0);
        assert_eq!(board.bomb_count(), 0);
    }

    #[test]
    fn test_bomb_layer_shifts_with_rows() {
        let mut board = Board::new();
        board.set(4, 10, Some(Block::Objective));
        assert!(board.arm_bomb(4, 10));
        fill_row(&mut board, 19, Block::Piece(PieceKind::O));

        board.clear_full_rows();
        assert!(board.is_bomb(4, 11));
        assert!(!board.is_bomb(4, 10));
        assert_eq!(board.get(4, 11), Some(Some(Block::Objective)));
    }

    #[test]
    fn test_arm_bomb_requires_objective() {
        let mut board = Board::new();
        assert!(!board.arm_bomb(0, 0));
        board.set(0, 0, Some(Block::Piece(PieceKind::T)));
        assert!(!board.arm_bomb(0, 0));
    }

    #[test]
    fn test_overwriting_bomb_cell_disarms_it() {
        let mut board = Board::new();
        board.set(3, 3, Some(Block::Objective));
        board.arm_bomb(3, 3);
        board.set(3, 3, Some(Block::Piece(PieceKind::L)));
        assert!(!board.is_bomb(3, 3));
    }

    #[test]
    fn test_write_u8_grid_codes() {
        let mut board = Board::new();
        board.set(0, 0, Some(Block::Piece(PieceKind::I)));
        board.set(1, 0, Some(Block::Objective));
        board.set(2, 0, Some(Block::Objective));
        board.arm_bomb(2, 0);

        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);
        assert_eq!(&grid[0][..4], &[1, 8, BOMB_CODE, 0]);
    }

    #[test]
    fn test_from_cells() {
        let mut cells_2d = vec![vec![None; 10]; 20];
        cells_2d[5][3] = Some(Block::Piece(PieceKind::O));
        cells_2d[10][7] = Some(Block::Objective);

        let board = Board::from_cells(cells_2d);
        assert_eq!(board.get(3, 5), Some(Some(Block::Piece(PieceKind::O))));
        assert_eq!(board.count_objectives(), 1);
    }
}
