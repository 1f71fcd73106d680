//! Scoring module - flat per-row scoring
//!
//! Ordinary clears award [`LINE_CLEAR_POINTS`] per removed row. Rows removed by a
//! bomb explosion award double. There are no levels, combos, or drop bonuses.

use crate::types::{BOMB_CLEAR_POINTS, LINE_CLEAR_POINTS};

/// How a set of rows was removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearKind {
    Line,
    Bomb,
}

impl ClearKind {
    pub fn points_per_row(self) -> u32 {
        match self {
            ClearKind::Line => LINE_CLEAR_POINTS,
            ClearKind::Bomb => BOMB_CLEAR_POINTS,
        }
    }
}

/// Points for removing `rows` rows
pub fn calculate_score(rows: u32, kind: ClearKind) -> u32 {
    rows.saturating_mul(kind.points_per_row())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score() {
        assert_eq!(calculate_score(0, ClearKind::Line), 0);
        assert_eq!(calculate_score(1, ClearKind::Line), 100);
        assert_eq!(calculate_score(4, ClearKind::Line), 400);
    }

    #[test]
    fn test_bomb_clear_score_is_double() {
        assert_eq!(calculate_score(2, ClearKind::Bomb), 400);
        assert_eq!(calculate_score(1, ClearKind::Bomb), 200);
    }
}
