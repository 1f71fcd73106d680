//! Layout module - initial objective block placement
//!
//! Objective blocks are scattered in a band at the bottom of the board as a few
//! random clusters. Cells near a cluster center are more likely to be filled.
//! If the clusters come up short, extra empty cells in the band are sampled
//! until the minimum is reached or the band is full.

use arrayvec::ArrayVec;
use rand::Rng;
use tracing::{debug, warn};

use crate::board::Board;
use crate::types::{
    Block, BOARD_HEIGHT, BOARD_WIDTH, CLUSTER_CENTER_PROBABILITY, CLUSTER_COUNT, CLUSTER_FALLOFF,
    CLUSTER_SIZE,
};

const BAND_CAPACITY: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Placement probability for a cell at offset (dx, dy) from a cluster center
pub fn cluster_probability(dx: i8, dy: i8) -> f64 {
    let distance = (dx.unsigned_abs() + dy.unsigned_abs()) as f64;
    (CLUSTER_CENTER_PROBABILITY - CLUSTER_FALLOFF * distance).max(0.0)
}

/// Offsets covered by a cluster window, in each axis
fn window() -> std::ops::RangeInclusive<i8> {
    // Floor division, so a size-3 window spans -2..=1.
    (-CLUSTER_SIZE).div_euclid(2)..=CLUSTER_SIZE / 2
}

/// Fill objective blocks into rows `[start_row, BOARD_HEIGHT)` of `board`.
///
/// Cluster centers need `start_row + 1 <= BOARD_HEIGHT - 2`; configuration
/// validation enforces this. A band too shallow for any center leaves the
/// board untouched.
/// Returns the objective count, always equal to an exact recount of the board.
pub fn generate_initial_layout<R: Rng>(
    board: &mut Board,
    rng: &mut R,
    start_row: u8,
    min_objectives: u8,
) -> u32 {
    let start = start_row as i8;
    let height = BOARD_HEIGHT as i8;
    let width = BOARD_WIDTH as i8;
    let mut placed: u32 = 0;

    if start_row >= BOARD_HEIGHT - 2 {
        warn!(start_row, "objective band too shallow for cluster centers");
        return board.count_objectives();
    }

    let mut centers = [(0i8, 0i8); CLUSTER_COUNT];
    for center in &mut centers {
        let cx = rng.random_range(1..=width - 2);
        let cy = rng.random_range(start + 1..=height - 2);
        *center = (cx, cy);
    }

    for &(cx, cy) in &centers {
        for dy in window() {
            for dx in window() {
                let x = cx + dx;
                let y = cy + dy;
                if x < 0 || x >= width || y < start || y >= height {
                    continue;
                }
                if rng.random::<f64>() < cluster_probability(dx, dy) && !board.is_occupied(x, y) {
                    board.set(x, y, Some(Block::Objective));
                    placed += 1;
                }
            }
        }
    }
    debug!(?centers, placed, "objective clusters placed");

    if placed < min_objectives as u32 {
        let mut empty: ArrayVec<(i8, i8), BAND_CAPACITY> = ArrayVec::new();
        for y in start..height {
            for x in 0..width {
                if !board.is_occupied(x, y) {
                    empty.push((x, y));
                }
            }
        }

        while placed < min_objectives as u32 && !empty.is_empty() {
            let i = rng.random_range(0..empty.len());
            let (x, y) = empty.swap_remove(i);
            board.set(x, y, Some(Block::Objective));
            placed += 1;
        }
    }

    let actual = board.count_objectives();
    if actual != placed {
        warn!(tracked = placed, actual, "objective count mismatch after layout; using recount");
    }
    debug!(objectives = actual, "initial layout ready");
    actual
}
