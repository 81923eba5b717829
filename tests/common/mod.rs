// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use hex_loops::{find_loops, Cell, GridState};
use std::collections::BTreeSet;

/// Assert the full set of structural properties of a valid grid: every
/// cell degree 2, every connection mirrored, and the loop decomposition
/// covering every cell exactly once.
pub fn assert_valid_grid(grid: &GridState) {
    grid.validate().expect("degree/symmetry check failed");

    let loops = find_loops(grid).expect("loop decomposition failed");
    let mut seen = BTreeSet::new();
    for l in &loops {
        for cell in l.iter() {
            assert!(seen.insert(cell), "cell {} appears on two loops", cell);
        }
    }
    let all: BTreeSet<Cell> = grid.cells().collect();
    assert_eq!(seen, all, "loops do not cover the whole grid");
}

/// Sorted multiset of loop lengths for the current grid.
pub fn loop_lengths(grid: &GridState) -> Vec<usize> {
    let mut lengths: Vec<usize> = find_loops(grid)
        .expect("loop decomposition failed")
        .iter()
        .map(|l| l.len())
        .collect();
    lengths.sort_unstable();
    lengths
}

/// Snapshot of all door bitsets, for bit-for-bit comparisons.
pub fn door_snapshot(grid: &GridState) -> Vec<u8> {
    grid.cells().map(|cell| grid.doors(cell).bits()).collect()
}
