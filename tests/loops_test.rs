// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Loop decomposition: canonical initialization, coverage, ordering.

mod common;

use common::assert_valid_grid;
use hex_loops::{
    find_loops, scramble, Cell, GridError, GridState, MAX_GRID_SIZE, MIN_GRID_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_canonical_initialization_at_every_supported_size() {
    for size in (MIN_GRID_SIZE..=MAX_GRID_SIZE).filter(|s| s % 2 == 0) {
        let grid = GridState::initialize(size).unwrap();
        let loops = find_loops(&grid).unwrap();
        assert_eq!(loops.len(), size, "N={} loop count", size);
        for l in &loops {
            assert_eq!(l.len(), size, "N={} loop length", size);
        }
        let total: usize = loops.iter().map(|l| l.len()).sum();
        assert_eq!(total, size * size);
    }
}

#[test]
fn test_bounds_rejection() {
    assert_eq!(
        GridState::initialize(4).unwrap_err(),
        GridError::InvalidSize { size: 4 }
    );
    assert_eq!(
        GridState::initialize(51).unwrap_err(),
        GridError::InvalidSize { size: 51 }
    );
    // Odd sizes break neighbor symmetry at the column seam.
    assert_eq!(
        GridState::initialize(9).unwrap_err(),
        GridError::InvalidSize { size: 9 }
    );
}

#[test]
fn test_decomposition_is_deterministic_for_a_given_state() {
    let mut grid = GridState::initialize(10).unwrap();
    let mut rng = SmallRng::seed_from_u64(6);
    scramble(&mut grid, 1500, &mut rng).unwrap();

    let first = find_loops(&grid).unwrap();
    let second = find_loops(&grid).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_loops_are_canonically_ordered_after_scrambling() {
    let mut grid = GridState::initialize(14).unwrap();
    let mut rng = SmallRng::seed_from_u64(21);
    scramble(&mut grid, 3000, &mut rng).unwrap();
    assert_valid_grid(&grid);

    let loops = find_loops(&grid).unwrap();
    let mut previous_start: Option<Cell> = None;
    for l in &loops {
        let start = l.cells()[0];
        // Each loop starts at its smallest cell...
        assert_eq!(start, l.iter().min().unwrap());
        // ...walks toward the smaller of its two neighbors...
        let (a, b) = grid.doors(start).as_pair().unwrap();
        let expected = grid.neighbor(start, a).min(grid.neighbor(start, b));
        assert_eq!(l.cells()[1], expected);
        // ...and loops are listed in ascending start order.
        if let Some(prev) = previous_start {
            assert!(prev < start);
        }
        previous_start = Some(start);
    }
}

#[test]
fn test_every_adjacent_pair_is_connected_after_scrambling() {
    let mut grid = GridState::initialize(10).unwrap();
    let mut rng = SmallRng::seed_from_u64(13);
    scramble(&mut grid, 2000, &mut rng).unwrap();

    for l in find_loops(&grid).unwrap() {
        let cells = l.cells();
        assert!(cells.len() >= 2);
        for i in 0..cells.len() {
            let next = cells[(i + 1) % cells.len()];
            let dir = grid
                .direction_between(cells[i], next)
                .expect("consecutive loop cells must be lattice-adjacent");
            assert!(grid.has_connection(cells[i], dir));
        }
    }
}
