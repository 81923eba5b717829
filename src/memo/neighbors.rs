// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precomputed neighbor lookup table.
//!
//! For every (cell, direction) pair the table holds the coordinates of the
//! neighbor in that direction, with both axes wrapped modulo N (toroidal
//! boundary). Recomputing odd-q offsets and wrapping on every access is
//! cheap but happens on the scramble hot path several times per attempted
//! move; the dense table turns it into a single indexed load.
//!
//! The table is built once per grid size. Using a table against a grid of a
//! different size is a programming error, guarded by debug assertions
//! rather than runtime `Result`s.

use crate::geometry::{size_in_bounds, Cell, Direction, NDIRECTIONS};

/// Dense (cell, direction) → wrapped neighbor lookup for one grid size.
#[derive(Debug, Clone)]
pub struct NeighborTable {
    size: usize,
    /// Row-per-cell layout: entry `cell_index * 6 + direction`.
    table: Vec<Cell>,
}

impl NeighborTable {
    /// Build the table for an N×N torus.
    ///
    /// The caller validates N; see [`crate::state::GridState::initialize`].
    pub fn build(size: usize) -> Self {
        debug_assert!(size_in_bounds(size), "unsupported grid size {}", size);

        let n = size as i32;
        let mut table = Vec::with_capacity(size * size * NDIRECTIONS);
        for col in 0..n {
            for row in 0..n {
                let odd_column = col % 2 == 1;
                for dir in Direction::ALL {
                    let (dc, dr) = dir.offset(odd_column);
                    let wrapped_col = (col + dc).rem_euclid(n);
                    let wrapped_row = (row + dr).rem_euclid(n);
                    table.push(Cell::new(wrapped_col as u16, wrapped_row as u16));
                }
            }
        }
        Self { size, table }
    }

    /// The grid side this table was built for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The wrapped neighbor of `cell` in direction `dir`.
    pub fn neighbor(&self, cell: Cell, dir: Direction) -> Cell {
        debug_assert!(
            (cell.col() as usize) < self.size && (cell.row() as usize) < self.size,
            "cell {} outside {}x{} table",
            cell,
            self.size,
            self.size
        );
        let cell_index = cell.col() as usize * self.size + cell.row() as usize;
        self.table[cell_index * NDIRECTIONS + dir.index() as usize]
    }

    /// The direction that steps from `from` to `to`, if they are adjacent.
    ///
    /// Linear scan of the six directions; used by the scramble engine to
    /// validate candidate edges.
    pub fn direction_between(&self, from: Cell, to: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.neighbor(from, dir) == to)
    }
}
