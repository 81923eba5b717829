// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DYNAMIC (mutable) grid state.
//!
//! A [`GridState`] holds one [`DoorSet`] per cell plus the neighbor table
//! built for its size. All connection mutations are paired: opening or
//! closing the doorway from a cell toward direction `d` also flips the
//! opposite doorway on the table-neighbor, so connections are always
//! undirected edges and never one-sided.
//!
//! Degree-2 is a property of complete moves, not of individual toggles: a
//! caller removing one edge and adding another necessarily passes through a
//! degree-1 intermediate. The scramble engine is the only production writer
//! and restores degree-2 by construction; [`GridState::validate`] checks the
//! whole grid explicitly for tests and defect hunts.

use crate::errors::GridError;
use crate::geometry::{size_in_bounds, Cell, Direction, DoorSet};
use crate::memo::NeighborTable;
use crate::state::Pattern;

/// Mutable door flags for every cell of an N×N torus, plus the MEMO
/// neighbor table for that N.
///
/// Resizing is destructive by design: a new size means a fresh
/// [`GridState::initialize`] call, which rebuilds both tiers from scratch.
#[derive(Debug, Clone)]
pub struct GridState {
    size: usize,
    /// One DoorSet per cell, indexed `col * size + row`.
    doors: Vec<DoorSet>,
    neighbors: NeighborTable,
}

impl GridState {
    /// Build the canonical organized grid: N vertical loops of length N.
    ///
    /// Fails with [`GridError::InvalidSize`] unless `size` is even and
    /// within bounds.
    pub fn initialize(size: usize) -> Result<Self, GridError> {
        Self::with_pattern(size, Pattern::Vertical)
    }

    /// Build an organized grid with the given start pattern.
    pub fn with_pattern(size: usize, pattern: Pattern) -> Result<Self, GridError> {
        if !size_in_bounds(size) {
            return Err(GridError::InvalidSize { size });
        }
        let mut grid = Self {
            size,
            doors: vec![DoorSet::empty(); size * size],
            neighbors: NeighborTable::build(size),
        };
        grid.reset(pattern);
        Ok(grid)
    }

    /// Re-seed this grid with an organized pattern, keeping its size and
    /// neighbor table.
    pub fn reset(&mut self, pattern: Pattern) {
        let (a, b) = pattern.door_pair();
        self.doors.fill(DoorSet::pair(a, b));
    }

    /// The grid side N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N²).
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    fn index(&self, cell: Cell) -> usize {
        debug_assert!(
            (cell.col() as usize) < self.size && (cell.row() as usize) < self.size,
            "cell {} outside {}x{} grid",
            cell,
            self.size,
            self.size
        );
        cell.col() as usize * self.size + cell.row() as usize
    }

    /// The set of open doorways of a cell.
    pub fn doors(&self, cell: Cell) -> DoorSet {
        self.doors[self.index(cell)]
    }

    /// Whether the doorway from `cell` toward `dir` is open.
    pub fn has_connection(&self, cell: Cell, dir: Direction) -> bool {
        self.doors(cell).contains(dir)
    }

    /// The wrapped neighbor of `cell` in direction `dir`.
    pub fn neighbor(&self, cell: Cell, dir: Direction) -> Cell {
        self.neighbors.neighbor(cell, dir)
    }

    /// The direction from `from` to `to`, if they are lattice-adjacent.
    pub fn direction_between(&self, from: Cell, to: Cell) -> Option<Direction> {
        self.neighbors.direction_between(from, to)
    }

    /// Iterate over all cells in lexicographic (column, row) order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size as u16;
        (0..size).flat_map(move |col| (0..size).map(move |row| Cell::new(col, row)))
    }

    /// Flip the doorway from `cell` toward `dir`, and the opposite doorway
    /// on the neighbor.
    ///
    /// The pairing keeps connections undirected; it cannot keep every cell
    /// at degree 2 on its own. Callers must arrange toggles in pairs that
    /// restore degree 2 before the grid is read again.
    pub fn toggle_connection(&mut self, cell: Cell, dir: Direction) {
        let cell_index = self.index(cell);
        let neighbor = self.neighbors.neighbor(cell, dir);
        let neighbor_index = self.index(neighbor);
        self.doors[cell_index].toggle(dir);
        self.doors[neighbor_index].toggle(dir.opposite());
    }

    /// Open the connection from `cell` toward `dir` (both sides).
    pub(crate) fn add_connection(&mut self, cell: Cell, dir: Direction) {
        let cell_index = self.index(cell);
        let neighbor = self.neighbors.neighbor(cell, dir);
        let neighbor_index = self.index(neighbor);
        self.doors[cell_index].insert(dir);
        self.doors[neighbor_index].insert(dir.opposite());
    }

    /// Close the connection from `cell` toward `dir` (both sides).
    pub(crate) fn remove_connection(&mut self, cell: Cell, dir: Direction) {
        let cell_index = self.index(cell);
        let neighbor = self.neighbors.neighbor(cell, dir);
        let neighbor_index = self.index(neighbor);
        self.doors[cell_index].remove(dir);
        self.doors[neighbor_index].remove(dir.opposite());
    }

    /// Check the degree and symmetry properties over the whole grid.
    ///
    /// Reports the first offending cell as [`GridError::InternalConsistency`].
    /// O(N²); intended for tests and debugging, not the mutation path.
    pub fn validate(&self) -> Result<(), GridError> {
        for cell in self.cells() {
            let doors = self.doors(cell);
            if doors.len() != 2 {
                return Err(GridError::InternalConsistency { cell });
            }
            for dir in doors.iter() {
                let neighbor = self.neighbor(cell, dir);
                if !self.has_connection(neighbor, dir.opposite()) {
                    return Err(GridError::InternalConsistency { cell });
                }
            }
        }
        Ok(())
    }
}
