// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Markov-chain scrambling of loop configurations on a toroidal hex lattice.
//!
//! The crate maintains a 2-regular graph (every cell has exactly two open
//! connections) embedded in an N×N flat-topped hexagonal grid with periodic
//! boundaries, perturbs it with local invariant-preserving edge swaps, and
//! decomposes it into its disjoint loops on demand.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed data that never changes for a given grid size:
//! - Odd-q offset tables for the six hex directions
//! - The neighbor table mapping (cell, direction) to the wrapped neighbor
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! State that changes as the simulation runs:
//! - Per-cell door bitsets ([`DoorSet`]), always mutated in symmetric pairs
//!   so connections stay undirected
//!
//! # Invariants
//!
//! Three structural properties hold after initialization and after every
//! scramble call:
//! - every cell has exactly two open doors;
//! - a door toward a neighbor is mirrored by the neighbor's door back;
//! - the open connections partition all N² cells into disjoint simple
//!   cycles (a 2-factor of the lattice).
//!
//! The scramble engine preserves them move by move; [`find_loops`] checks
//! the consequences defensively and reports a broken grid as
//! [`GridError::InternalConsistency`].
//!
//! # Example
//!
//! ```
//! use hex_loops::{find_loops, scramble, GridState};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut grid = GridState::initialize(10)?;
//! let mut rng = SmallRng::seed_from_u64(42);
//!
//! let accepted = scramble(&mut grid, 500, &mut rng)?;
//! assert!(accepted <= 500);
//!
//! let loops = find_loops(&grid)?;
//! let total: usize = loops.iter().map(|l| l.len()).sum();
//! assert_eq!(total, 100); // every cell on exactly one loop
//! # Ok::<(), hex_loops::GridError>(())
//! ```
//!
//! # Concurrency
//!
//! A [`GridState`] is a plain owned value with no interior locking. One
//! logical writer at a time; callers serving concurrent requests against a
//! shared grid must serialize access externally.

pub mod errors;
pub mod geometry;
pub mod loops;
pub mod memo;
pub mod scramble;
pub mod state;

// Re-export commonly used types
pub use errors::GridError;
pub use geometry::{Cell, Direction, DoorSet, MAX_GRID_SIZE, MIN_GRID_SIZE};
pub use loops::{find_loops, loop_length_counts, Loop};
pub use memo::NeighborTable;
pub use scramble::{
    attempt_swap, scramble, scramble_with_stats, Rejection, ScrambleStats, ATTEMPT_FACTOR,
};
pub use state::{GridState, Pattern};
