// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Scramble engine: invariant-preserving random edge rewrites.
//!
//! One move samples two existing connections (u,v) and (x,y), removes both,
//! and reconnects the four cells with one of the two alternative pairings,
//! (u,x)+(v,y) or (u,y)+(v,x), chosen by coin flip. Every cell loses one
//! door and gains one, so degree 2 survives each accepted move and the
//! graph stays a disjoint union of loops; what changes is the global cycle
//! structure (loops merge and split over time).
//!
//! A sampled move is rejected without touching the grid when:
//! - the two edges share an endpoint (the rewrite is undefined), or
//! - the chosen pairing would join cells that are not lattice-adjacent
//!   (edges only exist between geometric neighbors), or
//! - a candidate edge is already an open connection (no multi-edges).
//!
//! Rejection is the chain's expected failure path: the caller-facing
//! [`scramble`] resamples until the requested number of moves succeeded or
//! an attempt budget of [`ATTEMPT_FACTOR`]× the request is exhausted. The
//! budget counts every attempt, valid or not, so a call terminates even
//! from states where most samples are rejected.
//!
//! The random source is injected, never global; tests drive the engine with
//! a seeded `SmallRng` for reproducibility.

pub mod statistics;

pub use statistics::{Rejection, ScrambleStats};

use crate::errors::GridError;
use crate::geometry::{Cell, Direction};
use crate::state::GridState;
use rand::Rng;

/// Attempt budget per requested step.
///
/// 20 attempts per requested success keeps termination bounded while being
/// generous enough that a well-mixed grid (acceptance well above 5%)
/// virtually always reaches its quota.
pub const ATTEMPT_FACTOR: u64 = 20;

/// One sampled connection: the cell it was sampled from, the door chosen,
/// and the neighbor behind it.
#[derive(Debug, Clone, Copy)]
struct SampledEdge {
    from: Cell,
    dir: Direction,
    to: Cell,
}

/// Sample a uniformly random cell, then one of its two doors uniformly.
///
/// # Panics
///
/// Panics if the sampled cell is not degree 2; a grid in that state is a
/// programming error upstream, not a recoverable condition.
fn sample_edge<R: Rng + ?Sized>(grid: &GridState, rng: &mut R) -> SampledEdge {
    let size = grid.size() as u16;
    let from = Cell::new(rng.random_range(0..size), rng.random_range(0..size));
    let (low_door, high_door) = grid
        .doors(from)
        .as_pair()
        .unwrap_or_else(|| panic!("cell {} is not degree 2", from));
    let dir = if rng.random_bool(0.5) { low_door } else { high_door };
    SampledEdge {
        from,
        dir,
        to: grid.neighbor(from, dir),
    }
}

/// Attempt a single edge-swap move.
///
/// On success the grid has been rewritten (two connections removed, two
/// added). On rejection the grid is untouched and the reason is returned.
pub fn attempt_swap<R: Rng + ?Sized>(
    grid: &mut GridState,
    rng: &mut R,
) -> Result<(), Rejection> {
    let first = sample_edge(grid, rng);
    let second = sample_edge(grid, rng);

    let (u, v) = (first.from, first.to);
    let (x, y) = (second.from, second.to);
    if u == x || u == y || v == x || v == y {
        return Err(Rejection::SharedEndpoint);
    }

    // Exactly one pairing per attempt, chosen uniformly: connect u to `a`
    // and v to `b`, where (a, b) is (x, y) or (y, x).
    let (a, b) = if rng.random_bool(0.5) { (x, y) } else { (y, x) };

    let dir_ua = grid
        .direction_between(u, a)
        .ok_or(Rejection::NotAdjacent)?;
    let dir_vb = grid
        .direction_between(v, b)
        .ok_or(Rejection::NotAdjacent)?;

    if grid.has_connection(u, dir_ua) || grid.has_connection(v, dir_vb) {
        return Err(Rejection::EdgeExists);
    }

    grid.remove_connection(first.from, first.dir);
    grid.remove_connection(second.from, second.dir);
    grid.add_connection(u, dir_ua);
    grid.add_connection(v, dir_vb);

    debug_assert!(
        [u, v, x, y].iter().all(|&c| grid.doors(c).len() == 2),
        "swap left a rewired cell off degree 2"
    );
    Ok(())
}

/// Perform up to `steps` successful rewrites, resampling rejected moves.
///
/// Returns the number of rewrites that succeeded, which may be less than
/// `steps` if the [`ATTEMPT_FACTOR`]× attempt budget runs out first. A
/// request for zero steps is a no-op returning 0. Fails with
/// [`GridError::InvalidArgument`] for negative `steps`, before any mutation
/// or RNG draw.
pub fn scramble<R: Rng + ?Sized>(
    grid: &mut GridState,
    steps: i64,
    rng: &mut R,
) -> Result<u64, GridError> {
    scramble_with_stats(grid, steps, rng).map(|stats| stats.accepted)
}

/// [`scramble`], returning the full attempt/rejection breakdown.
pub fn scramble_with_stats<R: Rng + ?Sized>(
    grid: &mut GridState,
    steps: i64,
    rng: &mut R,
) -> Result<ScrambleStats, GridError> {
    if steps < 0 {
        return Err(GridError::InvalidArgument { steps });
    }
    let steps = steps as u64;
    let budget = steps.saturating_mul(ATTEMPT_FACTOR);

    let mut stats = ScrambleStats::new();
    while stats.accepted < steps && stats.attempts < budget {
        stats.record(attempt_swap(grid, rng));
    }
    Ok(stats)
}
