// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DYNAMIC (mutable) state.
//!
//! Tier 2 of the two-tier memory model: the per-cell door flags that the
//! scramble engine mutates in place, paired with the organized start
//! patterns used to (re)seed them. A [`GridState`] owns the MEMO neighbor
//! table for its size, so resizing is simply a fresh `initialize` call.

pub mod grid;
pub mod pattern;

pub use grid::GridState;
pub use pattern::{ParsePatternError, Pattern};
