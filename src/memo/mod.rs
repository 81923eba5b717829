// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! MEMO (immutable, precomputed) lookup data.
//!
//! Tier 1 of the two-tier memory model: data computed once when a grid of a
//! given size is created and read-only from then on. Currently this is the
//! neighbor table; it is rebuilt from scratch whenever the grid side N
//! changes and must never be used against a grid of a different size.

pub mod neighbors;

pub use neighbors::NeighborTable;
