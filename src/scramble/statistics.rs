// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Scramble statistics.
//!
//! Every attempted move either succeeds or is rejected for one of a small
//! set of reasons. The counts are kept in a flat array indexed by the
//! rejection discriminant so recording an outcome is a single increment.

use std::fmt;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// Why an attempted edge swap was rejected.
///
/// Rejection is the expected failure path of the Markov chain, resolved by
/// resampling within the same call; it is never surfaced as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro)]
#[repr(u8)]
pub enum Rejection {
    /// The two sampled edges share an endpoint.
    SharedEndpoint,
    /// The chosen pairing would connect cells that are not
    /// lattice-adjacent.
    NotAdjacent,
    /// A candidate edge already exists as an open connection.
    EdgeExists,
}

impl Rejection {
    /// All rejection reasons in discriminant order.
    pub const ALL: [Rejection; Rejection::COUNT] = [
        Rejection::SharedEndpoint,
        Rejection::NotAdjacent,
        Rejection::EdgeExists,
    ];

    fn label(self) -> &'static str {
        match self {
            Rejection::SharedEndpoint => "shared endpoint",
            Rejection::NotAdjacent => "not adjacent",
            Rejection::EdgeExists => "edge exists",
        }
    }
}

/// Outcome counts for one scramble call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScrambleStats {
    /// Attempts made, accepted or not. Bounded by the attempt budget.
    pub attempts: u64,
    /// Moves that were applied to the grid.
    pub accepted: u64,
    rejections: [u64; Rejection::COUNT],
}

impl ScrambleStats {
    pub fn new() -> Self {
        ScrambleStats::default()
    }

    /// Record one attempt outcome.
    pub fn record(&mut self, outcome: Result<(), Rejection>) {
        self.attempts += 1;
        match outcome {
            Ok(()) => self.accepted += 1,
            Err(reason) => self.rejections[reason as usize] += 1,
        }
    }

    /// Count of rejections for one reason.
    pub fn rejected(&self, reason: Rejection) -> u64 {
        self.rejections[reason as usize]
    }

    /// Total rejected attempts.
    pub fn total_rejected(&self) -> u64 {
        self.rejections.iter().sum()
    }

    /// Accepted moves as a fraction of attempts (0 when nothing was tried).
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.accepted as f64 / self.attempts as f64
        }
    }
}

impl fmt::Display for ScrambleStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} accepted / {} attempts ({:.1}%)",
            self.accepted,
            self.attempts,
            self.acceptance_rate() * 100.0
        )?;
        for reason in Rejection::ALL {
            let count = self.rejected(reason);
            if count > 0 {
                write!(f, ", {}: {}", reason.label(), count)?;
            }
        }
        Ok(())
    }
}
