// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Direction type for the six neighbor directions of a flat-topped hexagon.
//!
//! Directions are indexed 0..6 counter to the clock from North:
//!
//! ```text
//! 0: N    1: NE   2: SE   3: S    4: SW   5: NW
//! ```
//!
//! Opposite directions differ by 3, so `opposite` is index arithmetic and a
//! symmetric door pair is always `(d, d.opposite())`.
//!
//! The (Δcol, Δrow) offset to the neighbor in a direction depends on column
//! parity (odd-q offset layout: odd columns sit half a cell lower), which is
//! why [`Direction::offset`] takes the parity of the starting column.
//!
//! # Examples
//!
//! ```
//! use hex_loops::geometry::Direction;
//!
//! assert_eq!(Direction::North.opposite(), Direction::South);
//! assert_eq!(Direction::NorthEast.offset(false), (1, -1));
//! assert_eq!(Direction::NorthEast.offset(true), (1, 0));
//! ```

use std::fmt;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// One of the six neighbor directions on a flat-topped hexagon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    SouthEast = 2,
    South = 3,
    SouthWest = 4,
    NorthWest = 5,
}

/// Neighbor offsets for cells in even columns, indexed by direction.
const EVEN_COL_OFFSETS: [(i32, i32); 6] = [
    (0, -1),  // N
    (1, -1),  // NE
    (1, 0),   // SE
    (0, 1),   // S
    (-1, 0),  // SW
    (-1, -1), // NW
];

/// Neighbor offsets for cells in odd columns, indexed by direction.
const ODD_COL_OFFSETS: [(i32, i32); 6] = [
    (0, -1), // N
    (1, 0),  // NE
    (1, 1),  // SE
    (0, 1),  // S
    (-1, 1), // SW
    (-1, 0), // NW
];

impl Direction {
    /// All six directions in index order.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Get the direction's index in 0..6.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Try to convert an index in 0..6 back to a direction.
    pub fn try_from_index(index: u8) -> Option<Direction> {
        Direction::ALL.get(index as usize).copied()
    }

    /// Convert an index in 0..6 to a direction, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 6`.
    pub fn from_index(index: u8) -> Direction {
        Direction::try_from_index(index)
            .unwrap_or_else(|| panic!("Direction index out of range: {}", index))
    }

    /// The direction pointing back along this one.
    pub fn opposite(self) -> Direction {
        Direction::ALL[(self.index() as usize + 3) % 6]
    }

    /// The (Δcol, Δrow) offset to the neighbor in this direction.
    ///
    /// `odd_column` is the parity of the column the step starts from
    /// (odd-q offset layout).
    pub fn offset(self, odd_column: bool) -> (i32, i32) {
        if odd_column {
            ODD_COL_OFFSETS[self.index() as usize]
        } else {
            EVEN_COL_OFFSETS[self.index() as usize]
        }
    }

    /// Short compass label ("N", "NE", ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_index_round_trip() {
        for dir in Direction::iter() {
            assert_eq!(Direction::from_index(dir.index()), dir);
        }
        assert!(Direction::try_from_index(6).is_none());
    }

    #[test]
    #[should_panic(expected = "Direction index out of range")]
    fn test_from_index_out_of_range() {
        Direction::from_index(6);
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::iter() {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_opposite_pairs() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
        assert_eq!(Direction::SouthEast.opposite(), Direction::NorthWest);
    }

    #[test]
    fn test_offsets_negate_across_parity() {
        // Stepping d from an even column lands in an odd column (except for
        // N/S); the opposite step from there must undo both deltas.
        for dir in Direction::iter() {
            let (dc, dr) = dir.offset(false);
            let odd_landing = dc != 0; // column changed → parity flipped
            let (bc, br) = dir.opposite().offset(odd_landing);
            assert_eq!((dc + bc, dr + br), (0, 0), "direction {} does not invert", dir);

            let (dc, dr) = dir.offset(true);
            let even_landing = dc != 0;
            let (bc, br) = dir.opposite().offset(!even_landing);
            assert_eq!((dc + bc, dr + br), (0, 0), "direction {} does not invert", dir);
        }
    }

    #[test]
    fn test_count() {
        assert_eq!(Direction::COUNT, 6);
        assert_eq!(Direction::ALL.len(), 6);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Direction::North), "N");
        assert_eq!(format!("{}", Direction::SouthWest), "SW");
    }
}
