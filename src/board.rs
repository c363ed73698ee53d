//! Board representation and square utilities
//!
//! Provides the fundamental board operations used throughout the engine:
//! - Square coordinates, bounds checking, and algebraic naming
//! - Square color (light/dark) queries
//! - Outer-ring membership
//! - Occupancy queries and mutation

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, RING_INDICES, SQUARE_COUNT};
use crate::types::SeatId;

/// The color of a board square, checkerboard-alternating
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SquareColor {
    Light,
    Dark,
}

impl SquareColor {
    /// The other color
    #[inline]
    pub fn opposite(self) -> SquareColor {
        match self {
            SquareColor::Light => SquareColor::Dark,
            SquareColor::Dark => SquareColor::Light,
        }
    }
}

impl std::fmt::Display for SquareColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SquareColor::Light => write!(f, "light"),
            SquareColor::Dark => write!(f, "dark"),
        }
    }
}

/// A board coordinate, `row` and `col` both in `0..8`
///
/// Row 0 is the top rank from the canonical viewing direction, so the
/// algebraic name of `(0, 0)` is `a8` and `(7, 7)` is `h1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Create a square from row and column
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Square { row, col }
    }

    /// Linear index into a 64-entry board array
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Inverse of [`Square::index`]
    #[inline]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < SQUARE_COUNT);
        Square {
            row: (index / BOARD_SIZE as usize) as u8,
            col: (index % BOARD_SIZE as usize) as u8,
        }
    }

    /// Checkerboard color of this square
    #[inline]
    pub fn color(self) -> SquareColor {
        if (self.row + self.col) % 2 == 0 {
            SquareColor::Light
        } else {
            SquareColor::Dark
        }
    }

    /// Whether this square lies on the outer ring (row 0/7 or column 0/7)
    #[inline]
    pub fn is_ring(self) -> bool {
        RING_INDICES.contains(&self.row) || RING_INDICES.contains(&self.col)
    }

    /// Step by a `(row, col)` delta, returning `None` when leaving the board
    #[inline]
    pub fn offset(self, row_delta: i8, col_delta: i8) -> Option<Square> {
        let row = self.row as i8 + row_delta;
        let col = self.col as i8 + col_delta;
        if row >= 0 && row < BOARD_SIZE as i8 && col >= 0 && col < BOARD_SIZE as i8 {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Square {
    /// Algebraic coordinate, e.g. `e4`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col) as char,
            BOARD_SIZE - self.row
        )
    }
}

/// The 8x8 board: each square holds at most one seat identifier
///
/// Stored as a flat 64-entry array indexed by [`Square::index`]. The occupied
/// squares correspond one-to-one with the active seats' recorded positions,
/// with the single deliberate exception of capture victims (see `capture.rs`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<SeatId>; SQUARE_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn empty() -> Self {
        Board {
            squares: [None; SQUARE_COUNT],
        }
    }

    /// Occupant of a square, if any
    #[inline]
    pub fn get(&self, square: Square) -> Option<SeatId> {
        self.squares[square.index()]
    }

    /// Place a seat's piece on a square
    #[inline]
    pub fn set(&mut self, square: Square, seat: SeatId) {
        self.squares[square.index()] = Some(seat);
    }

    /// Remove any occupant from a square
    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.squares[square.index()] = None;
    }

    /// Whether a square has no occupant
    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Whether a square has an occupant
    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.squares[square.index()].is_some()
    }

    /// All outer-ring squares in row-major order
    pub fn ring_squares() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT)
            .map(Square::from_index)
            .filter(|square| square.is_ring())
    }

    /// Nested 8x8 view of the board for snapshots
    pub fn grid(&self) -> [[Option<SeatId>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for (index, occupant) in self.squares.iter().enumerate() {
            let square = Square::from_index(index);
            grid[square.row as usize][square.col as usize] = *occupant;
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}
