//! # Vision & Move Generation - Per-Rank Square Sets
//!
//! ## Overview
//!
//! Each seat controls exactly one piece, and that piece's current rank fixes
//! both what it can see (fog-of-war reveal) and where it may move. The two
//! computations share one geometry pass, selected by the `for_vision` flag:
//!
//! - **Queen / rook / bishop**: ray casts along the rank's direction set,
//!   stopping at the board edge or the first occupied square inclusive. The
//!   blocking square is always part of the result; it supplies both "I can
//!   capture there" and "I can see there".
//! - **Knight**: the eight L-shaped jumps; every in-bounds target counts,
//!   occupied or not.
//! - **Pawn**: mode-dependent. Vision reveals all eight neighbors; legal
//!   moves allow orthogonal steps onto empty squares only and diagonal steps
//!   onto opponent-occupied squares only.
//!
//! Legal-move mode finishes with a post-filter removing squares occupied by
//! the mover's own seat. With one piece per seat that square can only be the
//! origin, which no generator emits, but the filter keeps the invariant
//! explicit. Vision mode never filters: fog-of-war reveal must show every
//! piece within sight.
//!
//! A seat with no board position (finished, or displaced by a capture) yields
//! empty sets for both modes rather than an error.

pub mod knight;
pub mod pawn;
pub mod sliding;

use crate::bitset::SquareSet;
use crate::constants::{ALL_DIRECTIONS, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use crate::types::{Game, PieceRank, Seat};

/// Compute the square set for a seat's piece
///
/// # Arguments
///
/// * `game` - The game state (board occupancy drives ray blocking)
/// * `seat` - The seat whose piece is evaluated
/// * `for_vision` - `true` for the fog-of-war reveal set, `false` for the
///   legal destination set
pub fn piece_squares(game: &Game, seat: &Seat, for_vision: bool) -> SquareSet {
    let Some(origin) = seat.position else {
        return SquareSet::new();
    };

    let mut squares = SquareSet::new();
    match seat.rank {
        PieceRank::Queen => sliding::cast_rays(&game.board, origin, &ALL_DIRECTIONS, &mut squares),
        PieceRank::Rook => {
            sliding::cast_rays(&game.board, origin, &ORTHOGONAL_DIRECTIONS, &mut squares)
        }
        PieceRank::Bishop => {
            sliding::cast_rays(&game.board, origin, &DIAGONAL_DIRECTIONS, &mut squares)
        }
        PieceRank::Knight => knight::knight_targets(origin, &mut squares),
        PieceRank::Pawn => pawn::pawn_squares(&game.board, seat, origin, for_vision, &mut squares),
    }

    if !for_vision {
        squares = squares
            .iter()
            .filter(|square| game.board.get(*square) != Some(seat.id))
            .collect();
    }

    squares
}

/// Everything a seat can currently see: its piece's vision plus its own square
///
/// Finished or displaced seats see nothing.
pub fn visible_squares(game: &Game, seat: &Seat) -> SquareSet {
    let Some(origin) = seat.position else {
        return SquareSet::new();
    };
    let mut squares = piece_squares(game, seat, true);
    squares.insert(origin);
    squares
}

/// The seat's current legal destination set
pub fn legal_moves(game: &Game, seat: &Seat) -> SquareSet {
    piece_squares(game, seat, false)
}
