//! Pawn square generation
//!
//! Pawns are the one rank whose geometry depends on the computation mode.
//!
//! ## Vision
//!
//! A pawn sees all eight neighboring squares, occupied or not.
//!
//! ## Legal moves
//!
//! - **Orthogonal neighbors** are destinations only when empty; there is no
//!   orthogonal capture.
//! - **Diagonal neighbors** are destinations only when occupied by an
//!   opponent; an empty diagonal square is not a move.
//!
//! Pawns here have no forward direction: all four seats' pawns move
//! omnidirectionally one step.

use crate::bitset::SquareSet;
use crate::board::{Board, Square};
use crate::constants::{ALL_DIRECTIONS, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use crate::types::Seat;

/// Collect a pawn's squares from `origin` into `out`
pub fn pawn_squares(board: &Board, seat: &Seat, origin: Square, for_vision: bool, out: &mut SquareSet) {
    if for_vision {
        for &(row_delta, col_delta) in &ALL_DIRECTIONS {
            if let Some(target) = origin.offset(row_delta, col_delta) {
                out.insert(target);
            }
        }
        return;
    }

    for &(row_delta, col_delta) in &ORTHOGONAL_DIRECTIONS {
        if let Some(target) = origin.offset(row_delta, col_delta) {
            if board.is_empty_at(target) {
                out.insert(target);
            }
        }
    }

    for &(row_delta, col_delta) in &DIAGONAL_DIRECTIONS {
        if let Some(target) = origin.offset(row_delta, col_delta) {
            if let Some(occupant) = board.get(target) {
                if occupant != seat.id {
                    out.insert(target);
                }
            }
        }
    }
}
