//! Move submission and validation
//!
//! The single mutating entry point for gameplay. Every request is validated
//! against the current board before anything changes: stale client-side move
//! sets are never trusted. A rejected request returns an error and leaves the
//! game untouched; an accepted request applies the full move outcome (board,
//! seat, counters, log) and advances the turn.

use tracing::debug;

use crate::board::Square;
use crate::capture::execute_move;
use crate::constants::BOARD_SIZE;
use crate::error::{GameError, GameResult};
use crate::move_gen::legal_moves;
use crate::turn::advance_turn;
use crate::types::{Game, SeatId};

/// Validate and apply a move request for `seat` to `(row, col)`
///
/// Accepted only when the game is active, it is this seat's turn, the seat
/// has not finished, and the destination is in the seat's current legal-move
/// set. On success the turn cursor advances to the next unfinished seat.
pub fn submit_move(game: &mut Game, seat: SeatId, row: u8, col: u8) -> GameResult<()> {
    if !game.phase.is_active() {
        debug!(%seat, "move rejected: game not active");
        return Err(GameError::GameNotActive);
    }

    let index = seat.index();
    if game.current_turn != index {
        debug!(%seat, "move rejected: not this seat's turn");
        return Err(GameError::NotYourTurn { seat });
    }
    if game.seats[index].finished_place.is_some() {
        debug!(%seat, "move rejected: seat already finished");
        return Err(GameError::SeatFinished { seat });
    }
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        debug!(%seat, row, col, "move rejected: out of bounds");
        return Err(GameError::OutOfBounds { row, col });
    }

    let dest = Square::new(row, col);
    let legal = legal_moves(game, &game.seats[index]);
    if !legal.contains(dest) {
        debug!(%seat, %dest, "move rejected: not a legal destination");
        return Err(GameError::IllegalDestination { dest });
    }

    execute_move(game, index, dest);
    advance_turn(game);
    Ok(())
}
