//! Error types for the rule engine
//!
//! Every rejected operation returns an error and leaves the game state
//! unchanged. Nothing here is fatal: callers are expected to drop the error
//! (the transport treats rejections as silent no-ops) or surface it while the
//! client re-derives from a fresh snapshot.

use thiserror::Error;

use crate::board::Square;
use crate::types::SeatId;

/// Errors that can occur when an engine operation is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Seat id not part of the roster (transport-side parse failure)
    #[error("unknown seat id: {id}")]
    UnknownSeat { id: String },

    /// Join request for a seat that already joined
    #[error("seat {seat} has already joined")]
    AlreadyJoined { seat: SeatId },

    /// Disconnect request for a seat that never joined
    #[error("seat {seat} has not joined")]
    NotJoined { seat: SeatId },

    /// Move request while the game is in the lobby or already finished
    #[error("game is not active")]
    GameNotActive,

    /// Move request from a seat other than the one at the turn cursor
    #[error("it is not {seat}'s turn")]
    NotYourTurn { seat: SeatId },

    /// Move request from a seat that already holds a finishing place
    #[error("seat {seat} has already finished")]
    SeatFinished { seat: SeatId },

    /// Requested destination lies outside the board
    #[error("square ({row}, {col}) is out of bounds")]
    OutOfBounds { row: u8, col: u8 },

    /// Requested destination is not in the seat's current legal-move set
    #[error("destination {dest} is not a legal move")]
    IllegalDestination { dest: Square },
}

/// Result type alias for engine operations
pub type GameResult<T> = Result<T, GameError>;
