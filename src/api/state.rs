//! State queries and snapshot types
//!
//! The snapshot is the engine's full ground truth, serialized for the
//! transport layer. Fog-of-war redaction is deliberately not applied here:
//! per-seat redaction down to visible squares is the presentation layer's
//! job, driven by [`seat_visible_squares`].

use serde::{Deserialize, Serialize};

use crate::bitset::SquareSet;
use crate::board::{Square, SquareColor};
use crate::event_log::LogEntry;
use crate::move_gen;
use crate::types::{BishopCounts, Game, PieceRank, SeatId};

/// Wire view of one seat
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatSnapshot {
    pub id: SeatId,
    pub label: String,
    pub rank: PieceRank,
    pub joined: bool,
    pub position: Option<Square>,
    pub finished_place: Option<u8>,
    pub bishop_color: Option<SquareColor>,
}

/// Wire view of the entire game
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub seats: Vec<SeatSnapshot>,
    pub board: [[Option<SeatId>; 8]; 8],
    pub joined_count: u8,
    pub current_turn: usize,
    pub active: bool,
    pub finish_order: Vec<SeatId>,
    pub bishop_counts: BishopCounts,
    pub log: Vec<LogEntry>,
}

/// Full ground-truth snapshot of the game
pub fn snapshot(game: &Game) -> GameSnapshot {
    GameSnapshot {
        seats: game
            .seats
            .iter()
            .map(|seat| SeatSnapshot {
                id: seat.id,
                label: seat.id.label().to_string(),
                rank: seat.rank,
                joined: seat.joined,
                position: seat.position,
                finished_place: seat.finished_place,
                bishop_color: seat.bishop_color,
            })
            .collect(),
        board: game.board.grid(),
        joined_count: game.joined_count,
        current_turn: game.current_turn,
        active: game.phase.is_active(),
        finish_order: game.finish_order.clone(),
        bishop_counts: game.bishop_counts,
        log: game.log.entries().to_vec(),
    }
}

/// Squares a seat can currently see, for fog-of-war redaction
pub fn seat_visible_squares(game: &Game, seat: SeatId) -> SquareSet {
    move_gen::visible_squares(game, game.seat(seat))
}

/// Squares a seat may currently move or capture to
pub fn seat_legal_moves(game: &Game, seat: SeatId) -> SquareSet {
    move_gen::legal_moves(game, game.seat(seat))
}
