//! # Core Types - Seats, Ranks, and the Game Aggregate
//!
//! ## Overview
//!
//! This module defines the data structures the rule engine operates on:
//!
//! 1. **`SeatId`** - the four fixed player identities in canonical turn order
//! 2. **`PieceRank`** - the demotion ladder queen > rook > bishop > knight > pawn
//! 3. **`Seat`** - one player slot: rank, board position, finishing place,
//!    and bishop color commitment
//! 4. **`BishopCounts`** - per-color tally of active committed bishops
//! 5. **`Game`** - the single authoritative aggregate owning all of the above
//!
//! ## Single-Writer Discipline
//!
//! All engine state lives inside one `Game` value. Every operation takes the
//! aggregate by reference and either applies its full effect or leaves the
//! state untouched; nothing outside the engine mutates it directly. The
//! aggregate also owns the engine's one random source, so randomized choices
//! (initial placement, redeployment) draw from a single seedable stream.

use std::str::FromStr;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, SquareColor};
use crate::constants::SEAT_COUNT;
use crate::error::GameError;
use crate::event_log::EventLog;
use crate::turn::GamePhase;

pub use crate::board::Square;

/// One of the four fixed seat identities, in canonical turn order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatId {
    Green,
    Blue,
    Red,
    Purple,
}

impl SeatId {
    /// All seats in turn order
    pub const ALL: [SeatId; SEAT_COUNT] = [SeatId::Green, SeatId::Blue, SeatId::Red, SeatId::Purple];

    /// Index of this seat in the canonical turn order
    #[inline]
    pub fn index(self) -> usize {
        match self {
            SeatId::Green => 0,
            SeatId::Blue => 1,
            SeatId::Red => 2,
            SeatId::Purple => 3,
        }
    }

    /// Display label shown to players
    pub fn label(self) -> &'static str {
        match self {
            SeatId::Green => "Green",
            SeatId::Blue => "Blue",
            SeatId::Red => "Red",
            SeatId::Purple => "Purple",
        }
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeatId::Green => write!(f, "green"),
            SeatId::Blue => write!(f, "blue"),
            SeatId::Red => write!(f, "red"),
            SeatId::Purple => write!(f, "purple"),
        }
    }
}

impl FromStr for SeatId {
    type Err = GameError;

    /// Parse a wire-format seat id (`"green"`, `"blue"`, `"red"`, `"purple"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(SeatId::Green),
            "blue" => Ok(SeatId::Blue),
            "red" => Ok(SeatId::Red),
            "purple" => Ok(SeatId::Purple),
            other => Err(GameError::UnknownSeat {
                id: other.to_string(),
            }),
        }
    }
}

/// A piece's current rank on the demotion ladder
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceRank {
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceRank {
    /// One step down the ladder; saturates at pawn
    ///
    /// Demotion is monotonic: ranks never upgrade and never skip a level.
    #[inline]
    pub fn demoted(self) -> PieceRank {
        match self {
            PieceRank::Queen => PieceRank::Rook,
            PieceRank::Rook => PieceRank::Bishop,
            PieceRank::Bishop => PieceRank::Knight,
            PieceRank::Knight => PieceRank::Pawn,
            PieceRank::Pawn => PieceRank::Pawn,
        }
    }
}

impl std::fmt::Display for PieceRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceRank::Queen => write!(f, "queen"),
            PieceRank::Rook => write!(f, "rook"),
            PieceRank::Bishop => write!(f, "bishop"),
            PieceRank::Knight => write!(f, "knight"),
            PieceRank::Pawn => write!(f, "pawn"),
        }
    }
}

/// One player slot and its piece-bearer
///
/// Invariants enforced by the engine operations:
/// - a seat with a finishing place has no board position and no bishop
///   commitment
/// - `bishop_color` is set only while `rank` is bishop
/// - `finished_place` is written exactly once per game
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seat {
    pub id: SeatId,
    pub rank: PieceRank,
    pub joined: bool,
    pub position: Option<Square>,
    pub finished_place: Option<u8>,
    pub bishop_color: Option<SquareColor>,
}

impl Seat {
    /// Fresh seat at game start: an unplaced queen, not yet joined
    pub fn new(id: SeatId) -> Self {
        Seat {
            id,
            rank: PieceRank::Queen,
            joined: false,
            position: None,
            finished_place: None,
            bishop_color: None,
        }
    }

    /// Whether this seat is still playing (no finishing place assigned)
    #[inline]
    pub fn is_active(&self) -> bool {
        self.finished_place.is_none()
    }
}

/// Per-color count of active bishops committed to that color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BishopCounts {
    pub light: u8,
    pub dark: u8,
}

impl BishopCounts {
    /// Count committed to a color
    #[inline]
    pub fn count(&self, color: SquareColor) -> u8 {
        match color {
            SquareColor::Light => self.light,
            SquareColor::Dark => self.dark,
        }
    }

    /// Record one more commitment to a color
    pub fn increment(&mut self, color: SquareColor) {
        match color {
            SquareColor::Light => self.light += 1,
            SquareColor::Dark => self.dark += 1,
        }
    }

    /// Release one commitment to a color; saturates at zero
    pub fn decrement(&mut self, color: SquareColor) {
        match color {
            SquareColor::Light => self.light = self.light.saturating_sub(1),
            SquareColor::Dark => self.dark = self.dark.saturating_sub(1),
        }
    }
}

/// Central authoritative game state
///
/// Owns the board, the four seats, the turn cursor, the finish order, the
/// bishop balance counters, the human-readable event log, and the engine's
/// random source. Created by [`crate::api::new_game`] and mutated only through
/// the operations in [`crate::api`].
#[derive(Clone, Debug)]
pub struct Game {
    pub board: Board,
    pub seats: [Seat; SEAT_COUNT],
    pub joined_count: u8,
    pub current_turn: usize,
    pub phase: GamePhase,
    pub finish_order: Vec<SeatId>,
    pub bishop_counts: BishopCounts,
    pub log: EventLog,
    pub(crate) rng: StdRng,
}

impl Game {
    /// Seat state for an id
    #[inline]
    pub fn seat(&self, id: SeatId) -> &Seat {
        &self.seats[id.index()]
    }

    /// Mutable seat state for an id
    #[inline]
    pub fn seat_mut(&mut self, id: SeatId) -> &mut Seat {
        &mut self.seats[id.index()]
    }

    /// The seat whose turn it currently is
    #[inline]
    pub fn current_seat(&self) -> &Seat {
        &self.seats[self.current_turn]
    }
}
