//! Outer-ring placement and redeployment
//!
//! ## Redeployment
//!
//! After a demotion (and after a bishop color reassignment) the piece returns
//! to the board's outer ring on a square no active opponent can currently
//! see. The safety constraint is best-effort: when no hidden square exists
//! the piece takes any unoccupied ring square, and in the degenerate case of
//! a fully occupied ring it takes the fixed fallback square. The mover's old
//! square is vacated before candidates are gathered, so it is itself a valid
//! landing spot and opponent rays pass through it.
//!
//! ## Initial placement
//!
//! When the game starts, the four queens are placed on ring squares by
//! rejection sampling: random squares on the two ring rows, rejecting
//! duplicates and any square that shares a row, column, or diagonal with an
//! already placed queen. Seats still unplaced when the attempt cap runs
//! out take a fixed per-seat fallback square, keeping startup deterministic
//! in the worst case.

use rand::Rng;

use crate::board::{Board, Square, SquareColor};
use crate::constants::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, RING_INDICES, SEAT_COUNT};
use crate::move_gen::visible_squares;
use crate::types::{Game, SeatId};

/// Fixed deterministic ring square for a seat index
///
/// Alternates between the two ring rows and walks the columns, so the four
/// seat fallbacks are distinct.
pub fn fallback_edge_square(index: usize) -> Square {
    Square::new(
        RING_INDICES[index % RING_INDICES.len()],
        (index % BOARD_SIZE as usize) as u8,
    )
}

/// Whether any active opponent of `mover` can currently see `square`
fn visible_to_any_opponent(game: &Game, square: Square, mover: SeatId) -> bool {
    game.seats.iter().any(|opponent| {
        opponent.id != mover
            && opponent.is_active()
            && opponent.position.is_some()
            && visible_squares(game, opponent).contains(square)
    })
}

/// Move a seat's piece to a ring square, preferring squares hidden from all
/// active opponents
///
/// With `color_constraint` set, candidates are first restricted to ring
/// squares of that color. Both the visibility and color constraints are
/// dropped together on the fallback pass. Returns the chosen square, or
/// `None` when the seat has no piece on the board.
pub fn relocate_to_ring(
    game: &mut Game,
    seat_index: usize,
    color_constraint: Option<SquareColor>,
) -> Option<Square> {
    let old = game.seats[seat_index].position?;
    let mover = game.seats[seat_index].id;
    game.board.clear(old);

    let mut candidates: Vec<Square> = Board::ring_squares()
        .filter(|square| game.board.is_empty_at(*square))
        .filter(|square| color_constraint.map_or(true, |color| square.color() == color))
        .filter(|square| !visible_to_any_opponent(game, *square, mover))
        .collect();

    if candidates.is_empty() {
        candidates = Board::ring_squares()
            .filter(|square| game.board.is_empty_at(*square))
            .collect();
    }

    let chosen = if candidates.is_empty() {
        fallback_edge_square(0)
    } else {
        candidates[game.rng.random_range(0..candidates.len())]
    };

    game.seats[seat_index].position = Some(chosen);
    game.board.set(chosen, mover);
    Some(chosen)
}

/// Whether two squares share a row, column, or diagonal
///
/// Blind queen-geometry check used during initial placement; occupancy is
/// irrelevant because the board is still empty.
fn queen_aligned(a: Square, b: Square) -> bool {
    let row_delta = b.row as i8 - a.row as i8;
    let col_delta = b.col as i8 - a.col as i8;
    row_delta == 0 || col_delta == 0 || row_delta.abs() == col_delta.abs()
}

/// Place the four starting queens on mutually non-visible ring squares
pub fn place_initial_queens(game: &mut Game) {
    let mut positions: Vec<Square> = Vec::with_capacity(SEAT_COUNT);
    let mut attempts = 0;

    while positions.len() < SEAT_COUNT && attempts < MAX_PLACEMENT_ATTEMPTS {
        attempts += 1;
        let row = RING_INDICES[game.rng.random_range(0..RING_INDICES.len())];
        let col = game.rng.random_range(0..BOARD_SIZE);
        let candidate = Square::new(row, col);

        if positions.contains(&candidate) {
            continue;
        }
        if positions.iter().any(|placed| queen_aligned(*placed, candidate)) {
            continue;
        }
        positions.push(candidate);
    }

    for index in 0..SEAT_COUNT {
        let square = positions
            .get(index)
            .copied()
            .unwrap_or_else(|| fallback_edge_square(index));
        let id = game.seats[index].id;
        game.seats[index].position = Some(square);
        game.board.set(square, id);
    }
}
